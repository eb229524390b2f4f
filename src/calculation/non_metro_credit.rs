//! Regional (non-metro) bonus calculation.
//!
//! Workplaces outside the metro region earn an extra per-head amount on the
//! whole net total increase, not just the youth part of it.

use crate::error::EngineResult;
use crate::models::{AuditStep, RateSchedule};

use super::component::{CreditComponentResult, price_heads};

/// Calculates the regional bonus.
///
/// Metro workplaces get zero regardless of the increase.
///
/// # Errors
///
/// Returns `CalculationError` if the product overflows.
///
/// # Examples
///
/// ```
/// use employment_credit::calculation::calculate_non_metro_credit;
/// use employment_credit::models::RateSchedule;
///
/// let rates = RateSchedule::default();
/// assert_eq!(calculate_non_metro_credit(4, true, &rates, 5).unwrap().amount, 8_000_000);
/// assert_eq!(calculate_non_metro_credit(4, false, &rates, 5).unwrap().amount, 0);
/// ```
pub fn calculate_non_metro_credit(
    net_total_increase: u64,
    is_non_metro: bool,
    rates: &RateSchedule,
    step_number: u32,
) -> EngineResult<CreditComponentResult> {
    let (amount, reasoning) = if is_non_metro {
        let amount = price_heads(
            "non-metro credit",
            net_total_increase,
            rates.non_metro_bonus_per_head,
        )?;
        let reasoning = format!(
            "Non-metro workplace: {} net additional workers × {} = {}",
            net_total_increase, rates.non_metro_bonus_per_head, amount
        );
        (amount, reasoning)
    } else {
        (0, "Metro workplace - not eligible for the regional bonus".to_string())
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "non_metro_credit".to_string(),
        rule_name: "Regional Bonus".to_string(),
        input: serde_json::json!({
            "net_total_increase": net_total_increase,
            "is_non_metro": is_non_metro,
            "non_metro_bonus_per_head": rates.non_metro_bonus_per_head
        }),
        output: serde_json::json!({
            "eligible": is_non_metro,
            "amount": amount
        }),
        reasoning,
    };

    Ok(CreditComponentResult { amount, audit_step })
}
