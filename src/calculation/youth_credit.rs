//! Youth bonus calculation.
//!
//! This module prices the capped youth increase at the youth bonus rate. The
//! bonus is paid on top of the base credit those same workers already earn.

use crate::error::EngineResult;
use crate::models::{AuditStep, RateSchedule};

use super::component::{CreditComponentResult, price_heads};

/// Calculates the youth bonus for a net youth increase.
///
/// `net_youth_increase` must already be capped at the net total increase;
/// see [`calculate_net_increase`](super::calculate_net_increase).
///
/// # Errors
///
/// Returns `CalculationError` if the product overflows.
///
/// # Examples
///
/// ```
/// use employment_credit::calculation::calculate_youth_credit;
/// use employment_credit::models::RateSchedule;
///
/// let result = calculate_youth_credit(2, &RateSchedule::default(), 4).unwrap();
/// assert_eq!(result.amount, 14_000_000);
/// ```
pub fn calculate_youth_credit(
    net_youth_increase: u64,
    rates: &RateSchedule,
    step_number: u32,
) -> EngineResult<CreditComponentResult> {
    let amount = price_heads(
        "youth credit",
        net_youth_increase,
        rates.youth_bonus_per_head,
    )?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "youth_credit".to_string(),
        rule_name: "Youth Bonus".to_string(),
        input: serde_json::json!({
            "net_youth_increase": net_youth_increase,
            "youth_bonus_per_head": rates.youth_bonus_per_head
        }),
        output: serde_json::json!({
            "amount": amount
        }),
        reasoning: format!(
            "{} net additional youth workers × {} = {}",
            net_youth_increase, rates.youth_bonus_per_head, amount
        ),
    };

    Ok(CreditComponentResult { amount, audit_step })
}
