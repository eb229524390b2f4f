//! Base credit calculation.
//!
//! Every net additional worker earns the base per-head amount.

use crate::error::EngineResult;
use crate::models::{AuditStep, RateSchedule};

use super::component::{CreditComponentResult, price_heads};

/// Calculates the base credit for a net total increase.
///
/// # Errors
///
/// Returns `CalculationError` if the product overflows.
///
/// # Examples
///
/// ```
/// use employment_credit::calculation::calculate_base_credit;
/// use employment_credit::models::RateSchedule;
///
/// let result = calculate_base_credit(4, &RateSchedule::default(), 3).unwrap();
/// assert_eq!(result.amount, 20_000_000);
/// ```
pub fn calculate_base_credit(
    net_total_increase: u64,
    rates: &RateSchedule,
    step_number: u32,
) -> EngineResult<CreditComponentResult> {
    let amount = price_heads("base credit", net_total_increase, rates.base_per_head)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_credit".to_string(),
        rule_name: "Base Credit".to_string(),
        input: serde_json::json!({
            "net_total_increase": net_total_increase,
            "base_per_head": rates.base_per_head
        }),
        output: serde_json::json!({
            "amount": amount
        }),
        reasoning: format!(
            "{} net additional workers × {} = {}",
            net_total_increase, rates.base_per_head, amount
        ),
    };

    Ok(CreditComponentResult { amount, audit_step })
}
