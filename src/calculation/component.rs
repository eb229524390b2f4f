//! Shared pieces of the three credit component rules.

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The amount of one credit component, including the audit step.
#[derive(Debug, Clone)]
pub struct CreditComponentResult {
    /// The credit amount for this component.
    pub amount: u64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Multiplies a head count by a per-head rate.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the product does not fit in
/// a `u64`.
pub(crate) fn price_heads(component: &str, heads: u64, per_head: u64) -> EngineResult<u64> {
    heads
        .checked_mul(per_head)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{component} overflowed: {heads} × {per_head}"),
        })
}
