//! Net headcount increase derivation.
//!
//! This module derives the year-over-year growth in total headcount and in
//! youth headcount, and caps the youth growth at the total growth.

use crate::models::AuditStep;

use super::ValidatedHeadcounts;

/// The derived increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetIncrease {
    /// Regular plus youth workers in the prior year.
    pub total_prior: u64,
    /// Regular plus youth workers in the current year.
    pub total_current: u64,
    /// Growth in total headcount, floored at zero.
    pub net_total_increase: u64,
    /// Growth in youth headcount floored at zero, before the cap.
    pub raw_youth_increase: u64,
    /// Growth in youth headcount after capping at `net_total_increase`.
    pub net_youth_increase: u64,
    /// Whether the cap reduced the youth increase.
    pub youth_cap_applied: bool,
}

/// Derives the net total and net youth increases without an audit step.
///
/// A decrease or no change yields zero, never a negative increase. The youth
/// increase is then capped at the total increase: youth growth only counts
/// toward the bonus when it is part of the overall growth, so a youth
/// increase offset by a fall elsewhere is cut back to the total.
pub fn derive_net_increase(headcounts: &ValidatedHeadcounts) -> NetIncrease {
    // Validated counts fit in i64, so these sums cannot overflow u64.
    let total_prior = headcounts.prior_regular + headcounts.prior_youth;
    let total_current = headcounts.current_regular + headcounts.current_youth;

    let net_total_increase = total_current.saturating_sub(total_prior);
    let raw_youth_increase = headcounts
        .current_youth
        .saturating_sub(headcounts.prior_youth);
    let net_youth_increase = raw_youth_increase.min(net_total_increase);

    NetIncrease {
        total_prior,
        total_current,
        net_total_increase,
        raw_youth_increase,
        net_youth_increase,
        youth_cap_applied: net_youth_increase < raw_youth_increase,
    }
}

/// The derived increases, including the audit step.
#[derive(Debug, Clone)]
pub struct NetIncreaseResult {
    /// Regular plus youth workers in the prior year.
    pub total_prior: u64,
    /// Regular plus youth workers in the current year.
    pub total_current: u64,
    /// Growth in total headcount, floored at zero.
    pub net_total_increase: u64,
    /// Growth in youth headcount floored at zero, before the cap.
    pub raw_youth_increase: u64,
    /// Growth in youth headcount after capping at `net_total_increase`.
    pub net_youth_increase: u64,
    /// Whether the cap reduced the youth increase.
    pub youth_cap_applied: bool,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

impl NetIncreaseResult {
    /// Returns the derived increases without the audit step.
    pub fn increase(&self) -> NetIncrease {
        NetIncrease {
            total_prior: self.total_prior,
            total_current: self.total_current,
            net_total_increase: self.net_total_increase,
            raw_youth_increase: self.raw_youth_increase,
            net_youth_increase: self.net_youth_increase,
            youth_cap_applied: self.youth_cap_applied,
        }
    }
}

/// Derives the net total and net youth increases and records the
/// derivation; see [`derive_net_increase`].
///
/// # Examples
///
/// ```
/// use employment_credit::calculation::{calculate_net_increase, validate_headcounts};
/// use employment_credit::models::WorkforceSnapshot;
///
/// let validated = validate_headcounts(&WorkforceSnapshot::new(18, 5, 16, 8), 1).unwrap();
/// let result = calculate_net_increase(&validated.headcounts, 2);
///
/// assert_eq!(result.net_total_increase, 1);
/// assert_eq!(result.raw_youth_increase, 3);
/// assert_eq!(result.net_youth_increase, 1);
/// assert!(result.youth_cap_applied);
/// ```
pub fn calculate_net_increase(
    headcounts: &ValidatedHeadcounts,
    step_number: u32,
) -> NetIncreaseResult {
    let NetIncrease {
        total_prior,
        total_current,
        net_total_increase,
        raw_youth_increase,
        net_youth_increase,
        youth_cap_applied,
    } = derive_net_increase(headcounts);

    let reasoning = if youth_cap_applied {
        format!(
            "Total headcount {} -> {} gives net increase {}; youth {} -> {} gives {} (capped at net increase {})",
            total_prior,
            total_current,
            net_total_increase,
            headcounts.prior_youth,
            headcounts.current_youth,
            raw_youth_increase,
            net_youth_increase
        )
    } else {
        format!(
            "Total headcount {} -> {} gives net increase {}; youth {} -> {} gives {}",
            total_prior,
            total_current,
            net_total_increase,
            headcounts.prior_youth,
            headcounts.current_youth,
            net_youth_increase
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_increase".to_string(),
        rule_name: "Net Headcount Increase".to_string(),
        input: serde_json::json!({
            "prior_regular": headcounts.prior_regular,
            "prior_youth": headcounts.prior_youth,
            "current_regular": headcounts.current_regular,
            "current_youth": headcounts.current_youth
        }),
        output: serde_json::json!({
            "total_prior": total_prior,
            "total_current": total_current,
            "net_total_increase": net_total_increase,
            "raw_youth_increase": raw_youth_increase,
            "net_youth_increase": net_youth_increase,
            "youth_cap_applied": youth_cap_applied
        }),
        reasoning,
    };

    NetIncreaseResult {
        total_prior,
        total_current,
        net_total_increase,
        raw_youth_increase,
        net_youth_increase,
        youth_cap_applied,
        audit_step,
    }
}
