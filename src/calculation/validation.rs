//! Headcount validation.
//!
//! This module rejects negative headcounts before anything is computed and
//! hands the later steps counts that are known to be non-negative.

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, WorkforceSnapshot};

/// Headcounts that passed validation.
///
/// Built by [`check_headcounts`] once every count is known to be
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedHeadcounts {
    /// Regular workers in the prior year.
    pub prior_regular: u64,
    /// Youth workers in the prior year.
    pub prior_youth: u64,
    /// Regular workers in the current year.
    pub current_regular: u64,
    /// Youth workers in the current year.
    pub current_youth: u64,
}

/// The result of validating headcounts, including the audit step.
#[derive(Debug, Clone)]
pub struct HeadcountValidationResult {
    /// The validated counts.
    pub headcounts: ValidatedHeadcounts,
    /// The audit step recording this validation.
    pub audit_step: AuditStep,
}

/// Checks that all four headcounts are non-negative, without recording an
/// audit step.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] for the first negative input, in the
/// order prior regular, prior youth, current regular, current youth.
pub fn check_headcounts(snapshot: &WorkforceSnapshot) -> EngineResult<ValidatedHeadcounts> {
    if let Some((field, value)) = snapshot.first_negative() {
        return Err(EngineError::Validation { field, value });
    }

    Ok(ValidatedHeadcounts {
        prior_regular: snapshot.prior_regular.unsigned_abs(),
        prior_youth: snapshot.prior_youth.unsigned_abs(),
        current_regular: snapshot.current_regular.unsigned_abs(),
        current_youth: snapshot.current_youth.unsigned_abs(),
    })
}

/// Checks that all four headcounts are non-negative and records the check.
///
/// Inputs are checked in the order prior regular, prior youth, current
/// regular, current youth; the first negative one is reported.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] naming the offending input.
///
/// # Examples
///
/// ```
/// use employment_credit::calculation::validate_headcounts;
/// use employment_credit::error::EngineError;
/// use employment_credit::models::WorkforceSnapshot;
///
/// let ok = validate_headcounts(&WorkforceSnapshot::new(18, 5, 20, 7), 1).unwrap();
/// assert_eq!(ok.headcounts.current_youth, 7);
///
/// let err = validate_headcounts(&WorkforceSnapshot::new(-1, 5, 20, 7), 1).unwrap_err();
/// assert!(matches!(err, EngineError::Validation { value: -1, .. }));
/// ```
pub fn validate_headcounts(
    snapshot: &WorkforceSnapshot,
    step_number: u32,
) -> EngineResult<HeadcountValidationResult> {
    let headcounts = check_headcounts(snapshot)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "headcount_validation".to_string(),
        rule_name: "Headcount Validation".to_string(),
        input: serde_json::json!({
            "prior_regular": snapshot.prior_regular,
            "prior_youth": snapshot.prior_youth,
            "current_regular": snapshot.current_regular,
            "current_youth": snapshot.current_youth
        }),
        output: serde_json::json!({
            "valid": true
        }),
        reasoning: "All four headcounts are non-negative".to_string(),
    };

    Ok(HeadcountValidationResult {
        headcounts,
        audit_step,
    })
}
