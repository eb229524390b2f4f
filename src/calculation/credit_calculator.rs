//! Credit aggregation.
//!
//! This module runs the individual rules in order and assembles their outputs
//! into a [`CalculationResult`].

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, CalculationResult, RateSchedule, WorkforceSnapshot};

use super::component::price_heads;
use super::{
    NetIncrease, ValidatedHeadcounts, calculate_base_credit, calculate_net_increase,
    calculate_non_metro_credit, calculate_youth_credit, check_headcounts, derive_net_increase,
    validate_headcounts,
};

/// A calculation result together with the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct AuditedCalculation {
    /// The calculation result.
    pub result: CalculationResult,
    /// One step per rule, in the order the rules ran.
    pub steps: Vec<AuditStep>,
    /// Warnings raised along the way.
    pub warnings: Vec<AuditWarning>,
}

/// Computes the employment increase credit.
///
/// No audit trace is built; use [`compute_with_audit`] for one.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] if any headcount is negative; nothing
/// is computed in that case. Returns [`EngineError::CalculationError`] if a
/// credit amount overflows `u64`.
///
/// # Examples
///
/// ```
/// use employment_credit::calculation::compute;
/// use employment_credit::models::RateSchedule;
///
/// let result = compute(18, 5, 20, 7, false, &RateSchedule::default()).unwrap();
/// assert_eq!(result.net_total_increase, 4);
/// assert_eq!(result.net_youth_increase, 2);
/// assert_eq!(result.total_credit, 34_000_000);
/// ```
pub fn compute(
    prior_regular: i64,
    prior_youth: i64,
    current_regular: i64,
    current_youth: i64,
    is_non_metro: bool,
    rates: &RateSchedule,
) -> EngineResult<CalculationResult> {
    let snapshot =
        WorkforceSnapshot::new(prior_regular, prior_youth, current_regular, current_youth);
    let headcounts = check_headcounts(&snapshot)?;
    let increase = derive_net_increase(&headcounts);

    let base = price_heads("base credit", increase.net_total_increase, rates.base_per_head)?;
    let youth = price_heads(
        "youth credit",
        increase.net_youth_increase,
        rates.youth_bonus_per_head,
    )?;
    let non_metro = if is_non_metro {
        price_heads(
            "non-metro credit",
            increase.net_total_increase,
            rates.non_metro_bonus_per_head,
        )?
    } else {
        0
    };

    assemble_result(&headcounts, &increase, base, youth, non_metro)
}

/// Sums the three components and fills in the result.
fn assemble_result(
    headcounts: &ValidatedHeadcounts,
    increase: &NetIncrease,
    base_credit: u64,
    youth_credit: u64,
    non_metro_credit: u64,
) -> EngineResult<CalculationResult> {
    let total_credit = base_credit
        .checked_add(youth_credit)
        .and_then(|sum| sum.checked_add(non_metro_credit))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "total credit overflowed: {} + {} + {}",
                base_credit, youth_credit, non_metro_credit
            ),
        })?;

    Ok(CalculationResult {
        total_headcount_prior: increase.total_prior,
        total_headcount_current: increase.total_current,
        net_total_increase: increase.net_total_increase,
        youth_prior: headcounts.prior_youth,
        youth_current: headcounts.current_youth,
        net_youth_increase: increase.net_youth_increase,
        base_credit,
        youth_credit,
        non_metro_credit,
        total_credit,
    })
}

/// Computes the credit and records an audit step for every rule.
///
/// Steps are numbered from `first_step`. The result is identical to
/// [`compute`] for the same inputs.
///
/// # Errors
///
/// Same as [`compute`].
pub fn compute_with_audit(
    snapshot: &WorkforceSnapshot,
    is_non_metro: bool,
    rates: &RateSchedule,
    first_step: u32,
) -> EngineResult<AuditedCalculation> {
    let mut steps = Vec::with_capacity(5);
    let mut warnings = Vec::new();
    let mut step_number = first_step;

    let validation = validate_headcounts(snapshot, step_number)?;
    let headcounts = validation.headcounts;
    steps.push(validation.audit_step);
    step_number += 1;

    let increase = calculate_net_increase(&headcounts, step_number);
    let derived = increase.increase();
    steps.push(increase.audit_step);
    step_number += 1;

    if increase.net_total_increase == 0 {
        warnings.push(AuditWarning {
            code: "NO_NET_INCREASE".to_string(),
            message: format!(
                "Total headcount did not grow ({} -> {}); no credit is earned",
                increase.total_prior, increase.total_current
            ),
            severity: "low".to_string(),
        });
    }
    if increase.youth_cap_applied {
        warnings.push(AuditWarning {
            code: "YOUTH_INCREASE_CAPPED".to_string(),
            message: format!(
                "Youth increase of {} capped at the net total increase of {}",
                increase.raw_youth_increase, increase.net_total_increase
            ),
            severity: "low".to_string(),
        });
    }

    let base = calculate_base_credit(increase.net_total_increase, rates, step_number)?;
    steps.push(base.audit_step);
    step_number += 1;

    let youth = calculate_youth_credit(increase.net_youth_increase, rates, step_number)?;
    steps.push(youth.audit_step);
    step_number += 1;

    let non_metro =
        calculate_non_metro_credit(increase.net_total_increase, is_non_metro, rates, step_number)?;
    steps.push(non_metro.audit_step);

    let result = assemble_result(
        &headcounts,
        &derived,
        base.amount,
        youth.amount,
        non_metro.amount,
    )?;

    Ok(AuditedCalculation {
        result,
        steps,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeadcountField;

    fn rates() -> RateSchedule {
        RateSchedule::new(5_000_000, 7_000_000, 2_000_000)
    }

    #[test]
    fn test_scenario_a_metro() {
        let result = compute(18, 5, 20, 7, false, &rates()).unwrap();

        assert_eq!(
            result,
            CalculationResult {
                total_headcount_prior: 23,
                total_headcount_current: 27,
                net_total_increase: 4,
                youth_prior: 5,
                youth_current: 7,
                net_youth_increase: 2,
                base_credit: 20_000_000,
                youth_credit: 14_000_000,
                non_metro_credit: 0,
                total_credit: 34_000_000,
            }
        );
    }

    #[test]
    fn test_scenario_b_non_metro() {
        let result = compute(18, 5, 20, 7, true, &rates()).unwrap();

        assert_eq!(result.non_metro_credit, 8_000_000);
        assert_eq!(result.total_credit, 42_000_000);
    }

    #[test]
    fn test_scenario_c_youth_cap() {
        let result = compute(18, 5, 16, 8, false, &rates()).unwrap();

        assert_eq!(result.total_headcount_prior, 23);
        assert_eq!(result.total_headcount_current, 24);
        assert_eq!(result.net_total_increase, 1);
        assert_eq!(result.net_youth_increase, 1);
        assert_eq!(result.base_credit, 5_000_000);
        assert_eq!(result.youth_credit, 7_000_000);
        assert_eq!(result.total_credit, 12_000_000);
    }

    #[test]
    fn test_scenario_d_decrease() {
        let result = compute(10, 10, 10, 5, true, &rates()).unwrap();

        assert_eq!(result.net_total_increase, 0);
        assert_eq!(result.net_youth_increase, 0);
        assert_eq!(result.base_credit, 0);
        assert_eq!(result.non_metro_credit, 0);
        assert_eq!(result.total_credit, 0);
    }

    #[test]
    fn test_negative_input_produces_no_result() {
        match compute(-1, 5, 20, 7, false, &rates()).unwrap_err() {
            EngineError::Validation { field, value } => {
                assert_eq!(field, HeadcountField::PriorRegular);
                assert_eq!(value, -1);
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_steps_in_rule_order() {
        let snapshot = WorkforceSnapshot::new(18, 5, 20, 7);
        let audited = compute_with_audit(&snapshot, true, &rates(), 1).unwrap();

        let rule_ids: Vec<&str> = audited.steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec![
                "headcount_validation",
                "net_increase",
                "base_credit",
                "youth_credit",
                "non_metro_credit"
            ]
        );
        let numbers: Vec<u32> = audited.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(audited.warnings.is_empty());
    }

    #[test]
    fn test_audit_steps_start_at_first_step() {
        let snapshot = WorkforceSnapshot::new(1, 0, 2, 0);
        let audited = compute_with_audit(&snapshot, false, &rates(), 10).unwrap();

        assert_eq!(audited.steps.first().unwrap().step_number, 10);
        assert_eq!(audited.steps.last().unwrap().step_number, 14);
    }

    #[test]
    fn test_audited_result_matches_compute() {
        let snapshot = WorkforceSnapshot::new(18, 5, 16, 8);
        let audited = compute_with_audit(&snapshot, true, &rates(), 1).unwrap();
        let plain = compute(18, 5, 16, 8, true, &rates()).unwrap();

        assert_eq!(audited.result, plain);
    }

    #[test]
    fn test_audited_overflow_matches_compute() {
        let huge = RateSchedule::new(u64::MAX, 1, 1);
        let snapshot = WorkforceSnapshot::new(0, 0, 2, 0);

        assert!(matches!(
            compute_with_audit(&snapshot, false, &huge, 1),
            Err(EngineError::CalculationError { .. })
        ));
        assert!(matches!(
            compute(0, 0, 2, 0, false, &huge),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_youth_cap_raises_warning() {
        let snapshot = WorkforceSnapshot::new(18, 5, 16, 8);
        let audited = compute_with_audit(&snapshot, false, &rates(), 1).unwrap();

        assert_eq!(audited.warnings.len(), 1);
        assert_eq!(audited.warnings[0].code, "YOUTH_INCREASE_CAPPED");
    }

    #[test]
    fn test_no_increase_raises_warning() {
        let snapshot = WorkforceSnapshot::new(10, 10, 10, 5);
        let audited = compute_with_audit(&snapshot, false, &rates(), 1).unwrap();

        let codes: Vec<&str> = audited.warnings.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(codes, vec!["NO_NET_INCREASE"]);
    }

    #[test]
    fn test_youth_rise_with_total_fall_warns_twice() {
        let snapshot = WorkforceSnapshot::new(20, 2, 10, 6);
        let audited = compute_with_audit(&snapshot, false, &rates(), 1).unwrap();

        assert_eq!(audited.result.net_youth_increase, 0);
        assert_eq!(audited.result.total_credit, 0);
        assert_eq!(audited.warnings.len(), 2);
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let huge = RateSchedule::new(u64::MAX / 2, u64::MAX / 2, u64::MAX / 2);
        let result = compute(0, 0, 1, 1, true, &huge);

        assert!(matches!(
            result,
            Err(EngineError::CalculationError { .. })
        ));
    }
}
