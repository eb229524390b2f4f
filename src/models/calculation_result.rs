//! Calculation result models for the employment credit engine.
//!
//! This module contains the [`CalculationResult`] produced by the calculation
//! core, the audit trace types that explain it, and the [`CreditAssessment`]
//! envelope returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RateSchedule;

/// Headcount totals and credit components for one calculation.
///
/// Every field is a non-negative integer. `total_credit` always equals the
/// sum of the three credit components.
///
/// # Example
///
/// ```
/// use employment_credit::models::CalculationResult;
///
/// let result = CalculationResult {
///     total_headcount_prior: 23,
///     total_headcount_current: 27,
///     net_total_increase: 4,
///     youth_prior: 5,
///     youth_current: 7,
///     net_youth_increase: 2,
///     base_credit: 20_000_000,
///     youth_credit: 14_000_000,
///     non_metro_credit: 0,
///     total_credit: 34_000_000,
/// };
/// assert_eq!(
///     result.total_credit,
///     result.base_credit + result.youth_credit + result.non_metro_credit
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Regular plus youth workers in the prior year.
    pub total_headcount_prior: u64,
    /// Regular plus youth workers in the current year.
    pub total_headcount_current: u64,
    /// Year-over-year growth in total headcount, floored at zero.
    pub net_total_increase: u64,
    /// Youth workers in the prior year.
    pub youth_prior: u64,
    /// Youth workers in the current year.
    pub youth_current: u64,
    /// Growth in youth headcount, floored at zero and capped at `net_total_increase`.
    pub net_youth_increase: u64,
    /// `net_total_increase` priced at the base rate.
    pub base_credit: u64,
    /// `net_youth_increase` priced at the youth bonus rate.
    pub youth_credit: u64,
    /// `net_total_increase` priced at the non-metro rate, or zero for metro workplaces.
    pub non_metro_credit: u64,
    /// Sum of the three credit components.
    pub total_credit: u64,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag outcomes a reviewer may want to double check; they never
/// change the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Where the rates applied to a calculation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Rates supplied with the request.
    RequestOverride,
    /// Rates looked up from the loaded schedule configuration.
    Config,
}

/// A calculation result together with the context it was produced in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAssessment {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Whether the workplace is outside the metro region.
    pub is_non_metro: bool,
    /// The rates the calculation was priced with.
    pub rates: RateSchedule,
    /// Where `rates` came from.
    pub rate_source: RateSource,
    /// Headcount totals and credit components.
    pub result: CalculationResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> CalculationResult {
        CalculationResult {
            total_headcount_prior: 23,
            total_headcount_current: 24,
            net_total_increase: 1,
            youth_prior: 5,
            youth_current: 8,
            net_youth_increase: 1,
            base_credit: 5_000_000,
            youth_credit: 7_000_000,
            non_metro_credit: 0,
            total_credit: 12_000_000,
        }
    }

    #[test]
    fn test_calculation_result_serialization() {
        let json = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(json["net_total_increase"], 1);
        assert_eq!(json["youth_credit"], 7_000_000);
        assert_eq!(json["total_credit"], 12_000_000);
    }

    #[test]
    fn test_rate_source_serialization() {
        let json = serde_json::to_string(&RateSource::RequestOverride).unwrap();
        assert_eq!(json, "\"request_override\"");

        let source: RateSource = serde_json::from_str("\"config\"").unwrap();
        assert_eq!(source, RateSource::Config);
    }

    #[test]
    fn test_credit_assessment_round_trips_through_json() {
        let assessment = CreditAssessment {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            is_non_metro: false,
            rates: RateSchedule::default(),
            rate_source: RateSource::Config,
            result: sample_result(),
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 12,
            },
        };

        let json = serde_json::to_string(&assessment).unwrap();
        let parsed: CreditAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, assessment);
    }
}
