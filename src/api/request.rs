//! Request types for the employment credit API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{RateSchedule, WorkforceSnapshot};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Headcounts for the prior year.
    pub prior: HeadcountRequest,
    /// Headcounts for the current year.
    pub current: HeadcountRequest,
    /// Whether the workplace is outside the metro region.
    #[serde(default)]
    pub is_non_metro: bool,
    /// Date used to select the configured rate schedule. The latest schedule
    /// is used when omitted.
    #[serde(default)]
    pub assessment_date: Option<NaiveDate>,
    /// Rates to use instead of the configured schedule.
    #[serde(default)]
    pub rates: Option<RateSchedule>,
}

/// One year's headcounts in a calculation request.
///
/// Counts are signed so negative input is reported as a validation error
/// naming the field rather than as a JSON type error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeadcountRequest {
    /// Regular workers.
    pub regular: i64,
    /// Youth workers.
    pub youth: i64,
}

impl CalculationRequest {
    /// Returns the four headcounts as a snapshot.
    pub fn snapshot(&self) -> WorkforceSnapshot {
        WorkforceSnapshot::new(
            self.prior.regular,
            self.prior.youth,
            self.current.regular,
            self.current.youth,
        )
    }
}
