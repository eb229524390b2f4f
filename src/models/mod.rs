//! Core data models for the employment credit engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod rate_schedule;
mod workforce;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, CreditAssessment, RateSource,
};
pub use rate_schedule::{
    DEFAULT_BASE_PER_HEAD, DEFAULT_NON_METRO_BONUS_PER_HEAD, DEFAULT_YOUTH_BONUS_PER_HEAD,
    RateSchedule,
};
pub use workforce::{HeadcountField, WorkforceSnapshot};
