//! Configuration types for rate schedules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::RateSchedule;

/// Metadata about the credit scheme the rates belong to.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// Short identifier for the scheme (e.g., "EIC-EXAMPLE").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The version of this configuration.
    pub version: String,
    /// URL to the policy announcement the rates were taken from.
    pub source_url: String,
}

/// Rates in force from a specific effective date.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The first date these rates apply to.
    pub effective_date: NaiveDate,
    /// The per-head amounts.
    pub rates: RateSchedule,
}

/// The complete credit configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CreditConfig {
    /// Scheme metadata.
    metadata: ScheduleMetadata,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl CreditConfig {
    /// Creates a new CreditConfig, sorting rates by effective date.
    pub fn new(metadata: ScheduleMetadata, rates: Vec<RateConfig>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the scheme metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns all rate configurations, oldest first.
    pub fn rates(&self) -> &[RateConfig] {
        &self.rates
    }
}
