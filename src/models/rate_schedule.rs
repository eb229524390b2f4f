//! Per-head credit rates.

use serde::{Deserialize, Serialize};

/// Default credit per net additional worker.
pub const DEFAULT_BASE_PER_HEAD: u64 = 5_000_000;

/// Default additional credit per net additional youth worker.
pub const DEFAULT_YOUTH_BONUS_PER_HEAD: u64 = 7_000_000;

/// Default additional credit per net additional worker outside the metro region.
pub const DEFAULT_NON_METRO_BONUS_PER_HEAD: u64 = 2_000_000;

/// The three per-head amounts used to price a net headcount increase.
///
/// Rates are unsigned, so a schedule can never hold a negative amount. Parsing
/// a negative value from YAML or JSON fails before a schedule is built.
///
/// # Example
///
/// ```
/// use employment_credit::models::RateSchedule;
///
/// let rates = RateSchedule::new(5_000_000, 7_000_000, 2_000_000);
/// assert_eq!(rates, RateSchedule::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Credit per net additional worker.
    pub base_per_head: u64,
    /// Additional credit per net additional youth worker.
    pub youth_bonus_per_head: u64,
    /// Additional credit per net additional worker when the workplace is non-metro.
    pub non_metro_bonus_per_head: u64,
}

impl RateSchedule {
    /// Creates a schedule from its three per-head amounts.
    pub const fn new(
        base_per_head: u64,
        youth_bonus_per_head: u64,
        non_metro_bonus_per_head: u64,
    ) -> Self {
        Self {
            base_per_head,
            youth_bonus_per_head,
            non_metro_bonus_per_head,
        }
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_PER_HEAD,
            DEFAULT_YOUTH_BONUS_PER_HEAD,
            DEFAULT_NON_METRO_BONUS_PER_HEAD,
        )
    }
}
