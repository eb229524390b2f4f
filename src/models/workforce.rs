//! Workforce headcounts for the two years being compared.
//!
//! Counts are signed so that bad caller input survives until validation,
//! where it is rejected with the name of the field it came from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the four headcount inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadcountField {
    /// Regular workers in the prior year.
    PriorRegular,
    /// Youth workers in the prior year.
    PriorYouth,
    /// Regular workers in the current year.
    CurrentRegular,
    /// Youth workers in the current year.
    CurrentYouth,
}

impl HeadcountField {
    /// Returns the human-readable name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            HeadcountField::PriorRegular => "prior-year regular workers",
            HeadcountField::PriorYouth => "prior-year youth workers",
            HeadcountField::CurrentRegular => "current-year regular workers",
            HeadcountField::CurrentYouth => "current-year youth workers",
        }
    }
}

impl fmt::Display for HeadcountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four headcounts a credit is derived from.
///
/// Youth workers are counted separately from regular workers; a year's total
/// headcount is the sum of the two.
///
/// # Example
///
/// ```
/// use employment_credit::models::WorkforceSnapshot;
///
/// let snapshot = WorkforceSnapshot::new(18, 5, 20, 7);
/// assert_eq!(snapshot.first_negative(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkforceSnapshot {
    /// Regular workers in the prior year.
    pub prior_regular: i64,
    /// Youth workers in the prior year.
    pub prior_youth: i64,
    /// Regular workers in the current year.
    pub current_regular: i64,
    /// Youth workers in the current year.
    pub current_youth: i64,
}

impl WorkforceSnapshot {
    /// Creates a snapshot from prior and current regular/youth counts.
    pub const fn new(
        prior_regular: i64,
        prior_youth: i64,
        current_regular: i64,
        current_youth: i64,
    ) -> Self {
        Self {
            prior_regular,
            prior_youth,
            current_regular,
            current_youth,
        }
    }

    /// Returns every input paired with its field, in validation order.
    pub fn fields(&self) -> [(HeadcountField, i64); 4] {
        [
            (HeadcountField::PriorRegular, self.prior_regular),
            (HeadcountField::PriorYouth, self.prior_youth),
            (HeadcountField::CurrentRegular, self.current_regular),
            (HeadcountField::CurrentYouth, self.current_youth),
        ]
    }

    /// Returns the first negative input, if any.
    pub fn first_negative(&self) -> Option<(HeadcountField, i64)> {
        self.fields().into_iter().find(|(_, value)| *value < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_negative_none_for_valid_counts() {
        let snapshot = WorkforceSnapshot::new(0, 0, 0, 0);
        assert_eq!(snapshot.first_negative(), None);
    }

    #[test]
    fn test_first_negative_reports_in_field_order() {
        let snapshot = WorkforceSnapshot::new(3, -2, -5, 1);
        assert_eq!(
            snapshot.first_negative(),
            Some((HeadcountField::PriorYouth, -2))
        );
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(
            HeadcountField::CurrentRegular.to_string(),
            "current-year regular workers"
        );
        assert_eq!(HeadcountField::PriorYouth.label(), "prior-year youth workers");
    }
}
