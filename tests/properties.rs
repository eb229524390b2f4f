//! Property tests for the credit calculation.

use proptest::prelude::*;

use employment_credit::calculation::{compute, compute_with_audit};
use employment_credit::error::EngineError;
use employment_credit::models::{RateSchedule, WorkforceSnapshot};

const MAX_HEADS: i64 = 100_000;
const MAX_RATE: u64 = 100_000_000;

fn headcount() -> impl Strategy<Value = i64> {
    0..=MAX_HEADS
}

fn rate_schedule() -> impl Strategy<Value = RateSchedule> {
    (0..=MAX_RATE, 0..=MAX_RATE, 0..=MAX_RATE)
        .prop_map(|(base, youth, non_metro)| RateSchedule::new(base, youth, non_metro))
}

proptest! {
    #[test]
    fn increases_are_bounded(
        prior_regular in headcount(),
        prior_youth in headcount(),
        current_regular in headcount(),
        current_youth in headcount(),
        is_non_metro in any::<bool>(),
        rates in rate_schedule()
    ) {
        let result = compute(
            prior_regular, prior_youth, current_regular, current_youth, is_non_metro, &rates,
        ).unwrap();

        prop_assert!(result.net_youth_increase <= result.net_total_increase);
        prop_assert_eq!(
            result.net_total_increase,
            result.total_headcount_current.saturating_sub(result.total_headcount_prior)
        );
    }

    #[test]
    fn no_growth_means_no_base_or_regional_credit(
        prior_regular in headcount(),
        prior_youth in headcount(),
        shrink_regular in 0..=MAX_HEADS,
        shrink_youth in 0..=MAX_HEADS,
        rates in rate_schedule()
    ) {
        let current_regular = (prior_regular - shrink_regular).max(0);
        let current_youth = (prior_youth - shrink_youth).max(0);

        let result = compute(
            prior_regular, prior_youth, current_regular, current_youth, true, &rates,
        ).unwrap();

        prop_assert_eq!(result.net_total_increase, 0);
        prop_assert_eq!(result.base_credit, 0);
        prop_assert_eq!(result.non_metro_credit, 0);
        prop_assert_eq!(result.total_credit, 0);
    }

    #[test]
    fn total_is_sum_of_components(
        prior_regular in headcount(),
        prior_youth in headcount(),
        current_regular in headcount(),
        current_youth in headcount(),
        is_non_metro in any::<bool>(),
        rates in rate_schedule()
    ) {
        let result = compute(
            prior_regular, prior_youth, current_regular, current_youth, is_non_metro, &rates,
        ).unwrap();

        prop_assert_eq!(
            result.total_credit,
            result.base_credit + result.youth_credit + result.non_metro_credit
        );
        if !is_non_metro {
            prop_assert_eq!(result.non_metro_credit, 0);
        }
    }

    #[test]
    fn more_current_workers_never_lowers_credit(
        prior_regular in headcount(),
        prior_youth in headcount(),
        current_regular in headcount(),
        current_youth in headcount(),
        extra in 1..=1_000i64,
        add_youth in any::<bool>(),
        is_non_metro in any::<bool>(),
        rates in rate_schedule()
    ) {
        let before = compute(
            prior_regular, prior_youth, current_regular, current_youth, is_non_metro, &rates,
        ).unwrap();

        let (more_regular, more_youth) = if add_youth {
            (current_regular, current_youth + extra)
        } else {
            (current_regular + extra, current_youth)
        };
        let after = compute(
            prior_regular, prior_youth, more_regular, more_youth, is_non_metro, &rates,
        ).unwrap();

        prop_assert!(after.total_credit >= before.total_credit);
    }

    #[test]
    fn audited_calculation_agrees_with_compute(
        counts in prop::array::uniform4(-10i64..=MAX_HEADS),
        is_non_metro in any::<bool>(),
        rates in rate_schedule()
    ) {
        let plain = compute(counts[0], counts[1], counts[2], counts[3], is_non_metro, &rates);
        let snapshot = WorkforceSnapshot::new(counts[0], counts[1], counts[2], counts[3]);
        let audited = compute_with_audit(&snapshot, is_non_metro, &rates, 1);

        match (plain, audited) {
            (Ok(plain), Ok(audited)) => {
                prop_assert_eq!(plain, audited.result);
                prop_assert_eq!(audited.steps.len(), 5);
            }
            (
                Err(EngineError::Validation { field: a, value: x }),
                Err(EngineError::Validation { field: b, value: y }),
            ) => {
                prop_assert_eq!(a, b);
                prop_assert_eq!(x, y);
            }
            (plain, audited) => prop_assert!(
                false,
                "paths disagree: {:?} vs {:?}",
                plain,
                audited.map(|a| a.result)
            ),
        }
    }

    #[test]
    fn any_negative_input_is_rejected(
        counts in prop::array::uniform4(headcount()),
        negative_at in 0usize..4,
        negative in -MAX_HEADS..=-1,
        rates in rate_schedule()
    ) {
        let mut counts = counts;
        counts[negative_at] = negative;

        let result = compute(counts[0], counts[1], counts[2], counts[3], false, &rates);

        match result {
            Err(EngineError::Validation { value, .. }) => prop_assert_eq!(value, negative),
            other => prop_assert!(false, "expected validation error, got {:?}", other),
        }
    }
}
