//! Employment Increase Tax Credit Engine
//!
//! This crate computes an employment increase tax credit from year-over-year
//! headcounts. A per-head rate schedule prices the net increase, with an extra
//! bonus for youth workers and an optional bonus for workplaces outside the
//! metro region.
//!
//! ```
//! use employment_credit::calculation::compute;
//! use employment_credit::models::RateSchedule;
//!
//! let result = compute(18, 5, 20, 7, true, &RateSchedule::default()).unwrap();
//! assert_eq!(result.total_credit, 42_000_000);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
