//! Calculation logic for the employment credit engine.
//!
//! This module contains the rules that turn two years of headcounts into a
//! credit: headcount validation, net increase derivation with the youth cap,
//! the base, youth and regional credit components, and the aggregation that
//! runs them in order.

mod base_credit;
mod component;
mod credit_calculator;
mod net_increase;
mod non_metro_credit;
mod validation;
mod youth_credit;

pub use base_credit::calculate_base_credit;
pub use component::CreditComponentResult;
pub use credit_calculator::{AuditedCalculation, compute, compute_with_audit};
pub use net_increase::{
    NetIncrease, NetIncreaseResult, calculate_net_increase, derive_net_increase,
};
pub use non_metro_credit::calculate_non_metro_credit;
pub use validation::{
    HeadcountValidationResult, ValidatedHeadcounts, check_headcounts, validate_headcounts,
};
pub use youth_credit::calculate_youth_credit;
