//! HTTP API module for the employment credit engine.
//!
//! This module provides the REST API endpoint for calculating the
//! employment increase credit.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, HeadcountRequest};
pub use response::ApiError;
pub use state::AppState;
