//! HTTP request handlers for the employment credit API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::compute_with_audit;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{AuditTrace, CreditAssessment, RateSchedule, RateSource};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts two years of headcounts and returns the credit assessment.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    match perform_calculation(&request, state.config()) {
        Ok(assessment) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %assessment.calculation_id,
                net_total_increase = assessment.result.net_total_increase,
                net_youth_increase = assessment.result.net_youth_increase,
                total_credit = assessment.result.total_credit,
                duration_us = assessment.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(assessment),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Picks the rates for a request: the request's own rates if given,
/// otherwise the configured schedule for the assessment date, otherwise the
/// newest configured schedule.
fn resolve_rates(
    request: &CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<(RateSchedule, RateSource)> {
    if let Some(rates) = request.rates {
        return Ok((rates, RateSource::RequestOverride));
    }

    let rates = match request.assessment_date {
        Some(date) => config.rates_for(date)?,
        None => config.latest_rates()?.rates,
    };
    Ok((rates, RateSource::Config))
}

/// Whole microseconds in `duration`, saturating at `u64::MAX`.
fn duration_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Runs the credit calculation for a request.
fn perform_calculation(
    request: &CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<CreditAssessment> {
    let start_time = Instant::now();

    let (rates, rate_source) = resolve_rates(request, config)?;
    debug!(?rates, ?rate_source, "Resolved rate schedule");

    let audited = compute_with_audit(&request.snapshot(), request.is_non_metro, &rates, 1)?;

    let duration_us = duration_micros(start_time.elapsed());

    Ok(CreditAssessment {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        is_non_metro: request.is_non_metro,
        rates,
        rate_source,
        result: audited.result,
        audit_trace: AuditTrace {
            steps: audited.steps,
            warnings: audited.warnings,
            duration_us,
        },
    })
}
