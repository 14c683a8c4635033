//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_detailed_month_totals;
use crate::models::Settings;
use crate::validation::net_pay_warning;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .route("/settings", post(settings_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Validates the selection (default and clamped hours, salary advisory),
/// runs the month aggregation, and wraps the result in a response envelope.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let rates = state.rates();
    let prepared = match request.prepare(rates) {
        Ok(prepared) => prepared,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected calculation settings"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };
    for warning in &prepared.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            message = %warning.message,
            "Input adjusted"
        );
    }

    let start_time = Instant::now();
    let result =
        calculate_detailed_month_totals(&prepared.selected_days, &prepared.settings, rates);
    let duration = start_time.elapsed();

    let mut warnings = prepared.warnings;
    if let Some(warning) = net_pay_warning(&result) {
        warn!(
            correlation_id = %correlation_id,
            net_pay = %result.pay.net_pay,
            "Net pay exhausted by contributions"
        );
        warnings.push(warning);
    }

    info!(
        correlation_id = %correlation_id,
        days_worked = result.pay.days_worked,
        weeks = result.pila.weeks,
        gross_pay = %result.pay.gross_pay,
        net_pay = %result.pay.net_pay,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rate_year: rates.year,
        employer_cost: result.employer_cost(),
        result,
        warnings,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /rates endpoint.
///
/// Returns the rate table the server calculates with.
async fn rates_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.rates().clone())
}

/// Handler for POST /settings endpoint.
///
/// Resolves a stored settings record (as kept by a client-side settings
/// store) over the defaults, so clients can check what the engine will use.
async fn settings_handler(State(state): State<AppState>, body: String) -> impl IntoResponse {
    match Settings::from_json(&body, state.rates()) {
        Ok(settings) => (StatusCode::OK, Json(settings)).into_response(),
        Err(err) => {
            warn!(error = %err, "Rejected settings record");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
