//! HTTP request handlers for the PAYG engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{BatchRequest, BracketRequest, BreakdownRequest};
use super::response::{ApiError, ApiErrorResponse, BatchResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/breakdown", post(breakdown_handler))
        .route("/batch", post(batch_handler))
        .route("/bracket", post(bracket_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: &Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /breakdown.
///
/// Calculates the breakdown for a single employee.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    let include_super = state.include_super(request.include_super_in_amount);
    let start_time = Instant::now();

    match state
        .calculator()
        .full_breakdown(request.weekly_amount, include_super)
    {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                weekly_amount = %breakdown.weekly_amount,
                weekly_withholding = %breakdown.weekly_withholding,
                duration_us = start_time.elapsed().as_micros(),
                "Breakdown completed successfully"
            );
            json_response(StatusCode::OK, breakdown)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Breakdown failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /batch.
///
/// Item failures are reported inside the response body; the request
/// itself succeeds as long as the body parses.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    let include_super = state.include_super(request.include_super_in_amount);
    let start_time = Instant::now();

    let results = state
        .calculator()
        .process_batch(&request.weekly_amounts, include_super);
    let response = BatchResponse::from_results(results);

    info!(
        correlation_id = %correlation_id,
        employees = response.results.len(),
        failed = response.failed_count,
        total_annual_tax = %response.summary.total_annual_tax,
        duration_us = start_time.elapsed().as_micros(),
        "Batch completed"
    );
    json_response(StatusCode::OK, response)
}

/// Handler for POST /bracket.
async fn bracket_handler(
    State(state): State<AppState>,
    payload: Result<Json<BracketRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bracket request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, &correlation_id),
    };

    match state.calculator().bracket_info(request.annual_income) {
        Ok(info) => json_response(StatusCode::OK, info),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Bracket lookup failed"
            );
            error_response(err.into())
        }
    }
}
