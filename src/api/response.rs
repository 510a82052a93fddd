//! Response types for the PAYG engine API.
//!
//! This module defines the batch response body, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::BatchItemResult;
use crate::error::EngineError;
use crate::models::{BatchSummary, TaxBreakdown};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("The value supplied for '{}' cannot be calculated", field),
                ),
            },
            EngineError::TableLookupFailure { table, .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "TABLE_LOOKUP_FAILURE",
                    message,
                    format!("The {} table is incomplete", table),
                ),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

/// Outcome for one employee in a batch response.
///
/// Exactly one of `breakdown` and `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemResponse {
    /// Zero-based position of the item in the request.
    pub index: usize,
    /// The weekly amount supplied for this item.
    pub weekly_amount: Decimal,
    /// The breakdown, when the calculation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<TaxBreakdown>,
    /// The error, when the calculation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Response body for the `/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Per-item outcomes in request order.
    pub results: Vec<BatchItemResponse>,
    /// Summary over the successful items.
    pub summary: BatchSummary,
    /// Number of items that failed.
    pub failed_count: usize,
}

impl BatchResponse {
    /// Builds the response from engine batch results.
    pub fn from_results(results: Vec<BatchItemResult>) -> Self {
        let summary = BatchSummary::from_breakdowns(results.iter().filter_map(|r| r.as_ref().ok()));
        let failed_count = results.iter().filter(|r| r.is_err()).count();

        let results = results
            .into_iter()
            .enumerate()
            .map(|(index, result)| match result {
                Ok(breakdown) => BatchItemResponse {
                    index,
                    weekly_amount: breakdown.weekly_amount,
                    breakdown: Some(breakdown),
                    error: None,
                },
                Err(failure) => BatchItemResponse {
                    index: failure.index,
                    weekly_amount: failure.weekly_amount,
                    breakdown: None,
                    error: Some(ApiErrorResponse::from(failure.error).error),
                },
            })
            .collect();

        Self {
            results,
            summary,
            failed_count,
        }
    }
}
