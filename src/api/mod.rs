//! HTTP API module for the PAYG engine.
//!
//! This module provides the REST API endpoints for calculating tax
//! breakdowns for single employees and batches.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchRequest, BracketRequest, BreakdownRequest};
pub use response::{ApiError, ApiErrorResponse, BatchItemResponse, BatchResponse};
pub use state::AppState;
