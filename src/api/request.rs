//! Request types for the PAYG engine API.
//!
//! Amounts may be sent as JSON numbers or as decimal strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The weekly amount for the employee.
    pub weekly_amount: Decimal,
    /// Whether the amount already includes super; defaults to the
    /// configured setting.
    #[serde(default)]
    pub include_super_in_amount: Option<bool>,
}

/// Request body for the `/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Weekly amounts, one per employee.
    pub weekly_amounts: Vec<Decimal>,
    /// Whether the amounts already include super; defaults to the
    /// configured setting.
    #[serde(default)]
    pub include_super_in_amount: Option<bool>,
}

/// Request body for the `/bracket` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketRequest {
    /// The annual income to classify.
    pub annual_income: Decimal,
}
