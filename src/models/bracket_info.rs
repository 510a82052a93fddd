//! Descriptive information about an income's tax bracket.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which annual tax bracket an income falls into, with display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketInfo {
    /// One-based bracket position (1 is the tax-free bracket).
    pub bracket_number: usize,
    /// The published income range, e.g. `$18,201 - $45,000`.
    pub range: String,
    /// The marginal rate, e.g. `32.5%`.
    pub marginal_rate: String,
    /// The income that was classified.
    pub annual_income: Decimal,
}
