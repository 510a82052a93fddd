//! Published rate tables for the 2024-25 financial year.
//!
//! This module exposes the annual income tax brackets, the weekly PAYG
//! withholding coefficients (Scale 2, tax-free threshold claimed) and the
//! superannuation guarantee rate as read-only constants.
//!
//! A change to the published rates replaces the constants in
//! [`fy2024_25`]; nothing else in the engine hard-codes a rate.
//!
//! # Example
//!
//! ```
//! use payg_engine::rates::{TAX_BRACKETS, WITHHOLDING_COEFFICIENTS, DEFAULT_SUPER_RATE};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(TAX_BRACKETS.len(), 5);
//! assert_eq!(WITHHOLDING_COEFFICIENTS.len(), 9);
//! assert_eq!(DEFAULT_SUPER_RATE, dec!(0.11));
//! ```

mod fy2024_25;
mod types;

pub use fy2024_25::{
    DEFAULT_SUPER_RATE, TAX_BRACKETS, TAX_FREE_THRESHOLD, WEEKS_PER_YEAR, WITHHOLDING_COEFFICIENTS,
    WITHHOLDING_THRESHOLD,
};
pub use types::{
    TaxBracket, WithholdingCoefficient, check_bracket_contiguity, check_coefficient_contiguity,
};
pub(crate) use types::{ANNUAL_TAX_TABLE, WITHHOLDING_TABLE};
