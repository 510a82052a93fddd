//! Calculation logic for the PAYG engine.
//!
//! This module contains the pure calculation functions: annual income tax,
//! weekly withholding, superannuation, the per-employee breakdown that
//! composes them, batch processing, and bracket classification. The
//! [`TaxCalculator`] type binds these to a configured superannuation rate.

mod annual_tax;
mod batch;
mod bracket_info;
mod breakdown;
mod calculator;
mod rounding;
mod superannuation;
mod validation;
mod withholding;

pub use annual_tax::{calculate_annual_tax, calculate_annual_tax_with, find_bracket};
pub use batch::{BatchItemResult, process_batch};
pub use bracket_info::tax_bracket_info;
pub use breakdown::calculate_full_breakdown;
pub use calculator::TaxCalculator;
pub use rounding::round_money;
pub use superannuation::{PackageSplit, calculate_superannuation, separate_super_from_package};
pub use validation::{
    MAX_MONETARY_AMOUNT, MAX_SUPER_RATE, ensure_valid_amount, ensure_valid_rate,
};
pub use withholding::{
    calculate_weekly_withholding, calculate_weekly_withholding_with, find_coefficient,
};
