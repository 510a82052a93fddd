//! Weekly PAYG withholding calculation.
//!
//! Withholding uses the ATO Scale 2 coefficients: for weekly earnings `x`
//! the amount withheld is `a × (x + 0.99) − b`, rounded to cents.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::rates::{
    WITHHOLDING_COEFFICIENTS, WITHHOLDING_TABLE, WITHHOLDING_THRESHOLD, WithholdingCoefficient,
};

use super::rounding::round_money;
use super::validation::ensure_valid_amount;

/// Finds the row with `lower_bound <= salary < upper_bound`.
pub fn find_coefficient(
    rows: &[WithholdingCoefficient],
    salary: Decimal,
) -> EngineResult<&WithholdingCoefficient> {
    rows.iter()
        .find(|row| row.contains(salary))
        .ok_or_else(|| EngineError::TableLookupFailure {
            table: WITHHOLDING_TABLE.to_string(),
            amount: salary,
        })
}

/// Calculates weekly withholding on `weekly_salary`.
///
/// Earnings below $359 attract no withholding.
///
/// # Errors
///
/// - `InvalidInput` if the salary is negative or out of range
/// - `TableLookupFailure` if no coefficient row matches; a missing row is
///   never treated as zero withholding
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::calculate_weekly_withholding;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_weekly_withholding(dec!(1693)).unwrap(), dec!(401.68));
/// assert_eq!(calculate_weekly_withholding(dec!(358.99)).unwrap(), dec!(0));
/// ```
pub fn calculate_weekly_withholding(weekly_salary: Decimal) -> EngineResult<Decimal> {
    calculate_weekly_withholding_with(&WITHHOLDING_COEFFICIENTS, weekly_salary)
}

/// Calculates weekly withholding against an explicit coefficient table.
pub fn calculate_weekly_withholding_with(
    rows: &[WithholdingCoefficient],
    weekly_salary: Decimal,
) -> EngineResult<Decimal> {
    ensure_valid_amount("weekly_salary", weekly_salary)?;

    if weekly_salary < WITHHOLDING_THRESHOLD {
        return Ok(Decimal::ZERO);
    }

    let row = find_coefficient(rows, weekly_salary)?;
    Ok(round_money(row.withholding_on(weekly_salary)))
}
