//! Annual income tax calculation.
//!
//! This module applies the progressive annual tax ladder to a yearly income.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::rates::{ANNUAL_TAX_TABLE, TAX_BRACKETS, TAX_FREE_THRESHOLD, TaxBracket};

use super::validation::ensure_valid_amount;

/// Finds the bracket with `floor < income <= ceiling`.
///
/// Returns [`EngineError::TableLookupFailure`] if no bracket matches, which
/// can only happen when `brackets` is malformed.
pub fn find_bracket(brackets: &[TaxBracket], income: Decimal) -> EngineResult<&TaxBracket> {
    brackets
        .iter()
        .find(|bracket| bracket.contains(income))
        .ok_or_else(|| EngineError::TableLookupFailure {
            table: ANNUAL_TAX_TABLE.to_string(),
            amount: income,
        })
}

/// Calculates annual income tax on `annual_income`.
///
/// Income up to the tax-free threshold ($18,200) attracts no tax. Above it,
/// the matching bracket's `base_tax + rate × (income − floor)` applies. The
/// result is not rounded.
///
/// # Errors
///
/// - `InvalidInput` if the income is negative or out of range
/// - `TableLookupFailure` if the published table has no matching bracket
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::{calculate_annual_tax, round_money};
/// use rust_decimal_macros::dec;
///
/// let tax = calculate_annual_tax(dec!(88036)).unwrap();
/// assert_eq!(round_money(tax), dec!(19078.70));
/// ```
pub fn calculate_annual_tax(annual_income: Decimal) -> EngineResult<Decimal> {
    calculate_annual_tax_with(&TAX_BRACKETS, annual_income)
}

/// Calculates annual tax against an explicit bracket table.
pub fn calculate_annual_tax_with(
    brackets: &[TaxBracket],
    annual_income: Decimal,
) -> EngineResult<Decimal> {
    ensure_valid_amount("annual_income", annual_income)?;

    if annual_income <= TAX_FREE_THRESHOLD {
        return Ok(Decimal::ZERO);
    }

    let bracket = find_bracket(brackets, annual_income)?;
    Ok(bracket.tax_on(annual_income))
}
