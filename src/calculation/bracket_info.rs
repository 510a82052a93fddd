//! Bracket classification for display.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxBracketInfo;
use crate::rates::{ANNUAL_TAX_TABLE, TAX_BRACKETS, TaxBracket};
use crate::report::{format_percent, format_whole_dollars};

use super::validation::ensure_valid_amount;

/// Describes which annual tax bracket `annual_income` falls into.
///
/// Unlike the tax calculation itself, an income of exactly zero is placed in
/// the first (tax-free) bracket.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::tax_bracket_info;
/// use rust_decimal_macros::dec;
///
/// let info = tax_bracket_info(dec!(88036)).unwrap();
/// assert_eq!(info.bracket_number, 3);
/// assert_eq!(info.range, "$45,001 - $120,000");
/// assert_eq!(info.marginal_rate, "32.5%");
/// ```
pub fn tax_bracket_info(annual_income: Decimal) -> EngineResult<TaxBracketInfo> {
    ensure_valid_amount("annual_income", annual_income)?;

    let (position, bracket) = TAX_BRACKETS
        .iter()
        .enumerate()
        .find(|(_, bracket)| bracket.ceiling.is_none_or(|ceiling| annual_income <= ceiling))
        .ok_or_else(|| EngineError::TableLookupFailure {
            table: ANNUAL_TAX_TABLE.to_string(),
            amount: annual_income,
        })?;

    Ok(TaxBracketInfo {
        bracket_number: position + 1,
        range: range_label(bracket),
        marginal_rate: format_percent(bracket.rate * Decimal::ONE_HUNDRED),
        annual_income,
    })
}

fn range_label(bracket: &TaxBracket) -> String {
    let lower = format_whole_dollars(bracket.lower_bound());
    match bracket.ceiling {
        Some(ceiling) => format!("{} - {}", lower, format_whole_dollars(ceiling)),
        None => format!("{}+", lower),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_income_is_first_bracket() {
        let info = tax_bracket_info(dec!(0)).unwrap();
        assert_eq!(info.bracket_number, 1);
        assert_eq!(info.range, "$0 - $18,200");
        assert_eq!(info.marginal_rate, "0%");
    }

    #[test]
    fn test_ceiling_stays_in_lower_bracket() {
        let info = tax_bracket_info(dec!(45000)).unwrap();
        assert_eq!(info.bracket_number, 2);
        assert_eq!(info.range, "$18,201 - $45,000");
        assert_eq!(info.marginal_rate, "19%");
    }

    #[test]
    fn test_fourth_bracket() {
        let info = tax_bracket_info(dec!(150000)).unwrap();
        assert_eq!(info.bracket_number, 4);
        assert_eq!(info.range, "$120,001 - $180,000");
        assert_eq!(info.marginal_rate, "37%");
    }

    #[test]
    fn test_top_bracket() {
        let info = tax_bracket_info(dec!(250000)).unwrap();
        assert_eq!(info.bracket_number, 5);
        assert_eq!(info.range, "$180,001+");
        assert_eq!(info.marginal_rate, "45%");
        assert_eq!(info.annual_income, dec!(250000));
    }

    #[test]
    fn test_negative_income_is_rejected() {
        assert!(tax_bracket_info(dec!(-1)).is_err());
    }
}
