//! Full per-employee tax breakdown.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::EngineResult;
use crate::models::TaxBreakdown;
use crate::rates::WEEKS_PER_YEAR;

use super::annual_tax::calculate_annual_tax;
use super::superannuation::{PackageSplit, calculate_superannuation, separate_super_from_package};
use super::validation::ensure_valid_amount;
use super::withholding::calculate_weekly_withholding;

/// Calculates the complete weekly and annual breakdown for one employee.
///
/// When `include_super_in_amount` is true, `weekly_amount` is a package and
/// superannuation is separated out of it. Otherwise `weekly_amount` is the
/// base salary and superannuation is paid on top.
///
/// Withholding is calculated on the weekly base salary; annual tax on the
/// base salary over 52 weeks. The refund is annual withholding less annual
/// tax, so a negative refund means tax is owed.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative or out-of-range amount, or a super
/// rate outside `0..=1`. Returns
/// `TableLookupFailure` if a rate table has no matching row.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::calculate_full_breakdown;
/// use rust_decimal_macros::dec;
///
/// let breakdown = calculate_full_breakdown(dec!(1693), true, dec!(0.11)).unwrap();
/// assert_eq!(breakdown.weekly_withholding, dec!(343.80));
/// assert_eq!(breakdown.weekly_net, dec!(1181.43));
/// assert_eq!(breakdown.annual_tax, dec!(16243.387));
/// ```
pub fn calculate_full_breakdown(
    weekly_amount: Decimal,
    include_super_in_amount: bool,
    super_rate: Decimal,
) -> EngineResult<TaxBreakdown> {
    ensure_valid_amount("weekly_amount", weekly_amount)?;

    let PackageSplit {
        base_salary: base_weekly,
        super_amount: weekly_super,
    } = if include_super_in_amount {
        separate_super_from_package(weekly_amount, super_rate)?
    } else {
        PackageSplit {
            base_salary: weekly_amount,
            super_amount: calculate_superannuation(weekly_amount, super_rate)?,
        }
    };

    let weekly_withholding = calculate_weekly_withholding(base_weekly)?;
    let weekly_net = base_weekly - weekly_withholding;

    let annual_base = base_weekly * WEEKS_PER_YEAR;
    let annual_super = weekly_super * WEEKS_PER_YEAR;
    let annual_withholding = weekly_withholding * WEEKS_PER_YEAR;

    let annual_tax = calculate_annual_tax(annual_base)?;
    let tax_refund = annual_withholding - annual_tax;

    let effective_rate = if annual_base > Decimal::ZERO {
        annual_tax / annual_base * dec!(100)
    } else {
        Decimal::ZERO
    };

    Ok(TaxBreakdown {
        weekly_amount,
        base_weekly,
        weekly_super,
        weekly_withholding,
        weekly_net,
        annual_base,
        annual_super,
        annual_withholding,
        annual_tax,
        tax_refund,
        effective_rate,
    })
}
