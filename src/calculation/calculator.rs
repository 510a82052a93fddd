//! A calculator bound to a superannuation rate.

use rust_decimal::Decimal;

use crate::config::CalculatorSettings;
use crate::error::EngineResult;
use crate::models::{TaxBracketInfo, TaxBreakdown};
use crate::rates::DEFAULT_SUPER_RATE;

use super::annual_tax::calculate_annual_tax;
use super::batch::{BatchItemResult, process_batch};
use super::bracket_info::tax_bracket_info;
use super::breakdown::calculate_full_breakdown;
use super::superannuation::{PackageSplit, calculate_superannuation, separate_super_from_package};
use super::validation::ensure_valid_rate;
use super::withholding::calculate_weekly_withholding;

/// Tax calculator carrying the superannuation guarantee rate.
///
/// The rate is validated and fixed at construction. The calculator holds no
/// other state, so one instance can be shared and reused for any number of
/// calculations.
///
/// # Example
///
/// ```
/// use payg_engine::calculation::TaxCalculator;
/// use rust_decimal_macros::dec;
///
/// let calculator = TaxCalculator::default();
/// assert_eq!(calculator.super_rate(), dec!(0.11));
///
/// let breakdown = calculator.full_breakdown(dec!(1693), true).unwrap();
/// assert_eq!(breakdown.weekly_super, dec!(167.77));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxCalculator {
    super_rate: Decimal,
}

impl TaxCalculator {
    /// Creates a calculator using the given superannuation rate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the rate is outside `0..=1`.
    pub fn new(super_rate: Decimal) -> EngineResult<Self> {
        ensure_valid_rate(super_rate)?;
        Ok(Self { super_rate })
    }

    /// Creates a calculator from loaded settings.
    pub fn from_settings(settings: &CalculatorSettings) -> EngineResult<Self> {
        Self::new(settings.super_rate)
    }

    /// Returns the superannuation rate this calculator applies.
    pub fn super_rate(&self) -> Decimal {
        self.super_rate
    }

    /// Annual income tax on `annual_income`.
    pub fn annual_tax(&self, annual_income: Decimal) -> EngineResult<Decimal> {
        calculate_annual_tax(annual_income)
    }

    /// Weekly withholding on `weekly_salary`.
    pub fn weekly_withholding(&self, weekly_salary: Decimal) -> EngineResult<Decimal> {
        calculate_weekly_withholding(weekly_salary)
    }

    /// Superannuation on `base_salary` at this calculator's rate.
    pub fn superannuation(&self, base_salary: Decimal) -> EngineResult<Decimal> {
        calculate_superannuation(base_salary, self.super_rate)
    }

    /// Splits a package including super at this calculator's rate.
    pub fn separate_super_from_package(
        &self,
        total_package: Decimal,
    ) -> EngineResult<PackageSplit> {
        separate_super_from_package(total_package, self.super_rate)
    }

    /// Full breakdown for one employee.
    pub fn full_breakdown(
        &self,
        weekly_amount: Decimal,
        include_super_in_amount: bool,
    ) -> EngineResult<TaxBreakdown> {
        calculate_full_breakdown(weekly_amount, include_super_in_amount, self.super_rate)
    }

    /// Breakdowns for a batch of employees, with per-item failures.
    pub fn process_batch(
        &self,
        weekly_amounts: &[Decimal],
        include_super_in_amount: bool,
    ) -> Vec<BatchItemResult> {
        process_batch(weekly_amounts, include_super_in_amount, self.super_rate)
    }

    /// Describes the annual tax bracket for `annual_income`.
    pub fn bracket_info(&self, annual_income: Decimal) -> EngineResult<TaxBracketInfo> {
        tax_bracket_info(annual_income)
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self {
            super_rate: DEFAULT_SUPER_RATE,
        }
    }
}
