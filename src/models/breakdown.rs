//! Per-employee tax breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete weekly and annual tax picture for one employee.
///
/// Weekly figures are in whole cents. Annual figures are the weekly figures
/// multiplied by 52, except `annual_tax`, which is computed from the annual
/// base salary and left unrounded.
///
/// # Example
///
/// ```
/// use payg_engine::calculation::calculate_full_breakdown;
/// use rust_decimal_macros::dec;
///
/// let breakdown = calculate_full_breakdown(dec!(1693), true, dec!(0.11)).unwrap();
/// assert_eq!(breakdown.base_weekly, dec!(1525.23));
/// assert_eq!(breakdown.weekly_super, dec!(167.77));
/// assert_eq!(breakdown.amount_owed(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// The weekly amount as supplied (package or base salary).
    pub weekly_amount: Decimal,
    /// Weekly salary excluding superannuation.
    pub base_weekly: Decimal,
    /// Weekly superannuation contribution.
    pub weekly_super: Decimal,
    /// Weekly PAYG withholding on the base salary.
    pub weekly_withholding: Decimal,
    /// Weekly take-home pay (base salary less withholding).
    pub weekly_net: Decimal,
    /// Base salary over a 52-week year.
    pub annual_base: Decimal,
    /// Superannuation over a 52-week year.
    pub annual_super: Decimal,
    /// Withholding over a 52-week year.
    pub annual_withholding: Decimal,
    /// Annual income tax on the annual base salary.
    pub annual_tax: Decimal,
    /// Annual withholding less annual tax; negative means tax is owed.
    pub tax_refund: Decimal,
    /// Annual tax as a percentage of annual base salary.
    pub effective_rate: Decimal,
}

impl TaxBreakdown {
    /// Returns the amount still owed at the end of the year, if any.
    pub fn amount_owed(&self) -> Option<Decimal> {
        if self.tax_refund < Decimal::ZERO {
            Some(-self.tax_refund)
        } else {
            None
        }
    }
}
