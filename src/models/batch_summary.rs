//! Aggregate statistics over a batch of breakdowns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxBreakdown;

/// Summary statistics for a processed batch.
///
/// Averages are zero for an empty batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of employees summarised.
    pub employee_count: usize,
    /// Mean of the supplied weekly amounts.
    pub average_weekly_amount: Decimal,
    /// Sum of annual income tax.
    pub total_annual_tax: Decimal,
    /// Sum of refunds (shortfalls count negatively).
    pub total_tax_refunds: Decimal,
    /// Mean effective tax rate, in percent.
    pub average_effective_rate: Decimal,
}

impl BatchSummary {
    /// Summarises the given breakdowns.
    ///
    /// # Example
    ///
    /// ```
    /// use payg_engine::calculation::TaxCalculator;
    /// use payg_engine::models::BatchSummary;
    /// use rust_decimal_macros::dec;
    ///
    /// let calculator = TaxCalculator::default();
    /// let breakdowns = vec![
    ///     calculator.full_breakdown(dec!(1308), true).unwrap(),
    ///     calculator.full_breakdown(dec!(1308), true).unwrap(),
    /// ];
    /// let summary = BatchSummary::from_breakdowns(&breakdowns);
    /// assert_eq!(summary.employee_count, 2);
    /// assert_eq!(summary.average_weekly_amount, dec!(1308));
    /// ```
    pub fn from_breakdowns<'a>(breakdowns: impl IntoIterator<Item = &'a TaxBreakdown>) -> Self {
        let mut employee_count = 0usize;
        let mut total_weekly = Decimal::ZERO;
        let mut total_annual_tax = Decimal::ZERO;
        let mut total_tax_refunds = Decimal::ZERO;
        let mut total_rate = Decimal::ZERO;

        for breakdown in breakdowns {
            employee_count += 1;
            total_weekly += breakdown.weekly_amount;
            total_annual_tax += breakdown.annual_tax;
            total_tax_refunds += breakdown.tax_refund;
            total_rate += breakdown.effective_rate;
        }

        let (average_weekly_amount, average_effective_rate) = if employee_count == 0 {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            let count = Decimal::from(employee_count);
            (total_weekly / count, total_rate / count)
        };

        Self {
            employee_count,
            average_weekly_amount,
            total_annual_tax,
            total_tax_refunds,
            average_effective_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn breakdown(
        weekly_amount: Decimal,
        annual_tax: Decimal,
        tax_refund: Decimal,
        rate: Decimal,
    ) -> TaxBreakdown {
        TaxBreakdown {
            weekly_amount,
            base_weekly: weekly_amount,
            weekly_super: Decimal::ZERO,
            weekly_withholding: Decimal::ZERO,
            weekly_net: weekly_amount,
            annual_base: weekly_amount * dec!(52),
            annual_super: Decimal::ZERO,
            annual_withholding: annual_tax + tax_refund,
            annual_tax,
            tax_refund,
            effective_rate: rate,
        }
    }

    #[test]
    fn test_empty_batch_has_zero_averages() {
        let summary = BatchSummary::from_breakdowns(&[]);
        assert_eq!(summary.employee_count, 0);
        assert_eq!(summary.average_weekly_amount, dec!(0));
        assert_eq!(summary.average_effective_rate, dec!(0));
        assert_eq!(summary.total_annual_tax, dec!(0));
    }

    #[test]
    fn test_totals_and_averages() {
        let breakdowns = vec![
            breakdown(dec!(1000), dec!(8000), dec!(100), dec!(15)),
            breakdown(dec!(2000), dec!(25000), dec!(-50), dec!(24)),
        ];
        let summary = BatchSummary::from_breakdowns(&breakdowns);

        assert_eq!(summary.employee_count, 2);
        assert_eq!(summary.average_weekly_amount, dec!(1500));
        assert_eq!(summary.total_annual_tax, dec!(33000));
        assert_eq!(summary.total_tax_refunds, dec!(50));
        assert_eq!(summary.average_effective_rate, dec!(19.5));
    }
}
