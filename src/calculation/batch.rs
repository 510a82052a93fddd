//! Batch processing across employees.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::BatchItemFailure;
use crate::models::TaxBreakdown;

use super::breakdown::calculate_full_breakdown;

/// Outcome for a single employee in a batch.
pub type BatchItemResult = Result<TaxBreakdown, BatchItemFailure>;

/// Calculates a breakdown for every weekly amount, in input order.
///
/// Employees are independent: a failure on one item is recorded against its
/// index and the remaining items are still processed. The output always has
/// the same length as the input, and `output[k]` corresponds to `input[k]`.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::process_batch;
/// use rust_decimal_macros::dec;
///
/// let results = process_batch(&[dec!(1693), dec!(-100), dec!(1358)], true, dec!(0.11));
/// assert_eq!(results.len(), 3);
/// assert!(results[0].is_ok());
/// assert_eq!(results[1].as_ref().unwrap_err().index, 1);
/// assert!(results[2].is_ok());
/// ```
pub fn process_batch(
    weekly_amounts: &[Decimal],
    include_super_in_amount: bool,
    super_rate: Decimal,
) -> Vec<BatchItemResult> {
    let results: Vec<BatchItemResult> = weekly_amounts
        .iter()
        .enumerate()
        .map(|(index, &weekly_amount)| {
            calculate_full_breakdown(weekly_amount, include_super_in_amount, super_rate).map_err(
                |error| {
                    warn!(
                        index,
                        weekly_amount = %weekly_amount,
                        error = %error,
                        "Batch item failed"
                    );
                    BatchItemFailure {
                        index,
                        weekly_amount,
                        error,
                    }
                },
            )
        })
        .collect();

    debug!(
        items = results.len(),
        failed = results.iter().filter(|r| r.is_err()).count(),
        "Batch processed"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal_macros::dec;

    const RATE: Decimal = dec!(0.11);

    #[test]
    fn test_empty_batch() {
        assert!(process_batch(&[], true, RATE).is_empty());
    }

    #[test]
    fn test_preserves_order_and_length() {
        let amounts = [dec!(2234), dec!(1308), dec!(1693)];
        let results = process_batch(&amounts, true, RATE);

        assert_eq!(results.len(), amounts.len());
        for (result, amount) in results.iter().zip(amounts) {
            assert_eq!(result.as_ref().unwrap().weekly_amount, amount);
        }
    }

    #[test]
    fn test_matches_single_breakdowns() {
        let amounts = [dec!(1772), dec!(1184)];
        let results = process_batch(&amounts, false, RATE);

        for (result, amount) in results.into_iter().zip(amounts) {
            assert_eq!(
                result.unwrap(),
                calculate_full_breakdown(amount, false, RATE).unwrap()
            );
        }
    }

    #[test]
    fn test_failure_is_isolated_to_its_item() {
        let results = process_batch(&[dec!(1000), dec!(-5), dec!(2000)], true, RATE);

        assert!(results[0].is_ok());
        assert!(results[2].is_ok());

        let failure = results[1].as_ref().unwrap_err();
        assert_eq!(failure.index, 1);
        assert_eq!(failure.weekly_amount, dec!(-5));
        assert!(matches!(failure.error, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn test_invalid_rate_fails_every_item() {
        let results = process_batch(&[dec!(1000), dec!(2000)], true, dec!(-1));

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_err()));
    }
}
