//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to whole cents, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::round_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_money(dec!(401.67615)), dec!(401.68));
/// assert_eq!(round_money(dec!(0.005)), dec!(0.01));
/// assert_eq!(round_money(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
