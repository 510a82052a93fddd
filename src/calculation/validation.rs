//! Input validation for monetary amounts and rates.
//!
//! Every public engine operation validates its money inputs here before any
//! table lookup, so a negative or absurd amount is rejected rather than
//! producing a nonsensical breakdown.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{EngineError, EngineResult};

/// Largest monetary amount accepted by the engine.
///
/// Keeps annualized figures (amount × 52 × rates) well inside `Decimal` range.
pub const MAX_MONETARY_AMOUNT: Decimal = dec!(1000000000000);

/// Checks that `amount` is non-negative and within [`MAX_MONETARY_AMOUNT`].
pub fn ensure_valid_amount(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative, got {}", amount),
        ));
    }
    if amount > MAX_MONETARY_AMOUNT {
        return Err(EngineError::invalid_input(
            field,
            format!("must not exceed {}, got {}", MAX_MONETARY_AMOUNT, amount),
        ));
    }
    Ok(())
}

/// Largest superannuation rate accepted by the engine (100%).
pub const MAX_SUPER_RATE: Decimal = Decimal::ONE;

/// Checks that a superannuation rate lies in `0..=`[`MAX_SUPER_RATE`].
///
/// A negative rate would produce negative super, or a base salary larger
/// than the package it was split from.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::ensure_valid_rate;
/// use rust_decimal_macros::dec;
///
/// assert!(ensure_valid_rate(dec!(0.11)).is_ok());
/// assert!(ensure_valid_rate(dec!(-0.5)).is_err());
/// assert!(ensure_valid_rate(dec!(100000000000000000000)).is_err());
/// ```
pub fn ensure_valid_rate(rate: Decimal) -> EngineResult<()> {
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(EngineError::invalid_input(
            "super_rate",
            format!("must not be negative, got {}", rate),
        ));
    }
    if rate > MAX_SUPER_RATE {
        return Err(EngineError::invalid_input(
            "super_rate",
            format!("must not exceed {}, got {}", MAX_SUPER_RATE, rate),
        ));
    }
    Ok(())
}
