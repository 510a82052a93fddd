//! Superannuation calculation.
//!
//! This module computes the superannuation guarantee on a base salary and
//! splits a package that already includes super back into its parts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::rounding::round_money;
use super::validation::{ensure_valid_amount, ensure_valid_rate};

/// A package split into base salary and superannuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSplit {
    /// Salary excluding superannuation, rounded to cents.
    pub base_salary: Decimal,
    /// Superannuation on the base salary, rounded to cents.
    pub super_amount: Decimal,
}

/// Calculates the superannuation contribution on `base_salary` at `rate`.
///
/// # Errors
///
/// `InvalidInput` if the salary is negative or out of range, or the rate is
/// outside `0..=1`.
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::calculate_superannuation;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_superannuation(dec!(1000), dec!(0.11)).unwrap(), dec!(110.00));
/// ```
pub fn calculate_superannuation(base_salary: Decimal, rate: Decimal) -> EngineResult<Decimal> {
    ensure_valid_amount("base_salary", base_salary)?;
    ensure_valid_rate(rate)?;
    Ok(round_money(base_salary * rate))
}

/// Splits a package that includes superannuation.
///
/// `base_salary = total / (1 + rate)` and `super_amount = base_salary × rate`,
/// each rounded to cents independently. Because of that independent rounding
/// the two parts may sum to one cent more or less than `total_package`.
///
/// # Errors
///
/// - `InvalidInput` if the package is negative or out of range
/// - `InvalidInput` if the rate is outside `0..=1`
///
/// # Examples
///
/// ```
/// use payg_engine::calculation::separate_super_from_package;
/// use rust_decimal_macros::dec;
///
/// let split = separate_super_from_package(dec!(1693), dec!(0.11)).unwrap();
/// assert_eq!(split.base_salary, dec!(1525.23));
/// assert_eq!(split.super_amount, dec!(167.77));
/// ```
pub fn separate_super_from_package(
    total_package: Decimal,
    rate: Decimal,
) -> EngineResult<PackageSplit> {
    ensure_valid_amount("total_package", total_package)?;
    ensure_valid_rate(rate)?;

    let base_salary = total_package / (Decimal::ONE + rate);
    let super_amount = base_salary * rate;

    Ok(PackageSplit {
        base_salary: round_money(base_salary),
        super_amount: round_money(super_amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_super_on_base_salary() {
        assert_eq!(calculate_superannuation(dec!(1524.32), dec!(0.11)).unwrap(), dec!(167.68));
    }

    #[test]
    fn test_super_rounds_to_cents() {
        // 1234.56 × 0.11 = 135.8016
        assert_eq!(calculate_superannuation(dec!(1234.56), dec!(0.11)).unwrap(), dec!(135.80));
    }

    #[test]
    fn test_super_on_zero_salary() {
        assert_eq!(calculate_superannuation(dec!(0), dec!(0.11)).unwrap(), dec!(0));
    }

    #[test]
    fn test_super_rejects_negative_salary() {
        assert!(matches!(
            calculate_superannuation(dec!(-1), dec!(0.11)),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_split_reference_packages() {
        let cases = [
            (dec!(1693), dec!(1525.23), dec!(167.77)),
            (dec!(1358), dec!(1223.42), dec!(134.58)),
            (dec!(1184), dec!(1066.67), dec!(117.33)),
        ];
        for (package, base, super_amount) in cases {
            let split = separate_super_from_package(package, dec!(0.11)).unwrap();
            assert_eq!(split.base_salary, base, "base of {}", package);
            assert_eq!(split.super_amount, super_amount, "super of {}", package);
        }
    }

    #[test]
    fn test_split_parts_sum_within_a_cent() {
        for package in [dec!(1693), dec!(1000.01), dec!(777.77), dec!(3461)] {
            let split = separate_super_from_package(package, dec!(0.11)).unwrap();
            let drift = (split.base_salary + split.super_amount - package).abs();
            assert!(drift <= dec!(0.01), "drift {} for {}", drift, package);
        }
    }

    #[test]
    fn test_split_with_zero_rate() {
        let split = separate_super_from_package(dec!(1500), dec!(0)).unwrap();
        assert_eq!(split.base_salary, dec!(1500));
        assert_eq!(split.super_amount, dec!(0));
    }

    #[test]
    fn test_split_rejects_rate_of_minus_one() {
        let err = separate_super_from_package(dec!(1500), dec!(-1)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "super_rate"));
    }

    #[test]
    fn test_split_rejects_rate_below_minus_one() {
        assert!(separate_super_from_package(dec!(1500), dec!(-1.5)).is_err());
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        // -0.5 would give negative super, and a base larger than the package
        for result in [
            calculate_superannuation(dec!(1000), dec!(-0.5)).map(|_| ()),
            separate_super_from_package(dec!(1000), dec!(-0.5)).map(|_| ()),
        ] {
            let err = result.unwrap_err();
            assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "super_rate"));
        }
    }

    #[test]
    fn test_huge_rate_is_rejected_not_overflowed() {
        let rate = dec!(100000000000000000000);
        assert!(calculate_superannuation(dec!(1000000000000), rate).is_err());
        assert!(separate_super_from_package(dec!(1000000000000), rate).is_err());
    }

    #[test]
    fn test_full_rate_at_maximum_amount() {
        let super_amount = calculate_superannuation(dec!(1000000000000), dec!(1)).unwrap();
        assert_eq!(super_amount, dec!(1000000000000));
    }

    #[test]
    fn test_split_rejects_negative_package() {
        assert!(matches!(
            separate_super_from_package(dec!(-100), dec!(0.11)),
            Err(EngineError::InvalidInput { .. })
        ));
    }
}
