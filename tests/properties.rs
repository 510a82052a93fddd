//! Property-based tests for the PAYG engine.
//!
//! Amounts are generated as whole cents so every input is an exact
//! two-decimal money value.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use payg_engine::calculation::{
    calculate_annual_tax, calculate_full_breakdown, calculate_weekly_withholding, process_batch,
    separate_super_from_package,
};
use payg_engine::error::EngineError;
use payg_engine::rates::{TAX_BRACKETS, TAX_FREE_THRESHOLD, WITHHOLDING_THRESHOLD};

const RATE: Decimal = dec!(0.11);

fn cents(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|c| Decimal::new(c, 2))
}

/// Super rates from 0% to 49.99% in steps of 0.01 percentage points.
fn rates() -> impl Strategy<Value = Decimal> {
    (0i64..5_000).prop_map(|r| Decimal::new(r, 4))
}

proptest! {
    #[test]
    fn annual_tax_is_zero_up_to_threshold(income in cents(0..1_820_001)) {
        prop_assert!(income <= TAX_FREE_THRESHOLD);
        prop_assert_eq!(calculate_annual_tax(income).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn annual_tax_is_monotonic(a in cents(0..50_000_000), b in cents(0..50_000_000)) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(calculate_annual_tax(low).unwrap() <= calculate_annual_tax(high).unwrap());
    }

    #[test]
    fn annual_tax_never_exceeds_top_rate(income in cents(0..100_000_000)) {
        let tax = calculate_annual_tax(income).unwrap();
        prop_assert!(tax >= Decimal::ZERO);
        prop_assert!(tax <= income * dec!(0.45));
    }

    #[test]
    fn withholding_is_zero_below_threshold(salary in cents(0..35_900)) {
        prop_assert!(salary < WITHHOLDING_THRESHOLD);
        prop_assert_eq!(calculate_weekly_withholding(salary).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn withholding_is_in_cents_and_below_salary(salary in cents(0..1_000_000)) {
        let withholding = calculate_weekly_withholding(salary).unwrap();
        prop_assert!(withholding >= Decimal::ZERO);
        prop_assert!(withholding < salary || salary.is_zero());
        prop_assert_eq!(withholding, withholding.round_dp(2));
    }

    #[test]
    fn package_split_inverts_adding_super(base in cents(0..10_000_000), rate in rates()) {
        let split = separate_super_from_package(base * (Decimal::ONE + rate), rate).unwrap();
        prop_assert!((split.base_salary - base).abs() <= dec!(0.01));
        prop_assert!((split.super_amount - base * rate).abs() <= dec!(0.01));
    }

    #[test]
    fn negative_rates_are_rejected(
        amount in cents(0..1_000_000),
        rate in (1i64..10_000).prop_map(|r| Decimal::new(-r, 4)),
        include_super in any::<bool>(),
    ) {
        let err = calculate_full_breakdown(amount, include_super, rate).unwrap_err();
        let is_rate_error =
            matches!(err, EngineError::InvalidInput { ref field, .. } if field == "super_rate");
        prop_assert!(is_rate_error);
    }

    #[test]
    fn package_split_recovers_total_within_a_cent(total in cents(0..10_000_000)) {
        let split = separate_super_from_package(total, RATE).unwrap();
        let rebuilt = split.base_salary * (Decimal::ONE + RATE);
        prop_assert!((rebuilt - total).abs() <= dec!(0.01));
        prop_assert!((split.base_salary + split.super_amount - total).abs() <= dec!(0.01));
    }

    #[test]
    fn breakdown_is_deterministic(amount in cents(0..1_000_000), include_super in any::<bool>()) {
        let first = calculate_full_breakdown(amount, include_super, RATE).unwrap();
        let second = calculate_full_breakdown(amount, include_super, RATE).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn breakdown_identities_hold(amount in cents(0..1_000_000), include_super in any::<bool>()) {
        let b = calculate_full_breakdown(amount, include_super, RATE).unwrap();
        prop_assert_eq!(b.weekly_net, b.base_weekly - b.weekly_withholding);
        prop_assert_eq!(b.annual_base, b.base_weekly * dec!(52));
        prop_assert_eq!(b.annual_withholding, b.weekly_withholding * dec!(52));
        prop_assert_eq!(b.tax_refund, b.annual_withholding - b.annual_tax);
    }

    #[test]
    fn negative_amounts_are_rejected(amount in cents(-10_000_000..-1)) {
        let err = calculate_full_breakdown(amount, true, RATE).unwrap_err();
        let is_invalid_input = matches!(err, EngineError::InvalidInput { .. });
        prop_assert!(is_invalid_input);
    }

    #[test]
    fn batch_preserves_length_and_order(
        amounts in prop::collection::vec(cents(-100_000..500_000), 0..20)
    ) {
        let results = process_batch(&amounts, true, RATE);
        prop_assert_eq!(results.len(), amounts.len());

        for (index, (amount, result)) in amounts.iter().zip(&results).enumerate() {
            match result {
                Ok(breakdown) => prop_assert_eq!(breakdown.weekly_amount, *amount),
                Err(failure) => {
                    prop_assert_eq!(failure.index, index);
                    prop_assert_eq!(failure.weekly_amount, *amount);
                    prop_assert!(*amount < Decimal::ZERO);
                }
            }
        }
    }
}

#[test]
fn annual_tax_is_continuous_at_bracket_ceilings() {
    for bracket in TAX_BRACKETS.iter() {
        let Some(ceiling) = bracket.ceiling else { continue };
        let at = calculate_annual_tax(ceiling).unwrap();
        let above = calculate_annual_tax(ceiling + dec!(0.01)).unwrap();
        assert!(
            above - at <= dec!(0.01),
            "tax jumps by {} above {}",
            above - at,
            ceiling
        );
    }
}
