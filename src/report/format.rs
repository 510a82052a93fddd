//! Number formatting helpers for reports.

use rust_decimal::{Decimal, RoundingStrategy};

fn fixed(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn sign_of(rounded: Decimal) -> &'static str {
    if rounded < Decimal::ZERO { "-" } else { "" }
}

/// Formats an amount as dollars and cents with thousands separators.
///
/// # Examples
///
/// ```
/// use payg_engine::report::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(16243.387)), "$16,243.39");
/// assert_eq!(format_currency(dec!(-86.32)), "-$86.32");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = fixed(value, 2);
    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}${}.{}", sign_of(rounded), group_thousands(whole), cents)
}

/// Formats an amount as dollars and cents without separators.
///
/// ```
/// use payg_engine::report::format_plain_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_plain_currency(dec!(1693)), "$1693.00");
/// ```
pub fn format_plain_currency(value: Decimal) -> String {
    let rounded = fixed(value, 2);
    format!("{}${}", sign_of(rounded), rounded.abs())
}

/// Formats a whole-dollar amount with thousands separators, e.g. `$18,201`.
pub fn format_whole_dollars(value: Decimal) -> String {
    let rounded = fixed(value, 0);
    format!("{}${}", sign_of(rounded), group_thousands(&rounded.abs().to_string()))
}

/// Formats a percentage without trailing zeros, e.g. `32.5%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize())
}

/// Formats a percentage to one decimal place, e.g. `20.5%`.
pub fn format_percent_1dp(value: Decimal) -> String {
    format!("{}%", fixed(value, 1))
}
