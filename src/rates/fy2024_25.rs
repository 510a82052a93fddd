//! ATO rates for the 2024-25 financial year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{TaxBracket, WithholdingCoefficient};

/// Income at or below this amount attracts no annual tax.
pub const TAX_FREE_THRESHOLD: Decimal = dec!(18200);

/// Weekly earnings below this amount attract no withholding.
pub const WITHHOLDING_THRESHOLD: Decimal = dec!(359);

/// Number of pay weeks used to annualize weekly figures.
pub const WEEKS_PER_YEAR: Decimal = dec!(52);

/// Superannuation guarantee rate (11%).
pub const DEFAULT_SUPER_RATE: Decimal = dec!(0.11);

/// Annual income tax brackets.
///
/// Each bracket's base tax is the tax payable on its floor, so the tax on any
/// income inside a bracket is `base_tax + rate × (income − floor)`.
pub const TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::new(dec!(0), Some(dec!(18200)), dec!(0), dec!(0)),
    TaxBracket::new(dec!(18200), Some(dec!(45000)), dec!(0.19), dec!(0)),
    TaxBracket::new(dec!(45000), Some(dec!(120000)), dec!(0.325), dec!(5092)),
    TaxBracket::new(dec!(120000), Some(dec!(180000)), dec!(0.37), dec!(29467)),
    TaxBracket::new(dec!(180000), None, dec!(0.45), dec!(51667)),
];

/// Weekly withholding coefficients, Scale 2 (tax-free threshold claimed).
pub const WITHHOLDING_COEFFICIENTS: [WithholdingCoefficient; 9] = [
    WithholdingCoefficient::new(dec!(0), Some(dec!(359)), dec!(0), dec!(0)),
    WithholdingCoefficient::new(dec!(359), Some(dec!(438)), dec!(0.1900), dec!(68.3462)),
    WithholdingCoefficient::new(dec!(438), Some(dec!(548)), dec!(0.2900), dec!(112.1942)),
    WithholdingCoefficient::new(dec!(548), Some(dec!(721)), dec!(0.2100), dec!(68.3465)),
    WithholdingCoefficient::new(dec!(721), Some(dec!(865)), dec!(0.2190), dec!(74.8369)),
    WithholdingCoefficient::new(dec!(865), Some(dec!(1282)), dec!(0.3477), dec!(186.2119)),
    WithholdingCoefficient::new(dec!(1282), Some(dec!(2307)), dec!(0.3450), dec!(182.7504)),
    WithholdingCoefficient::new(dec!(2307), Some(dec!(3461)), dec!(0.3900), dec!(286.5965)),
    WithholdingCoefficient::new(dec!(3461), None, dec!(0.4700), dec!(563.5196)),
];
