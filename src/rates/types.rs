//! Row types for the rate tables.
//!
//! The annual ladder and the withholding ladder use different boundary
//! conventions, inherited from the published ATO tables:
//! - a [`TaxBracket`] is closed above: it matches `floor < income <= ceiling`;
//! - a [`WithholdingCoefficient`] is half-open: it matches
//!   `lower_bound <= salary < upper_bound`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{EngineError, EngineResult};

/// Table name used when an annual bracket lookup fails.
pub(crate) const ANNUAL_TAX_TABLE: &str = "annual tax bracket";

/// Table name used when a withholding coefficient lookup fails.
pub(crate) const WITHHOLDING_TABLE: &str = "weekly withholding";

/// A single bracket of the annual income tax ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// The threshold at which this bracket's marginal rate begins to apply.
    pub floor: Decimal,
    /// The inclusive upper limit of the bracket; `None` for the top bracket.
    pub ceiling: Option<Decimal>,
    /// The marginal rate applied to income above the floor.
    pub rate: Decimal,
    /// Tax payable on income equal to the floor.
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Creates a bracket.
    pub const fn new(
        floor: Decimal,
        ceiling: Option<Decimal>,
        rate: Decimal,
        base_tax: Decimal,
    ) -> Self {
        Self {
            floor,
            ceiling,
            rate,
            base_tax,
        }
    }

    /// The first whole dollar taxed in this bracket, as published (e.g. 18,201).
    pub fn lower_bound(&self) -> Decimal {
        if self.floor.is_zero() {
            self.floor
        } else {
            self.floor + Decimal::ONE
        }
    }

    /// Returns true if `income` falls in `floor < income <= ceiling`.
    pub fn contains(&self, income: Decimal) -> bool {
        income > self.floor && self.ceiling.is_none_or(|ceiling| income <= ceiling)
    }

    /// Tax on `income` under this bracket's formula. Not rounded.
    pub fn tax_on(&self, income: Decimal) -> Decimal {
        self.base_tax + self.rate * (income - self.floor)
    }
}

/// A row of the weekly withholding coefficient table.
///
/// Withholding for a salary inside the row is `a × (salary + 0.99) − b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithholdingCoefficient {
    /// Inclusive lower bound of weekly earnings.
    pub lower_bound: Decimal,
    /// Exclusive upper bound of weekly earnings; `None` for the top row.
    pub upper_bound: Option<Decimal>,
    /// Coefficient applied to earnings.
    pub a: Decimal,
    /// Amount subtracted after applying `a`.
    pub b: Decimal,
}

impl WithholdingCoefficient {
    /// Creates a coefficient row.
    pub const fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        a: Decimal,
        b: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            a,
            b,
        }
    }

    /// Returns true if `salary` falls in `lower_bound <= salary < upper_bound`.
    pub fn contains(&self, salary: Decimal) -> bool {
        salary >= self.lower_bound && self.upper_bound.is_none_or(|upper| salary < upper)
    }

    /// Withholding on `salary` under this row's formula. Not rounded.
    pub fn withholding_on(&self, salary: Decimal) -> Decimal {
        self.a * (salary + dec!(0.99)) - self.b
    }
}

/// Verifies that brackets are ordered, gap-free and unbounded on top.
///
/// Returns a [`EngineError::TableLookupFailure`] naming the first amount that
/// would not be matched.
pub fn check_bracket_contiguity(brackets: &[TaxBracket]) -> EngineResult<()> {
    check_ladder(
        ANNUAL_TAX_TABLE,
        brackets.iter().map(|b| (b.floor, b.ceiling)),
    )
}

/// Verifies that coefficient rows are ordered, gap-free and unbounded on top.
pub fn check_coefficient_contiguity(rows: &[WithholdingCoefficient]) -> EngineResult<()> {
    check_ladder(
        WITHHOLDING_TABLE,
        rows.iter().map(|r| (r.lower_bound, r.upper_bound)),
    )
}

fn check_ladder(
    table: &str,
    rows: impl Iterator<Item = (Decimal, Option<Decimal>)>,
) -> EngineResult<()> {
    let failure = |amount: Decimal| EngineError::TableLookupFailure {
        table: table.to_string(),
        amount,
    };

    let mut expected_start = Decimal::ZERO;
    let mut open_top = false;

    for (start, end) in rows {
        if open_top || start != expected_start {
            return Err(failure(expected_start));
        }
        match end {
            Some(end) if end > start => expected_start = end,
            Some(_) => return Err(failure(start)),
            None => open_top = true,
        }
    }

    if open_top {
        Ok(())
    } else {
        Err(failure(expected_start))
    }
}
