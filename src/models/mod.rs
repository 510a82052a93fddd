//! Domain models for the PAYG engine.
//!
//! This module contains the result records produced by the engine:
//! per-employee breakdowns, batch summaries and bracket descriptions.

mod batch_summary;
mod bracket_info;
mod breakdown;

pub use batch_summary::BatchSummary;
pub use bracket_info::TaxBracketInfo;
pub use breakdown::TaxBreakdown;
