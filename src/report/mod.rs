//! Human-readable reports over engine results.
//!
//! Reports are plain strings built from [`TaxBreakdown`] records; no
//! arithmetic beyond summary statistics happens here.

mod format;

use rust_decimal::Decimal;

use crate::calculation::BatchItemResult;
use crate::models::{BatchSummary, TaxBreakdown};

pub use format::{
    format_currency, format_percent, format_percent_1dp, format_plain_currency,
    format_whole_dollars,
};

const RULE_WIDTH: usize = 80;
const PERSON_LABEL_WIDTH: usize = 28;
const SUMMARY_LABEL_WIDTH: usize = 30;

fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

fn field(label: &str, value: impl std::fmt::Display, width: usize) -> String {
    format!("   {:<width$}{}", label, value, width = width)
}

/// Joins lines with a trailing newline after each.
fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Renders the report block for one employee.
///
/// `person_number` is one-based. A shortfall is reported as tax owed.
///
/// # Example
///
/// ```
/// use payg_engine::calculation::TaxCalculator;
/// use payg_engine::report::individual_report;
/// use rust_decimal_macros::dec;
///
/// let calculator = TaxCalculator::default();
/// let breakdown = calculator.full_breakdown(dec!(1693), true).unwrap();
/// let report = individual_report(&breakdown, 1, calculator.super_rate());
/// assert!(report.contains("Weekly Withholding Tax:     $343.80"));
/// ```
pub fn individual_report(
    breakdown: &TaxBreakdown,
    person_number: usize,
    super_rate: Decimal,
) -> String {
    let super_label = format!(
        "Superannuation ({}):",
        format_percent(super_rate * Decimal::ONE_HUNDRED)
    );
    let year_end = match breakdown.amount_owed() {
        Some(owed) => field("Estimated Tax Owed:", format_currency(owed), PERSON_LABEL_WIDTH),
        None => field(
            "Estimated Tax Refund:",
            format_currency(breakdown.tax_refund),
            PERSON_LABEL_WIDTH,
        ),
    };

    join_lines(vec![
        format!("## Person {}", person_number),
        field("Weekly Salary:", format_currency(breakdown.weekly_amount), PERSON_LABEL_WIDTH),
        field(&super_label, format_currency(breakdown.weekly_super), PERSON_LABEL_WIDTH),
        field(
            "Weekly Withholding Tax:",
            format_currency(breakdown.weekly_withholding),
            PERSON_LABEL_WIDTH,
        ),
        field("Weekly Take-Home Pay:", format_currency(breakdown.weekly_net), PERSON_LABEL_WIDTH),
        field("Annual Income Tax:", format_currency(breakdown.annual_tax), PERSON_LABEL_WIDTH),
        year_end,
        field(
            "Effective Tax Rate:",
            format_percent_1dp(breakdown.effective_rate),
            PERSON_LABEL_WIDTH,
        ),
    ])
}

/// Renders the full batch report: one block per employee followed by
/// summary statistics over the successful items.
///
/// Failed items are listed in place with their error.
pub fn batch_report(results: &[BatchItemResult], super_rate: Decimal) -> String {
    let mut out = join_lines(vec![
        rule('='),
        format!("{:^width$}", "AUSTRALIAN TAX CALCULATION REPORT", width = RULE_WIDTH),
        rule('='),
    ]);

    for (index, result) in results.iter().enumerate() {
        out.push('\n');
        match result {
            Ok(breakdown) => out.push_str(&individual_report(breakdown, index + 1, super_rate)),
            Err(failure) => out.push_str(&join_lines(vec![
                format!("## Person {}", index + 1),
                format!("   Calculation failed: {}", failure.error),
            ])),
        }
    }

    let breakdowns: Vec<&TaxBreakdown> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    let failed = results.len() - breakdowns.len();
    let summary = BatchSummary::from_breakdowns(breakdowns);

    out.push('\n');
    out.push_str(&summary_section(&summary, failed));
    out
}

fn summary_section(summary: &BatchSummary, failed: usize) -> String {
    let mut lines = vec![
        rule('-'),
        "SUMMARY STATISTICS".to_string(),
        rule('-'),
        field("Total Employees:", summary.employee_count, SUMMARY_LABEL_WIDTH),
    ];
    if failed > 0 {
        lines.push(field("Failed Employees:", failed, SUMMARY_LABEL_WIDTH));
    }
    lines.extend([
        field(
            "Average Weekly Salary:",
            format_currency(summary.average_weekly_amount),
            SUMMARY_LABEL_WIDTH,
        ),
        field(
            "Total Annual Tax Collected:",
            format_currency(summary.total_annual_tax),
            SUMMARY_LABEL_WIDTH,
        ),
        field(
            "Total Tax Refunds:",
            format_currency(summary.total_tax_refunds),
            SUMMARY_LABEL_WIDTH,
        ),
        field(
            "Average Effective Tax Rate:",
            format_percent_1dp(summary.average_effective_rate),
            SUMMARY_LABEL_WIDTH,
        ),
        rule('='),
    ]);
    join_lines(lines)
}

/// Renders the one-line summary for one employee.
///
/// # Example
///
/// ```
/// use payg_engine::calculation::TaxCalculator;
/// use payg_engine::report::compact_summary;
/// use rust_decimal_macros::dec;
///
/// let breakdown = TaxCalculator::default().full_breakdown(dec!(1693), true).unwrap();
/// assert_eq!(
///     compact_summary(&breakdown, 1),
///     "## Person 1 weekly salary $1693.00 weekly superannuation contribution $167.77 \
///      weekly withholding tax $343.80 weekly income $1181.43 income tax $16243.39 \
///      tax return $1634.21."
/// );
/// ```
pub fn compact_summary(breakdown: &TaxBreakdown, person_number: usize) -> String {
    format!(
        "## Person {} weekly salary {} weekly superannuation contribution {} \
         weekly withholding tax {} weekly income {} income tax {} tax return {}.",
        person_number,
        format_plain_currency(breakdown.weekly_amount),
        format_plain_currency(breakdown.weekly_super),
        format_plain_currency(breakdown.weekly_withholding),
        format_plain_currency(breakdown.weekly_net),
        format_plain_currency(breakdown.annual_tax),
        format_plain_currency(breakdown.tax_refund),
    )
}

/// Renders one compact line per batch item.
pub fn compact_report(results: &[BatchItemResult]) -> String {
    join_lines(
        results
            .iter()
            .enumerate()
            .map(|(index, result)| match result {
                Ok(breakdown) => compact_summary(breakdown, index + 1),
                Err(failure) => format!("## Person {} failed: {}", index + 1, failure.error),
            })
            .collect(),
    )
}
