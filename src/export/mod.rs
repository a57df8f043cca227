//! Semicolon-delimited report exports.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use chrono::NaiveDateTime;

use crate::core::services::{CategoryBreakdown, PeriodSummary, TransactionService};
use crate::errors::LedgerError;
use crate::ledger::Transaction;
use crate::utils::format_amount;

pub const TRANSACTIONS_HEADER: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];
const CATEGORY_HEADER: [&str; 2] = ["Category", "Amount"];
const DATE_FORMAT: &str = "%d.%m.%Y";
const OPEN_BOUND: &str = "All time";

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Header row, then one row per transaction, newest first.
pub fn write_transactions<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> Result<(), LedgerError> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    TransactionService::sort_newest_first(&mut ordered);

    let mut csv = csv_writer(writer);
    csv.write_record(TRANSACTIONS_HEADER)?;
    for txn in ordered {
        csv.write_record([
            txn.date.format(DATE_FORMAT).to_string().as_str(),
            txn.kind.label(),
            txn.category.as_str(),
            txn.description.as_str(),
            format_amount(txn.amount).as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Title, totals, then expense and income breakdowns, largest first.
///
/// Blocks are separated by empty lines. Each block gets its own csv writer so
/// the separators can go to `out` untouched.
pub fn write_summary<W: Write>(summary: &PeriodSummary, mut out: W) -> Result<(), LedgerError> {
    let mut csv = csv_writer(&mut out);
    csv.write_record(["BUDGET REPORT"])?;
    csv.write_record([format!(
        "Period: {} - {}",
        bound_label(summary.range.start),
        bound_label(summary.range.end)
    )])?;
    csv.flush()?;
    drop(csv);
    out.write_all(b"\n")?;

    let mut csv = csv_writer(&mut out);
    csv.write_record(["OVERALL STATISTICS"])?;
    csv.write_record(["Income", format_amount(summary.income).as_str()])?;
    csv.write_record(["Expenses", format_amount(summary.expenses).as_str()])?;
    csv.write_record(["Balance", format_amount(summary.balance).as_str()])?;
    csv.flush()?;
    drop(csv);
    out.write_all(b"\n")?;

    write_breakdown(&mut out, "EXPENSES BY CATEGORY", &summary.expense_by_category)?;
    out.write_all(b"\n")?;
    write_breakdown(&mut out, "INCOME BY CATEGORY", &summary.income_by_category)?;

    out.flush()?;
    Ok(())
}

pub fn transactions_to_string(transactions: &[Transaction]) -> Result<String, LedgerError> {
    let mut buf = Vec::new();
    write_transactions(transactions, &mut buf)?;
    into_utf8(buf)
}

pub fn summary_to_string(summary: &PeriodSummary) -> Result<String, LedgerError> {
    let mut buf = Vec::new();
    write_summary(summary, &mut buf)?;
    into_utf8(buf)
}

/// Overwrites `path` with the transaction export. The parent directory must exist.
pub fn write_transactions_to_path(
    transactions: &[Transaction],
    path: &Path,
) -> Result<(), LedgerError> {
    let file = BufWriter::new(File::create(path)?);
    write_transactions(transactions, file)
}

/// Overwrites `path` with the summary export. The parent directory must exist.
pub fn write_summary_to_path(summary: &PeriodSummary, path: &Path) -> Result<(), LedgerError> {
    let file = BufWriter::new(File::create(path)?);
    write_summary(summary, file)
}

fn write_breakdown<W: Write>(
    out: &mut W,
    title: &str,
    breakdown: &CategoryBreakdown,
) -> Result<(), LedgerError> {
    let mut csv = csv_writer(out);
    csv.write_record([title])?;
    csv.write_record(CATEGORY_HEADER)?;
    for entry in breakdown.iter() {
        csv.write_record([entry.category.as_str(), format_amount(entry.amount).as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

fn bound_label(bound: Option<NaiveDateTime>) -> String {
    bound
        .map(|at| at.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| OPEN_BOUND.to_string())
}

fn into_utf8(buf: Vec<u8>) -> Result<String, LedgerError> {
    String::from_utf8(buf)
        .map_err(|err| LedgerError::InvalidInput(format!("export is not UTF-8: {err}")))
}
