use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::engine;
use crate::models::{ChequeStatus, PayMethod, Payment, Status, TxnType};

/// Interchange column order. The names are the contract and must round-trip
/// bit-exact across implementations.
pub(crate) const COLUMNS: [&str; 8] = [
    "date",
    "person",
    "amount",
    "type",
    "method",
    "chequeStatus",
    "status",
    "description",
];

/// Read a payments CSV. The header row is matched by name so column order
/// in the file does not matter; the whole batch is validated before any
/// caller sees it, so a single bad row rejects the file.
pub(crate) fn read_payments(path: &Path) -> Result<Vec<Payment>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .with_context(|| format!("CSV is missing required column '{name}'"))
    };

    let date_col = col("date")?;
    let person_col = col("person")?;
    let amount_col = col("amount")?;
    let type_col = col("type")?;
    let method_col = col("method")?;
    // Optional columns: absent means cash-era data with defaults
    let cheque_col = headers.iter().position(|h| h.trim() == "chequeStatus");
    let status_col = headers.iter().position(|h| h.trim() == "status");
    let desc_col = headers.iter().position(|h| h.trim() == "description");

    let mut payments = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Row {}: failed to read", i + 2))?;
        let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or("");

        let amount = parse_amount(field(amount_col))
            .with_context(|| format!("Row {}: failed to parse amount", i + 2))?;

        let txn_type = TxnType::parse(field(type_col))
            .with_context(|| format!("Row {}: unknown type '{}'", i + 2, field(type_col)))?;
        let method = PayMethod::parse(field(method_col))
            .with_context(|| format!("Row {}: unknown method '{}'", i + 2, field(method_col)))?;
        let cheque_status = match cheque_col {
            Some(c) => ChequeStatus::parse(field(c)).with_context(|| {
                format!("Row {}: unknown chequeStatus '{}'", i + 2, field(c))
            })?,
            None => ChequeStatus::None,
        };
        let status = match status_col {
            Some(c) => Status::parse(field(c))
                .with_context(|| format!("Row {}: unknown status '{}'", i + 2, field(c)))?,
            None => Status::Completed,
        };

        payments.push(Payment::new(
            field(date_col).to_string(),
            field(person_col).to_string(),
            amount,
            txn_type,
            method,
            cheque_status,
            status,
            desc_col.map(field).unwrap_or("").to_string(),
        ));
    }

    engine::validate(&payments).context("CSV contains an invalid record")?;
    Ok(payments)
}

/// Write payments in the interchange format. Returns the row count.
pub(crate) fn write_payments(path: &Path, payments: &[Payment]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    wtr.write_record(COLUMNS)?;
    for p in payments {
        wtr.write_record([
            p.date.as_str(),
            p.person.as_str(),
            &p.amount.to_string(),
            p.txn_type.as_str(),
            p.method.as_str(),
            p.cheque_status.as_str(),
            p.status.as_str(),
            p.description.as_str(),
        ])?;
    }
    wtr.flush().context("Failed to flush CSV file")?;
    Ok(payments.len())
}

pub(crate) fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace("Rs.", "")
        .replace(['₹', ','], "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned).with_context(|| format!("Failed to parse '{s}' as decimal"))
}

#[cfg(test)]
#[path = "csv_file_tests.rs"]
mod tests;
