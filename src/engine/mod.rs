//! The filter and summary engine. Pure functions over payment snapshots:
//! no state, no I/O, no mutation of inputs.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{ChequeStatus, FilterSpec, PayMethod, Payment, TxnType};

/// Running totals for one direction (received or paid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideTotals {
    pub total: Decimal,
    pub cash: Decimal,
    pub cheque: Decimal,
    pub pending: Decimal,
}

/// Derived summary figures. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryTotals {
    pub received: SideTotals,
    pub paid: SideTotals,
    pub net_balance: Decimal,
}

/// Returns the payments matching `spec`, in their original relative order.
/// All specified predicates must pass; an unset predicate always passes.
/// An empty result is a plain empty vec whether the dataset or the filter
/// produced it.
pub fn filter(payments: &[Payment], spec: &FilterSpec) -> Vec<Payment> {
    payments
        .iter()
        .filter(|p| matches(p, spec))
        .cloned()
        .collect()
}

/// Whether a single payment passes every specified predicate in `spec`.
pub fn matches(payment: &Payment, spec: &FilterSpec) -> bool {
    // Inclusive date range; lexical compare is valid because the format is
    // fixed-width YYYY-MM-DD.
    if let Some(ref start) = spec.start_date {
        if payment.date.as_str() < start.as_str() {
            return false;
        }
    }
    if let Some(ref end) = spec.end_date {
        if payment.date.as_str() > end.as_str() {
            return false;
        }
    }

    if let Some(ref person) = spec.person {
        if !payment
            .person
            .to_lowercase()
            .contains(&person.to_lowercase())
        {
            return false;
        }
    }

    if let Some(txn_type) = spec.txn_type {
        if payment.txn_type != txn_type {
            return false;
        }
    }

    if let Some(method) = spec.method {
        if payment.method != method {
            return false;
        }
    }

    // Legacy mode: substring match against the display label. A cash
    // payment's label is empty, so any non-empty filter text excludes it;
    // empty filter text matches everything.
    if let Some(ref text) = spec.cheque_status_text {
        if !payment
            .cheque_status
            .label()
            .to_lowercase()
            .contains(&text.to_lowercase())
        {
            return false;
        }
    }

    if let Some(cheque_status) = spec.cheque_status {
        if payment.cheque_status != cheque_status {
            return false;
        }
    }

    true
}

/// Single-pass aggregation over `payments`. Empty input yields all zeroes.
/// Decimal accumulation keeps minor-unit precision exact; the net balance
/// is derived once at the end rather than accumulated.
pub fn summarize(payments: &[Payment]) -> SummaryTotals {
    let mut received = SideTotals::default();
    let mut paid = SideTotals::default();

    for p in payments {
        let side = match p.txn_type {
            TxnType::Received => &mut received,
            TxnType::Paid => &mut paid,
        };
        side.total += p.amount;
        match p.method {
            PayMethod::Cash => side.cash += p.amount,
            PayMethod::Cheque => side.cheque += p.amount,
        }
        if p.is_pending() {
            side.pending += p.amount;
        }
    }

    SummaryTotals {
        received,
        paid,
        net_balance: received.total - paid.total,
    }
}

/// Fail-fast batch validation. The first payment violating an invariant
/// rejects the whole batch, naming the record; silently coercing bad data
/// would corrupt the summary totals downstream.
pub fn validate(payments: &[Payment]) -> Result<()> {
    for (i, p) in payments.iter().enumerate() {
        validate_one(p).map_err(|e| {
            anyhow::anyhow!("record {} ({} {}): {e}", i + 1, p.date, p.person)
        })?;
    }
    Ok(())
}

fn validate_one(p: &Payment) -> Result<()> {
    if p.amount < Decimal::ZERO {
        anyhow::bail!("amount must be non-negative, got {}", p.amount);
    }
    // The range filter compares dates lexically, which is only sound for
    // fixed-width dates; "2025-7-9" parses but sorts before "2025-08-01".
    match NaiveDate::parse_from_str(&p.date, "%Y-%m-%d") {
        Ok(d) if d.format("%Y-%m-%d").to_string() == p.date => {}
        _ => anyhow::bail!("date '{}' is not a valid YYYY-MM-DD date", p.date),
    }
    if p.method == PayMethod::Cash && p.cheque_status != ChequeStatus::None {
        anyhow::bail!(
            "cash payment cannot carry cheque status '{}'",
            p.cheque_status.as_str()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests;
