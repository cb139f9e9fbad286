#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{ChequeStatus, FilterSpec, PayMethod, Payment, Status, TxnType};

/// The four-record sample ledger: two received/cash, one paid/cash,
/// one paid/cheque in processing. All dated 2025-07-10.
fn sample() -> Vec<Payment> {
    vec![
        Payment::new(
            "2025-07-10".into(),
            "Azhar".into(),
            dec!(125000.00),
            TxnType::Received,
            PayMethod::Cash,
            ChequeStatus::None,
            Status::Pending,
            "first instalment".into(),
        ),
        Payment::new(
            "2025-07-10".into(),
            "Burhan".into(),
            dec!(2214885.00),
            TxnType::Received,
            PayMethod::Cash,
            ChequeStatus::None,
            Status::Completed,
            String::new(),
        ),
        Payment::new(
            "2025-07-10".into(),
            "Shabbir".into(),
            dec!(221500.00),
            TxnType::Paid,
            PayMethod::Cash,
            ChequeStatus::None,
            Status::Completed,
            "site materials".into(),
        ),
        Payment::new(
            "2025-07-10".into(),
            "Shabbir".into(),
            dec!(1230000.00),
            TxnType::Paid,
            PayMethod::Cheque,
            ChequeStatus::Processing,
            Status::Pending,
            String::new(),
        ),
    ]
}

// ── summarize ─────────────────────────────────────────────────

#[test]
fn test_summarize_sample_ledger() {
    let totals = summarize(&sample());
    assert_eq!(totals.received.total, dec!(2339885.00));
    assert_eq!(totals.paid.total, dec!(1451500.00));
    assert_eq!(totals.net_balance, dec!(888385.00));
    assert_eq!(totals.received.pending, dec!(125000.00));
    assert_eq!(totals.paid.cash, dec!(221500.00));
    assert_eq!(totals.paid.cheque, dec!(1230000.00));
}

#[test]
fn test_summarize_empty_is_all_zero() {
    let totals = summarize(&[]);
    assert_eq!(totals, SummaryTotals::default());
    assert_eq!(totals.net_balance, Decimal::ZERO);
}

#[test]
fn test_summarize_additivity() {
    // Each side decomposes exactly into cash + cheque, no remainder.
    let totals = summarize(&sample());
    assert_eq!(
        totals.received.total,
        totals.received.cash + totals.received.cheque
    );
    assert_eq!(totals.paid.total, totals.paid.cash + totals.paid.cheque);
}

#[test]
fn test_summarize_net_balance_identity() {
    let totals = summarize(&sample());
    assert_eq!(
        totals.net_balance,
        totals.received.total - totals.paid.total
    );
}

#[test]
fn test_summarize_negative_net_balance() {
    let payments = sample()
        .into_iter()
        .filter(|p| p.is_paid())
        .collect::<Vec<_>>();
    let totals = summarize(&payments);
    assert_eq!(totals.received.total, Decimal::ZERO);
    assert_eq!(totals.net_balance, dec!(-1451500.00));
}

#[test]
fn test_summarize_filtered_subset_is_explicit() {
    // Filtered totals are a separate code path: summarize(filter(..)).
    let all = sample();
    let spec = FilterSpec {
        txn_type: Some(TxnType::Received),
        ..Default::default()
    };
    let subset = summarize(&filter(&all, &spec));
    assert_eq!(subset.received.total, dec!(2339885.00));
    assert_eq!(subset.paid.total, Decimal::ZERO);
    // The full-set summary is unaffected.
    assert_eq!(summarize(&all).paid.total, dec!(1451500.00));
}

// ── filter: sample scenarios ──────────────────────────────────

#[test]
fn test_filter_empty_spec_passes_all() {
    let all = sample();
    let out = filter(&all, &FilterSpec::default());
    assert_eq!(out.len(), all.len());
}

#[test]
fn test_filter_by_type_received() {
    let out = filter(
        &sample(),
        &FilterSpec {
            txn_type: Some(TxnType::Received),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].person, "Azhar");
    assert_eq!(out[1].person, "Burhan");
}

#[test]
fn test_filter_by_method_cheque() {
    let out = filter(
        &sample(),
        &FilterSpec {
            method: Some(PayMethod::Cheque),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].amount, dec!(1230000.00));
}

#[test]
fn test_filter_by_cheque_status_text() {
    // Cash records render an empty label, so "processing" excludes them.
    let out = filter(
        &sample(),
        &FilterSpec {
            cheque_status_text: Some("processing".into()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].cheque_status, ChequeStatus::Processing);
}

#[test]
fn test_filter_cheque_status_text_empty_matches_all() {
    let all = sample();
    let out = filter(
        &all,
        &FilterSpec {
            cheque_status_text: Some(String::new()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), all.len());
}

#[test]
fn test_filter_cheque_status_text_substring_quirk() {
    // Legacy behavior: "done" matches "Processing Done", and so does
    // "process" match both Processing and Processing Done.
    let mut all = sample();
    all.push(Payment::new(
        "2025-07-10".into(),
        "Taha".into(),
        dec!(50000.00),
        TxnType::Received,
        PayMethod::Cheque,
        ChequeStatus::ProcessingDone,
        Status::Completed,
        String::new(),
    ));

    let done = filter(
        &all,
        &FilterSpec {
            cheque_status_text: Some("done".into()),
            ..Default::default()
        },
    );
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].cheque_status, ChequeStatus::ProcessingDone);

    let process = filter(
        &all,
        &FilterSpec {
            cheque_status_text: Some("process".into()),
            ..Default::default()
        },
    );
    assert_eq!(process.len(), 2);
}

#[test]
fn test_filter_cheque_status_exact_mode() {
    let mut all = sample();
    all.push(Payment::new(
        "2025-07-10".into(),
        "Taha".into(),
        dec!(50000.00),
        TxnType::Received,
        PayMethod::Cheque,
        ChequeStatus::ProcessingDone,
        Status::Completed,
        String::new(),
    ));

    // Exact mode does not suffer the substring quirk.
    let out = filter(
        &all,
        &FilterSpec {
            cheque_status: Some(ChequeStatus::Processing),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].cheque_status, ChequeStatus::Processing);
}

#[test]
fn test_filter_by_start_date_after_all() {
    let out = filter(
        &sample(),
        &FilterSpec {
            start_date: Some("2025-07-11".into()),
            ..Default::default()
        },
    );
    assert!(out.is_empty());
}

#[test]
fn test_filter_date_range_inclusive() {
    let spec = FilterSpec {
        start_date: Some("2025-07-10".into()),
        end_date: Some("2025-07-10".into()),
        ..Default::default()
    };
    assert_eq!(filter(&sample(), &spec).len(), 4);
}

#[test]
fn test_filter_by_person_case_insensitive() {
    let out = filter(
        &sample(),
        &FilterSpec {
            person: Some("shabbir".into()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|p| p.is_paid()));
}

#[test]
fn test_filter_person_substring() {
    let out = filter(
        &sample(),
        &FilterSpec {
            person: Some("bur".into()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].person, "Burhan");
}

// ── filter: properties ────────────────────────────────────────

#[test]
fn test_filter_conjunction_only_shrinks() {
    let all = sample();
    let loose = FilterSpec {
        txn_type: Some(TxnType::Paid),
        ..Default::default()
    };
    let tight = FilterSpec {
        txn_type: Some(TxnType::Paid),
        method: Some(PayMethod::Cash),
        ..Default::default()
    };
    let loose_out = filter(&all, &loose);
    let tight_out = filter(&all, &tight);
    assert!(tight_out.len() <= loose_out.len());
    // Every record passing the tighter spec also passes the looser one.
    for p in &tight_out {
        assert!(matches(p, &loose));
    }
}

#[test]
fn test_filter_idempotent() {
    let all = sample();
    let spec = FilterSpec {
        person: Some("shabbir".into()),
        method: Some(PayMethod::Cheque),
        ..Default::default()
    };
    let once = filter(&all, &spec);
    let twice = filter(&once, &spec);
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.person, b.person);
        assert_eq!(a.amount, b.amount);
    }
}

#[test]
fn test_filter_preserves_order() {
    let all = sample();
    let out = filter(
        &all,
        &FilterSpec {
            method: Some(PayMethod::Cash),
            ..Default::default()
        },
    );
    let amounts: Vec<Decimal> = out.iter().map(|p| p.amount).collect();
    assert_eq!(
        amounts,
        vec![dec!(125000.00), dec!(2214885.00), dec!(221500.00)]
    );
}

#[test]
fn test_filter_empty_dataset() {
    let spec = FilterSpec {
        txn_type: Some(TxnType::Received),
        ..Default::default()
    };
    assert!(filter(&[], &spec).is_empty());
    assert!(filter(&[], &FilterSpec::default()).is_empty());
}

#[test]
fn test_filter_does_not_mutate_input() {
    let all = sample();
    let before: Vec<String> = all.iter().map(|p| p.person.clone()).collect();
    let _ = filter(
        &all,
        &FilterSpec {
            txn_type: Some(TxnType::Paid),
            ..Default::default()
        },
    );
    let after: Vec<String> = all.iter().map(|p| p.person.clone()).collect();
    assert_eq!(before, after);
}

// ── validate ──────────────────────────────────────────────────

#[test]
fn test_validate_sample_ok() {
    assert!(validate(&sample()).is_ok());
}

#[test]
fn test_validate_empty_ok() {
    assert!(validate(&[]).is_ok());
}

#[test]
fn test_validate_rejects_negative_amount() {
    let mut all = sample();
    all[2].amount = dec!(-221500.00);
    let err = validate(&all).unwrap_err().to_string();
    assert!(err.contains("record 3"));
    assert!(err.contains("non-negative"));
}

#[test]
fn test_validate_rejects_bad_date() {
    let mut all = sample();
    all[0].date = "2025-02-30".into();
    let err = validate(&all).unwrap_err().to_string();
    assert!(err.contains("record 1"));
    assert!(err.contains("valid"));
}

#[test]
fn test_validate_rejects_noncanonical_date() {
    // A non-zero-padded date would sort before "2025-08-01" lexically and
    // leak a July payment into an August range, so validation must demand
    // the canonical fixed-width form.
    let mut all = sample();
    all[0].date = "2025-7-9".into();
    let err = validate(&all).unwrap_err().to_string();
    assert!(err.contains("record 1"));
    assert!(err.contains("2025-7-9"));

    all[0].date = "2025-07-09".into();
    assert!(validate(&all).is_ok());
    let out = filter(
        &all,
        &FilterSpec {
            start_date: Some("2025-08-01".into()),
            ..Default::default()
        },
    );
    assert!(out.is_empty());
}

#[test]
fn test_validate_rejects_cheque_status_on_cash() {
    let mut all = sample();
    all[1].cheque_status = ChequeStatus::Bounced;
    let err = validate(&all).unwrap_err().to_string();
    assert!(err.contains("record 2"));
    assert!(err.contains("cheque status"));
}

#[test]
fn test_validate_fails_fast_on_first_offender() {
    let mut all = sample();
    all[0].amount = dec!(-1.00);
    all[3].date = "garbage".into();
    let err = validate(&all).unwrap_err().to_string();
    assert!(err.contains("record 1"));
}
