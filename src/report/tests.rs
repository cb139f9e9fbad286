#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::{ChequeStatus, PayMethod, Status, TxnType};

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
            String::new(),
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

#[test]
fn test_report_headline_totals() {
    let html = render_summary(&sample());
    assert!(html.contains("Received from others: Rs. 2,339,885.00"));
    assert!(html.contains("Paid to others: Rs. 1,451,500.00"));
    assert!(html.contains("Net balance: Rs. 888,385.00"));
}

#[test]
fn test_report_pending_and_method_breakdown() {
    let html = render_summary(&sample());
    // Received side: one pending cash payment
    assert!(html.contains("Pending: Rs. 125,000.00"));
    // Paid side: cash vs cheque split
    assert!(html.contains("Cash: Rs. 221,500.00 | Cheque: Rs. 1,230,000.00"));
    assert!(html.contains("Pending: Rs. 1,230,000.00"));
}

#[test]
fn test_report_table_rows() {
    let html = render_summary(&sample());
    assert_eq!(html.matches("<tr><td>").count(), 4);
    assert!(html.contains("<td>Received from</td>"));
    assert!(html.contains("<td>Paid to</td>"));
    assert!(html.contains("<td>Processing</td>"));
    assert!(html.contains("<td>site materials</td>"));
}

#[test]
fn test_report_empty_dataset() {
    let html = render_summary(&[]);
    assert!(html.contains("Received from others: Rs. 0.00"));
    assert!(html.contains("Net balance: Rs. 0.00"));
    assert_eq!(html.matches("<tr><td>").count(), 0);
}

#[test]
fn test_report_escapes_markup() {
    let payments = vec![Payment::new(
        "2025-07-10".into(),
        "A & B <Traders>".into(),
        dec!(100),
        TxnType::Received,
        PayMethod::Cash,
        ChequeStatus::None,
        Status::Completed,
        "<script>".into(),
    )];
    let html = render_summary(&payments);
    assert!(html.contains("A &amp; B &lt;Traders&gt;"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_write_summary_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docs").join("index.html");
    write_summary(&path, &sample()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Payment Summary"));
}
