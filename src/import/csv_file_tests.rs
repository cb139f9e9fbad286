#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use std::io::Write;

use super::*;
use crate::models::{ChequeStatus, PayMethod, Status, TxnType};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_full_interchange_file() {
    let file = write_temp(
        "date,person,amount,type,method,chequeStatus,status,description\n\
         2025-07-10,Azhar,125000.00,received,cash,none,pending,first instalment\n\
         2025-07-10,Shabbir,1230000.00,paid,cheque,processing,pending,\n",
    );

    let payments = read_payments(file.path()).unwrap();
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].person, "Azhar");
    assert_eq!(payments[0].amount, dec!(125000.00));
    assert_eq!(payments[0].txn_type, TxnType::Received);
    assert_eq!(payments[0].status, Status::Pending);
    assert_eq!(payments[0].description, "first instalment");
    assert_eq!(payments[1].method, PayMethod::Cheque);
    assert_eq!(payments[1].cheque_status, ChequeStatus::Processing);
}

#[test]
fn test_read_columns_by_name_not_position() {
    let file = write_temp(
        "amount,date,type,method,person\n\
         221500,2025-07-10,paid,cash,Shabbir\n",
    );

    let payments = read_payments(file.path()).unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, dec!(221500));
    assert_eq!(payments[0].person, "Shabbir");
    // Optional columns default when absent
    assert_eq!(payments[0].cheque_status, ChequeStatus::None);
    assert_eq!(payments[0].status, Status::Completed);
    assert_eq!(payments[0].description, "");
}

#[test]
fn test_read_formatted_amounts() {
    let file = write_temp(
        "date,person,amount,type,method\n\
         2025-07-10,Burhan,\"Rs. 2,214,885.00\",received,cash\n",
    );
    let payments = read_payments(file.path()).unwrap();
    assert_eq!(payments[0].amount, dec!(2214885.00));
}

#[test]
fn test_read_missing_required_column() {
    let file = write_temp("date,person,amount,type\n2025-07-10,Azhar,10,received\n");
    let err = read_payments(file.path()).unwrap_err().to_string();
    assert!(err.contains("method"));
}

#[test]
fn test_read_unknown_enum_value() {
    let file = write_temp(
        "date,person,amount,type,method\n\
         2025-07-10,Azhar,10,received,wire\n",
    );
    let err = format!("{:#}", read_payments(file.path()).unwrap_err());
    assert!(err.contains("Row 2"));
    assert!(err.contains("wire"));
}

#[test]
fn test_read_rejects_invalid_batch() {
    // Cheque status on a cash record: whole file is rejected, naming the row
    let file = write_temp(
        "date,person,amount,type,method,chequeStatus,status,description\n\
         2025-07-10,Azhar,10,received,cash,none,completed,\n\
         2025-07-10,Taha,20,received,cash,bounced,completed,\n",
    );
    let err = format!("{:#}", read_payments(file.path()).unwrap_err());
    assert!(err.contains("invalid record"));
    assert!(err.contains("record 2"));
}

#[test]
fn test_read_rejects_bad_date() {
    let file = write_temp(
        "date,person,amount,type,method\n\
         10/07/2025,Azhar,10,received,cash\n",
    );
    assert!(read_payments(file.path()).is_err());
}

#[test]
fn test_write_then_read_roundtrip() {
    let payments = vec![
        crate::models::Payment::new(
            "2025-07-10".into(),
            "Azhar".into(),
            dec!(125000.00),
            TxnType::Received,
            PayMethod::Cash,
            ChequeStatus::None,
            Status::Pending,
            "first instalment".into(),
        ),
        crate::models::Payment::new(
            "2025-07-12".into(),
            "Shabbir".into(),
            dec!(1230000.00),
            TxnType::Paid,
            PayMethod::Cheque,
            ChequeStatus::Processing,
            Status::Pending,
            String::new(),
        ),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payments.csv");
    let count = write_payments(&path, &payments).unwrap();
    assert_eq!(count, 2);

    let back = read_payments(&path).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].person, "Azhar");
    assert_eq!(back[0].status, Status::Pending);
    assert_eq!(back[1].cheque_status, ChequeStatus::Processing);
    assert_eq!(back[1].amount, dec!(1230000.00));
}

#[test]
fn test_write_header_uses_interchange_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payments.csv");
    write_payments(&path, &[]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header, COLUMNS.join(","));
}

#[test]
fn test_read_empty_file_with_header() {
    let file = write_temp("date,person,amount,type,method,chequeStatus,status,description\n");
    let payments = read_payments(file.path()).unwrap();
    assert!(payments.is_empty());
}
