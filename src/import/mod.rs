mod csv_file;

pub(crate) use csv_file::{parse_amount, read_payments, write_payments};
