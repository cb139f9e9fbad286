mod filter;
mod payment;
mod person;

pub use filter::FilterSpec;
pub use payment::{ChequeStatus, PayMethod, Payment, Status, TxnType};
pub use person::{Person, PersonCategory};
