use chrono::NaiveDate;

use super::{ChequeStatus, PayMethod, TxnType};

/// A transient query over payments. Every field is optional; an unset field
/// always passes. Date bounds are inclusive and held as fixed-width ISO
/// strings so the engine can compare them lexically.
///
/// Two cheque-status modes exist side by side: `cheque_status_text` is the
/// legacy substring match against the display label ("done" matches
/// "Processing Done"), `cheque_status` is an exact enum match for callers
/// that want strict semantics.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub person: Option<String>,
    pub txn_type: Option<TxnType>,
    pub method: Option<PayMethod>,
    pub cheque_status_text: Option<String>,
    pub cheque_status: Option<ChequeStatus>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.person.is_none()
            && self.txn_type.is_none()
            && self.method.is_none()
            && self.cheque_status_text.is_none()
            && self.cheque_status.is_none()
    }

    /// Validate a user-supplied date bound. A bound that does not parse as a
    /// real `YYYY-MM-DD` date is treated as unset rather than failing the
    /// query.
    pub fn date_bound(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Short human description of the active criteria, for the status bar.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(ref d) = self.start_date {
            parts.push(format!("from {d}"));
        }
        if let Some(ref d) = self.end_date {
            parts.push(format!("to {d}"));
        }
        if let Some(ref p) = self.person {
            parts.push(format!("person~'{p}'"));
        }
        if let Some(t) = self.txn_type {
            parts.push(t.as_str().to_string());
        }
        if let Some(m) = self.method {
            parts.push(m.as_str().to_string());
        }
        if let Some(ref s) = self.cheque_status_text {
            parts.push(format!("cheque~'{s}'"));
        }
        if let Some(s) = self.cheque_status {
            parts.push(format!("cheque={}", s.as_str()));
        }
        parts.join(", ")
    }
}
