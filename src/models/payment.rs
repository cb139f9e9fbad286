use rust_decimal::Decimal;

/// Direction of a payment relative to the tracked party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnType {
    Received,
    Paid,
}

impl TxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Paid => "paid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "received" => Some(Self::Received),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Paid => "Paid",
        }
    }
}

impl std::fmt::Display for TxnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayMethod {
    Cash,
    Cheque,
}

impl PayMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Cheque => "cheque",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "cheque" | "check" => Some(Self::Cheque),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Cheque => "Cheque",
        }
    }
}

impl std::fmt::Display for PayMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lifecycle state of a cheque-method payment, independent of the overall
/// settlement status. `None` is the only valid value for cash payments and
/// renders as an empty display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChequeStatus {
    None,
    ReceivedGiven,
    Processing,
    Bounced,
    ProcessingDone,
}

impl ChequeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ReceivedGiven => "received_given",
            Self::Processing => "processing",
            Self::Bounced => "bounced",
            Self::ProcessingDone => "processing_done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "" => Some(Self::None),
            "received_given" => Some(Self::ReceivedGiven),
            "processing" => Some(Self::Processing),
            "bounced" => Some(Self::Bounced),
            "processing_done" => Some(Self::ProcessingDone),
            _ => None,
        }
    }

    /// Fixed display label, used for table rendering and for the legacy
    /// substring filter.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::ReceivedGiven => "Received/Given",
            Self::Processing => "Processing",
            Self::Bounced => "Bounced",
            Self::ProcessingDone => "Processing Done",
        }
    }

    pub fn all() -> &'static [ChequeStatus] {
        &[
            Self::None,
            Self::ReceivedGiven,
            Self::Processing,
            Self::Bounced,
            Self::ProcessingDone,
        ]
    }
}

impl std::fmt::Display for ChequeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Overall settlement status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Completed,
    Pending,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "completed" => Some(Self::Completed),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One payment event. Amounts are non-negative; direction is carried by
/// `txn_type` rather than the sign.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: Option<i64>,
    pub date: String,
    pub person: String,
    pub amount: Decimal,
    pub txn_type: TxnType,
    pub method: PayMethod,
    pub cheque_status: ChequeStatus,
    pub status: Status,
    pub description: String,
    pub created_at: String,
}

impl Payment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: String,
        person: String,
        amount: Decimal,
        txn_type: TxnType,
        method: PayMethod,
        cheque_status: ChequeStatus,
        status: Status,
        description: String,
    ) -> Self {
        Self {
            id: None,
            date,
            person,
            amount,
            txn_type,
            method,
            cheque_status,
            status,
            description,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_received(&self) -> bool {
        self.txn_type == TxnType::Received
    }

    pub fn is_paid(&self) -> bool {
        self.txn_type == TxnType::Paid
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }
}
