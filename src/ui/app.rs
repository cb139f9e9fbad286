use anyhow::Result;

use crate::db::Database;
use crate::engine::{self, SummaryTotals};
use crate::models::{FilterSpec, Payment, Person};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Payments,
    People,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Payments, Self::People]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Payments => write!(f, "Payments"),
            Self::People => write!(f, "People"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeletePayment { id: i64, label: String },
    DeletePerson { id: i64, name: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// The full ledger in entry order.
    pub(crate) payments: Vec<Payment>,
    /// The current view after applying the filter and live search.
    pub(crate) filtered: Vec<Payment>,
    pub(crate) filter: FilterSpec,
    /// Always computed over the full ledger, never the filtered view.
    pub(crate) totals: SummaryTotals,
    pub(crate) payment_index: usize,
    pub(crate) payment_scroll: usize,

    pub(crate) people: Vec<Person>,
    pub(crate) person_index: usize,
    pub(crate) person_scroll: usize,

    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,

            payments: Vec::new(),
            filtered: Vec::new(),
            filter: FilterSpec::default(),
            totals: SummaryTotals::default(),
            payment_index: 0,
            payment_scroll: 0,

            people: Vec::new(),
            person_index: 0,
            person_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Reload the ledger and recompute both the filtered view and the
    /// dashboard totals. Totals come from the full ledger so a narrowed
    /// view never changes the headline figures.
    pub(crate) fn refresh_payments(&mut self, db: &Database) -> Result<()> {
        self.payments = db.get_payments()?;
        self.totals = engine::summarize(&self.payments);

        let spec = self.effective_filter();
        self.filtered = engine::filter(&self.payments, &spec);

        if self.payment_index >= self.filtered.len() && !self.filtered.is_empty() {
            self.payment_index = self.filtered.len() - 1;
        }
        Ok(())
    }

    /// Live search narrows the person predicate on top of the stored filter.
    pub(crate) fn effective_filter(&self) -> FilterSpec {
        let mut spec = self.filter.clone();
        if !self.search_input.is_empty() {
            spec.person = Some(self.search_input.clone());
        }
        spec
    }

    pub(crate) fn refresh_people(&mut self, db: &Database) -> Result<()> {
        self.people = db.get_people()?;
        if self.person_index >= self.people.len() && !self.people.is_empty() {
            self.person_index = self.people.len() - 1;
        }
        Ok(())
    }

    pub(crate) fn refresh_all(&mut self, db: &Database) -> Result<()> {
        self.refresh_payments(db)?;
        self.refresh_people(db)?;
        Ok(())
    }

    pub(crate) fn clear_filter(&mut self) {
        self.filter = FilterSpec::default();
        self.payment_index = 0;
        self.payment_scroll = 0;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
