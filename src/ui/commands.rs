use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::db::Database;
use crate::models::{
    ChequeStatus, FilterSpec, PayMethod, Payment, Person, PersonCategory, Status, TxnType,
};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit PayTrack", cmd_quit, r);
    register_command!("quit", "Quit PayTrack", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("p", "Go to Payments", cmd_payments, r);
    register_command!("payments", "Go to Payments", cmd_payments, r);
    register_command!("people", "Go to People", cmd_people, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add payment (e.g. :add 2025-07-10 Azhar 125000 received cash)",
        cmd_add,
        r
    );
    register_command!("a", "Add payment", cmd_add, r);
    register_command!(
        "person",
        "Register person (e.g. :person Azhar investor)",
        cmd_person,
        r
    );
    register_command!(
        "delete-person",
        "Delete selected person (refused while payments exist)",
        cmd_delete_person,
        r
    );
    register_command!("delete", "Delete selected payment", cmd_delete, r);
    register_command!(
        "filter",
        "Filter payments (e.g. :filter person=shabbir type=paid from=2025-07-01)",
        cmd_filter,
        r
    );
    register_command!("f", "Filter payments", cmd_filter, r);
    register_command!(
        "search",
        "Search payments by person (e.g. :search azhar)",
        cmd_search,
        r
    );
    register_command!("s", "Search payments by person", cmd_search, r);
    register_command!(
        "cheque",
        "Set cheque status of selected payment (e.g. :cheque processing_done)",
        cmd_cheque,
        r
    );
    register_command!(
        "status",
        "Set settlement status of selected payment (completed|pending)",
        cmd_status,
        r
    );
    register_command!(
        "report",
        "Write HTML summary report (e.g. :report ~/summary.html)",
        cmd_report,
        r
    );
    register_command!(
        "export",
        "Export payments to CSV (e.g. :export ~/payments.csv)",
        cmd_export,
        r
    );
    register_command!(
        "import",
        "Import payments from CSV (e.g. :import ~/payments.csv)",
        cmd_import,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, db)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_payments(db)?;
    Ok(())
}

fn cmd_payments(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Payments;
    app.refresh_payments(db)?;
    Ok(())
}

fn cmd_people(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::People;
    app.refresh_people(db)?;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// `:add <date> <person> <amount> <received|paid> <cash|cheque> [pending] [description...]`
/// Cheque payments start in the `received_given` lifecycle state.
fn cmd_add(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    const USAGE: &str =
        "Usage: :add <date> <person> <amount> <received|paid> <cash|cheque> [pending] [description]";

    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() < 5 {
        app.set_status(USAGE);
        return Ok(());
    }

    let date = parts[0].to_string();
    let person = parts[1].to_string();
    let amount = match crate::import::parse_amount(parts[2]) {
        Ok(a) => a,
        Err(_) => {
            app.set_status(format!("Invalid amount: {}", parts[2]));
            return Ok(());
        }
    };
    let Some(txn_type) = TxnType::parse(parts[3]) else {
        app.set_status(format!("Unknown type '{}'. Use received or paid", parts[3]));
        return Ok(());
    };
    let Some(method) = PayMethod::parse(parts[4]) else {
        app.set_status(format!("Unknown method '{}'. Use cash or cheque", parts[4]));
        return Ok(());
    };

    let mut rest = &parts[5..];
    let status = match rest.first().and_then(|s| Status::parse(s)) {
        Some(s) => {
            rest = &rest[1..];
            s
        }
        // Cheques settle later; cash settles on the spot
        None if method == PayMethod::Cheque => Status::Pending,
        None => Status::Completed,
    };
    let description = rest.join(" ");

    let cheque_status = if method == PayMethod::Cheque {
        ChequeStatus::ReceivedGiven
    } else {
        ChequeStatus::None
    };

    let payment = Payment::new(
        date, person, amount, txn_type, method, cheque_status, status, description,
    );
    if let Err(e) = crate::engine::validate(std::slice::from_ref(&payment)) {
        app.set_status(format!("Rejected: {e:#}"));
        return Ok(());
    }

    db.insert_payment(&payment)?;
    app.refresh_payments(db)?;
    app.set_status(format!(
        "Added: {} {} {}",
        payment.person,
        payment.txn_type.label(),
        super::util::format_amount(payment.amount)
    ));
    Ok(())
}

fn cmd_person(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        let cats: Vec<&str> = PersonCategory::all().iter().map(|c| c.as_str()).collect();
        app.set_status(format!("Usage: :person <name> [{}]", cats.join("|")));
        return Ok(());
    }

    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    let (name, category) = if parts.len() == 2 {
        match PersonCategory::parse(parts[0]) {
            Some(cat) => (parts[1].to_string(), cat),
            None => (args.to_string(), PersonCategory::Client),
        }
    } else {
        (args.to_string(), PersonCategory::Client)
    };

    if Person::find_by_name(&app.people, &name).is_some() {
        app.set_status(format!("'{name}' is already registered"));
        return Ok(());
    }

    db.insert_person(&Person::new(name.clone(), category))?;
    app.refresh_people(db)?;
    app.set_status(format!("Registered {name} as {}", category.as_str()));
    Ok(())
}

fn cmd_delete_person(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if app.screen != Screen::People || app.people.is_empty() {
        app.set_status("Navigate to People and select one first");
        return Ok(());
    }

    if let Some(person) = app.people.get(app.person_index) {
        if let Some(id) = person.id {
            // A person with recorded payments cannot be deleted
            if db.person_has_payments(&person.name)? {
                app.set_status(format!("'{}' has recorded payments", person.name));
                return Ok(());
            }
            let name = person.name.clone();
            app.confirm_message = format!("Delete '{name}'?");
            app.pending_action = Some(PendingAction::DeletePerson { id, name });
            app.input_mode = InputMode::Confirm;
        }
    }

    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    if app.screen != Screen::Payments || app.filtered.is_empty() {
        app.set_status("Navigate to Payments and select one first");
        return Ok(());
    }

    if let Some(p) = app.filtered.get(app.payment_index) {
        if let Some(id) = p.id {
            let label = format!(
                "{} {} {}",
                p.date,
                p.person,
                super::util::format_amount(p.amount)
            );
            app.confirm_message = format!("Delete {label}?");
            app.pending_action = Some(PendingAction::DeletePayment { id, label });
            app.input_mode = InputMode::Confirm;
        }
    }

    Ok(())
}

/// `:filter key=value ...` with keys from, to, person, type, method, cheque
/// (substring against the display label) and cheque-exact. No arguments
/// clears the filter.
fn cmd_filter(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.clear_filter();
        app.screen = Screen::Payments;
        app.refresh_payments(db)?;
        app.set_status("Filter cleared");
        return Ok(());
    }

    let mut spec = FilterSpec::default();
    for pair in args.split_whitespace() {
        let Some((key, value)) = pair.split_once('=') else {
            app.set_status(format!("Expected key=value, got '{pair}'"));
            return Ok(());
        };
        match key {
            // A bound that is not a real date is treated as unset
            "from" => spec.start_date = FilterSpec::date_bound(value),
            "to" => spec.end_date = FilterSpec::date_bound(value),
            "person" => spec.person = Some(value.to_string()),
            "type" => match TxnType::parse(value) {
                Some(t) => spec.txn_type = Some(t),
                None => {
                    app.set_status(format!("Unknown type '{value}'"));
                    return Ok(());
                }
            },
            "method" => match PayMethod::parse(value) {
                Some(m) => spec.method = Some(m),
                None => {
                    app.set_status(format!("Unknown method '{value}'"));
                    return Ok(());
                }
            },
            "cheque" => spec.cheque_status_text = Some(value.to_string()),
            "cheque-exact" => match ChequeStatus::parse(value) {
                Some(s) => spec.cheque_status = Some(s),
                None => {
                    app.set_status(format!("Unknown cheque status '{value}'"));
                    return Ok(());
                }
            },
            _ => {
                app.set_status(format!("Unknown filter key '{key}'"));
                return Ok(());
            }
        }
    }

    app.filter = spec;
    app.payment_index = 0;
    app.payment_scroll = 0;
    app.screen = Screen::Payments;
    app.refresh_payments(db)?;
    app.set_status(format!(
        "Filter: {} ({} of {})",
        app.filter.describe(),
        app.filtered.len(),
        app.payments.len()
    ));
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Payments;
    app.refresh_payments(db)?;

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_cheque(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if app.screen != Screen::Payments || app.filtered.is_empty() {
        app.set_status("Navigate to Payments and select one first");
        return Ok(());
    }

    let Some(status) = ChequeStatus::parse(args) else {
        let names: Vec<&str> = ChequeStatus::all().iter().map(|s| s.as_str()).collect();
        app.set_status(format!("Usage: :cheque <{}>", names.join("|")));
        return Ok(());
    };

    if let Some(p) = app.filtered.get(app.payment_index) {
        if p.method == PayMethod::Cash && status != ChequeStatus::None {
            app.set_status("Cash payments carry no cheque status");
            return Ok(());
        }
        if let Some(id) = p.id {
            db.update_cheque_status(id, status)?;
            app.refresh_payments(db)?;
            app.set_status(format!("Cheque status: {}", status.label()));
        }
    }

    Ok(())
}

fn cmd_status(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if app.screen != Screen::Payments || app.filtered.is_empty() {
        app.set_status("Navigate to Payments and select one first");
        return Ok(());
    }

    let Some(status) = Status::parse(args) else {
        app.set_status("Usage: :status <completed|pending>");
        return Ok(());
    };

    if let Some(p) = app.filtered.get(app.payment_index) {
        if let Some(id) = p.id {
            db.update_status(id, status)?;
            app.refresh_payments(db)?;
            app.set_status(format!("Marked {}", status.label()));
        }
    }

    Ok(())
}

fn cmd_report(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/paytrack-summary.html")
    } else {
        crate::run::shellexpand(args)
    };

    app.refresh_payments(db)?;
    crate::report::write_summary(std::path::Path::new(&path), &app.payments)?;
    app.set_status(format!("Report written to {path}"));
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/paytrack-export.csv")
    } else {
        crate::run::shellexpand(args)
    };

    app.refresh_payments(db)?;
    let count = crate::import::write_payments(std::path::Path::new(&path), &app.payments)?;
    if count == 0 {
        app.set_status("No payments to export");
    } else {
        app.set_status(format!("Exported {count} payments to {path}"));
    }
    Ok(())
}

fn cmd_import(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :import <file.csv>");
        return Ok(());
    }

    let path = crate::run::shellexpand(args);
    match crate::import::read_payments(std::path::Path::new(&path)) {
        Ok(payments) => {
            let count = db.insert_payments_batch(&payments)?;
            app.refresh_payments(db)?;
            app.screen = Screen::Payments;
            app.set_status(format!("Imported {count} payments from {path}"));
        }
        Err(e) => {
            app.set_status(format!("Import failed: {e:#}"));
        }
    }
    Ok(())
}
