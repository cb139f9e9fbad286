use anyhow::Result;
use std::path::Path;

use crate::db::Database;
use crate::engine;
use crate::models::{ChequeStatus, FilterSpec, PayMethod, Payment, Person, PersonCategory, Status, TxnType};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], db),
        "list" | "ls" => cli_list(&args[2..], db),
        "summary" | "s" => cli_summary(db),
        "report" => cli_report(&args[2..], db),
        "people" => cli_people(&args[2..], db),
        "import" => cli_import(&args[2..], db),
        "export" => cli_export(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("paytrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("PayTrack — local-only payment tracker");
    println!();
    println!("Usage: paytrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <date> <person> <amount> <received|paid> <cash|cheque>");
    println!("    --status <s>                completed or pending");
    println!("    --cheque-status <s>         received_given, processing, bounced, processing_done");
    println!("    --description <text>        Free-form note");
    println!("  list                          List payments");
    println!("    --from / --to <YYYY-MM-DD>  Inclusive date range");
    println!("    --person <text>             Case-insensitive name match");
    println!("    --type <received|paid>      Direction");
    println!("    --method <cash|cheque>      Payment method");
    println!("    --cheque-status <text>      Match against the display label");
    println!("    --cheque-status-exact <s>   Exact lifecycle state");
    println!("  summary                       Print totals for the full ledger");
    println!("  report [path]                 Write the HTML summary page");
    println!("  people [add <name> [cat]]     List or register people");
    println!("  import <file.csv>             Import payments from CSV");
    println!("  export [path]                 Export payments to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

fn cli_add(args: &[String], db: &mut Database) -> Result<()> {
    let positional: Vec<&String> = {
        // Flags and their values are stripped; what remains is positional
        let mut out = Vec::new();
        let mut skip = false;
        for (i, a) in args.iter().enumerate() {
            if skip {
                skip = false;
                continue;
            }
            if a.starts_with("--") {
                skip = i + 1 < args.len();
                continue;
            }
            out.push(a);
        }
        out
    };

    if positional.len() != 5 {
        anyhow::bail!(
            "Usage: paytrack add <date> <person> <amount> <received|paid> <cash|cheque> [flags]"
        );
    }

    let date = positional[0].clone();
    let person = positional[1].clone();
    let amount = crate::import::parse_amount(positional[2])?;
    let txn_type = TxnType::parse(positional[3])
        .ok_or_else(|| anyhow::anyhow!("Unknown type '{}'. Use received or paid", positional[3]))?;
    let method = PayMethod::parse(positional[4])
        .ok_or_else(|| anyhow::anyhow!("Unknown method '{}'. Use cash or cheque", positional[4]))?;

    let status = match flag(args, "--status") {
        Some(s) => Status::parse(s).ok_or_else(|| anyhow::anyhow!("Unknown status '{s}'"))?,
        None if method == PayMethod::Cheque => Status::Pending,
        None => Status::Completed,
    };
    let cheque_status = match flag(args, "--cheque-status") {
        Some(s) => {
            ChequeStatus::parse(s).ok_or_else(|| anyhow::anyhow!("Unknown cheque status '{s}'"))?
        }
        None if method == PayMethod::Cheque => ChequeStatus::ReceivedGiven,
        None => ChequeStatus::None,
    };
    let description = flag(args, "--description").unwrap_or("").to_string();

    let payment = Payment::new(
        date, person, amount, txn_type, method, cheque_status, status, description,
    );
    engine::validate(std::slice::from_ref(&payment))?;

    db.insert_payment(&payment)?;
    println!(
        "Added: {} {} {} ({})",
        payment.date,
        payment.person,
        format_amount(payment.amount),
        payment.txn_type.label()
    );
    Ok(())
}

fn filter_from_flags(args: &[String]) -> Result<FilterSpec> {
    // Malformed date bounds are treated as unset, matching everything
    let mut spec = FilterSpec {
        start_date: flag(args, "--from").and_then(|d| FilterSpec::date_bound(d)),
        end_date: flag(args, "--to").and_then(|d| FilterSpec::date_bound(d)),
        person: flag(args, "--person").map(str::to_string),
        cheque_status_text: flag(args, "--cheque-status").map(str::to_string),
        ..FilterSpec::default()
    };

    if let Some(t) = flag(args, "--type") {
        spec.txn_type =
            Some(TxnType::parse(t).ok_or_else(|| anyhow::anyhow!("Unknown type '{t}'"))?);
    }
    if let Some(m) = flag(args, "--method") {
        spec.method =
            Some(PayMethod::parse(m).ok_or_else(|| anyhow::anyhow!("Unknown method '{m}'"))?);
    }
    if let Some(s) = flag(args, "--cheque-status-exact") {
        spec.cheque_status = Some(
            ChequeStatus::parse(s).ok_or_else(|| anyhow::anyhow!("Unknown cheque status '{s}'"))?,
        );
    }
    Ok(spec)
}

fn cli_list(args: &[String], db: &mut Database) -> Result<()> {
    let spec = filter_from_flags(args)?;
    let payments = db.get_payments()?;
    let filtered = engine::filter(&payments, &spec);

    if filtered.is_empty() {
        if spec.is_empty() {
            println!("No payments recorded");
        } else {
            println!("No payments match: {}", spec.describe());
        }
        return Ok(());
    }

    println!(
        "{:<11} {:<18} {:>16} {:<9} {:<7} {:<16} {:<10} Description",
        "Date", "Person", "Amount", "Type", "Method", "Cheque", "Status"
    );
    println!("{}", "─".repeat(100));
    for p in &filtered {
        println!(
            "{:<11} {:<18} {:>16} {:<9} {:<7} {:<16} {:<10} {}",
            p.date,
            p.person,
            format_amount(p.amount),
            p.txn_type.label(),
            p.method.label(),
            p.cheque_status.label(),
            p.status.label(),
            p.description,
        );
    }
    if !spec.is_empty() {
        println!();
        println!(
            "{} of {} payments ({})",
            filtered.len(),
            payments.len(),
            spec.describe()
        );
    }
    Ok(())
}

fn cli_summary(db: &mut Database) -> Result<()> {
    let count = db.payment_count()?;
    let payments = db.get_payments()?;
    let totals = engine::summarize(&payments);

    println!("PayTrack — {count} payments");
    println!("{}", "─".repeat(48));
    println!("  Total Received:  {}", format_amount(totals.received.total));
    println!("    Cash:          {}", format_amount(totals.received.cash));
    println!("    Cheque:        {}", format_amount(totals.received.cheque));
    println!("    Pending:       {}", format_amount(totals.received.pending));
    println!("  Total Paid:      {}", format_amount(totals.paid.total));
    println!("    Cash:          {}", format_amount(totals.paid.cash));
    println!("    Cheque:        {}", format_amount(totals.paid.cheque));
    println!("    Pending:       {}", format_amount(totals.paid.pending));
    println!("  Net Balance:     {}", format_amount(totals.net_balance));
    Ok(())
}

fn cli_report(args: &[String], db: &mut Database) -> Result<()> {
    let path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/paytrack-summary.html")
        });

    let payments = db.get_payments()?;
    crate::report::write_summary(Path::new(&path), &payments)?;
    println!("Report written to {path}");
    Ok(())
}

fn cli_people(args: &[String], db: &mut Database) -> Result<()> {
    if args.first().map(String::as_str) == Some("add") {
        let Some(name) = args.get(1) else {
            anyhow::bail!("Usage: paytrack people add <name> [investor|client]");
        };
        let category = match args.get(2) {
            Some(c) => PersonCategory::parse(c)
                .ok_or_else(|| anyhow::anyhow!("Unknown category '{c}'"))?,
            None => PersonCategory::Client,
        };
        db.insert_person(&Person::new(name.clone(), category))?;
        println!("Registered {name} as {}", category.as_str());
        return Ok(());
    }

    let people = db.get_people()?;
    if people.is_empty() {
        println!("No people registered");
        return Ok(());
    }

    println!("{:<4} {:<24} Category", "ID", "Name");
    println!("{}", "─".repeat(40));
    for person in &people {
        println!(
            "{:<4} {:<24} {}",
            person.id.unwrap_or(0),
            person.name,
            person.category.as_str(),
        );
    }
    Ok(())
}

fn cli_import(args: &[String], db: &mut Database) -> Result<()> {
    let Some(file_path) = args.first() else {
        anyhow::bail!("Usage: paytrack import <file.csv>");
    };

    let path_str = shellexpand(file_path);
    let path = Path::new(&path_str);
    if !path.exists() {
        anyhow::bail!("File not found: {path_str}");
    }

    // Whole batch is validated by the reader; a bad row rejects the file
    let payments = crate::import::read_payments(path)?;
    let count = db.insert_payments_batch(&payments)?;
    println!("Imported {count} payments from {path_str}");
    Ok(())
}

fn cli_export(args: &[String], db: &mut Database) -> Result<()> {
    let path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/paytrack-export.csv")
        });

    let payments = db.get_payments()?;
    let count = crate::import::write_payments(Path::new(&path), &payments)?;
    if count == 0 {
        println!("No payments to export");
    } else {
        println!("Exported {count} payments to {path}");
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
