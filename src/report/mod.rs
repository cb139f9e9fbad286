//! Static HTML summary page. A self-contained file with the headline
//! totals and the full payment table, suitable for publishing as-is.

use anyhow::{Context, Result};
use std::path::Path;

use crate::engine;
use crate::models::Payment;
use crate::ui::util::format_amount;

pub(crate) fn write_summary(path: &Path, payments: &[Payment]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    std::fs::write(path, render_summary(payments))
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

pub(crate) fn render_summary(payments: &[Payment]) -> String {
    let totals = engine::summarize(payments);

    let rows: String = payments
        .iter()
        .map(|p| {
            let direction = if p.is_received() {
                "Received from"
            } else {
                "Paid to"
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&p.date),
                escape(&p.person),
                format_amount(p.amount),
                direction,
                p.method.label(),
                p.cheque_status.label(),
                p.status.label(),
                escape(&p.description),
            )
        })
        .collect();

    format!(
        r#"<html>
<head>
    <title>Payment Summary</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 900px; margin: 0 auto; padding: 20px; }}
        h1 {{ color: #333; }}
        .summary-box {{
            background: #f5f5f5;
            padding: 15px;
            border-radius: 5px;
            margin-bottom: 20px;
            display: flex;
            justify-content: space-between;
        }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }}
        tr:hover {{ background-color: #f5f5f5; }}
    </style>
</head>
<body>
    <h1>Payment Summary</h1>

    <div class="summary-box">
        <div>
            <h3>Received from others: {received}</h3>
            <p>Cash: {received_cash} | Cheque: {received_cheque}</p>
            <p>Pending: {received_pending}</p>
        </div>
        <div>
            <h3>Paid to others: {paid}</h3>
            <p>Cash: {paid_cash} | Cheque: {paid_cheque}</p>
            <p>Pending: {paid_pending}</p>
        </div>
        <div>
            <h3>Net balance: {net}</h3>
        </div>
    </div>

    <h2>All Payments</h2>
    <table>
        <tr>
            <th>Date</th>
            <th>Person</th>
            <th>Amount</th>
            <th>Type</th>
            <th>Method</th>
            <th>Cheque Status</th>
            <th>Status</th>
            <th>Description</th>
        </tr>
{rows}    </table>
</body>
</html>
"#,
        received = format_amount(totals.received.total),
        received_cash = format_amount(totals.received.cash),
        received_cheque = format_amount(totals.received.cheque),
        received_pending = format_amount(totals.received.pending),
        paid = format_amount(totals.paid.total),
        paid_cash = format_amount(totals.paid.cash),
        paid_cheque = format_amount(totals.paid.cheque),
        paid_pending = format_amount(totals.paid.pending),
        net = format_amount(totals.net_balance),
        rows = rows,
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests;
