use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.people.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No people registered", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Register one with :person <name> [investor|client]",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " People (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Name", "Category", "Received", "Paid", "Net"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .people
        .iter()
        .enumerate()
        .skip(app.person_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, person)| {
            let (received, paid) = person_totals(app, &person.name);
            let net = received - paid;

            let style = if i == app.person_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let net_style = if net >= Decimal::ZERO {
                theme::received_style()
            } else {
                theme::paid_style()
            };

            Row::new(vec![
                Cell::from(truncate(&person.name, 24)),
                Cell::from(person.category.as_str()),
                Cell::from(Span::styled(
                    format_amount(received),
                    theme::received_style(),
                )),
                Cell::from(Span::styled(format_amount(paid), theme::paid_style())),
                Cell::from(Span::styled(format_amount(net), net_style)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(24),
        Constraint::Length(10),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Min(18),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" People ({}) ", app.people.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

/// Per-person totals over the full ledger, matched case-insensitively the
/// same way the filter engine matches persons.
fn person_totals(app: &App, name: &str) -> (Decimal, Decimal) {
    let lower = name.to_lowercase();
    let mut received = Decimal::ZERO;
    let mut paid = Decimal::ZERO;
    for p in &app.payments {
        if p.person.to_lowercase() != lower {
            continue;
        }
        if p.is_received() {
            received += p.amount;
        } else {
            paid += p.amount;
        }
    }
    (received, paid)
}
