use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.filtered.is_empty() {
        // An empty view means either no data or a filter that matched
        // nothing; tell the user which.
        let filter_active = !app.effective_filter().is_empty();
        let msg = if filter_active {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No payments match the current filter",
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Clear it with :filter or press Esc to clear the search",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("No payments recorded", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Add one with :add or import a CSV with :import",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Payments (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = [
        "Date", "Person", "Amount", "Type", "Method", "Cheque", "Status", "Description",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .filtered
        .iter()
        .enumerate()
        .skip(app.payment_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, p)| {
            let is_cursor = i == app.payment_index;

            let amount_style = if p.is_received() {
                theme::received_style()
            } else {
                theme::paid_style()
            };
            let status_style = if p.is_pending() {
                theme::pending_style()
            } else {
                theme::dim_style()
            };

            let style = if is_cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(p.date.clone()),
                Cell::from(truncate(&p.person, 18)),
                Cell::from(Span::styled(format_amount(p.amount), amount_style)),
                Cell::from(p.txn_type.label()),
                Cell::from(p.method.label()),
                Cell::from(p.cheque_status.label()),
                Cell::from(Span::styled(p.status.label(), status_style)),
                Cell::from(truncate(&p.description, 30)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Min(16),
    ];

    let spec = app.effective_filter();
    let title = if spec.is_empty() {
        format!(" Payments ({}) ", app.filtered.len())
    } else {
        format!(
            " Payments ({} of {}) {} ",
            app.filtered.len(),
            app.payments.len(),
            spec.describe()
        )
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}
