use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::engine::SideTotals;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(8),    // Method and pending breakdown
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_breakdown(f, chunks[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let received_count = app.payments.iter().filter(|p| p.is_received()).count();
    let paid_count = app.payments.iter().filter(|p| p.is_paid()).count();
    let net = app.totals.net_balance;

    render_card(
        f,
        cards[0],
        "Total Received",
        app.totals.received.total,
        theme::GREEN,
        Some(format!("{received_count} payments")),
    );
    render_card(
        f,
        cards[1],
        "Total Paid",
        app.totals.paid.total,
        theme::RED,
        Some(format!("{paid_count} payments")),
    );
    render_card(
        f,
        cards[2],
        "Net Balance",
        net,
        if net >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        None,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: ratatui::style::Color,
    subtitle: Option<String>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let sub_text = subtitle.unwrap_or_default();

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(sub_text, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_side(f, halves[0], "Received", &app.totals.received);
    render_side(f, halves[1], "Paid", &app.totals.paid);
}

fn render_side(f: &mut Frame, area: Rect, title: &str, side: &SideTotals) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let row = |label: &str, amount: Decimal, style: Style| {
        Line::from(vec![
            Span::styled(format!("  {label:<10}"), theme::dim_style()),
            Span::styled(format_amount(amount), style),
        ])
    };

    let text = Paragraph::new(vec![
        Line::from(""),
        row("Cash", side.cash, theme::normal_style()),
        row("Cheque", side.cheque, theme::normal_style()),
        Line::from(""),
        row("Pending", side.pending, theme::pending_style()),
    ])
    .block(block);

    f.render_widget(text, area);
}
