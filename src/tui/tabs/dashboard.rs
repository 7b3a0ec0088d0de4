//! Dashboard tab: balance, recent activity, frequent contacts.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ledger;
use crate::tui::app::{App, Loadable, RECENT_LIMIT};

/// Renders the dashboard tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(6)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_balance_card(frame, top[0], app);
    render_contacts(frame, top[1], app);
    render_recent(frame, rows[1], app);
}

/// Renders the balance card.
fn render_balance_card(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Balance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match &app.balance {
        Loadable::Loading => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))],
        Loadable::Failed(message) => vec![Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))],
        Loadable::Ready(balance) => vec![
            Line::from(Span::styled(
                ledger::format_amount(*balance),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Available balance",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the frequent contacts panel.
fn render_contacts(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Frequent Contacts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match &app.contacts {
        Loadable::Loading => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))],
        Loadable::Failed(message) => vec![Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))],
        Loadable::Ready(contacts) if contacts.is_empty() => vec![Line::from(Span::styled(
            "No frequent contacts yet.",
            Style::default().fg(Color::DarkGray),
        ))],
        Loadable::Ready(contacts) => contacts
            .iter()
            .map(|contact| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<24}", contact.name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{} transfers", contact.transaction_count),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect(),
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the recent transactions panel.
fn render_recent(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Recent Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let viewer_wallet = app.session.wallet_id().unwrap_or("");
    let resolver = |id: &str| app.party_name(id);

    let lines = match &app.recent {
        Loadable::Loading => vec![Line::from(Span::styled(
            "Loading transactions...",
            Style::default().fg(Color::DarkGray),
        ))],
        Loadable::Failed(message) => vec![Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))],
        Loadable::Ready(transactions) if transactions.is_empty() => {
            vec![Line::from(Span::styled(
                "No transactions yet.",
                Style::default().fg(Color::DarkGray),
            ))]
        }
        Loadable::Ready(transactions) => transactions
            .iter()
            .take(RECENT_LIMIT)
            .map(|tx| {
                let view = ledger::interpret(tx, viewer_wallet, Some(&resolver));
                let (arrow, color) = if view.is_outgoing {
                    ("↑", Color::Red)
                } else {
                    ("↓", Color::Green)
                };
                Line::from(vec![
                    Span::styled(format!(" {arrow} "), Style::default().fg(color)),
                    Span::styled(
                        format!("{:<28}", truncate(tx.display_title(), 27)),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{:<26}", truncate(&view.counterparty_label, 25)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:>14}", view.signed_amount),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", tx.display_date()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect(),
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Truncates a string to at most `max` characters with an ellipsis.
pub(super) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
