//! Transaction history tab with type and date filters.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ledger;
use crate::tui::app::{App, Loadable};

use super::dashboard::truncate;

/// Renders the history tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    render_filter_line(frame, rows[0], app);
    render_table(frame, rows[1], app);
}

/// Renders the active filters.
fn render_filter_line(frame: &mut Frame, area: Rect, app: &App) {
    let type_label = app
        .filter
        .tpe
        .map_or("all types", |tpe| tpe.label());
    let range_label = match (app.filter.start_date, app.filter.end_date) {
        (Some(start), Some(end)) => format!("{start} – {end}"),
        (Some(start), None) => format!("from {start}"),
        (None, Some(end)) => format!("until {end}"),
        (None, None) => "all dates".to_string(),
    };

    let para = Paragraph::new(Line::from(vec![
        Span::styled(" Filters: ", Style::default().fg(Color::DarkGray)),
        Span::styled(type_label, Style::default().fg(Color::Cyan)),
        Span::raw(" · "),
        Span::styled(range_label, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(para, area);
}

/// Renders the transaction table.
fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" All Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let viewer_wallet = app.session.wallet_id().unwrap_or("");
    let resolver = |id: &str| app.party_name(id);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!(
            "   {:<28}{:<26}{:<12}{:<13}{:>14}  {:<8}",
            "Transaction", "Party", "Type", "Date", "Amount", "Status"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    match &app.transactions {
        Loadable::Loading => lines.push(Line::from(Span::styled(
            "Loading transactions...",
            Style::default().fg(Color::DarkGray),
        ))),
        Loadable::Failed(message) => lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))),
        Loadable::Ready(transactions) if transactions.is_empty() => {
            lines.push(Line::from(Span::styled(
                "No transactions found for the selected filters.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Loadable::Ready(transactions) => {
            // Keep the selected row visible in tall lists.
            let height = inner.height.saturating_sub(1) as usize;
            let offset = app
                .history_selected
                .saturating_sub(height.saturating_sub(1));

            for (i, tx) in transactions.iter().enumerate().skip(offset).take(height) {
                let view = ledger::interpret(tx, viewer_wallet, Some(&resolver));
                let (arrow, color) = if view.is_outgoing {
                    ("↑", Color::Red)
                } else {
                    ("↓", Color::Green)
                };
                let row_style = if i == app.history_selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };

                lines.push(
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
                        Span::raw(format!("{:<12}", tx.tpe.label())),
                        Span::raw(format!("{:<13}", tx.display_date())),
                        Span::styled(
                            format!("{:>14}", view.signed_amount),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {:<8}", tx.status.label()),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                    .style(row_style),
                );
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
