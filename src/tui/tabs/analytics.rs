//! Analytics tab: monthly totals, overview bars, category spending.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

use crate::ledger;
use crate::models::analytics::AnalyticsReport;
use crate::tui::app::{App, Loadable};

/// Maximum bar width in the overview and category panels.
const BAR_WIDTH: usize = 20;

/// Renders the analytics tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match &app.analytics {
        Loadable::Loading => render_message(frame, area, "Loading analytics...", Color::DarkGray),
        Loadable::Failed(message) => render_message(frame, area, message, Color::Red),
        Loadable::Ready(report) => render_report(frame, area, report),
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let block = Block::default()
        .title(" Analytics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message, Style::default().fg(color)))),
        inner,
    );
}

fn render_report(frame: &mut Frame, area: Rect, report: &AnalyticsReport) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_summary_card(
        frame,
        cards[0],
        "Incoming",
        report.summary.current_month.incoming,
        report.summary.percentage_change.incoming,
        Color::Green,
    );
    render_summary_card(
        frame,
        cards[1],
        "Outgoing",
        report.summary.current_month.outgoing,
        report.summary.percentage_change.outgoing,
        Color::Red,
    );

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_overview(frame, panels[0], report);
    render_categories(frame, panels[1], report);
}

/// Renders one incoming/outgoing summary card.
fn render_summary_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    change_pct: f64,
    color: Color,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            ledger::format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{change_pct:+.1}% from last month"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders sent/received bars per month.
fn render_overview(frame: &mut Frame, area: Rect, report: &AnalyticsReport) {
    let block = Block::default()
        .title(" Monthly Overview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if report.monthly_overview.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No activity yet.",
                Style::default().fg(Color::DarkGray),
            ))),
            inner,
        );
        return;
    }

    let max = report
        .monthly_overview
        .iter()
        .map(|m| m.sent.max(m.received))
        .max()
        .unwrap_or(Decimal::ONE)
        .max(Decimal::ONE);

    let mut lines: Vec<Line> = Vec::new();
    for month in &report.monthly_overview {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<5}", month.month), Style::default().fg(Color::White)),
            Span::styled(bar(month.sent, max), Style::default().fg(Color::Red)),
            Span::styled(
                format!(" {:>12}", ledger::format_amount(month.sent)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(bar(month.received, max), Style::default().fg(Color::Green)),
            Span::styled(
                format!(" {:>12}", ledger::format_amount(month.received)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders spending by category.
fn render_categories(frame: &mut Frame, area: Rect, report: &AnalyticsReport) {
    let block = Block::default()
        .title(" Spending by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if report.spending_by_category.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No spending recorded.",
                Style::default().fg(Color::DarkGray),
            ))),
            inner,
        );
        return;
    }

    let max = report
        .spending_by_category
        .iter()
        .map(|c| c.amount)
        .max()
        .unwrap_or(Decimal::ONE)
        .max(Decimal::ONE);

    let lines: Vec<Line> = report
        .spending_by_category
        .iter()
        .map(|category| {
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", category.category),
                    Style::default().fg(Color::White),
                ),
                Span::styled(bar(category.amount, max), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" {:>12}", ledger::format_amount(category.amount)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Scales an amount to a bar of at most [`BAR_WIDTH`] cells.
fn bar(amount: Decimal, max: Decimal) -> String {
    let len = ((amount / max) * Decimal::from(BAR_WIDTH))
        .trunc()
        .to_string()
        .parse::<usize>()
        .unwrap_or(0);
    "▒".repeat(len.min(BAR_WIDTH))
}
