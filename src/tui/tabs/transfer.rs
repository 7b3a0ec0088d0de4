//! Transfer tab: recipient search, amount, note.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Mode, TransferField};
use crate::tui::input::TextInput;

/// Renders the transfer tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(56),
            Constraint::Min(1),
        ])
        .split(area);

    let block = Block::default()
        .title(" Send Money ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(columns[1]);
    frame.render_widget(block, columns[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // recipient
            Constraint::Length(1), // recipient error / chosen
            Constraint::Length(6), // search results
            Constraint::Length(3), // amount
            Constraint::Length(1), // amount error
            Constraint::Length(3), // note
            Constraint::Length(1), // status
        ])
        .split(inner);

    render_input(
        frame,
        rows[0],
        "Recipient (name or email)",
        &app.transfer.query,
        app.transfer.field == TransferField::Recipient,
        app,
    );
    render_recipient_status(frame, rows[1], app);
    render_results(frame, rows[2], app);
    render_input(
        frame,
        rows[3],
        "Amount (INR)",
        &app.transfer.amount,
        app.transfer.field == TransferField::Amount,
        app,
    );
    if let Some(error) = &app.transfer.amount_error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            ))),
            rows[4],
        );
    }
    render_input(
        frame,
        rows[5],
        "Note (optional)",
        &app.transfer.note,
        app.transfer.field == TransferField::Note,
        app,
    );

    if app.transfer.submitting {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Sending...",
                Style::default().fg(Color::Yellow),
            ))),
            rows[6],
        );
    }
}

/// Renders one bordered form input.
fn render_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
    app: &App,
) {
    let editing = focused && app.mode == Mode::Insert;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::raw(input.as_str()))),
        inner,
    );

    if editing {
        frame.set_cursor_position((inner.x + input.width_before_cursor() as u16, inner.y));
    }
}

/// Shows the chosen recipient or the inline validation error.
fn render_recipient_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = &app.transfer.recipient_error {
        Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(recipient) = &app.transfer.recipient {
        Line::from(vec![
            Span::styled("Sending to: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} <{}>", recipient.name, recipient.email),
                Style::default().fg(Color::Green),
            ),
        ])
    } else if app.transfer.searching {
        Line::from(Span::styled(
            "Searching...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the search result list.
fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    if app.transfer.results.is_empty() {
        return;
    }

    let lines: Vec<Line> = app
        .transfer
        .results
        .iter()
        .take(area.height as usize)
        .enumerate()
        .map(|(i, user)| {
            let style = if i == app.transfer.results_selected {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!(" {:<20}", user.name), style.fg(Color::White)),
                Span::styled(user.email.clone(), style.fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
