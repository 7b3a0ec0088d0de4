//! KYC submission tab.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, KycField, Mode};
use crate::tui::input::TextInput;

/// Renders the KYC tab.
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
        .title(" KYC Verification ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(columns[1]);
    frame.render_widget(block, columns[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // current status
            Constraint::Length(1), // spacing
            Constraint::Length(3), // PAN
            Constraint::Length(1), // PAN error
            Constraint::Length(3), // Aadhaar
            Constraint::Length(1), // Aadhaar error
            Constraint::Length(1), // submission status
        ])
        .split(inner);

    render_status_line(frame, rows[0], app);
    render_input(
        frame,
        rows[2],
        "PAN",
        &app.kyc.pan,
        app.kyc.field == KycField::Pan,
        app,
    );
    if let Some(error) = &app.kyc.pan_error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            ))),
            rows[3],
        );
    }
    render_input(
        frame,
        rows[4],
        "Aadhaar",
        &app.kyc.aadhaar,
        app.kyc.field == KycField::Aadhaar,
        app,
    );
    if let Some(error) = &app.kyc.aadhaar_error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            ))),
            rows[5],
        );
    }

    let submit_line = if app.kyc.submitting {
        Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(acknowledgement) = &app.kyc.submitted {
        Line::from(Span::styled(
            acknowledgement.as_str(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(submit_line), rows[6]);
}

/// Shows the account's current verification state.
fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let (label, color) = match app.session.current_user().and_then(|u| u.kyc_verified) {
        Some(true) => ("Your account is KYC verified.", Color::Green),
        Some(false) => ("Your account is not verified yet.", Color::Yellow),
        None => ("Verification status unknown.", Color::DarkGray),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, Style::default().fg(color)))),
        area,
    );
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
