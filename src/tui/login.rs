//! Login screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, LoginField};
use super::input::TextInput;

/// Renders the login screen centered in the terminal.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(12),
            Constraint::Min(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(48),
            Constraint::Min(1),
        ])
        .split(vertical[1]);

    let card = horizontal[1];
    let block = Block::default()
        .title(" paisa — sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacing
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // error
            Constraint::Length(1), // hint
        ])
        .split(inner);

    render_field(
        frame,
        rows[1],
        "Email",
        &app.login.email,
        app.login.field == LoginField::Email,
        false,
    );
    render_field(
        frame,
        rows[2],
        "Password",
        &app.login.password,
        app.login.field == LoginField::Password,
        true,
    );

    if let Some(error) = &app.login.error {
        let para = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(para, rows[3]);
    }

    let hint = if app.login.submitting {
        "Signing in..."
    } else {
        "Enter sign in · Tab switch field · Esc quit"
    };
    let para = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(para, rows[4]);
}

/// Renders one bordered input field, masking password content.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
    masked: bool,
) {
    let border_style = if focused {
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

    let shown = if masked {
        "•".repeat(input.as_str().chars().count())
    } else {
        input.as_str().to_string()
    };
    let style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(shown, style))), inner);

    if focused {
        let offset = if masked {
            input.chars_before_cursor()
        } else {
            input.width_before_cursor()
        };
        frame.set_cursor_position((inner.x + offset as u16, inner.y));
    }
}
