//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ledger;
use crate::tui::app::{App, Loadable, Mode};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let user_span = match app.session.current_user() {
        Some(user) => Span::styled(
            format!(" {} ", user.email),
            Style::default().fg(Color::Cyan),
        ),
        None => Span::styled(" not signed in ", Style::default().fg(Color::DarkGray)),
    };

    let kyc_span = match app.session.current_user().and_then(|u| u.kyc_verified) {
        Some(true) => Span::styled(" KYC ✓ ", Style::default().fg(Color::Green)),
        Some(false) => Span::styled(" KYC pending ", Style::default().fg(Color::Yellow)),
        None => Span::raw(""),
    };

    let balance_span = match &app.balance {
        Loadable::Ready(balance) => Span::styled(
            format!(" {} ", ledger::format_amount(*balance)),
            Style::default().fg(Color::Cyan),
        ),
        Loadable::Loading => Span::styled(" … ", Style::default().fg(Color::DarkGray)),
        Loadable::Failed(_) => Span::raw(""),
    };

    let mode_span = match app.mode {
        Mode::Normal => Span::raw(""),
        Mode::Insert => Span::styled(" INSERT ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Mode::Confirm => {
            Span::styled(" CONFIRM ", Style::default().fg(Color::Black).bg(Color::Yellow))
        }
    };

    // Confirmation prompt takes priority, then errors, then notices.
    let message_span = if let Some(confirm) = &app.pending_confirm {
        Span::styled(
            format!(" {} ", confirm.prompt()),
            Style::default().fg(Color::Yellow),
        )
    } else if let Some(error) = &app.error_message {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else if let Some(notice) = &app.notice {
        Span::styled(format!(" {notice} "), Style::default().fg(Color::Green))
    } else {
        Span::raw("")
    };

    let tab_info = format!(" {}/{} ", app.active_tab + 1, app.tabs.len());

    let spans = vec![
        user_span,
        Span::raw("│"),
        kyc_span,
        Span::raw("│"),
        balance_span,
        Span::raw("│"),
        mode_span,
        message_span,
        Span::raw(format!(
            "{:>width$}",
            tab_info,
            width = area.width.saturating_sub(45) as usize
        )),
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
