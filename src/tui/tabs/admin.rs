//! Admin tab: user management and KYC review.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ledger;
use crate::models::user::KycStatus;
use crate::tui::app::{App, Loadable};

use super::dashboard::truncate;

/// Renders the admin tab.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    render_table(frame, rows[0], app);
    render_detail_line(frame, rows[1], app);
}

/// Renders the user table.
fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Users ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!(
            " {:<22}{:<28}{:<12}{:<8}{:<10}{:>14}",
            "Name", "Email", "KYC", "Role", "Status", "Balance"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    match &app.admin_users {
        Loadable::Loading => lines.push(Line::from(Span::styled(
            "Loading users...",
            Style::default().fg(Color::DarkGray),
        ))),
        Loadable::Failed(message) => lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))),
        Loadable::Ready(users) if users.is_empty() => lines.push(Line::from(Span::styled(
            "No users found.",
            Style::default().fg(Color::DarkGray),
        ))),
        Loadable::Ready(users) => {
            let height = inner.height.saturating_sub(1) as usize;
            let offset = app.admin_selected.saturating_sub(height.saturating_sub(1));

            for (i, user) in users.iter().enumerate().skip(offset).take(height) {
                let kyc_color = match user.kyc_status {
                    KycStatus::Verified => Color::Green,
                    KycStatus::Pending => Color::Yellow,
                    KycStatus::Rejected => Color::Red,
                    KycStatus::Unverified | KycStatus::Unknown => Color::DarkGray,
                };
                let row_style = if i == app.admin_selected {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                let balance = user
                    .wallet_balance
                    .map_or(String::from("—"), ledger::format_amount);

                lines.push(
                    Line::from(vec![
                        Span::styled(
                            format!(" {:<22}", truncate(&user.name, 21)),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(
                            format!("{:<28}", truncate(&user.email, 27)),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            format!("{:<12}", user.kyc_status.label()),
                            Style::default().fg(kyc_color),
                        ),
                        Span::raw(format!("{:<8}", format!("{:?}", user.role))),
                        Span::raw(format!("{:<10}", user.status.as_deref().unwrap_or("—"))),
                        Span::styled(format!("{balance:>14}"), Style::default().fg(Color::Cyan)),
                    ])
                    .style(row_style),
                );
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders details of the selected user that don't fit the table.
fn render_detail_line(frame: &mut Frame, area: Rect, app: &App) {
    let Some(user) = app
        .admin_users
        .ready()
        .and_then(|users| users.get(app.admin_selected))
    else {
        return;
    };

    let document = if user.kyc_document_url.is_some() {
        "document on file"
    } else {
        "no document"
    };
    let line = Line::from(vec![
        Span::styled(" Selected: ", Style::default().fg(Color::DarkGray)),
        Span::styled(user.id.as_str(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(
                " · {} · joined {} · {}",
                user.phone_number.as_deref().unwrap_or("no phone"),
                user.created_at.as_deref().unwrap_or("unknown"),
                document
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
