//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::{App, Screen, Tab};
use super::components::{status_bar, tab_bar};
use super::{login, tabs};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    if app.screen == Screen::Login {
        login::render(frame, app);
        return;
    }

    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Tab content
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    tab_bar::render(frame, layout[0], app);
    status_bar::render(frame, layout[1], app);

    match app.current_tab() {
        Tab::Dashboard => tabs::dashboard::render(frame, layout[2], app),
        Tab::History => tabs::history::render(frame, layout[2], app),
        Tab::Transfer => tabs::transfer::render(frame, layout[2], app),
        Tab::Analytics => tabs::analytics::render(frame, layout[2], app),
        Tab::Kyc => tabs::kyc::render(frame, layout[2], app),
        Tab::Admin => tabs::admin::render(frame, layout[2], app),
    }

    let help = match app.current_tab() {
        Tab::Dashboard => "Tab switch · r refresh · o sign out · q quit",
        Tab::History => "j/k select · f type filter · m this month · c clear filters · r refresh · q quit",
        Tab::Transfer => "j/k field · i edit · Enter pick recipient · s send · c clear · q quit",
        Tab::Analytics => "r refresh · q quit",
        Tab::Kyc => "j/k field · i edit · s submit · q quit",
        Tab::Admin => "j/k select · a approve KYC · x reject KYC · d delete · r refresh · q quit",
    };
    let para = Paragraph::new(Line::from(Span::styled(
        help,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(para, layout[3]);
}
