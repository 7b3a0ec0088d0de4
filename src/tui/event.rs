//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use rust_decimal::Decimal;
use tokio::sync::mpsc;

use crate::models::analytics::{AnalyticsReport, FrequentContact};
use crate::models::auth::AuthResponse;
use crate::models::transaction::{Transaction, TransactionFilter};
use crate::models::user::AdminUserView;
use crate::models::User;

use super::app::{App, Confirm, KycField, Loadable, LoginField, Mode, Screen, Tab, TransferField};
use super::input::{parse_amount, validate_aadhaar, validate_pan};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// A transfer that went through, with everything needed for display.
#[derive(Debug)]
pub struct CompletedTransfer {
    pub transaction: Transaction,
    pub recipient_wallet_id: String,
    pub recipient_name: String,
}

/// Messages that update application state.
///
/// Fetch results arrive as `crate::Result` so a 401 can be recognized
/// centrally and converted into a session expiry.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// Login attempt finished.
    LoggedIn(Box<AuthResponse>),
    /// Login attempt rejected.
    LoginFailed(String),

    /// Wallet balance fetch finished.
    Balance(crate::Result<Decimal>),
    /// Dashboard transaction list fetch finished.
    Recent(crate::Result<Vec<Transaction>>),
    /// Frequent contacts fetch finished.
    Contacts(crate::Result<Vec<FrequentContact>>),
    /// Filtered history fetch finished.
    Transactions(crate::Result<Vec<Transaction>>),
    /// Analytics fetch finished.
    Analytics(crate::Result<AnalyticsReport>),
    /// Admin user list fetch finished.
    AdminUsers(crate::Result<Vec<AdminUserView>>),

    /// Recipient search finished for the given query.
    SearchResults {
        query: String,
        outcome: crate::Result<Vec<User>>,
    },

    /// Transfer submission finished.
    TransferDone(crate::Result<CompletedTransfer>),

    /// KYC submission finished; `Ok` carries the service's
    /// acknowledgement text.
    KycDone(crate::Result<String>),

    /// An admin mutation (approve/reject/delete) finished.
    AdminActionDone {
        action: &'static str,
        outcome: crate::Result<()>,
    },

    /// Request to quit the application.
    Quit,
}

/// Actions that require external handling (network calls, performed by
/// the main loop in spawned tasks).
#[derive(Debug)]
pub enum Action {
    Login { email: String, password: String },
    Logout,
    /// Refresh every snapshot the current session can see.
    RefreshAll,
    RefreshDashboard,
    RefreshHistory(TransactionFilter),
    RefreshAnalytics,
    RefreshAdmin,
    /// Debounced recipient search for the given query.
    Search(String),
    /// Abort any in-flight search.
    CancelSearch,
    SubmitTransfer {
        recipient: User,
        amount: Decimal,
        note: Option<String>,
    },
    SubmitKyc {
        pan: String,
        aadhaar: String,
    },
    ApproveKyc(String),
    RejectKyc(String),
    DeleteUser(String),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Converts a fetch result into display state, expiring the session on
/// a 401.
fn load<T>(app: &mut App, result: crate::Result<T>) -> Loadable<T> {
    match result {
        Ok(value) => Loadable::Ready(value),
        Err(e) => {
            if e.is_unauthorized() {
                app.expire_session();
            }
            Loadable::Failed(e.to_string())
        }
    }
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),

        Message::LoggedIn(response) => {
            let AuthResponse { token, user, .. } = *response;
            let name = user.name.clone();
            app.session.login(token, user);
            app.login = Default::default();
            app.transfer.reset();
            app.kyc = Default::default();
            app.rebuild_tabs();
            app.screen = Screen::Main;
            app.active_tab = 0;
            app.reset_data();
            app.notice = Some(format!("Welcome, {name}"));
            Some(Action::RefreshAll)
        }
        Message::LoginFailed(message) => {
            app.login.submitting = false;
            app.login.error = Some(message);
            None
        }

        Message::Balance(result) => {
            app.balance = load(app, result);
            None
        }
        Message::Recent(result) => {
            app.recent = load(app, result);
            None
        }
        Message::Contacts(result) => {
            app.contacts = load(app, result);
            None
        }
        Message::Transactions(result) => {
            app.transactions = load(app, result);
            if let Some(rows) = app.transactions.ready() {
                app.history_selected = app.history_selected.min(rows.len().saturating_sub(1));
            }
            None
        }
        Message::Analytics(result) => {
            app.analytics = load(app, result);
            None
        }
        Message::AdminUsers(result) => {
            app.admin_users = load(app, result);
            if let Some(rows) = app.admin_users.ready() {
                app.admin_selected = app.admin_selected.min(rows.len().saturating_sub(1));
            }
            None
        }

        Message::SearchResults { query, outcome } => {
            // The debouncer aborts superseded fetches, but a result can
            // still race the keystroke that invalidated it.
            if query != app.transfer.query.as_str() {
                return None;
            }
            app.transfer.searching = false;
            match outcome {
                Ok(users) => {
                    app.transfer.results = users;
                    app.transfer.results_selected = 0;
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        app.expire_session();
                    } else {
                        app.show_error(e.to_string());
                    }
                }
            }
            None
        }

        Message::TransferDone(outcome) => {
            app.transfer.submitting = false;
            match outcome {
                Ok(done) => {
                    app.remember_party(&done.recipient_wallet_id, &done.recipient_name);
                    app.notice = Some(format!(
                        "Sent {} to {}",
                        crate::ledger::format_amount(done.transaction.amount),
                        done.recipient_name
                    ));
                    app.transfer.reset();
                    Some(Action::RefreshAll)
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        app.expire_session();
                    } else {
                        app.show_error(e.to_string());
                    }
                    None
                }
            }
        }

        Message::KycDone(outcome) => {
            app.kyc.submitting = false;
            match outcome {
                Ok(acknowledgement) => {
                    app.kyc.submitted = Some(acknowledgement);
                    app.notice = Some("KYC details submitted for review".to_string());
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        app.expire_session();
                    } else {
                        app.show_error(e.to_string());
                    }
                }
            }
            None
        }

        Message::AdminActionDone { action, outcome } => match outcome {
            Ok(()) => {
                app.notice = Some(format!("{action} done"));
                Some(Action::RefreshAdmin)
            }
            Err(e) => {
                if e.is_unauthorized() {
                    app.expire_session();
                } else {
                    app.show_error(e.to_string());
                }
                None
            }
        },

        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.clear_stale_errors();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    // Success notices show until the next interaction.
    app.notice = None;

    if app.screen == Screen::Login {
        return handle_login_key(app, key);
    }

    // Global keys (work in any mode)
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() && app.mode == Mode::Normal => {
            app.should_quit = true;
            return None;
        }
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.pending_confirm = None;
            return None;
        }
        _ => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
        Mode::Confirm => handle_confirm_mode(app, key),
    }
}

/// Handles keys on the login screen. The form is always editable; no
/// modes.
fn handle_login_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
            app.login.field = match app.login.field {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
            None
        }
        KeyCode::Enter => {
            if app.login.submitting {
                return None;
            }
            let email = app.login.email.as_str().trim().to_string();
            let password = app.login.password.as_str().to_string();
            if email.is_empty() || password.is_empty() {
                app.login.error = Some("Email and password are required.".to_string());
                return None;
            }
            app.login.error = None;
            app.login.submitting = true;
            Some(Action::Login { email, password })
        }
        KeyCode::Esc => {
            app.should_quit = true;
            None
        }
        KeyCode::Char(c) => {
            login_input(app).insert(c);
            None
        }
        KeyCode::Backspace => {
            login_input(app).backspace();
            None
        }
        KeyCode::Delete => {
            login_input(app).delete();
            None
        }
        KeyCode::Left => {
            login_input(app).move_left();
            None
        }
        KeyCode::Right => {
            login_input(app).move_right();
            None
        }
        _ => None,
    }
}

fn login_input(app: &mut App) -> &mut super::input::TextInput {
    match app.login.field {
        LoginField::Email => &mut app.login.email,
        LoginField::Password => &mut app.login.password,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        // Tab navigation
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.previous_tab();
            } else {
                app.next_tab();
            }
            None
        }
        KeyCode::BackTab => {
            app.previous_tab();
            None
        }

        // Refresh the active tab's data
        KeyCode::Char('r') => Some(refresh_action(app)),

        // Sign out
        KeyCode::Char('o') => {
            app.session.logout();
            app.screen = Screen::Login;
            app.login = Default::default();
            app.reset_data();
            Some(Action::Logout)
        }

        _ => match app.current_tab() {
            Tab::Dashboard => None,
            Tab::History => handle_history_keys(app, key),
            Tab::Transfer => handle_transfer_keys(app, key),
            Tab::Analytics => None,
            Tab::Kyc => handle_kyc_keys(app, key),
            Tab::Admin => handle_admin_keys(app, key),
        },
    }
}

/// Refresh action for the currently visible tab.
fn refresh_action(app: &App) -> Action {
    match app.current_tab() {
        Tab::Dashboard => Action::RefreshDashboard,
        Tab::History => Action::RefreshHistory(app.filter.clone()),
        Tab::Transfer => Action::RefreshDashboard,
        Tab::Analytics => Action::RefreshAnalytics,
        Tab::Kyc => Action::RefreshDashboard,
        Tab::Admin => Action::RefreshAdmin,
    }
}

/// Handles keys for the History tab.
fn handle_history_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    let row_count = app.transactions.ready().map_or(0, Vec::len);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.history_selected + 1 < row_count {
                app.history_selected += 1;
            }
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.history_selected = app.history_selected.saturating_sub(1);
            None
        }

        // Cycle type filter: all -> deposit -> withdrawal -> transfer
        KeyCode::Char('f') => {
            app.cycle_type_filter();
            app.transactions = Loadable::Loading;
            Some(Action::RefreshHistory(app.filter.clone()))
        }

        // Toggle "this month" date range
        KeyCode::Char('m') => {
            app.toggle_month_filter(chrono::Local::now().date_naive());
            app.transactions = Loadable::Loading;
            Some(Action::RefreshHistory(app.filter.clone()))
        }

        // Clear all filters
        KeyCode::Char('c') => {
            if app.filter.is_empty() {
                return None;
            }
            app.filter = TransactionFilter::default();
            app.history_selected = 0;
            app.transactions = Loadable::Loading;
            Some(Action::RefreshHistory(app.filter.clone()))
        }

        _ => None,
    }
}

/// Handles keys for the Transfer tab in normal mode.
fn handle_transfer_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    let browsing_results = app.transfer.field == TransferField::Recipient
        && app.transfer.recipient.is_none()
        && !app.transfer.results.is_empty();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if browsing_results {
                if app.transfer.results_selected + 1 < app.transfer.results.len() {
                    app.transfer.results_selected += 1;
                }
            } else {
                app.transfer.field = app.transfer.field.next();
            }
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if browsing_results {
                app.transfer.results_selected = app.transfer.results_selected.saturating_sub(1);
            } else {
                app.transfer.field = app.transfer.field.previous();
            }
            None
        }

        // Pick the highlighted recipient
        KeyCode::Enter if browsing_results => {
            let selected = app.transfer.results_selected;
            if let Some(user) = app.transfer.results.get(selected).cloned() {
                app.transfer.query.clear();
                for c in user.name.chars() {
                    app.transfer.query.insert(c);
                }
                app.transfer.recipient = Some(user);
                app.transfer.results.clear();
                app.transfer.recipient_error = None;
            }
            None
        }

        // Edit the focused field
        KeyCode::Char('i') | KeyCode::Enter => {
            app.mode = Mode::Insert;
            None
        }

        // Reset the form
        KeyCode::Char('c') => {
            app.transfer.reset();
            Some(Action::CancelSearch)
        }

        // Submit
        KeyCode::Char('s') => submit_transfer(app),

        _ => None,
    }
}

/// Validates the transfer form; returns the submit action when valid.
///
/// Validation failures surface as inline field errors and no request is
/// made.
fn submit_transfer(app: &mut App) -> Option<Action> {
    if app.transfer.submitting {
        return None;
    }

    let recipient = app.transfer.recipient.clone();
    if recipient.is_none() {
        app.transfer.recipient_error = Some("Please select a recipient.".to_string());
    } else {
        app.transfer.recipient_error = None;
    }

    let amount = match parse_amount(app.transfer.amount.as_str()) {
        Ok(amount) => {
            app.transfer.amount_error = None;
            Some(amount)
        }
        Err(message) => {
            app.transfer.amount_error = Some(message);
            None
        }
    };

    let (Some(recipient), Some(amount)) = (recipient, amount) else {
        return None;
    };

    let note = app.transfer.note.as_str().trim();
    let note = (!note.is_empty()).then(|| note.to_string());
    app.transfer.submitting = true;
    Some(Action::SubmitTransfer {
        recipient,
        amount,
        note,
    })
}

/// Handles keys for the KYC tab in normal mode.
fn handle_kyc_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up => {
            app.kyc.field = app.kyc.field.toggle();
            None
        }
        KeyCode::Char('i') | KeyCode::Enter => {
            app.mode = Mode::Insert;
            None
        }
        KeyCode::Char('s') => submit_kyc(app),
        _ => None,
    }
}

/// Validates the KYC form; returns the submit action when valid.
fn submit_kyc(app: &mut App) -> Option<Action> {
    if app.kyc.submitting {
        return None;
    }

    let pan = match validate_pan(app.kyc.pan.as_str()) {
        Ok(pan) => {
            app.kyc.pan_error = None;
            Some(pan)
        }
        Err(message) => {
            app.kyc.pan_error = Some(message);
            None
        }
    };
    let aadhaar = match validate_aadhaar(app.kyc.aadhaar.as_str()) {
        Ok(aadhaar) => {
            app.kyc.aadhaar_error = None;
            Some(aadhaar)
        }
        Err(message) => {
            app.kyc.aadhaar_error = Some(message);
            None
        }
    };

    let (Some(pan), Some(aadhaar)) = (pan, aadhaar) else {
        return None;
    };
    app.kyc.submitting = true;
    Some(Action::SubmitKyc { pan, aadhaar })
}

/// Handles keys for the Admin tab.
fn handle_admin_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    let row_count = app.admin_users.ready().map_or(0, Vec::len);
    let selected_user = app
        .admin_users
        .ready()
        .and_then(|users| users.get(app.admin_selected));

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.admin_selected + 1 < row_count {
                app.admin_selected += 1;
            }
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.admin_selected = app.admin_selected.saturating_sub(1);
            None
        }

        // Approve the selected user's KYC submission
        KeyCode::Char('a') => selected_user.map(|u| Action::ApproveKyc(u.id.clone())),

        // Reject the selected user's KYC submission
        KeyCode::Char('x') => selected_user.map(|u| Action::RejectKyc(u.id.clone())),

        // Delete the selected user, behind a confirmation prompt
        KeyCode::Char('d') => {
            if let Some(user) = selected_user {
                app.pending_confirm = Some(Confirm::DeleteUser {
                    id: user.id.clone(),
                    name: user.name.clone(),
                });
                app.mode = Mode::Confirm;
            }
            None
        }

        _ => None,
    }
}

/// Handles keys in insert mode (transfer and KYC form editing).
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    match app.current_tab() {
        Tab::Transfer => handle_transfer_insert(app, key),
        Tab::Kyc => handle_kyc_insert(app, key),
        _ => {
            app.mode = Mode::Normal;
            None
        }
    }
}

/// Edits the focused KYC field.
fn handle_kyc_insert(app: &mut App, key: KeyEvent) -> Option<Action> {
    let input = match app.kyc.field {
        KycField::Pan => &mut app.kyc.pan,
        KycField::Aadhaar => &mut app.kyc.aadhaar,
    };
    match key.code {
        KeyCode::Enter => app.mode = Mode::Normal,
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    None
}

/// Edits the focused transfer field, debouncing recipient searches.
fn handle_transfer_insert(app: &mut App, key: KeyEvent) -> Option<Action> {
    let field = app.transfer.field;
    let input = match field {
        TransferField::Recipient => &mut app.transfer.query,
        TransferField::Amount => &mut app.transfer.amount,
        TransferField::Note => &mut app.transfer.note,
    };

    let mut edited = false;
    match key.code {
        KeyCode::Enter => {
            app.mode = Mode::Normal;
            return None;
        }
        KeyCode::Char(c) => {
            input.insert(c);
            edited = true;
        }
        KeyCode::Backspace => {
            input.backspace();
            edited = true;
        }
        KeyCode::Delete => {
            input.delete();
            edited = true;
        }
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }

    // Typing in the recipient box invalidates the chosen recipient and
    // kicks off a new debounced search.
    if edited && field == TransferField::Recipient {
        app.transfer.recipient = None;
        app.transfer.results_selected = 0;
        let query = app.transfer.query.as_str().trim().to_string();
        if query.is_empty() {
            app.transfer.results.clear();
            app.transfer.searching = false;
            return Some(Action::CancelSearch);
        }
        app.transfer.searching = true;
        return Some(Action::Search(query));
    }

    None
}

/// Handles keys in confirm mode (destructive admin actions).
fn handle_confirm_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.mode = Mode::Normal;
            match app.pending_confirm.take() {
                Some(Confirm::DeleteUser { id, .. }) => Some(Action::DeleteUser(id)),
                None => None,
            }
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.pending_confirm = None;
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn logged_in_app() -> App {
        let mut session = SessionStore::new();
        session.login(
            "jwt".to_string(),
            serde_json::from_value(serde_json::json!({
                "id": "u-1",
                "name": "Dev User",
                "email": "dev@example.com",
                "walletId": "w-1",
            }))
            .unwrap(),
        );
        App::new(session)
    }

    #[test]
    fn empty_login_form_is_rejected_inline() {
        let mut app = App::new(SessionStore::new());
        let action = handle_key(&mut app, key(KeyCode::Enter));
        assert!(action.is_none());
        assert!(app.login.error.is_some());
    }

    #[test]
    fn filled_login_form_submits() {
        let mut app = App::new(SessionStore::new());
        for c in "dev@example.com".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Tab));
        for c in "hunter2".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        let action = handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(action, Some(Action::Login { .. })));
        assert!(app.login.submitting);
    }

    #[test]
    fn transfer_submit_without_recipient_sets_field_errors() {
        let mut app = logged_in_app();
        app.active_tab = 2; // Transfer
        let action = handle_key(&mut app, key(KeyCode::Char('s')));
        assert!(action.is_none());
        assert!(app.transfer.recipient_error.is_some());
        assert!(app.transfer.amount_error.is_some());
    }

    #[test]
    fn transfer_submit_rejects_non_positive_amount() {
        let mut app = logged_in_app();
        app.active_tab = 2;
        app.transfer.recipient = Some(
            serde_json::from_value(serde_json::json!({
                "id": "u-2",
                "name": "Priya Sharma",
                "email": "priya@example.com",
            }))
            .unwrap(),
        );
        for c in "-10".chars() {
            app.transfer.amount.insert(c);
        }
        let action = handle_key(&mut app, key(KeyCode::Char('s')));
        assert!(action.is_none());
        assert!(app.transfer.recipient_error.is_none());
        assert_eq!(
            app.transfer.amount_error.as_deref(),
            Some("Amount must be positive.")
        );
    }

    #[test]
    fn typing_in_recipient_box_triggers_search() {
        let mut app = logged_in_app();
        app.active_tab = 2;
        app.mode = Mode::Insert;
        let action = handle_key(&mut app, key(KeyCode::Char('p')));
        assert!(matches!(action, Some(Action::Search(q)) if q == "p"));
        assert!(app.transfer.searching);
    }

    #[test]
    fn clearing_recipient_box_cancels_search() {
        let mut app = logged_in_app();
        app.active_tab = 2;
        app.mode = Mode::Insert;
        handle_key(&mut app, key(KeyCode::Char('p')));
        let action = handle_key(&mut app, key(KeyCode::Backspace));
        assert!(matches!(action, Some(Action::CancelSearch)));
        assert!(!app.transfer.searching);
    }

    #[test]
    fn kyc_submit_validates_both_fields_inline() {
        let mut app = logged_in_app();
        app.active_tab = 4; // KYC
        for c in "bad".chars() {
            app.kyc.pan.insert(c);
        }
        for c in "123".chars() {
            app.kyc.aadhaar.insert(c);
        }
        let action = handle_key(&mut app, key(KeyCode::Char('s')));
        assert!(action.is_none());
        assert!(app.kyc.pan_error.is_some());
        assert!(app.kyc.aadhaar_error.is_some());

        app.kyc.pan.clear();
        app.kyc.aadhaar.clear();
        for c in "ABCDE1234F".chars() {
            app.kyc.pan.insert(c);
        }
        for c in "123456789012".chars() {
            app.kyc.aadhaar.insert(c);
        }
        let action = handle_key(&mut app, key(KeyCode::Char('s')));
        assert!(matches!(
            action,
            Some(Action::SubmitKyc { pan, aadhaar })
                if pan == "ABCDE1234F" && aadhaar == "123456789012"
        ));
        assert!(app.kyc.submitting);
    }

    #[test]
    fn stale_search_results_are_ignored() {
        let mut app = logged_in_app();
        app.transfer.query.insert('p');
        app.transfer.query.insert('r');
        let action = update(
            &mut app,
            Message::SearchResults {
                query: "p".to_string(),
                outcome: Ok(vec![]),
            },
        );
        assert!(action.is_none());
        // A stale result must not flip the searching indicator off.
        assert!(app.transfer.results.is_empty());
    }

    #[test]
    fn unauthorized_fetch_expires_the_session() {
        let mut app = logged_in_app();
        update(
            &mut app,
            Message::Transactions(Err(crate::PaisaError::Unauthorized)),
        );
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = logged_in_app();
        app.admin_users = Loadable::Ready(vec![
            serde_json::from_value(serde_json::json!({
                "id": "u-9",
                "name": "Target User",
                "email": "target@example.com",
            }))
            .unwrap(),
        ]);
        app.tabs.push(Tab::Admin);
        app.active_tab = app.tabs.len() - 1;

        let action = handle_key(&mut app, key(KeyCode::Char('d')));
        assert!(action.is_none());
        assert_eq!(app.mode, Mode::Confirm);

        let action = handle_key(&mut app, key(KeyCode::Char('y')));
        assert!(matches!(action, Some(Action::DeleteUser(id)) if id == "u-9"));
    }
}
