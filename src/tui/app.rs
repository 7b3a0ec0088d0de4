//! Application state for the TUI.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::analytics::{AnalyticsReport, FrequentContact};
use crate::models::transaction::{Transaction, TransactionFilter, TransactionType};
use crate::models::user::AdminUserView;
use crate::models::User;
use crate::session::SessionStore;

use super::input::TextInput;

/// Number of transactions shown on the dashboard.
pub const RECENT_LIMIT: usize = 5;

/// Number of frequent contacts requested for the dashboard.
pub const CONTACT_LIMIT: usize = 5;

/// Remote data in one of three states: loading, failed with a message,
/// or ready (possibly empty).
#[derive(Clone, Debug, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Central application state container.
pub struct App {
    /// Authentication state; `viewer` wallet id for ledger interpretation
    /// comes from here.
    pub session: SessionStore,
    /// Which top-level screen is shown.
    pub screen: Screen,

    // -- Tab state --
    pub tabs: Vec<Tab>,
    pub active_tab: usize,

    // -- Login form --
    pub login: LoginForm,

    // -- Dashboard --
    pub balance: Loadable<Decimal>,
    pub recent: Loadable<Vec<Transaction>>,
    pub contacts: Loadable<Vec<FrequentContact>>,

    // -- History --
    pub transactions: Loadable<Vec<Transaction>>,
    pub filter: TransactionFilter,
    pub history_selected: usize,

    // -- Transfer --
    pub transfer: TransferForm,

    // -- Analytics --
    pub analytics: Loadable<AnalyticsReport>,

    // -- KYC --
    pub kyc: KycForm,

    // -- Admin --
    pub admin_users: Loadable<Vec<AdminUserView>>,
    pub admin_selected: usize,

    // -- Shared display state --
    /// Wallet id (lowercased) to display name, fed by completed
    /// transfers and recipient lookups. Injected into the ledger helper
    /// as the party resolver.
    pub party_names: HashMap<String, String>,
    pub mode: Mode,
    /// Action awaiting y/n confirmation.
    pub pending_confirm: Option<Confirm>,
    /// Error message to display (clears after timeout).
    pub error_message: Option<ErrorDisplay>,
    /// Transient success message shown in the status bar.
    pub notice: Option<String>,

    pub should_quit: bool,
}

impl App {
    /// Creates the initial state from a (possibly restored) session.
    pub fn new(session: SessionStore) -> Self {
        let screen = if session.is_authenticated() {
            Screen::Main
        } else {
            Screen::Login
        };
        let mut app = Self {
            session,
            screen,
            tabs: Vec::new(),
            active_tab: 0,
            login: LoginForm::default(),
            balance: Loadable::Loading,
            recent: Loadable::Loading,
            contacts: Loadable::Loading,
            transactions: Loadable::Loading,
            filter: TransactionFilter::default(),
            history_selected: 0,
            transfer: TransferForm::default(),
            analytics: Loadable::Loading,
            kyc: KycForm::default(),
            admin_users: Loadable::Loading,
            admin_selected: 0,
            party_names: HashMap::new(),
            mode: Mode::Normal,
            pending_confirm: None,
            error_message: None,
            notice: None,
            should_quit: false,
        };
        app.rebuild_tabs();
        app
    }

    /// Rebuilds the tab list from the session's role.
    pub fn rebuild_tabs(&mut self) {
        self.tabs = vec![
            Tab::Dashboard,
            Tab::History,
            Tab::Transfer,
            Tab::Analytics,
            Tab::Kyc,
        ];
        if self.session.current_user().is_some_and(User::is_admin) {
            self.tabs.push(Tab::Admin);
        }
        if self.active_tab >= self.tabs.len() {
            self.active_tab = 0;
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.tabs.get(self.active_tab).copied().unwrap_or(Tab::Dashboard)
    }

    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = (self.active_tab + 1) % self.tabs.len();
        }
    }

    pub fn previous_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = self
                .active_tab
                .checked_sub(1)
                .unwrap_or(self.tabs.len() - 1);
        }
    }

    /// Resets all fetched snapshots to loading (fresh login, refresh-all).
    pub fn reset_data(&mut self) {
        self.balance = Loadable::Loading;
        self.recent = Loadable::Loading;
        self.contacts = Loadable::Loading;
        self.transactions = Loadable::Loading;
        self.analytics = Loadable::Loading;
        self.admin_users = Loadable::Loading;
        self.history_selected = 0;
        self.admin_selected = 0;
    }

    /// Drops the session and returns to the login screen.
    pub fn expire_session(&mut self) {
        self.session.invalidate();
        self.screen = Screen::Login;
        self.login = LoginForm::default();
        self.login.error = Some("Session expired, please log in again.".to_string());
        self.reset_data();
    }

    /// Records a wallet-id to display-name association for the party
    /// resolver.
    pub fn remember_party(&mut self, wallet_id: &str, name: &str) {
        self.party_names
            .insert(wallet_id.to_ascii_lowercase(), name.to_string());
    }

    /// Looks up a remembered display name for a wallet id.
    pub fn party_name(&self, wallet_id: &str) -> Option<String> {
        self.party_names.get(&wallet_id.to_ascii_lowercase()).cloned()
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error messages older than 5 seconds.
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > std::time::Duration::from_secs(5)
        {
            self.error_message = None;
        }
    }

    /// Cycles the history type filter: all → deposit → withdrawal →
    /// transfer → all.
    pub fn cycle_type_filter(&mut self) {
        self.filter.tpe = match self.filter.tpe {
            None => Some(TransactionType::Deposit),
            Some(TransactionType::Deposit) => Some(TransactionType::Withdrawal),
            Some(TransactionType::Withdrawal) => Some(TransactionType::Transfer),
            Some(TransactionType::Transfer) | Some(TransactionType::Unknown) => None,
        };
        self.history_selected = 0;
    }

    /// Toggles the date filter between "this month" and unbounded.
    pub fn toggle_month_filter(&mut self, today: chrono::NaiveDate) {
        if self.filter.start_date.is_some() {
            self.filter.start_date = None;
            self.filter.end_date = None;
        } else {
            self.filter.start_date = today.with_day(1);
            self.filter.end_date = Some(today);
        }
        self.history_selected = 0;
    }
}

/// Top-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
}

/// Tabs of the main screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    History,
    Transfer,
    Analytics,
    Kyc,
    Admin,
}

impl Tab {
    /// Returns the display title for the tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::History => "History",
            Tab::Transfer => "Transfer",
            Tab::Analytics => "Analytics",
            Tab::Kyc => "KYC",
            Tab::Admin => "Admin",
        }
    }
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Confirm,
}

/// Destructive actions gated behind a y/n prompt.
#[derive(Clone, Debug)]
pub enum Confirm {
    DeleteUser { id: String, name: String },
}

impl Confirm {
    pub fn prompt(&self) -> String {
        match self {
            Confirm::DeleteUser { name, .. } => {
                format!("Delete user {name}? (y/n)")
            }
        }
    }
}

/// State of the login form.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: TextInput,
    pub password: TextInput,
    pub field: LoginField,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Focusable fields on the login screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// State of the transfer form.
#[derive(Debug, Default)]
pub struct TransferForm {
    /// Raw text of the recipient search box.
    pub query: TextInput,
    /// Debounced search results for the current query.
    pub results: Vec<User>,
    pub results_selected: usize,
    /// Whether a search is in flight.
    pub searching: bool,
    /// Chosen recipient, locked in from the results list.
    pub recipient: Option<User>,
    pub amount: TextInput,
    pub note: TextInput,
    pub field: TransferField,
    /// Inline validation messages, keyed by field.
    pub recipient_error: Option<String>,
    pub amount_error: Option<String>,
    pub submitting: bool,
}

impl TransferForm {
    /// Clears the form after a completed transfer.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State of the KYC submission form.
#[derive(Debug, Default)]
pub struct KycForm {
    pub pan: TextInput,
    pub aadhaar: TextInput,
    pub field: KycField,
    pub pan_error: Option<String>,
    pub aadhaar_error: Option<String>,
    pub submitting: bool,
    /// Acknowledgement text from the user service after submission.
    pub submitted: Option<String>,
}

/// Focusable fields on the KYC form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KycField {
    #[default]
    Pan,
    Aadhaar,
}

impl KycField {
    pub fn toggle(self) -> Self {
        match self {
            KycField::Pan => KycField::Aadhaar,
            KycField::Aadhaar => KycField::Pan,
        }
    }
}

/// Focusable fields on the transfer form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransferField {
    #[default]
    Recipient,
    Amount,
    Note,
}

impl TransferField {
    pub fn next(self) -> Self {
        match self {
            TransferField::Recipient => TransferField::Amount,
            TransferField::Amount => TransferField::Note,
            TransferField::Note => TransferField::Recipient,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            TransferField::Recipient => TransferField::Note,
            TransferField::Amount => TransferField::Recipient,
            TransferField::Note => TransferField::Amount,
        }
    }
}

/// Error message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    pub message: String,
    pub timestamp: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_without_admin_role() {
        let app = App::new(SessionStore::new());
        assert_eq!(
            app.tabs,
            vec![
                Tab::Dashboard,
                Tab::History,
                Tab::Transfer,
                Tab::Analytics,
                Tab::Kyc,
            ]
        );
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn tab_navigation_wraps() {
        let mut app = App::new(SessionStore::new());
        app.active_tab = app.tabs.len() - 1;
        app.next_tab();
        assert_eq!(app.active_tab, 0);
        app.previous_tab();
        assert_eq!(app.active_tab, app.tabs.len() - 1);
    }

    #[test]
    fn type_filter_cycles_back_to_all() {
        let mut app = App::new(SessionStore::new());
        assert!(app.filter.tpe.is_none());
        app.cycle_type_filter();
        assert_eq!(app.filter.tpe, Some(TransactionType::Deposit));
        app.cycle_type_filter();
        app.cycle_type_filter();
        app.cycle_type_filter();
        assert!(app.filter.tpe.is_none());
    }

    #[test]
    fn month_filter_toggles() {
        let mut app = App::new(SessionStore::new());
        let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        app.toggle_month_filter(today);
        assert_eq!(app.filter.start_date, chrono::NaiveDate::from_ymd_opt(2026, 8, 1));
        assert_eq!(app.filter.end_date, Some(today));
        app.toggle_month_filter(today);
        assert!(app.filter.start_date.is_none());
        assert!(app.filter.end_date.is_none());
    }

    #[test]
    fn party_names_ignore_case() {
        let mut app = App::new(SessionStore::new());
        app.remember_party("WALLET-A", "Priya Sharma");
        assert_eq!(app.party_name("wallet-a").as_deref(), Some("Priya Sharma"));
    }
}
