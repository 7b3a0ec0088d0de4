//! Authentication session: current token and user profile.
//!
//! The session lives from login until logout and is persisted in the
//! OS keychain so a restarted process resumes the same login. A 401
//! from any backend call invalidates it. Keychain failures degrade to
//! an in-memory-only session rather than blocking login.

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::models::User;

/// Keychain service name used for all stored session entries.
const SERVICE: &str = "paisa";

/// Keychain entry holding the bearer token.
const TOKEN_ENTRY: &str = "auth_token";

/// Keychain entry holding the serialized user profile.
const PROFILE_ENTRY: &str = "user_profile";

/// An authenticated session.
#[derive(Clone, Debug)]
pub struct Session {
    pub token: Zeroizing<String>,
    pub user: User,
}

/// Holds the current session, if any.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
}

impl SessionStore {
    /// Creates an empty, logged-out store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a persisted session from the keychain.
    ///
    /// Missing or unreadable entries yield a logged-out store, never an
    /// error.
    pub fn restore() -> Self {
        let Some(token) = read_entry(TOKEN_ENTRY) else {
            return Self::new();
        };
        let Some(profile_json) = read_entry(PROFILE_ENTRY) else {
            return Self::new();
        };
        match serde_json::from_str::<User>(&profile_json) {
            Ok(user) => {
                debug!(user = %user.email, "restored session from keychain");
                Self {
                    current: Some(Session { token, user }),
                }
            }
            Err(e) => {
                warn!(error = %e, "stored user profile is unreadable, starting logged out");
                Self::new()
            }
        }
    }

    /// Starts a session and persists it.
    pub fn login(&mut self, token: String, user: User) {
        if let Ok(profile_json) = serde_json::to_string(&user) {
            write_entry(TOKEN_ENTRY, &token);
            write_entry(PROFILE_ENTRY, &profile_json);
        }
        self.current = Some(Session {
            token: Zeroizing::new(token),
            user,
        });
    }

    /// Ends the session and clears persisted state.
    pub fn logout(&mut self) {
        self.current = None;
        delete_entry(TOKEN_ENTRY);
        delete_entry(PROFILE_ENTRY);
    }

    /// Drops the session after the backend rejected the token (401).
    pub fn invalidate(&mut self) {
        debug!("session invalidated by backend");
        self.logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    /// The wallet id the ledger helper classifies against.
    pub fn wallet_id(&self) -> Option<&str> {
        self.current_user().and_then(|u| u.wallet_id.as_deref())
    }
}

/// Reads a keychain entry, returning `None` if not set.
fn read_entry(key: &str) -> Option<Zeroizing<String>> {
    let entry = keyring::Entry::new(SERVICE, key).ok()?;
    match entry.get_password() {
        Ok(value) => Some(Zeroizing::new(value)),
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(key, error = %e, "failed to read keychain entry");
            None
        }
    }
}

/// Writes a keychain entry, logging on failure.
fn write_entry(key: &str, value: &str) {
    match keyring::Entry::new(SERVICE, key) {
        Ok(entry) => {
            if let Err(e) = entry.set_password(value) {
                warn!(key, error = %e, "failed to persist session entry");
            }
        }
        Err(e) => warn!(key, error = %e, "failed to open keychain entry"),
    }
}

/// Deletes a keychain entry if present.
fn delete_entry(key: &str) {
    if let Ok(entry) = keyring::Entry::new(SERVICE, key) {
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(e) => warn!(key, error = %e, "failed to clear session entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    fn test_user(wallet: Option<&str>) -> User {
        User {
            id: "u-1".to_string(),
            name: "Dev User".to_string(),
            email: "dev@example.com".to_string(),
            phone_number: None,
            avatar: None,
            status: Some("ACTIVE".to_string()),
            email_verified: Some(true),
            kyc_verified: Some(false),
            role: Role::User,
            created_at: None,
            wallet_id: wallet.map(str::to_string),
            wallet_balance: None,
        }
    }

    #[test]
    fn new_store_is_logged_out() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert!(store.token().is_none());
        assert!(store.wallet_id().is_none());
    }

    #[test]
    fn login_exposes_token_and_user() {
        let mut store = SessionStore::new();
        store.login("jwt-abc".to_string(), test_user(Some("w-1")));
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("jwt-abc"));
        assert_eq!(store.wallet_id(), Some("w-1"));
        assert_eq!(store.current_user().map(|u| u.email.as_str()), Some("dev@example.com"));
    }

    #[test]
    fn logout_clears_everything() {
        let mut store = SessionStore::new();
        store.login("jwt-abc".to_string(), test_user(Some("w-1")));
        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn invalidate_behaves_like_logout() {
        let mut store = SessionStore::new();
        store.login("jwt-abc".to_string(), test_user(None));
        store.invalidate();
        assert!(!store.is_authenticated());
    }
}
