//! Crate-level error types.
//!
//! [`PaisaError`] unifies every error source (configuration, HTTP, JSON,
//! backend responses) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PaisaError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PaisaError {
    /// Configuration could not be loaded or validated.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request failed before a response was received.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered with a non-2xx status. `message` carries the
    /// server-supplied `{message}` body verbatim and is shown to the user
    /// as-is.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The bearer token is missing or was rejected (HTTP 401). Views react
    /// by clearing the session and returning to the login screen.
    #[error("session expired, please log in again")]
    Unauthorized,

    /// Client-side input validation failed. Never produced by a network
    /// call; surfaced as an inline field message.
    #[error("{0}")]
    Validation(String),

    /// Terminal or other I/O failure.
    #[error("io error: {0}")]
    Io(String),
}

impl PaisaError {
    /// Whether this error should send the user back to the login screen.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PaisaError::Unauthorized)
    }
}
