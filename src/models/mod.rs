//! Shared wire models for the wallet platform services.
//!
//! Field names follow the JSON casing of the backend (camelCase keys,
//! SCREAMING_SNAKE_CASE enum values). Monetary amounts are always
//! [`rust_decimal::Decimal`].

pub mod analytics;
pub mod auth;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use analytics::{AnalyticsReport, FrequentContact};
pub use auth::AuthResponse;
pub use transaction::{Transaction, TransactionStatus, TransactionType};
pub use user::{KycStatus, Role, User};
pub use wallet::Wallet;
