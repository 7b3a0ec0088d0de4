//! Terminal client for the paisa digital wallet platform.
//!
//! Provides typed models, REST endpoint bindings for the wallet
//! microservices (auth, user, wallet, transaction, admin), and a
//! Ratatui-based terminal interface for balances, transaction history,
//! transfers, analytics, and admin user management.

pub mod client;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod search;
pub mod services;
pub mod session;
pub mod tui;

pub use error::{PaisaError, Result};
