//! Terminal user interface for the paisa wallet client.
//!
//! Ratatui-based screens for login, dashboard, transaction history,
//! transfers, analytics, and admin user management.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod login;
pub mod tabs;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
