//! Per-tab layouts and rendering.

pub mod admin;
pub mod analytics;
pub mod dashboard;
pub mod history;
pub mod kyc;
pub mod transfer;
