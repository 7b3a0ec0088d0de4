//! Typed bindings for the backend microservices.
//!
//! One module per service behind the gateway. These modules are the
//! only place endpoint paths appear; everything else goes through
//! [`crate::client::ApiClient`] with typed models.

pub mod admin;
pub mod auth;
pub mod transaction;
pub mod user;
pub mod wallet;
