//! Shared test utilities and constants.

/// Gateway URL for live integration tests, overridable via
/// `PAISA_API_URL`.
pub fn gateway_url() -> String {
    std::env::var("PAISA_API_URL")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}
