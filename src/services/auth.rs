//! Auth service endpoints.

use crate::Result;
use crate::client::ApiClient;
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest};

const BASE: &str = "/auth-service/api/auth";

/// Exchanges credentials for a bearer token and user profile.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    client.post(&format!("{BASE}/login"), &request).await
}

/// Creates an account; the backend also provisions a wallet.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<AuthResponse> {
    client.post(&format!("{BASE}/register"), request).await
}
