//! User service endpoints.

use crate::Result;
use crate::client::ApiClient;
use crate::models::User;
use crate::models::user::KycRequest;

const BASE: &str = "/user-service/users";

/// Profile by user id.
pub async fn user(client: &ApiClient, id: &str) -> Result<User> {
    client.get(&format!("{BASE}/{id}")).await
}

/// Users whose email starts with the given prefix (transfer recipient
/// search).
pub async fn search_by_email(client: &ApiClient, prefix: &str) -> Result<Vec<User>> {
    client
        .get_with_query(&format!("{BASE}/search"), &[("email", prefix.to_string())])
        .await
}

/// Submits KYC details for a user. The service answers with a plain
/// acknowledgement string.
pub async fn submit_kyc(client: &ApiClient, id: &str, request: &KycRequest) -> Result<String> {
    client.post_for_text(&format!("{BASE}/kyc/{id}"), request).await
}
