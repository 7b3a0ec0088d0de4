//! Admin service endpoints. All of these require an ADMIN role token.

use crate::Result;
use crate::client::ApiClient;
use crate::models::user::{AdminUserView, UpdateUserRequest};

const ADMIN_BASE: &str = "/admin-service/admin";
const KYC_BASE: &str = "/admin-service/kyc-documents";

/// All users, for the management table.
pub async fn users(client: &ApiClient) -> Result<Vec<AdminUserView>> {
    client.get(&format!("{ADMIN_BASE}/users")).await
}

/// One user's admin view.
pub async fn user(client: &ApiClient, id: &str) -> Result<AdminUserView> {
    client.get(&format!("{ADMIN_BASE}/users/{id}")).await
}

/// Updates a user's editable fields.
pub async fn update_user(
    client: &ApiClient,
    id: &str,
    request: &UpdateUserRequest,
) -> Result<AdminUserView> {
    client.put(&format!("{ADMIN_BASE}/users/{id}"), request).await
}

/// Permanently removes a user.
pub async fn delete_user(client: &ApiClient, id: &str) -> Result<()> {
    client.delete(&format!("{ADMIN_BASE}/users/{id}")).await
}

/// Approves a user's pending KYC submission.
pub async fn approve_kyc(client: &ApiClient, id: &str) -> Result<()> {
    client.put_empty(&format!("{ADMIN_BASE}/approve/{id}")).await
}

/// Rejects a user's pending KYC submission.
pub async fn reject_kyc(client: &ApiClient, id: &str) -> Result<()> {
    client.put_empty(&format!("{ADMIN_BASE}/reject/{id}")).await
}

/// Uploads a KYC document for a user.
pub async fn upload_kyc_document(
    client: &ApiClient,
    user_id: &str,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<String> {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);
    client
        .post_multipart(&format!("{KYC_BASE}/upload/{user_id}"), form)
        .await
}

/// Downloads a user's KYC document.
pub async fn view_kyc_document(client: &ApiClient, user_id: &str) -> Result<Vec<u8>> {
    client.get_bytes(&format!("{KYC_BASE}/view/{user_id}")).await
}
