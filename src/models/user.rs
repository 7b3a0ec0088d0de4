//! User and admin service models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account role. Unknown values fail open to a non-admin role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    #[serde(alias = "user")]
    User,
    #[serde(alias = "admin")]
    Admin,
    #[serde(other)]
    Unknown,
}

/// KYC verification state as reported by the admin service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    #[default]
    Unverified,
    Pending,
    Verified,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl KycStatus {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            KycStatus::Unverified => "Unverified",
            KycStatus::Pending => "Pending",
            KycStatus::Verified => "Verified",
            KycStatus::Rejected => "Rejected",
            KycStatus::Unknown => "Unknown",
        }
    }
}

/// A user profile as returned by the auth and user services.
///
/// This is also the profile stored in the session after login.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub kyc_verified: Option<bool>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Wallet owned by this user; present on login responses.
    #[serde(default)]
    pub wallet_id: Option<String>,
    #[serde(default)]
    pub wallet_balance: Option<Decimal>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Two-letter initials for avatar fallback display.
    pub fn initials(&self) -> String {
        let mut parts = self.name.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(first), Some(second)) => {
                let mut initials = String::new();
                initials.extend(first.chars().next());
                initials.extend(second.chars().next());
                initials
            }
            (Some(only), None) => only.chars().take(2).collect(),
            _ => String::new(),
        }
    }
}

/// A user row in the admin management view.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserView {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub kyc_status: KycStatus,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub wallet_balance: Option<Decimal>,
    #[serde(default)]
    pub kyc_document_url: Option<String>,
}

/// Request body for `POST /users/kyc/{id}`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRequest {
    pub pan_number: String,
    pub aadhaar_number: String,
}

/// Request body for `PUT /admin/users/{id}`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_accepts_both_casings() {
        let upper: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        let lower: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(upper, Role::Admin);
        assert_eq!(lower, Role::Admin);
    }

    #[test]
    fn unknown_role_is_not_admin() {
        let role: Role = serde_json::from_str("\"SUPERUSER\"").unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn initials_from_full_name() {
        let user = User {
            id: "u-1".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            phone_number: None,
            avatar: None,
            status: None,
            email_verified: None,
            kyc_verified: None,
            role: Role::User,
            created_at: None,
            wallet_id: None,
            wallet_balance: None,
        };
        assert_eq!(user.initials(), "PS");
    }
}
