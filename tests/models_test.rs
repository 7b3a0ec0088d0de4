//! Deserialization tests for the wallet platform wire models.

use rust_decimal_macros::dec;

use paisa::models::analytics::AnalyticsReport;
use paisa::models::auth::AuthResponse;
use paisa::models::transaction::{Transaction, TransactionStatus, TransactionType};
use paisa::models::user::{AdminUserView, KycStatus, Role};
use paisa::models::{FrequentContact, Wallet};

const TRANSACTION_JSON: &str = include_str!("fixtures/transaction.json");
const TRANSACTIONS_JSON: &str = include_str!("fixtures/transactions.json");
const AUTH_RESPONSE_JSON: &str = include_str!("fixtures/auth_response.json");
const ANALYTICS_JSON: &str = include_str!("fixtures/analytics.json");
const FREQUENT_CONTACTS_JSON: &str = include_str!("fixtures/frequent_contacts.json");
const WALLET_JSON: &str = include_str!("fixtures/wallet.json");
const ADMIN_USERS_JSON: &str = include_str!("fixtures/admin_users.json");

#[test]
fn test_transaction_deserializes() {
    let tx: Transaction =
        serde_json::from_str(TRANSACTION_JSON).expect("Failed to deserialize transaction");

    assert_eq!(tx.id, "7c9e6679-7425-40de-944b-e07fc1f90ae7");
    assert_eq!(tx.tpe, TransactionType::Transfer);
    assert_eq!(tx.amount, dec!(500));
    assert_eq!(
        tx.from_wallet_id.as_deref(),
        Some("11111111-aaaa-bbbb-cccc-000000000001")
    );
    assert_eq!(
        tx.to_wallet_id.as_deref(),
        Some("22222222-aaaa-bbbb-cccc-000000000002")
    );
    assert_eq!(tx.status, TransactionStatus::Success);
    assert_eq!(tx.description.as_deref(), Some("Dinner split"));
    assert_eq!(tx.display_title(), "Dinner split");
    assert_eq!(tx.display_date(), "Jul 15, 2026");
}

#[test]
fn test_transaction_list_tolerates_unknown_type() {
    let txs: Vec<Transaction> =
        serde_json::from_str(TRANSACTIONS_JSON).expect("Failed to deserialize transaction list");

    assert_eq!(txs.len(), 4);
    assert_eq!(txs[0].tpe, TransactionType::Transfer);
    assert_eq!(txs[1].tpe, TransactionType::Deposit);
    assert!(txs[1].from_wallet_id.is_none());
    assert_eq!(txs[2].tpe, TransactionType::Withdrawal);
    assert_eq!(txs[2].status, TransactionStatus::Pending);
    assert_eq!(txs[2].amount, dec!(250.75));

    // "REFUND" is not a known kind; the row still parses.
    assert_eq!(txs[3].tpe, TransactionType::Unknown);
}

#[test]
fn test_auth_response_deserializes() {
    let response: AuthResponse =
        serde_json::from_str(AUTH_RESPONSE_JSON).expect("Failed to deserialize auth response");

    assert_eq!(response.token, "eyJhbGciOiJIUzI1NiJ9.fixture.signature");
    assert_eq!(response.message.as_deref(), Some("Login successful"));
    assert_eq!(response.user.name, "Priya Sharma");
    assert_eq!(response.user.email, "priya@example.com");
    assert_eq!(response.user.role, Role::User);
    assert_eq!(response.user.email_verified, Some(true));
    assert_eq!(response.user.kyc_verified, Some(false));
    assert_eq!(
        response.user.wallet_id.as_deref(),
        Some("11111111-aaaa-bbbb-cccc-000000000001")
    );
    assert_eq!(response.user.wallet_balance, Some(dec!(12500.50)));
    assert!(!response.user.is_admin());
}

#[test]
fn test_analytics_report_deserializes() {
    let report: AnalyticsReport =
        serde_json::from_str(ANALYTICS_JSON).expect("Failed to deserialize analytics");

    assert_eq!(report.summary.current_month.incoming, dec!(2350.00));
    assert_eq!(report.summary.current_month.outgoing, dec!(1210.50));
    assert_eq!(report.summary.percentage_change.incoming, 10.5);
    assert_eq!(report.summary.percentage_change.outgoing, 5.2);

    assert_eq!(report.monthly_overview.len(), 2);
    assert_eq!(report.monthly_overview[0].month, "Feb");
    assert_eq!(report.monthly_overview[1].sent, dec!(950.25));

    assert_eq!(report.spending_by_category.len(), 2);
    assert_eq!(report.spending_by_category[0].category, "Food");
    assert_eq!(report.spending_by_category[1].amount, dec!(310.50));
}

#[test]
fn test_frequent_contacts_deserialize() {
    let contacts: Vec<FrequentContact> =
        serde_json::from_str(FREQUENT_CONTACTS_JSON).expect("Failed to deserialize contacts");

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "Rahul Verma");
    assert!(contacts[0].avatar.is_none());
    assert_eq!(contacts[0].transaction_count, 14);
    assert_eq!(
        contacts[1].avatar.as_deref(),
        Some("https://cdn.example.com/avatars/anita.png")
    );
}

#[test]
fn test_wallet_deserializes() {
    let wallet: Wallet = serde_json::from_str(WALLET_JSON).expect("Failed to deserialize wallet");

    assert_eq!(wallet.id, "11111111-aaaa-bbbb-cccc-000000000001");
    assert_eq!(wallet.user_id, "a3bb189e-8bf9-3888-9912-ace4e6543002");
    assert_eq!(wallet.balance, dec!(12500.50));
}

#[test]
fn test_admin_user_views_deserialize() {
    let users: Vec<AdminUserView> =
        serde_json::from_str(ADMIN_USERS_JSON).expect("Failed to deserialize admin users");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].kyc_status, KycStatus::Pending);
    assert_eq!(users[0].role, Role::User);
    assert_eq!(users[0].wallet_balance, Some(dec!(12500.50)));
    assert!(users[0].kyc_document_url.is_none());
    assert_eq!(users[1].kyc_status, KycStatus::Verified);
    assert_eq!(users[1].role, Role::Admin);
}
