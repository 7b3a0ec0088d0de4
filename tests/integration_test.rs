//! Live gateway integration tests.
//!
//! These require the wallet platform running behind the configured
//! gateway and network access.
//! Run with: `cargo test --features integration-tests`

#![cfg(feature = "integration-tests")]

mod common;

use paisa::PaisaError;
use paisa::client::ApiClient;
use paisa::services;

#[tokio::test]
async fn test_protected_endpoint_rejects_missing_token() {
    let client = ApiClient::new(common::gateway_url()).expect("Failed to build client");

    let result = services::admin::users(&client).await;
    match result {
        Err(PaisaError::Unauthorized) | Err(PaisaError::Api { .. }) => {}
        other => panic!("expected an auth failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_round_trip() {
    let (Ok(email), Ok(password)) = (
        std::env::var("PAISA_EMAIL"),
        std::env::var("PAISA_PASSWORD"),
    ) else {
        eprintln!("skipping: PAISA_EMAIL / PAISA_PASSWORD not set");
        return;
    };

    let mut client = ApiClient::new(common::gateway_url()).expect("Failed to build client");
    let response = services::auth::login(&client, &email, &password)
        .await
        .expect("Failed to log in");
    assert!(!response.token.is_empty());

    client.set_token(&response.token);
    let balance = services::wallet::balance(&client, &response.user.id)
        .await
        .expect("Failed to fetch balance");
    assert!(balance >= rust_decimal::Decimal::ZERO);
}
