//! Wallet service endpoints.

use rust_decimal::Decimal;

use crate::Result;
use crate::client::ApiClient;
use crate::models::Wallet;

const BASE: &str = "/wallet-service/wallets";

/// Current balance for a user's wallet.
pub async fn balance(client: &ApiClient, user_id: &str) -> Result<Decimal> {
    client.get(&format!("{BASE}/balance/{user_id}")).await
}

/// Wallet by wallet id.
pub async fn wallet(client: &ApiClient, wallet_id: &str) -> Result<Wallet> {
    client.get(&format!("{BASE}/{wallet_id}")).await
}

/// Wallet owned by a user.
pub async fn wallet_for_user(client: &ApiClient, user_id: &str) -> Result<Wallet> {
    client.get(&format!("{BASE}/user/{user_id}")).await
}
