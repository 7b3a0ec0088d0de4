//! Wallet service models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A balance-holding account owned by one user.
///
/// The wallet id is distinct from the user id; transactions reference
/// wallets, not users. Balance is a fetched snapshot — the client never
/// computes a derived balance.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub user_id: String,
    pub balance: Decimal,
}
