//! Transaction service endpoints.

use crate::Result;
use crate::client::ApiClient;
use crate::models::analytics::{AnalyticsReport, FrequentContact};
use crate::models::transaction::{NewTransaction, Transaction, TransactionFilter};

const BASE: &str = "/transaction-service/api/transactions";

/// Submits a transaction (deposit, withdrawal, or transfer).
pub async fn create(client: &ApiClient, request: &NewTransaction) -> Result<Transaction> {
    client.post(BASE, request).await
}

/// All transactions touching a wallet, newest first, optionally
/// filtered by type and date range.
pub async fn for_wallet(
    client: &ApiClient,
    wallet_id: &str,
    filter: &TransactionFilter,
) -> Result<Vec<Transaction>> {
    let path = format!("{BASE}/wallet/{wallet_id}");
    if filter.is_empty() {
        client.get(&path).await
    } else {
        client.get_with_query(&path, &filter.to_query()).await
    }
}

/// Counter-parties the wallet transfers with most often.
pub async fn frequent_contacts(
    client: &ApiClient,
    wallet_id: &str,
    limit: usize,
) -> Result<Vec<FrequentContact>> {
    client
        .get_with_query(
            &format!("{BASE}/frequent-contacts/{wallet_id}"),
            &[("limit", limit.to_string())],
        )
        .await
}

/// Monthly and per-category aggregates for a wallet.
pub async fn analytics(client: &ApiClient, wallet_id: &str) -> Result<AnalyticsReport> {
    client.get(&format!("{BASE}/analytics/{wallet_id}")).await
}
