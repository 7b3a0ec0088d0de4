//! Transaction service models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction kinds understood by the client.
///
/// The backend may introduce new kinds before the client learns about
/// them; those deserialize as [`TransactionType::Unknown`] instead of
/// failing the whole response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    /// Returns the wire-format value expected by the transaction service.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::Transfer => "TRANSFER",
            TransactionType::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable label for table display.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdrawal => "Withdrawal",
            TransactionType::Transfer => "Transfer",
            TransactionType::Unknown => "Unknown",
        }
    }
}

/// Lifecycle status of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    /// Human-readable label for table display.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Success => "Success",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// A transaction as returned by the transaction service.
///
/// Immutable on the client side; the service owns the record.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Transaction kind (wire key: `"type"`).
    #[serde(rename = "type")]
    pub tpe: TransactionType,
    pub amount: Decimal,
    /// Absent for deposits (the system wallet is the source).
    #[serde(default)]
    pub from_wallet_id: Option<String>,
    /// Absent for withdrawals (the system wallet is the destination).
    #[serde(default)]
    pub to_wallet_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TransactionStatus,
    /// RFC3339 / ISO-8601 timestamp.
    pub created_at: String,
}

impl Transaction {
    /// Text shown in the first table column: description, falling back to
    /// category, falling back to the type label.
    pub fn display_title(&self) -> &str {
        self.description
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.category.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(self.tpe.label())
    }

    /// Formats `created_at` as e.g. `Aug 6, 2026`, falling back to the raw
    /// string when the timestamp does not parse.
    pub fn display_date(&self) -> String {
        chrono::NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// Request body for `POST /transactions`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// Absent for deposits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_wallet_id: Option<String>,
    pub to_wallet_id: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub tpe: TransactionType,
}

/// Query filters for the wallet transaction listing.
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    pub tpe: Option<TransactionType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Whether any filter is active.
    pub fn is_empty(&self) -> bool {
        self.tpe.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }

    /// Renders the filter as `type=`/`startDate=`/`endDate=` query pairs.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(tpe) = self.tpe {
            query.push(("type", tpe.as_str().to_string()));
        }
        if let Some(start) = self.start_date {
            query.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            query.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_deserializes_without_error() {
        let tpe: TransactionType = serde_json::from_str("\"REFUND\"").unwrap();
        assert_eq!(tpe, TransactionType::Unknown);
    }

    #[test]
    fn filter_query_pairs() {
        let filter = TransactionFilter {
            tpe: Some(TransactionType::Transfer),
            start_date: NaiveDate::from_ymd_opt(2026, 7, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 7, 31),
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("type", "TRANSFER".to_string()),
                ("startDate", "2026-07-01".to_string()),
                ("endDate", "2026-07-31".to_string()),
            ]
        );
    }

    #[test]
    fn empty_filter_produces_no_pairs() {
        assert!(TransactionFilter::default().to_query().is_empty());
        assert!(TransactionFilter::default().is_empty());
    }

    #[test]
    fn new_transaction_omits_absent_fields() {
        let request = NewTransaction {
            from_wallet_id: None,
            to_wallet_id: "w-2".to_string(),
            amount: "250.00".parse().unwrap(),
            category: None,
            description: None,
            tpe: TransactionType::Deposit,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("fromWalletId").is_none());
        assert_eq!(json["type"], "DEPOSIT");
    }
}
