//! Transaction analytics models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full analytics payload for one wallet.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub summary: Summary,
    #[serde(default)]
    pub monthly_overview: Vec<MonthlyOverview>,
    #[serde(default)]
    pub spending_by_category: Vec<CategorySpending>,
}

/// Current-month totals with month-over-month change.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub current_month: MonthlyTotals,
    pub percentage_change: PercentageChange,
}

/// Incoming/outgoing totals for a month.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MonthlyTotals {
    #[serde(default)]
    pub incoming: Decimal,
    #[serde(default)]
    pub outgoing: Decimal,
}

/// Month-over-month change, in percent.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PercentageChange {
    #[serde(default)]
    pub incoming: f64,
    #[serde(default)]
    pub outgoing: f64,
}

/// One bar of the sent/received monthly overview.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MonthlyOverview {
    pub month: String,
    pub sent: Decimal,
    pub received: Decimal,
}

/// Aggregated spending for one category.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: Decimal,
}

/// A counter-party the wallet transacts with often.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequentContact {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub transaction_count: u64,
}
