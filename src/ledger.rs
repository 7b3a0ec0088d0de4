//! Ledger interpretation: classifying a transaction relative to a
//! viewing wallet.
//!
//! Every transaction-listing screen needs the same three facts about a
//! row: does money leave the viewer's wallet, what signed amount string
//! to print, and who the counter-party is. [`interpret`] computes all
//! three from a fetched [`Transaction`] without touching the network —
//! counter-party name resolution is injected so the function stays pure
//! and unit-testable.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::transaction::{Transaction, TransactionType};

/// Currency symbol used for all displayed amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Display classification of one transaction for one viewing wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerView {
    /// Whether money leaves the viewer's wallet.
    pub is_outgoing: bool,
    /// Amount with sign and currency symbol, e.g. `-₹500.00`.
    pub signed_amount: String,
    /// `To: <party>` / `From: <party>`, or empty for unclassifiable rows.
    pub counterparty_label: String,
}

/// Resolves a wallet id to a display name. Returning `None` falls back
/// to a truncated id.
pub type PartyResolver<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Classifies `tx` as seen from `viewer_wallet_id`.
///
/// Rules:
/// - `WITHDRAWAL` is always outgoing, to the system wallet.
/// - `DEPOSIT` is always incoming, from the system wallet.
/// - `TRANSFER` is outgoing exactly when the source wallet is the
///   viewer's (id comparison ignores ASCII case); the counter-party is
///   the opposite side.
/// - Any other type renders as incoming with an empty label; the
///   anomaly is logged, never a panic.
pub fn interpret(
    tx: &Transaction,
    viewer_wallet_id: &str,
    resolve_party: Option<PartyResolver<'_>>,
) -> LedgerView {
    let (is_outgoing, counterparty_label) = match tx.tpe {
        TransactionType::Withdrawal => (true, "To: System".to_string()),
        TransactionType::Deposit => (false, "From: System".to_string()),
        TransactionType::Transfer => {
            let is_outgoing = tx
                .from_wallet_id
                .as_deref()
                .is_some_and(|from| from.eq_ignore_ascii_case(viewer_wallet_id));
            let label = if is_outgoing {
                format!("To: {}", party_name(tx.to_wallet_id.as_deref(), resolve_party))
            } else {
                format!(
                    "From: {}",
                    party_name(tx.from_wallet_id.as_deref(), resolve_party)
                )
            };
            (is_outgoing, label)
        }
        TransactionType::Unknown => {
            warn!(transaction_id = %tx.id, "transaction with unrecognized type");
            (false, String::new())
        }
    };

    LedgerView {
        is_outgoing,
        signed_amount: signed_amount(tx.amount, is_outgoing),
        counterparty_label,
    }
}

/// Formats an amount with sign prefix and currency symbol.
pub fn signed_amount(amount: Decimal, is_outgoing: bool) -> String {
    let sign = if is_outgoing { '-' } else { '+' };
    format!("{sign}{}", format_amount(amount))
}

/// Formats an amount as `₹` with two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Resolves a counter-party wallet id to a display name.
///
/// An absent id is the sentinel system side. Without a resolver hit the
/// last six characters of the id are shown, enough to tell wallets
/// apart without claiming to know the owner.
fn party_name(wallet_id: Option<&str>, resolve_party: Option<PartyResolver<'_>>) -> String {
    let Some(id) = wallet_id else {
        return "System".to_string();
    };
    if let Some(resolve) = resolve_party
        && let Some(name) = resolve(id)
    {
        return name;
    }
    let suffix_start = id.len().saturating_sub(6);
    format!("...{}", &id[suffix_start..])
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::transaction::TransactionStatus;

    fn transfer(from: &str, to: &str, amount: Decimal) -> Transaction {
        Transaction {
            id: "tx-0001".to_string(),
            tpe: TransactionType::Transfer,
            amount,
            from_wallet_id: Some(from.to_string()),
            to_wallet_id: Some(to.to_string()),
            category: None,
            description: None,
            status: TransactionStatus::Success,
            created_at: "2026-08-01T09:30:00".to_string(),
        }
    }

    #[test]
    fn transfer_from_viewer_is_outgoing() {
        let tx = transfer("W1", "W2", dec!(500));
        let view = interpret(&tx, "W1", None);
        assert!(view.is_outgoing);
        assert_eq!(view.signed_amount, "-₹500.00");
        assert_eq!(view.counterparty_label, "To: ...W2");
    }

    #[test]
    fn transfer_to_viewer_is_incoming() {
        let tx = transfer("W1", "W2", dec!(500));
        let view = interpret(&tx, "W2", None);
        assert!(!view.is_outgoing);
        assert_eq!(view.signed_amount, "+₹500.00");
        assert_eq!(view.counterparty_label, "From: ...W1");
    }

    #[test]
    fn wallet_id_comparison_ignores_case() {
        let tx = transfer("ABC-DEF", "W2", dec!(10));
        let view = interpret(&tx, "abc-def", None);
        assert!(view.is_outgoing);
    }

    #[test]
    fn resolver_supplies_party_name() {
        let tx = transfer("W1", "W2", dec!(500));
        let resolve = |id: &str| (id == "W2").then(|| "Priya Sharma".to_string());
        let view = interpret(&tx, "W1", Some(&resolve));
        assert_eq!(view.counterparty_label, "To: Priya Sharma");
    }

    #[test]
    fn resolver_miss_falls_back_to_truncated_id() {
        let tx = transfer("W1", "wallet-9f3a2c", dec!(500));
        let resolve = |_: &str| None;
        let view = interpret(&tx, "W1", Some(&resolve));
        assert_eq!(view.counterparty_label, "To: ...9f3a2c");
    }

    #[test]
    fn deposit_is_always_incoming() {
        let mut tx = transfer("W1", "W2", dec!(1000));
        tx.tpe = TransactionType::Deposit;
        for viewer in ["W1", "W2", "unrelated"] {
            let view = interpret(&tx, viewer, None);
            assert!(!view.is_outgoing);
            assert_eq!(view.signed_amount, "+₹1000.00");
            assert_eq!(view.counterparty_label, "From: System");
        }
    }

    #[test]
    fn withdrawal_is_always_outgoing() {
        let mut tx = transfer("W1", "W2", dec!(250));
        tx.tpe = TransactionType::Withdrawal;
        for viewer in ["W1", "W2", "unrelated"] {
            let view = interpret(&tx, viewer, None);
            assert!(view.is_outgoing);
            assert_eq!(view.signed_amount, "-₹250.00");
            assert_eq!(view.counterparty_label, "To: System");
        }
    }

    #[test]
    fn unknown_type_fails_open_to_incoming() {
        let mut tx = transfer("W1", "W2", dec!(75));
        tx.tpe = TransactionType::Unknown;
        let view = interpret(&tx, "W1", None);
        assert!(!view.is_outgoing);
        assert_eq!(view.signed_amount, "+₹75.00");
        assert_eq!(view.counterparty_label, "");
    }

    #[test]
    fn interpretation_is_pure() {
        let tx = transfer("W1", "W2", dec!(500));
        let first = interpret(&tx, "W1", None);
        let second = interpret(&tx, "W1", None);
        assert_eq!(first, second);
    }

    #[test]
    fn amounts_keep_two_decimal_places() {
        assert_eq!(format_amount(dec!(500)), "₹500.00");
        assert_eq!(format_amount(dec!(1000.5)), "₹1000.50");
        assert_eq!(format_amount(dec!(0.1)), "₹0.10");
    }

    #[test]
    fn transfer_with_missing_source_is_incoming_from_system() {
        let mut tx = transfer("W1", "W2", dec!(40));
        tx.from_wallet_id = None;
        let view = interpret(&tx, "W2", None);
        assert!(!view.is_outgoing);
        assert_eq!(view.counterparty_label, "From: System");
    }
}
