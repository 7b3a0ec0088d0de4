//! Contract tests for ledger interpretation over real wire payloads.
//!
//! These walk fetched-looking JSON through deserialization and
//! classification, the same path every transaction screen takes.

use paisa::ledger;
use paisa::models::transaction::Transaction;

const TRANSACTIONS_JSON: &str = include_str!("fixtures/transactions.json");

fn fixture_transactions() -> Vec<Transaction> {
    serde_json::from_str(TRANSACTIONS_JSON).expect("Failed to deserialize transaction list")
}

#[test]
fn transfer_viewed_from_sender() {
    let txs = fixture_transactions();
    let view = ledger::interpret(&txs[0], "W1", None);

    assert!(view.is_outgoing);
    assert_eq!(view.signed_amount, "-₹500.00");
    assert_eq!(view.counterparty_label, "To: ...W2");
}

#[test]
fn transfer_viewed_from_recipient() {
    let txs = fixture_transactions();
    let view = ledger::interpret(&txs[0], "W2", None);

    assert!(!view.is_outgoing);
    assert_eq!(view.signed_amount, "+₹500.00");
    assert_eq!(view.counterparty_label, "From: ...W1");
}

#[test]
fn transfer_with_resolved_party_name() {
    let txs = fixture_transactions();
    let resolve = |id: &str| (id == "W2").then(|| "Rahul Verma".to_string());
    let view = ledger::interpret(&txs[0], "W1", Some(&resolve));

    assert_eq!(view.counterparty_label, "To: Rahul Verma");
}

#[test]
fn deposit_is_incoming_for_any_viewer() {
    let txs = fixture_transactions();
    let view = ledger::interpret(&txs[1], "W9", None);

    assert!(!view.is_outgoing);
    assert_eq!(view.signed_amount, "+₹1000.00");
    assert_eq!(view.counterparty_label, "From: System");
}

#[test]
fn withdrawal_is_outgoing_for_any_viewer() {
    let txs = fixture_transactions();
    let view = ledger::interpret(&txs[2], "W9", None);

    assert!(view.is_outgoing);
    assert_eq!(view.signed_amount, "-₹250.75");
    assert_eq!(view.counterparty_label, "To: System");
}

#[test]
fn unknown_type_renders_without_classification() {
    let txs = fixture_transactions();
    let view = ledger::interpret(&txs[3], "W1", None);

    assert!(!view.is_outgoing);
    assert_eq!(view.signed_amount, "+₹75.00");
    assert_eq!(view.counterparty_label, "");
}
