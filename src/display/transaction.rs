//! Transaction display formatting
//!
//! Renders the transaction log as a two-line-per-entry listing.

use crate::models::{format_currency, Transaction};

/// Format one transaction as its description and amount lines
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "Description: {}\nAmount: {}\n",
        txn.description,
        format_currency(txn.amount)
    )
}

/// Format the full transaction history in insertion order
///
/// The header line is always present, even for an empty log.
pub fn format_transaction_history(transactions: &[Transaction]) -> String {
    let mut output = String::from("Transaction History:\n");
    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
    }
    output
}
