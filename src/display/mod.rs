//! Display formatting for terminal output
//!
//! Plain-text reports for an account: the transaction history listing and
//! the account summary. Formatters return `String`s; callers decide where
//! the text goes.

pub mod account;
pub mod transaction;

pub use account::format_account_summary;
pub use transaction::{format_transaction_history, format_transaction_row};
