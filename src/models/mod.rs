//! Core data models for Passbook
//!
//! This module contains the account record, its transaction log entries and
//! the shared handle used when an account crosses threads.

pub mod account;
pub mod money;
pub mod shared;
pub mod transaction;

pub use account::Account;
pub use money::{format_currency, format_rate, format_years};
pub use shared::SharedAccount;
pub use transaction::{Transaction, TransactionKind};
