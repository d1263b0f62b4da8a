//! Passbook - a single bank account with interest accrual
//!
//! This library models one bank account: balance tracking, deposits,
//! withdrawals, simple and compound interest, and transaction history
//! reporting. The account core is synchronous and does no I/O beyond its
//! two stdout reports; auditing, export and configuration sit around it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: The account record, transaction log entries and a
//!   mutex-guarded shared handle
//! - `error`: Custom error types
//! - `display`: Text formatting for the history and summary reports
//! - `services`: Account service adding the audit trail
//! - `audit`: Append-only JSONL audit logging
//! - `export`: JSON, YAML and CSV snapshots
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `passbook` binary
//!
//! # Example
//!
//! ```
//! use passbook::models::Account;
//!
//! let mut account = Account::new(1001, "Alice", 1000.0, 5.0);
//! account.deposit(200.0);
//! account.withdraw(300.0).unwrap();
//! assert!(account.withdraw(10000.0).unwrap_err().is_insufficient_balance());
//! assert_eq!(account.balance(), 900.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{PassbookError, PassbookResult};
pub use models::{Account, SharedAccount, Transaction};
