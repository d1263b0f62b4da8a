//! JSON Export functionality
//!
//! Exports a full account snapshot to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PassbookError, PassbookResult};
use crate::models::{Account, Transaction};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Crate version that created the export
    pub app_version: String,

    pub account_number: i64,
    pub holder_name: String,
    pub balance: f64,
    pub interest_rate: f64,
    pub accumulated_interest: f64,
    pub age_in_years: f64,

    /// Logged transactions in insertion order
    pub transactions: Vec<Transaction>,
}

impl AccountExport {
    /// Capture the current state of an account
    pub fn from_account(account: &Account) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            account_number: account.account_number(),
            holder_name: account.holder_name().to_string(),
            balance: account.balance(),
            interest_rate: account.interest_rate(),
            accumulated_interest: account.accumulated_interest(),
            age_in_years: account.age_in_years(),
            transactions: account.transactions().to_vec(),
        }
    }
}

/// Export an account snapshot as pretty-printed JSON
pub fn export_json<W: Write>(account: &Account, writer: &mut W) -> PassbookResult<()> {
    let export = AccountExport::from_account(account);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PassbookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PassbookError::Export(e.to_string()))?;

    Ok(())
}
