//! Export module for Passbook
//!
//! Provides machine-readable snapshots of an account:
//! - CSV: the transaction log (spreadsheet-compatible)
//! - JSON: full account snapshot with schema versioning
//! - YAML: the same snapshot in a human-readable form
//!
//! Exports are one-way; there is no import path.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_json, AccountExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
