//! YAML Export functionality
//!
//! Exports an account snapshot to YAML format for human-readable review.

use std::io::Write;

use crate::error::{PassbookError, PassbookResult};
use crate::export::json::AccountExport;
use crate::models::Account;

/// Export an account snapshot as YAML with a comment header
pub fn export_yaml<W: Write>(account: &Account, writer: &mut W) -> PassbookResult<()> {
    let export = AccountExport::from_account(account);

    writeln!(writer, "# Passbook Account Export")
        .map_err(|e| PassbookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PassbookError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| PassbookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PassbookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PassbookError::Export(e.to_string()))?;

    Ok(())
}
