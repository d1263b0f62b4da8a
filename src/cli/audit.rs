//! Audit CLI command
//!
//! Lists recent entries from the audit trail.

use crate::audit::AuditLogger;
use crate::config::PassbookPaths;
use crate::error::PassbookResult;

/// Handle the `audit` command
pub fn handle_audit_command(paths: &PassbookPaths, limit: usize) -> PassbookResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
