//! Audit trail for Passbook
//!
//! Records every operation applied to an account, including ones the account
//! ignores or rejects, in an append-only log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single record with timestamp, operation, account number,
//!   amount and the balance before and after the operation.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL) and reads them back for display.
//!
//! The trail is diagnostic output only. Account state is never rebuilt from it.
//!
//! # Example
//!
//! ```rust,ignore
//! use passbook::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let before = account.balance();
//! account.deposit(200.0);
//! logger.log(&AuditEntry::change(Operation::Deposit, &account, before, Some(200.0)))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
