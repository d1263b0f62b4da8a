//! Service layer for Passbook
//!
//! The service layer wraps the account core with side effects the core
//! deliberately avoids, currently the audit trail.

pub mod account;

pub use account::AccountService;
