//! Audit entry data structures
//!
//! Defines the operations that can be audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{format_currency, Account};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Account was opened
    Open,
    /// Deposit applied
    Deposit,
    /// Non-positive deposit ignored
    DepositIgnored,
    /// Withdrawal applied
    Withdraw,
    /// Withdrawal refused
    WithdrawRejected,
    /// Account age advanced
    AdvanceAge,
    /// Simple interest accrued
    SimpleInterest,
    /// Compound interest accrued
    CompoundInterest,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Open => write!(f, "OPEN"),
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::DepositIgnored => write!(f, "DEPOSIT_IGNORED"),
            Operation::Withdraw => write!(f, "WITHDRAW"),
            Operation::WithdrawRejected => write!(f, "WITHDRAW_REJECTED"),
            Operation::AdvanceAge => write!(f, "ADVANCE_AGE"),
            Operation::SimpleInterest => write!(f, "SIMPLE_INTEREST"),
            Operation::CompoundInterest => write!(f, "COMPOUND_INTEREST"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Number of the affected account
    pub account_number: i64,

    /// Holder of the affected account
    pub holder_name: String,

    /// Amount passed to the operation: deposit/withdrawal amount, years for
    /// age changes, accrued interest for interest operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Balance before the operation
    pub balance_before: f64,

    /// Balance after the operation
    pub balance_after: f64,

    /// Free-form detail, e.g. the rejection reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Create an entry for a newly opened account
    pub fn open(account: &Account) -> Self {
        Self::change(Operation::Open, account, account.balance(), None)
    }

    /// Create an entry for an operation that has been applied to `account`
    ///
    /// `account` must already reflect the operation; `balance_before` is the
    /// balance captured just before it ran.
    pub fn change(
        operation: Operation,
        account: &Account,
        balance_before: f64,
        amount: Option<f64>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            account_number: account.account_number(),
            holder_name: account.holder_name().to_string(),
            amount,
            balance_before,
            balance_after: account.balance(),
            detail: None,
        }
    }

    /// Create an entry for an operation the account refused or ignored
    pub fn rejected(
        operation: Operation,
        account: &Account,
        amount: f64,
        reason: impl Into<String>,
    ) -> Self {
        let mut entry = Self::change(operation, account, account.balance(), Some(amount));
        entry.detail = Some(reason.into());
        entry
    }

    /// Check whether the operation changed the balance
    pub fn changed_balance(&self) -> bool {
        self.balance_before != self.balance_after
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} #{} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.account_number,
            self.holder_name
        );

        if let Some(amount) = self.amount {
            output.push_str(&format!(" amount={:.2}", amount));
        }

        output.push_str(&format!(
            " balance {} -> {}",
            format_currency(self.balance_before),
            format_currency(self.balance_after)
        ));

        if let Some(detail) = &self.detail {
            output.push_str(&format!("\n  Detail: {}", detail));
        }

        output
    }
}
