//! Transaction model
//!
//! A transaction is a single entry in an account's log: a short label and a
//! signed amount (positive for deposits, negative for withdrawals). Interest
//! accrual never produces a transaction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of balance-affecting event recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money added to the account
    Deposit,
    /// Money taken out of the account
    Withdrawal,
}

impl TransactionKind {
    /// The description label stored on the transaction
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A logged transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Short label, e.g. "Deposit" or "Withdrawal"
    pub description: String,

    /// Signed amount (positive for inflow, negative for outflow)
    pub amount: f64,
}

impl Transaction {
    /// Create a transaction with an arbitrary label
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }

    /// Create a deposit entry for a positive amount
    pub fn deposit(amount: f64) -> Self {
        Self::new(TransactionKind::Deposit.label(), amount)
    }

    /// Create a withdrawal entry; the stored amount is negated
    pub fn withdrawal(amount: f64) -> Self {
        Self::new(TransactionKind::Withdrawal.label(), -amount)
    }

    /// Check if this is an inflow (positive amount)
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }

    /// Check if this is an outflow (negative amount)
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.description, self.amount)
    }
}
