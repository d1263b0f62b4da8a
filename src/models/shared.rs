//! Thread-safe account handle
//!
//! `SharedAccount` wraps a whole [`Account`] in a single mutex so several
//! threads can drive the same account. Every call holds the lock for the
//! full operation, so each deposit, withdrawal or accrual is applied as one
//! step. The plain `Account` stays lock-free for single-owner use.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::account::Account;
use crate::error::PassbookResult;

/// Cloneable, lock-guarded handle to one account
#[derive(Debug, Clone)]
pub struct SharedAccount {
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    /// Wrap an account for shared use
    pub fn new(account: Account) -> Self {
        Self {
            inner: Arc::new(Mutex::new(account)),
        }
    }

    // Every operation leaves the record consistent before it can panic, so a
    // poisoned lock still guards valid state.
    fn lock(&self) -> MutexGuard<'_, Account> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn deposit(&self, amount: f64) -> bool {
        self.lock().deposit(amount)
    }

    pub fn withdraw(&self, amount: f64) -> PassbookResult<()> {
        self.lock().withdraw(amount)
    }

    pub fn advance_age(&self, years: f64) {
        self.lock().advance_age(years)
    }

    pub fn apply_simple_interest(&self) -> f64 {
        self.lock().apply_simple_interest()
    }

    pub fn apply_compound_interest(&self) -> f64 {
        self.lock().apply_compound_interest()
    }

    pub fn balance(&self) -> f64 {
        self.lock().balance()
    }

    pub fn print_transaction_history(&self) {
        self.lock().print_transaction_history()
    }

    pub fn summary(&self) {
        self.lock().summary()
    }

    /// Run a read-only closure against the account under the lock
    pub fn with<R>(&self, f: impl FnOnce(&Account) -> R) -> R {
        f(&self.lock())
    }

    /// Clone the current state of the account
    pub fn snapshot(&self) -> Account {
        self.lock().clone()
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
