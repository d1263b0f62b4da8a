//! Account service
//!
//! Drives a single account and records every operation, applied, ignored or
//! rejected, to the audit trail when one is configured.

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::error::PassbookResult;
use crate::models::Account;

/// Service owning one account and its optional audit trail
#[derive(Debug)]
pub struct AccountService {
    account: Account,
    audit: Option<AuditLogger>,
}

impl AccountService {
    /// Create a service without auditing
    pub fn new(account: Account) -> Self {
        Self {
            account,
            audit: None,
        }
    }

    /// Create a service that audits to `logger`, recording the account opening
    pub fn with_audit(account: Account, logger: AuditLogger) -> PassbookResult<Self> {
        let service = Self {
            account,
            audit: Some(logger),
        };
        service.record(AuditEntry::open(&service.account))?;
        Ok(service)
    }

    /// The wrapped account
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Consume the service and return the account
    pub fn into_account(self) -> Account {
        self.account
    }

    /// The audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Deposit into the account; returns whether the deposit was applied
    pub fn deposit(&mut self, amount: f64) -> PassbookResult<bool> {
        let before = self.account.balance();
        let applied = self.account.deposit(amount);

        let entry = if applied {
            AuditEntry::change(Operation::Deposit, &self.account, before, Some(amount))
        } else {
            AuditEntry::rejected(
                Operation::DepositIgnored,
                &self.account,
                amount,
                "Non-positive deposit ignored",
            )
        };
        self.record(entry)?;

        Ok(applied)
    }

    /// Withdraw from the account
    ///
    /// A refused withdrawal is audited and its error returned unchanged.
    pub fn withdraw(&mut self, amount: f64) -> PassbookResult<()> {
        let before = self.account.balance();
        match self.account.withdraw(amount) {
            Ok(()) => self.record(AuditEntry::change(
                Operation::Withdraw,
                &self.account,
                before,
                Some(amount),
            )),
            Err(err) => {
                self.record(AuditEntry::rejected(
                    Operation::WithdrawRejected,
                    &self.account,
                    amount,
                    err.to_string(),
                ))?;
                Err(err)
            }
        }
    }

    /// Advance the account age by `years`
    pub fn advance_age(&mut self, years: f64) -> PassbookResult<()> {
        let before = self.account.balance();
        self.account.advance_age(years);
        self.record(AuditEntry::change(
            Operation::AdvanceAge,
            &self.account,
            before,
            Some(years),
        ))
    }

    /// Accrue simple interest; returns the interest added
    pub fn apply_simple_interest(&mut self) -> PassbookResult<f64> {
        let before = self.account.balance();
        let interest = self.account.apply_simple_interest();
        self.record(AuditEntry::change(
            Operation::SimpleInterest,
            &self.account,
            before,
            Some(interest),
        ))?;
        Ok(interest)
    }

    /// Accrue compound interest; returns the interest added
    pub fn apply_compound_interest(&mut self) -> PassbookResult<f64> {
        let before = self.account.balance();
        let interest = self.account.apply_compound_interest();
        self.record(AuditEntry::change(
            Operation::CompoundInterest,
            &self.account,
            before,
            Some(interest),
        ))?;
        Ok(interest)
    }

    fn record(&self, entry: AuditEntry) -> PassbookResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}
