//! Account model
//!
//! A single bank account: identity, balance, interest settings and an
//! append-only transaction log. All state mutation for the crate lives here;
//! the service layer adds auditing on top and the display module renders the
//! reports.

use std::fmt;
use std::io::{self, Write};

use super::transaction::Transaction;
use crate::display::{format_account_summary, format_transaction_history};
use crate::error::{PassbookError, PassbookResult};

/// A bank account
///
/// Identity and interest rate are fixed at creation. The balance changes
/// through deposits, withdrawals and interest accrual; only deposits and
/// withdrawals are written to the transaction log.
#[derive(Debug, Clone)]
pub struct Account {
    account_number: i64,
    holder_name: String,
    balance: f64,
    /// Percentage, e.g. `5.0` for 5%
    interest_rate: f64,
    accumulated_interest: f64,
    age_in_years: f64,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Open a new account
    ///
    /// Negative balances and rates are accepted as given.
    pub fn new(
        account_number: i64,
        holder_name: impl Into<String>,
        initial_balance: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            account_number,
            holder_name: holder_name.into(),
            balance: initial_balance,
            interest_rate,
            accumulated_interest: 0.0,
            age_in_years: 0.0,
            transactions: Vec::new(),
        }
    }

    pub fn account_number(&self) -> i64 {
        self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn accumulated_interest(&self) -> f64 {
        self.accumulated_interest
    }

    pub fn age_in_years(&self) -> f64 {
        self.age_in_years
    }

    /// Logged transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Deposit a positive amount
    ///
    /// Non-positive amounts are ignored without error. Returns whether the
    /// deposit was applied.
    pub fn deposit(&mut self, amount: f64) -> bool {
        if amount > 0.0 {
            self.balance += amount;
            self.transactions.push(Transaction::deposit(amount));
            true
        } else {
            false
        }
    }

    /// Withdraw an amount no larger than the current balance
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero, negative or NaN
    /// - `InsufficientBalance` if `amount` exceeds the balance
    ///
    /// On error the account is left untouched.
    pub fn withdraw(&mut self, amount: f64) -> PassbookResult<()> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(PassbookError::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(PassbookError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.transactions.push(Transaction::withdrawal(amount));
        Ok(())
    }

    /// Add `years` to the account age (any value, including negative)
    pub fn advance_age(&mut self, years: f64) {
        self.age_in_years += years;
    }

    /// Accrue simple interest on the current balance for the current age
    ///
    /// `interest = balance * rate * age / 100`. The principal is the balance
    /// at call time, so calling this twice compounds on the first accrual.
    /// Nothing is appended to the transaction log. Returns the interest added.
    pub fn apply_simple_interest(&mut self) -> f64 {
        let interest = self.balance * self.interest_rate * self.age_in_years / 100.0;
        self.accrue(interest);
        interest
    }

    /// Accrue compound interest on the current balance for the current age
    ///
    /// `interest = balance * ((1 + rate / 100)^age - 1)`. Nothing is appended
    /// to the transaction log. Returns the interest added.
    pub fn apply_compound_interest(&mut self) -> f64 {
        let growth = (1.0 + self.interest_rate / 100.0).powf(self.age_in_years);
        let interest = self.balance * (growth - 1.0);
        self.accrue(interest);
        interest
    }

    fn accrue(&mut self, interest: f64) {
        self.accumulated_interest += interest;
        self.balance += interest;
    }

    /// Print the transaction history to stdout
    pub fn print_transaction_history(&self) {
        print!("{}", format_transaction_history(&self.transactions));
    }

    /// Print the account summary to stdout
    pub fn summary(&self) {
        print!("{}", format_account_summary(self));
    }

    /// Write the transaction history to any writer
    pub fn write_transaction_history<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(format_transaction_history(&self.transactions).as_bytes())
    }

    /// Write the account summary to any writer
    pub fn write_summary<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(format_account_summary(self).as_bytes())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.holder_name, self.account_number)
    }
}
