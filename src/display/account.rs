//! Account display formatting
//!
//! Formats the identity, balance and interest details of an account.

use crate::models::{format_currency, format_rate, format_years, Account};

/// Format the account summary report
pub fn format_account_summary(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account Number: {}\n", account.account_number()));
    output.push_str(&format!("Account Holder Name: {}\n", account.holder_name()));
    output.push_str(&format!("Balance: {}\n", format_currency(account.balance())));
    output.push_str(&format!(
        "Interest Rate: {}\n",
        format_rate(account.interest_rate())
    ));
    output.push_str(&format!(
        "Interest Value: {}\n",
        format_currency(account.accumulated_interest())
    ));
    output.push_str(&format!(
        "Age of Account: {}\n",
        format_years(account.age_in_years())
    ));

    output
}
