//! CSV Export functionality
//!
//! Exports the transaction log to CSV format.

use std::io::Write;

use crate::error::{PassbookError, PassbookResult};
use crate::models::Account;

/// Export the transaction log as `Index,Description,Amount` rows
///
/// Indexes start at 1 and follow insertion order. Amounts keep their sign
/// and are written with two decimals.
pub fn export_transactions_csv<W: Write>(account: &Account, writer: W) -> PassbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Index", "Description", "Amount"])
        .map_err(|e| PassbookError::Export(e.to_string()))?;

    for (i, txn) in account.transactions().iter().enumerate() {
        csv_writer
            .write_record([
                (i + 1).to_string(),
                txn.description.clone(),
                format!("{:.2}", txn.amount),
            ])
            .map_err(|e| PassbookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PassbookError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_export() {
        let mut account = Account::new(1001, "Alice", 1000.0, 5.0);
        account.deposit(200.0);
        account.withdraw(300.0).unwrap();

        let mut output = Vec::new();
        export_transactions_csv(&account, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Index,Description,Amount\n1,Deposit,200.00\n2,Withdrawal,-300.00\n"
        );
    }

    #[test]
    fn test_csv_export_empty_log() {
        let account = Account::new(1, "Empty", 0.0, 0.0);
        let mut output = Vec::new();
        export_transactions_csv(&account, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Index,Description,Amount\n");
    }
}
