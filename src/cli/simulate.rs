//! Simulation commands
//!
//! Opens an account, applies a sequence of steps given on the command line
//! and prints the requested reports.

use clap::Args;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::audit::AuditLogger;
use crate::config::{PassbookPaths, Settings};
use crate::error::{PassbookError, PassbookResult};
use crate::export::{export_json, export_transactions_csv, export_yaml};
use crate::models::{format_currency, Account};
use crate::services::AccountService;

/// A single operation applied during a simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Deposit(f64),
    Withdraw(f64),
    Age(f64),
    SimpleInterest,
    CompoundInterest,
    History,
    Summary,
    ExportJson,
    ExportYaml,
    ExportCsv,
}

impl FromStr for Step {
    type Err = PassbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((name, value)) = s.split_once('=') {
            let amount: f64 = value.trim().parse().map_err(|_| {
                PassbookError::Validation(format!("Invalid number in step '{}'", s))
            })?;

            return match name.trim().to_lowercase().as_str() {
                "deposit" => Ok(Self::Deposit(amount)),
                "withdraw" => Ok(Self::Withdraw(amount)),
                "age" => Ok(Self::Age(amount)),
                other => Err(PassbookError::Validation(format!(
                    "Unknown step '{}'. Valued steps: deposit=, withdraw=, age=",
                    other
                ))),
            };
        }

        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::SimpleInterest),
            "compound" => Ok(Self::CompoundInterest),
            "history" => Ok(Self::History),
            "summary" => Ok(Self::Summary),
            "export-json" => Ok(Self::ExportJson),
            "export-yaml" => Ok(Self::ExportYaml),
            "export-csv" => Ok(Self::ExportCsv),
            _ => Err(PassbookError::Validation(format!(
                "Unknown step '{}'. Valid steps: deposit=<amt>, withdraw=<amt>, age=<years>, \
                 simple, compound, history, summary, export-json, export-yaml, export-csv",
                s
            ))),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit(amount) => write!(f, "deposit={}", amount),
            Self::Withdraw(amount) => write!(f, "withdraw={}", amount),
            Self::Age(years) => write!(f, "age={}", years),
            Self::SimpleInterest => write!(f, "simple"),
            Self::CompoundInterest => write!(f, "compound"),
            Self::History => write!(f, "history"),
            Self::Summary => write!(f, "summary"),
            Self::ExportJson => write!(f, "export-json"),
            Self::ExportYaml => write!(f, "export-yaml"),
            Self::ExportCsv => write!(f, "export-csv"),
        }
    }
}

/// Arguments for the `simulate` command
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Account number
    #[arg(allow_negative_numbers = true)]
    pub number: i64,

    /// Account holder name
    pub holder: String,

    /// Opening balance
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub balance: f64,

    /// Interest rate in percent (defaults to the configured rate)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Skip writing the audit log
    #[arg(long, env = "PASSBOOK_NO_AUDIT")]
    pub no_audit: bool,

    /// Steps to apply in order, e.g. deposit=200 withdraw=50 age=1 simple summary
    pub steps: Vec<Step>,
}

/// The reference scenario run by `passbook demo`
pub fn demo_steps() -> Vec<Step> {
    vec![
        Step::Deposit(200.0),
        Step::Withdraw(300.0),
        Step::Withdraw(10000.0),
        Step::Age(2.0),
        Step::SimpleInterest,
        Step::History,
        Step::Summary,
    ]
}

/// Apply steps to the service, writing all output to `out`
///
/// Refused withdrawals are reported and the remaining steps still run.
pub fn run_steps<W: Write>(
    service: &mut AccountService,
    steps: &[Step],
    out: &mut W,
) -> PassbookResult<()> {
    for step in steps {
        match *step {
            Step::Deposit(amount) => {
                if service.deposit(amount)? {
                    writeln!(out, "Deposited {}", format_currency(amount))?;
                }
            }
            Step::Withdraw(amount) => match service.withdraw(amount) {
                Ok(()) => writeln!(out, "Withdrew {}", format_currency(amount))?,
                Err(err) if err.is_invalid_amount() || err.is_insufficient_balance() => {
                    writeln!(out, "Withdrawal failed: {}", err)?
                }
                Err(err) => return Err(err),
            },
            Step::Age(years) => service.advance_age(years)?,
            Step::SimpleInterest => {
                let interest = service.apply_simple_interest()?;
                writeln!(out, "Simple interest applied: {}", format_currency(interest))?;
            }
            Step::CompoundInterest => {
                let interest = service.apply_compound_interest()?;
                writeln!(out, "Compound interest applied: {}", format_currency(interest))?;
            }
            Step::History => service.account().write_transaction_history(out)?,
            Step::Summary => service.account().write_summary(out)?,
            Step::ExportJson => export_json(service.account(), out)?,
            Step::ExportYaml => export_yaml(service.account(), out)?,
            Step::ExportCsv => export_transactions_csv(service.account(), &mut *out)?,
        }
    }

    Ok(())
}

fn open_service(
    account: Account,
    paths: &PassbookPaths,
    settings: &Settings,
    no_audit: bool,
) -> PassbookResult<AccountService> {
    if settings.audit_enabled && !no_audit {
        paths.ensure_directories()?;
        AccountService::with_audit(account, AuditLogger::new(paths.audit_log()))
    } else {
        Ok(AccountService::new(account))
    }
}

/// Handle the `simulate` command
pub fn handle_simulate_command(
    paths: &PassbookPaths,
    settings: &Settings,
    args: SimulateArgs,
) -> PassbookResult<()> {
    let rate = args.rate.unwrap_or(settings.default_interest_rate);
    let account = Account::new(args.number, args.holder, args.balance, rate);
    let mut service = open_service(account, paths, settings, args.no_audit)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_steps(&mut service, &args.steps, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Handle the `demo` command
pub fn handle_demo_command(
    paths: &PassbookPaths,
    settings: &Settings,
    no_audit: bool,
) -> PassbookResult<()> {
    let account = Account::new(1001, "Alice", 1000.0, 5.0);
    let mut service = open_service(account, paths, settings, no_audit)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_steps(&mut service, &demo_steps(), &mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(account: Account, steps: &[Step]) -> (AccountService, String) {
        let mut service = AccountService::new(account);
        let mut out = Vec::new();
        run_steps(&mut service, steps, &mut out).unwrap();
        (service, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!("deposit=200".parse::<Step>().unwrap(), Step::Deposit(200.0));
        assert_eq!("withdraw=12.5".parse::<Step>().unwrap(), Step::Withdraw(12.5));
        assert_eq!("age=-1".parse::<Step>().unwrap(), Step::Age(-1.0));
        assert_eq!("Deposit = 5".parse::<Step>().unwrap(), Step::Deposit(5.0));
        assert_eq!("simple".parse::<Step>().unwrap(), Step::SimpleInterest);
        assert_eq!("COMPOUND".parse::<Step>().unwrap(), Step::CompoundInterest);
        assert_eq!("export-csv".parse::<Step>().unwrap(), Step::ExportCsv);
    }

    #[test]
    fn test_parse_invalid_steps() {
        assert!("deposit=abc".parse::<Step>().is_err());
        assert!("transfer=10".parse::<Step>().is_err());
        assert!("explode".parse::<Step>().is_err());
    }

    #[test]
    fn test_step_display_parses_back() {
        for step in demo_steps() {
            assert_eq!(step.to_string().parse::<Step>().unwrap(), step);
        }
    }

    #[test]
    fn test_demo_scenario() {
        let (service, output) = run(Account::new(1001, "Alice", 1000.0, 5.0), &demo_steps());

        let account = service.account();
        // 900 after the withdrawals, then 900 * 5% * 2 years
        assert!((account.balance() - 990.0).abs() < 1e-9);
        assert!((account.accumulated_interest() - 90.0).abs() < 1e-9);
        assert_eq!(account.transactions().len(), 2);

        assert!(output.contains("Deposited $200.00\n"));
        assert!(output.contains("Withdrew $300.00\n"));
        assert!(output.contains(
            "Withdrawal failed: Insufficient balance: requested $10000.00, available $900.00\n"
        ));
        assert!(output.contains("Simple interest applied: $90.00\n"));
        assert!(output.contains("Amount: $-300.00\n"));
        assert!(output.contains("Balance: $990.00\n"));
        assert!(output.contains("Age of Account: 2.00 years\n"));
    }

    #[test]
    fn test_ignored_deposit_is_silent() {
        let (service, output) = run(Account::new(1, "Quiet", 10.0, 0.0), &[Step::Deposit(-5.0)]);
        assert!(output.is_empty());
        assert_eq!(service.account().balance(), 10.0);
    }

    #[test]
    fn test_invalid_withdrawal_continues() {
        let (service, output) = run(
            Account::new(1, "Zed", 100.0, 0.0),
            &[Step::Withdraw(0.0), Step::Deposit(1.0)],
        );
        assert!(output.starts_with("Withdrawal failed: Invalid withdrawal amount"));
        assert_eq!(service.account().balance(), 101.0);
    }

    #[test]
    fn test_compound_step() {
        let (service, output) = run(
            Account::new(3, "Carl", 1000.0, 10.0),
            &[Step::Age(1.0), Step::CompoundInterest],
        );
        assert_eq!(output, "Compound interest applied: $100.00\n");
        assert!((service.account().balance() - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn test_export_steps() {
        let (_, output) = run(
            Account::new(4, "Dee", 10.0, 1.0),
            &[Step::Deposit(5.0), Step::ExportCsv, Step::ExportJson],
        );
        assert!(output.contains("Index,Description,Amount\n1,Deposit,5.00\n"));
        assert!(output.contains("\"holder_name\": \"Dee\""));
    }
}
