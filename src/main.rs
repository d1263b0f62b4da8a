use anyhow::Result;
use clap::{Parser, Subcommand};

use passbook::cli::{
    handle_audit_command, handle_demo_command, handle_simulate_command, SimulateArgs,
};
use passbook::config::{PassbookPaths, Settings};

#[derive(Parser)]
#[command(
    name = "passbook",
    version,
    about = "Single-account passbook with interest accrual",
    long_about = "Passbook opens a bank account, applies deposits, withdrawals and \
                  interest accrual, and prints the transaction history and account \
                  summary. Each run starts from a fresh account."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open an account and apply a sequence of steps
    #[command(alias = "sim")]
    Simulate(SimulateArgs),

    /// Run the reference scenario
    Demo {
        /// Skip writing the audit log
        #[arg(long, env = "PASSBOOK_NO_AUDIT")]
        no_audit: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PassbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Simulate(args)) => {
            handle_simulate_command(&paths, &settings, args)?;
        }
        Some(Commands::Demo { no_audit }) => {
            handle_demo_command(&paths, &settings, no_audit)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&paths, limit)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Passbook Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled:         {}", settings.audit_enabled);
            println!("  Default interest rate: {:.2}%", settings.default_interest_rate);
        }
        None => {
            println!("Passbook - single-account interest simulator");
            println!();
            println!("Run 'passbook --help' for usage information.");
            println!("Run 'passbook demo' to see a sample account.");
        }
    }

    Ok(())
}
