//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the account service. Every invocation works on
//! a freshly opened account; nothing about the account outlives the process.

pub mod audit;
pub mod simulate;

pub use audit::handle_audit_command;
pub use simulate::{
    demo_steps, handle_demo_command, handle_simulate_command, run_steps, SimulateArgs, Step,
};
