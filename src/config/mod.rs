//! Configuration module for Passbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PassbookPaths;
pub use settings::Settings;
