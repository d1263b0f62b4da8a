//! User settings for Passbook
//!
//! Manages preferences for the driver binary: whether the audit trail is
//! written and the interest rate used when none is given.

use serde::{Deserialize, Serialize};

use super::paths::PassbookPaths;
use crate::error::PassbookError;

/// User settings for Passbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether operations are recorded to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Interest rate (percent) for accounts opened without an explicit rate
    #[serde(default = "default_interest_rate")]
    pub default_interest_rate: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

fn default_interest_rate() -> f64 {
    5.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            audit_enabled: default_audit_enabled(),
            default_interest_rate: default_interest_rate(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PassbookPaths) -> Result<Self, PassbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PassbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PassbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PassbookPaths) -> Result<(), PassbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PassbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PassbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
