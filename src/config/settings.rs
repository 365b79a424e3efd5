//! User settings for Finanthrope
//!
//! Preferences that outlive a session: interface language, currency symbol
//! and where exports land.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::FinanthropePaths;
use crate::error::{FinanthropeError, FinanthropeResult};
use crate::export::ExportOptions;
use crate::models::Locale;

/// User settings for Finanthrope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Language of new sessions
    #[serde(default)]
    pub locale: Locale,

    /// Currency symbol printed after amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Where exports go when no path is given (defaults to the config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Indent JSON exports
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_pretty_json() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            currency_symbol: default_currency(),
            export_dir: None,
            pretty_json: default_pretty_json(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinanthropePaths) -> FinanthropeResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanthropeError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanthropeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinanthropePaths) -> FinanthropeResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanthropeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinanthropeError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Export directory, falling back to the one under the config dir
    pub fn export_dir(&self, paths: &FinanthropePaths) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| paths.export_dir())
    }

    /// Export options derived from these settings
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            pretty_json: self.pretty_json,
            currency_symbol: self.currency_symbol.clone(),
            created_at: Some(chrono::Utc::now()),
        }
    }
}
