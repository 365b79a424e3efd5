//! Path management for Finanthrope
//!
//! ## Path Resolution Order
//!
//! 1. `--config-dir` / `FINANTHROPE_CONFIG_DIR` (resolved by the CLI and
//!    passed to [`FinanthropePaths::with_base_dir`])
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/finanthrope` on Linux, `%APPDATA%\finanthrope` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{FinanthropeError, FinanthropeResult};

/// Manages all paths used by Finanthrope
#[derive(Debug, Clone)]
pub struct FinanthropePaths {
    /// Base directory for settings and default exports
    base_dir: PathBuf,
}

impl FinanthropePaths {
    /// Resolve the platform config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> FinanthropeResult<Self> {
        let dirs = ProjectDirs::from("", "", "finanthrope").ok_or_else(|| {
            FinanthropeError::Config("Could not determine the home directory".into())
        })?;

        Ok(Self {
            base_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Use a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Explicit directory if given, platform default otherwise
    pub fn resolve(custom: Option<&Path>) -> FinanthropeResult<Self> {
        match custom {
            Some(dir) => Ok(Self::with_base_dir(dir.to_path_buf())),
            None => Self::new(),
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default directory for export artifacts
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> FinanthropeResult<()> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            FinanthropeError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Whether a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
