//! Configuration module for Finanthrope
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinanthropePaths;
pub use settings::Settings;
