//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget session and exporters.

pub mod export;
pub mod shell;
pub mod summary;

pub use export::{handle_export_command, load_document, write_artifact, FormatArg};
pub use shell::{handle_shell_command, parse_line, Flow, Shell, ShellCommand};
pub use summary::{handle_categories_command, handle_summary_command};
