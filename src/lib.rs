//! Finanthrope - monthly savings capacity calculator
//!
//! This library provides the core of the Finanthrope budget calculator: six
//! fixed budget sections with localized category types, totals and savings
//! capacity, and exports as a structured document or a printable summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `catalog`: Category keys, their labels and the interface strings
//! - `models`: Sections, entries, locales and money
//! - `session`: The entry store owned by one budgeting session
//! - `reports`: Aggregation into totals and expense breakdown
//! - `export`: JSON, YAML, CSV, PDF and SVG exporters
//! - `display`: Terminal tables
//! - `cli`: Command handlers and the interactive session
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use finanthrope::models::{Locale, Section};
//! use finanthrope::session::BudgetSession;
//!
//! let mut session = BudgetSession::new(Locale::En);
//! let row = session.store_mut().add_entry(Section::Income);
//! session.store_mut().set_amount(Section::Income, row, 2500.0).unwrap();
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.totals().savings_capacity, 2500.0);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod session;

pub use error::{FinanthropeError, FinanthropeResult};
