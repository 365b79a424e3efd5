//! Core data models for Finanthrope
//!
//! This module contains the data structures that represent the budgeting
//! domain: sections, rows, locales and the money boundary type.

pub mod entry;
pub mod locale;
pub mod money;
pub mod section;

pub use entry::{validate_amount, Entry, Sections};
pub use locale::Locale;
pub use money::{Money, MoneyParseError};
pub use section::Section;
