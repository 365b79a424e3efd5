//! Display formatting for terminal output
//!
//! Provides utilities for formatting budgets for terminal display,
//! including tables, totals and breakdown bars.

pub mod categories;
pub mod format;
pub mod summary;

pub use categories::format_categories;
pub use summary::{format_breakdown, format_section, format_summary, format_totals};
