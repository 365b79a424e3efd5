//! Reports module for Finanthrope
//!
//! Aggregates the section rows into totals, savings capacity and the
//! expense breakdown, and captures immutable snapshots for export.

pub mod snapshot;
pub mod totals;

pub use snapshot::BudgetSnapshot;
pub use totals::{aggregate, ExpenseShare, Totals};
