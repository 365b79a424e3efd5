//! Budget snapshot
//!
//! A point-in-time copy of the rows together with their totals. Exporters
//! only ever see snapshots, never the live store.

use crate::models::{Section, Sections};

use super::totals::{aggregate, Totals};

/// Immutable rows + totals
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSnapshot {
    sections: Sections,
    totals: Totals,
}

impl BudgetSnapshot {
    /// Copy the rows and aggregate them
    pub fn capture(sections: &Sections) -> Self {
        let sections = sections.clone();
        let totals = aggregate(&sections);
        Self { sections, totals }
    }

    /// The captured rows
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// The totals of the captured rows
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Whether the expense breakdown chart has anything to show
    pub fn has_expenses(&self) -> bool {
        self.totals.total_expenses > 0.0
    }

    /// Number of rows in a section
    pub fn row_count(&self, section: Section) -> usize {
        self.sections.get(section).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::EntryStore;

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let mut store = EntryStore::new();
        store.add_entry(Section::Income);
        store.set_amount(Section::Income, 0, 100.0).unwrap();

        let snapshot = BudgetSnapshot::capture(store.sections());
        store.set_amount(Section::Income, 0, 999.0).unwrap();
        store.add_entry(Section::Taxes);

        assert_eq!(snapshot.totals().total_income, 100.0);
        assert_eq!(snapshot.row_count(Section::Taxes), 0);
        assert!(!snapshot.has_expenses());
    }
}
