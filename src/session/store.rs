//! In-memory entry store
//!
//! Owns the rows of all six sections for one session. Every mutation either
//! succeeds completely or leaves the store exactly as it was.

use tracing::debug;

use crate::catalog::catalog;
use crate::error::{FinanthropeError, FinanthropeResult};
use crate::export::json::BudgetDocument;
use crate::models::{validate_amount, Entry, Money, Section, Sections};

/// Ordered rows per section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    sections: Sections,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a structured document
    ///
    /// Every key and amount is validated; the first invalid row aborts the
    /// whole ingest.
    pub fn from_document(document: &BudgetDocument) -> FinanthropeResult<Self> {
        let mut store = Self::new();
        for section in Section::all() {
            for row in document.sections.get(*section) {
                let entry = Entry::from_money(*section, &row.category_key, row.amount)?;
                store.sections.get_mut(*section).push(entry);
            }
        }
        debug!(rows = store.sections.row_count(), "loaded entries from document");
        Ok(store)
    }

    /// All sections
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Rows of one section
    pub fn entries(&self, section: Section) -> &[Entry] {
        self.sections.get(section)
    }

    /// Number of rows in a section
    pub fn len(&self, section: Section) -> usize {
        self.sections.get(section).len()
    }

    /// Whether all sections are empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Append a default row (first catalog key, zero amount)
    ///
    /// Returns the index of the new row.
    pub fn add_entry(&mut self, section: Section) -> usize {
        let rows = self.sections.get_mut(section);
        rows.push(Entry::default_for(section));
        let index = rows.len() - 1;
        debug!(%section, index, "added entry");
        index
    }

    /// Remove the row at `index`
    pub fn remove_entry(&mut self, section: Section, index: usize) -> FinanthropeResult<Entry> {
        self.check_index(section, index)?;
        let removed = self.sections.get_mut(section).remove(index);
        debug!(%section, index, "removed entry");
        Ok(removed)
    }

    /// Replace the category of the row at `index`
    pub fn set_category(
        &mut self,
        section: Section,
        index: usize,
        key: &str,
    ) -> FinanthropeResult<()> {
        self.check_index(section, index)?;
        let key = catalog()
            .canonical_key(section, key)
            .ok_or_else(|| FinanthropeError::invalid_category(section, key))?;
        self.sections.get_mut(section)[index].replace_category(key);
        debug!(%section, index, key, "set category");
        Ok(())
    }

    /// Replace the amount of the row at `index`, keeping full precision
    pub fn set_amount(
        &mut self,
        section: Section,
        index: usize,
        value: f64,
    ) -> FinanthropeResult<()> {
        self.check_index(section, index)?;
        let money = validate_amount(value)?;
        self.sections.get_mut(section)[index].replace_amount(value, money);
        debug!(%section, index, value, "set amount");
        Ok(())
    }

    /// Replace the amount of the row at `index` with an exact cent amount
    pub fn set_money(
        &mut self,
        section: Section,
        index: usize,
        amount: Money,
    ) -> FinanthropeResult<()> {
        self.check_index(section, index)?;
        if amount.is_negative() {
            return Err(FinanthropeError::InvalidAmount(amount.to_string()));
        }
        self.sections.get_mut(section)[index].replace_amount(amount.to_f64(), amount);
        debug!(%section, index, %amount, "set amount");
        Ok(())
    }

    /// Clear every section
    pub fn reset_all(&mut self) {
        self.sections.clear();
        debug!("reset all sections");
    }

    fn check_index(&self, section: Section, index: usize) -> FinanthropeResult<()> {
        let len = self.len(section);
        if index >= len {
            return Err(FinanthropeError::OutOfRange {
                section,
                index,
                len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_income() -> EntryStore {
        let mut store = EntryStore::new();
        let i = store.add_entry(Section::Income);
        store.set_amount(Section::Income, i, 3000.0).unwrap();
        let j = store.add_entry(Section::Income);
        store.set_category(Section::Income, j, "salary_bonus").unwrap();
        store.set_amount(Section::Income, j, 250.0).unwrap();
        store
    }

    #[test]
    fn test_add_entry_defaults() {
        let mut store = EntryStore::new();
        assert_eq!(store.add_entry(Section::Loans), 0);
        assert_eq!(store.add_entry(Section::Loans), 1);

        let entry = store.entries(Section::Loans)[1];
        assert_eq!(entry.category_key(), "car_loan");
        assert_eq!(entry.amount(), 0.0);
        assert_eq!(store.len(Section::Income), 0);
    }

    #[test]
    fn test_remove_entry_collapses_order() {
        let mut store = store_with_income();
        let removed = store.remove_entry(Section::Income, 0).unwrap();
        assert_eq!(removed.category_key(), "salary");

        let rows = store.entries(Section::Income);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_key(), "salary_bonus");
    }

    #[test]
    fn test_remove_out_of_range_leaves_section_unchanged() {
        let mut store = store_with_income();
        let before = store.clone();

        let err = store.remove_entry(Section::Income, 2).unwrap_err();
        assert!(matches!(
            err,
            FinanthropeError::OutOfRange {
                section: Section::Income,
                index: 2,
                len: 2
            }
        ));
        assert_eq!(store, before);

        let err = store.remove_entry(Section::Taxes, 0).unwrap_err();
        assert!(matches!(err, FinanthropeError::OutOfRange { len: 0, .. }));
    }

    #[test]
    fn test_invalid_category_leaves_entry_unchanged() {
        let mut store = store_with_income();
        let err = store.set_category(Section::Income, 0, "food").unwrap_err();
        assert!(matches!(err, FinanthropeError::InvalidCategoryKey { .. }));
        assert_eq!(store.entries(Section::Income)[0].category_key(), "salary");
    }

    #[test]
    fn test_invalid_amount_leaves_entry_unchanged() {
        let mut store = store_with_income();
        for bad in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = store.set_amount(Section::Income, 0, bad).unwrap_err();
            assert!(matches!(err, FinanthropeError::InvalidAmount(_)));
        }
        assert_eq!(store.entries(Section::Income)[0].amount(), 3000.0);
    }

    #[test]
    fn test_set_amount_keeps_precision() {
        let mut store = store_with_income();
        store.set_amount(Section::Income, 0, 1234.5678).unwrap();
        assert_eq!(store.entries(Section::Income)[0].amount(), 1234.5678);
        assert_eq!(store.entries(Section::Income)[0].money().cents(), 123_457);
    }

    #[test]
    fn test_amount_too_large_for_cents_leaves_entry_unchanged() {
        let mut store = store_with_income();
        for huge in [1e17, 1e300, f64::MAX] {
            let err = store.set_amount(Section::Income, 0, huge).unwrap_err();
            assert!(matches!(err, FinanthropeError::InvalidAmount(_)));
        }
        assert_eq!(store.entries(Section::Income)[0].amount(), 3000.0);
    }

    #[test]
    fn test_set_money_accepts_the_full_cent_range() {
        let mut store = store_with_income();
        let max = Money::from_cents(i64::MAX);
        store.set_money(Section::Income, 1, max).unwrap();
        assert_eq!(store.entries(Section::Income)[1].money(), max);

        let err = store
            .set_money(Section::Income, 0, Money::from_cents(-1))
            .unwrap_err();
        assert!(matches!(err, FinanthropeError::InvalidAmount(_)));
        assert_eq!(store.entries(Section::Income)[0].amount(), 3000.0);
    }

    #[test]
    fn test_huge_rows_aggregate_without_panicking() {
        let mut store = EntryStore::new();
        for _ in 0..2 {
            let i = store.add_entry(Section::Taxes);
            store.set_amount(Section::Taxes, i, 5e16).unwrap();
        }
        let totals = crate::reports::aggregate(store.sections());
        assert_eq!(totals.total_expenses, 1e17);
        assert!(totals.expenses_money().unwrap_err().is_export());
        assert!(totals.income_money().is_ok());
    }

    #[test]
    fn test_set_on_missing_row_is_out_of_range() {
        let mut store = EntryStore::new();
        assert!(matches!(
            store.set_amount(Section::Taxes, 0, 10.0),
            Err(FinanthropeError::OutOfRange { .. })
        ));
        assert!(matches!(
            store.set_category(Section::Taxes, 0, "flat_tax"),
            Err(FinanthropeError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_reset_all_is_idempotent() {
        let mut store = store_with_income();
        store.add_entry(Section::Taxes);
        store.reset_all();
        assert!(store.is_empty());
        store.reset_all();
        assert!(store.is_empty());
    }
}
