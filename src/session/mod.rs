//! Budget session
//!
//! The session is the single owner of the rows entered during one run of the
//! presentation layer. It is passed by reference to whatever needs it; there
//! is no global budget state.

pub mod store;

pub use store::EntryStore;

use tracing::debug;

use crate::catalog::catalog;
use crate::error::{FinanthropeError, FinanthropeResult};
use crate::export::json::BudgetDocument;
use crate::models::{Locale, Section};
use crate::reports::BudgetSnapshot;

/// One interactive budgeting session
#[derive(Debug, Clone, Default)]
pub struct BudgetSession {
    locale: Locale,
    store: EntryStore,
}

impl BudgetSession {
    /// Start an empty session in the given locale
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            store: EntryStore::new(),
        }
    }

    /// Start a session from a structured document, adopting its locale
    pub fn from_document(document: &BudgetDocument) -> FinanthropeResult<Self> {
        Ok(Self {
            locale: document.lang,
            store: EntryStore::from_document(document)?,
        })
    }

    /// Current display locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the display locale; rows are untouched
    pub fn set_locale(&mut self, locale: Locale) {
        debug!(%locale, "switched locale");
        self.locale = locale;
    }

    /// Read access to the rows
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Write access to the rows
    pub fn store_mut(&mut self) -> &mut EntryStore {
        &mut self.store
    }

    /// Set a row's category from what the user typed or selected
    ///
    /// Accepts a label in the current locale or a raw category key.
    pub fn select_category(
        &mut self,
        section: Section,
        index: usize,
        input: &str,
    ) -> FinanthropeResult<()> {
        let key = catalog()
            .resolve(self.locale, section, input)
            .ok_or_else(|| FinanthropeError::invalid_category(section, input))?;
        self.store.set_category(section, index, key)
    }

    /// Immutable readout of the current rows and their totals
    pub fn snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot::capture(self.store.sections())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_category_by_label() {
        let mut session = BudgetSession::new(Locale::Fr);
        session.store_mut().add_entry(Section::DailyExpenses);
        session
            .select_category(Section::DailyExpenses, 0, "Nourriture")
            .unwrap();
        assert_eq!(
            session.store().entries(Section::DailyExpenses)[0].category_key(),
            "food"
        );
    }

    #[test]
    fn test_locale_switch_keeps_keys() {
        let mut session = BudgetSession::new(Locale::Fr);
        session.store_mut().add_entry(Section::Income);
        session.set_locale(Locale::En);
        assert_eq!(session.locale(), Locale::En);
        assert_eq!(
            session.store().entries(Section::Income)[0].category_key(),
            "salary"
        );
    }

    #[test]
    fn test_select_unknown_label_fails() {
        let mut session = BudgetSession::new(Locale::En);
        session.store_mut().add_entry(Section::Taxes);
        let err = session
            .select_category(Section::Taxes, 0, "Mortgage")
            .unwrap_err();
        assert!(matches!(err, FinanthropeError::InvalidCategoryKey { .. }));
        assert_eq!(
            session.store().entries(Section::Taxes)[0].category_key(),
            "salary_tax"
        );
    }
}
