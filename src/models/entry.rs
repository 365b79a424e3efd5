//! Budget rows and the per-section row lists
//!
//! An entry has no identity beyond its position in its section. Construction
//! is validated against the category catalog so that an `Entry` value always
//! carries a key that belongs to its section and an amount whose cent
//! rounding is representable.

use crate::catalog::catalog;
use crate::error::{FinanthropeError, FinanthropeResult};

use super::money::Money;
use super::section::Section;

/// A single itemized row: a category key and a non-negative amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    category_key: &'static str,
    amount: f64,
    money: Money,
}

impl Entry {
    /// Create a validated entry
    ///
    /// Fails with `InvalidCategoryKey` when `key` is not in the section's
    /// catalog and with `InvalidAmount` when `amount` is negative, not finite
    /// or too large for cents.
    pub fn new(section: Section, key: &str, amount: f64) -> FinanthropeResult<Self> {
        let category_key = catalog()
            .canonical_key(section, key)
            .ok_or_else(|| FinanthropeError::invalid_category(section, key))?;
        let money = validate_amount(amount)?;
        Ok(Self {
            category_key,
            amount,
            money,
        })
    }

    /// Create a validated entry from an amount already in cents
    pub fn from_money(section: Section, key: &str, amount: Money) -> FinanthropeResult<Self> {
        let category_key = catalog()
            .canonical_key(section, key)
            .ok_or_else(|| FinanthropeError::invalid_category(section, key))?;
        if amount.is_negative() {
            return Err(FinanthropeError::InvalidAmount(amount.to_string()));
        }
        Ok(Self {
            category_key,
            amount: amount.to_f64(),
            money: amount,
        })
    }

    /// The default row for a section: first catalog key, zero amount
    pub fn default_for(section: Section) -> Self {
        Self {
            category_key: section.default_key(),
            amount: 0.0,
            money: Money::zero(),
        }
    }

    /// The stable category key
    pub fn category_key(&self) -> &'static str {
        self.category_key
    }

    /// The stored amount, full precision
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The amount rounded to the cent for display and export
    pub fn money(&self) -> Money {
        self.money
    }

    pub(crate) fn replace_category(&mut self, key: &'static str) {
        self.category_key = key;
    }

    pub(crate) fn replace_amount(&mut self, amount: f64, money: Money) {
        self.amount = amount;
        self.money = money;
    }
}

/// Check that an amount is finite, non-negative and fits in cents
///
/// Returns the amount rounded half away from zero to the cent.
pub fn validate_amount(amount: f64) -> FinanthropeResult<Money> {
    if amount < 0.0 {
        return Err(FinanthropeError::invalid_amount(amount));
    }
    Money::from_f64(amount).ok_or_else(|| FinanthropeError::invalid_amount(amount))
}

/// The ordered rows of all six sections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    rows: [Vec<Entry>; Section::COUNT],
}

impl Sections {
    /// Create six empty sections
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of one section in insertion order
    pub fn get(&self, section: Section) -> &[Entry] {
        &self.rows[section.index()]
    }

    pub(crate) fn get_mut(&mut self, section: Section) -> &mut Vec<Entry> {
        &mut self.rows[section.index()]
    }

    /// Iterate over every section with its rows, in display order
    pub fn iter(&self) -> impl Iterator<Item = (Section, &[Entry])> + '_ {
        Section::all()
            .iter()
            .map(move |section| (*section, self.get(*section)))
    }

    /// Total number of rows across all sections
    pub fn row_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Whether every section is empty
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    pub(crate) fn clear(&mut self) {
        for rows in self.rows.iter_mut() {
            rows.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_validates_key() {
        let entry = Entry::new(Section::Income, "salary", 3000.0).unwrap();
        assert_eq!(entry.category_key(), "salary");
        assert_eq!(entry.amount(), 3000.0);

        let err = Entry::new(Section::Income, "food", 10.0).unwrap_err();
        assert!(matches!(err, FinanthropeError::InvalidCategoryKey { .. }));
    }

    #[test]
    fn test_new_entry_validates_amount() {
        assert!(matches!(
            Entry::new(Section::Taxes, "flat_tax", -1.0),
            Err(FinanthropeError::InvalidAmount(_))
        ));
        assert!(matches!(
            Entry::new(Section::Taxes, "flat_tax", f64::NAN),
            Err(FinanthropeError::InvalidAmount(_))
        ));
        assert!(Entry::new(Section::Taxes, "flat_tax", 0.0).is_ok());
    }

    #[test]
    fn test_amount_too_large_for_cents_is_rejected() {
        for amount in [1e17, 9.3e16, f64::MAX] {
            assert!(matches!(
                Entry::new(Section::Income, "salary", amount),
                Err(FinanthropeError::InvalidAmount(_))
            ));
        }
        let entry = Entry::new(Section::Income, "salary", 9e16).unwrap();
        assert_eq!(entry.money().cents(), 9_000_000_000_000_000_000);
    }

    #[test]
    fn test_from_money_keeps_cents_exactly() {
        let amount = Money::from_cents(i64::MAX);
        let entry = Entry::from_money(Section::Income, "salary", amount).unwrap();
        assert_eq!(entry.money(), amount);

        assert!(matches!(
            Entry::from_money(Section::Income, "salary", Money::from_cents(-1)),
            Err(FinanthropeError::InvalidAmount(_))
        ));
        assert!(matches!(
            Entry::from_money(Section::Income, "food", Money::zero()),
            Err(FinanthropeError::InvalidCategoryKey { .. })
        ));
    }

    #[test]
    fn test_default_entry() {
        let entry = Entry::default_for(Section::DailyExpenses);
        assert_eq!(entry.category_key(), "subscription");
        assert_eq!(entry.amount(), 0.0);
    }

    #[test]
    fn test_money_rounds_for_display_only() {
        let entry = Entry::new(Section::Loans, "mortgage", 812.375).unwrap();
        assert_eq!(entry.amount(), 812.375);
        assert_eq!(entry.money().cents(), 81_238);

        let tiny = Entry::new(Section::Taxes, "flat_tax", 0.004).unwrap();
        assert_eq!(tiny.amount(), 0.004);
        assert_eq!(tiny.money(), Money::zero());
    }

    #[test]
    fn test_sections_iter_order() {
        let sections = Sections::new();
        let order: Vec<Section> = sections.iter().map(|(s, _)| s).collect();
        assert_eq!(order, Section::all().to_vec());
        assert!(sections.is_empty());
        assert_eq!(sections.row_count(), 0);
    }
}
