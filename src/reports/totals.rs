//! Budget aggregation
//!
//! A pure function of the section rows. Zero denominators are handled by
//! policy: the capacity ratio and every expense fraction are defined as zero
//! rather than signalled as errors.

use crate::error::{FinanthropeError, FinanthropeResult};
use crate::models::{Money, Section, Sections};

/// Totals derived from the six sections
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    section_totals: [f64; Section::COUNT],
    /// Total of the income section
    pub total_income: f64,
    /// Sum of the five expense section totals
    pub total_expenses: f64,
    /// `total_income - total_expenses`, possibly negative
    pub savings_capacity: f64,
    /// `savings_capacity / total_income`, or 0 when there is no income
    pub capacity_ratio: f64,
}

/// Aggregate section rows into totals
pub fn aggregate(sections: &Sections) -> Totals {
    let mut section_totals = [0.0; Section::COUNT];
    for (section, rows) in sections.iter() {
        section_totals[section.index()] = rows.iter().map(|e| e.amount()).sum();
    }
    Totals::from_section_totals(section_totals)
}

impl Totals {
    /// Derive the grand totals from per-section totals indexed by `Section::index`
    pub fn from_section_totals(section_totals: [f64; Section::COUNT]) -> Self {
        let total_income = section_totals[Section::Income.index()];
        let total_expenses: f64 = Section::expenses()
            .iter()
            .map(|s| section_totals[s.index()])
            .sum();
        let savings_capacity = total_income - total_expenses;
        let capacity_ratio = if total_income > 0.0 {
            savings_capacity / total_income
        } else {
            0.0
        };

        Self {
            section_totals,
            total_income,
            total_expenses,
            savings_capacity,
            capacity_ratio,
        }
    }

    /// Total of one section
    pub fn section(&self, section: Section) -> f64 {
        self.section_totals[section.index()]
    }

    /// Whether the savings capacity is zero or positive
    pub fn is_positive(&self) -> bool {
        self.savings_capacity >= 0.0
    }

    /// Capacity ratio as a percentage, e.g. `86.7`
    pub fn capacity_percent(&self) -> f64 {
        self.capacity_ratio * 100.0
    }

    /// Share of each expense section in total expenses, in section order
    pub fn breakdown(&self) -> Vec<ExpenseShare> {
        Section::expenses()
            .iter()
            .map(|section| {
                let total = self.section(*section);
                let fraction = if self.total_expenses > 0.0 {
                    total / self.total_expenses
                } else {
                    0.0
                };
                ExpenseShare {
                    section: *section,
                    total,
                    fraction,
                }
            })
            .collect()
    }

    /// Total income rounded to the cent
    pub fn income_money(&self) -> FinanthropeResult<Money> {
        to_money(self.total_income)
    }

    /// Total expenses rounded to the cent
    pub fn expenses_money(&self) -> FinanthropeResult<Money> {
        to_money(self.total_expenses)
    }

    /// Savings capacity rounded to the cent
    pub fn capacity_money(&self) -> FinanthropeResult<Money> {
        to_money(self.savings_capacity)
    }

    /// Section total rounded to the cent
    pub fn section_money(&self, section: Section) -> FinanthropeResult<Money> {
        to_money(self.section(section))
    }
}

fn to_money(value: f64) -> FinanthropeResult<Money> {
    Money::from_f64(value).ok_or_else(|| {
        FinanthropeError::Export(format!("Total {} is too large to express in cents", value))
    })
}

/// One expense section's part of total expenses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseShare {
    pub section: Section,
    pub total: f64,
    /// `total / total_expenses`, or 0 when there are no expenses
    pub fraction: f64,
}

impl ExpenseShare {
    /// Rounded integer percentage of this share alone
    ///
    /// Shares are rounded independently, so the percentages of a breakdown
    /// do not necessarily add up to 100.
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round().max(0.0) as u32
    }

    /// Fill level for a progress bar, capped at 1
    pub fn progress(&self) -> f64 {
        self.fraction.min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::EntryStore;

    fn push(store: &mut EntryStore, section: Section, key: &str, amount: f64) {
        let i = store.add_entry(section);
        store.set_category(section, i, key).unwrap();
        store.set_amount(section, i, amount).unwrap();
    }

    #[test]
    fn test_empty_sections() {
        let totals = aggregate(&Sections::new());
        assert_eq!(totals.total_income, 0.0);
        assert_eq!(totals.total_expenses, 0.0);
        assert_eq!(totals.savings_capacity, 0.0);
        assert_eq!(totals.capacity_ratio, 0.0);
        assert!(totals.breakdown().iter().all(|s| s.fraction == 0.0));
    }

    #[test]
    fn test_salary_and_food_scenario() {
        let mut store = EntryStore::new();
        push(&mut store, Section::Income, "salary", 3000.0);
        push(&mut store, Section::DailyExpenses, "food", 400.0);

        let totals = aggregate(store.sections());
        assert_eq!(totals.total_income, 3000.0);
        assert_eq!(totals.total_expenses, 400.0);
        assert_eq!(totals.savings_capacity, 2600.0);
        assert!((totals.capacity_ratio - 0.8667).abs() < 1e-4);

        let breakdown = totals.breakdown();
        assert_eq!(breakdown.len(), 5);
        assert_eq!(breakdown[0].section, Section::DailyExpenses);
        assert_eq!(breakdown[0].percent(), 100);
        assert!(breakdown[1..].iter().all(|s| s.percent() == 0));
    }

    #[test]
    fn test_negative_capacity_is_not_clamped() {
        let mut store = EntryStore::new();
        push(&mut store, Section::Income, "salary", 1000.0);
        push(&mut store, Section::Loans, "mortgage", 900.0);
        push(&mut store, Section::Taxes, "salary_tax", 300.0);

        let totals = aggregate(store.sections());
        assert_eq!(totals.savings_capacity, -200.0);
        assert_eq!(
            totals.savings_capacity,
            totals.total_income - totals.total_expenses
        );
        assert!(!totals.is_positive());
        assert!((totals.capacity_ratio + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_no_income_gives_zero_ratio() {
        let mut store = EntryStore::new();
        push(&mut store, Section::FamilyExpenses, "canteen", 120.0);

        let totals = aggregate(store.sections());
        assert_eq!(totals.total_income, 0.0);
        assert_eq!(totals.capacity_ratio, 0.0);
        assert_eq!(totals.savings_capacity, -120.0);
    }

    #[test]
    fn test_expenses_equal_sum_of_expense_sections() {
        let mut store = EntryStore::new();
        let amounts = [12.5, 80.0, 3.33, 410.1, 0.0, 99.99, 17.25];
        for (i, amount) in amounts.iter().enumerate() {
            let section = Section::all()[i % Section::COUNT];
            push(&mut store, section, section.default_key(), *amount);
        }
        store.remove_entry(Section::Income, 0).unwrap();
        store.set_amount(Section::DailyExpenses, 0, 55.5).unwrap();

        let totals = aggregate(store.sections());
        let independent: f64 = Section::expenses()
            .iter()
            .flat_map(|s| store.entries(*s))
            .map(|e| e.amount())
            .sum();
        assert!((totals.total_expenses - independent).abs() < 1e-9);
        assert_eq!(totals.total_income, 17.25);
    }

    #[test]
    fn test_percentages_are_rounded_independently() {
        let mut store = EntryStore::new();
        push(&mut store, Section::DailyExpenses, "food", 1.0);
        push(&mut store, Section::AdminExpenses, "bank_fees", 1.0);
        push(&mut store, Section::FamilyExpenses, "canteen", 1.0);

        let totals = aggregate(store.sections());
        let percents: Vec<u32> = totals.breakdown().iter().map(|s| s.percent()).collect();
        assert_eq!(percents, vec![33, 33, 33, 0, 0]);
        assert_eq!(percents.iter().sum::<u32>(), 99);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let mut store = EntryStore::new();
        push(&mut store, Section::Income, "salary", 0.1);
        push(&mut store, Section::Income, "salary_bonus", 0.2);
        push(&mut store, Section::Taxes, "flat_tax", 0.3);

        let a = aggregate(store.sections());
        let b = aggregate(&store.sections().clone());
        assert_eq!(a.total_income.to_bits(), b.total_income.to_bits());
        assert_eq!(a.savings_capacity.to_bits(), b.savings_capacity.to_bits());
    }

    #[test]
    fn test_money_accessors_round() {
        let mut store = EntryStore::new();
        push(&mut store, Section::Income, "salary", 0.1);
        push(&mut store, Section::Income, "salary_bonus", 0.2);
        let totals = aggregate(store.sections());
        assert_eq!(totals.income_money().unwrap().cents(), 30);
        assert_eq!(totals.section_money(Section::Income).unwrap().cents(), 30);
    }

    #[test]
    fn test_money_accessors_reject_totals_beyond_cents() {
        let mut section_totals = [0.0; Section::COUNT];
        section_totals[Section::Income.index()] = 1e17;
        let totals = Totals::from_section_totals(section_totals);

        let err = totals.income_money().unwrap_err();
        assert!(err.is_export());
        assert!(totals.capacity_money().is_err());
        assert_eq!(totals.expenses_money().unwrap(), Money::zero());
    }
}
