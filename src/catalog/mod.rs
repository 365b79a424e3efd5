//! Category catalog
//!
//! Every section has a fixed, ordered set of category keys. Keys are stable
//! English identifiers; each key has one display label per locale. The
//! catalog is built once per process into two hash tables per locale so that
//! both key→label (display) and label→key (re-ingesting a user selection)
//! are constant-time lookups.

pub mod strings;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{Locale, Section};

pub use strings::{strings, Strings};

/// A category key with its labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    /// Stable identifier written to documents
    pub key: &'static str,
    /// French label
    pub fr: &'static str,
    /// English label
    pub en: &'static str,
}

impl CategoryDef {
    const fn new(key: &'static str, fr: &'static str, en: &'static str) -> Self {
        Self { key, fr, en }
    }

    /// The label for a locale
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Fr => self.fr,
            Locale::En => self.en,
        }
    }
}

const INCOME: &[CategoryDef] = &[
    CategoryDef::new("salary", "Salaire", "Salary"),
    CategoryDef::new("salary_bonus", "Prime du salaire", "Salary bonus"),
    CategoryDef::new("activity_bonus", "Prime d'activité", "Activity bonus"),
    CategoryDef::new("housing_allowance", "Allocation logement", "Housing allowance"),
    CategoryDef::new("property_income", "Revenu immobilier", "Property income"),
    CategoryDef::new("side_activity", "Activité secondaire net", "Side activity net"),
];

const DAILY_EXPENSES: &[CategoryDef] = &[
    CategoryDef::new("subscription", "Abonnements", "Subscriptions"),
    CategoryDef::new("food", "Nourriture", "Food"),
    CategoryDef::new("phone", "Téléphone", "Phone"),
    CategoryDef::new("leisure", "Loisirs", "Leisure"),
    CategoryDef::new("travel", "Voyages", "Travel"),
];

const ADMIN_EXPENSES: &[CategoryDef] = &[
    CategoryDef::new("home_insurance", "Assurance habitation", "Home insurance"),
    CategoryDef::new("car_insurance", "Assurance auto", "Car insurance"),
    CategoryDef::new("life_insurance", "Assurance décès", "Life insurance"),
    CategoryDef::new("health_cover", "Mutuelle", "Health cover"),
    CategoryDef::new("bank_fees", "Frais bancaires", "Bank fees"),
];

const FAMILY_EXPENSES: &[CategoryDef] = &[
    CategoryDef::new("school_fees", "Frais scolaires", "School fees"),
    CategoryDef::new("canteen", "Cantine", "Canteen"),
    CategoryDef::new("sports", "Sport", "Sports"),
    CategoryDef::new("kids_leisure", "Loisirs enfants", "Kids leisure"),
];

const LOANS: &[CategoryDef] = &[
    CategoryDef::new("car_loan", "Crédit auto", "Car loan"),
    CategoryDef::new("mortgage", "Crédit immobilier", "Mortgage"),
    CategoryDef::new("renovation_loan", "Crédit travaux", "Renovation loan"),
    CategoryDef::new("consumer_loan", "Crédit consommation", "Consumer loan"),
    CategoryDef::new("student_loan", "Prêt étudiant", "Student loan"),
];

const TAXES: &[CategoryDef] = &[
    CategoryDef::new("salary_tax", "Impôts sur le salaire", "Salary tax"),
    CategoryDef::new("property_tax", "Impôts fonciers", "Property tax"),
    CategoryDef::new("flat_tax", "Impôts PFU", "Flat tax"),
];

impl Section {
    /// The ordered category definitions of this section
    pub fn categories(&self) -> &'static [CategoryDef] {
        match self {
            Self::Income => INCOME,
            Self::DailyExpenses => DAILY_EXPENSES,
            Self::AdminExpenses => ADMIN_EXPENSES,
            Self::FamilyExpenses => FAMILY_EXPENSES,
            Self::Loans => LOANS,
            Self::Taxes => TAXES,
        }
    }

    /// The key given to new rows: the first key of the catalog
    pub fn default_key(&self) -> &'static str {
        self.categories()[0].key
    }
}

/// Lookup tables for one locale, indexed by section
#[derive(Debug, Default)]
struct LocaleTable {
    by_key: [HashMap<&'static str, &'static str>; Section::COUNT],
    by_label: [HashMap<&'static str, &'static str>; Section::COUNT],
    by_folded_label: [HashMap<String, &'static str>; Section::COUNT],
}

impl LocaleTable {
    fn build(locale: Locale) -> Self {
        let mut table = Self::default();
        for section in Section::all() {
            let i = section.index();
            for def in section.categories() {
                let label = def.label(locale);
                table.by_key[i].insert(def.key, label);
                table.by_label[i].insert(label, def.key);
                table.by_folded_label[i].insert(label.to_lowercase(), def.key);
            }
        }
        table
    }
}

/// The process-wide category catalog
#[derive(Debug)]
pub struct CategoryCatalog {
    fr: LocaleTable,
    en: LocaleTable,
}

impl CategoryCatalog {
    fn build() -> Self {
        Self {
            fr: LocaleTable::build(Locale::Fr),
            en: LocaleTable::build(Locale::En),
        }
    }

    fn table(&self, locale: Locale) -> &LocaleTable {
        match locale {
            Locale::Fr => &self.fr,
            Locale::En => &self.en,
        }
    }

    /// Whether `key` belongs to the section's catalog
    pub fn contains(&self, section: Section, key: &str) -> bool {
        self.canonical_key(section, key).is_some()
    }

    /// The catalog's own `'static` copy of `key`, if it belongs to the section
    pub fn canonical_key(&self, section: Section, key: &str) -> Option<&'static str> {
        self.fr.by_key[section.index()]
            .get_key_value(key)
            .map(|(k, _)| *k)
    }

    /// The display label of a key
    pub fn label(&self, locale: Locale, section: Section, key: &str) -> Option<&'static str> {
        self.table(locale).by_key[section.index()].get(key).copied()
    }

    /// The label of a key, falling back to the key itself
    pub fn label_or_key<'a>(&self, locale: Locale, section: Section, key: &'a str) -> &'a str {
        match self.label(locale, section, key) {
            Some(label) => label,
            None => key,
        }
    }

    /// The key displayed under an exact label
    pub fn key_for_label(
        &self,
        locale: Locale,
        section: Section,
        label: &str,
    ) -> Option<&'static str> {
        self.table(locale).by_label[section.index()].get(label).copied()
    }

    /// Resolve user input to a key: an exact label, a raw key, then a
    /// case-insensitive label
    pub fn resolve(&self, locale: Locale, section: Section, input: &str) -> Option<&'static str> {
        let input = input.trim();
        self.key_for_label(locale, section, input)
            .or_else(|| self.canonical_key(section, input))
            .or_else(|| {
                self.table(locale).by_folded_label[section.index()]
                    .get(&input.to_lowercase())
                    .copied()
            })
    }

    /// Labels of a section in catalog order, as offered to the user
    pub fn options(&self, locale: Locale, section: Section) -> Vec<&'static str> {
        section
            .categories()
            .iter()
            .map(|def| def.label(locale))
            .collect()
    }
}

/// Access the catalog, building it on first use
pub fn catalog() -> &'static CategoryCatalog {
    static CATALOG: OnceLock<CategoryCatalog> = OnceLock::new();
    CATALOG.get_or_init(CategoryCatalog::build)
}
