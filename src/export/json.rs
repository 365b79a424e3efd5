//! Structured document export
//!
//! The budget document has one stable shape: the locale tag, the rows of the
//! six sections as `{type, amount}` pairs keyed by stable category keys, and
//! the totals. Amounts cross this boundary as two-decimal values; the totals
//! written are the exact cent sums of the written amounts, so re-ingesting a
//! document reproduces its totals.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalog::catalog;
use crate::error::{FinanthropeError, FinanthropeResult};
use crate::models::{Locale, Money, Section};
use crate::reports::BudgetSnapshot;

/// Download name of the JSON document
pub const JSON_FILE_NAME: &str = "finanthrope_budget.json";

/// MIME type of the JSON document
pub const JSON_MIME: &str = "application/json";

/// The structured budget document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDocument {
    /// Locale selected when the document was produced
    pub lang: Locale,

    /// Rows of every section
    pub sections: DocumentSections,

    /// Totals of the rows above
    pub totals: DocumentTotals,
}

/// One row as written to a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Stable category key, never a localized label
    #[serde(rename = "type")]
    pub category_key: String,

    pub amount: Money,
}

/// Rows per section, in the document's field order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSections {
    #[serde(default)]
    pub income: Vec<DocumentEntry>,
    #[serde(default)]
    pub daily_expenses: Vec<DocumentEntry>,
    #[serde(default)]
    pub admin_expenses: Vec<DocumentEntry>,
    #[serde(default)]
    pub family_expenses: Vec<DocumentEntry>,
    #[serde(default)]
    pub loans: Vec<DocumentEntry>,
    #[serde(default)]
    pub taxes: Vec<DocumentEntry>,
}

impl DocumentSections {
    /// Rows of one section
    pub fn get(&self, section: Section) -> &[DocumentEntry] {
        match section {
            Section::Income => &self.income,
            Section::DailyExpenses => &self.daily_expenses,
            Section::AdminExpenses => &self.admin_expenses,
            Section::FamilyExpenses => &self.family_expenses,
            Section::Loans => &self.loans,
            Section::Taxes => &self.taxes,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut Vec<DocumentEntry> {
        match section {
            Section::Income => &mut self.income,
            Section::DailyExpenses => &mut self.daily_expenses,
            Section::AdminExpenses => &mut self.admin_expenses,
            Section::FamilyExpenses => &mut self.family_expenses,
            Section::Loans => &mut self.loans,
            Section::Taxes => &mut self.taxes,
        }
    }

    fn section_total(&self, section: Section) -> Option<Money> {
        Money::checked_sum(self.get(section).iter().map(|e| e.amount))
    }
}

/// Document totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub income: Money,
    pub expenses: Money,
    pub savings_capacity: Money,
    pub daily_expenses: Money,
    pub admin_expenses: Money,
    pub family_expenses: Money,
    pub loans: Money,
    pub taxes: Money,
}

impl DocumentTotals {
    /// Exact cent totals of a set of document rows
    ///
    /// Returns `None` when a total does not fit in cents.
    pub fn from_sections(sections: &DocumentSections) -> Option<Self> {
        let income = sections.section_total(Section::Income)?;
        let daily_expenses = sections.section_total(Section::DailyExpenses)?;
        let admin_expenses = sections.section_total(Section::AdminExpenses)?;
        let family_expenses = sections.section_total(Section::FamilyExpenses)?;
        let loans = sections.section_total(Section::Loans)?;
        let taxes = sections.section_total(Section::Taxes)?;
        let expenses = Money::checked_sum([
            daily_expenses,
            admin_expenses,
            family_expenses,
            loans,
            taxes,
        ])?;

        Some(Self {
            income,
            expenses,
            savings_capacity: income.checked_sub(expenses)?,
            daily_expenses,
            admin_expenses,
            family_expenses,
            loans,
            taxes,
        })
    }

    /// Total of one section
    pub fn section(&self, section: Section) -> Money {
        match section {
            Section::Income => self.income,
            Section::DailyExpenses => self.daily_expenses,
            Section::AdminExpenses => self.admin_expenses,
            Section::FamilyExpenses => self.family_expenses,
            Section::Loans => self.loans,
            Section::Taxes => self.taxes,
        }
    }
}

impl BudgetDocument {
    /// Build the document of a snapshot
    ///
    /// Fails with an export error when the totals do not fit in cents.
    pub fn from_snapshot(snapshot: &BudgetSnapshot, locale: Locale) -> FinanthropeResult<Self> {
        let mut sections = DocumentSections::default();
        for (section, rows) in snapshot.sections().iter() {
            sections.get_mut(section).extend(rows.iter().map(|entry| DocumentEntry {
                category_key: entry.category_key().to_string(),
                amount: entry.money(),
            }));
        }
        let totals = DocumentTotals::from_sections(&sections).ok_or_else(|| {
            FinanthropeError::Export("Budget totals are too large to express in cents".into())
        })?;

        Ok(Self {
            lang: locale,
            sections,
            totals,
        })
    }

    /// Check keys, amounts and the stated totals
    pub fn validate(&self) -> Result<(), String> {
        let cat = catalog();
        for section in Section::all() {
            for (index, row) in self.sections.get(*section).iter().enumerate() {
                if !cat.contains(*section, &row.category_key) {
                    return Err(format!(
                        "Row {} of {} has unknown type '{}'",
                        index, section, row.category_key
                    ));
                }
                if row.amount.is_negative() {
                    return Err(format!(
                        "Row {} of {} has a negative amount ({})",
                        index, section, row.amount
                    ));
                }
            }
        }

        let recomputed = DocumentTotals::from_sections(&self.sections)
            .ok_or_else(|| "Totals of the rows are too large to express in cents".to_string())?;
        if recomputed != self.totals {
            return Err(format!(
                "Totals do not match the rows: stated income {} / expenses {}, computed {} / {}",
                self.totals.income, self.totals.expenses, recomputed.income, recomputed.expenses
            ));
        }

        Ok(())
    }

    /// Serialize to JSON bytes
    pub fn to_json(&self, pretty: bool) -> FinanthropeResult<Vec<u8>> {
        if pretty {
            serde_json::to_vec_pretty(self)
        } else {
            serde_json::to_vec(self)
        }
        .map_err(|e| FinanthropeError::Export(e.to_string()))
    }
}

/// Export a snapshot as a JSON document
pub fn export_json<W: Write>(
    snapshot: &BudgetSnapshot,
    locale: Locale,
    writer: &mut W,
    pretty: bool,
) -> FinanthropeResult<()> {
    let document = BudgetDocument::from_snapshot(snapshot, locale)?;
    let bytes = document.to_json(pretty)?;
    writer
        .write_all(&bytes)
        .map_err(|e| FinanthropeError::Export(e.to_string()))?;
    Ok(())
}

/// Parse and validate a JSON document
pub fn import_from_json(json_str: &str) -> FinanthropeResult<BudgetDocument> {
    let document: BudgetDocument =
        serde_json::from_str(json_str).map_err(|e| FinanthropeError::Import(e.to_string()))?;

    document.validate().map_err(FinanthropeError::Import)?;

    Ok(document)
}
