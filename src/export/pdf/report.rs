//! Layout-free model of the printable summary

use crate::catalog::{catalog, strings};
use crate::error::FinanthropeResult;
use crate::export::chart::DonutChart;
use crate::export::json::BudgetDocument;
use crate::models::{Locale, Money, Section};
use crate::reports::BudgetSnapshot;

/// Colour hint of a headline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

/// One line of the headline block
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub text: String,
    pub tone: Tone,
}

/// A section's rows as printed
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTable {
    pub section: Section,
    pub heading: String,
    pub columns: [String; 2],
    /// (label, formatted amount)
    pub rows: Vec<(String, String)>,
}

/// Everything the printable summary shows, in reading order
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub locale: Locale,
    pub title: String,
    pub headlines: Vec<Headline>,
    pub tables: Vec<SectionTable>,
    pub chart: Option<DonutChart>,
}

impl SummaryReport {
    /// Build the report of a snapshot
    ///
    /// Amounts and totals are the cent-rounded values of the structured
    /// document, so both exports always agree.
    pub fn build(
        snapshot: &BudgetSnapshot,
        locale: Locale,
        currency: &str,
    ) -> FinanthropeResult<Self> {
        let text = strings(locale);
        let document = BudgetDocument::from_snapshot(snapshot, locale)?;
        let totals = &document.totals;
        let amount = |money: Money| format!("{} {}", money.format_grouped(), currency);

        let capacity_tone = if totals.savings_capacity.is_negative() {
            Tone::Negative
        } else {
            Tone::Positive
        };
        let headlines = vec![
            Headline {
                text: format!("{}: {}", text.total_income, amount(totals.income)),
                tone: Tone::Neutral,
            },
            Headline {
                text: format!("{}: {}", text.total_expenses, amount(totals.expenses)),
                tone: Tone::Neutral,
            },
            Headline {
                text: format!(
                    "{}: {} ({})",
                    text.pdf_capacity,
                    amount(totals.savings_capacity),
                    text.capacity_tag(capacity_tone == Tone::Positive)
                ),
                tone: capacity_tone,
            },
        ];

        let cat = catalog();
        let tables = Section::all()
            .iter()
            .map(|section| SectionTable {
                section: *section,
                heading: text.report_heading(*section),
                columns: [
                    text.type_column.to_string(),
                    text.amount_header(currency),
                ],
                rows: document
                    .sections
                    .get(*section)
                    .iter()
                    .map(|row| {
                        (
                            cat.label_or_key(locale, *section, &row.category_key)
                                .to_string(),
                            row.amount.format_grouped(),
                        )
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            locale,
            title: format!("Finanthrope — {}", text.pdf_title),
            headlines,
            tables,
            chart: DonutChart::from_totals(snapshot.totals(), locale)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::BudgetSession;

    fn session(locale: Locale, amounts: &[(Section, &str, f64)]) -> BudgetSession {
        let mut session = BudgetSession::new(locale);
        for (section, key, amount) in amounts {
            let i = session.store_mut().add_entry(*section);
            session.store_mut().set_category(*section, i, key).unwrap();
            session.store_mut().set_amount(*section, i, *amount).unwrap();
        }
        session
    }

    #[test]
    fn test_english_report() {
        let s = session(
            Locale::En,
            &[
                (Section::Income, "salary", 3000.0),
                (Section::DailyExpenses, "food", 400.0),
            ],
        );
        let report = SummaryReport::build(&s.snapshot(), Locale::En, "€").unwrap();

        assert_eq!(report.title, "Finanthrope — Budget summary");
        assert_eq!(report.headlines[0].text, "Total income: 3,000.00 €");
        assert_eq!(report.headlines[1].text, "Total expenses: 400.00 €");
        assert_eq!(
            report.headlines[2].text,
            "Savings capacity: 2,600.00 € (Positive capacity)"
        );
        assert_eq!(report.headlines[2].tone, Tone::Positive);

        assert_eq!(report.tables.len(), 6);
        assert_eq!(report.tables[0].heading, "Income");
        assert_eq!(report.tables[0].columns[1], "Amount (€)");
        assert_eq!(
            report.tables[0].rows,
            vec![("Salary".to_string(), "3,000.00".to_string())]
        );
        assert_eq!(report.tables[1].heading, "Expenses — Everyday expenses");
        assert_eq!(report.tables[1].rows[0].0, "Food");
        assert!(report.tables[5].rows.is_empty());

        let chart = report.chart.unwrap();
        assert_eq!(chart.visible_slices().count(), 1);
    }

    #[test]
    fn test_negative_capacity_in_french() {
        let s = session(Locale::Fr, &[(Section::Loans, "mortgage", 900.0)]);
        let report = SummaryReport::build(&s.snapshot(), Locale::Fr, "€").unwrap();

        assert_eq!(report.title, "Finanthrope — Résumé budgétaire");
        assert_eq!(report.headlines[2].tone, Tone::Negative);
        assert_eq!(
            report.headlines[2].text,
            "Capacité d’épargne: -900.00 € (Capacité négative)"
        );
        assert_eq!(report.tables[4].heading, "Dépenses — Crédits et prêts");
        assert_eq!(report.tables[4].rows[0].0, "Crédit immobilier");
    }

    #[test]
    fn test_no_chart_without_expenses() {
        let s = session(Locale::En, &[(Section::Income, "salary", 1500.0)]);
        let report = SummaryReport::build(&s.snapshot(), Locale::En, "€").unwrap();
        assert!(report.chart.is_none());
    }

    #[test]
    fn test_zero_capacity_is_positive() {
        let s = session(Locale::En, &[]);
        let report = SummaryReport::build(&s.snapshot(), Locale::En, "€").unwrap();
        assert_eq!(report.headlines[2].tone, Tone::Positive);
        assert_eq!(
            report.headlines[2].text,
            "Savings capacity: 0.00 € (Positive capacity)"
        );
    }
}
