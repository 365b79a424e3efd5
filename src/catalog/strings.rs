//! Localized interface and report strings

use crate::models::{Locale, Section};

/// Every user-facing string that is not a category label
#[derive(Debug)]
pub struct Strings {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub income: &'static str,
    pub income_desc: &'static str,
    pub daily_expenses: &'static str,
    pub daily_expenses_desc: &'static str,
    pub admin_expenses: &'static str,
    pub admin_expenses_desc: &'static str,
    pub family_expenses: &'static str,
    pub family_expenses_desc: &'static str,
    pub loans: &'static str,
    pub loans_desc: &'static str,
    pub taxes: &'static str,
    pub taxes_desc: &'static str,
    pub type_column: &'static str,
    pub amount_column: &'static str,
    pub no_rows: &'static str,
    pub summary: &'static str,
    pub total_income: &'static str,
    pub total_expenses: &'static str,
    pub capacity: &'static str,
    pub breakdown: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
    pub per_month: &'static str,
    pub section_total: &'static str,
    pub currency: &'static str,
    pub pdf_title: &'static str,
    pub pdf_income: &'static str,
    pub pdf_expenses: &'static str,
    pub pdf_chart: &'static str,
    pub pdf_capacity: &'static str,
}

static FR: Strings = Strings {
    app_title: "Finanthrope — Calculateur d'Épargne",
    app_subtitle: "Calculez votre capacité d'épargne mensuelle",
    income: "Revenus mensuels",
    income_desc: "Ajoutez vos différentes sources de revenus",
    daily_expenses: "Dépenses quotidiennes",
    daily_expenses_desc: "Abonnements, nourriture, téléphone, loisirs, voyages",
    admin_expenses: "Dépenses administratives",
    admin_expenses_desc: "Assurances habitation, auto, décès, mutuelle, frais bancaires",
    family_expenses: "Dépenses familiales",
    family_expenses_desc: "Frais scolaires, cantine, sport, loisirs enfants",
    loans: "Crédits et prêts",
    loans_desc: "Crédit auto, immobilier, travaux, consommation, prêt étudiant",
    taxes: "Impôts",
    taxes_desc: "Sur le salaire, fonciers, PFU",
    type_column: "Type",
    amount_column: "Montant",
    no_rows: "Aucune entrée. Ajoutez une ligne pour commencer.",
    summary: "Résumé",
    total_income: "Total revenus",
    total_expenses: "Total dépenses",
    capacity: "Capacité d'épargne",
    breakdown: "Répartition des dépenses",
    positive: "Capacité positive",
    negative: "Capacité négative",
    per_month: "par mois",
    section_total: "Total",
    currency: "€",
    pdf_title: "Résumé budgétaire",
    pdf_income: "Revenus",
    pdf_expenses: "Dépenses",
    pdf_chart: "Répartition des dépenses",
    pdf_capacity: "Capacité d’épargne",
};

static EN: Strings = Strings {
    app_title: "Finanthrope — Savings Capacity Calculator",
    app_subtitle: "Estimate your monthly savings capacity",
    income: "Monthly income",
    income_desc: "Add your different income sources",
    daily_expenses: "Everyday expenses",
    daily_expenses_desc: "Subscriptions, food, phone, leisure, travel",
    admin_expenses: "Administrative expenses",
    admin_expenses_desc: "Home, car, life insurance, health cover, bank fees",
    family_expenses: "Family expenses",
    family_expenses_desc: "School, canteen, sports, kids leisure",
    loans: "Loans and credit",
    loans_desc: "Car, mortgage, renovation, consumer, student",
    taxes: "Taxes",
    taxes_desc: "On salary, property, flat tax",
    type_column: "Type",
    amount_column: "Amount",
    no_rows: "No entries yet. Add a row to get started.",
    summary: "Summary",
    total_income: "Total income",
    total_expenses: "Total expenses",
    capacity: "Savings capacity",
    breakdown: "Expense breakdown",
    positive: "Positive capacity",
    negative: "Negative capacity",
    per_month: "per month",
    section_total: "Total",
    currency: "€",
    pdf_title: "Budget summary",
    pdf_income: "Income",
    pdf_expenses: "Expenses",
    pdf_chart: "Expense breakdown",
    pdf_capacity: "Savings capacity",
};

/// The strings of a locale
pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::Fr => &FR,
        Locale::En => &EN,
    }
}

impl Strings {
    /// Section title as shown above its rows
    pub fn section_title(&self, section: Section) -> &'static str {
        match section {
            Section::Income => self.income,
            Section::DailyExpenses => self.daily_expenses,
            Section::AdminExpenses => self.admin_expenses,
            Section::FamilyExpenses => self.family_expenses,
            Section::Loans => self.loans,
            Section::Taxes => self.taxes,
        }
    }

    /// One-line description of a section
    pub fn section_description(&self, section: Section) -> &'static str {
        match section {
            Section::Income => self.income_desc,
            Section::DailyExpenses => self.daily_expenses_desc,
            Section::AdminExpenses => self.admin_expenses_desc,
            Section::FamilyExpenses => self.family_expenses_desc,
            Section::Loans => self.loans_desc,
            Section::Taxes => self.taxes_desc,
        }
    }

    /// Heading of a section table in the printable summary
    pub fn report_heading(&self, section: Section) -> String {
        if section.is_expense() {
            format!("{} — {}", self.pdf_expenses, self.section_title(section))
        } else {
            self.pdf_income.to_string()
        }
    }

    /// Header of the amount column, e.g. `Amount (€)`
    pub fn amount_header(&self, currency: &str) -> String {
        format!("{} ({})", self.amount_column, currency)
    }

    /// Positive/negative tag for a savings capacity
    pub fn capacity_tag(&self, positive: bool) -> &'static str {
        if positive {
            self.positive
        } else {
            self.negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_headings() {
        let en = strings(Locale::En);
        assert_eq!(en.report_heading(Section::Income), "Income");
        assert_eq!(
            en.report_heading(Section::Loans),
            "Expenses — Loans and credit"
        );
        assert_eq!(
            strings(Locale::Fr).report_heading(Section::Taxes),
            "Dépenses — Impôts"
        );
    }

    #[test]
    fn test_amount_header() {
        let fr = strings(Locale::Fr);
        assert_eq!(fr.amount_header(fr.currency), "Montant (€)");
        assert_eq!(strings(Locale::En).amount_header("EUR"), "Amount (EUR)");
    }

    #[test]
    fn test_capacity_tag() {
        let en = strings(Locale::En);
        assert_eq!(en.capacity_tag(true), "Positive capacity");
        assert_eq!(en.capacity_tag(false), "Negative capacity");
    }
}
