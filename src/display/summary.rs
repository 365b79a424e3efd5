//! Terminal views of a budget: section tables, totals and breakdown

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use super::format::{format_bar, format_percentage, separator};
use crate::catalog::{catalog, strings};
use crate::error::FinanthropeResult;
use crate::models::{Locale, Section};
use crate::reports::{BudgetSnapshot, Totals};

const BAR_WIDTH: usize = 20;

/// One section with numbered rows, as shown by the session `show` command
pub fn format_section(
    snapshot: &BudgetSnapshot,
    locale: Locale,
    section: Section,
    currency: &str,
) -> FinanthropeResult<String> {
    let text = strings(locale);
    let rows = snapshot.sections().get(section);

    let mut output = format!(
        "{} [{}]\n{}\n",
        text.section_title(section),
        section,
        text.section_description(section)
    );

    if rows.is_empty() {
        output.push_str(&format!("  {}\n", text.no_rows));
        return Ok(output);
    }

    let cat = catalog();
    let mut builder = Builder::default();
    builder.push_record([
        "#".to_string(),
        text.type_column.to_string(),
        text.amount_header(currency),
    ]);
    for (index, entry) in rows.iter().enumerate() {
        builder.push_record([
            index.to_string(),
            cat.label_or_key(locale, section, entry.category_key())
                .to_string(),
            entry.money().format_grouped(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .modify(Columns::single(2), Alignment::right());
    output.push_str(&table.to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}: {}\n",
        text.section_total,
        snapshot
            .totals()
            .section_money(section)?
            .format_with_symbol(currency)
    ));
    Ok(output)
}

/// Headline totals with the capacity tag and ratio
pub fn format_totals(
    totals: &Totals,
    locale: Locale,
    currency: &str,
) -> FinanthropeResult<String> {
    let text = strings(locale);
    let mut builder = Builder::default();
    builder.push_record([
        text.total_income.to_string(),
        totals.income_money()?.format_with_symbol(currency),
    ]);
    builder.push_record([
        text.total_expenses.to_string(),
        totals.expenses_money()?.format_with_symbol(currency),
    ]);
    builder.push_record([
        text.capacity.to_string(),
        format!(
            "{} {}",
            totals.capacity_money()?.format_with_symbol(currency),
            text.per_month
        ),
    ]);

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right());

    Ok(format!(
        "{}\n{} ({})\n",
        table,
        text.capacity_tag(totals.is_positive()),
        format_percentage(totals.capacity_percent())
    ))
}

/// Expense breakdown with bars, or `None` when there are no expenses
pub fn format_breakdown(totals: &Totals, locale: Locale) -> Option<String> {
    if totals.total_expenses <= 0.0 {
        return None;
    }

    let text = strings(locale);
    let mut builder = Builder::default();
    for share in totals.breakdown() {
        builder.push_record([
            text.section_title(share.section).to_string(),
            format_bar(share.progress(), BAR_WIDTH),
            format!("{}%", share.percent()),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::blank())
        .modify(Columns::single(2), Alignment::right());
    Some(format!("{}\n{}\n", text.breakdown, table))
}

/// Every section followed by the totals and breakdown
pub fn format_summary(
    snapshot: &BudgetSnapshot,
    locale: Locale,
    currency: &str,
) -> FinanthropeResult<String> {
    let text = strings(locale);
    let mut output = format!("{}\n{}\n\n", text.app_title, separator(60));

    for section in Section::all() {
        output.push_str(&format_section(snapshot, locale, *section, currency)?);
        output.push('\n');
    }

    output.push_str(&format!("{}\n{}\n", text.summary, separator(60)));
    output.push_str(&format_totals(snapshot.totals(), locale, currency)?);
    if let Some(breakdown) = format_breakdown(snapshot.totals(), locale) {
        output.push('\n');
        output.push_str(&breakdown);
    }
    Ok(output)
}
