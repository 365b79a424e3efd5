//! CLI commands that print a budget or the catalog

use std::path::Path;

use super::export::load_document;
use crate::config::Settings;
use crate::display::{format_categories, format_summary};
use crate::error::FinanthropeResult;
use crate::models::{Locale, Section};
use crate::session::BudgetSession;

/// Handle `finanthrope summary`
pub fn handle_summary_command(
    settings: &Settings,
    document: &Path,
    lang: Option<Locale>,
) -> FinanthropeResult<()> {
    let session = BudgetSession::from_document(&load_document(document)?)?;
    let locale = lang.unwrap_or(session.locale());
    print!(
        "{}",
        format_summary(&session.snapshot(), locale, &settings.currency_symbol)?
    );
    Ok(())
}

/// Handle `finanthrope categories`
pub fn handle_categories_command(locale: Locale, section: Option<Section>) -> FinanthropeResult<()> {
    print!("{}", format_categories(locale, section));
    Ok(())
}
