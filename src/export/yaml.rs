//! YAML export functionality
//!
//! The same budget document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{FinanthropeError, FinanthropeResult};
use crate::export::json::BudgetDocument;
use crate::models::Locale;
use crate::reports::BudgetSnapshot;

/// Download name of the YAML document
pub const YAML_FILE_NAME: &str = "finanthrope_budget.yaml";

/// MIME type of the YAML document
pub const YAML_MIME: &str = "application/yaml";

/// Export a snapshot as a YAML document
pub fn export_yaml<W: Write>(
    snapshot: &BudgetSnapshot,
    locale: Locale,
    writer: &mut W,
) -> FinanthropeResult<()> {
    let document = BudgetDocument::from_snapshot(snapshot, locale)?;
    let body =
        serde_yaml::to_string(&document).map_err(|e| FinanthropeError::Export(e.to_string()))?;

    // Header and body go out in a single write
    let mut buffer = String::new();
    buffer.push_str("# Finanthrope budget\n");
    buffer.push_str(&format!("# Version: {}\n", env!("CARGO_PKG_VERSION")));
    buffer.push_str("#\n");
    buffer.push_str("# Amounts are monthly. Totals are derived from the rows.\n\n");
    buffer.push_str(&body);

    writer
        .write_all(buffer.as_bytes())
        .map_err(|e| FinanthropeError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML document
pub fn import_from_yaml(yaml_str: &str) -> FinanthropeResult<BudgetDocument> {
    let document: BudgetDocument =
        serde_yaml::from_str(yaml_str).map_err(|e| FinanthropeError::Import(e.to_string()))?;

    document.validate().map_err(FinanthropeError::Import)?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;
    use crate::session::BudgetSession;

    #[test]
    fn test_yaml_roundtrip() {
        let mut session = BudgetSession::new(Locale::Fr);
        let store = session.store_mut();
        let i = store.add_entry(Section::AdminExpenses);
        store.set_category(Section::AdminExpenses, i, "health_cover").unwrap();
        store.set_amount(Section::AdminExpenses, i, 64.9).unwrap();

        let mut out = Vec::new();
        export_yaml(&session.snapshot(), Locale::Fr, &mut out).unwrap();
        let yaml = String::from_utf8(out).unwrap();

        assert!(yaml.starts_with("# Finanthrope budget"));
        assert!(yaml.contains("health_cover"));

        let document = import_from_yaml(&yaml).unwrap();
        assert_eq!(document.lang, Locale::Fr);
        assert_eq!(document.totals.admin_expenses.cents(), 6490);
    }

    #[test]
    fn test_import_invalid_yaml() {
        assert!(import_from_yaml("lang: [unterminated").is_err());
    }
}
