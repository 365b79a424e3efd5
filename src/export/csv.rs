//! CSV export functionality
//!
//! One line per row, for spreadsheets: section, category key, localized
//! label and two-decimal amount.

use std::io::Write;

use crate::catalog::catalog;
use crate::error::{FinanthropeError, FinanthropeResult};
use crate::models::Locale;
use crate::reports::BudgetSnapshot;

/// Download name of the CSV file
pub const CSV_FILE_NAME: &str = "finanthrope_entries.csv";

/// MIME type of the CSV file
pub const CSV_MIME: &str = "text/csv";

/// Export every row of a snapshot to CSV
pub fn export_entries_csv<W: Write>(
    snapshot: &BudgetSnapshot,
    locale: Locale,
    writer: &mut W,
) -> FinanthropeResult<()> {
    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    let to_export = |e: csv::Error| FinanthropeError::Export(e.to_string());

    csv_writer
        .write_record(["section", "type", "label", "amount"])
        .map_err(to_export)?;

    for (section, rows) in snapshot.sections().iter() {
        for entry in rows {
            let label = catalog().label_or_key(locale, section, entry.category_key());
            let amount = entry.money().to_string();
            csv_writer
                .write_record([section.id(), entry.category_key(), label, amount.as_str()])
                .map_err(to_export)?;
        }
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| FinanthropeError::Export(e.to_string()))?;
    writer
        .write_all(&bytes)
        .map_err(|e| FinanthropeError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;
    use crate::session::BudgetSession;

    #[test]
    fn test_csv_rows() {
        let mut session = BudgetSession::new(Locale::Fr);
        let store = session.store_mut();
        let i = store.add_entry(Section::Income);
        store.set_category(Section::Income, i, "activity_bonus").unwrap();
        store.set_amount(Section::Income, i, 1234.5).unwrap();
        store.add_entry(Section::Taxes);

        let mut out = Vec::new();
        export_entries_csv(&session.snapshot(), Locale::Fr, &mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "section,type,label,amount");
        assert_eq!(lines[1], "income,activity_bonus,Prime d'activité,1234.50");
        assert_eq!(lines[2], "taxes,salary_tax,Impôts sur le salaire,0.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_snapshot_has_header_only() {
        let session = BudgetSession::new(Locale::En);
        let mut out = Vec::new();
        export_entries_csv(&session.snapshot(), Locale::En, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "section,type,label,amount\n");
    }
}
