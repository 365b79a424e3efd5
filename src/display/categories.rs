//! Category catalog listing

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::catalog::strings;
use crate::models::{Locale, Section};

/// Keys and localized labels of one section, or of all of them
pub fn format_categories(locale: Locale, section: Option<Section>) -> String {
    let text = strings(locale);
    let sections: Vec<Section> = match section {
        Some(section) => vec![section],
        None => Section::all().to_vec(),
    };

    let mut output = String::new();
    for section in sections {
        let mut builder = Builder::default();
        builder.push_record(["key", text.type_column]);
        for def in section.categories() {
            builder.push_record([def.key, def.label(locale)]);
        }

        let mut table = builder.build();
        table.with(Style::psql());
        output.push_str(&format!(
            "{} [{}]\n{}\n\n",
            text.section_title(section),
            section,
            table
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_section() {
        let out = format_categories(Locale::En, Some(Section::Taxes));
        assert!(out.starts_with("Taxes [taxes]"));
        assert!(out.contains("flat_tax"));
        assert!(out.contains("Flat tax"));
        assert!(!out.contains("salary_bonus"));
    }

    #[test]
    fn test_all_sections_in_french() {
        let out = format_categories(Locale::Fr, None);
        assert!(out.contains("Revenus mensuels [income]"));
        assert!(out.contains("Crédit immobilier"));
        assert!(out.contains("Impôts PFU"));
    }
}
