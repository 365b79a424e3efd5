//! Export module for Finanthrope
//!
//! Turns a budget snapshot into downloadable artifacts:
//! - JSON: the structured budget document (re-importable)
//! - YAML: the same document, human-editable
//! - CSV: one row per entry (spreadsheet-compatible)
//! - PDF: the printable A4 summary
//! - SVG: the expense breakdown chart on its own
//!
//! Every export reads an immutable snapshot and builds its own buffer, so a
//! failed export leaves the session untouched and can simply be retried.

pub mod chart;
pub mod csv;
pub mod file_io;
pub mod json;
pub mod pdf;
pub mod svg;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::info;

pub use self::csv::{export_entries_csv, CSV_FILE_NAME, CSV_MIME};
pub use chart::DonutChart;
pub use file_io::{read_to_string_required, write_bytes_atomic};
pub use json::{
    export_json, import_from_json, BudgetDocument, DocumentEntry, DocumentSections,
    DocumentTotals, JSON_FILE_NAME, JSON_MIME,
};
pub use pdf::{export_pdf, pdf_file_name, render_pdf, PdfOptions, SummaryReport, PDF_MIME};
pub use svg::{chart_svg, SVG_FILE_NAME, SVG_MIME};
pub use yaml::{export_yaml, import_from_yaml, YAML_FILE_NAME, YAML_MIME};

use crate::error::{FinanthropeError, FinanthropeResult};
use crate::models::Locale;
use crate::reports::BudgetSnapshot;

/// Artifact formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
    Pdf,
    Svg,
}

impl ExportFormat {
    pub fn all() -> &'static [Self] {
        &[Self::Json, Self::Yaml, Self::Csv, Self::Pdf, Self::Svg]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
            Self::Svg => "svg",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Json => JSON_MIME,
            Self::Yaml => YAML_MIME,
            Self::Csv => CSV_MIME,
            Self::Pdf => PDF_MIME,
            Self::Svg => SVG_MIME,
        }
    }

    /// Default download name; only the PDF name depends on the locale
    pub fn file_name(&self, locale: Locale) -> &'static str {
        match self {
            Self::Json => JSON_FILE_NAME,
            Self::Yaml => YAML_FILE_NAME,
            Self::Csv => CSV_FILE_NAME,
            Self::Pdf => pdf_file_name(locale),
            Self::Svg => SVG_FILE_NAME,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = FinanthropeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            "pdf" => Ok(Self::Pdf),
            "svg" => Ok(Self::Svg),
            other => Err(FinanthropeError::Export(format!(
                "Unknown export format '{}' (expected json, yaml, csv, pdf or svg)",
                other
            ))),
        }
    }
}

/// Options shared by every format
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub pretty_json: bool,
    pub currency_symbol: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            currency_symbol: "€".into(),
            created_at: None,
        }
    }
}

/// A finished export, ready to be saved or offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Export a snapshot in the requested format
pub fn export(
    snapshot: &BudgetSnapshot,
    locale: Locale,
    format: ExportFormat,
    options: &ExportOptions,
) -> FinanthropeResult<ExportArtifact> {
    let mut bytes = Vec::new();
    match format {
        ExportFormat::Json => export_json(snapshot, locale, &mut bytes, options.pretty_json)?,
        ExportFormat::Yaml => export_yaml(snapshot, locale, &mut bytes)?,
        ExportFormat::Csv => export_entries_csv(snapshot, locale, &mut bytes)?,
        ExportFormat::Pdf => {
            let pdf_options = PdfOptions {
                currency_symbol: options.currency_symbol.clone(),
                created_at: options.created_at,
            };
            export_pdf(snapshot, locale, &pdf_options, &mut bytes)?
        }
        ExportFormat::Svg => {
            let svg = chart_svg(snapshot, locale)?.ok_or_else(|| {
                FinanthropeError::Export("No expenses to chart".into())
            })?;
            bytes = svg.into_bytes();
        }
    }

    info!(%format, %locale, size = bytes.len(), "exported budget");
    Ok(ExportArtifact {
        file_name: format.file_name(locale),
        mime: format.mime(),
        bytes,
    })
}
