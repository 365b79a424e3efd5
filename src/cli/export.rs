//! CLI commands for export
//!
//! Loads saved budget documents and writes export artifacts to disk.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::info;

use crate::config::{FinanthropePaths, Settings};
use crate::error::FinanthropeResult;
use crate::export::{
    export, import_from_json, import_from_yaml, read_to_string_required, write_bytes_atomic,
    BudgetDocument, ExportFormat,
};
use crate::models::Locale;
use crate::reports::BudgetSnapshot;
use crate::session::BudgetSession;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Structured budget document
    Json,
    /// Structured budget document, human-editable
    Yaml,
    /// One row per entry
    Csv,
    /// Printable A4 summary
    Pdf,
    /// Expense breakdown chart
    Svg,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Yaml => Self::Yaml,
            FormatArg::Csv => Self::Csv,
            FormatArg::Pdf => Self::Pdf,
            FormatArg::Svg => Self::Svg,
        }
    }
}

/// Read a budget document, choosing the parser from the file extension
pub fn load_document(path: &Path) -> FinanthropeResult<BudgetDocument> {
    let contents = read_to_string_required(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    let document = if is_yaml {
        import_from_yaml(&contents)?
    } else {
        import_from_json(&contents)?
    };
    info!(path = %path.display(), lang = %document.lang, "loaded budget document");
    Ok(document)
}

/// Export a snapshot and write it atomically
///
/// Without an explicit `output`, the artifact lands in the configured export
/// directory under its default file name. Returns the written path.
pub fn write_artifact(
    snapshot: &BudgetSnapshot,
    locale: Locale,
    format: ExportFormat,
    paths: &FinanthropePaths,
    settings: &Settings,
    output: Option<PathBuf>,
) -> FinanthropeResult<PathBuf> {
    let artifact = export(snapshot, locale, format, &settings.export_options())?;
    let path = output.unwrap_or_else(|| settings.export_dir(paths).join(artifact.file_name));

    write_bytes_atomic(&path, &artifact.bytes)?;
    info!(path = %path.display(), mime = artifact.mime, "wrote export");
    Ok(path)
}

/// Handle `finanthrope export`
pub fn handle_export_command(
    paths: &FinanthropePaths,
    settings: &Settings,
    document: &Path,
    format: FormatArg,
    output: Option<PathBuf>,
    lang: Option<Locale>,
) -> FinanthropeResult<()> {
    let session = BudgetSession::from_document(&load_document(document)?)?;
    let locale = lang.unwrap_or(session.locale());

    let path = write_artifact(
        &session.snapshot(),
        locale,
        format.into(),
        paths,
        settings,
        output,
    )?;
    println!("Exported to: {}", path.display());
    Ok(())
}
