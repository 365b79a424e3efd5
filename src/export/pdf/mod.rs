//! Printable A4 summary
//!
//! [`SummaryReport`] decides what is printed; this module decides where.
//! The document uses the standard Helvetica fonts and draws the expense
//! chart as vector paths, so no font or image is embedded.

pub mod fonts;
pub mod layout;
pub mod report;
pub mod writer;

use std::io::Write;

use chrono::{DateTime, Utc};

pub use report::{Headline, SectionTable, SummaryReport, Tone};

use self::fonts::Font;
use self::layout::{Align, Canvas, CONTENT_WIDTH, MARGIN};
use self::writer::DocumentInfo;
use super::chart::{circle, DonutChart, Rgb, BORDER_COLOR, HEADER_COLOR, TEXT_COLOR};
use crate::error::{FinanthropeError, FinanthropeResult};
use crate::models::Locale;
use crate::reports::BudgetSnapshot;

/// MIME type of the printable summary
pub const PDF_MIME: &str = "application/pdf";

const TITLE_SIZE: f64 = 18.0;
const TITLE_LEADING: f64 = 26.0;
const BODY_SIZE: f64 = 10.0;
const BODY_LEADING: f64 = 14.0;
const HEADING_SIZE: f64 = 13.0;
const HEADING_LEADING: f64 = 22.0;
const SPACER: f64 = 8.0;

const HEADER_ROW: f64 = 22.0;
const BODY_ROW: f64 = 18.0;
const CELL_PADDING: f64 = 6.0;
/// 60 mm
const AMOUNT_COLUMN: f64 = 170.08;
const MIN_LABEL_COLUMN: f64 = 120.0;

const CHART_RADIUS: f64 = 95.0;
const LEGEND_ROW: f64 = 20.0;
const LEGEND_SWATCH: f64 = 10.0;

const POSITIVE_COLOR: Rgb = Rgb(0x15, 0x80, 0x3D);
const NEGATIVE_COLOR: Rgb = Rgb(0xB9, 0x1C, 0x1C);
const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

/// Rendering options
#[derive(Debug, Clone)]
pub struct PdfOptions {
    pub currency_symbol: String,
    /// Creation date recorded in the document info
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "€".into(),
            created_at: None,
        }
    }
}

/// Download name of the printable summary
pub fn pdf_file_name(locale: Locale) -> &'static str {
    match locale {
        Locale::Fr => "finanthrope_resume.pdf",
        Locale::En => "finanthrope_summary.pdf",
    }
}

/// Build and render the summary of a snapshot
pub fn export_pdf<W: Write>(
    snapshot: &BudgetSnapshot,
    locale: Locale,
    options: &PdfOptions,
    writer: &mut W,
) -> FinanthropeResult<()> {
    let report = SummaryReport::build(snapshot, locale, &options.currency_symbol)?;
    let bytes = render_pdf(&report, options)?;
    writer
        .write_all(&bytes)
        .map_err(|e| FinanthropeError::Export(e.to_string()))?;
    Ok(())
}

/// Lay a report out on A4 pages and serialize it
pub fn render_pdf(report: &SummaryReport, options: &PdfOptions) -> FinanthropeResult<Vec<u8>> {
    let mut canvas = Canvas::new();

    canvas.paragraph(
        Font::Bold,
        TITLE_SIZE,
        TITLE_LEADING,
        Align::Center,
        TEXT_COLOR,
        &report.title,
    )?;
    canvas.advance(SPACER);

    for headline in &report.headlines {
        let color = match headline.tone {
            Tone::Neutral => TEXT_COLOR,
            Tone::Positive => POSITIVE_COLOR,
            Tone::Negative => NEGATIVE_COLOR,
        };
        canvas.paragraph(
            Font::Regular,
            BODY_SIZE,
            BODY_LEADING,
            Align::Left,
            color,
            &headline.text,
        )?;
    }
    canvas.advance(SPACER);

    for table in &report.tables {
        draw_table(&mut canvas, table)?;
    }

    if let Some(chart) = &report.chart {
        draw_chart(&mut canvas, chart)?;
    }

    let info = DocumentInfo {
        title: report.title.clone(),
        producer: format!("Finanthrope {}", env!("CARGO_PKG_VERSION")),
        created_at: options.created_at,
    };
    Ok(writer::assemble(&canvas.finish(), &info))
}

fn draw_table(canvas: &mut Canvas, table: &SectionTable) -> FinanthropeResult<()> {
    let widest = table
        .rows
        .iter()
        .map(|(label, _)| Font::Regular.text_width(label, BODY_SIZE))
        .fold(Font::Bold.text_width(&table.columns[0], BODY_SIZE), f64::max);
    let label_width =
        (widest + 2.0 * CELL_PADDING).clamp(MIN_LABEL_COLUMN, CONTENT_WIDTH - AMOUNT_COLUMN);
    let width = label_width + AMOUNT_COLUMN;

    // Keep the heading with the header row and the first line
    canvas.ensure(HEADING_LEADING + HEADER_ROW + BODY_ROW);
    canvas.paragraph(
        Font::Bold,
        HEADING_SIZE,
        HEADING_LEADING,
        Align::Left,
        TEXT_COLOR,
        &table.heading,
    )?;

    let mut segment_top = canvas.cursor();
    header_row(canvas, table, label_width, width)?;

    for (label, amount) in &table.rows {
        if BODY_ROW > canvas.remaining() {
            stroke_box(canvas, segment_top, width);
            canvas.new_page();
            segment_top = canvas.cursor();
            header_row(canvas, table, label_width, width)?;
        }

        let bottom = canvas.cursor() - BODY_ROW;
        let baseline = bottom + (BODY_ROW - 0.72 * BODY_SIZE) / 2.0;
        canvas.text(
            Font::Regular,
            BODY_SIZE,
            MARGIN + CELL_PADDING,
            baseline,
            Align::Left,
            TEXT_COLOR,
            label,
        )?;
        canvas.text(
            Font::Regular,
            BODY_SIZE,
            MARGIN + width - CELL_PADDING,
            baseline,
            Align::Right,
            TEXT_COLOR,
            amount,
        )?;
        row_grid(canvas, bottom, BODY_ROW, label_width, width);
        canvas.advance(BODY_ROW);
    }

    stroke_box(canvas, segment_top, width);
    canvas.advance(SPACER);
    Ok(())
}

fn header_row(
    canvas: &mut Canvas,
    table: &SectionTable,
    label_width: f64,
    width: f64,
) -> FinanthropeResult<()> {
    let bottom = canvas.cursor() - HEADER_ROW;
    let baseline = bottom + (HEADER_ROW - 0.72 * BODY_SIZE) / 2.0;

    canvas.fill_rect(MARGIN, bottom, width, HEADER_ROW, HEADER_COLOR);
    canvas.text(
        Font::Bold,
        BODY_SIZE,
        MARGIN + CELL_PADDING,
        baseline,
        Align::Left,
        TEXT_COLOR,
        &table.columns[0],
    )?;
    canvas.text(
        Font::Bold,
        BODY_SIZE,
        MARGIN + label_width + CELL_PADDING,
        baseline,
        Align::Left,
        TEXT_COLOR,
        &table.columns[1],
    )?;
    row_grid(canvas, bottom, HEADER_ROW, label_width, width);
    canvas.advance(HEADER_ROW);
    Ok(())
}

fn row_grid(canvas: &mut Canvas, bottom: f64, height: f64, label_width: f64, width: f64) {
    let divider = MARGIN + label_width;
    canvas.line((divider, bottom), (divider, bottom + height), 0.25, BORDER_COLOR);
    canvas.line((MARGIN, bottom), (MARGIN + width, bottom), 0.25, BORDER_COLOR);
}

fn stroke_box(canvas: &mut Canvas, top: f64, width: f64) {
    let bottom = canvas.cursor();
    canvas.stroke_rect(MARGIN, bottom, width, top - bottom, 0.5, BORDER_COLOR);
}

fn draw_chart(canvas: &mut Canvas, chart: &DonutChart) -> FinanthropeResult<()> {
    let diameter = 2.0 * CHART_RADIUS;
    canvas.ensure(HEADING_LEADING + diameter + 2.0 * SPACER);
    canvas.paragraph(
        Font::Bold,
        HEADING_SIZE,
        HEADING_LEADING,
        Align::Left,
        TEXT_COLOR,
        chart.title,
    )?;

    let center = (
        MARGIN + CHART_RADIUS + SPACER,
        canvas.cursor() - SPACER - CHART_RADIUS,
    );
    for slice in chart.visible_slices() {
        let outline = slice.outline(CHART_RADIUS)?;
        canvas.path(center, &outline, Some(slice.color), Some((WHITE, 1.5)));
    }
    canvas.path(center, &circle(CHART_RADIUS), None, Some((BORDER_COLOR, 1.4)));

    let legend_x = center.0 + CHART_RADIUS + 3.0 * SPACER;
    let legend_top = center.1 + LEGEND_ROW * chart.slices.len() as f64 / 2.0;
    for (i, slice) in chart.slices.iter().enumerate() {
        let row_bottom = legend_top - LEGEND_ROW * (i + 1) as f64;
        let swatch_y = row_bottom + (LEGEND_ROW - LEGEND_SWATCH) / 2.0;
        canvas.fill_rect(legend_x, swatch_y, LEGEND_SWATCH, LEGEND_SWATCH, slice.color);
        canvas.stroke_rect(
            legend_x,
            swatch_y,
            LEGEND_SWATCH,
            LEGEND_SWATCH,
            0.25,
            BORDER_COLOR,
        );
        canvas.text(
            Font::Regular,
            BODY_SIZE,
            legend_x + LEGEND_SWATCH + SPACER,
            swatch_y + 1.5,
            Align::Left,
            TEXT_COLOR,
            &slice.legend(),
        )?;
    }

    canvas.advance(diameter + 2.0 * SPACER);
    Ok(())
}
