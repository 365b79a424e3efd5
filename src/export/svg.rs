//! Standalone SVG rendering of the expense breakdown chart

use std::fmt::Write as _;

use svg::node::element::{Circle, Path, Rectangle, Text};
use svg::Document;

use super::chart::{DonutChart, PathOp, BORDER_COLOR, TEXT_COLOR};
use crate::error::FinanthropeResult;
use crate::models::Locale;
use crate::reports::BudgetSnapshot;

/// Download name of the chart image
pub const SVG_FILE_NAME: &str = "finanthrope_chart.svg";

/// MIME type of the chart image
pub const SVG_MIME: &str = "image/svg+xml";

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const RADIUS: f64 = 140.0;
const CENTER: (f64, f64) = (180.0, 220.0);
const LEGEND_X: f64 = 360.0;
const LEGEND_ROW: f64 = 28.0;

/// Render the chart of a snapshot, or `None` when there are no expenses
pub fn chart_svg(snapshot: &BudgetSnapshot, locale: Locale) -> FinanthropeResult<Option<String>> {
    match DonutChart::from_totals(snapshot.totals(), locale)? {
        Some(chart) => Ok(Some(render_chart(&chart)?.to_string())),
        None => Ok(None),
    }
}

/// Render a chart as an SVG document
pub fn render_chart(chart: &DonutChart) -> FinanthropeResult<Document> {
    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .add(
            Rectangle::new()
                .set("width", WIDTH)
                .set("height", HEIGHT)
                .set("fill", "white"),
        )
        .add(
            Text::new()
                .set("x", WIDTH / 2.0)
                .set("y", 36.0)
                .set("text-anchor", "middle")
                .set("font-family", "Helvetica, Arial, sans-serif")
                .set("font-size", 18.0)
                .set("fill", TEXT_COLOR.to_hex())
                .add(svg::node::Text::new(chart.title)),
        );

    for slice in chart.visible_slices() {
        let outline = slice.outline(RADIUS)?;
        document = document.add(
            Path::new()
                .set("d", path_data(&outline))
                .set("fill", slice.color.to_hex())
                .set("stroke", "white")
                .set("stroke-width", 2.0),
        );
    }

    document = document.add(
        Circle::new()
            .set("cx", CENTER.0)
            .set("cy", CENTER.1)
            .set("r", RADIUS)
            .set("fill", "none")
            .set("stroke", BORDER_COLOR.to_hex())
            .set("stroke-width", 1.4),
    );

    let legend_top = CENTER.1 - LEGEND_ROW * chart.slices.len() as f64 / 2.0;
    for (i, slice) in chart.slices.iter().enumerate() {
        let y = legend_top + LEGEND_ROW * i as f64;
        document = document
            .add(
                Rectangle::new()
                    .set("x", LEGEND_X)
                    .set("y", y)
                    .set("width", 14.0)
                    .set("height", 14.0)
                    .set("fill", slice.color.to_hex()),
            )
            .add(
                Text::new()
                    .set("x", LEGEND_X + 22.0)
                    .set("y", y + 12.0)
                    .set("font-family", "Helvetica, Arial, sans-serif")
                    .set("font-size", 13.0)
                    .set("fill", TEXT_COLOR.to_hex())
                    .add(svg::node::Text::new(slice.legend())),
            );
    }

    Ok(document)
}

/// SVG path data with the chart's y axis flipped onto the page
fn path_data(ops: &[PathOp]) -> String {
    let map = |x: f64, y: f64| (CENTER.0 + x, CENTER.1 - y);
    let mut d = String::new();
    for op in ops {
        // Writing to a String cannot fail
        let _ = match op {
            PathOp::MoveTo(p) => {
                let (x, y) = map(p.x, p.y);
                write!(d, "M{:.3},{:.3} ", x, y)
            }
            PathOp::LineTo(p) => {
                let (x, y) = map(p.x, p.y);
                write!(d, "L{:.3},{:.3} ", x, y)
            }
            PathOp::CurveTo(c1, c2, p) => {
                let (x1, y1) = map(c1.x, c1.y);
                let (x2, y2) = map(c2.x, c2.y);
                let (x, y) = map(p.x, p.y);
                write!(
                    d,
                    "C{:.3},{:.3} {:.3},{:.3} {:.3},{:.3} ",
                    x1, y1, x2, y2, x, y
                )
            }
            PathOp::Close => write!(d, "Z"),
        };
    }
    d.trim_end().to_string()
}
