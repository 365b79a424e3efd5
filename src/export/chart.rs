//! Expense breakdown donut chart
//!
//! Geometry only: slices, colours and arc outlines in unit coordinates
//! (y pointing up, angles in radians, counter-clockwise from the top). The
//! PDF and SVG renderers map these onto their own coordinate systems.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::catalog::strings;
use crate::error::{FinanthropeError, FinanthropeResult};
use crate::models::{Locale, Section};
use crate::reports::Totals;

/// Slice colours, one per expense section
pub const CHART_PALETTE: [Rgb; 5] = [
    Rgb(0xFD, 0xE2, 0xE4),
    Rgb(0xFA, 0xD2, 0xE1),
    Rgb(0xE2, 0xEC, 0xE9),
    Rgb(0xBE, 0xE1, 0xE6),
    Rgb(0xCD, 0xDA, 0xFD),
];

/// Body text colour
pub const TEXT_COLOR: Rgb = Rgb(0x1F, 0x29, 0x37);

/// Outer ring and table border colour
pub const BORDER_COLOR: Rgb = Rgb(0xCD, 0xDA, 0xFD);

/// Table header background
pub const HEADER_COLOR: Rgb = Rgb(0xDF, 0xE7, 0xFD);

/// Inner radius as a fraction of the outer radius
pub const INNER_RATIO: f64 = 0.64;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB` notation
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Components in `0.0..=1.0`
    pub fn unit(&self) -> (f64, f64, f64) {
        (
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0,
        )
    }
}

/// A point in chart coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    fn polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Outline drawing operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    Close,
}

/// One expense group of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub section: Section,
    pub label: &'static str,
    pub fraction: f64,
    pub percent: u32,
    pub color: Rgb,
    /// Start angle in radians
    pub start_angle: f64,
    /// Angular extent in radians
    pub sweep: f64,
}

impl ChartSlice {
    /// Whether the slice has an arc to draw
    pub fn is_visible(&self) -> bool {
        self.sweep > 0.0
    }

    /// Legend text, e.g. `Everyday expenses — 100%`
    pub fn legend(&self) -> String {
        format!("{} — {}%", self.label, self.percent)
    }

    /// Outline of the slice for the given outer radius
    pub fn outline(&self, radius: f64) -> FinanthropeResult<Vec<PathOp>> {
        annular_sector(self.start_angle, self.sweep, radius, radius * INNER_RATIO)
    }
}

/// The expense breakdown chart
#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub title: &'static str,
    pub slices: Vec<ChartSlice>,
}

impl DonutChart {
    /// Build the chart, or `None` when there are no expenses
    pub fn from_totals(totals: &Totals, locale: Locale) -> FinanthropeResult<Option<Self>> {
        if totals.total_expenses <= 0.0 {
            return Ok(None);
        }

        let text = strings(locale);
        let mut angle = FRAC_PI_2;
        let mut slices = Vec::with_capacity(CHART_PALETTE.len());

        for (share, color) in totals.breakdown().into_iter().zip(CHART_PALETTE) {
            if !share.fraction.is_finite() {
                return Err(FinanthropeError::Export(format!(
                    "Chart construction failed: invalid share for {}",
                    share.section
                )));
            }
            let sweep = share.fraction * TAU;
            slices.push(ChartSlice {
                section: share.section,
                label: text.section_title(share.section),
                fraction: share.fraction,
                percent: share.percent(),
                color,
                start_angle: angle,
                sweep,
            });
            angle += sweep;
        }

        Ok(Some(Self {
            title: text.pdf_chart,
            slices,
        }))
    }

    /// Slices with a non-empty arc
    pub fn visible_slices(&self) -> impl Iterator<Item = &ChartSlice> {
        self.slices.iter().filter(|s| s.is_visible())
    }
}

/// Outline of a ring sector: outer arc forward, inner arc back
///
/// Arcs are split into pieces of at most a quarter turn, each approximated
/// by one cubic Bézier curve.
pub fn annular_sector(
    start: f64,
    sweep: f64,
    outer: f64,
    inner: f64,
) -> FinanthropeResult<Vec<PathOp>> {
    if !(start.is_finite() && sweep.is_finite() && outer.is_finite() && inner.is_finite()) {
        return Err(FinanthropeError::Export(
            "Chart construction failed: non-finite geometry".into(),
        ));
    }

    let end = start + sweep;
    let mut ops = vec![PathOp::MoveTo(Point::polar(outer, start))];
    arc(&mut ops, outer, start, end);
    ops.push(PathOp::LineTo(Point::polar(inner, end)));
    arc(&mut ops, inner, end, start);
    ops.push(PathOp::Close);

    let finite = ops.iter().all(|op| match op {
        PathOp::MoveTo(p) | PathOp::LineTo(p) => p.is_finite(),
        PathOp::CurveTo(a, b, c) => a.is_finite() && b.is_finite() && c.is_finite(),
        PathOp::Close => true,
    });
    if !finite {
        return Err(FinanthropeError::Export(
            "Chart construction failed: non-finite geometry".into(),
        ));
    }

    Ok(ops)
}

/// Outline of a full circle
pub fn circle(radius: f64) -> Vec<PathOp> {
    let mut ops = vec![PathOp::MoveTo(Point::polar(radius, 0.0))];
    arc(&mut ops, radius, 0.0, TAU);
    ops.push(PathOp::Close);
    ops
}

fn arc(ops: &mut Vec<PathOp>, radius: f64, from: f64, to: f64) {
    let total = to - from;
    let pieces = (total.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = total / pieces as f64;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    for i in 0..pieces {
        let a0 = from + step * i as f64;
        let a1 = a0 + step;
        let p0 = Point::polar(radius, a0);
        let p3 = Point::polar(radius, a1);
        let c1 = Point {
            x: p0.x - k * radius * a0.sin(),
            y: p0.y + k * radius * a0.cos(),
        };
        let c2 = Point {
            x: p3.x + k * radius * a1.sin(),
            y: p3.y - k * radius * a1.cos(),
        };
        ops.push(PathOp::CurveTo(c1, c2, p3));
    }
}
