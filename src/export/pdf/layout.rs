//! A4 page canvas with a top-down flow cursor

use std::fmt::Write as _;

use super::fonts::{encode_win_ansi, Font};
use crate::error::FinanthropeResult;
use crate::export::chart::{PathOp, Point, Rgb};

/// A4 width in points
pub const PAGE_WIDTH: f64 = 595.28;
/// A4 height in points
pub const PAGE_HEIGHT: f64 = 841.89;
/// 18 mm margins
pub const MARGIN: f64 = 51.02;
/// Usable width between the margins
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Accumulates content streams page by page
///
/// `cursor` is the y coordinate (PDF space, origin bottom-left) of the top of
/// the next block; it moves down as content is placed.
#[derive(Debug)]
pub struct Canvas {
    pages: Vec<Vec<u8>>,
    current: Vec<u8>,
    cursor: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            cursor: PAGE_HEIGHT - MARGIN,
        }
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Vertical space left above the bottom margin
    pub fn remaining(&self) -> f64 {
        self.cursor - MARGIN
    }

    /// Move the cursor down
    pub fn advance(&mut self, height: f64) {
        self.cursor -= height;
    }

    pub fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.cursor = PAGE_HEIGHT - MARGIN;
    }

    /// Start a new page unless `height` still fits; returns whether it broke
    pub fn ensure(&mut self, height: f64) -> bool {
        if height > self.remaining() && !self.page_is_blank() {
            self.new_page();
            true
        } else {
            false
        }
    }

    fn page_is_blank(&self) -> bool {
        self.current.is_empty()
    }

    /// Place one line of text with its baseline at `baseline`
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        font: Font,
        size: f64,
        x: f64,
        baseline: f64,
        align: Align,
        color: Rgb,
        text: &str,
    ) -> FinanthropeResult<()> {
        let encoded = encode_win_ansi(text)?;
        let width = font.text_width(text, size);
        let x = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        let (r, g, b) = color.unit();

        let mut op = format!(
            "BT /{} {:.2} Tf {:.3} {:.3} {:.3} rg {:.2} {:.2} Td (",
            font.resource(),
            size,
            r,
            g,
            b,
            x,
            baseline
        )
        .into_bytes();
        op.extend(escape_literal(&encoded));
        op.extend_from_slice(b") Tj ET\n");
        self.current.extend(op);
        Ok(())
    }

    /// A line of flowing text: place it below the cursor and advance by `leading`
    pub fn paragraph(
        &mut self,
        font: Font,
        size: f64,
        leading: f64,
        align: Align,
        color: Rgb,
        text: &str,
    ) -> FinanthropeResult<()> {
        self.ensure(leading);
        let x = match align {
            Align::Left => MARGIN,
            Align::Center => PAGE_WIDTH / 2.0,
            Align::Right => PAGE_WIDTH - MARGIN,
        };
        let baseline = self.cursor - size;
        self.text(font, size, x, baseline, align, color, text)?;
        self.advance(leading);
        Ok(())
    }

    /// Filled rectangle; `(x, y)` is the bottom-left corner
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        let (r, g, b) = color.unit();
        self.push(format!(
            "{:.3} {:.3} {:.3} rg {:.2} {:.2} {:.2} {:.2} re f\n",
            r, g, b, x, y, width, height
        ));
    }

    /// Stroked rectangle outline
    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, line: f64, color: Rgb) {
        let (r, g, b) = color.unit();
        self.push(format!(
            "{:.3} {:.3} {:.3} RG {:.2} w {:.2} {:.2} {:.2} {:.2} re S\n",
            r, g, b, line, x, y, width, height
        ));
    }

    /// Straight line segment
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), line: f64, color: Rgb) {
        let (r, g, b) = color.unit();
        self.push(format!(
            "{:.3} {:.3} {:.3} RG {:.2} w {:.2} {:.2} m {:.2} {:.2} l S\n",
            r, g, b, line, from.0, from.1, to.0, to.1
        ));
    }

    /// Fill a chart outline centred at `origin`, optionally stroking its edge
    pub fn path(
        &mut self,
        origin: (f64, f64),
        ops: &[PathOp],
        fill: Option<Rgb>,
        stroke: Option<(Rgb, f64)>,
    ) {
        let at = |p: &Point| (origin.0 + p.x, origin.1 + p.y);
        let mut out = String::new();

        if let Some(color) = fill {
            let (r, g, b) = color.unit();
            let _ = write!(out, "{:.3} {:.3} {:.3} rg ", r, g, b);
        }
        if let Some((color, width)) = stroke {
            let (r, g, b) = color.unit();
            let _ = write!(out, "{:.3} {:.3} {:.3} RG {:.2} w ", r, g, b, width);
        }

        for op in ops {
            let _ = match op {
                PathOp::MoveTo(p) => {
                    let (x, y) = at(p);
                    write!(out, "{:.3} {:.3} m ", x, y)
                }
                PathOp::LineTo(p) => {
                    let (x, y) = at(p);
                    write!(out, "{:.3} {:.3} l ", x, y)
                }
                PathOp::CurveTo(c1, c2, p) => {
                    let (x1, y1) = at(c1);
                    let (x2, y2) = at(c2);
                    let (x, y) = at(p);
                    write!(
                        out,
                        "{:.3} {:.3} {:.3} {:.3} {:.3} {:.3} c ",
                        x1, y1, x2, y2, x, y
                    )
                }
                PathOp::Close => write!(out, "h "),
            };
        }

        out.push_str(match (fill.is_some(), stroke.is_some()) {
            (true, true) => "B\n",
            (true, false) => "f\n",
            (false, true) => "S\n",
            (false, false) => "n\n",
        });
        self.push(out);
    }

    fn push(&mut self, op: String) {
        self.current.extend_from_slice(op.as_bytes());
    }

    /// Content streams of every page, the current one included
    pub fn finish(mut self) -> Vec<Vec<u8>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

/// Escape the delimiters of a PDF literal string
fn escape_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &b in bytes {
        if matches!(b, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(b);
    }
    out
}
