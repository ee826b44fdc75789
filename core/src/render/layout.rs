//! Cursor-based placement of text cells on a single Letter page.
//!
//! Coordinates are inches with the origin at the top-left corner and `y`
//! growing downwards. Font sizes are points.

use crate::types::DocumentRecord;

pub const POINTS_PER_INCH: f32 = 72.0;
pub const PAGE_WIDTH: f32 = 8.5;
pub const PAGE_HEIGHT: f32 = 11.0;
/// One centimetre, the left and top page margin.
pub const PAGE_MARGIN: f32 = 28.35 / POINTS_PER_INCH;
/// Horizontal inset of text inside its cell.
pub const CELL_MARGIN: f32 = PAGE_MARGIN / 10.0;

const CELL_HEIGHT: f32 = 0.3;
const HEADER_CELL_WIDTH: f32 = 1.25;
const COMPANY_CELL_WIDTH: f32 = 2.5;
const HEADER_LINE: f32 = 0.5;
const COMPANY_LINE: f32 = 0.18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

impl FontFace {
    pub fn base_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub face: FontFace,
    pub size: f32,
}

impl Font {
    pub const fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }
}

/// A positioned, single-line text cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub font: Font,
    pub text: String,
}

impl Cell {
    /// Left edge of the text, in inches.
    pub fn text_x(&self) -> f32 {
        self.x + CELL_MARGIN
    }

    /// Text baseline, vertically centred in the cell, in inches from the top.
    pub fn baseline(&self) -> f32 {
        self.y + self.height / 2.0 + 0.3 * self.font.size / POINTS_PER_INCH
    }
}

/// The finished content of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub cells: Vec<Cell>,
}

impl PageLayout {
    /// Cells grouped by row, top to bottom, each row left to right.
    pub fn rows(&self) -> Vec<Vec<&Cell>> {
        let mut rows: Vec<Vec<&Cell>> = Vec::new();
        for cell in &self.cells {
            match rows.last_mut() {
                Some(row) if row[0].y == cell.y => row.push(cell),
                _ => rows.push(vec![cell]),
            }
        }
        rows
    }
}

/// Cursor and font state for one render; discarded once the page is built.
#[derive(Debug)]
pub struct LayoutContext {
    x: f32,
    y: f32,
    font: Font,
    cells: Vec<Cell>,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            x: PAGE_MARGIN,
            y: PAGE_MARGIN,
            font: Font::new(FontFace::Helvetica, 12.0),
            cells: Vec::new(),
        }
    }

    pub fn set_font(&mut self, face: FontFace, size: f32) {
        self.font = Font::new(face, size);
    }

    /// Place a cell at the cursor and move the cursor right by `width`.
    pub fn cell(&mut self, width: f32, height: f32, text: impl Into<String>) {
        self.cells.push(Cell {
            x: self.x,
            y: self.y,
            width,
            height,
            font: self.font,
            text: text.into(),
        });
        self.x += width;
    }

    /// Return to the left margin and move down by `height`.
    pub fn line_break(&mut self, height: f32) {
        self.x = PAGE_MARGIN;
        self.y += height;
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn finish(self) -> PageLayout {
        PageLayout {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            cells: self.cells,
        }
    }
}

fn padded(value: impl std::fmt::Display) -> String {
    format!(" {value}")
}

/// Lay out the header band and the three company rows.
pub fn layout(record: &DocumentRecord) -> PageLayout {
    let company = &record.company;
    let mut ctx = LayoutContext::new();

    ctx.set_font(FontFace::HelveticaBold, 24.0);
    ctx.cell(HEADER_CELL_WIDTH, CELL_HEIGHT, record.kind.as_str());
    ctx.set_font(FontFace::Helvetica, 20.0);
    ctx.cell(HEADER_CELL_WIDTH, CELL_HEIGHT, padded(record.id));

    ctx.line_break(HEADER_LINE);
    ctx.set_font(FontFace::Helvetica, 14.0);
    ctx.cell(COMPANY_CELL_WIDTH, CELL_HEIGHT, padded(&company.name));
    ctx.cell(COMPANY_CELL_WIDTH, CELL_HEIGHT, padded(&company.phone));

    ctx.line_break(COMPANY_LINE);
    ctx.cell(COMPANY_CELL_WIDTH, CELL_HEIGHT, padded(&company.address1));
    ctx.cell(COMPANY_CELL_WIDTH, CELL_HEIGHT, padded(&company.email));

    ctx.line_break(COMPANY_LINE);
    ctx.cell(COMPANY_CELL_WIDTH, CELL_HEIGHT, padded(&company.address2));
    ctx.cell(COMPANY_CELL_WIDTH, CELL_HEIGHT, padded(&company.website));

    ctx.finish()
}
