//! Printable document model.
//!
//! Projects a validated, fully computed [`Invoice`](crate::core::Invoice)
//! into an ordered tree of typed blocks for a fixed one-page A4 layout.
//! Pixel-level rendering belongs to the consumer; this module fixes the
//! content, the section order, and the column order.
//!
//! # Section order
//!
//! | Section | Block |
//! |---------|-------|
//! | Title + metadata | [`Block::Heading`], [`Block::KeyValues`] |
//! | Issuer details | [`Block::KeyValues`] |
//! | Bill-to details | [`Block::KeyValues`] |
//! | Itemized table | [`Block::Table`] |
//! | Totals | [`Block::Totals`] |
//! | Payment details | [`Block::KeyValues`] |

mod project;
mod text;

pub use project::project;
pub use text::render_text;

use serde::{Deserialize, Serialize};

/// An ordered, structured representation of printable content, independent
/// of final pixel layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub layout: Layout,
    pub blocks: Vec<Block>,
}

/// Fixed page layout parameters for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Page size name (always "A4").
    pub page_size: String,
    /// Uniform page margin in points.
    pub margin: u32,
    /// Regular font family.
    pub font_regular: String,
    /// Bold font family, used for table headers, titles, and the grand total.
    pub font_bold: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            page_size: "A4".into(),
            margin: 30,
            font_regular: "Helvetica".into(),
            font_bold: "Helvetica-Bold".into(),
        }
    }
}

/// One typed content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Document title.
    Heading(String),
    /// Labelled values, optionally under a bold title line.
    KeyValues {
        title: Option<String>,
        pairs: Vec<KeyValue>,
    },
    /// Itemized table; the header row is always rendered bold.
    Table {
        columns: Vec<Column>,
        rows: Vec<Vec<String>>,
    },
    /// Monetary summary lines, rendered right-aligned.
    Totals(Vec<TotalsLine>),
    /// Free text.
    Text(String),
}

/// A label/value pair. An empty label renders the value alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub label: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A table column with its header and relative width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub header: String,
    /// Relative flex width within the table.
    pub width: u32,
}

impl Column {
    pub fn new(header: impl Into<String>, width: u32) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// One line of the totals block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsLine {
    pub label: String,
    /// Display-formatted amount, e.g. "£600.00".
    pub amount: String,
    /// The grand total line is always bold.
    pub bold: bool,
}
