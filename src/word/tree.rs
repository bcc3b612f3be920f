//! In-memory WordprocessingML body: blocks, runs, and a single table

use crate::config::TableBorders;
use crate::error::{ReportError, ReportResult};

/// Run-level formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunFormat {
    /// Font size in half-points; `None` inherits the document default
    pub size_half_points: Option<u32>,
    pub bold: bool,
}

impl RunFormat {
    pub fn has_properties(&self) -> bool {
        self.bold || self.size_half_points.is_some()
    }
}

/// A run of uniformly formatted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub format: RunFormat,
    pub text: String,
}

/// A paragraph holding zero or more runs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Paragraph with exactly one run
    pub fn with_run(text: impl Into<String>, format: RunFormat) -> Self {
        Self {
            runs: vec![Run {
                format,
                text: text.into(),
            }],
        }
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Table cell: exactly one paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub paragraph: Paragraph,
}

impl TableCell {
    pub fn text(&self) -> String {
        self.paragraph.text()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// `w:tblPr` contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableProperties {
    /// Width in fiftieths of a percent of the page
    pub width_fiftieths_pct: u32,
    pub style_name: String,
    pub borders: TableBorders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub properties: TableProperties,
    /// First row is the header row when present
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(properties: TableProperties) -> Self {
        Self {
            properties,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell count of the widest row (the grid width)
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }
}

/// Body-level node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Paragraph),
    Paragraph(Paragraph),
    Table(Table),
}

/// Document body: ordered blocks, at most one of them a table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentTree {
    blocks: Vec<Block>,
}

impl DocumentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block. A second table is rejected.
    pub fn push(&mut self, block: Block) -> ReportResult<()> {
        if matches!(block, Block::Table(_)) && self.table().is_some() {
            return Err(ReportError::Structure(
                "a document body holds at most one table".to_string(),
            ));
        }
        self.blocks.push(block);
        Ok(())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn table(&self) -> Option<&Table> {
        self.blocks.iter().find_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
