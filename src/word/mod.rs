//! Word (.docx) report generation
//!
//! - `tree`: typed document body (headings, paragraphs, one table)
//! - `text`: single-run paragraph/heading constructors
//! - `builder`: dataset + title + blurb → document tree
//! - `exporter`: document tree → WordprocessingML package (`docx-rs`)

pub mod builder;
mod exporter;
pub mod text;
pub mod tree;

pub use builder::{build_word_document, WordDocumentBuilder};
pub use exporter::DocxPackageWriter;
pub use text::{make_heading, make_paragraph, styled_heading, styled_paragraph};
pub use tree::{Block, DocumentTree, Paragraph, Run, RunFormat, Table, TableCell, TableRow};
