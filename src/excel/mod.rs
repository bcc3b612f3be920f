//! Excel (.xlsx) export
//!
//! - `tree`: sheet collection, worksheet parts, rows and string cells
//! - `builder`: dataset → sheet tree
//! - `exporter`: sheet tree → SpreadsheetML package

pub mod builder;
mod exporter;
pub mod tree;

pub use builder::{build_spreadsheet, SpreadsheetBuilder};
pub use exporter::XlsxPackageWriter;
pub use tree::{
    column_index_to_letter, CellDataType, PartId, SheetCell, SheetDescriptor, SheetRow, SheetTree,
    Worksheet,
};
