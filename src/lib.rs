//! Report Forge - tabular data to Word and Excel reports
//!
//! A [`TabularDataset`] (named table, typed columns, rows) is converted into
//! two in-memory trees:
//!
//! - a Word document tree: bold heading, body paragraph, bordered table
//!   (or a "no data" notice), see [`word`]
//! - a spreadsheet tree: one sheet named after the table, header row first,
//!   every cell stored as a string, see [`excel`]
//!
//! Each tree is handed to a [`writer::PackageWriter`] which serializes it to
//! a `.docx` or `.xlsx` file.
//!
//! # Example
//!
//! ```no_run
//! use report_forge::excel::XlsxPackageWriter;
//! use report_forge::report::ReportRequest;
//! use report_forge::word::DocxPackageWriter;
//! use report_forge::{sample, ReportExporter};
//! use std::path::Path;
//!
//! let dataset = sample::sample_dataset(chrono::Local::now().naive_local())?;
//! let request = ReportRequest {
//!     title: "My Report",
//!     blurb: "Monthly figures",
//!     word_path: Path::new("My Report.docx"),
//!     excel_path: Path::new("My Report.xlsx"),
//! };
//!
//! ReportExporter::default().export_all(
//!     &request,
//!     &dataset,
//!     &DocxPackageWriter::new(),
//!     &XlsxPackageWriter::new(),
//! )?;
//! # Ok::<(), report_forge::error::ReportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod parser;
pub mod report;
pub mod sample;
pub mod types;
pub mod word;
pub mod writer;

// Re-export commonly used types
pub use config::{FormattingPolicy, NullCellPolicy};
pub use error::{ReportError, ReportResult};
pub use report::ReportExporter;
pub use types::{CellValue, Column, ColumnType, DataRow, TabularDataset};
