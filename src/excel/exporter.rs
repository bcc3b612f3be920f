//! Excel exporter implementation - sheet tree → .xlsx package

use super::tree::{CellDataType, SheetTree};
use crate::error::{ReportError, ReportResult};
use crate::writer::{write_atomically, PackageWriter};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

/// Writes sheet trees as SpreadsheetML packages via `rust_xlsxwriter`
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxPackageWriter;

impl XlsxPackageWriter {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the complete workbook in memory
    pub fn to_bytes(&self, tree: &SheetTree) -> ReportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        // Every cell gets the text format; an unformatted blank is not written
        let text = Format::new().set_num_format("@");

        for (descriptor, sheet) in tree.iter() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&descriptor.name).map_err(|e| {
                ReportError::Export(format!(
                    "Failed to set worksheet name '{}': {}",
                    descriptor.name, e
                ))
            })?;

            for row in &sheet.rows {
                for cell in &row.cells {
                    match cell.data_type {
                        CellDataType::String => {
                            // tree rows are 1-based, the worksheet API is 0-based
                            let written = if cell.value.is_empty() {
                                worksheet.write_blank(cell.row - 1, cell.column, &text)
                            } else {
                                worksheet.write_string_with_format(
                                    cell.row - 1,
                                    cell.column,
                                    &cell.value,
                                    &text,
                                )
                            };
                            written.map_err(|e| {
                                ReportError::Export(format!(
                                    "Failed to write cell {}: {}",
                                    cell.reference(),
                                    e
                                ))
                            })?;
                        }
                    }
                }
            }
        }

        workbook
            .save_to_buffer()
            .map_err(|e| ReportError::Export(format!("Failed to assemble Excel file: {}", e)))
    }
}

impl PackageWriter<SheetTree> for XlsxPackageWriter {
    fn write_package(&self, tree: SheetTree, path: &Path) -> ReportResult<()> {
        let bytes = self.to_bytes(&tree)?;
        write_atomically(path, &bytes)?;
        info!(path = %path.display(), sheets = tree.sheets().len(), "excel package saved");
        Ok(())
    }
}
