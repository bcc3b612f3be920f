//! In-memory SpreadsheetML workbook: sheet descriptors and their row data

use crate::error::{ReportError, ReportResult};
use std::fmt;

/// Last row index Excel can address (1-based)
pub const MAX_ROWS: u32 = 1_048_576;
/// Number of columns Excel can address
pub const MAX_COLUMNS: u16 = 16_384;

/// Convert a zero-based column index to its letter name
///
/// Examples:
/// - 0 → A
/// - 25 → Z
/// - 26 → AA
pub fn column_index_to_letter(index: usize) -> String {
    let mut result = String::new();
    let mut idx = index;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}

/// Cell data type tag. Every value is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellDataType {
    #[default]
    String,
}

impl CellDataType {
    /// SpreadsheetML `t` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            CellDataType::String => "str",
        }
    }
}

/// A typed cell at an explicit position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCell {
    /// 1-based row number
    pub row: u32,
    /// 0-based column index
    pub column: u16,
    pub data_type: CellDataType,
    pub value: String,
}

impl SheetCell {
    pub fn string(row: u32, column: u16, value: impl Into<String>) -> Self {
        Self {
            row,
            column,
            data_type: CellDataType::String,
            value: value.into(),
        }
    }

    /// A1-style reference, e.g. `C11`
    pub fn reference(&self) -> String {
        format!("{}{}", column_index_to_letter(self.column as usize), self.row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based row number
    pub index: u32,
    pub cells: Vec<SheetCell>,
}

impl SheetRow {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            cells: Vec::new(),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.value.as_str()).collect()
    }
}

/// Opaque reference to a worksheet part
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartId(String);

impl PartId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workbook-level entry naming one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetDescriptor {
    pub sheet_id: u32,
    pub part: PartId,
    pub name: String,
}

/// Row data stored in one worksheet part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    pub part: PartId,
    pub rows: Vec<SheetRow>,
}

impl Worksheet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Sheet collection plus the worksheet parts it refers to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetTree {
    sheets: Vec<SheetDescriptor>,
    worksheets: Vec<Worksheet>,
    parts_allocated: u32,
}

impl SheetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new, empty worksheet part and return its id
    pub fn add_worksheet_part(&mut self) -> PartId {
        self.parts_allocated += 1;
        let part = PartId(format!("rId{}", self.parts_allocated));
        self.worksheets.push(Worksheet {
            part: part.clone(),
            rows: Vec::new(),
        });
        part
    }

    /// Identifier for the next sheet: one past the largest in use, never a gap
    pub fn next_sheet_id(&self) -> ReportResult<u32> {
        match self.sheets.iter().map(|s| s.sheet_id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                ReportError::Structure(format!("sheet id {} is the largest possible", max))
            }),
        }
    }

    /// Check that a sheet `sheet_id` called `name` could be registered.
    /// Ids and names must be unique (names case-insensitively, as Excel
    /// compares them).
    pub fn check_new_sheet(&self, sheet_id: u32, name: &str) -> ReportResult<()> {
        if sheet_id == 0 {
            return Err(ReportError::Structure("sheet ids start at 1".to_string()));
        }
        if self.sheets.iter().any(|s| s.sheet_id == sheet_id) {
            return Err(ReportError::Structure(format!(
                "sheet id {} already in use",
                sheet_id
            )));
        }
        if self.sheets.iter().any(|s| s.name.eq_ignore_ascii_case(name)) {
            return Err(ReportError::Structure(format!(
                "sheet name '{}' already in use",
                name
            )));
        }
        Ok(())
    }

    /// Add a sheet descriptor; the part must already exist
    pub fn register_sheet(&mut self, descriptor: SheetDescriptor) -> ReportResult<()> {
        self.check_new_sheet(descriptor.sheet_id, &descriptor.name)?;
        if self.worksheet(&descriptor.part).is_none() {
            return Err(ReportError::Structure(format!(
                "unknown worksheet part '{}'",
                descriptor.part
            )));
        }
        self.sheets.push(descriptor);
        Ok(())
    }

    /// Allocated worksheet parts, registered or not
    pub fn worksheets(&self) -> &[Worksheet] {
        &self.worksheets
    }

    pub fn sheets(&self) -> &[SheetDescriptor] {
        &self.sheets
    }

    pub fn worksheet(&self, part: &PartId) -> Option<&Worksheet> {
        self.worksheets.iter().find(|w| &w.part == part)
    }

    pub fn worksheet_mut(&mut self, part: &PartId) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|w| &w.part == part)
    }

    /// Worksheet of the sheet called `name`
    pub fn sheet(&self, name: &str) -> Option<&Worksheet> {
        let descriptor = self.sheets.iter().find(|s| s.name == name)?;
        self.worksheet(&descriptor.part)
    }

    /// Sheets in registration order, paired with their row data
    pub fn iter(&self) -> impl Iterator<Item = (&SheetDescriptor, &Worksheet)> {
        self.sheets
            .iter()
            .filter_map(move |d| self.worksheet(&d.part).map(|w| (d, w)))
    }
}
