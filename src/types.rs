use crate::error::{ReportError, ReportResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text form used for date-time cells in both exports
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

//==============================================================================
// Columns
//==============================================================================

/// Declared type of a dataset column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free text
    Text,
    /// Decimal number
    Number,
    /// Date-time
    Date,
}

impl ColumnType {
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Text => "Text",
            ColumnType::Number => "Number",
            ColumnType::Date => "Date",
        }
    }
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

//==============================================================================
// Values
//==============================================================================

/// A single cell value: absent, or one scalar
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "Null",
            CellValue::Text(_) => "Text",
            CellValue::Number(_) => "Number",
            CellValue::Date(_) => "Date",
        }
    }

    /// Whether this value may be stored in a column of `kind`
    pub fn fits(&self, kind: ColumnType) -> bool {
        matches!(
            (self, kind),
            (CellValue::Null, _)
                | (CellValue::Text(_), ColumnType::Text)
                | (CellValue::Number(_), ColumnType::Number)
                | (CellValue::Date(_), ColumnType::Date)
        )
    }

    /// Natural text form of the value; null renders as the empty string
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            // f64's Display is the shortest round-trip form: 100.0 -> "100"
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d.format(DATE_TIME_FORMAT)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(d: NaiveDateTime) -> Self {
        CellValue::Date(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Null, Into::into)
    }
}

//==============================================================================
// Dataset
//==============================================================================

/// One row: exactly one value slot per dataset column, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    values: Vec<CellValue>,
}

impl DataRow {
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn get(&self, column: usize) -> Option<&CellValue> {
        self.values.get(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An in-memory table: ordered typed columns plus ordered rows.
///
/// Builders only ever borrow a dataset. The shape invariant (every row has
/// one slot per column) is enforced here, at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDataset {
    name: String,
    columns: Vec<Column>,
    rows: Vec<DataRow>,
}

impl TabularDataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create a dataset with its columns declared up front
    pub fn with_columns(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Declare another column. Columns are frozen once the first row exists.
    pub fn add_column(&mut self, column: Column) -> ReportResult<()> {
        if !self.rows.is_empty() {
            return Err(ReportError::Structure(format!(
                "cannot add column '{}' to dataset '{}' after rows were added",
                column.name, self.name
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Append a row, checking slot count and value types against the columns
    pub fn add_row(&mut self, values: Vec<CellValue>) -> ReportResult<()> {
        let row = self.rows.len();
        if values.len() != self.columns.len() {
            return Err(ReportError::RowShape {
                row,
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        for (column, value) in self.columns.iter().zip(&values) {
            if !value.fits(column.kind) {
                return Err(ReportError::ValueType {
                    row,
                    column: column.name.clone(),
                    expected: column.kind.type_name(),
                    actual: value.type_name(),
                });
            }
        }
        self.rows.push(DataRow { values });
        Ok(())
    }

    /// Table name; also the spreadsheet sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn value(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn people() -> TabularDataset {
        TabularDataset::with_columns(
            "people",
            vec![
                Column::new("Name", ColumnType::Text),
                Column::new("Age", ColumnType::Number),
            ],
        )
    }

    #[test]
    fn test_number_text_has_no_trailing_fraction() {
        assert_eq!(CellValue::Number(100.0).to_text(), "100");
        assert_eq!(CellValue::Number(2.5).to_text(), "2.5");
        assert_eq!(CellValue::Number(-0.25).to_text(), "-0.25");
    }

    #[test]
    fn test_date_text() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(CellValue::Date(d).to_text(), "2025-03-09 14:05:00");
    }

    #[test]
    fn test_null_text_is_empty() {
        assert_eq!(CellValue::Null.to_text(), "");
        assert_eq!(CellValue::from(None::<f64>), CellValue::Null);
    }

    #[test]
    fn test_add_row_accepts_nulls_in_any_column() {
        let mut ds = people();
        ds.add_row(vec![CellValue::Null, CellValue::Null]).unwrap();
        assert_eq!(ds.row_count(), 1);
        assert!(ds.value(0, 1).unwrap().is_null());
    }

    #[test]
    fn test_add_row_rejects_wrong_width() {
        let mut ds = people();
        let err = ds.add_row(vec!["Ann".into()]).unwrap_err();
        assert!(matches!(
            err,
            ReportError::RowShape {
                row: 0,
                expected: 2,
                actual: 1
            }
        ));
        assert_eq!(ds.row_count(), 0);
    }

    #[test]
    fn test_add_row_rejects_wrong_type() {
        let mut ds = people();
        let err = ds.add_row(vec!["Ann".into(), "forty".into()]).unwrap_err();
        match err {
            ReportError::ValueType {
                column, expected, ..
            } => {
                assert_eq!(column, "Age");
                assert_eq!(expected, "Number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_columns_frozen_after_first_row() {
        let mut ds = people();
        ds.add_row(vec!["Ann".into(), CellValue::Number(40.0)]).unwrap();
        assert!(ds
            .add_column(Column::new("Email", ColumnType::Text))
            .is_err());
        assert_eq!(ds.column_count(), 2);
    }
}
