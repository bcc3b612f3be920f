use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Row {row} has {actual} values, expected {expected} (one per column)")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Row {row}, column '{column}': expected {expected} value, found {actual}")]
    ValueType {
        row: usize,
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Null value at row {row}, column '{column}' rejected by null-cell policy")]
    NullCell { row: usize, column: String },

    #[error("Structure error: {0}")]
    Structure(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Export(e.to_string())
    }
}

impl From<tempfile::PersistError> for ReportError {
    fn from(e: tempfile::PersistError) -> Self {
        ReportError::Io(e.error)
    }
}
