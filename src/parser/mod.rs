use crate::error::{ReportError, ReportResult};
use crate::types::{CellValue, Column, ColumnType, TabularDataset, DATE_TIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

/// On-disk shape of a dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    pub table: String,
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
}

/// Parse a dataset YAML file into a `TabularDataset`.
///
/// # Format
/// ```yaml
/// table: MyReport
/// columns:
///   - { name: Name, type: text }
///   - { name: Number, type: number }
///   - { name: Date, type: date }
/// rows:
///   - ["Sample Data 1", 100, "2025-10-18 09:30:00"]
///   - ["Sample Data 2", ~, "2025-09-18"]
/// ```
///
/// `~`/`null` is an absent value. Dates accept `YYYY-MM-DD`,
/// `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`.
///
/// # Example
/// ```no_run
/// use report_forge::parser::parse_dataset;
/// use std::path::Path;
///
/// let dataset = parse_dataset(Path::new("report.yaml"))?;
/// println!("{}: {} rows", dataset.name(), dataset.row_count());
/// # Ok::<(), report_forge::error::ReportError>(())
/// ```
pub fn parse_dataset(path: &Path) -> ReportResult<TabularDataset> {
    let content = std::fs::read_to_string(path)?;
    parse_dataset_str(&content)
}

/// Parse dataset YAML from a string
pub fn parse_dataset_str(yaml: &str) -> ReportResult<TabularDataset> {
    let file: DatasetFile = serde_yaml::from_str(yaml)?;

    if file.table.trim().is_empty() {
        return Err(ReportError::Parse("Dataset 'table' name is empty".to_string()));
    }

    let mut dataset = TabularDataset::new(file.table.clone());
    for column in &file.columns {
        if dataset.columns().iter().any(|c| c.name == column.name) {
            return Err(ReportError::Parse(format!(
                "Duplicate column '{}' in table '{}'",
                column.name, file.table
            )));
        }
        dataset.add_column(Column::new(column.name.clone(), column.kind))?;
    }

    for (row_idx, raw) in file.rows.iter().enumerate() {
        if raw.len() != dataset.column_count() {
            return Err(ReportError::Parse(format!(
                "Row {}: expected {} values, found {}",
                row_idx,
                dataset.column_count(),
                raw.len()
            )));
        }
        let mut values = Vec::with_capacity(raw.len());
        for (column, val) in dataset.columns().iter().zip(raw) {
            values.push(parse_value(row_idx, column, val)?);
        }
        dataset.add_row(values)?;
    }

    Ok(dataset)
}

/// Convert one YAML scalar into a value of the column's type
fn parse_value(row: usize, column: &Column, val: &Value) -> ReportResult<CellValue> {
    if val.is_null() {
        return Ok(CellValue::Null);
    }

    let mismatch = || {
        ReportError::Parse(format!(
            "Row {}, column '{}': Expected {}, found {}",
            row,
            column.name,
            column.kind.type_name(),
            type_name(val)
        ))
    };

    match column.kind {
        ColumnType::Text => match val {
            Value::String(s) => Ok(CellValue::Text(s.clone())),
            // Unquoted YAML scalars in a text column keep their literal form
            Value::Number(n) => Ok(CellValue::Text(n.to_string())),
            Value::Bool(b) => Ok(CellValue::Text(b.to_string())),
            _ => Err(mismatch()),
        },
        ColumnType::Number => match val {
            Value::Number(n) => n.as_f64().map(CellValue::Number).ok_or_else(mismatch),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(CellValue::Number)
                .map_err(|_| mismatch()),
            _ => Err(mismatch()),
        },
        ColumnType::Date => match val {
            Value::String(s) => parse_date_time(s).map(CellValue::Date).ok_or_else(|| {
                ReportError::Parse(format!(
                    "Row {}, column '{}': Invalid date '{}' (expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)",
                    row, column.name, s
                ))
            }),
            _ => Err(mismatch()),
        },
    }
}

/// Parse the accepted date/date-time forms
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Render a dataset back into the dataset YAML format
pub fn dataset_to_yaml(dataset: &TabularDataset) -> ReportResult<String> {
    let file = DatasetFile {
        table: dataset.name().to_string(),
        columns: dataset
            .columns()
            .iter()
            .map(|c| ColumnSpec {
                name: c.name.clone(),
                kind: c.kind,
            })
            .collect(),
        rows: dataset
            .rows()
            .iter()
            .map(|r| r.values().iter().map(value_to_yaml).collect())
            .collect(),
    };
    Ok(serde_yaml::to_string(&file)?)
}

fn value_to_yaml(value: &CellValue) -> Value {
    match value {
        CellValue::Null => Value::Null,
        CellValue::Text(s) => Value::String(s.clone()),
        CellValue::Number(n) => {
            // Format nicely: remove unnecessary decimal places
            if n.fract() == 0.0 && n.abs() < 1e10 {
                Value::Number(serde_yaml::Number::from(*n as i64))
            } else {
                Value::Number(serde_yaml::Number::from(*n))
            }
        }
        CellValue::Date(_) => Value::String(value.to_text()),
    }
}

/// Get the type name of a YAML value
fn type_name(val: &Value) -> &'static str {
    match val {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "Text",
        Value::Sequence(_) => "Array",
        Value::Mapping(_) => "Mapping",
        Value::Tagged(_) => "Tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REPORT: &str = r#"
table: MyReport
columns:
  - { name: Name, type: text }
  - { name: Number, type: number }
  - { name: Date, type: date }
rows:
  - ["Sample Data 1", 100, "2025-10-18 09:30:00"]
  - ["Sample Data 2", ~, "2025-09-18"]
  - [~, "2.5", "2025-08-18T12:00:00"]
"#;

    #[test]
    fn test_parse_report_dataset() {
        let ds = parse_dataset_str(REPORT).unwrap();
        assert_eq!(ds.name(), "MyReport");
        assert_eq!(ds.column_count(), 3);
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.columns()[2].kind, ColumnType::Date);
        assert_eq!(ds.value(0, 1), Some(&CellValue::Number(100.0)));
        assert!(ds.value(1, 1).unwrap().is_null());
        assert!(ds.value(2, 0).unwrap().is_null());
        assert_eq!(ds.value(2, 1), Some(&CellValue::Number(2.5)));
        assert_eq!(ds.value(1, 2).unwrap().to_text(), "2025-09-18 00:00:00");
        assert_eq!(ds.value(2, 2).unwrap().to_text(), "2025-08-18 12:00:00");
    }

    #[test]
    fn test_rows_optional() {
        let yaml = "table: Empty\ncolumns:\n  - { name: A, type: text }\n";
        let ds = parse_dataset_str(yaml).unwrap();
        assert_eq!(ds.row_count(), 0);
        assert_eq!(ds.column_count(), 1);
    }

    #[test]
    fn test_text_column_keeps_unquoted_scalars() {
        let yaml = "table: T\ncolumns:\n  - { name: Code, type: text }\nrows:\n  - [42]\n  - [true]\n";
        let ds = parse_dataset_str(yaml).unwrap();
        assert_eq!(ds.value(0, 0), Some(&CellValue::Text("42".to_string())));
        assert_eq!(ds.value(1, 0), Some(&CellValue::Text("true".to_string())));
    }

    #[test]
    fn test_row_width_mismatch() {
        let yaml = "table: T\ncolumns:\n  - { name: A, type: text }\n  - { name: B, type: text }\nrows:\n  - [a]\n";
        let err = parse_dataset_str(yaml).unwrap_err();
        assert!(err.to_string().contains("Row 0: expected 2 values, found 1"));
    }

    #[test]
    fn test_number_mismatch() {
        let yaml = "table: T\ncolumns:\n  - { name: N, type: number }\nrows:\n  - [abc]\n";
        let err = parse_dataset_str(yaml).unwrap_err();
        assert!(err.to_string().contains("Expected Number, found Text"));
    }

    #[test]
    fn test_invalid_date() {
        let yaml = "table: T\ncolumns:\n  - { name: D, type: date }\nrows:\n  - [\"18/10/2025\"]\n";
        let err = parse_dataset_str(yaml).unwrap_err();
        assert!(err.to_string().contains("Invalid date '18/10/2025'"));
    }

    #[test]
    fn test_unknown_column_type() {
        let yaml = "table: T\ncolumns:\n  - { name: X, type: money }\n";
        assert!(matches!(
            parse_dataset_str(yaml).unwrap_err(),
            ReportError::Yaml(_)
        ));
    }

    #[test]
    fn test_duplicate_column() {
        let yaml = "table: T\ncolumns:\n  - { name: X, type: text }\n  - { name: X, type: number }\n";
        assert!(parse_dataset_str(yaml)
            .unwrap_err()
            .to_string()
            .contains("Duplicate column 'X'"));
    }

    #[test]
    fn test_empty_table_name() {
        let yaml = "table: \"  \"\ncolumns: []\n";
        assert!(parse_dataset_str(yaml).is_err());
    }

    #[test]
    fn test_yaml_round_trip_preserves_values() {
        let ds = parse_dataset_str(REPORT).unwrap();
        let yaml = dataset_to_yaml(&ds).unwrap();
        assert!(yaml.contains("- 100\n"));
        let again = parse_dataset_str(&yaml).unwrap();
        assert_eq!(again, ds);
    }
}
