//! Demo dataset used when no dataset file is given

use crate::error::ReportResult;
use crate::types::{CellValue, Column, ColumnType, TabularDataset};
use chrono::{Months, NaiveDateTime};

pub const SAMPLE_TABLE_NAME: &str = "MyReport";
pub const SAMPLE_ROWS: u32 = 10;

/// Ten rows: `Sample Data i`, `i * 100`, and `anchor` minus `i` months.
pub fn sample_dataset(anchor: NaiveDateTime) -> ReportResult<TabularDataset> {
    let mut dataset = TabularDataset::with_columns(
        SAMPLE_TABLE_NAME,
        vec![
            Column::new("Name", ColumnType::Text),
            Column::new("Number", ColumnType::Number),
            Column::new("Date", ColumnType::Date),
        ],
    );

    for i in 1..=SAMPLE_ROWS {
        let date = anchor
            .checked_sub_months(Months::new(i))
            .map_or(CellValue::Null, CellValue::Date);
        dataset.add_row(vec![
            CellValue::Text(format!("Sample Data {}", i)),
            CellValue::Number(f64::from(i * 100)),
            date,
        ])?;
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 31)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_sample_shape() {
        let ds = sample_dataset(anchor()).unwrap();
        assert_eq!(ds.name(), "MyReport");
        assert_eq!(ds.column_count(), 3);
        assert_eq!(ds.row_count(), 10);
    }

    #[test]
    fn test_sample_values() {
        let ds = sample_dataset(anchor()).unwrap();
        assert_eq!(ds.value(0, 0).unwrap().to_text(), "Sample Data 1");
        assert_eq!(ds.value(9, 0).unwrap().to_text(), "Sample Data 10");
        assert_eq!(ds.value(0, 1).unwrap().to_text(), "100");
        assert_eq!(ds.value(9, 1).unwrap().to_text(), "1000");
    }

    #[test]
    fn test_sample_dates_step_back_monthly() {
        let ds = sample_dataset(anchor()).unwrap();
        // Feb has no 31st: clamps to the last day of the month
        assert_eq!(ds.value(0, 2).unwrap().to_text(), "2025-02-28 08:00:00");
        assert_eq!(ds.value(1, 2).unwrap().to_text(), "2025-01-31 08:00:00");
        assert_eq!(ds.value(9, 2).unwrap().to_text(), "2024-05-31 08:00:00");
    }
}
