//! Tabular dataset → spreadsheet sheet tree

use super::tree::{SheetCell, SheetDescriptor, SheetRow, SheetTree, MAX_COLUMNS, MAX_ROWS};
use crate::config::{FormattingPolicy, NullCellPolicy};
use crate::error::{ReportError, ReportResult};
use crate::types::TabularDataset;
use tracing::debug;

/// Builds sheet trees under one formatting policy
pub struct SpreadsheetBuilder<'a> {
    policy: &'a FormattingPolicy,
}

impl<'a> SpreadsheetBuilder<'a> {
    pub fn new(policy: &'a FormattingPolicy) -> Self {
        Self { policy }
    }

    /// Fresh workbook holding one sheet for `dataset`
    pub fn build(&self, dataset: &TabularDataset) -> ReportResult<SheetTree> {
        let mut tree = SheetTree::new();
        self.append_sheet(&mut tree, dataset)?;
        Ok(tree)
    }

    /// Add `dataset` as a new sheet named after its table and return the
    /// assigned sheet id. The tree is left unchanged on error.
    pub fn append_sheet(&self, tree: &mut SheetTree, dataset: &TabularDataset) -> ReportResult<u32> {
        let rows = self.dataset_rows(dataset)?;

        let sheet_id = tree.next_sheet_id()?;
        tree.check_new_sheet(sheet_id, dataset.name())?;
        let part = tree.add_worksheet_part();
        tree.register_sheet(SheetDescriptor {
            sheet_id,
            part: part.clone(),
            name: dataset.name().to_string(),
        })?;

        if let Some(worksheet) = tree.worksheet_mut(&part) {
            worksheet.rows = rows;
        }

        debug!(
            sheet = dataset.name(),
            sheet_id,
            part = %part,
            rows = dataset.row_count() + 1,
            "sheet added"
        );
        Ok(sheet_id)
    }

    /// Header row followed by one row per dataset row, every cell a string
    fn dataset_rows(&self, dataset: &TabularDataset) -> ReportResult<Vec<SheetRow>> {
        let row_total = dataset.row_count() as u64 + 1;
        if row_total > MAX_ROWS as u64 {
            return Err(ReportError::Structure(format!(
                "dataset '{}' needs {} rows, a sheet holds at most {}",
                dataset.name(),
                row_total,
                MAX_ROWS
            )));
        }
        if dataset.column_count() > MAX_COLUMNS as usize {
            return Err(ReportError::Structure(format!(
                "dataset '{}' has {} columns, a sheet holds at most {}",
                dataset.name(),
                dataset.column_count(),
                MAX_COLUMNS
            )));
        }

        let mut rows = Vec::with_capacity(dataset.row_count() + 1);

        let mut header = SheetRow::new(1);
        for (col_idx, column) in dataset.columns().iter().enumerate() {
            header
                .cells
                .push(SheetCell::string(1, col_idx as u16, column.name.as_str()));
        }
        rows.push(header);

        for (row_idx, data) in dataset.rows().iter().enumerate() {
            let index = row_idx as u32 + 2; // header is row 1
            let mut row = SheetRow::new(index);
            for (col_idx, column) in dataset.columns().iter().enumerate() {
                let value = data.get(col_idx);
                match value {
                    Some(v) if !v.is_null() => {
                        row.cells
                            .push(SheetCell::string(index, col_idx as u16, v.to_text()));
                    }
                    _ => match self.policy.sheet_null_cells {
                        NullCellPolicy::EmitEmpty => {
                            row.cells.push(SheetCell::string(index, col_idx as u16, ""));
                        }
                        NullCellPolicy::Omit => {}
                        NullCellPolicy::Fail => {
                            return Err(ReportError::NullCell {
                                row: row_idx,
                                column: column.name.clone(),
                            });
                        }
                    },
                }
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

/// Build a one-sheet workbook with the default formatting policy
pub fn build_spreadsheet(dataset: &TabularDataset) -> ReportResult<SheetTree> {
    SpreadsheetBuilder::new(&FormattingPolicy::default()).build(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::tree::CellDataType;
    use crate::types::{CellValue, Column, ColumnType};
    use pretty_assertions::assert_eq;

    fn inventory() -> TabularDataset {
        TabularDataset::with_columns(
            "Inventory",
            vec![
                Column::new("Item", ColumnType::Text),
                Column::new("Qty", ColumnType::Number),
            ],
        )
    }

    #[test]
    fn test_empty_dataset_has_header_only() {
        let tree = build_spreadsheet(&inventory()).unwrap();
        let sheet = tree.sheet("Inventory").unwrap();
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.rows[0].values(), vec!["Item", "Qty"]);
    }

    #[test]
    fn test_sheet_descriptor() {
        let tree = build_spreadsheet(&inventory()).unwrap();
        assert_eq!(tree.sheets().len(), 1);
        let d = &tree.sheets()[0];
        assert_eq!(d.sheet_id, 1);
        assert_eq!(d.name, "Inventory");
        assert!(tree.worksheet(&d.part).is_some());
    }

    #[test]
    fn test_rows_are_strings_in_order() {
        let mut ds = inventory();
        ds.add_row(vec!["bolt".into(), CellValue::Number(4.0)])
            .unwrap();
        ds.add_row(vec!["nut".into(), CellValue::Number(0.5)])
            .unwrap();

        let tree = build_spreadsheet(&ds).unwrap();
        let sheet = tree.sheet("Inventory").unwrap();
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.rows[1].values(), vec!["bolt", "4"]);
        assert_eq!(sheet.rows[2].values(), vec!["nut", "0.5"]);
        assert_eq!(sheet.rows[2].index, 3);
        assert_eq!(sheet.rows[2].cells[1].reference(), "B3");
        assert!(sheet
            .rows
            .iter()
            .flat_map(|r| &r.cells)
            .all(|c| c.data_type == CellDataType::String));
    }

    #[test]
    fn test_null_emits_empty_string_by_default() {
        let mut ds = inventory();
        ds.add_row(vec!["bolt".into(), CellValue::Null]).unwrap();
        let tree = build_spreadsheet(&ds).unwrap();
        let row = &tree.sheet("Inventory").unwrap().rows[1];
        assert_eq!(row.values(), vec!["bolt", ""]);
    }

    #[test]
    fn test_null_omit_drops_cell_keeps_positions() {
        let mut ds = inventory();
        ds.add_row(vec![CellValue::Null, CellValue::Number(3.0)])
            .unwrap();
        let policy = FormattingPolicy {
            sheet_null_cells: NullCellPolicy::Omit,
            ..Default::default()
        };
        let tree = SpreadsheetBuilder::new(&policy).build(&ds).unwrap();
        let row = &tree.sheet("Inventory").unwrap().rows[1];
        assert_eq!(row.cells.len(), 1);
        assert_eq!(row.cells[0].reference(), "B2");
    }

    #[test]
    fn test_null_fail_leaves_tree_untouched() {
        let mut ds = inventory();
        ds.add_row(vec!["bolt".into(), CellValue::Null]).unwrap();
        let policy = FormattingPolicy {
            sheet_null_cells: NullCellPolicy::Fail,
            ..Default::default()
        };
        let mut tree = SheetTree::new();
        let err = SpreadsheetBuilder::new(&policy)
            .append_sheet(&mut tree, &ds)
            .unwrap_err();
        assert!(matches!(err, ReportError::NullCell { row: 0, .. }));
        assert!(tree.sheets().is_empty());
    }

    #[test]
    fn test_append_sheet_uses_max_plus_one() {
        let mut tree = SheetTree::new();
        for (id, name) in [(1, "one"), (3, "three"), (5, "five")] {
            let part = tree.add_worksheet_part();
            tree.register_sheet(SheetDescriptor {
                sheet_id: id,
                part,
                name: name.to_string(),
            })
            .unwrap();
        }
        let policy = FormattingPolicy::default();
        let builder = SpreadsheetBuilder::new(&policy);
        let id = builder.append_sheet(&mut tree, &inventory()).unwrap();
        assert_eq!(id, 6);
        assert_eq!(tree.sheets().len(), 4);
    }

    #[test]
    fn test_append_same_dataset_twice_rejected() {
        let mut tree = SheetTree::new();
        let policy = FormattingPolicy::default();
        let builder = SpreadsheetBuilder::new(&policy);
        builder.append_sheet(&mut tree, &inventory()).unwrap();
        assert!(builder.append_sheet(&mut tree, &inventory()).is_err());
        assert_eq!(tree.sheets().len(), 1);
    }
}
