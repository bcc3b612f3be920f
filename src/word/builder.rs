//! Tabular dataset → Word document tree

use super::text::{make_paragraph, styled_heading, styled_paragraph};
use super::tree::{
    Block, DocumentTree, Paragraph, RunFormat, Table, TableCell, TableProperties, TableRow,
};
use crate::config::{FormattingPolicy, NullCellPolicy};
use crate::error::{ReportError, ReportResult};
use crate::types::TabularDataset;
use tracing::debug;

/// Builds report documents under one formatting policy
pub struct WordDocumentBuilder<'a> {
    policy: &'a FormattingPolicy,
}

impl<'a> WordDocumentBuilder<'a> {
    pub fn new(policy: &'a FormattingPolicy) -> Self {
        Self { policy }
    }

    /// Heading, blurb, then either the data table plus a spacer or a
    /// "no data" notice.
    pub fn build(
        &self,
        title: &str,
        blurb: &str,
        dataset: &TabularDataset,
    ) -> ReportResult<DocumentTree> {
        let policy = self.policy;
        let mut doc = DocumentTree::new();

        doc.push(styled_heading(title, &policy.heading))?;
        doc.push(styled_paragraph(blurb, &policy.body))?;

        if dataset.row_count() > 0 {
            doc.push(Block::Table(self.convert_dataset_to_table(dataset)?))?;
            doc.push(make_paragraph(
                &policy.spacer.text,
                policy.spacer.size_half_points,
            ))?;
        } else {
            debug!(table = dataset.name(), "dataset is empty, emitting notice");
            doc.push(make_paragraph(
                &policy.empty_notice.text,
                policy.empty_notice.size_half_points,
            ))?;
        }

        debug!(blocks = doc.len(), "word document tree built");
        Ok(doc)
    }

    /// Convert the dataset into a table block.
    ///
    /// A dataset without rows yields a table with no rows at all (the header
    /// is omitted too); callers check the row count first.
    pub fn convert_dataset_to_table(&self, dataset: &TabularDataset) -> ReportResult<Table> {
        let table_policy = &self.policy.table;
        let mut table = Table::new(TableProperties {
            width_fiftieths_pct: table_policy.width_fiftieths_pct,
            style_name: table_policy.style_name.clone(),
            borders: table_policy.borders,
        });

        if dataset.row_count() == 0 {
            return Ok(table);
        }

        table.rows.push(TableRow {
            cells: dataset
                .columns()
                .iter()
                .map(|c| text_cell(&c.name))
                .collect(),
        });

        for (row_idx, row) in dataset.rows().iter().enumerate() {
            let mut cells = Vec::with_capacity(dataset.column_count());
            for (col_idx, column) in dataset.columns().iter().enumerate() {
                let value = row.get(col_idx);
                match value {
                    Some(v) if !v.is_null() => cells.push(text_cell(&v.to_text())),
                    _ => match self.policy.word_null_cells {
                        NullCellPolicy::EmitEmpty => cells.push(text_cell("")),
                        // Word rows need one cell per grid column, so the
                        // cell stays and only its run is dropped
                        NullCellPolicy::Omit => cells.push(TableCell {
                            paragraph: Paragraph::default(),
                        }),
                        NullCellPolicy::Fail => {
                            return Err(ReportError::NullCell {
                                row: row_idx,
                                column: column.name.clone(),
                            })
                        }
                    },
                }
            }
            table.rows.push(TableRow { cells });
        }

        Ok(table)
    }
}

fn text_cell(text: &str) -> TableCell {
    TableCell {
        paragraph: Paragraph::with_run(text, RunFormat::default()),
    }
}

/// Build a report document with the default formatting policy
pub fn build_word_document(
    title: &str,
    blurb: &str,
    dataset: &TabularDataset,
) -> ReportResult<DocumentTree> {
    WordDocumentBuilder::new(&FormattingPolicy::default()).build(title, blurb, dataset)
}
