//! Report export: dataset → builder → tree → package writer
//!
//! Each export builds a fresh tree and moves it into the writer. Errors from
//! either step are returned unchanged; nothing is retried.

use crate::config::FormattingPolicy;
use crate::error::ReportResult;
use crate::excel::{SheetTree, SpreadsheetBuilder};
use crate::types::TabularDataset;
use crate::word::{DocumentTree, WordDocumentBuilder};
use crate::writer::PackageWriter;
use std::path::Path;
use tracing::info;

/// Title, blurb and output locations for one report run
#[derive(Debug, Clone)]
pub struct ReportRequest<'a> {
    pub title: &'a str,
    pub blurb: &'a str,
    pub word_path: &'a Path,
    pub excel_path: &'a Path,
}

/// Runs both exports under one formatting policy
#[derive(Debug, Clone, Default)]
pub struct ReportExporter {
    policy: FormattingPolicy,
}

impl ReportExporter {
    pub fn new(policy: FormattingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FormattingPolicy {
        &self.policy
    }

    /// Build the Word report and hand it to `writer`
    pub fn export_word<W>(
        &self,
        path: &Path,
        title: &str,
        blurb: &str,
        dataset: &TabularDataset,
        writer: &W,
    ) -> ReportResult<()>
    where
        W: PackageWriter<DocumentTree>,
    {
        let tree = WordDocumentBuilder::new(&self.policy).build(title, blurb, dataset)?;
        writer.write_package(tree, path)?;
        info!(
            path = %path.display(),
            table = dataset.name(),
            rows = dataset.row_count(),
            "word report exported"
        );
        Ok(())
    }

    /// Build the one-sheet workbook and hand it to `writer`
    pub fn export_excel<W>(
        &self,
        dataset: &TabularDataset,
        path: &Path,
        writer: &W,
    ) -> ReportResult<()>
    where
        W: PackageWriter<SheetTree>,
    {
        let tree = SpreadsheetBuilder::new(&self.policy).build(dataset)?;
        writer.write_package(tree, path)?;
        info!(
            path = %path.display(),
            table = dataset.name(),
            rows = dataset.row_count(),
            "excel sheet exported"
        );
        Ok(())
    }

    /// Word first, then Excel; stops at the first failure
    pub fn export_all<D, X>(
        &self,
        request: &ReportRequest<'_>,
        dataset: &TabularDataset,
        word_writer: &D,
        excel_writer: &X,
    ) -> ReportResult<()>
    where
        D: PackageWriter<DocumentTree>,
        X: PackageWriter<SheetTree>,
    {
        self.export_word(
            request.word_path,
            request.title,
            request.blurb,
            dataset,
            word_writer,
        )?;
        self.export_excel(dataset, request.excel_path, excel_writer)
    }
}
