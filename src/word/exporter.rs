//! Word exporter implementation - document tree → .docx package via `docx-rs`

use super::tree::{Block, DocumentTree, Paragraph, Run, Table};
use crate::config::{BorderSpec, BorderWeight, TableBorders};
use crate::error::{ReportError, ReportResult};
use crate::writer::{write_atomically, PackageWriter};
use docx_rs::{BorderType, Docx, TableBorder, TableBorderPosition, WidthType};
use std::io::Cursor;
use std::path::Path;
use tracing::info;

/// Writes document trees as WordprocessingML packages
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxPackageWriter;

impl DocxPackageWriter {
    pub fn new() -> Self {
        Self
    }

    /// Map the tree onto a `docx-rs` document, block by block
    pub fn to_docx(&self, tree: &DocumentTree) -> Docx {
        tree.blocks()
            .iter()
            .fold(Docx::new(), |docx, block| match block {
                Block::Heading(p) | Block::Paragraph(p) => docx.add_paragraph(paragraph(p)),
                Block::Table(t) => docx.add_table(table(t)),
            })
    }

    /// Assemble the complete package in memory
    pub fn to_bytes(&self, tree: &DocumentTree) -> ReportResult<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.to_docx(tree)
            .build()
            .pack(&mut buf)
            .map_err(|e| ReportError::Export(format!("Failed to pack DOCX: {}", e)))?;
        Ok(buf.into_inner())
    }
}

impl PackageWriter<DocumentTree> for DocxPackageWriter {
    fn write_package(&self, tree: DocumentTree, path: &Path) -> ReportResult<()> {
        let bytes = self.to_bytes(&tree)?;
        write_atomically(path, &bytes)?;
        info!(path = %path.display(), blocks = tree.len(), "word package saved");
        Ok(())
    }
}

fn paragraph(p: &Paragraph) -> docx_rs::Paragraph {
    p.runs
        .iter()
        .fold(docx_rs::Paragraph::new(), |para, r| para.add_run(run(r)))
}

fn run(r: &Run) -> docx_rs::Run {
    let mut out = docx_rs::Run::new().add_text(r.text.as_str());
    if r.format.bold {
        out = out.bold();
    }
    if let Some(size) = r.format.size_half_points {
        out = out.size(size as usize);
    }
    out
}

fn table(t: &Table) -> docx_rs::Table {
    let props = &t.properties;
    let rows = t
        .rows
        .iter()
        .map(|row| {
            docx_rs::TableRow::new(
                row.cells
                    .iter()
                    .map(|cell| docx_rs::TableCell::new().add_paragraph(paragraph(&cell.paragraph)))
                    .collect(),
            )
        })
        .collect();

    docx_rs::Table::new(rows)
        .style(props.style_name.as_str())
        .width(props.width_fiftieths_pct as usize, WidthType::Pct)
        .set_borders(borders(&props.borders))
}

fn borders(edges: &TableBorders) -> docx_rs::TableBorders {
    [
        (TableBorderPosition::Top, &edges.top),
        (TableBorderPosition::Left, &edges.left),
        (TableBorderPosition::Bottom, &edges.bottom),
        (TableBorderPosition::Right, &edges.right),
        (TableBorderPosition::InsideH, &edges.inside_h),
        (TableBorderPosition::InsideV, &edges.inside_v),
    ]
    .into_iter()
    .fold(docx_rs::TableBorders::new(), |acc, (position, spec)| {
        acc.set(border(position, spec))
    })
}

fn border(position: TableBorderPosition, spec: &BorderSpec) -> TableBorder {
    TableBorder::new(position)
        .border_type(border_type(spec.weight))
        .color(spec.color.to_string())
}

fn border_type(weight: BorderWeight) -> BorderType {
    match weight {
        BorderWeight::None => BorderType::None,
        BorderWeight::Single => BorderType::Single,
        BorderWeight::Thick => BorderType::Thick,
        BorderWeight::Double => BorderType::Double,
        BorderWeight::Dotted => BorderType::Dotted,
        BorderWeight::Dashed => BorderType::Dashed,
    }
}
