//! Single-run paragraph and heading constructors

use super::tree::{Block, Paragraph, RunFormat};
use crate::config::TextStyle;

/// Paragraph block with one plain run at `size_half_points`
pub fn make_paragraph(text: &str, size_half_points: u32) -> Block {
    styled_paragraph(
        text,
        &TextStyle {
            size_half_points,
            bold: false,
        },
    )
}

/// Heading block with one bold run at `size_half_points`
pub fn make_heading(text: &str, size_half_points: u32) -> Block {
    styled_heading(
        text,
        &TextStyle {
            size_half_points,
            bold: true,
        },
    )
}

/// Paragraph block with one run formatted by `style`
pub fn styled_paragraph(text: &str, style: &TextStyle) -> Block {
    Block::Paragraph(single_run(text, style))
}

/// Heading block with one run formatted by `style`
pub fn styled_heading(text: &str, style: &TextStyle) -> Block {
    Block::Heading(single_run(text, style))
}

fn single_run(text: &str, style: &TextStyle) -> Paragraph {
    Paragraph::with_run(
        text,
        RunFormat {
            size_half_points: Some(style.size_half_points),
            bold: style.bold,
        },
    )
}
