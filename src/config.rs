//! Formatting policy shared by the Word and Excel builders
//!
//! Font sizes, table properties, the "no data" notice and null handling
//! for both builders. Sections left out of the YAML keep their defaults.
//!
//! ```yaml
//! heading:
//!   size_half_points: 40
//! table:
//!   style_name: LightGrid
//!   borders:
//!     top: { weight: double, color: "1F4E79" }
//! sheet_null_cells: omit
//! ```

use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Table width meaning "100% of the page", in fiftieths of a percent
pub const FULL_PAGE_WIDTH: u32 = 5000;

//==============================================================================
// Primitives
//==============================================================================

/// What a builder does when it meets an absent (null) value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullCellPolicy {
    /// Emit the cell with empty text
    #[default]
    EmitEmpty,
    /// Leave the cell's content out
    Omit,
    /// Abort the build with `ReportError::NullCell`
    Fail,
}

/// Border line style ("thickness class")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderWeight {
    None,
    Single,
    Thick,
    Double,
    Dotted,
    Dashed,
}

impl BorderWeight {
    /// WordprocessingML `w:val` name
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderWeight::None => "none",
            BorderWeight::Single => "single",
            BorderWeight::Thick => "thick",
            BorderWeight::Double => "double",
            BorderWeight::Dotted => "dotted",
            BorderWeight::Dashed => "dashed",
        }
    }
}

/// 24-bit RGB color, written as six hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ReportError::Config(format!(
                "invalid color '{}': expected six hex digits (RRGGBB)",
                s
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| ReportError::Config(format!("invalid color '{}': {}", s, e)))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ReportError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RgbColor> for String {
    fn from(c: RgbColor) -> Self {
        c.to_string()
    }
}

/// One border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderSpec {
    pub weight: BorderWeight,
    pub color: RgbColor,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            weight: BorderWeight::Thick,
            color: RgbColor::BLACK,
        }
    }
}

/// The six table border edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableBorders {
    pub top: BorderSpec,
    pub bottom: BorderSpec,
    pub left: BorderSpec,
    pub right: BorderSpec,
    pub inside_h: BorderSpec,
    pub inside_v: BorderSpec,
}

impl TableBorders {
    /// Same border on every edge
    pub fn uniform(border: BorderSpec) -> Self {
        Self {
            top: border,
            bottom: border,
            left: border,
            right: border,
            inside_h: border,
            inside_v: border,
        }
    }

    /// Edges in WordprocessingML order, with their element names
    pub fn edges(&self) -> [(&'static str, &BorderSpec); 6] {
        [
            ("top", &self.top),
            ("left", &self.left),
            ("bottom", &self.bottom),
            ("right", &self.right),
            ("insideH", &self.inside_h),
            ("insideV", &self.inside_v),
        ]
    }
}

/// Run formatting for headings and paragraphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in half-points (24 = 12pt)
    pub size_half_points: u32,
    #[serde(default)]
    pub bold: bool,
}

/// A fixed piece of text the builder emits on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedText {
    pub text: String,
    pub size_half_points: u32,
}

/// Table-level properties of the Word table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TablePolicy {
    /// Width in fiftieths of a percent of the page (5000 = 100%)
    pub width_fiftieths_pct: u32,
    pub style_name: String,
    pub borders: TableBorders,
}

impl Default for TablePolicy {
    fn default() -> Self {
        Self {
            width_fiftieths_pct: FULL_PAGE_WIDTH,
            style_name: "TableGrid".to_string(),
            borders: TableBorders::default(),
        }
    }
}

//==============================================================================
// Policy
//==============================================================================

/// All formatting decisions for one export run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingPolicy {
    pub heading: TextStyle,
    pub body: TextStyle,
    /// Paragraph emitted after the table
    pub spacer: FixedText,
    /// Paragraph emitted instead of the table when there are no rows
    pub empty_notice: FixedText,
    pub table: TablePolicy,
    pub word_null_cells: NullCellPolicy,
    pub sheet_null_cells: NullCellPolicy,
}

impl Default for FormattingPolicy {
    fn default() -> Self {
        Self {
            heading: TextStyle {
                size_half_points: 36,
                bold: true,
            },
            body: TextStyle {
                size_half_points: 24,
                bold: false,
            },
            spacer: FixedText {
                text: " ".to_string(),
                size_half_points: 14,
            },
            empty_notice: FixedText {
                text: "There is no report data to display.".to_string(),
                size_half_points: 20,
            },
            table: TablePolicy::default(),
            word_null_cells: NullCellPolicy::EmitEmpty,
            sheet_null_cells: NullCellPolicy::EmitEmpty,
        }
    }
}

impl FormattingPolicy {
    /// Parse a policy from YAML; absent fields keep their defaults
    pub fn from_yaml_str(yaml: &str) -> ReportResult<Self> {
        let policy: FormattingPolicy = serde_yaml::from_str(yaml)
            .map_err(|e| ReportError::Config(format!("invalid formatting policy: {}", e)))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy from a YAML file
    pub fn from_yaml_file(path: &Path) -> ReportResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Reject values no document format can carry
    pub fn validate(&self) -> ReportResult<()> {
        let sizes = [
            ("heading", self.heading.size_half_points),
            ("body", self.body.size_half_points),
            ("spacer", self.spacer.size_half_points),
            ("empty_notice", self.empty_notice.size_half_points),
        ];
        for (name, size) in sizes {
            if size == 0 {
                return Err(ReportError::Config(format!(
                    "{} font size must be positive",
                    name
                )));
            }
        }
        if self.table.width_fiftieths_pct == 0 || self.table.width_fiftieths_pct > FULL_PAGE_WIDTH
        {
            return Err(ReportError::Config(format!(
                "table width {} out of range 1..={}",
                self.table.width_fiftieths_pct, FULL_PAGE_WIDTH
            )));
        }
        if self.table.style_name.trim().is_empty() {
            return Err(ReportError::Config("table style name is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_report_layout() {
        let policy = FormattingPolicy::default();
        assert_eq!(policy.heading.size_half_points, 36);
        assert!(policy.heading.bold);
        assert_eq!(policy.body.size_half_points, 24);
        assert!(!policy.body.bold);
        assert_eq!(policy.spacer.size_half_points, 14);
        assert_eq!(policy.empty_notice.size_half_points, 20);
        assert_eq!(policy.table.width_fiftieths_pct, 5000);
        assert_eq!(policy.table.style_name, "TableGrid");
        for (_, edge) in policy.table.borders.edges() {
            assert_eq!(edge.weight, BorderWeight::Thick);
            assert_eq!(edge.color, RgbColor::BLACK);
        }
        assert_eq!(policy.word_null_cells, NullCellPolicy::EmitEmpty);
        assert_eq!(policy.sheet_null_cells, NullCellPolicy::EmitEmpty);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let policy = FormattingPolicy::from_yaml_str("{}").unwrap();
        assert_eq!(policy, FormattingPolicy::default());
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
heading:
  size_half_points: 40
  bold: false
table:
  style_name: LightGrid
  borders:
    top: { weight: double, color: "1f4e79" }
sheet_null_cells: fail
"#;
        let policy = FormattingPolicy::from_yaml_str(yaml).unwrap();
        assert_eq!(policy.heading.size_half_points, 40);
        assert!(!policy.heading.bold);
        assert_eq!(policy.body.size_half_points, 24);
        assert_eq!(policy.table.style_name, "LightGrid");
        assert_eq!(policy.table.width_fiftieths_pct, 5000);
        assert_eq!(policy.table.borders.top.weight, BorderWeight::Double);
        assert_eq!(policy.table.borders.top.color.to_string(), "1F4E79");
        assert_eq!(policy.table.borders.bottom, BorderSpec::default());
        assert_eq!(policy.sheet_null_cells, NullCellPolicy::Fail);
        assert_eq!(policy.word_null_cells, NullCellPolicy::EmitEmpty);
    }

    #[test]
    fn test_rejects_bad_color() {
        let yaml = "table:\n  borders:\n    left: { weight: thick, color: \"black\" }\n";
        let err = FormattingPolicy::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_weight() {
        let yaml = "table:\n  borders:\n    left: { weight: wavy, color: \"000000\" }\n";
        assert!(FormattingPolicy::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_rejects_zero_font_size() {
        let yaml = "body:\n  size_half_points: 0\n";
        assert!(FormattingPolicy::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_rejects_overwide_table() {
        let yaml = "table:\n  width_fiftieths_pct: 6000\n";
        assert!(FormattingPolicy::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_color_parse_and_display() {
        let c: RgbColor = "#ff8000".parse().unwrap();
        assert_eq!(c, RgbColor::new(255, 128, 0));
        assert_eq!(c.to_string(), "FF8000");
    }
}
