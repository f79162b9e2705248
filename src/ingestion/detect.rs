//! Layout detection.
//!
//! Header text is not trusted; the decision is made on column count alone.

use serde::{Deserialize, Serialize};

use super::extract::{ExtractContext, Extraction, SheetExtractor};
use super::flat::FlatExtractor;
use super::legacy::LegacyExtractor;
use super::workbook::Sheet;

/// Sheets at least this wide use the flat layout.
pub const FLAT_MIN_COLUMNS: usize = 13;

/// Supported sheet layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetFormat {
    /// District header rows followed by the schools that belong to them.
    Legacy,
    /// One school per row with an explicit district column.
    Flat,
}

impl SheetFormat {
    /// Run the extractor for this layout.
    pub fn extract(self, sheet: &Sheet, ctx: ExtractContext<'_>) -> Extraction {
        match self {
            SheetFormat::Legacy => LegacyExtractor.extract(sheet, ctx),
            SheetFormat::Flat => FlatExtractor.extract(sheet, ctx),
        }
    }
}

/// Pick a layout for `sheet`, or `None` when the sheet has no rows at all.
pub fn detect_format(sheet: &Sheet) -> Option<SheetFormat> {
    if sheet.is_empty() {
        return None;
    }
    Some(format_for_width(sheet.column_count()))
}

/// Layout for a given column count.
pub fn format_for_width(columns: usize) -> SheetFormat {
    if columns >= FLAT_MIN_COLUMNS {
        SheetFormat::Flat
    } else {
        SheetFormat::Legacy
    }
}
