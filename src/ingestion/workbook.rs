//! Workbook decoding: raw bytes -> first worksheet -> [`Sheet`] of [`CellValue`]s.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use crate::error::{SchoolsError, SchoolsResult};
use crate::types::CellValue;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A decoded worksheet with absolute cell positions.
///
/// Row 0 is the header row. Positions are counted from cell `A1` even when the used range of
/// the worksheet starts further in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    rows: Vec<Vec<CellValue>>,
    width: usize,
}

impl Sheet {
    /// Build a sheet from rows of cells. Width is the longest row.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Number of columns, counted from column A.
    pub fn column_count(&self) -> usize {
        self.width
    }

    /// Number of rows including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the sheet has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header row values padded to [`Self::column_count`].
    pub fn header(&self) -> Vec<CellValue> {
        let mut header = self.rows.first().cloned().unwrap_or_default();
        header.resize(self.width, CellValue::Empty);
        header
    }

    /// Rows after the header row.
    pub fn data_rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }
}

/// Cell at `idx`, or an empty cell when the row is shorter.
pub fn cell(row: &[CellValue], idx: usize) -> &CellValue {
    row.get(idx).unwrap_or(&EMPTY_CELL)
}

/// Decode the first worksheet of a workbook held in memory.
///
/// The format (`xlsx`, `xlsm`, `xlsb`, `xls`, `ods`) is sniffed from the bytes.
pub fn read_first_sheet(bytes: &[u8]) -> SchoolsResult<Sheet> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SchoolsError::SourceUnreadable {
            message: "workbook has no worksheets".to_string(),
        })??;
    Ok(sheet_from_range(&range))
}

/// Convert a calamine range into a [`Sheet`], padding leading empty rows/columns.
pub fn sheet_from_range(range: &Range<Data>) -> Sheet {
    let Some((row_off, col_off)) = range.start() else {
        return Sheet::default();
    };
    if range.is_empty() {
        return Sheet::default();
    }
    let (row_off, col_off) = (row_off as usize, col_off as usize);

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); row_off];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; col_off];
        cells.extend(row.iter().map(cell_from_data));
        rows.push(cells);
    }

    Sheet {
        rows,
        width: col_off + range.width(),
    }
}

/// Empty strings, which some writers store instead of leaving the cell out, are blank cells.
fn cell_from_data(c: &Data) -> CellValue {
    match c {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
