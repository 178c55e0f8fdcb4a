//! Spreadsheet reading via `calamine`.
//!
//! The first worksheet is used; its first non-empty row is the header. Cells are
//! rendered to text and handed to the same row parser the CSV path uses. Line
//! numbers in errors are sheet row numbers, as a spreadsheet app shows them.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::domain::Record;
use crate::error::AppError;
use crate::io::ingest::{Columns, parse_row};

/// Read every data row from the first worksheet of a workbook.
pub fn read_workbook_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        AppError::data_load(format!("Failed to open workbook '{}': {e}", path.display()))
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::data_load(format!("Workbook '{}' has no worksheets.", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AppError::data_load(format!("Failed to read worksheet '{sheet_name}': {e}")))?;
    debug!(sheet = %sheet_name, rows = range.height(), "reading worksheet");

    // The range starts at the first used cell, not necessarily row 1.
    let header_row = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .ok_or_else(|| AppError::data_load(format!("Worksheet '{sheet_name}' is empty.")))?;
    let columns = Columns::from_headers(header.iter().map(String::as_str))?;

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        let line = header_row + idx + 1;
        let texts: Vec<String> = row.iter().map(cell_text).collect();
        let cells: Vec<&str> = texts.iter().map(String::as_str).collect();
        if let Some(r) = parse_row(line, &cells, &columns)? {
            records.push(r);
        }
    }

    Ok(records)
}

/// Render a cell the way the row parser expects: whole floats without `.0`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", *v as i64),
        Data::Float(v) => v.to_string(),
        other => other.to_string(),
    }
}
