//! Registration file ingest.
//!
//! Turns a CSV file or a spreadsheet into a sorted [`Table`]. Only the four
//! columns the report needs are read (`breed`, `year`, `month`, `total`); any
//! other column is ignored. Anything that prevents building a trustworthy table
//! is a load error (exit code 2), reported before the user is prompted.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use tracing::info;

use crate::data::Table;
use crate::domain::Record;
use crate::error::AppError;

/// Column names (lowercase) that every input must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["breed", "year", "month", "total"];

/// File layout, picked from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Workbook,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputFormat::Workbook),
            _ => Err(AppError::data_load(format!(
                "Unsupported data file '{}': expected .csv, .xlsx, .xlsm, .xlsb, .xls or .ods.",
                path.display()
            ))),
        }
    }
}

/// Column positions of the required fields within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub breed: usize,
    pub year: usize,
    pub month: usize,
    pub total: usize,
}

impl Columns {
    /// Locate the required columns in a header row.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Result<Self, AppError> {
        let header_map: HashMap<String, usize> = headers
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (normalize_header_name(name), idx))
            .collect();

        let find = |name: &str| {
            header_map
                .get(name)
                .copied()
                .ok_or_else(|| AppError::data_load(format!("Missing required column: `{name}`")))
        };

        Ok(Columns {
            breed: find("breed")?,
            year: find("year")?,
            month: find("month")?,
            total: find("total")?,
        })
    }
}

/// Load the registration table from `path`.
pub fn load(path: &Path) -> Result<Table, AppError> {
    if !path.exists() {
        return Err(AppError::data_load(format!(
            "Data file not found: {}",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(AppError::data_load(format!(
            "Expected a file, got a directory: {}",
            path.display()
        )));
    }

    let format = InputFormat::from_path(path)?;
    let records = match format {
        InputFormat::Csv => read_csv_records(path)?,
        InputFormat::Workbook => crate::io::workbook::read_workbook_records(path)?,
    };

    let table = Table::new(records);
    info!(
        path = %path.display(),
        ?format,
        records = table.len(),
        breeds = table.breeds().len(),
        "loaded registration data"
    );
    Ok(table)
}

/// Read every data row of a CSV file.
pub fn read_csv_records(path: &Path) -> Result<Vec<Record>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::data_load(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::data_load(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let columns = Columns::from_headers(headers.iter())?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // records() starts on the line after the header; lines are 1-based.
        let line = idx + 2;
        let record: StringRecord =
            result.map_err(|e| AppError::data_load(format!("CSV parse error on line {line}: {e}")))?;

        let cells: Vec<&str> = record.iter().collect();
        if let Some(r) = parse_row(line, &cells, &columns)? {
            records.push(r);
        }
    }

    Ok(records)
}

/// Parse one data row. Blank rows yield `None`.
pub fn parse_row(line: usize, cells: &[&str], columns: &Columns) -> Result<Option<Record>, AppError> {
    if cells.iter().all(|c| c.trim().is_empty()) {
        return Ok(None);
    }

    let breed = get_required(cells, columns.breed, "breed", line)?;
    let year = get_required(cells, columns.year, "year", line)?;
    let month = get_required(cells, columns.month, "month", line)?;
    let total = get_required(cells, columns.total, "total", line)?;

    let year = parse_whole_number(year).and_then(|v| i32::try_from(v).ok()).ok_or_else(|| {
        AppError::data_load(format!("Invalid `year` value '{year}' on line {line}."))
    })?;
    let total = parse_whole_number(total)
        .and_then(|v| u64::try_from(v).ok())
        .ok_or_else(|| {
            AppError::data_load(format!(
                "Invalid `total` value '{total}' on line {line}: expected a non-negative integer."
            ))
        })?;

    Ok(Some(Record {
        breed: breed.to_string(),
        year,
        month: month.to_string(),
        total,
    }))
}

fn get_required<'a>(cells: &[&'a str], idx: usize, name: &str, line: usize) -> Result<&'a str, AppError> {
    cells
        .get(idx)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::data_load(format!("Missing `{name}` value on line {line}.")))
}

/// Accept `2021` as well as spreadsheet-style `2021.0`.
fn parse_whole_number(s: &str) -> Option<i64> {
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("a.CSV")).unwrap(), InputFormat::Csv);
        assert_eq!(InputFormat::from_path(Path::new("a.xlsx")).unwrap(), InputFormat::Workbook);
        assert!(InputFormat::from_path(Path::new("a.txt")).is_err());
        assert!(InputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn headers_are_case_insensitive_and_bom_tolerant() {
        let cols = Columns::from_headers(["\u{feff}Breed", "Notes", " YEAR ", "Month", "Total"]).unwrap();
        assert_eq!(cols, Columns { breed: 0, year: 2, month: 3, total: 4 });
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let err = Columns::from_headers(["Breed", "Year", "Month"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("`total`"));
    }

    #[test]
    fn load_csv_sorts_and_skips_blank_rows() {
        let file = write_csv(
            "Breed,Year,Month,Total\n\
             PUG,2022,January,5\n\
             ,,,\n\
             BEAGLE,2021,March,3\n\
             PUG,2021,January,10\n",
        );
        let table = load(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.breeds(), vec!["BEAGLE", "PUG"]);
        assert_eq!(table.years_for("PUG"), vec![2021, 2022]);
        assert_eq!(table.grand_total(), 18);
    }

    #[test]
    fn spreadsheet_style_numbers_are_accepted() {
        let cols = Columns { breed: 0, year: 1, month: 2, total: 3 };
        let rec = parse_row(2, &["PUG", "2021.0", "May", "12.0"], &cols).unwrap().unwrap();
        assert_eq!(rec.year, 2021);
        assert_eq!(rec.total, 12);
    }

    #[test]
    fn bad_cells_are_load_errors() {
        let cols = Columns { breed: 0, year: 1, month: 2, total: 3 };
        assert!(parse_row(2, &["PUG", "twenty", "May", "1"], &cols).is_err());
        assert!(parse_row(3, &["PUG", "2021", "May", "-1"], &cols).is_err());
        assert!(parse_row(4, &["PUG", "2021", "May", "1.5"], &cols).is_err());
        assert!(parse_row(5, &["", "2021", "May", "1"], &cols).is_err());

        let err = parse_row(6, &["PUG", "2021", "May"], &cols).unwrap_err();
        assert!(err.to_string().contains("line 6"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load(Path::new("definitely/not/here.csv")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn missing_column_in_file_is_a_load_error() {
        let file = write_csv("Breed,Year,Count\nPUG,2021,4\n");
        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("`month`"));
    }
}
