#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Export of result tables to spreadsheet files.
//!
//! The output format follows the file extension: `.xlsx` workbooks are
//! written with [`rust_xlsxwriter`], `.csv` with [`csv`], and `.json` as the
//! serialized table. Missing values are written as empty cells.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use strum_macros::{AsRefStr, Display, EnumString};
use transcripts_record_models::{Cell, ResultTable};

/// Name of the single worksheet in exported workbooks.
pub const SHEET_NAME: &str = "Summary";

/// Errors that can occur while exporting a table.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output path has no recognized extension.
    #[error("Unsupported output format for {path}: expected .xlsx, .csv, or .json")]
    UnsupportedFormat {
        /// The rejected output path.
        path: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Workbook creation failed.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// The table does not fit in a worksheet.
    #[error("Table too large for a worksheet: {message}")]
    TooLarge {
        /// Which dimension overflowed.
        message: String,
    },
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    /// Excel workbook.
    Xlsx,
    /// Comma-separated values.
    Csv,
    /// Serialized table (`{"columns": [...], "rows": [[...]]}`).
    Json,
}

impl ExportFormat {
    /// Picks the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedFormat`] if the extension is
    /// missing or unknown.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| ExportError::UnsupportedFormat {
                path: path.display().to_string(),
            })
    }
}

/// Writes `table` to `path` in the format implied by its extension.
///
/// # Errors
///
/// Returns [`ExportError`] if the format is unsupported or writing fails.
pub fn export(table: &ResultTable, path: &Path) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path)?;

    match format {
        ExportFormat::Xlsx => write_xlsx(table, path)?,
        ExportFormat::Csv => {
            let file = std::fs::File::create(path)?;
            write_csv(table, file)?;
        }
        ExportFormat::Json => {
            let file = std::fs::File::create(path)?;
            write_json(table, std::io::BufWriter::new(file))?;
        }
    }

    log::info!(
        "Wrote {} row(s) to {} ({format})",
        table.len(),
        path.display()
    );

    Ok(format)
}

/// Writes `table` as CSV with a header row.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if writing fails.
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&table.columns)?;
    for row in &table.rows {
        csv.write_record(row.iter().map(Cell::render))?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes `table` as pretty-printed JSON; empty cells become `null`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn write_json<W: Write>(table: &ResultTable, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, table)?;
    Ok(())
}

/// Writes `table` as a single-sheet workbook with a header row.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] if the workbook cannot be built or saved
/// and [`ExportError::TooLarge`] if the table exceeds worksheet limits.
pub fn write_xlsx(table: &ResultTable, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in table.columns.iter().enumerate() {
        sheet.write_string(0, column_index(col)?, header)?;
    }

    for (r, row) in table.rows.iter().enumerate() {
        let r = u32::try_from(r + 1).map_err(|_| ExportError::TooLarge {
            message: format!("{} rows", table.rows.len()),
        })?;
        for (col, cell) in row.iter().enumerate() {
            let col = column_index(col)?;
            match cell {
                Cell::Empty => {}
                Cell::Text(s) => {
                    sheet.write_string(r, col, s)?;
                }
                Cell::Count(n) => {
                    sheet.write_number(r, col, f64::from(*n))?;
                }
                Cell::Number(n) => {
                    sheet.write_number(r, col, *n)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn column_index(col: usize) -> Result<u16, ExportError> {
    u16::try_from(col).map_err(|_| ExportError::TooLarge {
        message: format!("column {col}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResultTable {
        ResultTable {
            columns: vec![
                "Name".to_owned(),
                "MTH^ GPA".to_owned(),
                "Num MTH^ now".to_owned(),
                "MTH 9".to_owned(),
            ],
            rows: vec![
                vec![
                    Cell::Text("Ada Lovelace".to_owned()),
                    Cell::Number(3.5),
                    Cell::Count(1),
                    Cell::Text("A-".to_owned()),
                ],
                vec![
                    Cell::Text("Alan Turing".to_owned()),
                    Cell::Empty,
                    Cell::Count(0),
                    Cell::Empty,
                ],
            ],
        }
    }

    #[test]
    fn picks_format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/TranscriptSummary.xlsx")).unwrap(),
            ExportFormat::Xlsx
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("summary.CSV")).unwrap(),
            ExportFormat::Csv
        );
        assert!(matches!(
            ExportFormat::from_path(Path::new("summary.ods")),
            Err(ExportError::UnsupportedFormat { .. })
        ));
        assert!(ExportFormat::from_path(Path::new("summary")).is_err());
    }

    #[test]
    fn csv_leaves_missing_values_blank() {
        let mut out = Vec::new();
        write_csv(&table(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name,MTH^ GPA,Num MTH^ now,MTH 9");
        assert_eq!(lines[1], "Ada Lovelace,3.5,1,A-");
        assert_eq!(lines[2], "Alan Turing,,0,");
    }

    #[test]
    fn json_writes_nulls_for_missing_values() {
        let mut out = Vec::new();
        write_json(&table(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["columns"][0], "Name");
        assert_eq!(value["rows"][0][1], 3.5);
        assert!(value["rows"][1][1].is_null());
    }

    #[test]
    fn exports_each_format_to_disk() {
        let dir = std::env::temp_dir().join(format!("transcripts_export_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        for name in ["summary.csv", "summary.json", "summary.xlsx"] {
            let path = dir.join(name);
            export(&table(), &path).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }

        std::fs::remove_dir_all(&dir).ok();
    }
}
