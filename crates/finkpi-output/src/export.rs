//! CSV export for data frames.
//!
//! Cells are rendered column by column, then written row by row. `Float64`
//! values use the shortest representation that reads back to the same `f64`,
//! so unchanged input always produces byte-identical files. Every other
//! column is cast to text; dates come out as `YYYY-MM-DD`. Nulls are empty
//! fields.

use polars::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error with the path that failed.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// File or directory being written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Buffer flush error.
    #[error("IO error: {0}")]
    Buffer(#[from] std::io::Error),

    /// Rendered output was not UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Polars error while rendering a column.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl ExportError {
    /// Attach a path to an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Trait for exporting tabular data as CSV.
pub trait Exporter {
    /// Write CSV to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    fn write_csv<W: Write>(&self, writer: W) -> Result<()>;

    /// Export to a CSV string.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn export_to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Export to a CSV file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file writing fails.
    fn export_to_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
        self.write_csv(file)
    }
}

impl Exporter for DataFrame {
    fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        if self.width() == 0 {
            wtr.flush()?;
            return Ok(());
        }

        wtr.write_record(self.get_column_names().iter().map(|name| name.as_str()))?;

        let cells = self
            .get_columns()
            .iter()
            .map(render_column)
            .collect::<Result<Vec<_>>>()?;

        for row in 0..self.height() {
            wtr.write_record(
                cells
                    .iter()
                    .map(|column| column[row].as_deref().unwrap_or_default()),
            )?;
        }

        wtr.flush()?;
        Ok(())
    }
}

/// Render one column as text cells, `None` for null.
fn render_column(column: &Column) -> Result<Vec<Option<String>>> {
    if column.dtype() == &DataType::Float64 {
        return Ok(column
            .f64()?
            .into_iter()
            .map(|v| v.map(format_float))
            .collect());
    }

    let text = column.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Shortest round-trip rendering; `NaN` and infinities use their names.
pub fn format_float(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        let dates = Series::new("date".into(), ["2023-12-31", "2022-12-31"])
            .cast(&DataType::Date)
            .unwrap();
        DataFrame::new(vec![
            dates.into(),
            Series::new("revenue".into(), [1000.0, 900.0]).into(),
            Series::new("grossMargin".into(), [Some(0.4), None]).into(),
            Series::new("period".into(), ["FY", "FY"]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_export_to_string() {
        let csv = frame().export_to_string().unwrap();
        assert_eq!(
            csv,
            "date,revenue,grossMargin,period\n\
             2023-12-31,1000,0.4,FY\n\
             2022-12-31,900,,FY\n"
        );
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(-7.0 / 3.0), "-2.3333333333333335");
        assert_eq!(format_float(383285000000.0), "383285000000");
        assert_eq!(format_float(0.0), "0");
    }

    #[test]
    fn test_header_only() {
        let df = frame().head(Some(0));
        let csv = df.export_to_string().unwrap();
        assert_eq!(csv, "date,revenue,grossMargin,period\n");
    }

    #[test]
    fn test_empty_frame() {
        assert_eq!(DataFrame::empty().export_to_string().unwrap(), "");
    }

    #[test]
    fn test_quoting() {
        let df = DataFrame::new(vec![
            Series::new("finalLink".into(), ["https://example.com/a,b"]).into(),
        ])
        .unwrap();
        let csv = df.export_to_string().unwrap();
        assert_eq!(csv, "finalLink\n\"https://example.com/a,b\"\n");
    }

    #[test]
    fn test_export_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("table.csv");
        let result = frame().export_to_file(&path);
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
