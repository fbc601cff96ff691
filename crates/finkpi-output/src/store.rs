//! On-disk store for processed tables.
//!
//! Layout: `<root>/<SYMBOL>/<name>.csv`. Existing files are overwritten.

use crate::export::{ExportError, Exporter, Result};
use polars::prelude::DataFrame;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Processed table store rooted at a directory.
#[derive(Debug, Clone)]
pub struct ProcessedStore {
    root: PathBuf,
}

impl ProcessedStore {
    /// Create a store rooted at `root` (typically `data/processed`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one symbol's tables.
    pub fn symbol_dir(&self, symbol: &str) -> PathBuf {
        self.root.join(symbol)
    }

    /// Path of one named table.
    pub fn path(&self, symbol: &str, name: &str) -> PathBuf {
        self.symbol_dir(symbol).join(format!("{name}.csv"))
    }

    /// Write one table as CSV, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the table
    /// cannot be written.
    pub fn save(&self, symbol: &str, name: &str, df: &DataFrame) -> Result<PathBuf> {
        let dir = self.symbol_dir(symbol);
        fs::create_dir_all(&dir).map_err(|e| ExportError::io(&dir, e))?;

        let path = self.path(symbol, name);
        df.export_to_file(&path)?;

        debug!(
            symbol,
            table = name,
            rows = df.height(),
            path = %path.display(),
            "table saved"
        );
        Ok(path)
    }

    /// Write several tables in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// See [`save`](Self::save).
    pub fn save_all(&self, symbol: &str, tables: &[(&str, &DataFrame)]) -> Result<Vec<PathBuf>> {
        tables
            .iter()
            .map(|(name, df)| self.save(symbol, name, df))
            .collect()
    }
}
