//! On-disk store for raw API responses.
//!
//! Layout: `<root>/<SYMBOL>/<endpoint>.json`, one pretty-printed file per
//! statement, holding the response body verbatim.

use crate::error::{DataError, Result};
use crate::statement::{StatementKind, StatementTable};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw response store rooted at a directory.
#[derive(Debug, Clone)]
pub struct RawStore {
    root: PathBuf,
}

impl RawStore {
    /// Create a store rooted at `root` (typically `data/raw`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one symbol's files.
    pub fn symbol_dir(&self, symbol: &str) -> PathBuf {
        self.root.join(symbol)
    }

    /// Path of one statement file.
    pub fn path(&self, symbol: &str, kind: StatementKind) -> PathBuf {
        self.symbol_dir(symbol)
            .join(format!("{}.json", kind.endpoint()))
    }

    /// Write a response body, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, symbol: &str, kind: StatementKind, body: &Value) -> Result<PathBuf> {
        let dir = self.symbol_dir(symbol);
        fs::create_dir_all(&dir).map_err(|e| DataError::io(&dir, e))?;

        let path = self.path(symbol, kind);
        let text = serde_json::to_string_pretty(body)?;
        fs::write(&path, text).map_err(|e| DataError::io(&path, e))?;

        debug!(symbol, statement = %kind, path = %path.display(), "raw response saved");
        Ok(path)
    }

    /// Read a stored response body.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Io` if the file is missing, or a serialization
    /// error if it is not valid JSON.
    pub fn load(&self, symbol: &str, kind: StatementKind) -> Result<Value> {
        let path = self.path(symbol, kind);
        let text = fs::read_to_string(&path).map_err(|e| DataError::io(&path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Read a stored response as a statement table.
    ///
    /// # Errors
    ///
    /// Fails like [`load`](Self::load), or if the body is not an array of
    /// objects.
    pub fn load_table(&self, symbol: &str, kind: StatementKind) -> Result<StatementTable> {
        let table = StatementTable::from_json(kind, self.load(symbol, kind)?)?;
        debug!(symbol, statement = %kind, records = table.len(), "raw table loaded");
        Ok(table)
    }
}
