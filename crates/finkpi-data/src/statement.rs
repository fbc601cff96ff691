//! Statement kinds, records and tables.
//!
//! The API returns one JSON object per annual period. Field sets differ by
//! statement kind and drift between API vintages, so records keep the raw
//! object, in the API's key order, instead of a fixed struct.

use crate::error::{DataError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt;

/// The three annual statements retrieved per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatementKind {
    /// Income statement
    Income,
    /// Balance sheet statement
    BalanceSheet,
    /// Cash flow statement
    CashFlow,
}

impl StatementKind {
    /// All kinds, in fetch and merge order.
    pub const ALL: [Self; 3] = [Self::Income, Self::BalanceSheet, Self::CashFlow];

    /// API endpoint name, also used as the raw file stem.
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Income => "income-statement",
            Self::BalanceSheet => "balance-sheet-statement",
            Self::CashFlow => "cash-flow-statement",
        }
    }

    /// Name of the cleaned table written by the transform stage.
    pub const fn table_name(&self) -> &'static str {
        match self {
            Self::Income => "income_clean",
            Self::BalanceSheet => "balance_clean",
            Self::CashFlow => "cashflow_clean",
        }
    }

    /// Suffix given to this statement's columns when a join collides.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Income => "_income",
            Self::BalanceSheet => "_balance",
            Self::CashFlow => "_cashflow",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// One annual reporting period of one statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementRecord {
    fields: Map<String, Value>,
}

impl StatementRecord {
    /// Wrap a raw JSON object.
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field names present in this record.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// All records of one statement kind for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementTable {
    /// Statement kind
    pub kind: StatementKind,
    /// Records in API order
    pub records: Vec<StatementRecord>,
}

impl StatementTable {
    /// Create a table from records.
    pub const fn new(kind: StatementKind, records: Vec<StatementRecord>) -> Self {
        Self { kind, records }
    }

    /// Build a table from a raw API response.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Parse` if the response is not an array of objects.
    pub fn from_json(kind: StatementKind, value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(DataError::Parse(format!(
                "{kind} response is not a JSON array"
            )));
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(fields) => Ok(StatementRecord::new(fields)),
                other => Err(DataError::Parse(format!(
                    "{kind} record {i} is not an object: {other}"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(kind, records))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the API returned no periods.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Union of field names across all records, sorted.
    pub fn column_names(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(StatementRecord::field_names)
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Convert to a `DataFrame` with one column per field.
    ///
    /// A column whose non-null values are all JSON numbers becomes `Float64`;
    /// anything else becomes `String`. Fields missing from a record are null.
    ///
    /// # Errors
    ///
    /// Returns a polars error if the frame cannot be assembled.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns = self
            .column_names()
            .into_iter()
            .map(|name| self.column(&name))
            .collect::<Vec<_>>();

        Ok(DataFrame::new(columns)?)
    }

    fn column(&self, name: &str) -> Column {
        let values: Vec<Option<&Value>> = self
            .records
            .iter()
            .map(|r| r.get(name).filter(|v| !v.is_null()))
            .collect();

        let numeric = values.iter().flatten().all(|v| v.is_number());
        if numeric {
            let cells: Vec<Option<f64>> = values
                .iter()
                .map(|v| v.and_then(Value::as_f64))
                .collect();
            Series::new(name.into(), cells).into()
        } else {
            let cells: Vec<Option<String>> = values
                .iter()
                .map(|v| {
                    v.map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                })
                .collect();
            Series::new(name.into(), cells).into()
        }
    }
}
