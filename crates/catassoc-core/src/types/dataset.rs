//! Categorical columns and the datasets that hold them.
//!
//! A column stores its distinct levels once and one `Option<u32>` code per
//! row; `None` marks a missing value. Rows align positionally across the
//! columns of a dataset.

use super::collections::{FxHashMap, FxHashSet};
use crate::errors::DatasetError;

/// A named column of categorical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalColumn {
    name: String,
    levels: Vec<String>,
    codes: Vec<Option<u32>>,
}

impl CategoricalColumn {
    /// Build a column with no missing values. Levels are numbered in order
    /// of first appearance.
    pub fn from_values<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_optional(name, values.into_iter().map(Some))
    }

    /// Build a column where `None` marks a missing value.
    pub fn from_optional<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut index: FxHashMap<String, u32> = FxHashMap::default();
        let mut levels = Vec::new();
        let codes = values
            .into_iter()
            .map(|value| {
                value.map(|v| {
                    let v = v.as_ref();
                    if let Some(&code) = index.get(v) {
                        return code;
                    }
                    let code = levels.len() as u32;
                    levels.push(v.to_string());
                    index.insert(v.to_string(), code);
                    code
                })
            })
            .collect();

        Self {
            name: name.into(),
            levels,
            codes,
        }
    }

    /// Build a column from an explicit level list and per-row codes.
    /// Levels may be unobserved; every code must index into `levels`.
    pub fn from_codes(
        name: impl Into<String>,
        levels: Vec<String>,
        codes: Vec<Option<u32>>,
    ) -> Result<Self, DatasetError> {
        let name = name.into();

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for level in &levels {
            if !seen.insert(level.as_str()) {
                return Err(DatasetError::DuplicateLevel {
                    name,
                    level: level.clone(),
                });
            }
        }

        if let Some(&code) = codes
            .iter()
            .flatten()
            .find(|&&code| code as usize >= levels.len())
        {
            return Err(DatasetError::CodeOutOfRange {
                name,
                code,
                levels: levels.len(),
            });
        }

        Ok(Self {
            name,
            levels,
            codes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows, missing values included.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Distinct level labels, indexed by code.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn codes(&self) -> &[Option<u32>] {
        &self.codes
    }

    /// Label of the value at `row`, or `None` if missing or out of range.
    pub fn value(&self, row: usize) -> Option<&str> {
        self.codes
            .get(row)
            .copied()
            .flatten()
            .map(|code| self.levels[code as usize].as_str())
    }

    /// Iterate over row values as labels.
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.codes
            .iter()
            .map(move |code| code.map(|c| self.levels[c as usize].as_str()))
    }

    /// Number of missing values.
    pub fn missing_count(&self) -> usize {
        self.codes.iter().filter(|c| c.is_none()).count()
    }

    /// Return the same column under a new name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// An ordered collection of uniquely named categorical columns with a
/// shared row count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<CategoricalColumn>,
    index: FxHashMap<String, usize>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from columns, preserving their order.
    pub fn from_columns<I>(columns: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = CategoricalColumn>,
    {
        let mut dataset = Self::new();
        for column in columns {
            dataset.push_column(column)?;
        }
        Ok(dataset)
    }

    /// Append a column. Names must be unique and row counts must agree.
    pub fn push_column(&mut self, column: CategoricalColumn) -> Result<(), DatasetError> {
        if self.index.contains_key(column.name()) {
            return Err(DatasetError::DuplicateColumn {
                name: column.name().to_string(),
            });
        }
        self.check_row_count(&column)?;
        self.index
            .insert(column.name().to_string(), self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    /// Builder-style variant of [`Dataset::push_column`].
    pub fn with_column(mut self, column: CategoricalColumn) -> Result<Self, DatasetError> {
        self.push_column(column)?;
        Ok(self)
    }

    /// Replace the column with the same name in place, keeping its position.
    /// Returns the previous column, or appends and returns `None` if absent.
    pub fn replace_column(
        &mut self,
        column: CategoricalColumn,
    ) -> Result<Option<CategoricalColumn>, DatasetError> {
        match self.index.get(column.name()).copied() {
            Some(pos) => {
                if column.len() != self.columns[pos].len() {
                    return Err(DatasetError::RowCountMismatch {
                        name: column.name().to_string(),
                        expected: self.columns[pos].len(),
                        found: column.len(),
                    });
                }
                Ok(Some(std::mem::replace(&mut self.columns[pos], column)))
            }
            None => {
                self.push_column(column)?;
                Ok(None)
            }
        }
    }

    /// Shared row count; 0 for a dataset without columns.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, CategoricalColumn::len)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[CategoricalColumn] {
        &self.columns
    }

    /// Column names in dataset order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(CategoricalColumn::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&CategoricalColumn> {
        self.index.get(name).map(|&pos| &self.columns[pos])
    }

    pub fn column_at(&self, pos: usize) -> Option<&CategoricalColumn> {
        self.columns.get(pos)
    }

    fn check_row_count(&self, column: &CategoricalColumn) -> Result<(), DatasetError> {
        match self.columns.first() {
            Some(first) if first.len() != column.len() => Err(DatasetError::RowCountMismatch {
                name: column.name().to_string(),
                expected: first.len(),
                found: column.len(),
            }),
            _ => Ok(()),
        }
    }
}
