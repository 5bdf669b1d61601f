//! Dataset construction errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while assembling a dataset.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("Duplicate column name: {name}")]
    DuplicateColumn { name: String },

    #[error("Column {name} has {found} rows, expected {expected}")]
    RowCountMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Column {name}: code {code} out of range for {levels} levels")]
    CodeOutOfRange {
        name: String,
        code: u32,
        levels: usize,
    },

    #[error("Column {name}: duplicate level {level}")]
    DuplicateLevel { name: String, level: String },
}

impl ErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        error_code::DATASET_ERROR
    }
}
