//! Cross-tabulation errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while building a contingency table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CrosstabError {
    #[error("Column length mismatch: {left} has {left_len} rows, {right} has {right_len}")]
    LengthMismatch {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },

    #[error("Table shape mismatch: expected {expected} cells, got {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Ragged table: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Empty table: at least one row and one column required")]
    Empty,
}

impl ErrorCode for CrosstabError {
    fn error_code(&self) -> &'static str {
        error_code::CROSSTAB_ERROR
    }
}
