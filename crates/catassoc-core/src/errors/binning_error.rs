//! Numeric binning errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while computing cut points or binning values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BinningError {
    #[error("No finite values to bin")]
    NoFiniteValues,

    #[error("Variable range includes zero when using 'log' - consider using 'logp1' instead")]
    LogRangeIncludesZero,

    #[error("Invalid binning option {field}: {message}")]
    InvalidOption { field: String, message: String },

    #[error("Fewer than 2 distinct cut points: {found}")]
    TooFewCutpoints { found: usize },
}

impl ErrorCode for BinningError {
    fn error_code(&self) -> &'static str {
        error_code::BINNING_ERROR
    }
}
