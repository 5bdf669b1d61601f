//! Association matrix errors.

use super::error_code::{self, ErrorCode};
use super::{AssociationError, CrosstabError};

/// Errors that abort construction of a pairwise association matrix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("At least 2 columns are required, found {found}")]
    TooFewColumns { found: usize },

    #[error("Pair ({left}, {right}) failed: {source}")]
    PairFailed {
        left: String,
        right: String,
        #[source]
        source: AssociationError,
    },

    #[error("Cross-tabulation failed: {0}")]
    Crosstab(#[from] CrosstabError),

    #[error("Invalid permutation: {reason}")]
    InvalidPermutation { reason: String },

    #[error("Matrix of size {size} needs {expected} values, found {found}")]
    DimensionMismatch {
        size: usize,
        expected: usize,
        found: usize,
    },
}

impl ErrorCode for MatrixError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewColumns { .. } => error_code::INVALID_ARGUMENT,
            Self::PairFailed { source, .. } => source.error_code(),
            Self::Crosstab(e) => e.error_code(),
            Self::InvalidPermutation { .. } | Self::DimensionMismatch { .. } => {
                error_code::MATRIX_ERROR
            }
        }
    }
}
