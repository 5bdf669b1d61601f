//! Association statistic errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while computing a contingency-table statistic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssociationError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    #[error("Invalid result: {reason}")]
    InvalidResult { reason: String },
}

impl AssociationError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn invalid_result(reason: impl Into<String>) -> Self {
        Self::InvalidResult {
            reason: reason.into(),
        }
    }
}

impl ErrorCode for AssociationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::DivisionByZero { .. } => error_code::DIVISION_BY_ZERO,
            Self::InvalidResult { .. } => error_code::INVALID_RESULT,
        }
    }
}
