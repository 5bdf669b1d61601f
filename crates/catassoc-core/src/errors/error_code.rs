//! ErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable, machine-readable
/// code string alongside its human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_ARGUMENT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const DIVISION_BY_ZERO: &str = "DIVISION_BY_ZERO";
pub const INVALID_RESULT: &str = "INVALID_RESULT";
pub const CROSSTAB_ERROR: &str = "CROSSTAB_ERROR";
pub const MATRIX_ERROR: &str = "MATRIX_ERROR";
pub const DATASET_ERROR: &str = "DATASET_ERROR";
pub const BINNING_ERROR: &str = "BINNING_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
