//! Span definitions for matrix construction and binning.

/// Create a matrix construction span.
#[macro_export]
macro_rules! matrix_span {
    ($columns:expr, $rows:expr) => {
        $crate::__tracing::info_span!("catassoc.matrix", columns = $columns, rows = $rows)
    };
}

/// Create a binning span.
#[macro_export]
macro_rules! binning_span {
    ($column:expr) => {
        $crate::__tracing::info_span!("catassoc.binning", column = %$column)
    };
}
