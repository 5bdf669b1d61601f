//! Contingency table type: a dense r × k grid of co-occurrence counts.

use catassoc_core::errors::CrosstabError;
use serde::Serialize;

/// Observed counts of two categorical variables' level combinations.
///
/// Stored row-major. Row and column labels are empty for tables built
/// directly from counts and filled in by [`crate::crosstab::crosstab`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContingencyTable {
    n_rows: usize,
    n_cols: usize,
    counts: Vec<u64>,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
}

impl ContingencyTable {
    /// Build a table from nested rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[u64]>>(rows: &[R]) -> Result<Self, CrosstabError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if n_rows == 0 || n_cols == 0 {
            return Err(CrosstabError::Empty);
        }

        let mut counts = Vec::with_capacity(n_rows * n_cols);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != n_cols {
                return Err(CrosstabError::RaggedRows {
                    row,
                    expected: n_cols,
                    found: cells.len(),
                });
            }
            counts.extend_from_slice(cells);
        }

        Ok(Self {
            n_rows,
            n_cols,
            counts,
            row_labels: Vec::new(),
            col_labels: Vec::new(),
        })
    }

    /// Build a table from row-major counts.
    pub fn from_flat(n_rows: usize, n_cols: usize, counts: Vec<u64>) -> Result<Self, CrosstabError> {
        if n_rows == 0 || n_cols == 0 {
            return Err(CrosstabError::Empty);
        }
        if counts.len() != n_rows * n_cols {
            return Err(CrosstabError::ShapeMismatch {
                expected: n_rows * n_cols,
                found: counts.len(),
            });
        }
        Ok(Self {
            n_rows,
            n_cols,
            counts,
            row_labels: Vec::new(),
            col_labels: Vec::new(),
        })
    }

    /// Attach level labels. Lengths must match the table shape.
    pub(crate) fn with_labels(mut self, row_labels: Vec<String>, col_labels: Vec<String>) -> Self {
        debug_assert_eq!(row_labels.len(), self.n_rows);
        debug_assert_eq!(col_labels.len(), self.n_cols);
        self.row_labels = row_labels;
        self.col_labels = col_labels;
        self
    }

    /// (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Count at (row, col). Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        assert!(row < self.n_rows && col < self.n_cols, "cell out of range");
        self.counts[row * self.n_cols + col]
    }

    pub fn row(&self, row: usize) -> &[u64] {
        &self.counts[row * self.n_cols..(row + 1) * self.n_cols]
    }

    /// Row-major counts.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn row_sums(&self) -> Vec<u64> {
        (0..self.n_rows).map(|r| self.row(r).iter().sum()).collect()
    }

    pub fn col_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.n_cols];
        for r in 0..self.n_rows {
            for (sum, &v) in sums.iter_mut().zip(self.row(r)) {
                *sum += v;
            }
        }
        sums
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Swap the roles of the two variables.
    pub fn transpose(&self) -> Self {
        let mut counts = Vec::with_capacity(self.counts.len());
        for c in 0..self.n_cols {
            for r in 0..self.n_rows {
                counts.push(self.counts[r * self.n_cols + c]);
            }
        }
        Self {
            n_rows: self.n_cols,
            n_cols: self.n_rows,
            counts,
            row_labels: self.col_labels.clone(),
            col_labels: self.row_labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marginals() {
        let t = ContingencyTable::from_rows(&[[1u64, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(t.shape(), (2, 3));
        assert_eq!(t.row_sums(), vec![6, 15]);
        assert_eq!(t.col_sums(), vec![5, 7, 9]);
        assert_eq!(t.total(), 21);
        assert_eq!(t.get(1, 2), 6);
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![vec![1u64, 2], vec![3]];
        let err = ContingencyTable::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            CrosstabError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_rejected() {
        let rows: Vec<Vec<u64>> = vec![];
        assert_eq!(ContingencyTable::from_rows(&rows), Err(CrosstabError::Empty));
        assert_eq!(
            ContingencyTable::from_flat(0, 3, vec![]),
            Err(CrosstabError::Empty)
        );
    }

    #[test]
    fn flat_shape_checked() {
        let err = ContingencyTable::from_flat(2, 2, vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, CrosstabError::ShapeMismatch { expected: 4, found: 3 }));
    }

    #[test]
    fn transpose_swaps_axes() {
        let t = ContingencyTable::from_rows(&[[1u64, 2, 3], [4, 5, 6]]).unwrap();
        let tt = t.transpose();
        assert_eq!(tt.shape(), (3, 2));
        assert_eq!(tt.row(0), &[1, 4]);
        assert_eq!(tt.transpose(), t);
    }
}
