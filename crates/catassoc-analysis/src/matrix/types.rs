//! Association matrix type. Square, symmetric, labelled by column name.

use catassoc_core::errors::MatrixError;
use serde::Serialize;

use crate::reorder;

/// A square matrix of association scores indexed by column name.
///
/// Row-major. Row `i` and column `i` both refer to `labels[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationMatrix {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl AssociationMatrix {
    /// A zero matrix over `labels`.
    pub fn zeros(labels: Vec<String>) -> Self {
        let size = labels.len();
        Self {
            labels,
            values: vec![0.0; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Column names in row/column order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Score at (row, col). Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let size = self.size();
        assert!(row < size && col < size, "cell out of range");
        self.values[row * size + col]
    }

    /// Score between two named columns.
    pub fn get_by_name(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.position(row)?;
        let j = self.position(col)?;
        Some(self.get(i, j))
    }

    /// Position of a column name in the current order.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let size = self.size();
        &self.values[row * size..(row + 1) * size]
    }

    /// Write `value` at (i, j) and (j, i).
    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        let size = self.size();
        self.values[i * size + j] = value;
        self.values[j * size + i] = value;
    }

    /// Nested rows, convenient for display and comparison.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size()).map(|r| self.row(r).to_vec()).collect()
    }

    /// Split into (rows, labels).
    pub fn into_parts(self) -> (Vec<Vec<f64>>, Vec<String>) {
        let rows = self.to_rows();
        (rows, self.labels)
    }

    /// `M[perm][:, perm]` with labels permuted the same way.
    pub fn permuted(&self, perm: &[usize]) -> Result<Self, MatrixError> {
        let size = self.size();
        if perm.len() != size {
            return Err(MatrixError::InvalidPermutation {
                reason: format!("expected {size} indices, got {}", perm.len()),
            });
        }
        let mut seen = vec![false; size];
        for &p in perm {
            if p >= size || std::mem::replace(&mut seen[p], true) {
                return Err(MatrixError::InvalidPermutation {
                    reason: format!("index {p} is out of range or repeated"),
                });
            }
        }

        let mut values = Vec::with_capacity(size * size);
        for &i in perm {
            for &j in perm {
                values.push(self.values[i * size + j]);
            }
        }
        let labels = perm.iter().map(|&i| self.labels[i].clone()).collect();
        Ok(Self { labels, values })
    }

    /// True when entry (i, j) equals entry (j, i) everywhere, NaN matching NaN.
    pub fn is_symmetric(&self) -> bool {
        let size = self.size();
        (0..size).all(|i| {
            (i + 1..size).all(|j| {
                let (a, b) = (self.get(i, j), self.get(j, i));
                a == b || (a.is_nan() && b.is_nan())
            })
        })
    }

    /// Max |i - j| over non-zero off-diagonal entries.
    pub fn bandwidth(&self) -> usize {
        reorder::cuthill_mckee::dense_bandwidth(&self.values, self.size())
    }
}
