//! Pearson chi-squared test of independence via `statrs`.
//!
//! No continuity correction is applied, whatever the table size.

use catassoc_core::errors::AssociationError;
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::crosstab::ContingencyTable;

/// Result of a chi-squared independence test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChiSquaredTest {
    /// Pearson chi-squared statistic.
    pub statistic: f64,
    /// Degrees of freedom: (r - 1)(k - 1).
    pub dof: u64,
    /// Upper-tail probability of `statistic` under independence.
    pub p_value: f64,
    /// Total number of observations.
    pub n: u64,
}

/// Run the chi-squared test of independence on a contingency table.
///
/// Requires at least 2 rows and 2 columns, a positive total, and a nonzero
/// marginal sum for every row and column.
pub fn chi2_independence(table: &ContingencyTable) -> Result<ChiSquaredTest, AssociationError> {
    let (r, k) = table.shape();
    if r < 2 || k < 2 {
        return Err(AssociationError::invalid_argument(format!(
            "contingency table must be at least 2x2, got {r}x{k}"
        )));
    }

    let n = table.total();
    if n == 0 {
        return Err(AssociationError::invalid_argument(
            "contingency table total must be > 0",
        ));
    }

    let row_sums = table.row_sums();
    let col_sums = table.col_sums();
    if let Some(row) = row_sums.iter().position(|&s| s == 0) {
        return Err(AssociationError::invalid_argument(format!(
            "row {row} has a zero marginal sum"
        )));
    }
    if let Some(col) = col_sums.iter().position(|&s| s == 0) {
        return Err(AssociationError::invalid_argument(format!(
            "column {col} has a zero marginal sum"
        )));
    }

    let total = n as f64;
    let mut terms = Vec::with_capacity(r * k);
    for (i, &rs) in row_sums.iter().enumerate() {
        for (j, &cs) in col_sums.iter().enumerate() {
            let expected = rs as f64 * cs as f64 / total;
            let d = table.get(i, j) as f64 - expected;
            terms.push(d * d / expected);
        }
    }
    // Summing in sorted order makes the statistic identical for a table
    // and its transpose.
    terms.sort_by(f64::total_cmp);
    let statistic: f64 = terms.iter().sum();

    let dof = ((r - 1) * (k - 1)) as u64;
    let p_value = chi2_sf(statistic, dof as f64)?;

    Ok(ChiSquaredTest {
        statistic,
        dof,
        p_value,
        n,
    })
}

fn chi2_sf(statistic: f64, dof: f64) -> Result<f64, AssociationError> {
    let dist = ChiSquared::new(dof).map_err(|e| AssociationError::invalid_argument(e.to_string()))?;
    Ok(dist.sf(statistic).clamp(0.0, 1.0))
}
