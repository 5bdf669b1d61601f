//! Pairwise association matrix builder.
//!
//! Every unordered column pair (i < j) is cross-tabulated and scored once
//! with the bias-corrected Cramér's V; the score is mirrored into (j, i).
//! The diagonal is never computed and stays 0.

use catassoc_core::config::{AssociationConfig, PairErrorPolicy};
use catassoc_core::errors::{AssociationError, CrosstabError, MatrixError};
use catassoc_core::{constants, matrix_span, Dataset};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::types::AssociationMatrix;
use crate::crosstab::crosstab;
use crate::reorder::reverse_cuthill_mckee;
use crate::stats::cramers_corrected_stat;

/// Build the bias-corrected Cramér's V matrix of every column pair.
///
/// With `reorder_cuthill_mckee`, rows and columns are permuted by reverse
/// Cuthill–McKee so strongly associated columns sit next to each other.
/// Fails fast on the first pair that cannot be scored.
pub fn cramers_corrected_matrix(
    dataset: &Dataset,
    reorder_cuthill_mckee: bool,
) -> Result<AssociationMatrix, MatrixError> {
    AssociationEngine::new()
        .with_reorder(reorder_cuthill_mckee)
        .build(dataset)
}

/// Association matrix engine with configurable reordering, parallelism,
/// and pair-failure policy.
#[derive(Debug, Clone)]
pub struct AssociationEngine {
    reorder: bool,
    parallel: bool,
    on_pair_error: PairErrorPolicy,
}

impl AssociationEngine {
    /// Create an engine with the default settings: reorder, sequential,
    /// fail-fast.
    pub fn new() -> Self {
        Self {
            reorder: constants::DEFAULT_REORDER,
            parallel: constants::DEFAULT_PARALLEL,
            on_pair_error: PairErrorPolicy::default(),
        }
    }

    /// Create an engine from resolved configuration.
    pub fn from_config(config: &AssociationConfig) -> Self {
        Self {
            reorder: config.effective_reorder(),
            parallel: config.effective_parallel(),
            on_pair_error: config.effective_on_pair_error(),
        }
    }

    pub fn with_reorder(mut self, reorder: bool) -> Self {
        self.reorder = reorder;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_pair_error_policy(mut self, policy: PairErrorPolicy) -> Self {
        self.on_pair_error = policy;
        self
    }

    pub fn reorder(&self) -> bool {
        self.reorder
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn pair_error_policy(&self) -> PairErrorPolicy {
        self.on_pair_error
    }

    /// Build the association matrix for `dataset`.
    pub fn build(&self, dataset: &Dataset) -> Result<AssociationMatrix, MatrixError> {
        let m = dataset.n_columns();
        if m < 2 {
            return Err(MatrixError::TooFewColumns { found: m });
        }

        let span = matrix_span!(m, dataset.n_rows());
        let _guard = span.enter();

        let mut pairs = Vec::with_capacity(m * (m - 1) / 2);
        for i in 0..m {
            for j in (i + 1)..m {
                pairs.push((i, j));
            }
        }

        // Sequential collection short-circuits on the first error. The
        // parallel path scores everything, then reports the first failing
        // pair in (i, j) order.
        let scores: Vec<f64> = if self.parallel {
            let results: Vec<Result<f64, MatrixError>> = pairs
                .par_iter()
                .map(|&(i, j)| self.score_pair(dataset, i, j))
                .collect();
            results.into_iter().collect::<Result<_, _>>()?
        } else {
            pairs
                .iter()
                .map(|&(i, j)| self.score_pair(dataset, i, j))
                .collect::<Result<_, _>>()?
        };

        let labels = dataset
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut matrix = AssociationMatrix::zeros(labels);
        for (&(i, j), &score) in pairs.iter().zip(&scores) {
            matrix.set_symmetric(i, j, score);
        }

        if self.reorder {
            let perm = reverse_cuthill_mckee(matrix.values(), m)?;
            matrix = matrix.permuted(&perm)?;
        }

        info!(
            columns = m,
            pairs = pairs.len(),
            reordered = self.reorder,
            bandwidth = matrix.bandwidth(),
            "association matrix built"
        );

        Ok(matrix)
    }

    /// Score columns `i` and `j`, applying the pair-failure policy.
    fn score_pair(&self, dataset: &Dataset, i: usize, j: usize) -> Result<f64, MatrixError> {
        let columns = dataset.columns();
        let (left, right) = (&columns[i], &columns[j]);

        let outcome = match crosstab(left, right) {
            Ok(table) => cramers_corrected_stat(&table),
            Err(CrosstabError::Empty) => Err(AssociationError::invalid_argument(
                "no rows where both columns are present",
            )),
            Err(e) => return Err(e.into()),
        };

        match outcome {
            Ok(score) => {
                debug!(left = left.name(), right = right.name(), score, "pair scored");
                Ok(score)
            }
            Err(source) => match self.on_pair_error {
                PairErrorPolicy::FailFast => Err(MatrixError::PairFailed {
                    left: left.name().to_string(),
                    right: right.name().to_string(),
                    source,
                }),
                PairErrorPolicy::Nan => {
                    warn!(
                        left = left.name(),
                        right = right.name(),
                        error = %source,
                        "pair failed, writing NaN"
                    );
                    Ok(f64::NAN)
                }
            },
        }
    }
}

impl Default for AssociationEngine {
    fn default() -> Self {
        Self::new()
    }
}
