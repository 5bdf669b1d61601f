//! Association matrix configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// What the matrix builder does when a single column pair fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairErrorPolicy {
    /// Abort the whole matrix on the first failing pair.
    #[default]
    FailFast,
    /// Write NaN into the failing cell and continue.
    Nan,
}

impl std::str::FromStr for PairErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" | "fail-fast" => Ok(Self::FailFast),
            "nan" => Ok(Self::Nan),
            other => Err(format!("unknown pair error policy: {other}")),
        }
    }
}

/// Configuration for pairwise association matrix construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AssociationConfig {
    /// Reorder rows/columns with reverse Cuthill–McKee. Default: true.
    pub reorder: Option<bool>,
    /// Score column pairs on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Behaviour on a failing pair. Default: fail_fast.
    pub on_pair_error: Option<PairErrorPolicy>,
}

impl AssociationConfig {
    /// Returns the effective reorder flag, defaulting to true.
    pub fn effective_reorder(&self) -> bool {
        self.reorder.unwrap_or(constants::DEFAULT_REORDER)
    }

    /// Returns the effective parallelism flag, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(constants::DEFAULT_PARALLEL)
    }

    /// Returns the effective pair error policy, defaulting to fail-fast.
    pub fn effective_on_pair_error(&self) -> PairErrorPolicy {
        self.on_pair_error.unwrap_or_default()
    }
}
