//! Numeric binning configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// How cut points are spaced between the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutKind {
    /// Equally spaced.
    #[default]
    Linear,
    /// Logarithmically spaced; the lower endpoint must be positive.
    Log,
    /// Logarithmically spaced after adding 1, with 0 added as a cut.
    Logp1,
    /// Equally spaced quantiles of the data.
    Quantile,
}

impl std::str::FromStr for CutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "log" => Ok(Self::Log),
            "logp1" => Ok(Self::Logp1),
            "quantile" => Ok(Self::Quantile),
            other => Err(format!("unknown cut kind: {other}")),
        }
    }
}

/// Configuration for turning numeric values into categorical bins.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BinningConfig {
    /// Number of cut points requested. Default: 20.
    pub max_levels: Option<u32>,
    /// Significant figures for cut points and labels. Default: 3.
    pub sig_fig: Option<u32>,
    /// Lower quantile cutoff for outlier trimming. Default: 0.025.
    pub lower_quantile: Option<f64>,
    /// Upper quantile cutoff for outlier trimming. Default: 0.975.
    pub upper_quantile: Option<f64>,
    /// Disable quantile trimming entirely. Default: false.
    pub no_trim: Option<bool>,
    /// Cut point spacing. Default: linear.
    pub cuts: Option<CutKind>,
    /// Frequency share above which a single value gets its own bin.
    /// Default: 0.1. A value of 1.0 disables point masses.
    pub point_mass_threshold: Option<f64>,
    /// Label given to missing and out-of-range values. Default: none, they
    /// stay missing.
    pub fill_missing: Option<String>,
}

impl BinningConfig {
    pub fn effective_max_levels(&self) -> u32 {
        self.max_levels
            .unwrap_or(constants::DEFAULT_BINNING_MAX_LEVELS)
    }

    pub fn effective_sig_fig(&self) -> u32 {
        self.sig_fig.unwrap_or(constants::DEFAULT_SIG_FIG)
    }

    /// Returns the quantile cutoffs, or `None` when trimming is disabled.
    pub fn effective_quantile_cutoff(&self) -> Option<(f64, f64)> {
        if self.no_trim.unwrap_or(false) {
            return None;
        }
        Some((
            self.lower_quantile
                .unwrap_or(constants::DEFAULT_LOWER_QUANTILE),
            self.upper_quantile
                .unwrap_or(constants::DEFAULT_UPPER_QUANTILE),
        ))
    }

    pub fn effective_cuts(&self) -> CutKind {
        self.cuts.unwrap_or_default()
    }

    pub fn effective_point_mass_threshold(&self) -> f64 {
        self.point_mass_threshold
            .unwrap_or(constants::DEFAULT_POINT_MASS_THRESHOLD)
    }
}
