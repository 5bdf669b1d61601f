//! Top-level catassoc configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AssociationConfig, BinningConfig, LevelConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CATASSOC_*`)
/// 2. Project config (`catassoc.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CatassocConfig {
    pub association: AssociationConfig,
    pub binning: BinningConfig,
    pub levels: LevelConfig,
}

impl CatassocConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CatassocConfig) -> Result<(), ConfigError> {
        let binning = &config.binning;
        for (field, value) in [
            ("binning.lower_quantile", binning.lower_quantile),
            ("binning.upper_quantile", binning.upper_quantile),
            ("binning.point_mass_threshold", binning.point_mass_threshold),
        ] {
            if let Some(q) = value {
                if !(0.0..=1.0).contains(&q) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if let Some((lower, upper)) = binning.effective_quantile_cutoff() {
            if lower >= upper {
                return Err(ConfigError::ValidationFailed {
                    field: "binning.lower_quantile".to_string(),
                    message: "must be less than binning.upper_quantile".to_string(),
                });
            }
        }
        if binning.sig_fig == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "binning.sig_fig".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if binning.max_levels == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "binning.max_levels".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if matches!(binning.fill_missing.as_deref(), Some("")) {
            return Err(ConfigError::ValidationFailed {
                field: "binning.fill_missing".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.levels.max_levels == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "levels.max_levels".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if matches!(config.levels.other_label.as_deref(), Some("")) {
            return Err(ConfigError::ValidationFailed {
                field: "levels.other_label".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CatassocConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CatassocConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut CatassocConfig, other: &CatassocConfig) {
        // Association
        if other.association.reorder.is_some() {
            base.association.reorder = other.association.reorder;
        }
        if other.association.parallel.is_some() {
            base.association.parallel = other.association.parallel;
        }
        if other.association.on_pair_error.is_some() {
            base.association.on_pair_error = other.association.on_pair_error;
        }

        // Binning
        if other.binning.max_levels.is_some() {
            base.binning.max_levels = other.binning.max_levels;
        }
        if other.binning.sig_fig.is_some() {
            base.binning.sig_fig = other.binning.sig_fig;
        }
        if other.binning.lower_quantile.is_some() {
            base.binning.lower_quantile = other.binning.lower_quantile;
        }
        if other.binning.upper_quantile.is_some() {
            base.binning.upper_quantile = other.binning.upper_quantile;
        }
        if other.binning.no_trim.is_some() {
            base.binning.no_trim = other.binning.no_trim;
        }
        if other.binning.cuts.is_some() {
            base.binning.cuts = other.binning.cuts;
        }
        if other.binning.point_mass_threshold.is_some() {
            base.binning.point_mass_threshold = other.binning.point_mass_threshold;
        }
        if other.binning.fill_missing.is_some() {
            base.binning.fill_missing = other.binning.fill_missing.clone();
        }

        // Levels
        if other.levels.max_levels.is_some() {
            base.levels.max_levels = other.levels.max_levels;
        }
        if other.levels.other_label.is_some() {
            base.levels.other_label = other.levels.other_label.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CATASSOC_REORDER`, `CATASSOC_BINNING_SIG_FIG`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut CatassocConfig) {
        if let Some(v) = env_parse::<bool>("CATASSOC_REORDER") {
            config.association.reorder = Some(v);
        }
        if let Some(v) = env_parse::<bool>("CATASSOC_PARALLEL") {
            config.association.parallel = Some(v);
        }
        if let Some(v) = env_parse("CATASSOC_ON_PAIR_ERROR") {
            config.association.on_pair_error = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CATASSOC_BINNING_MAX_LEVELS") {
            config.binning.max_levels = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CATASSOC_BINNING_SIG_FIG") {
            config.binning.sig_fig = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CATASSOC_BINNING_LOWER_QUANTILE") {
            config.binning.lower_quantile = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CATASSOC_BINNING_UPPER_QUANTILE") {
            config.binning.upper_quantile = Some(v);
        }
        if let Some(v) = env_parse::<bool>("CATASSOC_BINNING_NO_TRIM") {
            config.binning.no_trim = Some(v);
        }
        if let Some(v) = env_parse("CATASSOC_BINNING_CUTS") {
            config.binning.cuts = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CATASSOC_BINNING_POINT_MASS_THRESHOLD") {
            config.binning.point_mass_threshold = Some(v);
        }
        if let Ok(v) = std::env::var("CATASSOC_BINNING_FILL_MISSING") {
            config.binning.fill_missing = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CATASSOC_LEVELS_MAX_LEVELS") {
            config.levels.max_levels = Some(v);
        }
        if let Ok(v) = std::env::var("CATASSOC_LEVELS_OTHER_LABEL") {
            config.levels.other_label = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
