//! Rare-level collapsing configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for folding infrequent levels into a single "other" level.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LevelConfig {
    /// Most frequent levels kept as-is. Default: 20.
    pub max_levels: Option<u32>,
    /// Label for the folded level. Default: `_OTHER_`.
    pub other_label: Option<String>,
}

impl LevelConfig {
    pub fn effective_max_levels(&self) -> u32 {
        self.max_levels
            .unwrap_or(constants::DEFAULT_LEVEL_MAX_LEVELS)
    }

    pub fn effective_other_label(&self) -> &str {
        self.other_label
            .as_deref()
            .unwrap_or(constants::DEFAULT_OTHER_LABEL)
    }
}
