//! Configuration system for catassoc.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod association_config;
pub mod binning_config;
pub mod catassoc_config;
pub mod level_config;

pub use association_config::{AssociationConfig, PairErrorPolicy};
pub use binning_config::{BinningConfig, CutKind};
pub use catassoc_config::CatassocConfig;
pub use level_config::LevelConfig;
