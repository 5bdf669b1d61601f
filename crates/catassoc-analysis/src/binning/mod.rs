//! Turning raw values into well-behaved categorical columns.
//!
//! - **Cut points**: linear, log, log1p, or quantile spacing, rounded to
//!   significant figures
//! - **Human-readable numbers**: compact labels such as `1.23K`
//! - **Numeric binning**: right-closed bins labelled `NN: lo - hi`, plus
//!   point-mass bins `NN: v` for very frequent values
//! - **Levels**: frequency counts and rare-level collapsing

pub mod cutpoints;
pub mod cutter;
pub mod human_readable;
pub mod levels;

pub use cutpoints::{cutpoints, quantile, CutOptions, CutStrategy};
pub use cutter::{bin_numeric, BinOptions};
pub use human_readable::human_readable_num;
pub use levels::{collapse_rare_levels, collapse_rare_levels_with, level_counts};
