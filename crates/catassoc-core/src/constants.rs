//! Shared constants for categorical association analysis.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reorder the association matrix with reverse Cuthill–McKee by default.
pub const DEFAULT_REORDER: bool = true;

/// Pairwise scores are computed sequentially by default.
pub const DEFAULT_PARALLEL: bool = false;

/// Default maximum number of bins produced by numeric binning.
pub const DEFAULT_BINNING_MAX_LEVELS: u32 = 20;

/// Values more frequent than this share of non-missing rows get their own bin.
pub const DEFAULT_POINT_MASS_THRESHOLD: f64 = 0.1;

/// Default significant figures for cut points and bin labels.
pub const DEFAULT_SIG_FIG: u32 = 3;

/// Default lower quantile used to trim outliers before cutting.
pub const DEFAULT_LOWER_QUANTILE: f64 = 0.025;

/// Default upper quantile used to trim outliers before cutting.
pub const DEFAULT_UPPER_QUANTILE: f64 = 0.975;

/// Default number of most frequent levels kept when collapsing.
pub const DEFAULT_LEVEL_MAX_LEVELS: u32 = 20;

/// Label given to levels folded together when collapsing.
pub const DEFAULT_OTHER_LABEL: &str = "_OTHER_";

/// Project config file name looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "catassoc.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "CATASSOC_LOG";
