//! Error handling for catassoc.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod association_error;
pub mod binning_error;
pub mod config_error;
pub mod crosstab_error;
pub mod dataset_error;
pub mod error_code;
pub mod matrix_error;

pub use association_error::AssociationError;
pub use binning_error::BinningError;
pub use config_error::ConfigError;
pub use crosstab_error::CrosstabError;
pub use dataset_error::DatasetError;
pub use error_code::ErrorCode;
pub use matrix_error::MatrixError;
