//! # catassoc-core
//!
//! Foundation crate for categorical association analysis.
//! Defines the dataset model, errors, config, tracing setup, and constants.
//! `catassoc-analysis` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Span macros expand through this path so callers need no direct dependency.
#[doc(hidden)]
pub use ::tracing as __tracing;

// Re-export the most commonly used types at the crate root.
pub use config::CatassocConfig;
pub use errors::{AssociationError, ErrorCode, MatrixError};
pub use types::{CategoricalColumn, Dataset};
