//! Pairwise association matrices over the columns of a dataset.

pub mod builder;
pub mod types;

pub use builder::{cramers_corrected_matrix, AssociationEngine};
pub use types::AssociationMatrix;
