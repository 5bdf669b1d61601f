//! Shared data model: categorical columns and datasets.

pub mod collections;
pub mod dataset;

pub use dataset::{CategoricalColumn, Dataset};
