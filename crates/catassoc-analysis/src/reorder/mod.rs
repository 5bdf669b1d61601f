//! Bandwidth-reducing reorderings of symmetric matrices.

pub mod cuthill_mckee;

pub use cuthill_mckee::{adjacency_graph, bandwidth, reverse_cuthill_mckee};
