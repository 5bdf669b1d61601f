//! # catassoc-analysis
//!
//! Association analysis over categorical datasets:
//! - **Stats**: Pearson chi-squared test, bias-corrected Cramér's V
//! - **Crosstab**: contingency tables from aligned categorical columns
//! - **Reorder**: reverse Cuthill–McKee bandwidth reduction
//! - **Matrix**: pairwise association matrices, optionally reordered
//! - **Binning**: numeric cut points, bin labels, rare-level collapsing

pub mod binning;
pub mod crosstab;
pub mod matrix;
pub mod reorder;
pub mod stats;

pub use crosstab::{crosstab, ContingencyTable};
pub use matrix::{cramers_corrected_matrix, AssociationEngine, AssociationMatrix};
pub use reorder::reverse_cuthill_mckee;
pub use stats::{chi2_independence, cramers_corrected_stat, cramers_v, ChiSquaredTest};
