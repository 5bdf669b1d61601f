//! Contingency-table statistics: Pearson chi-squared test and Cramér's V.

pub mod chi2;
pub mod cramers;

pub use chi2::{chi2_independence, ChiSquaredTest};
pub use cramers::{cramers_corrected_breakdown, cramers_corrected_stat, cramers_v, CramersBreakdown};
