//! Contingency tables and categorical cross-tabulation.

pub mod table;
pub mod tabulate;

pub use table::ContingencyTable;
pub use tabulate::crosstab;
