pub mod assign;
pub mod bonds;
pub mod correlations;
