//! # Engine Module
//!
//! The assignment logic: which correlations a sequence can produce in an experiment, and how
//! well each of them explains a set of observed resonances.
//!
//! - **Configuration** ([`config`]) - Experiment, sequence, confidence level and weighting
//! - **Enumeration** ([`enumerate`]) - Bond-filtered, deduplicated correlation sets
//! - **Scoring** ([`assign`]) - Region gating, density scoring and the ranked table
//! - **Providers** ([`providers`]) - Traits for the external shift statistics
//! - **Error Handling** ([`error`]) - Engine-level failures

pub mod assign;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod providers;
