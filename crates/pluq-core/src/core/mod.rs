//! # Core Module
//!
//! Stateless building blocks for chemical-shift assignment.
//!
//! - **Data Models** ([`models`]) - Residues, correlations, experiments and sequences
//! - **Structural Knowledge** ([`topology`]) - Per-residue bond graphs and bond distances
//! - **File I/O** ([`io`]) - Experiment registries and shift libraries stored as TOML
//! - **Utilities** ([`utils`]) - Atom-name classification

pub mod io;
pub mod models;
pub mod topology;
pub mod utils;
