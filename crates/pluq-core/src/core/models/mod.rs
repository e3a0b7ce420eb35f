//! # Core Models Module
//!
//! Value types shared by every layer: residues, secondary-structure tags, experiments,
//! correlations, sequences and residue frequency tables.
//!
//! ## Key Components
//!
//! - [`residue`] - The 20-letter amino-acid alphabet
//! - [`structure`] - Secondary-structure tags and their common collapse
//! - [`experiment`] - Nuclei, symmetry and bond limits of a shift experiment
//! - [`correlation`] - Residue + atom tuple + structure, the unit that gets assigned
//! - [`sequence`] - Protein sequences, including the "average protein"
//! - [`frequency`] - Relative residue abundances used to weight scores

pub mod correlation;
pub mod experiment;
pub mod frequency;
pub mod residue;
pub mod sequence;
pub mod structure;
