//! Covalent-bond topology of the canonical amino acids.
//!
//! [`graph::ResidueGraph`] answers connectivity queries (paths, bond distances) against
//! compile-time tables, so no topology file has to be loaded at run time.

pub mod graph;
mod tables;
