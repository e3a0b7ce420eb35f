//! # PLUQ Core Library
//!
//! Assigns NMR chemical shifts of a protein to residue types and atoms, ranking candidates by
//! how likely each assignment is under known shift statistics.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless models (`Correlation`, `Experiment`,
//!   `ProteinSequence`), the static residue bond graphs, and file-backed shift data.
//!
//! - **[`engine`]: The Logic Core.** Enumerates the correlations a sequence can produce in an
//!   experiment and scores observed resonances against them through the
//!   [`engine::providers`] traits.
//!
//! - **[`workflows`]: The Public API.** Validates a request, enumerates, assigns and returns a
//!   ranked table in one call.

pub mod core;
pub mod engine;
pub mod workflows;
