//! # Workflows Module
//!
//! Top-level entry points. A workflow validates its request, runs the engine stages in
//! order and returns a finished result.
//!
//! - **Assignment Workflow** ([`assign`]) - Resonances in, ranked residue/atom table out.

pub mod assign;
