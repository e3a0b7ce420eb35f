use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::correlation::CorrelationError;
use crate::core::models::experiment::ExperimentError;
use crate::core::models::residue::ResidueError;
use crate::core::topology::graph::TopologyError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Resonance {index} has {found} value(s) but the experiment has {expected} dimension(s)")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("At least one resonance is required")]
    EmptyResonanceSet,

    #[error("Confidence level {0}% is not available from the region provider")]
    UnsupportedConfidenceLevel(u32),

    #[error("Topology lookup failed: {source}")]
    Topology {
        #[from]
        source: TopologyError,
    },

    #[error("Invalid experiment: {source}")]
    Experiment {
        #[from]
        source: ExperimentError,
    },

    #[error("Invalid correlation: {source}")]
    Correlation {
        #[from]
        source: CorrelationError,
    },

    #[error("Invalid residue: {source}")]
    Residue {
        #[from]
        source: ResidueError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
