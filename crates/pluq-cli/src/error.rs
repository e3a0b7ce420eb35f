use pluq::core::models::experiment::ExperimentError;
use pluq::core::models::residue::ResidueError;
use pluq::core::topology::graph::TopologyError;
use pluq::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    PluqCore(#[from] EngineError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Experiment(#[from] ExperimentError),

    #[error("Invalid sequence: {0}")]
    Sequence(#[from] ResidueError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
