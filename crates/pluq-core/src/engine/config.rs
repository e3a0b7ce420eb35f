use crate::core::models::experiment::Experiment;
use crate::core::models::frequency::FrequencyTable;
use crate::core::models::sequence::ProteinSequence;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// How residue abundances weight the normalized scores.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FrequencyWeighting {
    Disabled,
    /// Fractions of the configured sequence (average abundances for an unknown sequence).
    #[default]
    Sequence,
    Custom(FrequencyTable),
}

impl FrequencyWeighting {
    pub fn resolve(&self, sequence: &ProteinSequence) -> Option<FrequencyTable> {
        match self {
            Self::Disabled => None,
            Self::Sequence => Some(sequence.frequencies()),
            Self::Custom(table) => Some(table.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentConfig {
    pub experiment: Experiment,
    pub sequence: ProteinSequence,
    pub confidence_level: u32,
    pub frequency_weighting: FrequencyWeighting,
}

#[derive(Default)]
pub struct AssignmentConfigBuilder {
    experiment: Option<Experiment>,
    sequence: Option<ProteinSequence>,
    confidence_level: Option<u32>,
    frequency_weighting: Option<FrequencyWeighting>,
}

impl AssignmentConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn experiment(mut self, experiment: Experiment) -> Self {
        self.experiment = Some(experiment);
        self
    }

    pub fn sequence(mut self, sequence: ProteinSequence) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn confidence_level(mut self, level: u32) -> Self {
        self.confidence_level = Some(level);
        self
    }

    pub fn frequency_weighting(mut self, weighting: FrequencyWeighting) -> Self {
        self.frequency_weighting = Some(weighting);
        self
    }

    pub fn build(self) -> Result<AssignmentConfig, ConfigError> {
        Ok(AssignmentConfig {
            experiment: self
                .experiment
                .ok_or(ConfigError::MissingParameter("experiment"))?,
            sequence: self.sequence.unwrap_or_default(),
            confidence_level: self
                .confidence_level
                .ok_or(ConfigError::MissingParameter("confidence_level"))?,
            frequency_weighting: self.frequency_weighting.unwrap_or_default(),
        })
    }
}
