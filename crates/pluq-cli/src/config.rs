mod defaults;
mod file;

use crate::cli::AssignArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use pluq::core::io::experiments::ExperimentRegistry;
use pluq::core::models::frequency::FrequencyTable;
use pluq::core::models::sequence::ProteinSequence;
use pluq::engine::config::{AssignmentConfig, AssignmentConfigBuilder, FrequencyWeighting};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use file::FileConfig;

/// Everything the `assign` command needs once file, `--set` and CLI values are merged.
#[derive(Debug, Clone)]
pub struct AssignSettings {
    pub config: AssignmentConfig,
    pub experiment_name: String,
    pub cutoff: f64,
    pub library: PathBuf,
}

impl FileConfig {
    /// Reads the file named by `--config`, or starts empty when none was given.
    pub fn for_args(args: &AssignArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// CLI arguments win over `--set` values, which win over the file, which wins over
    /// the built-in defaults.
    pub fn merge_with_cli(mut self, args: &AssignArgs) -> Result<AssignSettings> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();
        let assignment = self.assignment;
        let data = self.data;

        let library = args.library.clone().or(data.library).ok_or_else(|| {
            CliError::Config(
                "A shift library is required either via --library or `data.library`.".to_string(),
            )
        })?;

        let registry = match args.experiments.as_ref().or(data.experiments.as_ref()) {
            Some(path) => load_registry(path)?,
            None => ExperimentRegistry::builtin(),
        };
        let experiment_name = args
            .experiment
            .clone()
            .or(assignment.experiment)
            .unwrap_or(defaults.experiment);
        let experiment = registry.get(&experiment_name)?.clone();

        let sequence = match args.sequence.as_ref().or(assignment.sequence.as_ref()) {
            Some(seq) => ProteinSequence::parse(seq)?,
            None => ProteinSequence::average(),
        };

        let weighting = Self::merge_frequency_weighting(
            args.no_frequency,
            assignment.frequency_weighting,
            args.frequencies.as_ref().or(data.frequencies.as_ref()),
            defaults.frequency_weighting,
        )?;

        let level = args
            .level
            .or(assignment.level)
            .unwrap_or(defaults.confidence_level);
        let cutoff = args.cutoff.or(assignment.cutoff).unwrap_or(defaults.cutoff);

        let config = AssignmentConfigBuilder::new()
            .experiment(experiment)
            .sequence(sequence)
            .confidence_level(level)
            .frequency_weighting(weighting)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        debug!(
            experiment = %experiment_name,
            level,
            cutoff,
            library = %library.display(),
            "Merged assignment settings"
        );
        Ok(AssignSettings {
            config,
            experiment_name,
            cutoff,
            library,
        })
    }

    fn merge_frequency_weighting(
        cli_disabled: bool,
        file_val: Option<bool>,
        table: Option<&PathBuf>,
        default: bool,
    ) -> Result<FrequencyWeighting> {
        if cli_disabled || !file_val.unwrap_or(default) {
            return Ok(FrequencyWeighting::Disabled);
        }
        match table {
            Some(path) => {
                let table =
                    FrequencyTable::load_csv(path).map_err(|e| CliError::FileParsing {
                        path: path.clone(),
                        source: e.into(),
                    })?;
                Ok(FrequencyWeighting::Custom(table))
            }
            None => Ok(FrequencyWeighting::Sequence),
        }
    }
}

pub fn load_registry(path: &Path) -> Result<ExperimentRegistry> {
    ExperimentRegistry::load(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}
