use crate::core::models::experiment::{Experiment, ExperimentError, Nucleus};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ExperimentDefinition {
    nuclei: Vec<String>,
    #[serde(default)]
    symmetric: bool,
    #[serde(default)]
    diagonal: bool,
    #[serde(default)]
    max_bonds: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ExperimentLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid experiment '{name}' in '{path}': {source}")]
    Invalid {
        path: String,
        name: String,
        source: ExperimentError,
    },
}

/// Named experiments, seeded with the built-in `c`, `n`, `h`, `cc` and `cn` definitions.
#[derive(Debug, Clone)]
pub struct ExperimentRegistry {
    registry: HashMap<String, Experiment>,
}

impl ExperimentRegistry {
    pub fn builtin() -> Self {
        let registry = Experiment::STANDARD_NAMES
            .iter()
            .filter_map(|name| {
                Experiment::standard(name)
                    .ok()
                    .map(|exp| (name.to_string(), exp))
            })
            .collect();
        Self { registry }
    }

    /// Loads a TOML file of `[name]` tables on top of the built-ins. A table with a built-in
    /// name replaces that experiment.
    pub fn load(path: &Path) -> Result<Self, ExperimentLoadError> {
        let path_str = || path.to_string_lossy().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| ExperimentLoadError::Io {
            path: path_str(),
            source: e,
        })?;
        let raw: HashMap<String, ExperimentDefinition> =
            toml::from_str(&content).map_err(|e| ExperimentLoadError::Toml {
                path: path_str(),
                source: e,
            })?;

        let mut registry = Self::builtin();
        for (name, definition) in raw {
            let invalid = |source| ExperimentLoadError::Invalid {
                path: path_str(),
                name: name.clone(),
                source,
            };
            let nuclei = definition
                .nuclei
                .iter()
                .map(|n| n.parse::<Nucleus>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(invalid)?;
            let experiment = Experiment::new(
                nuclei,
                definition.symmetric,
                definition.diagonal,
                definition.max_bonds,
            )
            .map_err(invalid)?;
            debug!(name = %name, %experiment, "Registered experiment");
            registry.registry.insert(name.to_lowercase(), experiment);
        }
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Result<&Experiment, ExperimentError> {
        self.registry
            .get(&name.to_lowercase())
            .ok_or_else(|| ExperimentError::UnknownExperiment(name.to_string()))
    }

    /// Registered experiment names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ExperimentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
