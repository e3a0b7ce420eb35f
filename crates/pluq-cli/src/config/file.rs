use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileAssignmentConfig {
    pub experiment: Option<String>,
    pub sequence: Option<String>,
    pub level: Option<u32>,
    pub cutoff: Option<f64>,
    pub frequency_weighting: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileDataConfig {
    pub library: Option<PathBuf>,
    pub experiments: Option<PathBuf>,
    pub frequencies: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub assignment: FileAssignmentConfig,
    #[serde(default)]
    pub data: FileDataConfig,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "assignment.experiment" => {
                    self.assignment.experiment = Some(value.to_string());
                }
                "assignment.sequence" => {
                    self.assignment.sequence = Some(value.to_string());
                }
                "assignment.level" => {
                    self.assignment.level = Some(parse_value(key, value, "integer")?);
                }
                "assignment.cutoff" => {
                    self.assignment.cutoff = Some(parse_value(key, value, "float")?);
                }
                "assignment.frequency-weighting" => {
                    self.assignment.frequency_weighting = Some(parse_value(key, value, "boolean")?);
                }
                "data.library" => {
                    self.data.library = Some(PathBuf::from(value));
                }
                "data.experiments" => {
                    self.data.experiments = Some(PathBuf::from(value));
                }
                "data.frequencies" => {
                    self.data.frequencies = Some(PathBuf::from(value));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}
