use crate::core::models::correlation::{Correlation, CorrelationError};
use crate::engine::providers::{DensityProvider, ProviderError, RegionProvider};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::f64::consts::PI;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawLibrary {
    #[serde(default)]
    confidence_levels: Vec<u32>,
    #[serde(default, rename = "correlation")]
    correlations: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    key: String,
    mean: Vec<f64>,
    std: Vec<f64>,
    #[serde(default, rename = "region")]
    regions: Vec<Region>,
}

/// Axis-aligned box holding a correlation's shifts at one confidence level.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Region {
    pub level: u32,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl Region {
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.lower.len()
            && self
                .lower
                .iter()
                .zip(&self.upper)
                .zip(point)
                .all(|((lo, hi), x)| lo <= x && x <= hi)
    }

    fn reversed(&self) -> Self {
        Self {
            level: self.level,
            lower: self.lower.iter().rev().copied().collect(),
            upper: self.upper.iter().rev().copied().collect(),
        }
    }
}

/// Per-dimension shift statistics of one correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftStatistics {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
    pub regions: Vec<Region>,
}

impl ShiftStatistics {
    /// Product of independent normal densities, one per dimension.
    pub fn density(&self, point: &[f64]) -> Result<f64, String> {
        if point.len() != self.mean.len() {
            return Err(format!(
                "expected {} value(s), got {}",
                self.mean.len(),
                point.len()
            ));
        }
        let mut density = 1.0;
        for ((x, mean), std) in point.iter().zip(&self.mean).zip(&self.std) {
            if !(*std > 0.0) {
                return Err(format!("standard deviation must be positive, got {}", std));
            }
            let z = (x - mean) / std;
            density *= (-0.5 * z * z).exp() / (std * (2.0 * PI).sqrt());
        }
        Ok(density)
    }

    pub fn region(&self, level: u32) -> Option<&Region> {
        self.regions.iter().find(|r| r.level == level)
    }

    fn reversed(&self) -> Self {
        Self {
            mean: self.mean.iter().rev().copied().collect(),
            std: self.std.iter().rev().copied().collect(),
            regions: self.regions.iter().map(Region::reversed).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LibraryLoadError {
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
    #[error("Invalid correlation key in '{path}': {source}")]
    InvalidKey {
        path: String,
        source: CorrelationError,
    },
    #[error("Entry '{key}' in '{path}' is inconsistent: {reason}")]
    Inconsistent {
        path: String,
        key: String,
        reason: String,
    },
    #[error("Correlation '{key}' is defined more than once in '{path}'")]
    Duplicate { path: String, key: String },
}

/// Shift statistics keyed by correlation, loaded from a TOML library file.
///
/// The library serves both provider roles: densities come from the per-dimension normal
/// parameters and regions from the stored confidence boxes. A 2-D entry also answers for
/// its counterpart with the axes swapped.
#[derive(Debug, Clone, Default)]
pub struct ShiftLibrary {
    entries: HashMap<Correlation, ShiftStatistics>,
    levels: BTreeSet<u32>,
}

impl ShiftLibrary {
    pub fn load(path: &Path) -> Result<Self, LibraryLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LibraryLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let library = Self::from_toml_str(&content, &path.to_string_lossy())?;
        info!(
            path = %path.display(),
            correlations = library.len(),
            "Loaded shift library"
        );
        Ok(library)
    }

    /// Parses library content; `origin` only labels errors.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, LibraryLoadError> {
        let raw: RawLibrary = toml::from_str(content).map_err(|e| LibraryLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut levels: BTreeSet<u32> = raw.confidence_levels.into_iter().collect();
        let declared_levels = !levels.is_empty();
        let mut entries = HashMap::with_capacity(raw.correlations.len());

        for entry in raw.correlations {
            let correlation: Correlation =
                entry
                    .key
                    .parse()
                    .map_err(|source| LibraryLoadError::InvalidKey {
                        path: origin.to_string(),
                        source,
                    })?;
            let inconsistent = |reason: String| LibraryLoadError::Inconsistent {
                path: origin.to_string(),
                key: entry.key.clone(),
                reason,
            };

            let dims = correlation.dims();
            if entry.mean.len() != dims || entry.std.len() != dims {
                return Err(inconsistent(format!(
                    "{} atom(s) but {} mean(s) and {} std(s)",
                    dims,
                    entry.mean.len(),
                    entry.std.len()
                )));
            }
            for region in &entry.regions {
                if region.lower.len() != dims || region.upper.len() != dims {
                    return Err(inconsistent(format!(
                        "region at level {} does not have {} bound(s)",
                        region.level, dims
                    )));
                }
                if !declared_levels {
                    levels.insert(region.level);
                }
            }

            let statistics = ShiftStatistics {
                mean: entry.mean,
                std: entry.std,
                regions: entry.regions,
            };
            if entries.insert(correlation, statistics).is_some() {
                return Err(LibraryLoadError::Duplicate {
                    path: origin.to_string(),
                    key: entry.key,
                });
            }
        }

        Ok(Self { entries, levels })
    }

    pub fn insert(&mut self, correlation: Correlation, statistics: ShiftStatistics) {
        self.levels.extend(statistics.regions.iter().map(|r| r.level));
        self.entries.insert(correlation, statistics);
    }

    /// Statistics for a correlation, falling back to the stored counterpart of a pair.
    pub fn get(&self, correlation: &Correlation) -> Option<ShiftStatistics> {
        if let Some(stats) = self.entries.get(correlation) {
            return Some(stats.clone());
        }
        if correlation.dims() == 2 {
            return self
                .entries
                .get(&correlation.reversed())
                .map(ShiftStatistics::reversed);
        }
        None
    }

    /// Confidence levels with at least one region.
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.levels.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DensityProvider for ShiftLibrary {
    fn score(&self, resonance: &[f64], correlation: &Correlation) -> Result<f64, ProviderError> {
        let stats = self
            .get(correlation)
            .ok_or_else(|| ProviderError::no_data(correlation))?;
        stats
            .density(resonance)
            .map_err(|reason| ProviderError::lookup(correlation, reason))
    }
}

impl RegionProvider for ShiftLibrary {
    fn contains(
        &self,
        resonance: &[f64],
        correlation: &Correlation,
        level: u32,
    ) -> Result<bool, ProviderError> {
        let stats = self
            .get(correlation)
            .ok_or_else(|| ProviderError::no_data(correlation))?;
        let Some(region) = stats.region(level) else {
            debug!(key = %correlation, level, "No region at requested level");
            return Err(ProviderError::no_data(correlation));
        };
        if region.lower.len() != resonance.len() {
            return Err(ProviderError::lookup(
                correlation,
                format!(
                    "expected {} value(s), got {}",
                    region.lower.len(),
                    resonance.len()
                ),
            ));
        }
        Ok(region.contains(resonance))
    }

    fn supports_level(&self, level: u32) -> bool {
        self.levels.contains(&level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::AminoAcid;
    use crate::core::models::structure::SecondaryStructure;
    use std::fs;
    use tempfile::tempdir;

    const LIBRARY: &str = r#"
        [[correlation]]
        key = "Ala-(CA)-All"
        mean = [52.5]
        std = [2.0]

        [[correlation.region]]
        level = 95
        lower = [48.5]
        upper = [56.5]

        [[correlation]]
        key = "Ala-(CA,CB)-All"
        mean = [52.5, 19.0]
        std = [2.0, 1.5]

        [[correlation.region]]
        level = 68
        lower = [50.5, 17.5]
        upper = [54.5, 20.5]
    "#;

    fn ala(atoms: &[&str]) -> Correlation {
        Correlation::new(
            AminoAcid::Alanine,
            atoms.iter().copied(),
            SecondaryStructure::Independent,
        )
    }

    #[test]
    fn density_at_mean_matches_normal_peak() {
        let lib = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let score = lib.score(&[52.5], &ala(&["CA"])).unwrap();
        let expected = 1.0 / (2.0 * (2.0 * PI).sqrt());
        assert!((score - expected).abs() < 1e-12);

        let off_peak = lib.score(&[56.5], &ala(&["CA"])).unwrap();
        assert!(off_peak < score);
    }

    #[test]
    fn regions_are_inclusive_boxes() {
        let lib = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let ca = ala(&["CA"]);
        assert_eq!(lib.contains(&[48.5], &ca, 95), Ok(true));
        assert_eq!(lib.contains(&[60.0], &ca, 95), Ok(false));
        assert!(lib.contains(&[52.0], &ca, 68).unwrap_err().is_no_data());
    }

    #[test]
    fn pair_lookup_falls_back_to_counterpart_with_swapped_axes() {
        let lib = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let reversed = ala(&["CB", "CA"]);
        assert_eq!(lib.contains(&[19.0, 52.5], &reversed, 68), Ok(true));
        assert_eq!(lib.contains(&[52.5, 19.0], &reversed, 68), Ok(false));
        let forward = lib.score(&[52.5, 19.0], &ala(&["CA", "CB"])).unwrap();
        let swapped = lib.score(&[19.0, 52.5], &reversed).unwrap();
        assert!((forward - swapped).abs() < 1e-15);
    }

    #[test]
    fn missing_correlation_is_no_data() {
        let lib = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let err = lib.score(&[40.0], &ala(&["CB"])).unwrap_err();
        assert_eq!(
            err,
            ProviderError::NoData {
                key: "Ala-(CB)-All".into()
            }
        );
    }

    #[test]
    fn dimension_mismatch_is_a_lookup_failure() {
        let lib = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let err = lib.score(&[52.5, 19.0], &ala(&["CA"])).unwrap_err();
        assert!(matches!(err, ProviderError::Lookup { .. }));
    }

    #[test]
    fn supported_levels_come_from_regions_unless_declared() {
        let lib = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        assert_eq!(lib.levels().collect::<Vec<_>>(), vec![68, 95]);
        assert!(lib.supports_level(95));
        assert!(!lib.supports_level(80));

        let declared = format!("confidence-levels = [68, 80, 95]\n{}", LIBRARY);
        let lib = ShiftLibrary::from_toml_str(&declared, "test").unwrap();
        assert!(lib.supports_level(80));
    }

    #[test]
    fn non_positive_std_is_a_lookup_failure() {
        let content = r#"
            [[correlation]]
            key = "Gly-(CA)-All"
            mean = [45.0]
            std = [0.0]
        "#;
        let lib = ShiftLibrary::from_toml_str(content, "test").unwrap();
        let gly = Correlation::new(AminoAcid::Glycine, ["CA"], SecondaryStructure::Independent);
        assert!(matches!(
            lib.score(&[45.0], &gly),
            Err(ProviderError::Lookup { .. })
        ));
    }

    #[test]
    fn inconsistent_entries_are_rejected() {
        let content = r#"
            [[correlation]]
            key = "Ala-(CA,CB)-All"
            mean = [52.5]
            std = [2.0]
        "#;
        assert!(matches!(
            ShiftLibrary::from_toml_str(content, "test"),
            Err(LibraryLoadError::Inconsistent { .. })
        ));

        let content = r#"
            [[correlation]]
            key = "Ala-CA-All"
            mean = [52.5]
            std = [2.0]
        "#;
        assert!(matches!(
            ShiftLibrary::from_toml_str(content, "test"),
            Err(LibraryLoadError::InvalidKey { .. })
        ));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let content = r#"
            [[correlation]]
            key = "Ala-(CA)-All"
            mean = [52.5]
            std = [2.0]

            [[correlation]]
            key = "Ala-(CA)-All"
            mean = [53.0]
            std = [2.0]
        "#;
        assert!(matches!(
            ShiftLibrary::from_toml_str(content, "test"),
            Err(LibraryLoadError::Duplicate { .. })
        ));
    }

    #[test]
    fn load_reads_file_and_reports_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.toml");
        fs::write(&path, LIBRARY).unwrap();
        assert_eq!(ShiftLibrary::load(&path).unwrap().len(), 2);

        fs::write(&path, "[[correlation]]\nkey = 1\n").unwrap();
        match ShiftLibrary::load(&path).unwrap_err() {
            LibraryLoadError::Toml { path: p, .. } => assert!(p.ends_with("library.toml")),
            other => panic!("unexpected error: {other}"),
        }

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            ShiftLibrary::load(&missing),
            Err(LibraryLoadError::Io { .. })
        ));
    }
}
