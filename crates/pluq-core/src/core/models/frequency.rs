use super::residue::AminoAcid;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Average residue abundances in proteins, used when no sequence is known.
const AVERAGE_ABUNDANCES: [(AminoAcid, f64); 20] = [
    (AminoAcid::Alanine, 0.074),
    (AminoAcid::Arginine, 0.042),
    (AminoAcid::Asparagine, 0.044),
    (AminoAcid::AsparticAcid, 0.059),
    (AminoAcid::Cysteine, 0.033),
    (AminoAcid::GlutamicAcid, 0.058),
    (AminoAcid::Glutamine, 0.037),
    (AminoAcid::Glycine, 0.074),
    (AminoAcid::Histidine, 0.029),
    (AminoAcid::Isoleucine, 0.038),
    (AminoAcid::Leucine, 0.076),
    (AminoAcid::Lysine, 0.072),
    (AminoAcid::Methionine, 0.018),
    (AminoAcid::Phenylalanine, 0.040),
    (AminoAcid::Proline, 0.050),
    (AminoAcid::Serine, 0.081),
    (AminoAcid::Threonine, 0.062),
    (AminoAcid::Tryptophan, 0.013),
    (AminoAcid::Tyrosine, 0.033),
    (AminoAcid::Valine, 0.068),
];

#[derive(Debug, Deserialize)]
struct FrequencyRecord {
    residue: String,
    fraction: f64,
}

#[derive(Debug, Error)]
pub enum FrequencyLoadError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    #[error("Unknown residue '{residue}' in frequency table '{path}'")]
    UnknownResidue { path: String, residue: String },

    #[error("Negative fraction {fraction} for residue '{residue}' in '{path}'")]
    NegativeFraction {
        path: String,
        residue: String,
        fraction: f64,
    },
}

/// Relative abundance of each residue type.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    fractions: HashMap<AminoAcid, f64>,
}

impl FrequencyTable {
    pub fn new(fractions: HashMap<AminoAcid, f64>) -> Self {
        Self { fractions }
    }

    pub fn average() -> Self {
        Self {
            fractions: AVERAGE_ABUNDANCES.into_iter().collect(),
        }
    }

    /// Fraction for a residue; residues missing from the table weigh zero.
    pub fn get(&self, residue: AminoAcid) -> f64 {
        self.fractions.get(&residue).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Reads `residue,fraction` rows; residues may be one- or three-letter codes.
    pub fn load_csv(path: &Path) -> Result<Self, FrequencyLoadError> {
        let path_str = || path.to_string_lossy().to_string();

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| FrequencyLoadError::Csv {
                path: path_str(),
                source: e,
            })?;

        let mut fractions = HashMap::new();
        for result in reader.deserialize::<FrequencyRecord>() {
            let record = result.map_err(|e| FrequencyLoadError::Csv {
                path: path_str(),
                source: e,
            })?;
            let residue = record.residue.parse::<AminoAcid>().map_err(|_| {
                FrequencyLoadError::UnknownResidue {
                    path: path_str(),
                    residue: record.residue.clone(),
                }
            })?;
            if record.fraction < 0.0 {
                return Err(FrequencyLoadError::NegativeFraction {
                    path: path_str(),
                    residue: record.residue,
                    fraction: record.fraction,
                });
            }
            fractions.insert(residue, record.fraction);
        }
        Ok(Self { fractions })
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::average()
    }
}
