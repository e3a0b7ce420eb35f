use crate::core::models::correlation::Correlation;
use thiserror::Error;

/// Failure of an external shift-statistics lookup.
///
/// `NoData` means the source has nothing for the correlation; `Lookup` means it has data
/// that could not be evaluated. The engine treats them differently when building
/// structure probabilities.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("no shift data for {key}")]
    NoData { key: String },

    #[error("lookup failed for {key}: {reason}")]
    Lookup { key: String, reason: String },
}

impl ProviderError {
    pub fn no_data(correlation: &Correlation) -> Self {
        Self::NoData {
            key: correlation.key(),
        }
    }

    pub fn lookup(correlation: &Correlation, reason: impl Into<String>) -> Self {
        Self::Lookup {
            key: correlation.key(),
            reason: reason.into(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }
}

/// Probability density of observing `resonance` for a correlation.
pub trait DensityProvider: Sync {
    fn score(&self, resonance: &[f64], correlation: &Correlation) -> Result<f64, ProviderError>;
}

/// Confidence regions of a correlation's shifts.
pub trait RegionProvider: Sync {
    /// Whether `resonance` lies inside the correlation's region at `level` percent.
    fn contains(
        &self,
        resonance: &[f64],
        correlation: &Correlation,
        level: u32,
    ) -> Result<bool, ProviderError>;

    fn supports_level(&self, _level: u32) -> bool {
        true
    }
}
