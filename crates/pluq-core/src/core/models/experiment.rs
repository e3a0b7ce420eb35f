use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExperimentError {
    #[error("'{0}' is not a supported nucleus")]
    UnknownNucleus(String),

    #[error("an experiment needs at least one nucleus")]
    NoNuclei,

    #[error("a symmetric experiment requires identical nuclei, got {0:?}")]
    MixedSymmetricNuclei(Vec<Nucleus>),

    #[error("'{0}' is not a known experiment")]
    UnknownExperiment(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleus {
    Carbon,
    Hydrogen,
    Nitrogen,
}

impl Nucleus {
    pub fn symbol(&self) -> char {
        match self {
            Self::Carbon => 'C',
            Self::Hydrogen => 'H',
            Self::Nitrogen => 'N',
        }
    }

    /// Whether a BMRB atom name belongs to this element (leading symbol match).
    pub fn matches_atom(&self, atom_name: &str) -> bool {
        atom_name.starts_with(self.symbol())
    }
}

impl FromStr for Nucleus {
    type Err = ExperimentError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" | "13C" => Ok(Self::Carbon),
            "H" | "1H" => Ok(Self::Hydrogen),
            "N" | "15N" => Ok(Self::Nitrogen),
            _ => Err(ExperimentError::UnknownNucleus(s.to_string())),
        }
    }
}

impl fmt::Display for Nucleus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Description of a chemical-shift experiment: which nuclei each dimension observes and
/// which correlations it can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    nuclei: Vec<Nucleus>,
    symmetric: bool,
    diagonal: bool,
    max_bonds: Option<usize>,
}

impl Experiment {
    pub fn new(
        nuclei: Vec<Nucleus>,
        symmetric: bool,
        diagonal: bool,
        max_bonds: Option<usize>,
    ) -> Result<Self, ExperimentError> {
        let Some(first) = nuclei.first() else {
            return Err(ExperimentError::NoNuclei);
        };
        if symmetric && nuclei.iter().any(|n| n != first) {
            return Err(ExperimentError::MixedSymmetricNuclei(nuclei));
        }
        Ok(Self {
            nuclei,
            symmetric,
            diagonal,
            max_bonds,
        })
    }

    /// The built-in experiments: `c`, `n`, `h`, `cc` and `cn`.
    pub fn standard(name: &str) -> Result<Self, ExperimentError> {
        use Nucleus::*;
        let (nuclei, max_bonds) = match name.to_lowercase().as_str() {
            "c" => (vec![Carbon], None),
            "n" => (vec![Nitrogen], None),
            "h" => (vec![Hydrogen], None),
            "cc" => (vec![Carbon, Carbon], Some(1)),
            "cn" => (vec![Carbon, Nitrogen], Some(1)),
            _ => return Err(ExperimentError::UnknownExperiment(name.to_string())),
        };
        Self::new(nuclei, false, false, max_bonds)
    }

    pub const STANDARD_NAMES: [&'static str; 5] = ["c", "n", "h", "cc", "cn"];

    pub fn nuclei(&self) -> &[Nucleus] {
        &self.nuclei
    }

    pub fn dims(&self) -> usize {
        self.nuclei.len()
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn has_diagonal(&self) -> bool {
        self.diagonal
    }

    pub fn max_bonds(&self) -> Option<usize> {
        self.max_bonds
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nuclei: Vec<String> = self.nuclei.iter().map(ToString::to_string).collect();
        write!(f, "Experiment(({})", nuclei.join(", "))?;
        if let Some(bonds) = self.max_bonds {
            write!(f, ", bonds={}", bonds)?;
        }
        write!(f, ")")
    }
}
