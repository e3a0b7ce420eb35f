use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a recognized secondary-structure category")]
pub struct ParseStructureError(pub String);

/// Structural context of a correlation.
///
/// `Independent` is the structure-independent context; it serializes as `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SecondaryStructure {
    Helix,
    Sheet,
    Coil,
    Turn,
    Bridge,
    #[default]
    Independent,
}

impl SecondaryStructure {
    /// The contexts a structure-sensitive correlation is expanded into.
    pub const EXPANDED: [SecondaryStructure; 4] =
        [Self::Helix, Self::Sheet, Self::Coil, Self::Independent];

    /// The contexts queried for structural probabilities, in report order (H, C, E).
    pub const SCORED: [SecondaryStructure; 3] = [Self::Helix, Self::Coil, Self::Sheet];

    /// Collapses the category onto {Helix, Sheet, Coil, Independent}.
    pub fn common(&self) -> Self {
        match self {
            Self::Turn => Self::Coil,
            Self::Bridge => Self::Sheet,
            other => *other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Helix => "Helix",
            Self::Sheet => "Sheet",
            Self::Coil => "Coil",
            Self::Turn => "Turn",
            Self::Bridge => "Bridge",
            Self::Independent => "All",
        }
    }

    /// Maps a DSSP/STRIDE one-letter code. 3-10 and pi helices fold into `Helix`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'H' | 'G' | 'I' => Some(Self::Helix),
            'E' => Some(Self::Sheet),
            'B' | 'b' => Some(Self::Bridge),
            'C' => Some(Self::Coil),
            'T' => Some(Self::Turn),
            'X' => Some(Self::Independent),
            _ => None,
        }
    }
}

impl FromStr for SecondaryStructure {
    type Err = ParseStructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Self::from_code(code).ok_or_else(|| ParseStructureError(s.to_string()));
        }
        match trimmed.to_lowercase().as_str() {
            "helix" | "3-10 helix" | "pi helix" => Ok(Self::Helix),
            "sheet" => Ok(Self::Sheet),
            "coil" => Ok(Self::Coil),
            "turn" => Ok(Self::Turn),
            "bridge" => Ok(Self::Bridge),
            "all" | "independent" => Ok(Self::Independent),
            _ => Err(ParseStructureError(s.to_string())),
        }
    }
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
