use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResidueError {
    #[error("'{0}' is not a supported amino acid")]
    Unknown(String),
}

/// The 20 canonical amino acids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,       // A
    Cysteine,      // C
    AsparticAcid,  // D
    GlutamicAcid,  // E
    Phenylalanine, // F
    Glycine,       // G
    Histidine,     // H
    Isoleucine,    // I
    Lysine,        // K
    Leucine,       // L
    Methionine,    // M
    Asparagine,    // N
    Proline,       // P
    Glutamine,     // Q
    Arginine,      // R
    Serine,        // S
    Threonine,     // T
    Valine,        // V
    Tryptophan,    // W
    Tyrosine,      // Y
}

impl AminoAcid {
    /// All residues, ordered by one-letter code.
    pub const ALL: [AminoAcid; 20] = [
        Self::Alanine,
        Self::Cysteine,
        Self::AsparticAcid,
        Self::GlutamicAcid,
        Self::Phenylalanine,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Lysine,
        Self::Leucine,
        Self::Methionine,
        Self::Asparagine,
        Self::Proline,
        Self::Glutamine,
        Self::Arginine,
        Self::Serine,
        Self::Threonine,
        Self::Valine,
        Self::Tryptophan,
        Self::Tyrosine,
    ];

    pub fn from_code(code: char) -> Result<Self, ResidueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|aa| aa.code() == code)
            .ok_or_else(|| ResidueError::Unknown(code.to_string()))
    }

    pub fn from_three_letter(name: &str) -> Result<Self, ResidueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|aa| aa.three_letter().eq_ignore_ascii_case(name))
            .ok_or_else(|| ResidueError::Unknown(name.to_string()))
    }

    pub fn code(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
        }
    }

    pub fn three_letter(&self) -> &'static str {
        match self {
            Self::Alanine => "Ala",
            Self::Cysteine => "Cys",
            Self::AsparticAcid => "Asp",
            Self::GlutamicAcid => "Glu",
            Self::Phenylalanine => "Phe",
            Self::Glycine => "Gly",
            Self::Histidine => "His",
            Self::Isoleucine => "Ile",
            Self::Lysine => "Lys",
            Self::Leucine => "Leu",
            Self::Methionine => "Met",
            Self::Asparagine => "Asn",
            Self::Proline => "Pro",
            Self::Glutamine => "Gln",
            Self::Arginine => "Arg",
            Self::Serine => "Ser",
            Self::Threonine => "Thr",
            Self::Valine => "Val",
            Self::Tryptophan => "Trp",
            Self::Tyrosine => "Tyr",
        }
    }
}

impl FromStr for AminoAcid {
    type Err = ResidueError;

    /// Accepts a one-letter code (`"A"`) or a three-letter name (`"Ala"`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ if trimmed.len() == 3 => Self::from_three_letter(trimmed),
            _ => Err(ResidueError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
