use super::residue::{AminoAcid, ResidueError};
use super::structure::{ParseStructureError, SecondaryStructure};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    #[error("counterpart is only defined for 2-atom correlations, this one has {0} atom(s)")]
    NotPairwise(usize),

    #[error("invalid residue: {0}")]
    Residue(#[from] ResidueError),

    #[error("invalid structure: {0}")]
    Structure(#[from] ParseStructureError),

    #[error("malformed correlation key '{0}', expected '<Xxx>-(<atom>,...)-<Structure>'")]
    MalformedKey(String),
}

/// An assignable intra-residue correlation: a residue, an ordered tuple of atoms and a
/// structural context.
///
/// Atom names are not checked against the residue's catalog here; lookups against the
/// residue graph reject unknown atoms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Correlation {
    residue: AminoAcid,
    atoms: Vec<String>,
    structure: SecondaryStructure,
}

impl Correlation {
    pub fn new<I, S>(residue: AminoAcid, atoms: I, structure: SecondaryStructure) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            residue,
            atoms: atoms.into_iter().map(Into::into).collect(),
            structure,
        }
    }

    /// Builds a correlation from a residue code, validating the code against the alphabet.
    pub fn from_code<I, S>(
        code: &str,
        atoms: I,
        structure: SecondaryStructure,
    ) -> Result<Self, CorrelationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let residue = code.parse::<AminoAcid>()?;
        Ok(Self::new(residue, atoms, structure))
    }

    pub fn residue(&self) -> AminoAcid {
        self.residue
    }

    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    pub fn structure(&self) -> SecondaryStructure {
        self.structure
    }

    pub fn dims(&self) -> usize {
        self.atoms.len()
    }

    /// The same atoms and residue in another structural context.
    pub fn with_structure(&self, structure: SecondaryStructure) -> Self {
        Self {
            residue: self.residue,
            atoms: self.atoms.clone(),
            structure,
        }
    }

    /// The symmetric partner of a 2-atom correlation (atom order swapped).
    pub fn counterpart(&self) -> Result<Self, CorrelationError> {
        match self.atoms.as_slice() {
            [first, second] => Ok(Self {
                residue: self.residue,
                atoms: vec![second.clone(), first.clone()],
                structure: self.structure,
            }),
            other => Err(CorrelationError::NotPairwise(other.len())),
        }
    }

    /// The reversed atom order for any dimensionality.
    pub(crate) fn reversed(&self) -> Self {
        Self {
            residue: self.residue,
            atoms: self.atoms.iter().rev().cloned().collect(),
            structure: self.structure,
        }
    }

    /// The serialized lookup key, e.g. `Ala-(CA,CB)-Helix`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-({})-{}",
            self.residue.three_letter(),
            self.atoms.join(","),
            self.structure
        )
    }
}

impl FromStr for Correlation {
    type Err = CorrelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CorrelationError::MalformedKey(s.to_string());

        let (residue, rest) = s.trim().split_once("-(").ok_or_else(malformed)?;
        let (atoms, structure) = rest.rsplit_once(")-").ok_or_else(malformed)?;

        let atoms: Vec<&str> = atoms.split(',').map(str::trim).collect();
        if atoms.iter().any(|atom| atom.is_empty()) {
            return Err(malformed());
        }

        Ok(Self::new(
            AminoAcid::from_three_letter(residue)?,
            atoms,
            structure.parse()?,
        ))
    }
}
