use super::frequency::FrequencyTable;
use super::residue::{AminoAcid, ResidueError};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A protein sequence in one-letter codes.
///
/// An empty sequence stands for an "average" protein: it contains all 20 residues and
/// reports the average residue abundances as its frequencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinSequence {
    residues: Vec<AminoAcid>,
    average: bool,
}

impl ProteinSequence {
    /// Parses one-letter codes, ignoring whitespace.
    pub fn parse(sequence: &str) -> Result<Self, ResidueError> {
        let residues = sequence
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(AminoAcid::from_code)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_residues(residues))
    }

    pub fn from_residues(residues: Vec<AminoAcid>) -> Self {
        if residues.is_empty() {
            Self::average()
        } else {
            Self {
                residues,
                average: false,
            }
        }
    }

    pub fn average() -> Self {
        Self {
            residues: AminoAcid::ALL.to_vec(),
            average: true,
        }
    }

    pub fn is_average(&self) -> bool {
        self.average
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Distinct residue types, ordered by one-letter code.
    pub fn unique(&self) -> BTreeSet<AminoAcid> {
        self.residues.iter().copied().collect()
    }

    pub fn counts(&self) -> HashMap<AminoAcid, usize> {
        let mut counts = HashMap::new();
        for &residue in &self.residues {
            *counts.entry(residue).or_insert(0) += 1;
        }
        counts
    }

    /// Fraction of each residue type in the sequence, or the average table for an
    /// unspecified sequence.
    pub fn frequencies(&self) -> FrequencyTable {
        if self.average {
            return FrequencyTable::average();
        }
        let total = self.residues.len() as f64;
        FrequencyTable::new(
            self.counts()
                .into_iter()
                .map(|(residue, count)| (residue, count as f64 / total))
                .collect(),
        )
    }
}

impl Default for ProteinSequence {
    fn default() -> Self {
        Self::average()
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.average {
            return write!(f, "<average protein>");
        }
        for residue in &self.residues {
            write!(f, "{}", residue.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_the_average_protein() {
        let seq = ProteinSequence::parse("").unwrap();
        assert!(seq.is_average());
        assert_eq!(seq.unique().len(), 20);
        assert_eq!(seq.frequencies(), FrequencyTable::average());
    }

    #[test]
    fn parse_ignores_whitespace_and_validates_codes() {
        let seq = ProteinSequence::parse("MKV AG\nA").unwrap();
        assert_eq!(seq.len(), 6);
        assert!(!seq.is_average());

        let err = ProteinSequence::parse("MKXA").unwrap_err();
        assert_eq!(err, ResidueError::Unknown("X".into()));
    }

    #[test]
    fn unique_collapses_repeats_in_code_order() {
        let seq = ProteinSequence::parse("GAGA").unwrap();
        let unique: Vec<_> = seq.unique().into_iter().collect();
        assert_eq!(unique, vec![AminoAcid::Alanine, AminoAcid::Glycine]);
    }

    #[test]
    fn frequencies_are_fractions_of_sequence_length() {
        let seq = ProteinSequence::parse("AAAG").unwrap();
        let freq = seq.frequencies();
        assert!((freq.get(AminoAcid::Alanine) - 0.75).abs() < 1e-12);
        assert!((freq.get(AminoAcid::Glycine) - 0.25).abs() < 1e-12);
        assert_eq!(freq.get(AminoAcid::Serine), 0.0);
    }

    #[test]
    fn display_prints_codes_or_placeholder() {
        assert_eq!(ProteinSequence::parse("ACD").unwrap().to_string(), "ACD");
        assert_eq!(ProteinSequence::average().to_string(), "<average protein>");
    }
}
