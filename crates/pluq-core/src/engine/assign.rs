use super::error::EngineError;
use super::providers::{DensityProvider, RegionProvider};
use crate::core::models::correlation::Correlation;
use crate::core::models::frequency::FrequencyTable;
use crate::core::models::residue::AminoAcid;
use crate::core::models::structure::SecondaryStructure;
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid resonance '{0}', expected comma-separated numbers such as '55.1,18.2'")]
pub struct ParseResonanceError(pub String);

/// One observed peak: a chemical shift per experiment dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Resonance {
    values: Vec<f64>,
}

impl Resonance {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn dims(&self) -> usize {
        self.values.len()
    }
}

impl From<f64> for Resonance {
    fn from(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl From<Vec<f64>> for Resonance {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl FromStr for Resonance {
    type Err = ParseResonanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseResonanceError(s.to_string()))?;
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ParseResonanceError(s.to_string()));
        }
        Ok(Self::new(values))
    }
}

impl fmt::Display for Resonance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.values.iter().join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStatus {
    Scored,
    /// The density lookup failed; the score was recorded as zero.
    Unavailable,
}

/// Helix, coil and sheet probabilities summing to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureTriple {
    pub helix: f64,
    pub coil: f64,
    pub sheet: f64,
}

impl StructureTriple {
    /// Normalizes raw densities; `None` when they carry no information.
    pub fn from_densities(helix: f64, coil: f64, sheet: f64) -> Option<Self> {
        let total = helix + coil + sheet;
        if !(total > 0.0) || !total.is_finite() {
            return None;
        }
        Some(Self {
            helix: helix / total,
            coil: coil / total,
            sheet: sheet / total,
        })
    }

    /// Componentwise product of the triples, renormalized.
    pub fn combine<'a, I>(triples: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a StructureTriple>,
    {
        let mut triples = triples.into_iter().peekable();
        triples.peek()?;
        let (h, c, e) = triples.fold((1.0, 1.0, 1.0), |(h, c, e), t| {
            (h * t.helix, c * t.coil, e * t.sheet)
        });
        Self::from_densities(h, c, e)
    }

    pub fn get(&self, structure: SecondaryStructure) -> f64 {
        match structure.common() {
            SecondaryStructure::Helix => self.helix,
            SecondaryStructure::Coil => self.coil,
            SecondaryStructure::Sheet => self.sheet,
            _ => 0.0,
        }
    }

    /// Helix, coil and sheet as percentages.
    pub fn percentages(&self) -> [f64; 3] {
        SecondaryStructure::SCORED.map(|structure| self.get(structure) * 100.0)
    }
}

/// A correlation whose region contains a resonance, with its density score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub correlation: Correlation,
    pub score: f64,
    pub status: ScoreStatus,
    pub structure: Option<StructureTriple>,
}

/// One resonance's slot in an assignment record.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedPosition {
    /// `None` when no atom of the record's residue explains the resonance.
    pub atoms: Option<Vec<String>>,
    pub raw_score: f64,
    pub normalized_score: f64,
    pub status: Option<ScoreStatus>,
    pub structure: Option<StructureTriple>,
}

impl AssignedPosition {
    fn unassigned() -> Self {
        Self {
            atoms: None,
            raw_score: 0.0,
            normalized_score: 0.0,
            status: None,
            structure: None,
        }
    }

    fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            atoms: Some(candidate.correlation.atoms().to_vec()),
            raw_score: candidate.score,
            normalized_score: 0.0,
            status: Some(candidate.status),
            structure: candidate.structure,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.atoms.is_some()
    }
}

/// A residue type with one atom choice per resonance.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRecord {
    residue: AminoAcid,
    positions: Vec<AssignedPosition>,
    raw_joint: f64,
    normalized_joint: f64,
    structure: Option<StructureTriple>,
}

impl AssignmentRecord {
    fn new(residue: AminoAcid, positions: Vec<AssignedPosition>) -> Self {
        let raw_joint = positions.iter().map(|p| p.raw_score).product();
        let structure =
            StructureTriple::combine(positions.iter().filter_map(|p| p.structure.as_ref()));
        Self {
            residue,
            positions,
            raw_joint,
            normalized_joint: 0.0,
            structure,
        }
    }

    pub fn residue(&self) -> AminoAcid {
        self.residue
    }

    pub fn positions(&self) -> &[AssignedPosition] {
        &self.positions
    }

    pub fn raw_joint(&self) -> f64 {
        self.raw_joint
    }

    /// Joint score as a percentage of all records' joint scores.
    pub fn normalized_joint(&self) -> f64 {
        self.normalized_joint
    }

    pub fn structure(&self) -> Option<StructureTriple> {
        self.structure
    }

    pub fn normalized_score_sum(&self) -> f64 {
        self.positions.iter().map(|p| p.normalized_score).sum()
    }

    fn ranking(&self, other: &Self) -> Ordering {
        other
            .normalized_joint
            .total_cmp(&self.normalized_joint)
            .then_with(|| {
                other
                    .normalized_score_sum()
                    .total_cmp(&self.normalized_score_sum())
            })
            .then_with(|| self.residue.cmp(&other.residue))
            .then_with(|| {
                let atoms = |r: &Self| {
                    r.positions
                        .iter()
                        .map(|p| p.atoms.clone())
                        .collect::<Vec<_>>()
                };
                atoms(self).cmp(&atoms(other))
            })
    }
}

/// Ranked assignment records; best first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssignmentTable {
    records: Vec<AssignmentRecord>,
}

impl AssignmentTable {
    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssignmentRecord> {
        self.records.iter()
    }

    /// Leading records whose normalized joint score is above `cutoff` percent.
    pub fn above_cutoff(&self, cutoff: f64) -> impl Iterator<Item = &AssignmentRecord> {
        self.records
            .iter()
            .take_while(move |r| r.normalized_joint > cutoff)
    }
}

impl<'a> IntoIterator for &'a AssignmentTable {
    type Item = &'a AssignmentRecord;
    type IntoIter = std::slice::Iter<'a, AssignmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Scores resonances against correlations through external density and region sources.
pub struct AssignmentEngine<'a> {
    density: &'a dyn DensityProvider,
    region: &'a dyn RegionProvider,
}

impl<'a> AssignmentEngine<'a> {
    pub fn new(density: &'a dyn DensityProvider, region: &'a dyn RegionProvider) -> Self {
        Self { density, region }
    }

    /// Correlations whose region at `level` contains the resonance, scored.
    pub fn candidates(
        &self,
        resonance: &Resonance,
        correlations: &[Correlation],
        level: u32,
    ) -> Vec<Candidate> {
        #[cfg(not(feature = "parallel"))]
        let iterator = correlations.iter();

        #[cfg(feature = "parallel")]
        let iterator = correlations.par_iter();

        iterator
            .filter_map(|correlation| self.evaluate(resonance.values(), correlation, level))
            .collect()
    }

    fn evaluate(&self, values: &[f64], correlation: &Correlation, level: u32) -> Option<Candidate> {
        match self.region.contains(values, correlation, level) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                debug!(key = %correlation, error = %err, "Region lookup failed, excluding");
                return None;
            }
        }

        let (score, status) = match self.density.score(values, correlation) {
            Ok(score) if score.is_finite() && score >= 0.0 => (score, ScoreStatus::Scored),
            Ok(score) => {
                warn!(key = %correlation, score, "Density provider returned an invalid score");
                (0.0, ScoreStatus::Unavailable)
            }
            Err(err) => {
                warn!(key = %correlation, error = %err, "Density lookup failed, scoring as zero");
                (0.0, ScoreStatus::Unavailable)
            }
        };

        Some(Candidate {
            correlation: correlation.clone(),
            score,
            status,
            structure: self.structure_triple(values, correlation),
        })
    }

    fn structure_triple(
        &self,
        values: &[f64],
        correlation: &Correlation,
    ) -> Option<StructureTriple> {
        let mut densities = [0.0; 3];
        for (slot, structure) in densities.iter_mut().zip(SecondaryStructure::SCORED) {
            let variant = correlation.with_structure(structure);
            match self.density.score(values, &variant) {
                Ok(density) if density.is_finite() && density > 0.0 => *slot = density,
                Ok(_) => {}
                Err(err) if err.is_no_data() => return None,
                Err(err) => {
                    debug!(key = %variant, error = %err, "Structure density lookup failed");
                }
            }
        }
        let [helix, coil, sheet] = densities;
        StructureTriple::from_densities(helix, coil, sheet)
    }

    /// Builds the ranked table of residue assignments for a set of resonances.
    ///
    /// `weights` scales every normalized column by the residue's abundance.
    #[instrument(skip_all, name = "assignment_engine")]
    pub fn assign<'c, I>(
        &self,
        resonances: &[Resonance],
        correlations: I,
        level: u32,
        weights: Option<&FrequencyTable>,
    ) -> Result<AssignmentTable, EngineError>
    where
        I: IntoIterator<Item = &'c Correlation>,
    {
        let Some(first) = resonances.first() else {
            return Err(EngineError::EmptyResonanceSet);
        };
        if let Some((index, resonance)) = resonances
            .iter()
            .enumerate()
            .find(|(_, r)| r.dims() != first.dims())
        {
            return Err(EngineError::DimensionMismatch {
                index,
                expected: first.dims(),
                found: resonance.dims(),
            });
        }
        if !self.region.supports_level(level) {
            return Err(EngineError::UnsupportedConfidenceLevel(level));
        }

        let mut correlations: Vec<Correlation> = correlations.into_iter().cloned().collect();
        correlations.sort();

        let per_resonance: Vec<BTreeMap<AminoAcid, Vec<Candidate>>> = resonances
            .iter()
            .map(|resonance| {
                let candidates = self.candidates(resonance, &correlations, level);
                debug!(%resonance, candidates = candidates.len(), "Scored resonance");
                candidates
                    .into_iter()
                    .into_group_map_by(|c| c.correlation.residue())
                    .into_iter()
                    .collect()
            })
            .collect();

        let residues: Vec<AminoAcid> = per_resonance
            .iter()
            .flat_map(|groups| groups.keys().copied())
            .sorted()
            .dedup()
            .collect();

        let mut records = Vec::new();
        for residue in residues {
            let slots = per_resonance.iter().map(|groups| match groups.get(&residue) {
                Some(candidates) => candidates.iter().map(Some).collect::<Vec<_>>(),
                None => vec![None],
            });
            for choice in slots.multi_cartesian_product() {
                let positions = choice
                    .into_iter()
                    .map(|candidate| match candidate {
                        Some(c) => AssignedPosition::from_candidate(c),
                        None => AssignedPosition::unassigned(),
                    })
                    .collect();
                records.push(AssignmentRecord::new(residue, positions));
            }
        }

        normalize(&mut records, resonances.len(), weights);
        records.sort_by(AssignmentRecord::ranking);

        info!(
            resonances = resonances.len(),
            records = records.len(),
            level,
            "Assignment complete"
        );
        Ok(AssignmentTable { records })
    }
}

/// Turns each score column and the joint column into percentages of their weighted sums.
fn normalize(records: &mut [AssignmentRecord], positions: usize, weights: Option<&FrequencyTable>) {
    let weight = |residue: AminoAcid| weights.map_or(1.0, |table| table.get(residue));

    for index in 0..positions {
        let weighted: Vec<f64> = records
            .iter()
            .map(|r| r.positions[index].raw_score * weight(r.residue))
            .collect();
        let total: f64 = weighted.iter().sum();
        for (record, value) in records.iter_mut().zip(weighted) {
            record.positions[index].normalized_score = percentage(value, total);
        }
    }

    let weighted: Vec<f64> = records
        .iter()
        .map(|r| r.raw_joint * weight(r.residue))
        .collect();
    let total: f64 = weighted.iter().sum();
    for (record, value) in records.iter_mut().zip(weighted) {
        record.normalized_joint = percentage(value, total);
    }
}

fn percentage(value: f64, total: f64) -> f64 {
    if total > 0.0 { value / total * 100.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::providers::ProviderError;
    use std::collections::HashMap;

    /// Gaussian-free test double: fixed densities and inclusive 1-D/2-D boxes per key.
    #[derive(Default)]
    struct FakeProvider {
        densities: HashMap<String, Result<f64, ProviderError>>,
        regions: HashMap<String, Vec<(f64, f64)>>,
        levels: Vec<u32>,
    }

    impl FakeProvider {
        fn with(mut self, key: &str, density: f64, region: &[(f64, f64)]) -> Self {
            self.densities.insert(key.to_string(), Ok(density));
            self.regions.insert(key.to_string(), region.to_vec());
            self
        }

        fn density(mut self, key: &str, density: Result<f64, ProviderError>) -> Self {
            self.densities.insert(key.to_string(), density);
            self
        }
    }

    impl DensityProvider for FakeProvider {
        fn score(&self, _: &[f64], correlation: &Correlation) -> Result<f64, ProviderError> {
            self.densities
                .get(&correlation.key())
                .cloned()
                .unwrap_or_else(|| Err(ProviderError::no_data(correlation)))
        }
    }

    impl RegionProvider for FakeProvider {
        fn contains(
            &self,
            resonance: &[f64],
            correlation: &Correlation,
            _: u32,
        ) -> Result<bool, ProviderError> {
            let region = self
                .regions
                .get(&correlation.key())
                .ok_or_else(|| ProviderError::no_data(correlation))?;
            Ok(region
                .iter()
                .zip(resonance)
                .all(|((lo, hi), x)| lo <= x && x <= hi))
        }

        fn supports_level(&self, level: u32) -> bool {
            self.levels.is_empty() || self.levels.contains(&level)
        }
    }

    fn corr(code: &str, atoms: &[&str]) -> Correlation {
        Correlation::from_code(code, atoms.iter().copied(), SecondaryStructure::Independent)
            .unwrap()
    }

    fn carbon_provider() -> FakeProvider {
        FakeProvider::default()
            .with("Ala-(CA)-All", 0.2, &[(48.0, 58.0)])
            .with("Ala-(CB)-All", 0.3, &[(15.0, 22.0)])
            .with("Gly-(CA)-All", 0.1, &[(40.0, 50.0)])
            .with("Ser-(CA)-All", 0.05, &[(53.0, 63.0)])
    }

    fn carbon_correlations() -> Vec<Correlation> {
        vec![
            corr("A", &["CA"]),
            corr("A", &["CB"]),
            corr("G", &["CA"]),
            corr("S", &["CA"]),
        ]
    }

    #[test]
    fn resonance_parses_comma_separated_values() {
        let r: Resonance = "55.1, 18.2".parse().unwrap();
        assert_eq!(r.values(), &[55.1, 18.2]);
        assert_eq!(r.to_string(), "(55.1, 18.2)");
        assert!("55.1,abc".parse::<Resonance>().is_err());
        assert!("".parse::<Resonance>().is_err());
        assert!("NaN".parse::<Resonance>().is_err());
    }

    #[test]
    fn candidates_keep_only_correlations_whose_region_contains_the_resonance() {
        let provider = carbon_provider();
        let engine = AssignmentEngine::new(&provider, &provider);
        let found = engine.candidates(&Resonance::from(55.0), &carbon_correlations(), 95);
        let keys: Vec<String> = found.iter().map(|c| c.correlation.key()).collect();
        assert_eq!(keys, vec!["Ala-(CA)-All", "Ser-(CA)-All"]);
        assert!(found.iter().all(|c| c.status == ScoreStatus::Scored));
    }

    #[test]
    fn region_failures_exclude_the_candidate() {
        let provider = carbon_provider();
        let engine = AssignmentEngine::new(&provider, &provider);
        let found = engine.candidates(&Resonance::from(55.0), &[corr("W", &["CA"])], 95);
        assert!(found.is_empty());
    }

    #[test]
    fn density_failure_scores_zero_and_is_flagged() {
        let provider = carbon_provider().density(
            "Ala-(CA)-All",
            Err(ProviderError::Lookup {
                key: "Ala-(CA)-All".into(),
                reason: "corrupt".into(),
            }),
        );
        let engine = AssignmentEngine::new(&provider, &provider);
        let found = engine.candidates(&Resonance::from(55.0), &[corr("A", &["CA"])], 95);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].score, 0.0);
        assert_eq!(found[0].status, ScoreStatus::Unavailable);
    }

    #[test]
    fn structure_triple_is_normalized_over_helix_coil_sheet() {
        let provider = carbon_provider()
            .density("Ala-(CA)-Helix", Ok(0.6))
            .density("Ala-(CA)-Coil", Ok(0.3))
            .density("Ala-(CA)-Sheet", Ok(0.1));
        let engine = AssignmentEngine::new(&provider, &provider);
        let found = engine.candidates(&Resonance::from(55.0), &[corr("A", &["CA"])], 95);
        let triple = found[0].structure.unwrap();
        assert!((triple.helix - 0.6).abs() < 1e-12);
        assert!((triple.coil - 0.3).abs() < 1e-12);
        assert!((triple.sheet - 0.1).abs() < 1e-12);
        assert!((triple.get(SecondaryStructure::Turn) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn missing_structure_variant_means_no_triple() {
        let provider = carbon_provider()
            .density("Ala-(CA)-Helix", Ok(0.6))
            .density("Ala-(CA)-Coil", Ok(0.3));
        let engine = AssignmentEngine::new(&provider, &provider);
        let found = engine.candidates(&Resonance::from(55.0), &[corr("A", &["CA"])], 95);
        assert_eq!(found[0].structure, None);
    }

    #[test]
    fn failed_structure_variant_contributes_zero() {
        let provider = carbon_provider()
            .density("Ala-(CA)-Helix", Ok(0.5))
            .density("Ala-(CA)-Coil", Ok(0.5))
            .density(
                "Ala-(CA)-Sheet",
                Err(ProviderError::Lookup {
                    key: "Ala-(CA)-Sheet".into(),
                    reason: "bad".into(),
                }),
            );
        let engine = AssignmentEngine::new(&provider, &provider);
        let found = engine.candidates(&Resonance::from(55.0), &[corr("A", &["CA"])], 95);
        let triple = found[0].structure.unwrap();
        assert_eq!(triple.sheet, 0.0);
        assert!((triple.helix - 0.5).abs() < 1e-12);
    }

    #[test]
    fn all_zero_structure_densities_mean_no_triple() {
        assert_eq!(StructureTriple::from_densities(0.0, 0.0, 0.0), None);
    }

    #[test]
    fn single_resonance_scores_are_normalized_and_ranked() {
        let provider = carbon_provider();
        let engine = AssignmentEngine::new(&provider, &provider);
        let table = engine
            .assign(&[Resonance::from(55.0)], &carbon_correlations(), 95, None)
            .unwrap();

        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.residue(), AminoAcid::Alanine);
        assert!((first.normalized_joint() - 80.0).abs() < 1e-9);
        assert!((first.positions()[0].normalized_score - 80.0).abs() < 1e-9);
        let second = &table.records()[1];
        assert_eq!(second.residue(), AminoAcid::Serine);
        assert!((second.normalized_joint() - 20.0).abs() < 1e-9);

        let total: f64 = table.iter().map(|r| r.normalized_joint()).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn frequency_weights_rescale_columns() {
        let provider = carbon_provider();
        let engine = AssignmentEngine::new(&provider, &provider);
        let weights = FrequencyTable::new(
            [(AminoAcid::Alanine, 0.1), (AminoAcid::Serine, 0.9)]
                .into_iter()
                .collect(),
        );
        let table = engine
            .assign(
                &[Resonance::from(55.0)],
                &carbon_correlations(),
                95,
                Some(&weights),
            )
            .unwrap();

        // 0.2 * 0.1 = 0.02 against 0.05 * 0.9 = 0.045
        let first = &table.records()[0];
        assert_eq!(first.residue(), AminoAcid::Serine);
        assert!((first.normalized_joint() - 0.045 / 0.065 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn multiple_resonances_combine_per_residue_with_placeholders() {
        let provider = carbon_provider();
        let engine = AssignmentEngine::new(&provider, &provider);
        let resonances = [Resonance::from(55.0), Resonance::from(19.0)];
        let table = engine
            .assign(&resonances, &carbon_correlations(), 95, None)
            .unwrap();

        // Ala: (CA, CB). Ser: (CA, unassigned).
        assert_eq!(table.len(), 2);
        let ala = &table.records()[0];
        assert_eq!(ala.residue(), AminoAcid::Alanine);
        assert_eq!(ala.positions()[0].atoms, Some(vec!["CA".to_string()]));
        assert_eq!(ala.positions()[1].atoms, Some(vec!["CB".to_string()]));
        assert!((ala.raw_joint() - 0.06).abs() < 1e-12);
        assert!((ala.normalized_joint() - 100.0).abs() < 1e-9);
        assert!((ala.positions()[1].normalized_score - 100.0).abs() < 1e-9);

        let ser = &table.records()[1];
        assert_eq!(ser.residue(), AminoAcid::Serine);
        assert!(!ser.positions()[1].is_assigned());
        assert_eq!(ser.raw_joint(), 0.0);
        assert_eq!(ser.normalized_joint(), 0.0);
        assert_eq!(ser.positions()[1].status, None);
    }

    #[test]
    fn resonance_outside_every_region_leaves_its_position_unassigned() {
        let provider = carbon_provider();
        let engine = AssignmentEngine::new(&provider, &provider);
        let table = engine
            .assign(
                &[Resonance::from(55.0), Resonance::from(300.0)],
                &carbon_correlations(),
                95,
                None,
            )
            .unwrap();

        assert!(!table.is_empty());
        for record in &table {
            let position = &record.positions()[1];
            assert!(!position.is_assigned(), "{:?}", record.residue());
            assert_eq!(position.normalized_score, 0.0);
            assert_eq!(position.raw_score, 0.0);
            assert_eq!(record.normalized_joint(), 0.0);
        }
        let residues: Vec<AminoAcid> = table.iter().map(|r| r.residue()).collect();
        assert_eq!(residues, vec![AminoAcid::Alanine, AminoAcid::Serine]);
    }

    #[test]
    fn percentages_follow_helix_coil_sheet_order() {
        let triple = StructureTriple::from_densities(2.0, 1.0, 1.0).unwrap();
        let [h, c, e] = triple.percentages();
        assert!((h - 50.0).abs() < 1e-9);
        assert!((c - 25.0).abs() < 1e-9);
        assert!((e - 25.0).abs() < 1e-9);
    }

    #[test]
    fn ties_on_joint_score_fall_back_to_score_sum() {
        let provider = FakeProvider::default()
            .with("Ala-(CA)-All", 0.2, &[(48.0, 58.0)])
            .with("Gly-(CA)-All", 0.1, &[(48.0, 58.0)])
            .with("Ser-(CB)-All", 0.1, &[(60.0, 66.0)]);
        let engine = AssignmentEngine::new(&provider, &provider);
        let correlations = vec![corr("A", &["CA"]), corr("G", &["CA"]), corr("S", &["CB"])];
        let table = engine
            .assign(
                &[Resonance::from(55.0), Resonance::from(63.0)],
                &correlations,
                95,
                None,
            )
            .unwrap();

        // Every record leaves one resonance unassigned, so all joints are zero.
        assert!(table.iter().all(|r| r.normalized_joint() == 0.0));
        let order: Vec<AminoAcid> = table.iter().map(|r| r.residue()).collect();
        assert_eq!(
            order,
            vec![AminoAcid::Serine, AminoAcid::Alanine, AminoAcid::Glycine]
        );
    }

    #[test]
    fn zero_columns_normalize_to_zero() {
        let provider = FakeProvider::default().with("Ala-(CA)-All", 0.0, &[(48.0, 58.0)]);
        let engine = AssignmentEngine::new(&provider, &provider);
        let table = engine
            .assign(&[Resonance::from(55.0)], &[corr("A", &["CA"])], 95, None)
            .unwrap();
        assert_eq!(table.records()[0].normalized_joint(), 0.0);
        assert_eq!(table.records()[0].positions()[0].normalized_score, 0.0);
    }

    #[test]
    fn no_candidates_yield_an_empty_table() {
        let provider = carbon_provider();
        let engine = AssignmentEngine::new(&provider, &provider);
        let table = engine
            .assign(&[Resonance::from(200.0)], &carbon_correlations(), 95, None)
            .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn invalid_requests_are_rejected() {
        let provider = FakeProvider {
            levels: vec![68, 95],
            ..carbon_provider()
        };
        let engine = AssignmentEngine::new(&provider, &provider);
        let correlations = carbon_correlations();

        assert!(matches!(
            engine.assign(&[], &correlations, 95, None),
            Err(EngineError::EmptyResonanceSet)
        ));
        assert!(matches!(
            engine.assign(
                &[Resonance::from(55.0), Resonance::new(vec![55.0, 18.0])],
                &correlations,
                95,
                None
            ),
            Err(EngineError::DimensionMismatch {
                index: 1,
                expected: 1,
                found: 2
            })
        ));
        assert!(matches!(
            engine.assign(&[Resonance::from(55.0)], &correlations, 80, None),
            Err(EngineError::UnsupportedConfidenceLevel(80))
        ));
    }

    #[test]
    fn combined_triple_multiplies_known_positions() {
        let a = StructureTriple::from_densities(0.5, 0.25, 0.25).unwrap();
        let b = StructureTriple::from_densities(0.5, 0.5, 0.0).unwrap();
        let combined = StructureTriple::combine([&a, &b]).unwrap();
        assert!((combined.helix - 0.25 / 0.375).abs() < 1e-12);
        assert!((combined.coil - 0.125 / 0.375).abs() < 1e-12);
        assert_eq!(combined.sheet, 0.0);
        assert_eq!(StructureTriple::combine(std::iter::empty()), None);
    }

    #[test]
    fn cutoff_stops_at_first_low_scoring_record() {
        let provider = carbon_provider();
        let engine = AssignmentEngine::new(&provider, &provider);
        let table = engine
            .assign(&[Resonance::from(55.0)], &carbon_correlations(), 95, None)
            .unwrap();
        assert_eq!(table.above_cutoff(10.0).count(), 2);
        assert_eq!(table.above_cutoff(20.0).count(), 1);
        assert_eq!(table.above_cutoff(90.0).count(), 0);
    }
}
