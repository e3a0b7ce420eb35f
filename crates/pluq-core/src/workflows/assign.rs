use crate::engine::assign::{AssignmentEngine, AssignmentTable, Resonance};
use crate::engine::config::AssignmentConfig;
use crate::engine::enumerate::{EnumerationOptions, enumerate};
use crate::engine::error::EngineError;
use crate::engine::providers::{DensityProvider, RegionProvider};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub table: AssignmentTable,
    /// Size of the enumerated correlation set the resonances were scored against.
    pub correlations_considered: usize,
}

#[instrument(skip_all, name = "assignment_workflow")]
pub fn run(
    resonances: &[Resonance],
    config: &AssignmentConfig,
    density: &dyn DensityProvider,
    region: &dyn RegionProvider,
) -> Result<AssignmentResult, EngineError> {
    if resonances.is_empty() {
        return Err(EngineError::EmptyResonanceSet);
    }
    let expected = config.experiment.dims();
    if let Some((index, resonance)) = resonances
        .iter()
        .enumerate()
        .find(|(_, r)| r.dims() != expected)
    {
        return Err(EngineError::DimensionMismatch {
            index,
            expected,
            found: resonance.dims(),
        });
    }
    if !region.supports_level(config.confidence_level) {
        return Err(EngineError::UnsupportedConfidenceLevel(config.confidence_level));
    }

    info!(
        resonances = resonances.len(),
        experiment = %config.experiment,
        sequence = %config.sequence,
        level = config.confidence_level,
        "Starting assignment"
    );

    let correlations = enumerate(
        config.sequence.residues().iter().copied(),
        &config.experiment,
        EnumerationOptions::for_assignment(),
    )?;

    let weights = config.frequency_weighting.resolve(&config.sequence);
    let engine = AssignmentEngine::new(density, region);
    let table = engine.assign(
        resonances,
        &correlations,
        config.confidence_level,
        weights.as_ref(),
    )?;

    info!(records = table.len(), "Assignment workflow complete");
    Ok(AssignmentResult {
        table,
        correlations_considered: correlations.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::library::ShiftLibrary;
    use crate::core::models::experiment::Experiment;
    use crate::core::models::residue::AminoAcid;
    use crate::core::models::sequence::ProteinSequence;
    use crate::engine::config::{AssignmentConfigBuilder, FrequencyWeighting};

    const LIBRARY: &str = r#"
        confidence-levels = [68, 95]

        [[correlation]]
        key = "Ala-(CA)-All"
        mean = [52.5]
        std = [2.0]
        [[correlation.region]]
        level = 95
        lower = [48.5]
        upper = [56.5]

        [[correlation]]
        key = "Ala-(CA)-Helix"
        mean = [54.5]
        std = [1.0]

        [[correlation]]
        key = "Ala-(CA)-Coil"
        mean = [52.0]
        std = [1.5]

        [[correlation]]
        key = "Ala-(CA)-Sheet"
        mean = [50.5]
        std = [1.2]

        [[correlation]]
        key = "Ser-(CA)-All"
        mean = [58.0]
        std = [2.0]
        [[correlation.region]]
        level = 95
        lower = [54.0]
        upper = [62.0]

        [[correlation]]
        key = "Gly-(CA)-All"
        mean = [45.0]
        std = [1.5]
        [[correlation.region]]
        level = 95
        lower = [42.0]
        upper = [48.0]
    "#;

    fn config(sequence: &str, weighting: FrequencyWeighting) -> AssignmentConfig {
        AssignmentConfigBuilder::new()
            .experiment(Experiment::standard("c").unwrap())
            .sequence(ProteinSequence::parse(sequence).unwrap())
            .confidence_level(95)
            .frequency_weighting(weighting)
            .build()
            .unwrap()
    }

    #[test]
    fn assigns_carbon_shift_across_sequence_residues() {
        let library = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let config = config("ASG", FrequencyWeighting::Disabled);
        let result = run(&[Resonance::from(55.0)], &config, &library, &library).unwrap();

        let residues: Vec<AminoAcid> = result.table.iter().map(|r| r.residue()).collect();
        assert_eq!(residues, vec![AminoAcid::Alanine, AminoAcid::Serine]);
        assert!(result.correlations_considered > 0);

        let ala = &result.table.records()[0];
        let triple = ala.positions()[0].structure.unwrap();
        assert!(triple.helix > triple.sheet);
        assert!(ala.structure().is_some());
        let total: f64 = result.table.iter().map(|r| r.normalized_joint()).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sequence_restricts_candidate_residues() {
        let library = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let config = config("GGS", FrequencyWeighting::Sequence);
        let result = run(&[Resonance::from(55.0)], &config, &library, &library).unwrap();
        assert_eq!(result.table.len(), 1);
        assert_eq!(result.table.records()[0].residue(), AminoAcid::Serine);
        assert!((result.table.records()[0].normalized_joint() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn unmatched_resonance_gives_empty_table() {
        let library = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let config = config("", FrequencyWeighting::Sequence);
        let result = run(&[Resonance::from(150.0)], &config, &library, &library).unwrap();
        assert!(result.table.is_empty());
    }

    #[test]
    fn resonance_dimensions_must_match_experiment() {
        let library = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let config = config("A", FrequencyWeighting::Disabled);
        let err = run(
            &[Resonance::new(vec![55.0, 18.0])],
            &config,
            &library,
            &library,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::DimensionMismatch {
                index: 0,
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn unsupported_level_and_empty_input_are_rejected() {
        let library = ShiftLibrary::from_toml_str(LIBRARY, "test").unwrap();
        let mut config = config("A", FrequencyWeighting::Disabled);
        assert!(matches!(
            run(&[], &config, &library, &library),
            Err(EngineError::EmptyResonanceSet)
        ));

        config.confidence_level = 80;
        assert!(matches!(
            run(&[Resonance::from(55.0)], &config, &library, &library),
            Err(EngineError::UnsupportedConfidenceLevel(80))
        ));
    }
}
