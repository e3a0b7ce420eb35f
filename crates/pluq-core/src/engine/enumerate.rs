use crate::core::models::correlation::Correlation;
use crate::core::models::experiment::Experiment;
use crate::core::models::residue::AminoAcid;
use crate::core::models::structure::SecondaryStructure;
use crate::core::topology::graph::{ResidueGraph, TopologyError};
use crate::core::utils::identifiers::{is_backbone_atom, nucleus_of};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationOptions {
    /// Expand all-backbone tuples over the common secondary structures.
    pub include_structure: bool,
    /// Emit only one atom order per tuple of a symmetric experiment.
    pub ignore_symmetry_duplicate: bool,
    /// Keep tuples whose positions all name the same atom.
    pub include_diagonal: bool,
}

impl EnumerationOptions {
    /// Options used when assigning resonances: no structure expansion, one order per
    /// symmetric tuple, no diagonal tuples.
    pub fn for_assignment() -> Self {
        Self {
            include_structure: false,
            ignore_symmetry_duplicate: true,
            include_diagonal: false,
        }
    }
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        Self {
            include_structure: true,
            ignore_symmetry_duplicate: false,
            include_diagonal: true,
        }
    }
}

/// Every correlation the given residues can produce in `experiment`.
///
/// Residues are deduplicated first, so passing a full sequence is fine.
#[instrument(skip_all, name = "enumerate_correlations")]
pub fn enumerate<I>(
    residues: I,
    experiment: &Experiment,
    options: EnumerationOptions,
) -> Result<HashSet<Correlation>, TopologyError>
where
    I: IntoIterator<Item = AminoAcid>,
{
    let unique: Vec<AminoAcid> = residues
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = unique.iter();

    #[cfg(feature = "parallel")]
    let iterator = unique.par_iter();

    let per_residue = iterator
        .map(|&residue| residue_correlations(residue, experiment, options))
        .collect::<Result<Vec<_>, _>>()?;

    let correlations: HashSet<Correlation> = per_residue.into_iter().flatten().collect();
    info!(
        residues = unique.len(),
        correlations = correlations.len(),
        %experiment,
        "Enumerated correlations"
    );
    Ok(correlations)
}

fn residue_correlations(
    residue: AminoAcid,
    experiment: &Experiment,
    options: EnumerationOptions,
) -> Result<Vec<Correlation>, TopologyError> {
    let graph = ResidueGraph::of(residue);
    let dims = experiment.dims();

    let per_position: Vec<Vec<&'static str>> = experiment
        .nuclei()
        .iter()
        .map(|nucleus| {
            graph
                .atoms()
                .iter()
                .copied()
                .filter(|atom| nucleus_of(atom) == Some(*nucleus))
                .collect()
        })
        .collect();

    let tuples: Vec<Vec<&'static str>> = if experiment.is_symmetric() {
        // Symmetric experiments observe one nucleus, so every position has the same pool.
        let pool = per_position.first().cloned().unwrap_or_default();
        if experiment.has_diagonal() {
            pool.into_iter().combinations_with_replacement(dims).collect()
        } else {
            pool.into_iter().combinations(dims).collect()
        }
    } else {
        per_position.into_iter().multi_cartesian_product().collect()
    };

    let mut correlations = Vec::new();
    for atoms in tuples {
        if let (2, Some(max_bonds)) = (dims, experiment.max_bonds()) {
            if graph.bond_distance(atoms[0], atoms[1])? > max_bonds {
                continue;
            }
        }

        if !options.include_diagonal && dims >= 2 && atoms.iter().all_equal() {
            continue;
        }

        let structures: &[SecondaryStructure] =
            if options.include_structure && atoms.iter().all(|atom| is_backbone_atom(atom)) {
                &SecondaryStructure::EXPANDED
            } else {
                &[SecondaryStructure::Independent]
            };

        for &structure in structures {
            let correlation = Correlation::new(residue, atoms.iter().copied(), structure);
            if experiment.is_symmetric() && !options.ignore_symmetry_duplicate {
                correlations.push(correlation.reversed());
            }
            correlations.push(correlation);
        }
    }

    debug!(
        residue = ?residue,
        count = correlations.len(),
        "Enumerated residue correlations"
    );
    Ok(correlations)
}
