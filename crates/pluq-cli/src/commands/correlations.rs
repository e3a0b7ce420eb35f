use crate::cli::CorrelationsArgs;
use crate::config::load_registry;
use crate::error::Result;
use pluq::core::io::experiments::ExperimentRegistry;
use pluq::core::models::sequence::ProteinSequence;
use pluq::engine::enumerate::{EnumerationOptions, enumerate};
use tracing::info;

fn list(args: &CorrelationsArgs) -> Result<Vec<String>> {
    let registry = match &args.experiments {
        Some(path) => load_registry(path)?,
        None => ExperimentRegistry::builtin(),
    };
    let experiment = registry.get(&args.experiment)?;
    let sequence = ProteinSequence::parse(&args.sequence)?;
    let options = EnumerationOptions {
        include_structure: args.structure,
        ignore_symmetry_duplicate: !args.keep_symmetric,
        include_diagonal: args.diagonal,
    };
    info!(
        "Enumerating '{}' correlations for {}",
        args.experiment, sequence
    );

    let correlations = enumerate(sequence.residues().iter().copied(), experiment, options)?;
    let mut keys: Vec<String> = correlations.iter().map(|c| c.key()).collect();
    keys.sort();
    Ok(keys)
}

pub fn run(args: CorrelationsArgs) -> Result<()> {
    for key in list(&args)? {
        println!("{}", key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn correlations_args(extra: &[&str]) -> CorrelationsArgs {
        let mut full = vec!["pluqin", "correlations"];
        full.extend_from_slice(extra);
        match Cli::parse_from(full).command {
            Commands::Correlations(args) => args,
            _ => panic!("Expected 'correlations' subcommand"),
        }
    }

    #[test]
    fn alanine_carbons_are_listed_in_key_order() {
        let keys = list(&correlations_args(&["-s", "A"])).unwrap();
        assert_eq!(keys, vec!["Ala-(C)-All", "Ala-(CA)-All", "Ala-(CB)-All"]);
    }

    #[test]
    fn structure_flag_expands_backbone_atoms() {
        let keys = list(&correlations_args(&["-s", "A", "--structure"])).unwrap();
        assert_eq!(keys.len(), 9);
        assert!(keys.contains(&"Ala-(CA)-Helix".to_string()));
    }

    #[test]
    fn unknown_experiment_is_an_error() {
        assert!(list(&correlations_args(&["-e", "xyz"])).is_err());
    }
}
