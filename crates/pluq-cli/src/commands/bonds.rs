use crate::cli::BondsArgs;
use crate::error::Result;
use pluq::core::models::residue::AminoAcid;
use pluq::core::topology::graph::ResidueGraph;
use tracing::info;

fn describe(args: &BondsArgs) -> Result<String> {
    let residue: AminoAcid = args.residue.parse()?;
    let graph = ResidueGraph::of(residue);
    info!(
        "Searching paths between {} and {} in {}",
        args.start,
        args.end,
        residue.three_letter()
    );

    if args.all_paths {
        let lines: Vec<String> = graph
            .paths(&args.start, &args.end)?
            .map(|path| path.join("-"))
            .collect();
        return Ok(lines.join("\n"));
    }

    let distance = graph.bond_distance(&args.start, &args.end)?;
    let path = graph.shortest_path(&args.start, &args.end)?;
    Ok(format!(
        "{} {}-{}: {} bond(s)\n{}",
        residue.three_letter(),
        args.start,
        args.end,
        distance,
        path.join("-")
    ))
}

pub fn run(args: BondsArgs) -> Result<()> {
    println!("{}", describe(&args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args(residue: &str, start: &str, end: &str, all_paths: bool) -> BondsArgs {
        BondsArgs {
            residue: residue.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            all_paths,
        }
    }

    #[test]
    fn shortest_path_and_distance_are_reported() {
        let out = describe(&args("A", "O", "HB1", false)).unwrap();
        assert_eq!(out, "Ala O-HB1: 4 bond(s)\nO-C-CA-CB-HB1");
    }

    #[test]
    fn all_paths_lists_one_path_per_line() {
        let out = describe(&args("Ala", "CA", "CB", true)).unwrap();
        assert_eq!(out, "CA-CB");
    }

    #[test]
    fn errors_surface_as_cli_errors() {
        assert!(matches!(
            describe(&args("X", "CA", "CB", false)),
            Err(CliError::Sequence(_))
        ));
        assert!(matches!(
            describe(&args("A", "CA", "ZZ", false)),
            Err(CliError::Topology(_))
        ));
    }
}
