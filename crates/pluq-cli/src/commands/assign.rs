use crate::cli::AssignArgs;
use crate::config::FileConfig;
use crate::display::render_assignments;
use crate::error::{CliError, Result};
use pluq::core::io::library::ShiftLibrary;
use pluq::workflows;
use tracing::{info, warn};

pub fn run(args: AssignArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let settings = FileConfig::for_args(&args)?.merge_with_cli(&args)?;

    info!("Loading shift library from {:?}", &settings.library);
    let library = ShiftLibrary::load(&settings.library).map_err(|e| CliError::FileParsing {
        path: settings.library.clone(),
        source: e.into(),
    })?;
    info!(entries = library.len(), "Shift library loaded");

    let result = workflows::assign::run(&args.peaks, &settings.config, &library, &library)?;
    info!(
        "Workflow finished: {} record(s) from {} correlation(s).",
        result.table.len(),
        result.correlations_considered
    );
    if result.table.is_empty() {
        warn!("No correlation region contains any of the given peaks.");
    }

    println!(
        "{}",
        render_assignments(
            &args.peaks,
            &settings.experiment_name,
            &result.table,
            settings.cutoff
        )
    );
    Ok(())
}
