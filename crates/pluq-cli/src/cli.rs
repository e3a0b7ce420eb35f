use clap::{Args, Parser, Subcommand};
use pluq::engine::assign::Resonance;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "PLUQin - ranks intra-residue assignments of protein chemical shifts by likelihood.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel scoring.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank possible residue and atom assignments for observed peaks.
    Assign(AssignArgs),
    /// Show the bond distance and shortest path between two atoms of a residue.
    Bonds(BondsArgs),
    /// List the correlations a sequence can produce in an experiment.
    Correlations(CorrelationsArgs),
}

/// Arguments for the `assign` subcommand.
#[derive(Args, Debug)]
pub struct AssignArgs {
    // --- Input ---
    /// A peak as comma-separated shifts, one per dimension (e.g. -p 55 or -p 55,18).
    /// Repeat for several peaks.
    #[arg(short, long = "peak", required = true, value_name = "SHIFTS")]
    pub peaks: Vec<Resonance>,

    /// Experiment name (built-ins: c, n, h, cc, cn).
    #[arg(short, long, value_name = "NAME")]
    pub experiment: Option<String>,

    /// Protein sequence in one-letter codes. Defaults to an average protein.
    #[arg(short, long, value_name = "SEQ")]
    pub sequence: Option<String>,

    // --- Scoring ---
    /// Confidence level of the regions used to select candidates, in percent.
    #[arg(short, long, value_name = "PERCENT")]
    pub level: Option<u32>,

    /// Hide rows whose joint score is at or below this percentage.
    /// Use a negative number to show everything.
    #[arg(short, long, value_name = "PERCENT", allow_hyphen_values = true)]
    pub cutoff: Option<f64>,

    /// Do not weight scores by residue frequency.
    #[arg(long)]
    pub no_frequency: bool,

    // --- Data ---
    /// Shift library (TOML) providing densities and regions.
    #[arg(long, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Additional experiment definitions (TOML).
    #[arg(long, value_name = "PATH")]
    pub experiments: Option<PathBuf>,

    /// Residue frequency table (CSV with `residue,fraction` columns).
    #[arg(long, value_name = "PATH")]
    pub frequencies: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S assignment.level=68
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `bonds` subcommand.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Residue as a one- or three-letter code.
    #[arg(value_name = "RESIDUE")]
    pub residue: String,

    /// First atom (BMRB name).
    #[arg(value_name = "ATOM1")]
    pub start: String,

    /// Second atom (BMRB name).
    #[arg(value_name = "ATOM2")]
    pub end: String,

    /// List every simple path instead of only the shortest one.
    #[arg(long)]
    pub all_paths: bool,
}

/// Arguments for the `correlations` subcommand.
#[derive(Args, Debug)]
pub struct CorrelationsArgs {
    /// Experiment name (built-ins: c, n, h, cc, cn).
    #[arg(short, long, default_value = "c", value_name = "NAME")]
    pub experiment: String,

    /// Protein sequence in one-letter codes. Defaults to all 20 residues.
    #[arg(short, long, default_value = "", value_name = "SEQ")]
    pub sequence: String,

    /// Additional experiment definitions (TOML).
    #[arg(long, value_name = "PATH")]
    pub experiments: Option<PathBuf>,

    /// Expand backbone correlations over helix, sheet and coil.
    #[arg(long)]
    pub structure: bool,

    /// Keep both atom orders of symmetric correlations.
    #[arg(long)]
    pub keep_symmetric: bool,

    /// Keep correlations of an atom with itself.
    #[arg(long)]
    pub diagonal: bool,
}
