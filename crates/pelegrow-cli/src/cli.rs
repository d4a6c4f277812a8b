use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "PELEGROW CLI - Compare PELE hetero-atom templates before and after fragment growing, and transplant non-bonded properties between them.",
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

    /// Set the number of threads used when several grown templates are compared.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the atoms added by growth and report their properties and attaching bonds.
    Diff(DiffArgs),
    /// Print the atom, property and bond tables of a single template.
    Inspect(InspectArgs),
}

/// Arguments for the `diff` subcommand.
#[derive(Args, Debug)]
pub struct DiffArgs {
    // --- Core Arguments ---
    /// Template the ligand started from (a name inside the template directory, or a path).
    #[arg(required = true, value_name = "INITIAL")]
    pub initial: String,

    /// One or more templates obtained after growing a fragment.
    #[arg(required = true, num_args(1..), value_name = "GROWN")]
    pub grown: Vec<String>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory used to resolve template names.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    // --- Transplant Arguments ---
    /// TOML file listing `[[correspondence]]` source/destination label pairs.
    #[arg(short, long, value_name = "PATH")]
    pub plan: Option<PathBuf>,

    /// Transplant the properties of an initial atom onto a grown atom.
    /// Can be used multiple times. Example: -m _H8_=_C8_
    #[arg(short = 'm', long = "map", value_name = "SRC=DEST")]
    pub map: Vec<String>,

    // --- Output Arguments ---
    /// Write CSV reports for every grown template into this directory.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Template to print (a name inside the template directory, or a path).
    #[arg(required = true, value_name = "TEMPLATE")]
    pub template: String,

    /// Directory used to resolve template names.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}
