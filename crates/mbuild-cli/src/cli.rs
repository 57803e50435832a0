use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Janos Sallai",
    version,
    about = "mbuild CLI - Assemble molecular structures from port-bearing building blocks.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a linear alkane from the built-in CH2 and CH3 blocks.
    Alkane(AlkaneArgs),
    /// Build a chain by docking building-block templates end to end.
    Chain(ChainArgs),
    /// Summarize a building-block template.
    Info(InfoArgs),
}

/// Options shared by every command that writes a structure.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Number of units in the chain. Overrides `chain.length` from the config file.
    #[arg(short = 'n', long, value_name = "INT")]
    pub length: Option<usize>,

    /// Path for the output XYZ file. Overrides `output.path` from the config file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a build configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write the ghost atoms that mark ports.
    #[arg(long)]
    pub include_ports: bool,
}

/// Arguments for the `alkane` subcommand.
#[derive(Args, Debug)]
pub struct AlkaneArgs {
    #[command(flatten)]
    pub build: BuildArgs,
}

/// Arguments for the `chain` subcommand.
#[derive(Args, Debug)]
pub struct ChainArgs {
    /// Template for the repeated body unit.
    #[arg(long, required = true, value_name = "PATH")]
    pub body: PathBuf,

    /// Template for the first unit. Defaults to the body template.
    #[arg(long, value_name = "PATH")]
    pub head: Option<PathBuf>,

    /// Template for the last unit. Defaults to the body template.
    #[arg(long, value_name = "PATH")]
    pub tail: Option<PathBuf>,

    /// Port of each new unit that is docked onto the chain.
    #[arg(long, default_value = "male_port", value_name = "LABEL")]
    pub entry_port: String,

    /// Port of the previous unit that receives the next one.
    #[arg(long, default_value = "female_port", value_name = "LABEL")]
    pub exit_port: String,

    #[command(flatten)]
    pub build: BuildArgs,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the building-block template to inspect.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub template: PathBuf,
}
