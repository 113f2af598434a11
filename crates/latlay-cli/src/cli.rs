use clap::Parser;
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
    about = "latlay - force-directed layout refinement for line diagrams of finite lattices.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input layout document in JSON format, or '-' for stdin.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the optimized layout document. Defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the maximum number of descent iterations from the config file.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<usize>,

    /// Override the convergence tolerance from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
