use crate::config::OutputFormat;
use crate::utils::parser::parse_point;
use clap::{Args, Parser, Subcommand};
use nerfkit::core::models::vector::Vector;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Kristian Rother",
    version,
    about = "nerf - Build Cartesian coordinates from bond lengths, bond angles, and torsions with the Natural Extension Reference Frame method.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by the batch command.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place a fourth point from three reference points and an internal coordinate.
    Build(BuildArgs),
    /// Print the orthonormal reference frame of three points.
    Frame(FrameArgs),
    /// Measure the distance, bond angle, and torsion of a fourth point.
    Measure(MeasureArgs),
    /// Build every coordinate listed in a TOML job file.
    Batch(BatchArgs),
}

/// The three ordered reference points shared by several subcommands.
#[derive(Args, Debug, Clone)]
pub struct TripleArgs {
    /// First reference point, as "x,y,z".
    #[arg(long, required = true, value_name = "X,Y,Z", value_parser = parse_point, allow_hyphen_values = true)]
    pub first: Vector,

    /// Second reference point, as "x,y,z".
    #[arg(long, required = true, value_name = "X,Y,Z", value_parser = parse_point, allow_hyphen_values = true)]
    pub second: Vector,

    /// Third reference point, as "x,y,z". The new point is bonded to this one.
    #[arg(long, required = true, value_name = "X,Y,Z", value_parser = parse_point, allow_hyphen_values = true)]
    pub third: Vector,
}

/// Output and configuration options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of decimal places in printed numbers, overriding the config file.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Output format, overriding the config file.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=6
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub triple: TripleArgs,

    /// Distance between the third point and the new point. Must be positive.
    #[arg(short, long, required = true, value_name = "FLOAT", allow_hyphen_values = true)]
    pub distance: f64,

    /// Bond angle at the third point, in degrees.
    #[arg(short, long, required = true, value_name = "DEGREES", allow_hyphen_values = true)]
    pub angle: f64,

    /// Torsion angle of the four points, in degrees.
    #[arg(short, long, required = true, value_name = "DEGREES", allow_hyphen_values = true)]
    pub torsion: f64,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `frame` subcommand.
#[derive(Args, Debug)]
pub struct FrameArgs {
    #[command(flatten)]
    pub triple: TripleArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `measure` subcommand.
#[derive(Args, Debug)]
pub struct MeasureArgs {
    #[command(flatten)]
    pub triple: TripleArgs,

    /// The point to measure, as "x,y,z".
    #[arg(long, required = true, value_name = "X,Y,Z", value_parser = parse_point, allow_hyphen_values = true)]
    pub fourth: Vector,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to the TOML job file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the results. Printed to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Rebuild the reference frame for every coordinate instead of once per job.
    #[arg(long)]
    pub no_frame_reuse: bool,

    /// Abort on the first coordinate that cannot be built.
    #[arg(long)]
    pub fail_fast: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}
