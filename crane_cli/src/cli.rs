//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Crane family selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    /// Mobile, tower, crawler and overhead cranes
    Jib,
    /// Gantry cranes
    Gantry,
}

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "crane_cli")]
#[command(version)]
#[command(about = "Crane specification checks: validation, load chart, stability, ground bearing")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// How to build the specification under test
#[derive(Args, Debug, Clone)]
pub struct SpecArgs {
    /// Crane family
    #[arg(long, value_enum, default_value_t = FamilyArg::Jib)]
    pub family: FamilyArg,

    /// Start from a catalogue preset instead of the defaults
    #[arg(long, short = 'p')]
    pub preset: Option<String>,

    /// TOML file overriding the family's rules or formula constants
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Field assignment, applied in order (e.g. basic.capacity=60)
    #[arg(long = "set", short = 's', value_name = "SECTION.FIELD=VALUE")]
    pub assignments: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the preset catalogue of a family
    Presets {
        #[arg(long, value_enum, default_value_t = FamilyArg::Jib)]
        family: FamilyArg,
    },

    /// Validate a specification and print its derived metrics
    Check {
        #[command(flatten)]
        spec: SpecArgs,

        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Write an export report (refused while range violations exist)
    Export {
        #[command(flatten)]
        spec: SpecArgs,

        /// Output path for the JSON report
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}
