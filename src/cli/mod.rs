//! CLI argument parsing for yaml2env.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The conversion itself lives in the `convert` module.

use crate::env_set::Order;
use clap::Parser;
use std::path::PathBuf;

/// Converts Spring configuration YAML files into environment variables.
///
/// The conversions of all files are combined and printed on standard output
/// in the format used by .env files, one NAME="VALUE" entry per line.
/// Later files override values from earlier ones.
#[derive(Parser, Debug)]
#[command(name = "yaml2env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sort config options lexicographically by variable name.
    #[arg(short, long)]
    pub sort: bool,

    /// Enable verbose logging (sets log level to DEBUG).
    #[arg(short, long)]
    pub verbose: bool,

    /// YAML files that should be converted.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Help, version and usage errors come back as `Err` so the caller picks
    /// the exit code.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }

    /// Output order selected by `--sort`.
    pub fn order(&self) -> Order {
        if self.sort {
            Order::Sorted
        } else {
            Order::Natural
        }
    }
}
