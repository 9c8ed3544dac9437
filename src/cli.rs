use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pkgroulette - print the name of a random package you have not installed yet
///
/// Nothing is ever installed; the install command is only logged.
#[derive(Parser, Debug)]
#[command(name = "pkgroulette")]
#[command(about = "Pick a random not-yet-installed package and print its name")]
#[command(version)]
pub struct Cli {
    /// Package manager to query (apt, pacman, dnf). Auto-detected if omitted.
    #[arg(short, long, global = true, value_parser = ["apt", "pacman", "dnf"])]
    pub backend: Option<String>,

    /// Seed for a reproducible pick
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Never pick this package (repeatable)
    #[arg(short = 'x', long = "exclude", global = true)]
    pub exclude: Vec<String>,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every candidate package, one per line
    Candidates,
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(value_name = "CONFIG")]
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
