//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Vehicle Finder - look up flats and vehicles from a parking sheet
#[derive(Parser, Debug)]
#[command(name = "vf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the data file (csv or xlsx)
    #[arg(short, long, global = true, env = "VF_DATA")]
    pub data: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a flat, vehicle number (full or last 4), or model
    Search(SearchArgs),

    /// List every flat and its vehicles
    Ls(LsArgs),

    /// Search as you type: one query per input line
    Interactive(InteractiveArgs),
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Flat, vehicle number, or model to look up
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: SearchOutput,

    /// Exit with status 2 when nothing matches
    #[arg(long)]
    pub fail_on_empty: bool,
}

/// Search output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutput {
    /// Human-readable text
    Text,
    /// JSON result list
    Json,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}

/// Arguments for the interactive command
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: SearchOutput,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
