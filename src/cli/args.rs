//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    analysis::AnalysisCommands, calc::CalcArgs, components::ComponentsArgs,
    environments::EnvironmentsArgs, import::ImportArgs,
};

#[derive(Parser)]
#[command(name = "relkit")]
#[command(author, version, about = "Reliability prediction toolkit")]
#[command(
    long_about = "Estimates system reliability under the constant-failure-rate model and bulk-loads component lists from loosely-formatted CSV sources."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Saved-analysis store file (default: config, then platform data dir)
    #[arg(long, global = true, env = "RELKIT_STORE")]
    pub store: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a component CSV and report what would be ingested
    Import(ImportArgs),

    /// Compute system reliability from a component CSV
    Calc(CalcArgs),

    /// Saved analysis management
    #[command(subcommand)]
    Analysis(AnalysisCommands),

    /// List built-in environment presets
    Environments(EnvironmentsArgs),

    /// List the component catalog with baseline failure rates
    Components(ComponentsArgs),
}
