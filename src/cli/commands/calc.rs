//! Compute system reliability from a component CSV

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::format_rate;
use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::engine;
use crate::entities::{Environment, SavedAnalysis, SystemConfig};
use crate::ingest::{self, KeywordSet};
use crate::store::AnalysisStore;

use super::open_store;

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Component CSV file
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Environment preset name (see `relkit environments`)
    #[arg(long, short = 'e')]
    pub environment: Option<String>,

    /// Explicit environment factor, overriding any preset
    #[arg(long)]
    pub factor: Option<f64>,

    /// Mission time in hours
    #[arg(long, short = 't')]
    pub mission_time: Option<f64>,

    /// System name
    #[arg(long, short = 'n', default_value = "unnamed system")]
    pub name: String,

    /// Print the sampled reliability curve
    #[arg(long)]
    pub curve: bool,

    /// Persist the analysis to the store
    #[arg(long)]
    pub save: bool,
}

/// Pick the environment from flags and config: an explicit factor wins,
/// then a named preset, then the configured or built-in default.
fn resolve_environment(args: &CalcArgs, config: &Config) -> Result<Environment> {
    if let Some(factor) = args.factor {
        let name = args.environment.clone().unwrap_or_else(|| "custom".to_string());
        return Ok(Environment::new(name, factor));
    }

    let name = args
        .environment
        .clone()
        .or_else(|| config.default_environment.clone())
        .unwrap_or_else(|| "ground fixed".to_string());

    Environment::preset(&name).ok_or_else(|| {
        miette::miette!(
            "unknown environment preset '{}'; run `relkit environments` to list presets",
            name
        )
    })
}

pub fn run(args: CalcArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();

    let environment = resolve_environment(&args, &config)?;
    let mission_time = args
        .mission_time
        .or(config.default_mission_time)
        .unwrap_or(1000.0);

    let grid = ingest::read_grid(&args.input).map_err(|e| miette::miette!("{}", e))?;
    let ingestion =
        ingest::ingest(&grid, &KeywordSet::default()).map_err(|e| miette::miette!("{}", e))?;

    let mut system = SystemConfig::new(&args.name, mission_time, environment);
    system.replace_components(ingestion.components.clone());

    let result = engine::compute(&system.components, &system.environment, system.mission_time)
        .map_err(|e| miette::miette!("{}", e))?;

    if !global.quiet {
        println!("System:             {}", style(&system.name).cyan());
        println!(
            "Environment:        {} (factor {})",
            system.environment.name, system.environment.factor
        );
        println!("Mission time:       {} h", system.mission_time);
        println!(
            "Components:         {} ({} row(s) skipped)",
            ingestion.valid_count(),
            ingestion.skipped_count()
        );
        println!();
    }

    println!(
        "Total failure rate: {} /h",
        style(format_rate(result.total_failure_rate)).cyan()
    );
    println!(
        "Reliability:        {}",
        style(format!("{:.6}", result.system_reliability)).cyan()
    );
    match result.mtbf {
        Some(mtbf) => println!("MTBF:               {} h", style(format!("{:.1}", mtbf)).cyan()),
        None => println!("MTBF:               {}", style("unbounded").cyan()),
    }

    if args.curve {
        println!();
        println!("{:>8}  {:>12}", style("TIME").bold(), style("RELIABILITY").bold());
        for point in &result.curve {
            println!("{:>8}  {:>12.6}", point.time, point.reliability);
        }
    }

    if args.save {
        let snapshot = SavedAnalysis::snapshot(&system, &result, config.author());
        let id = snapshot.id;
        let mut store = open_store(global);
        store
            .append(snapshot)
            .map_err(|e| miette::miette!("{}", e))?;
        println!();
        println!("{} Saved analysis {}", style("✓").green(), style(id).cyan());
    }

    Ok(())
}
