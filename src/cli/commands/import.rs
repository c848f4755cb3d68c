//! Validate a component CSV and report what would be ingested

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::{format_rate, truncate_str};
use crate::ingest::{self, KeywordSet};

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Component CSV file
    pub file: PathBuf,

    /// Emit the ingested component list as JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ImportArgs) -> Result<()> {
    let grid = ingest::read_grid(&args.file).map_err(|e| miette::miette!("{}", e))?;

    let ingestion =
        ingest::ingest(&grid, &KeywordSet::default()).map_err(|e| miette::miette!("{}", e))?;

    if args.json {
        let json = serde_json::to_string_pretty(&ingestion.components).into_diagnostic()?;
        println!("{}", json);
        return Ok(());
    }

    for skipped in &ingestion.skipped {
        eprintln!(
            "{} Row {}: skipped ({})",
            style("✗").red(),
            skipped.row + 1,
            skipped.reason_text()
        );
    }

    for cmp in &ingestion.components {
        println!(
            "{} {} x{} @ {}/h - {}",
            style("✓").green(),
            style(&cmp.kind).cyan(),
            cmp.quantity,
            format_rate(cmp.failure_rate),
            truncate_str(&cmp.description, 40)
        );
    }

    println!();
    println!(
        "{} component(s) valid, {} row(s) skipped (header at row {})",
        style(ingestion.valid_count()).cyan(),
        ingestion.skipped_count(),
        ingestion.header_row + 1
    );

    Ok(())
}
