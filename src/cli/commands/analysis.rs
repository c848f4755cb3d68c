//! Saved analysis management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_rate, truncate_str};
use crate::cli::GlobalOpts;
use crate::core::AnalysisId;
use crate::store::AnalysisStore;

use super::open_store;

#[derive(Subcommand, Debug)]
pub enum AnalysisCommands {
    /// List saved analyses, most recent first
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one saved analysis in full
    Show {
        /// Analysis id (AN-...)
        id: String,
    },

    /// Delete a saved analysis by id
    Delete {
        /// Analysis id (AN-...)
        id: String,
    },
}

pub fn run(cmd: AnalysisCommands, global: &GlobalOpts) -> Result<()> {
    let mut store = open_store(global);

    match cmd {
        AnalysisCommands::List { json } => {
            let analyses = store.list().map_err(|e| miette::miette!("{}", e))?;

            if json {
                let out = serde_json::to_string_pretty(&analyses).into_diagnostic()?;
                println!("{}", out);
                return Ok(());
            }

            let mut builder = Builder::default();
            builder.push_record(["ID", "SAVED", "SYSTEM", "ENV", "RATE", "RELIABILITY", "MTBF"]);
            for analysis in &analyses {
                let mtbf = analysis
                    .result
                    .mtbf
                    .map_or_else(|| "unbounded".to_string(), |m| format!("{:.1}", m));
                builder.push_record([
                    analysis.id.to_string(),
                    analysis.saved_at_local(),
                    truncate_str(&analysis.system.name, 24),
                    truncate_str(&analysis.system.environment.name, 16),
                    format_rate(analysis.result.total_failure_rate),
                    format!("{:.6}", analysis.result.system_reliability),
                    mtbf,
                ]);
            }
            println!("{}", builder.build().with(Style::sharp()));
            println!();
            println!("{} analysis(es) found.", style(analyses.len()).cyan());
        }

        AnalysisCommands::Show { id } => {
            let id: AnalysisId = id.parse().map_err(|e| miette::miette!("{}", e))?;
            let analyses = store.list().map_err(|e| miette::miette!("{}", e))?;
            let analysis = analyses
                .iter()
                .find(|a| a.id == id)
                .ok_or_else(|| miette::miette!("no saved analysis with id {}", id))?;

            let out = serde_json::to_string_pretty(analysis).into_diagnostic()?;
            println!("{}", out);
        }

        AnalysisCommands::Delete { id } => {
            let id: AnalysisId = id.parse().map_err(|e| miette::miette!("{}", e))?;
            let removed = store.remove(&id).map_err(|e| miette::miette!("{}", e))?;
            if removed {
                println!("{} Deleted analysis {}", style("✓").green(), style(id).cyan());
            } else {
                return Err(miette::miette!("no saved analysis with id {}", id));
            }
        }
    }

    Ok(())
}
