//! List the component catalog with baseline failure rates

use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::format_rate;
use crate::entities::CATALOG;

#[derive(clap::Args, Debug)]
pub struct ComponentsArgs {}

pub fn run(_args: ComponentsArgs) -> Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["KIND", "FAILURE RATE (1/h)"]);
    for entry in CATALOG {
        builder.push_record([entry.kind.to_string(), format_rate(entry.failure_rate)]);
    }
    println!("{}", builder.build().with(Style::sharp()));
    Ok(())
}
