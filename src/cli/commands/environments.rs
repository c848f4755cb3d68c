//! List built-in environment presets

use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::entities::Environment;

#[derive(clap::Args, Debug)]
pub struct EnvironmentsArgs {}

pub fn run(_args: EnvironmentsArgs) -> Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["NAME", "FACTOR"]);
    for env in Environment::presets() {
        builder.push_record([env.name.clone(), format!("{}", env.factor)]);
    }
    println!("{}", builder.build().with(Style::sharp()));
    Ok(())
}
