//! Shadows command implementation.
//!
//! Prints the shadow table on its own.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::Result;
use crate::generate::shadow_table;
use crate::output::{plural, Printer};
use crate::shadow::ShadowOutput;

/// Print the shadow token table as JSON
#[derive(Args, Debug, Default)]
pub struct ShadowsArgs {
    /// Substitute the light-mode parameters into every shadow
    #[arg(long = "static")]
    pub static_values: bool,

    /// Project directory containing swatch.yaml
    #[arg(long, short = 'C', default_value = ".")]
    pub project: PathBuf,
}

pub fn run(args: ShadowsArgs, printer: &Printer) -> Result<()> {
    let discovery = discover(&args.project)?;

    let mut options = discovery.options();
    options.shadows = if args.static_values {
        ShadowOutput::Static
    } else {
        ShadowOutput::Parametrized
    };

    let table = shadow_table(&options);
    println!("{}", table.to_json()?);

    printer.info("Printed", &plural(table.len(), "shadow token", "shadow tokens"));
    Ok(())
}
