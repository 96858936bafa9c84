use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => swatch::cli::build::run(args, &printer)?,
        Commands::Hues(args) => swatch::cli::hues::run(args, &printer)?,
        Commands::Shadows(args) => swatch::cli::shadows::run(args, &printer)?,
        Commands::Init(args) => swatch::cli::init::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
