//! Build command implementation.
//!
//! Generates the full token table and writes it as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::discover;
use crate::error::{Result, SwatchError};
use crate::generate::{generate, GenerateOptions};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_hues_file;
use crate::scale::MixMode;
use crate::shadow::ShadowOutput;
use crate::types::{HueSampleSet, TokenTable};

/// Generate design tokens as JSON
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Hue files to use instead of the manifest sources
    pub files: Vec<PathBuf>,

    /// Project directory containing swatch.yaml
    #[arg(long, short = 'C', default_value = ".")]
    pub project: PathBuf,

    /// Output file (stdout when neither this nor the manifest sets one)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// How steps past the sampled ramp are emitted
    #[arg(long, value_enum)]
    pub mix: Option<MixMode>,

    /// Which shadow table to emit
    #[arg(long, value_enum)]
    pub shadows: Option<ShadowOutput>,

    /// Only emit these hue families
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let discovery = discover(&args.project)?;

    let sets = if args.files.is_empty() {
        discovery.load_sets()?
    } else {
        load_files(&args.files)?
    };

    let mut options = discovery.options();
    apply_overrides(&mut options, &args);

    let families = if options.only.is_empty() {
        sets.len()
    } else {
        options.only.len()
    };
    printer.status(
        "Generating",
        &format!(
            "{} ({} mix)",
            plural(families, "hue family", "hue families"),
            mix_label(options.mix)
        ),
    );

    let table = generate(&sets, &options)?;

    match args.output.or_else(|| discovery.output_path()) {
        Some(path) => {
            write_table(&table, &path)?;
            printer.success(
                "Wrote",
                &format!(
                    "{} ({})",
                    display_path(&path),
                    plural(table.len(), "token", "tokens")
                ),
            );
        }
        None => println!("{}", table.to_json()?),
    }

    Ok(())
}

/// Command-line flags win over manifest values.
fn apply_overrides(options: &mut GenerateOptions, args: &BuildArgs) {
    if let Some(mix) = args.mix {
        options.mix = mix;
    }
    if let Some(shadows) = args.shadows {
        options.shadows = shadows;
    }
    if !args.only.is_empty() {
        options.only = args.only.clone();
    }
}

fn mix_label(mode: MixMode) -> &'static str {
    match mode {
        MixMode::Deferred => "deferred",
        MixMode::Resolved => "resolved",
    }
}

fn load_files(files: &[PathBuf]) -> Result<Vec<HueSampleSet>> {
    let mut sets = Vec::new();
    for file in files {
        sets.extend(parse_hues_file(file)?);
    }
    Ok(sets)
}

fn write_table(table: &TokenTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SwatchError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut json = table.to_json()?;
    json.push('\n');

    fs::write(path, json).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write tokens: {}", e),
    })
}
