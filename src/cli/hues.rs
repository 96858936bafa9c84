//! Hues command implementation.
//!
//! Lists hue families with their selected primary sample.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::{Result, SwatchError};
use crate::output::{plural, Printer};
use crate::scale::select_primary;
use crate::types::HueSampleSet;

/// List hue families and their primary colours
#[derive(Args, Debug, Default)]
pub struct HuesArgs {
    /// Project directory containing swatch.yaml
    #[arg(long, short = 'C', default_value = ".")]
    pub project: PathBuf,
}

pub fn run(args: HuesArgs, printer: &Printer) -> Result<()> {
    let discovery = discover(&args.project)?;
    let sets = discovery.load_sets()?;

    for line in describe(&sets)? {
        println!("{}", line);
    }

    let source = if discovery.uses_builtins() {
        "built-in"
    } else {
        "project"
    };
    printer.info(
        "Found",
        &format!("{} ({})", plural(sets.len(), "hue family", "hue families"), source),
    );

    Ok(())
}

/// One line per family: name, primary index and primary triple.
fn describe(sets: &[HueSampleSet]) -> Result<Vec<String>> {
    sets.iter()
        .map(|set| -> Result<String> {
            let name = set.name()?;
            let index = select_primary(set).ok_or_else(|| SwatchError::Validation {
                message: format!("Hue family '{}' has no samples", name),
                help: None,
            })?;
            Ok(format!("{}\t{}\t{}", name, index, set.sample(index)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::BuiltinHues;

    #[test]
    fn test_describe_builtins() {
        let lines = describe(&BuiltinHues::all()).unwrap();
        assert_eq!(lines.len(), 19);
        assert!(lines[0].starts_with("gray\t"));
        assert!(lines.iter().all(|l| l.split('\t').count() == 3));
    }

    #[test]
    fn test_describe_rejects_malformed_key() {
        let mut set = HueSampleSet::new();
        set.push("gray0", crate::types::HueSample::WHITE);
        assert!(describe(&[set]).is_err());
    }
}
