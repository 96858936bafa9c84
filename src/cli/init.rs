//! Init command implementation.
//!
//! Writes a commented default `swatch.yaml`.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_directory, Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};

/// Initialize a swatch project (generates swatch.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing swatch.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SwatchError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let found = scan_directory(&args.path, &Manifest::default()).files;

    let mut yaml = Manifest::template();
    if !found.is_empty() {
        yaml = yaml.replace("sources: []\n", "sources:\n  - \".\"\n");
    }

    fs::write(&manifest_path, &yaml).map_err(|e| SwatchError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(found.len(), "hue file", "hue files")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::discover;
    use tempfile::tempdir;

    fn init(path: &std::path::Path, force: bool) -> Result<()> {
        let args = InitArgs {
            path: path.to_path_buf(),
            force,
        };
        run(args, &Printer::new())
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        init(dir.path(), false).unwrap();

        let result = discover(dir.path()).unwrap();
        assert!(result.has_manifest);
        assert!(result.uses_builtins());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("swatch.yaml"), "mix: resolved").unwrap();

        assert!(init(dir.path(), false).is_err());
        let content = fs::read_to_string(dir.path().join("swatch.yaml")).unwrap();
        assert_eq!(content, "mix: resolved");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("swatch.yaml"), "mix: resolved").unwrap();

        init(dir.path(), true).unwrap();

        let content = fs::read_to_string(dir.path().join("swatch.yaml")).unwrap();
        assert!(content.contains("mix: deferred"));
    }

    #[test]
    fn test_init_lists_project_hues() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("palettes")).unwrap();
        fs::write(dir.path().join("palettes/brand.hues.md"), "--brand-0-hsl: 0 0% 0%\n").unwrap();

        init(dir.path(), false).unwrap();

        let result = discover(dir.path()).unwrap();
        assert_eq!(result.manifest.sources, vec!["."]);
        assert_eq!(result.scan.total(), 1);
    }
}
