//! Hue discovery and manifest loading for swatch projects.
//!
//! A project is a directory with an optional `swatch.yaml`. Without one, or
//! when the manifest lists no sources, the built-in hues are used.
//!
//! # Example
//!
//! ```ignore
//! use swatch::discovery::discover;
//!
//! let result = discover("./my-project")?;
//! let sets = result.load_sets()?;
//! println!("Loaded {} hue families", sets.len());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::builtin::BuiltinHues;
use crate::error::{Result, SwatchError};
use crate::generate::GenerateOptions;
use crate::parser::parse_hues_file;
use crate::types::HueSampleSet;

pub use manifest::Manifest;
pub use scanner::{is_hues_file, scan_directory, scan_sources, ScanResult, HUES_EXTENSION};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "swatch.yaml";

/// Result of discovering hue sources in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no swatch.yaml found).
    pub manifest: Manifest,

    /// Whether a swatch.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered hue files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Whether the built-in hues stand in for project sources.
    pub fn uses_builtins(&self) -> bool {
        self.manifest.sources.is_empty()
    }

    /// Load every hue set, in discovery order.
    pub fn load_sets(&self) -> Result<Vec<HueSampleSet>> {
        if self.uses_builtins() {
            return Ok(BuiltinHues::all());
        }

        if let Some(missing) = self.scan.missing.first() {
            return Err(SwatchError::Validation {
                message: format!("Source not found: {}", missing.display()),
                help: Some(format!("Check the sources listed in {}", MANIFEST_FILENAME)),
            });
        }

        if self.scan.is_empty() {
            return Err(SwatchError::Validation {
                message: "No hue files found in sources".to_string(),
                help: Some(format!("Hue files end in {}", HUES_EXTENSION)),
            });
        }

        let mut sets = Vec::new();
        for path in &self.scan.files {
            sets.extend(parse_hues_file(path)?);
        }
        Ok(sets)
    }

    /// Generation options described by the manifest.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            mix: self.manifest.mix,
            shadows: self.manifest.shadows,
            only: self.manifest.only.clone(),
            shadow_light: self.manifest.effective_shadow_light(),
            shadow_dark: self.manifest.effective_shadow_dark(),
        }
    }

    /// Manifest output path, resolved against the project root.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.manifest.output.as_ref().map(|p| self.root.join(p))
    }
}

/// Discover hue sources in a project directory.
///
/// Looks for a `swatch.yaml` manifest in the root directory and scans the
/// sources it lists.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}
