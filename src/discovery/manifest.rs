//! Project manifest (swatch.yaml) parsing.
//!
//! The manifest defines where hue ramps come from and how tokens are emitted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::scale::MixMode;
use crate::shadow::{ShadowOutput, ShadowParams};

/// Project manifest loaded from swatch.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Hue files or directories to scan for `.hues.md` files.
    /// The built-in hues are used when empty.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// JSON output path (stdout when unset).
    pub output: Option<PathBuf>,

    /// How steps past the sampled ramp are emitted.
    pub mix: MixMode,

    /// Which shadow table to emit.
    pub shadows: ShadowOutput,

    /// Only emit these hue families (all when empty).
    pub only: Vec<String>,

    /// Light-mode shadow parameters.
    pub shadow_light: Option<ShadowParams>,

    /// Dark-mode shadow parameters.
    pub shadow_dark: Option<ShadowParams>,
}

impl Manifest {
    /// Load manifest from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check swatch.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Light-mode shadow parameters, falling back to the stock defaults.
    pub fn effective_shadow_light(&self) -> ShadowParams {
        self.shadow_light.clone().unwrap_or_else(ShadowParams::light)
    }

    /// Dark-mode shadow parameters, falling back to the stock defaults.
    pub fn effective_shadow_dark(&self) -> ShadowParams {
        self.shadow_dark.clone().unwrap_or_else(ShadowParams::dark)
    }

    /// Render a commented default manifest.
    pub fn template() -> String {
        let mut yaml = String::new();
        yaml.push_str("# Hue files or directories of .hues.md files (built-in hues when empty)\n");
        yaml.push_str("sources: []\n");
        yaml.push_str("# deferred: emit color-mix() expressions, resolved: mix in OKLCH now\n");
        yaml.push_str("mix: deferred\n");
        yaml.push_str("# parametrized, static, or none\n");
        yaml.push_str("shadows: parametrized\n");
        yaml
    }
}
