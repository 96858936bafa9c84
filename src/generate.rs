//! Full token table generation.
//!
//! Combines the mix reference colours, one derived scale per hue family, the
//! fixed black/white scales and a shadow table into a single token map.

use std::collections::HashSet;

use crate::error::{Result, SwatchError};
use crate::scale::{self, mono_scales, references, MixMode};
use crate::shadow::{shadows, static_shadows, ShadowOutput, ShadowParams};
use crate::types::{HueSampleSet, TokenTable};

/// Options controlling what `generate` emits.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub mix: MixMode,
    pub shadows: ShadowOutput,
    /// Hue families to emit; every family when empty.
    pub only: Vec<String>,
    pub shadow_light: ShadowParams,
    pub shadow_dark: ShadowParams,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            mix: MixMode::default(),
            shadows: ShadowOutput::default(),
            only: Vec::new(),
            shadow_light: ShadowParams::light(),
            shadow_dark: ShadowParams::dark(),
        }
    }
}

/// Build the shadow table for the requested output.
pub fn shadow_table(options: &GenerateOptions) -> TokenTable {
    match options.shadows {
        ShadowOutput::Parametrized => shadows(&options.shadow_light, &options.shadow_dark),
        ShadowOutput::Static => static_shadows(&shadows(&options.shadow_light, &options.shadow_dark)),
        ShadowOutput::None => TokenTable::new(),
    }
}

/// Generate the complete token table for a list of hue families.
///
/// Fails without a partial result if two families share a name, a family
/// is malformed, or `only` names a family that isn't present.
pub fn generate(sets: &[HueSampleSet], options: &GenerateOptions) -> Result<TokenTable> {
    let mut seen = HashSet::new();
    for set in sets {
        let name = set.name()?;
        if !seen.insert(name) {
            return Err(SwatchError::Validation {
                message: format!("Hue family '{}' is defined more than once", name),
                help: Some("Rename one of the ramps or remove the duplicate".to_string()),
            });
        }
    }

    if let Some(unknown) = options.only.iter().find(|n| !seen.contains(n.as_str())) {
        return Err(SwatchError::Validation {
            message: format!("Unknown hue family '{}'", unknown),
            help: Some("Run `swatch hues` to list the available families".to_string()),
        });
    }

    let mut table = references();

    for set in sets {
        let name = set.name()?;
        if !options.only.is_empty() && !options.only.iter().any(|n| n == name) {
            continue;
        }
        table.merge(scale::derive(set, options.mix)?)?;
    }

    table.merge(mono_scales())?;
    table.merge(shadow_table(options))?;

    Ok(table)
}
