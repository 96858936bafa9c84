//! Shadow token tables.
//!
//! Shadows reference two parameters, `--shadow-color` and
//! `--shadow-strength`, so a consumer can re-tint them per presentation mode.
//! The static table substitutes the light-mode defaults for consumers that
//! cannot resolve custom properties.

mod recipes;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::TokenTable;

pub use recipes::{
    InnerShadow, ShadowLayer, DROP_SHADOWS, HIGHLIGHT_DARK, HIGHLIGHT_LIGHT, INNER_SHADOWS,
};

/// Parameter token for the shadow colour (an HSL triple).
pub const SHADOW_COLOR: &str = "--shadow-color";

/// Parameter token for the base shadow alpha.
pub const SHADOW_STRENGTH: &str = "--shadow-strength";

/// Token for the inner shadow highlight layers.
pub const INNER_SHADOW_HIGHLIGHT: &str = "--inner-shadow-highlight";

/// Values for the two shadow parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowParams {
    pub color: String,
    pub strength: String,
}

impl ShadowParams {
    pub fn new(color: impl Into<String>, strength: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            strength: strength.into(),
        }
    }

    /// Light-mode defaults.
    pub fn light() -> Self {
        Self::new("220 3% 15%", "1%")
    }

    /// Dark-mode defaults.
    pub fn dark() -> Self {
        Self::new("220 40% 2%", "25%")
    }

    /// Read the light-mode parameters defined in a shadow table.
    pub fn from_table(table: &TokenTable) -> Option<Self> {
        Some(Self::new(table.get(SHADOW_COLOR)?, table.get(SHADOW_STRENGTH)?))
    }
}

/// Which shadow table a build emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShadowOutput {
    /// Shadows referencing `--shadow-color` and `--shadow-strength`.
    #[default]
    Parametrized,
    /// Shadows with the light-mode parameters substituted.
    Static,
    /// No shadow tokens.
    None,
}

/// `0` stays unitless, everything else is in pixels.
fn length(v: i32) -> String {
    if v == 0 {
        "0".to_string()
    } else {
        format!("{}px", v)
    }
}

/// Render one shadow layer with parameter references.
pub fn render_layer(layer: &ShadowLayer) -> String {
    let prefix = if layer.inset { "inset " } else { "" };
    format!(
        "{}{} {} {} {} hsl(var({}) / calc(var({}) + {}%))",
        prefix,
        length(layer.x),
        length(layer.y),
        length(layer.blur),
        length(layer.spread),
        SHADOW_COLOR,
        SHADOW_STRENGTH,
        layer.strength
    )
}

/// Render a list of layers as one `box-shadow` value.
pub fn render_layers(layers: &[ShadowLayer]) -> String {
    layers
        .iter()
        .map(render_layer)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the parametrized shadow table.
///
/// Includes the parameter definitions for both modes, the inner shadow
/// highlight, `--shadow-1..10` and `--inner-shadow-0..10`.
pub fn shadows(light: &ShadowParams, dark: &ShadowParams) -> TokenTable {
    let mut table = TokenTable::new();

    table.insert_both(SHADOW_COLOR, light.color.as_str(), dark.color.as_str());
    table.insert_both(SHADOW_STRENGTH, light.strength.as_str(), dark.strength.as_str());
    table.insert_both(INNER_SHADOW_HIGHLIGHT, HIGHLIGHT_LIGHT, HIGHLIGHT_DARK);

    for (i, layers) in DROP_SHADOWS.iter().enumerate() {
        table.insert(format!("--shadow-{}", i + 1), render_layers(layers));
    }

    for (i, inner) in INNER_SHADOWS.iter().enumerate() {
        let mut value = render_layer(&inner.layer);
        if inner.highlight {
            value.push_str(&format!(", var({})", INNER_SHADOW_HIGHLIGHT));
        }
        table.insert(format!("--inner-shadow-{}", i), value);
    }

    table
}

/// Substitute every parameter reference in a shadow value.
pub fn resolve(value: &str, params: &ShadowParams) -> String {
    value
        .replace(&format!("var({})", SHADOW_COLOR), &params.color)
        .replace(&format!("var({})", SHADOW_STRENGTH), &params.strength)
}

/// Build the static table from a parametrized one.
///
/// References are replaced with the table's own light-mode parameter values
/// (the stock light defaults if the table lacks them), and the two light
/// parameter definitions are dropped.
pub fn static_shadows(table: &TokenTable) -> TokenTable {
    let params = ShadowParams::from_table(table).unwrap_or_else(ShadowParams::light);

    table
        .iter()
        .filter(|(name, _)| *name != SHADOW_COLOR && *name != SHADOW_STRENGTH)
        .map(|(name, value)| (name.to_string(), resolve(value, &params)))
        .collect()
}
