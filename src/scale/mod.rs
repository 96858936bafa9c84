//! Colour scale derivation.
//!
//! Each hue family's 13-sample ramp becomes a primary colour plus ten shade
//! and ten tint steps, emitted for light and dark presentation modes:
//!
//! | token            | light mode       | dark mode        |
//! |------------------|------------------|------------------|
//! | `--H-hsl`        | primary          | primary          |
//! | `--H-0-hsl`      | primary          | primary          |
//! | `--H-{1..10}-hsl`  | shade (background) | tint (background)  |
//! | `--H--{1..10}-hsl` | tint (foreground)  | shade (foreground) |
//!
//! Shades 1-4 and tints 1-8 are ramp samples taken as-is; the remaining steps
//! extend past the ramp by mixing its last anchor toward black or white.

mod mix;
mod mono;

use crate::error::Result;
use crate::types::{HueSample, HueSampleSet, TokenTable};

pub use mix::{mix, mix_oklch, MixMode, Reference};
pub use mono::{mono_scales, references};

/// Ramp positions used for shades 1-4, darkest samples last.
pub const DARK_ANCHOR_INDICES: [usize; 4] = [9, 10, 11, 12];

/// Ramp positions used for tints 1-8, in step order.
pub const LIGHT_ANCHOR_INDICES: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];

/// Number of shade and of tint steps per hue.
pub const STEPS: usize = 10;

/// Mix percentage added per step past the last anchor.
pub const MIX_STEP: u32 = 5;

/// Upper bound on any extrapolation mix.
pub const MIX_CAP: u32 = 95;

/// Mix percentage for a step `extra_steps` past the last anchor.
pub fn mix_percent(extra_steps: usize) -> u32 {
    (extra_steps as u32).saturating_mul(MIX_STEP).min(MIX_CAP)
}

/// Pick the index of the most vivid sample.
///
/// Only a strictly higher score replaces the current pick, so ties go to
/// the lowest index. Returns `None` for an empty set.
pub fn select_primary(set: &HueSampleSet) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, sample) in set.samples().enumerate() {
        let score = sample.vividness();
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}

/// A hue family's derived scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    /// Hue family name
    pub name: String,

    /// Ramp position of the primary colour
    pub primary_index: usize,

    /// The primary colour
    pub primary: HueSample,

    /// Shade steps 1-10 (darker)
    pub shades: Vec<String>,

    /// Tint steps 1-10 (lighter)
    pub tints: Vec<String>,
}

impl Scale {
    /// Derive the scale for one hue ramp.
    ///
    /// Fails if the hue name cannot be read from the first key or the ramp
    /// does not have exactly 13 samples.
    pub fn derive(set: &HueSampleSet, mode: MixMode) -> Result<Self> {
        let name = set.name()?.to_string();
        set.check_len()?;

        let primary_index = select_primary(set).unwrap_or(0);
        let primary = set.sample(primary_index)?;

        let shades = extend_steps(set, &DARK_ANCHOR_INDICES, Reference::Black, mode)?;
        let tints = extend_steps(set, &LIGHT_ANCHOR_INDICES, Reference::White, mode)?;

        Ok(Self {
            name,
            primary_index,
            primary,
            shades,
            tints,
        })
    }

    /// Emit the scale's tokens for both presentation modes.
    pub fn tokens(&self) -> TokenTable {
        let mut table = TokenTable::new();
        let name = &self.name;
        let primary = self.primary.to_string();

        table.insert_both(&format!("--{}-0-hsl", name), primary.clone(), primary.clone());
        table.insert_both(&format!("--{}-hsl", name), primary.clone(), primary);

        for (i, (shade, tint)) in self.shades.iter().zip(&self.tints).enumerate() {
            let step = i + 1;
            table.insert_both(&format!("--{}-{}-hsl", name, step), shade, tint);
            table.insert_both(&format!("--{}--{}-hsl", name, step), tint, shade);
        }

        table
    }
}

/// Take `anchors` from the ramp, then extend to [`STEPS`] by mixing the last
/// anchor toward `reference`.
fn extend_steps(
    set: &HueSampleSet,
    anchors: &[usize],
    reference: Reference,
    mode: MixMode,
) -> Result<Vec<String>> {
    let mut steps = anchors
        .iter()
        .map(|&index| set.sample(index).map(|s| s.to_string()))
        .collect::<Result<Vec<_>>>()?;

    let last = match anchors.last() {
        Some(&index) => set.sample(index)?,
        None => return Ok(steps),
    };

    for extra in 1..=STEPS.saturating_sub(anchors.len()) {
        steps.push(mix(last, reference, mix_percent(extra), mode));
    }

    Ok(steps)
}

/// Derive one hue ramp straight to its token table.
pub fn derive(set: &HueSampleSet, mode: MixMode) -> Result<TokenTable> {
    Ok(Scale::derive(set, mode)?.tokens())
}
