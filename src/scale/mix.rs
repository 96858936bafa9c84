//! Colour mixing for steps that extend past the sampled ramp.
//!
//! Mixes are either emitted as deferred `color-mix()` expressions, so a
//! consumer can re-theme `--base-black`/`--base-white` at presentation time,
//! or resolved here in OKLCH to a final HSL triple.

use clap::ValueEnum;
use palette::{IntoColor, Oklch, Srgb};
use serde::{Deserialize, Serialize};

use crate::types::HueSample;

/// Chroma below which an OKLCH hue is treated as powerless.
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Decimal places kept on resolved mixes so adjacent steps stay distinct.
const RESOLVED_PLACES: i32 = 1;

/// How extrapolated steps are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MixMode {
    /// Emit `color-mix(in oklch, ...)` expressions.
    #[default]
    Deferred,
    /// Mix at generation time and emit the resulting HSL triple.
    Resolved,
}

/// The reference colour a step is mixed toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Black,
    White,
}

impl Reference {
    /// The token holding this reference colour.
    pub fn token(self) -> &'static str {
        match self {
            Reference::Black => "--base-black",
            Reference::White => "--base-white",
        }
    }

    /// The default value of the reference colour.
    pub fn sample(self) -> HueSample {
        match self {
            Reference::Black => HueSample::BLACK,
            Reference::White => HueSample::WHITE,
        }
    }
}

/// Mix `base` toward `reference` by `percent`, rendered per `mode`.
pub fn mix(base: HueSample, reference: Reference, percent: u32, mode: MixMode) -> String {
    match mode {
        MixMode::Deferred => format!(
            "color-mix(in oklch, hsl({}), var({}) {}%)",
            base,
            reference.token(),
            percent
        ),
        MixMode::Resolved => {
            mix_oklch(base, reference.sample(), f64::from(percent) / 100.0)
                .rounded(RESOLVED_PLACES)
                .to_string()
        }
    }
}

/// Interpolate two colours in OKLCH (0.0 = `a`, 1.0 = `b`).
///
/// Follows `color-mix()`: hues take the shorter arc, and the hue of an
/// achromatic colour is ignored in favour of the other colour's.
pub fn mix_oklch(a: HueSample, b: HueSample, factor: f64) -> HueSample {
    let t = factor.clamp(0.0, 1.0);
    let a: Oklch<f64> = a.to_srgb().into_color();
    let b: Oklch<f64> = b.to_srgb().into_color();

    let a_hue = a.hue.into_positive_degrees();
    let b_hue = b.hue.into_positive_degrees();

    let hue = match (a.chroma < ACHROMATIC_CHROMA, b.chroma < ACHROMATIC_CHROMA) {
        (false, true) => a_hue,
        (true, false) => b_hue,
        _ => {
            let mut delta = b_hue - a_hue;
            if delta > 180.0 {
                delta -= 360.0;
            } else if delta < -180.0 {
                delta += 360.0;
            }
            a_hue + delta * t
        }
    };

    let mixed = Oklch::new(
        a.l + (b.l - a.l) * t,
        a.chroma + (b.chroma - a.chroma) * t,
        hue,
    );

    let rgb: Srgb<f64> = mixed.into_color();
    HueSample::from_srgb(rgb)
}
