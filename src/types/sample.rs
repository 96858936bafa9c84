//! Hue sample type and parsing.

use std::fmt;
use std::str::FromStr;

use palette::{encoding, Hsl, IntoColor, Srgb};

use crate::error::{Result, SwatchError};

/// A single HSL colour point on a hue ramp.
///
/// Hue is in degrees, saturation and lightness are percentages. Values are
/// kept and displayed exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HueSample {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HueSample {
    /// Create a new sample from HSL components.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::new(0.0, 0.0, 100.0);

    /// Parse an HSL triple such as `210 17% 98%` or `hsl(210 17% 98%)`.
    ///
    /// The `%` signs on saturation and lightness are optional.
    pub fn from_triple(s: &str) -> Result<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        let parts: Vec<&str> = inner.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(SwatchError::Parse {
                message: format!("Invalid HSL triple: {}", s),
                help: Some("Use the form `210 17% 98%`".to_string()),
            });
        }

        let h = parse_component(parts[0], s)?;
        let sat = parse_component(parts[1].trim_end_matches('%'), s)?;
        let l = parse_component(parts[2].trim_end_matches('%'), s)?;

        Self::new(h, sat, l).validated(s)
    }

    /// Parse a hex colour string (`#RGB` or `#RRGGBB`) and convert it to HSL,
    /// rounded to one decimal place.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let len = if hex.is_ascii() { hex.len() } else { 0 };
        let (r, g, b) = match len {
            3 => {
                // #RGB -> #RRGGBB
                let digits = hex
                    .chars()
                    .map(|c| parse_hex_digit(c).map(|d| d << 4 | d))
                    .collect::<Result<Vec<u8>>>()?;
                (digits[0], digits[1], digits[2])
            }
            6 => (
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            ),
            _ => {
                return Err(SwatchError::Parse {
                    message: format!("Invalid hex colour: {}", s),
                    help: Some("Use #RGB or #RRGGBB format".to_string()),
                })
            }
        };

        let rgb = Srgb::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        );
        Ok(Self::from_srgb(rgb).rounded(1))
    }

    /// Convert an sRGB colour to a sample.
    pub fn from_srgb(rgb: Srgb<f64>) -> Self {
        let hsl: Hsl<encoding::Srgb, f64> = rgb.into_color();
        Self::new(
            hsl.hue.into_positive_degrees(),
            (hsl.saturation * 100.0).clamp(0.0, 100.0),
            (hsl.lightness * 100.0).clamp(0.0, 100.0),
        )
    }

    /// Convert the sample to sRGB.
    pub fn to_srgb(self) -> Srgb<f64> {
        let hsl: Hsl<encoding::Srgb, f64> = Hsl::new(self.h, self.s / 100.0, self.l / 100.0);
        hsl.into_color()
    }

    /// Score used to pick a hue's primary colour.
    ///
    /// Rewards high saturation and lightness close to the midpoint.
    pub fn vividness(self) -> f64 {
        self.s + (50.0 - (self.l - 50.0).abs())
    }

    /// Round every component to `places` decimals, wrapping a hue of 360.
    pub fn rounded(self, places: i32) -> Self {
        let scale = 10f64.powi(places);
        let round = |v: f64| (v * scale).round() / scale;
        let h = round(self.h);
        Self::new(if h >= 360.0 { h - 360.0 } else { h }, round(self.s), round(self.l))
    }

    fn validated(self, source: &str) -> Result<Self> {
        let in_range = (0.0..360.0).contains(&self.h)
            && (0.0..=100.0).contains(&self.s)
            && (0.0..=100.0).contains(&self.l);

        if in_range {
            Ok(self)
        } else {
            Err(SwatchError::Parse {
                message: format!("HSL value out of range: {}", source),
                help: Some(
                    "Hue must be in [0, 360), saturation and lightness in [0, 100]".to_string(),
                ),
            })
        }
    }
}

impl FromStr for HueSample {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_triple(s)
        }
    }
}

impl fmt::Display for HueSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}% {}%",
            unsigned(self.h),
            unsigned(self.s),
            unsigned(self.l)
        )
    }
}

/// Drop the sign of negative zero.
fn unsigned(v: f64) -> f64 {
    v + 0.0
}

fn parse_component(part: &str, source: &str) -> Result<f64> {
    part.parse::<f64>().map_err(|_| SwatchError::Parse {
        message: format!("Invalid number {:?} in HSL triple: {}", part, source),
        help: None,
    })
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| SwatchError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SwatchError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
