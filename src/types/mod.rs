//! Core domain types for swatch.
//!
//! - `HueSample` - a single HSL colour point
//! - `HueSampleSet` - a named 13-sample lightness ramp
//! - `TokenTable` - token name to value mapping

mod ramp;
mod sample;
mod token;

pub use ramp::{hue_name_from_key, HueSampleSet, SAMPLE_COUNT};
pub use sample::HueSample;
pub use token::{dark_name, TokenTable, DARK_SUFFIX};
