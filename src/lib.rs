//! swatch - Design token generator
//!
//! Derives light and dark colour scales from sampled hue ramps and builds a
//! matching table of box-shadow tokens, emitted together as one JSON map.

pub mod builtin;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod output;
pub mod parser;
pub mod scale;
pub mod shadow;
pub mod types;

pub use builtin::BuiltinHues;
pub use discovery::{discover, DiscoveryResult, Manifest, ScanResult};
pub use error::{Result, SwatchError};
pub use generate::{generate, GenerateOptions};
pub use parser::{parse_hues, parse_hues_file};
pub use scale::{derive, mono_scales, references, select_primary, MixMode, Scale};
pub use shadow::{shadows, static_shadows, ShadowOutput, ShadowParams};
pub use types::{HueSample, HueSampleSet, TokenTable, SAMPLE_COUNT};
