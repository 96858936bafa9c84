use miette::Diagnostic;
use thiserror::Error;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed hue key: {key:?}")]
    #[diagnostic(
        code(swatch::hue_key),
        help("Sample keys must contain the hue name as --<name>-, e.g. --gray-0-hsl")
    )]
    HueKey { key: String },

    #[error("Hue ramp {name} has {len} samples, expected {expected}")]
    #[diagnostic(
        code(swatch::ramp_length),
        help("Every hue family needs a full lightness ramp")
    )]
    RampLength {
        name: String,
        len: usize,
        expected: usize,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(swatch::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(swatch::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
