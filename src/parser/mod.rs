//! Parsers for swatch definition files.
//!
//! # Usage
//!
//! ```ignore
//! use swatch::parser::parse_hues_file;
//!
//! let sets = parse_hues_file(Path::new("palette/stock.hues.md"))?;
//! for set in &sets {
//!     println!("Found: {}", set.name()?);
//! }
//! ```

pub mod hues;

pub use hues::{parse_hues, parse_hues_file};
