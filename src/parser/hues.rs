//! Hue file parser.
//!
//! Parses `.hues.md` files into `HueSampleSet` instances. A file holds one or
//! more ramps separated by blank lines, one sample per line:
//!
//! ```text
//! # Grays
//! --gray-0-hsl: 210 17% 98%
//! --gray-1-hsl: #f1f3f5
//! ...
//!
//! --red-0-hsl: 0 100% 98%
//! ...
//! ```
//!
//! Markdown headings (`# ...`) and `//` comments are skipped and do not end
//! a ramp. A bare hex value without a key is an error.

use std::fs;
use std::path::Path;

use crate::error::{Result, SwatchError};
use crate::types::{HueSample, HueSampleSet};

/// Parse hue ramps from source text.
pub fn parse_hues(source: &str) -> Result<Vec<HueSampleSet>> {
    let mut sets = Vec::new();
    let mut current = HueSampleSet::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if !current.is_empty() {
                sets.push(std::mem::take(&mut current));
            }
            continue;
        }

        if is_comment(trimmed) {
            continue;
        }

        let (key, sample) = parse_sample_line(trimmed, line_no)?;
        current.push(key, sample);
    }

    if !current.is_empty() {
        sets.push(current);
    }

    if sets.is_empty() {
        return Err(SwatchError::Parse {
            message: "No hue ramps found".to_string(),
            help: Some("Add lines like `--gray-0-hsl: 210 17% 98%`".to_string()),
        });
    }

    Ok(sets)
}

/// Read and parse a hue file.
pub fn parse_hues_file(path: &Path) -> Result<Vec<HueSampleSet>> {
    let source = fs::read_to_string(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    parse_hues(&source).map_err(|e| match e {
        SwatchError::Parse { message, help } => SwatchError::Parse {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}

/// `//` comments and Markdown headings (`#` runs followed by a space).
fn is_comment(line: &str) -> bool {
    if line.starts_with("//") {
        return true;
    }
    let text = line.trim_start_matches('#');
    text.len() < line.len() && (text.is_empty() || text.starts_with(char::is_whitespace))
}

/// Parse a sample line: `<key>: <value>`
fn parse_sample_line(line: &str, line_no: usize) -> Result<(String, HueSample)> {
    let (key, value) = line.split_once(':').ok_or_else(|| SwatchError::Parse {
        message: format!("line {}: expected `<key>: <value>`, got {:?}", line_no, line),
        help: Some("Each sample line looks like `--gray-0-hsl: 210 17% 98%`".to_string()),
    })?;

    let key = key.trim();
    let value = value.trim();

    if key.is_empty() {
        return Err(SwatchError::Parse {
            message: format!("line {}: empty sample key", line_no),
            help: None,
        });
    }

    if value.is_empty() {
        return Err(SwatchError::Parse {
            message: format!("line {}: empty value for {}", line_no, key),
            help: None,
        });
    }

    let sample = value.parse::<HueSample>().map_err(|e| match e {
        SwatchError::Parse { message, help } => SwatchError::Parse {
            message: format!("line {}: {}", line_no, message),
            help,
        },
        other => other,
    })?;

    Ok((key.to_string(), sample))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_source(name: &str) -> String {
        (0..13)
            .map(|i| format!("--{}-{}-hsl: 0 50% {}%\n", name, i, 95 - i * 7))
            .collect()
    }

    #[test]
    fn test_parse_single_ramp() {
        let sets = parse_hues(&ramp_source("red")).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].name().unwrap(), "red");
        assert_eq!(sets[0].len(), 13);
        assert_eq!(sets[0].sample(12).unwrap(), HueSample::new(0.0, 50.0, 11.0));
    }

    #[test]
    fn test_parse_multiple_ramps() {
        let source = format!(
            "# Palette\n// stock ramps\n{}\n\n{}",
            ramp_source("gray"),
            ramp_source("blue")
        );
        let sets = parse_hues(&source).unwrap();
        let names: Vec<&str> = sets.iter().map(|s| s.name().unwrap()).collect();
        assert_eq!(names, vec!["gray", "blue"]);
    }

    #[test]
    fn test_comments_do_not_split_ramps() {
        let source = "--red-0-hsl: 0 100% 98%\n// middle\n--red-1-hsl: #ffe3e3\n";
        let sets = parse_hues(source).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 2);
        assert_eq!(sets[0].sample(1).unwrap().to_string(), "0 100% 94.5%");
    }

    #[test]
    fn test_headings_with_colons_are_skipped() {
        let source = format!("# Reds: warm family\n## Notes:\n#\n{}", ramp_source("red"));
        let sets = parse_hues(&source).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 13);
    }

    #[test]
    fn test_bare_hex_line_is_an_error() {
        let err = parse_hues("--red-0-hsl: 0 100% 98%\n#ff0000\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn test_keys_are_kept_verbatim() {
        let sets = parse_hues("gray-0: 0 0% 50%\n").unwrap();
        assert_eq!(sets[0].entries()[0].0, "gray-0");
        assert!(sets[0].name().is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_hues("").is_err());
        assert!(parse_hues("// only comments\n").is_err());
        assert!(parse_hues("--red-0-hsl 0 100% 98%\n").is_err());
        assert!(parse_hues("--red-0-hsl:\n").is_err());
        assert!(parse_hues(": 0 0% 0%\n").is_err());
        assert!(parse_hues("--red-0-hsl: bright red\n").is_err());
    }

    #[test]
    fn test_error_reports_line() {
        let err = parse_hues("--red-0-hsl: 0 100% 98%\n--red-1-hsl: nope\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }
}
