//! File system scanner for discovering hue files.
//!
//! Recursively scans directories to find `.hues.md` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Double extension for hue ramp files.
pub const HUES_EXTENSION: &str = ".hues.md";

/// Result of scanning sources for hue files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered hue files, in discovery order.
    pub files: Vec<PathBuf>,
    /// Sources that did not exist on disk.
    pub missing: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
        self.missing.extend(other.missing);
    }
}

/// Check whether a path names a hue file.
pub fn is_hues_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(HUES_EXTENSION))
}

/// Scan a directory for hue files.
///
/// Entries are sorted by file name so the output is stable across platforms.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        result.missing.push(root.to_path_buf());
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if manifest.is_excluded(path) {
            continue;
        }

        if is_hues_file(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result
}

/// Scan multiple source paths, relative to `base_path` unless absolute.
///
/// A source naming a file is taken as-is, whatever its extension.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        if source_path.is_file() {
            result.files.push(source_path);
        } else {
            result.merge(scan_directory(&source_path, manifest));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_hues_file() {
        assert!(is_hues_file(Path::new("stock.hues.md")));
        assert!(is_hues_file(Path::new("a/b/brand.hues.md")));
        assert!(!is_hues_file(Path::new("notes.md")));
        assert!(!is_hues_file(Path::new("hues.md.bak")));
    }

    #[test]
    fn test_scan_directory_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.hues.md"), "").unwrap();
        fs::write(dir.path().join("a.hues.md"), "").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.hues.md"), "").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default());
        let names: Vec<String> = result
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.hues.md", "b.hues.md", "c.hues.md"]);
    }

    #[test]
    fn test_scan_missing_directory() {
        let dir = tempdir().unwrap();
        let result = scan_directory(&dir.path().join("nope"), &Manifest::default());
        assert!(result.is_empty());
        assert_eq!(result.missing.len(), 1);
    }

    #[test]
    fn test_scan_sources_mixes_files_and_dirs() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("palettes")).unwrap();
        fs::write(dir.path().join("palettes/red.hues.md"), "").unwrap();
        fs::write(dir.path().join("brand.txt"), "").unwrap();

        let sources = vec!["palettes".to_string(), "brand.txt".to_string()];
        let result = scan_sources(&sources, dir.path(), &Manifest::default());

        assert_eq!(result.total(), 2);
        assert!(result.missing.is_empty());
    }
}
