//! Token table: the flat name-to-value mapping handed to consumers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// Suffix marking a token's dark-mode value.
pub const DARK_SUFFIX: &str = "-@media:dark";

/// A mapping from token name to value string.
///
/// Keys are unique and kept sorted so emitted output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTable {
    tokens: BTreeMap<String, String>,
}

impl TokenTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(name.into(), value.into());
    }

    /// Insert a token under its light name and its dark-mode name.
    pub fn insert_both(&mut self, name: &str, light: impl Into<String>, dark: impl Into<String>) {
        self.tokens.insert(name.to_string(), light.into());
        self.tokens.insert(dark_name(name), dark.into());
    }

    /// Get a token value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(|s| s.as_str())
    }

    /// Check if the table has a token.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Remove a token, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.tokens.remove(name)
    }

    /// Iterate tokens in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get all token names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Merge another table into this one.
    ///
    /// Fails without modifying `self` if any key is already present.
    pub fn merge(&mut self, other: TokenTable) -> Result<()> {
        if let Some(dup) = other.names().find(|name| self.contains(name)) {
            return Err(SwatchError::Validation {
                message: format!("Duplicate token: {}", dup),
                help: Some("Each hue family and token must be defined once".to_string()),
            });
        }

        self.tokens.extend(other.tokens);
        Ok(())
    }

    /// Serialize as a pretty-printed JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SwatchError::Build {
            message: format!("Failed to serialize tokens: {}", e),
            help: None,
        })
    }
}

impl FromIterator<(String, String)> for TokenTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenTable {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// The dark-mode name for a token.
pub fn dark_name(name: &str) -> String {
    format!("{}{}", name, DARK_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = TokenTable::new();
        table.insert("--a", "1");
        assert_eq!(table.get("--a"), Some("1"));
        assert_eq!(table.get("--b"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_insert_both() {
        let mut table = TokenTable::new();
        table.insert_both("--color-black-0", "hsl(0 0% 0%)", "hsl(0 0% 100%)");
        assert_eq!(table.get("--color-black-0"), Some("hsl(0 0% 0%)"));
        assert_eq!(
            table.get("--color-black-0-@media:dark"),
            Some("hsl(0 0% 100%)")
        );
    }

    #[test]
    fn test_merge_disjoint() {
        let mut a = TokenTable::new();
        a.insert("--a", "1");
        let mut b = TokenTable::new();
        b.insert("--b", "2");

        a.merge(b).unwrap();
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_merge_duplicate_is_rejected() {
        let mut a = TokenTable::new();
        a.insert("--a", "1");
        let mut b = TokenTable::new();
        b.insert("--a", "2");
        b.insert("--c", "3");

        assert!(a.merge(b).is_err());
        assert_eq!(a.get("--a"), Some("1"));
        assert!(!a.contains("--c"));
    }

    #[test]
    fn test_to_json_sorted() {
        let mut table = TokenTable::new();
        table.insert("--b", "2");
        table.insert("--a", "1");
        let json = table.to_json().unwrap();
        assert!(json.find("--a").unwrap() < json.find("--b").unwrap());

        let back: TokenTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
