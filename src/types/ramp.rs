//! Hue sample sets: one named lightness ramp per hue family.

use crate::error::{Result, SwatchError};

use super::HueSample;

/// Number of samples on every hue ramp.
pub const SAMPLE_COUNT: usize = 13;

/// An ordered lightness ramp for one hue family.
///
/// Entries keep the key they were defined under (e.g. `--gray-0-hsl`). The
/// hue name is read from the first key, so a set is only as valid as that key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HueSampleSet {
    entries: Vec<(String, HueSample)>,
}

impl HueSampleSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from keyed samples, in ramp order.
    pub fn from_entries(entries: Vec<(String, HueSample)>) -> Self {
        Self { entries }
    }

    /// Build a set for `name`, keying each sample as `--<name>-<index>-hsl`.
    pub fn from_samples(name: &str, samples: impl IntoIterator<Item = HueSample>) -> Self {
        let entries = samples
            .into_iter()
            .enumerate()
            .map(|(i, sample)| (format!("--{}-{}-hsl", name, i), sample))
            .collect();
        Self { entries }
    }

    /// Append a sample.
    pub fn push(&mut self, key: impl Into<String>, sample: HueSample) {
        self.entries.push((key.into(), sample));
    }

    /// Keyed samples in ramp order.
    pub fn entries(&self) -> &[(String, HueSample)] {
        &self.entries
    }

    /// Samples in ramp order.
    pub fn samples(&self) -> impl Iterator<Item = HueSample> + '_ {
        self.entries.iter().map(|(_, sample)| *sample)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The hue name, read from the first sample's key.
    pub fn name(&self) -> Result<&str> {
        let key = self
            .entries
            .first()
            .map(|(key, _)| key.as_str())
            .ok_or_else(|| SwatchError::RampLength {
                name: "(unnamed)".to_string(),
                len: 0,
                expected: SAMPLE_COUNT,
            })?;

        hue_name_from_key(key).ok_or_else(|| SwatchError::HueKey {
            key: key.to_string(),
        })
    }

    /// Get the sample at a ramp position.
    pub fn sample(&self, index: usize) -> Result<HueSample> {
        match self.entries.get(index) {
            Some((_, sample)) => Ok(*sample),
            None => Err(self.length_error()),
        }
    }

    /// Ensure the ramp has exactly [`SAMPLE_COUNT`] samples.
    pub fn check_len(&self) -> Result<()> {
        if self.entries.len() == SAMPLE_COUNT {
            Ok(())
        } else {
            Err(self.length_error())
        }
    }

    fn length_error(&self) -> SwatchError {
        SwatchError::RampLength {
            name: self.name().unwrap_or("(unnamed)").to_string(),
            len: self.entries.len(),
            expected: SAMPLE_COUNT,
        }
    }
}

/// Extract the hue name from a sample key.
///
/// Finds the first `--<lowercase letters>-` run anywhere in the key:
/// `--gray-0-hsl` gives `gray`, `gray-0` gives nothing.
pub fn hue_name_from_key(key: &str) -> Option<&str> {
    let bytes = key.as_bytes();

    for start in 0..bytes.len() {
        if !bytes[start..].starts_with(b"--") {
            continue;
        }

        let rest = &key[start + 2..];
        let name_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_lowercase())
            .count();

        if name_len > 0 && rest.as_bytes().get(name_len) == Some(&b'-') {
            return Some(&rest[..name_len]);
        }
    }

    None
}
