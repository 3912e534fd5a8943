// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale vocabulary: key names mapped to semitone offsets.
//!
//! Offsets are absolute pitch classes relative to C, ordered by scale
//! degree, so `base_register + offsets[degree]` yields a concrete MIDI
//! pitch. The vocabulary is a plain lookup table; unknown keys fall back
//! to C major rather than failing.

use std::collections::HashMap;

use tracing::warn;

/// Fallback key used when a requested key is not in the vocabulary.
pub const FALLBACK_KEY: &str = "C major";

/// Lookup table from key name to the seven scale-degree offsets.
#[derive(Debug, Clone)]
pub struct ScaleVocabulary {
    scales: HashMap<String, Vec<i8>>,
}

impl ScaleVocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self {
            scales: HashMap::new(),
        }
    }

    /// Create a vocabulary with the standard major/minor keys
    pub fn standard() -> Self {
        let mut vocab = Self::new();
        vocab.insert("C major", vec![0, 2, 4, 5, 7, 9, 11]);
        vocab.insert("D major", vec![2, 4, 6, 7, 9, 11, 1]);
        vocab.insert("F major", vec![5, 7, 9, 10, 0, 2, 4]);
        vocab.insert("G major", vec![7, 9, 11, 0, 2, 4, 6]);
        vocab.insert("A major", vec![9, 11, 1, 2, 4, 6, 8]);
        vocab.insert("D minor", vec![2, 4, 5, 7, 9, 10, 0]);
        vocab.insert("E minor", vec![4, 6, 7, 9, 11, 0, 2]);
        vocab.insert("A minor", vec![9, 11, 0, 2, 4, 5, 7]);
        vocab
    }

    /// Add or replace a scale
    pub fn insert(&mut self, key: &str, offsets: Vec<i8>) {
        self.scales.insert(key.to_string(), offsets);
    }

    /// Look up the scale offsets for a key.
    ///
    /// Unknown keys fall back to C major; if that is also missing, any
    /// vocabulary entry is used. An empty vocabulary yields a one-degree
    /// scale so callers never see an empty slice.
    pub fn offsets(&self, key: &str) -> &[i8] {
        if let Some(offsets) = self.scales.get(key) {
            return offsets;
        }
        warn!(key, "unknown key, falling back to {}", FALLBACK_KEY);
        if let Some(offsets) = self.scales.get(FALLBACK_KEY) {
            return offsets;
        }
        if let Some(offsets) = self.scales.values().next() {
            return offsets;
        }
        warn!("scale vocabulary is empty, using single-degree scale");
        &[0]
    }

    /// Offset for a scale degree, wrapping out-of-range indices
    pub fn degree_offset(&self, key: &str, degree: usize) -> i8 {
        let offsets = self.offsets(key);
        offsets[degree % offsets.len()]
    }

    /// Whether a key name denotes a minor key
    pub fn is_minor(key: &str) -> bool {
        key.to_lowercase().contains("minor")
    }

    /// Names of all registered keys
    pub fn available(&self) -> Vec<String> {
        self.scales.keys().cloned().collect()
    }
}

impl Default for ScaleVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_keys() {
        let vocab = ScaleVocabulary::standard();
        assert_eq!(vocab.offsets("C major"), &[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(vocab.offsets("A minor"), &[9, 11, 0, 2, 4, 5, 7]);
        assert_eq!(vocab.available().len(), 8);
    }

    #[test]
    fn test_unknown_key_falls_back_to_c_major() {
        let vocab = ScaleVocabulary::standard();
        assert_eq!(vocab.offsets("H hyperlydian"), vocab.offsets("C major"));
    }

    #[test]
    fn test_empty_vocabulary_guard() {
        let vocab = ScaleVocabulary::new();
        assert_eq!(vocab.offsets("C major"), &[0]);
        assert_eq!(vocab.degree_offset("C major", 5), 0);
    }

    #[test]
    fn test_degree_wraps() {
        let vocab = ScaleVocabulary::standard();
        // Degree 7 wraps back to the tonic.
        assert_eq!(vocab.degree_offset("C major", 7), 0);
        assert_eq!(vocab.degree_offset("C major", 9), 4);
    }

    #[test]
    fn test_minor_detection() {
        assert!(ScaleVocabulary::is_minor("A minor"));
        assert!(ScaleVocabulary::is_minor("E Minor"));
        assert!(!ScaleVocabulary::is_minor("C major"));
    }
}
