// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord-quality vocabulary: quality names mapped to interval stacks.
//!
//! Intervals are semitones above the chord root. Entries are kept in
//! insertion order so fallback choices are deterministic.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Triad quality resolved from a roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// Vocabulary name of the plain triad
    pub fn triad_name(self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "min",
            ChordQuality::Diminished => "dim",
        }
    }

    /// Vocabulary name of the seventh-chord variant
    pub fn seventh_name(self) -> &'static str {
        match self {
            ChordQuality::Major => "maj7",
            ChordQuality::Minor => "min7",
            ChordQuality::Diminished => "dim7",
        }
    }
}

/// Lookup table from chord-quality name to interval stack.
#[derive(Debug, Clone)]
pub struct ChordVocabulary {
    // Ordered pairs, not a map: the first entry doubles as the terminal
    // fallback and must be stable across runs.
    chords: Vec<(String, Vec<i8>)>,
}

impl ChordVocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self { chords: Vec::new() }
    }

    /// Create a vocabulary with the standard qualities
    pub fn standard() -> Self {
        let mut vocab = Self::new();
        vocab.insert("maj", vec![0, 4, 7]);
        vocab.insert("min", vec![0, 3, 7]);
        vocab.insert("dim", vec![0, 3, 6]);
        vocab.insert("maj7", vec![0, 4, 7, 11]);
        vocab.insert("min7", vec![0, 3, 7, 10]);
        vocab.insert("7", vec![0, 4, 7, 10]);
        vocab.insert("sus2", vec![0, 2, 7]);
        vocab.insert("sus4", vec![0, 5, 7]);
        vocab
    }

    /// Add or replace a chord quality
    pub fn insert(&mut self, name: &str, intervals: Vec<i8>) {
        if let Some(entry) = self.chords.iter_mut().find(|(n, _)| n == name) {
            entry.1 = intervals;
        } else {
            self.chords.push((name.to_string(), intervals));
        }
    }

    /// Look up intervals for a quality name.
    ///
    /// Unknown names fall back to the first entry whose name is a
    /// substring match in either direction, then to the first entry
    /// overall. An empty vocabulary yields a bare root.
    pub fn intervals(&self, name: &str) -> &[i8] {
        if let Some((_, intervals)) = self.chords.iter().find(|(n, _)| n == name) {
            return intervals;
        }
        if let Some((found, intervals)) = self
            .chords
            .iter()
            .find(|(n, _)| n.contains(name) || name.contains(n.as_str()))
        {
            warn!(name, fallback = %found, "unknown chord quality, using substring match");
            return intervals;
        }
        if let Some((found, intervals)) = self.chords.first() {
            warn!(name, fallback = %found, "unknown chord quality, using first entry");
            return intervals;
        }
        warn!("chord vocabulary is empty, using bare root");
        &[0]
    }

    /// Triad intervals for a resolved quality
    pub fn triad(&self, quality: ChordQuality) -> &[i8] {
        self.intervals(quality.triad_name())
    }

    /// Seventh-chord intervals for a quality, if the vocabulary has them
    pub fn seventh(&self, quality: ChordQuality) -> Option<&[i8]> {
        let name = quality.seventh_name();
        self.chords
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, intervals)| intervals.as_slice())
    }
}

impl Default for ChordVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_triads() {
        let vocab = ChordVocabulary::standard();
        assert_eq!(vocab.triad(ChordQuality::Major), &[0, 4, 7]);
        assert_eq!(vocab.triad(ChordQuality::Minor), &[0, 3, 7]);
        assert_eq!(vocab.triad(ChordQuality::Diminished), &[0, 3, 6]);
    }

    #[test]
    fn test_seventh_lookup() {
        let vocab = ChordVocabulary::standard();
        assert_eq!(vocab.seventh(ChordQuality::Major), Some(&[0, 4, 7, 11][..]));
        assert_eq!(vocab.seventh(ChordQuality::Minor), Some(&[0, 3, 7, 10][..]));
        // No dim7 in the standard table.
        assert_eq!(vocab.seventh(ChordQuality::Diminished), None);
    }

    #[test]
    fn test_substring_fallback() {
        let vocab = ChordVocabulary::standard();
        // "maj9" is unknown but contains "maj".
        assert_eq!(vocab.intervals("maj9"), &[0, 4, 7]);
    }

    #[test]
    fn test_first_entry_fallback() {
        let vocab = ChordVocabulary::standard();
        assert_eq!(vocab.intervals("xyz"), &[0, 4, 7]);
    }

    #[test]
    fn test_empty_vocabulary_guard() {
        let vocab = ChordVocabulary::new();
        assert_eq!(vocab.intervals("maj"), &[0]);
    }
}
