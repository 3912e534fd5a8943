// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Percussion classes and their General MIDI note mapping.
//!
//! Drum events carry a [`DrumClass`] rather than a raw note number; the
//! mapping to concrete notes happens once, during score assembly. The
//! mapping table may omit a class, in which case the assembler drops
//! events of that class.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Percussion voice classes used by the drum engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DrumClass {
    Kick,
    Snare,
    Sidestick,
    HhClosed,
    HhOpen,
    TomLow,
    TomMid,
    TomHigh,
    Crash,
    Ride,
}

impl DrumClass {
    /// All classes, in canonical order
    pub const ALL: [DrumClass; 10] = [
        DrumClass::Kick,
        DrumClass::Snare,
        DrumClass::Sidestick,
        DrumClass::HhClosed,
        DrumClass::HhOpen,
        DrumClass::TomLow,
        DrumClass::TomMid,
        DrumClass::TomHigh,
        DrumClass::Crash,
        DrumClass::Ride,
    ];

    /// Canonical upper-case name
    pub fn as_str(self) -> &'static str {
        match self {
            DrumClass::Kick => "KICK",
            DrumClass::Snare => "SNARE",
            DrumClass::Sidestick => "SIDESTICK",
            DrumClass::HhClosed => "HH_CLOSED",
            DrumClass::HhOpen => "HH_OPEN",
            DrumClass::TomLow => "TOM_LOW",
            DrumClass::TomMid => "TOM_MID",
            DrumClass::TomHigh => "TOM_HIGH",
            DrumClass::Crash => "CRASH",
            DrumClass::Ride => "RIDE",
        }
    }
}

/// Bidirectional mapping between drum classes and GM percussion notes.
#[derive(Debug, Clone)]
pub struct DrumMapping {
    class_to_notes: HashMap<DrumClass, Vec<u8>>,
    note_to_class: HashMap<u8, DrumClass>,
}

impl DrumMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            class_to_notes: HashMap::new(),
            note_to_class: HashMap::new(),
        }
    }

    /// Create the standard GM mapping
    pub fn standard() -> Self {
        let mut mapping = Self::new();
        mapping.insert(DrumClass::Kick, &[36]);
        mapping.insert(DrumClass::Snare, &[38, 40]);
        mapping.insert(DrumClass::Sidestick, &[37]);
        // Pedal hat (44) and the Roland variant (22) fold into closed.
        mapping.insert(DrumClass::HhClosed, &[42, 44, 22]);
        mapping.insert(DrumClass::HhOpen, &[46, 26]);
        mapping.insert(DrumClass::TomLow, &[43, 45]);
        mapping.insert(DrumClass::TomMid, &[47, 48]);
        mapping.insert(DrumClass::TomHigh, &[50]);
        mapping.insert(DrumClass::Crash, &[49]);
        mapping.insert(DrumClass::Ride, &[51, 53]);
        mapping
    }

    /// Register notes for a class; the first note is the primary one
    pub fn insert(&mut self, class: DrumClass, notes: &[u8]) {
        self.class_to_notes.insert(class, notes.to_vec());
        for &note in notes {
            self.note_to_class.insert(note, class);
        }
    }

    /// Representative note for a class, if the class is mapped
    pub fn primary_note(&self, class: DrumClass) -> Option<u8> {
        self.class_to_notes
            .get(&class)
            .and_then(|notes| notes.first().copied())
    }

    /// Class for a MIDI note, if the note is mapped
    pub fn class_for_note(&self, note: u8) -> Option<DrumClass> {
        self.note_to_class.get(&note).copied()
    }

    /// Whether a MIDI note is part of the mapping
    pub fn is_supported_note(&self, note: u8) -> bool {
        self.note_to_class.contains_key(&note)
    }

    /// All mapped classes, in canonical order
    pub fn supported_classes(&self) -> Vec<DrumClass> {
        DrumClass::ALL
            .iter()
            .copied()
            .filter(|c| self.class_to_notes.contains_key(c))
            .collect()
    }
}

impl Default for DrumMapping {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_notes() {
        let mapping = DrumMapping::standard();
        assert_eq!(mapping.primary_note(DrumClass::Kick), Some(36));
        assert_eq!(mapping.primary_note(DrumClass::Snare), Some(38));
        assert_eq!(mapping.primary_note(DrumClass::HhClosed), Some(42));
        assert_eq!(mapping.primary_note(DrumClass::Crash), Some(49));
    }

    #[test]
    fn test_note_to_class() {
        let mapping = DrumMapping::standard();
        assert_eq!(mapping.class_for_note(40), Some(DrumClass::Snare));
        assert_eq!(mapping.class_for_note(22), Some(DrumClass::HhClosed));
        assert_eq!(mapping.class_for_note(53), Some(DrumClass::Ride));
        assert_eq!(mapping.class_for_note(60), None);
    }

    #[test]
    fn test_unmapped_class() {
        let mut mapping = DrumMapping::new();
        mapping.insert(DrumClass::Kick, &[36]);
        assert_eq!(mapping.primary_note(DrumClass::Ride), None);
        assert_eq!(mapping.supported_classes(), vec![DrumClass::Kick]);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(DrumClass::HhClosed.as_str(), "HH_CLOSED");
        assert_eq!(DrumClass::TomMid.as_str(), "TOM_MID");
        assert_eq!(DrumClass::ALL.len(), 10);
    }
}
