// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory vocabularies: scales, chord qualities, roman numerals,
//! and the percussion-class mapping.

pub mod chord;
pub mod drum_map;
pub mod roman;
pub mod scale;

pub use chord::{ChordQuality, ChordVocabulary};
pub use drum_map::{DrumClass, DrumMapping};
pub use roman::{parse_roman, HarmonyError};
pub use scale::ScaleVocabulary;
