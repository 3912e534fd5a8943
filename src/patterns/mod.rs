// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Static pattern libraries.
//!
//! Pure data: style-keyed drum step grids and per-instrument template
//! tables for chords, bass, pads and leads. Template offsets and
//! durations are in quarter-note units from the bar start.

pub mod bass;
pub mod chords;
pub mod drums;
pub mod leads;
pub mod pads;

pub use bass::{BassFunction, BassPattern, BassStep};
pub use chords::{ChordMode, ChordPattern, ChordStep};
pub use drums::{library_for_style, DrumPattern, STEP_RESOLUTION};
pub use leads::{LeadPattern, LeadStep};
pub use pads::{PadMode, PadPattern, PadStep};
