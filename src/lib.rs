// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Deterministic procedural song generation.
//!
//! This crate generates complete multi-track songs from a small set of
//! high-level parameters: a style-keyed drum pattern engine with mutation
//! and humanization, a roman-numeral harmony engine with voice-leading for
//! chords, bass, pads and leads, and a score assembler that merges the
//! resulting event streams into channel-assigned tracks.
//!
//! Everything is reproducible: each track derives its own random stream
//! from the song seed, so the same `SongSpecification` always produces the
//! same events, and tracks never share a random sequence.

pub mod generators;
pub mod music;
pub mod patterns;
pub mod score;
pub mod song;

pub use generators::drums::DrumPatternGenerator;
pub use generators::harmony::HarmonyGenerator;
pub use generators::{DrumEvent, NoteEvent};
pub use music::roman::HarmonyError;
pub use score::{Score, ScoreAssembler};
pub use song::{BandConfiguration, Instrument, SongSpecification};
