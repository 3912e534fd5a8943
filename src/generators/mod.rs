// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generative engines producing timestamped event streams.
//!
//! Randomness is never ambient: every track derives its own [`StdRng`]
//! from the song seed via [`stream_rng`], so a song is reproducible
//! bit-for-bit and tracks never share a random sequence.

pub mod drums;
pub mod harmony;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::music::DrumClass;

/// One percussion hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrumEvent {
    /// Onset in seconds from song start
    pub time_sec: f64,
    /// Percussion class; mapped to a concrete note at assembly time
    pub class: DrumClass,
    /// Velocity (1-127)
    pub velocity: u8,
}

/// One pitched note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// Onset in seconds from song start
    pub start_time: f64,
    /// Offset in seconds, strictly after the onset
    pub end_time: f64,
    /// MIDI note number
    pub pitch: u8,
    /// Velocity (1-127)
    pub velocity: u8,
    /// Channel of the instrument playing this note
    pub channel: u8,
}

/// Per-channel stream stride; keeps instrument streams disjoint.
const CHANNEL_STRIDE: u64 = 104_729;

/// Identity of an independent random stream within one song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngStream {
    /// Progression choice, shared by all harmony tracks
    Progression,
    /// The drum track
    Drums,
    /// A fill pass starting at the given bar
    Fill { start_bar: usize },
    /// Chord track of the instrument on this channel
    Chords { channel: u8 },
    /// Bass track of the instrument on this channel
    Bass { channel: u8 },
    /// Pad track of the instrument on this channel
    Pad { channel: u8 },
    /// Lead track of the instrument on this channel
    Lead { channel: u8 },
}

/// Derive the seed for a stream from the song seed.
pub fn stream_seed(song_seed: u64, stream: RngStream) -> u64 {
    match stream {
        RngStream::Progression => song_seed.wrapping_add(100),
        RngStream::Drums => song_seed.wrapping_add(7_919),
        RngStream::Fill { start_bar } => song_seed
            .wrapping_add(15_485_863)
            .wrapping_add(start_bar as u64),
        RngStream::Chords { channel } => {
            song_seed.wrapping_add(channel as u64 * CHANNEL_STRIDE + 1)
        }
        RngStream::Bass { channel } => song_seed.wrapping_add(channel as u64 * CHANNEL_STRIDE + 2),
        RngStream::Pad { channel } => song_seed.wrapping_add(channel as u64 * CHANNEL_STRIDE + 3),
        RngStream::Lead { channel } => song_seed.wrapping_add(channel as u64 * CHANNEL_STRIDE + 4),
    }
}

/// Seed a fresh RNG for a stream.
pub fn stream_rng(song_seed: u64, stream: RngStream) -> StdRng {
    StdRng::seed_from_u64(stream_seed(song_seed, stream))
}
