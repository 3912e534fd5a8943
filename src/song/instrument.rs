// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Instrument descriptors.
//!
//! An instrument's role and timbre class are declared fields, set once
//! when a band is configured. Generation code dispatches on these enums
//! only; it never inspects display names.

use serde::{Deserialize, Serialize};

/// Functional role of an instrument within the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Chords,
    Bass,
    Pad,
    Lead,
}

impl Role {
    /// Ordering priority for score assembly: chords first, leads last.
    pub fn priority(self) -> u8 {
        match self {
            Role::Chords => 0,
            Role::Bass => 1,
            Role::Pad => 2,
            Role::Lead => 3,
        }
    }
}

/// Timbre class biasing chord pattern selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timbre {
    Piano,
    Guitar,
    Organ,
    Other,
}

impl Timbre {
    /// Classify a display name into a timbre class.
    ///
    /// Used only when configuring a band; the result is stored on the
    /// instrument so generation never re-derives it.
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("piano") || lower.contains("rhodes") {
            Timbre::Piano
        } else if lower.contains("guitar") {
            Timbre::Guitar
        } else if lower.contains("organ") {
            Timbre::Organ
        } else {
            Timbre::Other
        }
    }
}

/// A single instrument in the band layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Display name (e.g. "Electric Bass (finger)")
    pub name: String,
    /// GM program number (0-127)
    pub program: u8,
    /// Output channel (0-15)
    pub channel: u8,
    /// Mix volume (0.0 - 1.0), informational
    pub volume: f32,
    /// Stereo pan (-1.0 - 1.0), informational
    pub pan: f32,
    /// Functional role
    pub role: Role,
    /// Timbre class
    pub timbre: Timbre,
}

impl Instrument {
    /// Create an instrument, classifying its timbre from the name
    pub fn new(name: &str, program: u8, channel: u8, role: Role) -> Self {
        Self {
            name: name.to_string(),
            program,
            channel,
            volume: 0.9,
            pan: 0.0,
            role,
            timbre: Timbre::classify(name),
        }
    }

    /// Set the mix volume
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Set the stereo pan
    pub fn with_pan(mut self, pan: f32) -> Self {
        self.pan = pan;
        self
    }
}
