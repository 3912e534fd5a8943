// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Band layout: the set of instruments playing in a song.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::instrument::{Instrument, Role};

/// GM percussion channel.
pub const DRUM_CHANNEL: u8 = 9;

/// The instruments of one song plus the drum channel assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfiguration {
    /// Channel reserved for drums
    pub drum_channel: u8,
    /// Pitched instruments
    pub instruments: Vec<Instrument>,
}

impl BandConfiguration {
    /// Create a band from a list of instruments
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self {
            drum_channel: DRUM_CHANNEL,
            instruments,
        }
    }

    /// All instruments with a given role
    pub fn instruments_with_role(&self, role: Role) -> Vec<&Instrument> {
        self.instruments
            .iter()
            .filter(|inst| inst.role == role)
            .collect()
    }

    /// The standard General MIDI patch pool for band selection
    pub fn standard_pool() -> Vec<Instrument> {
        vec![
            // Keys
            Instrument::new("Acoustic Grand Piano", 0, 0, Role::Chords).with_pan(0.0),
            Instrument::new("Bright Acoustic Piano", 1, 0, Role::Chords).with_pan(0.1),
            Instrument::new("Electric Piano 1 (Rhodes)", 4, 1, Role::Chords).with_pan(-0.1),
            Instrument::new("Electric Piano 2 (FM)", 5, 1, Role::Chords).with_pan(0.0),
            Instrument::new("Drawbar Organ", 16, 2, Role::Chords)
                .with_volume(0.85)
                .with_pan(-0.2),
            // Guitars
            Instrument::new("Acoustic Guitar (steel)", 25, 3, Role::Chords)
                .with_volume(0.85)
                .with_pan(-0.3),
            Instrument::new("Electric Guitar (jazz)", 26, 3, Role::Chords)
                .with_volume(0.85)
                .with_pan(0.3),
            Instrument::new("Electric Guitar (clean)", 27, 4, Role::Chords)
                .with_volume(0.85)
                .with_pan(0.2),
            Instrument::new("Electric Guitar (muted)", 28, 4, Role::Chords)
                .with_volume(0.8)
                .with_pan(-0.2),
            Instrument::new("Overdriven Guitar", 29, 5, Role::Lead).with_pan(0.0),
            // Basses
            Instrument::new("Electric Bass (finger)", 33, 6, Role::Bass).with_pan(-0.1),
            Instrument::new("Electric Bass (pick)", 34, 6, Role::Bass).with_pan(0.1),
            Instrument::new("Synth Bass 1", 38, 7, Role::Bass),
            Instrument::new("Synth Bass 2", 39, 7, Role::Bass),
            // Pads
            Instrument::new("String Ensemble 1", 48, 8, Role::Pad)
                .with_volume(0.8)
                .with_pan(-0.1),
            Instrument::new("Synth Strings 1", 50, 8, Role::Pad)
                .with_volume(0.8)
                .with_pan(0.1),
            // Leads (channel 9 is reserved for drums)
            Instrument::new("Lead 1 (square)", 80, 10, Role::Lead)
                .with_volume(0.85)
                .with_pan(-0.2),
            Instrument::new("Lead 2 (sawtooth)", 81, 10, Role::Lead)
                .with_volume(0.85)
                .with_pan(0.2),
            Instrument::new("Trumpet", 56, 11, Role::Lead)
                .with_volume(0.85)
                .with_pan(0.1),
            Instrument::new("Alto Sax", 65, 11, Role::Lead)
                .with_volume(0.85)
                .with_pan(-0.1),
        ]
    }

    /// Pick a random band from a patch pool.
    ///
    /// The band always contains at least one instrument per role; the
    /// remaining slots are filled with extra chords/bass/pad patches.
    /// Returns `None` if the pool is missing a role entirely.
    pub fn choose_random_band<R: Rng>(
        rng: &mut R,
        pool: &[Instrument],
        min_instruments: usize,
        max_instruments: usize,
    ) -> Option<Self> {
        let min_instruments = min_instruments.max(4);
        let max_instruments = max_instruments.max(min_instruments).min(pool.len());
        if max_instruments < 4 {
            return None;
        }

        let mut chosen = Vec::new();
        for role in [Role::Chords, Role::Bass, Role::Pad, Role::Lead] {
            let candidates: Vec<&Instrument> =
                pool.iter().filter(|inst| inst.role == role).collect();
            chosen.push((*candidates.choose(rng)?).clone());
        }

        let band_size = rng.gen_range(min_instruments..=max_instruments);
        let mut extras: Vec<&Instrument> = pool
            .iter()
            .filter(|inst| inst.role != Role::Lead && !chosen.contains(*inst))
            .collect();
        extras.shuffle(rng);
        for extra in extras.into_iter().take(band_size.saturating_sub(4)) {
            chosen.push(extra.clone());
        }

        Some(Self::new(chosen))
    }
}
