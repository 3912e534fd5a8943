// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord comping templates, keyed by timbre class.

use crate::song::Timbre;

/// How a chord template event renders the current voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordMode {
    /// All voicing pitches sound together for the full span
    Block,
    /// Pitches cycle upward at eighth-note substeps
    ArpUp,
    /// Pitches cycle downward at eighth-note substeps
    ArpDown,
    /// Only the top pitch, repeated staccato at eighth-note substeps
    TopPulse,
}

/// One template event: (offset, duration) in quarters plus render mode.
#[derive(Debug, Clone, Copy)]
pub struct ChordStep {
    pub offset: f64,
    pub duration: f64,
    pub mode: ChordMode,
}

/// A bar template is a list of events.
pub type ChordPattern = &'static [ChordStep];

const fn step(offset: f64, duration: f64, mode: ChordMode) -> ChordStep {
    ChordStep {
        offset,
        duration,
        mode,
    }
}

use ChordMode::{ArpDown, ArpUp, Block, TopPulse};

/// Piano: block chords, light syncopation, an occasional arpeggio.
pub static PIANO: &[ChordPattern] = &[
    &[step(0.0, 4.0, Block)],
    &[step(0.0, 2.0, Block), step(2.0, 2.0, Block)],
    &[step(0.0, 1.0, Block), step(1.5, 0.5, Block), step(2.0, 1.0, Block)],
    &[step(0.0, 2.0, ArpUp), step(2.0, 2.0, Block)],
    &[step(0.5, 3.5, TopPulse)],
];

/// Guitar: arpeggios and offbeat stabs.
pub static GUITAR: &[ChordPattern] = &[
    &[step(0.0, 4.0, ArpUp)],
    &[step(0.0, 2.0, ArpUp), step(2.5, 0.5, Block), step(3.5, 0.5, Block)],
    &[step(0.0, 1.0, Block), step(1.0, 3.0, ArpUp)],
    &[
        step(0.5, 0.5, Block),
        step(1.0, 0.5, Block),
        step(2.0, 0.5, Block),
        step(2.5, 0.5, Block),
        step(3.5, 0.5, Block),
    ],
    &[step(0.0, 4.0, ArpDown)],
    &[step(0.0, 4.0, TopPulse)],
];

/// Organ: mostly sustained chords.
pub static ORGAN: &[ChordPattern] = &[
    &[step(0.0, 4.0, Block)],
    &[step(0.0, 2.0, Block), step(2.0, 2.0, Block)],
    &[
        step(0.0, 1.0, Block),
        step(1.0, 1.0, Block),
        step(2.0, 1.0, Block),
        step(3.0, 1.0, Block),
    ],
    &[step(0.0, 3.0, Block), step(3.0, 1.0, ArpDown)],
    &[step(0.0, 4.0, TopPulse)],
];

/// Fallback for other chord instruments.
pub static DEFAULT: &[ChordPattern] = &[
    &[step(0.0, 4.0, Block)],
    &[step(0.0, 2.0, Block), step(2.0, 2.0, Block)],
    &[step(0.0, 1.0, Block), step(1.5, 0.5, Block), step(2.0, 1.0, Block)],
    &[step(0.0, 4.0, ArpUp)],
    &[step(0.0, 1.0, Block), step(1.0, 3.0, TopPulse)],
];

/// Template pool for a timbre class
pub fn patterns_for_timbre(timbre: Timbre) -> &'static [ChordPattern] {
    match timbre {
        Timbre::Piano => PIANO,
        Timbre::Guitar => GUITAR,
        Timbre::Organ => ORGAN,
        Timbre::Other => DEFAULT,
    }
}

/// Whether a template contains any arpeggiated event
pub fn is_arpeggio(pattern: ChordPattern) -> bool {
    pattern
        .iter()
        .any(|s| matches!(s.mode, ChordMode::ArpUp | ChordMode::ArpDown))
}
