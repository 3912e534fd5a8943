// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pad templates, keyed by instrument name.

/// How a pad template event renders the reduced voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadMode {
    /// Full-length sustain
    Sustain,
    /// Half-bar hit
    Half,
    /// Late-starting swell, quieter attack
    Swell,
    /// Short staccato pulse
    Pulse,
}

/// One template event: (offset, duration) in quarters plus render mode.
#[derive(Debug, Clone, Copy)]
pub struct PadStep {
    pub offset: f64,
    pub duration: f64,
    pub mode: PadMode,
}

/// A bar template is a list of events.
pub type PadPattern = &'static [PadStep];

const fn step(offset: f64, duration: f64, mode: PadMode) -> PadStep {
    PadStep {
        offset,
        duration,
        mode,
    }
}

use PadMode::{Half, Pulse, Sustain, Swell};

/// String Ensemble 1: broad orchestral carpet.
pub static STRING_ENSEMBLE: &[PadPattern] = &[
    &[step(0.0, 4.0, Sustain)],
    &[step(0.0, 2.0, Half), step(2.0, 2.0, Half)],
    &[step(1.5, 2.5, Swell)],
    &[step(0.0, 0.5, Pulse), step(0.5, 3.5, Sustain)],
    &[step(0.0, 1.0, Pulse), step(1.0, 1.0, Pulse), step(2.0, 2.0, Sustain)],
];

/// Synth Strings 1: more swells.
pub static SYNTH_STRINGS: &[PadPattern] = &[
    &[step(0.0, 4.0, Sustain)],
    &[step(1.5, 1.0, Swell), step(2.5, 1.5, Sustain)],
    &[step(0.0, 2.0, Sustain), step(2.0, 1.0, Swell), step(3.0, 1.0, Sustain)],
    &[step(1.5, 0.5, Pulse), step(3.0, 1.0, Pulse)],
    &[
        step(0.0, 1.0, Swell),
        step(1.0, 1.0, Sustain),
        step(2.0, 1.0, Swell),
        step(3.0, 1.0, Sustain),
    ],
];

/// Fallback for other pad instruments.
pub static DEFAULT: &[PadPattern] = &[
    &[step(0.0, 4.0, Sustain)],
    &[step(0.0, 2.0, Half), step(2.0, 2.0, Half)],
    &[step(1.5, 2.5, Swell)],
    &[step(0.0, 0.5, Pulse), step(0.5, 3.5, Sustain)],
    &[step(0.0, 1.0, Sustain), step(1.0, 1.0, Pulse), step(2.0, 2.0, Sustain)],
];

/// Template pool for a pad instrument by display name
pub fn patterns_for_instrument(name: &str) -> &'static [PadPattern] {
    match name {
        "String Ensemble 1" => STRING_ENSEMBLE,
        "Synth Strings 1" => SYNTH_STRINGS,
        _ => DEFAULT,
    }
}
