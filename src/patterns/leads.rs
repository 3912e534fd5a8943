// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Lead motif templates, keyed by instrument name.
//!
//! Motif steps are diatonic scale steps relative to the current bar's
//! chord degree: 0 plays the degree itself, 2 a third above, negative
//! values step below.

/// One motif event: (offset, duration) in quarters plus relative step.
#[derive(Debug, Clone, Copy)]
pub struct LeadStep {
    pub offset: f64,
    pub duration: f64,
    pub scale_step: i32,
}

/// A motif is a list of events.
pub type LeadPattern = &'static [LeadStep];

const fn step(offset: f64, duration: f64, scale_step: i32) -> LeadStep {
    LeadStep {
        offset,
        duration,
        scale_step,
    }
}

/// Lead 1 (square): simple game-style motifs.
pub static SQUARE: &[LeadPattern] = &[
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 2), step(1.0, 0.5, 4), step(1.5, 0.5, 2)],
    &[step(1.0, 0.5, 0), step(1.5, 0.5, 1), step(2.0, 0.5, 2), step(2.5, 0.5, 0)],
    &[step(0.0, 0.5, 0), step(0.5, 0.5, -1), step(1.0, 0.5, -2), step(1.5, 0.5, 0)],
    &[step(0.0, 1.0, 0), step(1.0, 0.5, 2), step(1.5, 0.5, 4)],
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 3), step(1.0, 0.5, 0), step(1.5, 0.5, 3)],
];

/// Lead 2 (sawtooth): more aggressive lines.
pub static SAWTOOTH: &[LeadPattern] = &[
    &[
        step(0.0, 0.5, 0),
        step(0.5, 0.5, 2),
        step(1.0, 0.5, 3),
        step(1.5, 0.5, 5),
        step(2.0, 0.5, 4),
        step(2.5, 0.5, 2),
        step(3.0, 0.5, 0),
        step(3.5, 0.5, -1),
    ],
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 2), step(1.0, 0.5, 4), step(1.5, 0.5, 7)],
    &[
        step(0.0, 0.25, 0),
        step(0.25, 0.25, 1),
        step(0.5, 0.25, 0),
        step(0.75, 0.25, -1),
        step(1.0, 0.5, 0),
    ],
    &[step(0.5, 0.5, 0), step(1.0, 0.5, 2), step(1.5, 0.5, 4), step(2.5, 0.5, 2)],
    &[step(0.0, 1.0, 0), step(1.0, 0.5, 2), step(1.5, 0.5, 0)],
];

/// Trumpet: more melodic.
pub static TRUMPET: &[LeadPattern] = &[
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 2), step(1.0, 0.5, 4), step(1.5, 0.5, 5)],
    &[step(0.0, 1.0, 0), step(1.0, 0.5, 2), step(1.5, 0.5, 4)],
    &[step(0.0, 0.5, 4), step(0.5, 0.5, 2), step(1.0, 0.5, 0), step(1.5, 0.5, -2)],
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 2), step(3.0, 0.5, 4), step(3.5, 0.5, 2)],
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 2), step(1.0, 1.0, 4)],
];

/// Alto Sax: smoother phrases.
pub static ALTO_SAX: &[LeadPattern] = &[
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 1), step(1.0, 0.5, 3), step(1.5, 0.5, 5)],
    &[step(1.0, 0.5, 0), step(1.5, 0.5, 2), step(2.0, 0.5, 3), step(2.5, 0.5, 2)],
    &[step(0.0, 0.5, 3), step(0.5, 0.5, 2), step(1.0, 0.5, 0), step(1.5, 0.5, -1)],
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 2), step(2.0, 0.5, 0), step(2.5, 0.5, -2)],
    &[step(0.0, 1.0, 0), step(1.0, 0.5, 2), step(1.5, 0.5, 3)],
];

/// Fallback for other lead instruments.
pub static DEFAULT: &[LeadPattern] = &[
    &[step(0.0, 0.5, 0), step(0.5, 0.5, 2), step(1.0, 0.5, 4), step(1.5, 0.5, 2)],
    &[step(1.0, 0.5, 0), step(1.5, 0.5, 1), step(2.0, 0.5, 2), step(2.5, 0.5, 0)],
    &[step(0.0, 0.5, 0), step(0.5, 0.5, -1), step(1.0, 0.5, -2), step(1.5, 0.5, 0)],
    &[step(0.5, 0.5, 0), step(1.0, 0.5, 2), step(1.5, 0.5, 4), step(2.5, 0.5, 2)],
    &[step(0.0, 1.0, 0), step(1.0, 0.5, 2), step(1.5, 0.5, 0)],
];

/// Motif pool for a lead instrument by display name
pub fn patterns_for_instrument(name: &str) -> &'static [LeadPattern] {
    match name {
        "Lead 1 (square)" => SQUARE,
        "Lead 2 (sawtooth)" => SAWTOOTH,
        "Trumpet" => TRUMPET,
        "Alto Sax" => ALTO_SAX,
        _ => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_instruments() {
        assert_eq!(patterns_for_instrument("Trumpet").len(), 5);
        assert_eq!(patterns_for_instrument("Overdriven Guitar").len(), DEFAULT.len());
    }

    #[test]
    fn test_events_stay_within_bar() {
        for pool in [SQUARE, SAWTOOTH, TRUMPET, ALTO_SAX, DEFAULT] {
            for pattern in pool {
                for event in *pattern {
                    assert!(event.offset >= 0.0);
                    assert!(event.duration > 0.0);
                    assert!(event.offset + event.duration <= 4.0 + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_steps_within_reasonable_range() {
        for pool in [SQUARE, SAWTOOTH, TRUMPET, ALTO_SAX, DEFAULT] {
            for pattern in pool {
                for event in *pattern {
                    assert!(event.scale_step.abs() <= 7);
                }
            }
        }
    }
}
