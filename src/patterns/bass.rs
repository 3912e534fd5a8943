// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Bass line templates, keyed by instrument name.

/// Scale-relative function of a bass template event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BassFunction {
    /// Chord root
    Root,
    /// Root + 7 semitones
    Fifth,
    /// Root + 12 semitones
    Octave,
    /// Next diatonic step up from the running walk position
    WalkUp,
    /// Next diatonic step down from the running walk position
    WalkDown,
    /// Neighbor of the next bar's root, approached from the correct side
    ApproachNext,
    /// Silence
    Rest,
}

/// One template event: (offset, duration) in quarters plus function.
#[derive(Debug, Clone, Copy)]
pub struct BassStep {
    pub offset: f64,
    pub duration: f64,
    pub function: BassFunction,
}

/// A bar template is a list of events.
pub type BassPattern = &'static [BassStep];

const fn step(offset: f64, duration: f64, function: BassFunction) -> BassStep {
    BassStep {
        offset,
        duration,
        function,
    }
}

use BassFunction::{ApproachNext, Fifth, Octave, Root, WalkDown, WalkUp};

/// Electric Bass (finger): solid and calm.
pub static FINGER: &[BassPattern] = &[
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Root),
        step(2.0, 1.0, Root),
        step(3.0, 1.0, Root),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Root),
        step(2.0, 1.0, Fifth),
        step(3.0, 1.0, Root),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Fifth),
        step(2.0, 1.0, Root),
        step(3.0, 1.0, Octave),
    ],
    &[
        step(0.0, 2.0, Root),
        step(2.0, 1.0, Root),
        step(3.0, 1.0, ApproachNext),
    ],
    &[
        step(0.0, 0.5, Root),
        step(0.5, 0.5, Root),
        step(1.0, 1.0, Root),
        step(2.0, 0.5, Root),
        step(2.5, 0.5, Fifth),
        step(3.0, 0.5, Root),
        step(3.5, 0.5, ApproachNext),
    ],
];

/// Electric Bass (pick): punchier, more syncopation.
pub static PICK: &[BassPattern] = &[
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Root),
        step(2.0, 1.0, Root),
        step(3.5, 0.5, ApproachNext),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Root),
        step(2.0, 1.0, Fifth),
        step(3.0, 1.0, Octave),
    ],
    &[
        step(0.0, 0.5, Root),
        step(0.5, 0.5, Root),
        step(1.0, 0.5, Fifth),
        step(1.5, 0.5, Fifth),
        step(2.0, 0.5, Root),
        step(2.5, 0.5, Root),
        step(3.0, 0.5, Fifth),
        step(3.5, 0.5, ApproachNext),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 0.5, WalkUp),
        step(1.5, 0.5, WalkUp),
        step(2.0, 0.5, WalkUp),
        step(2.5, 0.5, WalkUp),
        step(3.0, 0.5, WalkUp),
        step(3.5, 0.5, ApproachNext),
    ],
    &[
        step(0.5, 0.5, Root),
        step(1.5, 0.5, Root),
        step(2.0, 0.5, Fifth),
        step(2.5, 0.5, Fifth),
        step(3.0, 0.5, Root),
        step(3.5, 0.5, ApproachNext),
    ],
];

/// Synth Bass 1: driving eighths and walking movement.
pub static SYNTH_1: &[BassPattern] = &[
    &[
        step(0.0, 0.5, Root),
        step(0.5, 0.5, Root),
        step(1.0, 0.5, Root),
        step(1.5, 0.5, Root),
        step(2.0, 0.5, Root),
        step(2.5, 0.5, Root),
        step(3.0, 0.5, Root),
        step(3.5, 0.5, Root),
    ],
    &[
        step(0.0, 0.5, Root),
        step(0.5, 0.5, Fifth),
        step(1.0, 0.5, Root),
        step(1.5, 0.5, Fifth),
        step(2.0, 0.5, Root),
        step(2.5, 0.5, Fifth),
        step(3.0, 0.5, Root),
        step(3.5, 0.5, ApproachNext),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 0.5, Fifth),
        step(1.5, 0.5, Octave),
        step(2.0, 0.5, Fifth),
        step(2.5, 0.5, Root),
        step(3.0, 1.0, ApproachNext),
    ],
    &[
        step(0.0, 0.5, WalkUp),
        step(0.5, 0.5, WalkUp),
        step(1.0, 0.5, WalkUp),
        step(1.5, 0.5, WalkUp),
        step(2.0, 0.5, WalkUp),
        step(2.5, 0.5, WalkUp),
        step(3.0, 0.5, WalkUp),
        step(3.5, 0.5, ApproachNext),
    ],
    &[
        step(0.0, 0.5, WalkDown),
        step(0.5, 0.5, WalkDown),
        step(1.0, 0.5, WalkDown),
        step(1.5, 0.5, WalkDown),
        step(2.0, 0.5, WalkDown),
        step(2.5, 0.5, WalkDown),
        step(3.0, 0.5, WalkDown),
        step(3.5, 0.5, ApproachNext),
    ],
];

/// Synth Bass 2: similar but airier.
pub static SYNTH_2: &[BassPattern] = &[
    &[
        step(0.0, 1.0, Root),
        step(1.0, 0.5, WalkUp),
        step(1.5, 0.5, WalkUp),
        step(2.0, 1.0, Root),
        step(3.0, 0.5, WalkUp),
        step(3.5, 0.5, ApproachNext),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Fifth),
        step(2.0, 1.0, Root),
        step(3.0, 1.0, Fifth),
    ],
    &[
        step(0.0, 0.5, Root),
        step(0.5, 0.5, Octave),
        step(1.0, 0.5, Root),
        step(1.5, 0.5, Octave),
        step(2.0, 0.5, Fifth),
        step(2.5, 0.5, Root),
        step(3.0, 0.5, Root),
        step(3.5, 0.5, ApproachNext),
    ],
    &[
        step(0.0, 3.0, Root),
        step(3.0, 0.5, WalkUp),
        step(3.5, 0.5, ApproachNext),
    ],
    &[
        step(0.5, 0.5, Root),
        step(1.5, 0.5, Root),
        step(2.5, 0.5, Root),
        step(3.0, 0.5, WalkUp),
        step(3.5, 0.5, ApproachNext),
    ],
];

/// Fallback for other bass instruments.
pub static DEFAULT: &[BassPattern] = &[
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Root),
        step(2.0, 1.0, Fifth),
        step(3.0, 1.0, Root),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Root),
        step(2.0, 1.0, Root),
        step(3.0, 1.0, Root),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Fifth),
        step(2.0, 1.0, Root),
        step(3.0, 1.0, Octave),
    ],
    &[
        step(0.0, 0.5, Root),
        step(0.5, 0.5, Root),
        step(1.0, 0.5, Fifth),
        step(1.5, 0.5, Fifth),
        step(2.0, 1.0, Root),
        step(3.0, 1.0, ApproachNext),
    ],
    &[
        step(0.0, 1.0, Root),
        step(1.0, 1.0, Root),
        step(2.0, 0.5, WalkUp),
        step(2.5, 0.5, WalkUp),
        step(3.0, 1.0, ApproachNext),
    ],
];

/// Template pool for a bass instrument by display name
pub fn patterns_for_instrument(name: &str) -> &'static [BassPattern] {
    match name {
        "Electric Bass (finger)" => FINGER,
        "Electric Bass (pick)" => PICK,
        "Synth Bass 1" => SYNTH_1,
        "Synth Bass 2" => SYNTH_2,
        _ => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_instruments() {
        assert_eq!(patterns_for_instrument("Electric Bass (pick)").len(), 5);
        assert_eq!(patterns_for_instrument("Synth Bass 1").len(), 5);
        assert_eq!(patterns_for_instrument("Tuba").len(), DEFAULT.len());
    }

    #[test]
    fn test_events_stay_within_bar() {
        for pool in [FINGER, PICK, SYNTH_1, SYNTH_2, DEFAULT] {
            for pattern in pool {
                for event in *pattern {
                    assert!(event.offset >= 0.0);
                    assert!(event.duration > 0.0);
                    assert!(event.offset + event.duration <= 4.0 + 1e-9);
                }
            }
        }
    }
}
