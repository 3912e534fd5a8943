// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmony generation: chords, bass, pads and leads.
//!
//! A roman-numeral progression is chosen once per song from a
//! seed-derived stream, then each instrument renders it with its own
//! stream, pattern templates and register. Chord-bearing tracks apply
//! voice-leading against their previous bar only; there is no
//! cross-instrument constraint.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

use super::{stream_rng, NoteEvent, RngStream};
use crate::music::chord::{ChordQuality, ChordVocabulary};
use crate::music::roman::{parse_roman, HarmonyError};
use crate::music::scale::ScaleVocabulary;
use crate::patterns::bass::{self, BassFunction};
use crate::patterns::chords::{self, ChordMode, ChordPattern, ChordStep};
use crate::patterns::leads;
use crate::patterns::pads::{self, PadMode};
use crate::song::{Instrument, Role, SongSpecification, Timbre};

/// Middle register for chord voicings (C3).
const CHORD_BASE: i32 = 48;
/// Bass register (C2).
const BASS_BASE: i32 = 36;
/// Lead register (C4).
const LEAD_BASE: i32 = 60;
/// Candidate pad registers, chosen once per track.
const PAD_BASES: [i32; 2] = [60, 48];

/// Arpeggio substep in quarter-note units (an eighth note).
const ARP_SUBSTEP: f64 = 0.5;

/// Probability of substituting the seventh-chord voicing.
const SEVENTH_PROBABILITY: f64 = 0.3;

/// Degenerate-pool fallback: one whole-bar block chord.
static FALLBACK_BLOCK: ChordPattern = &[ChordStep {
    offset: 0.0,
    duration: 4.0,
    mode: ChordMode::Block,
}];

static FUNK_PROGRESSIONS: &[&[&str]] = &[
    &["I", "IV", "I", "V"],
    &["I", "ii", "IV", "V"],
];

static MINOR_PROGRESSIONS: &[&[&str]] = &[
    &["i", "VI", "III", "VII"],
    &["i", "iv", "VII", "III"],
];

static POP_PROGRESSIONS: &[&[&str]] = &[
    &["I", "V", "vi", "IV"],
    &["I", "vi", "IV", "V"],
    &["I", "IV", "V", "IV"],
];

/// Two-note pad voicing subsets, held for a whole track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PadVoicing {
    RootSeventh,
    ThirdFifth,
    FifthNinth,
}

/// Harmony track generator.
pub struct HarmonyGenerator {
    scales: ScaleVocabulary,
    chords: ChordVocabulary,
}

impl HarmonyGenerator {
    /// Create a generator with the standard vocabularies
    pub fn new() -> Self {
        Self {
            scales: ScaleVocabulary::standard(),
            chords: ChordVocabulary::standard(),
        }
    }

    /// Create a generator with custom vocabularies
    pub fn with_vocabularies(scales: ScaleVocabulary, chords: ChordVocabulary) -> Self {
        Self { scales, chords }
    }

    /// Choose the song's chord progression, tiled to its bar count.
    ///
    /// Deterministic for a given seed and independent of the band layout:
    /// the choice uses its own stream.
    pub fn choose_chord_progression(&self, spec: &SongSpecification) -> Vec<&'static str> {
        let style = spec.style.to_lowercase();
        let candidates = if style.contains("funk") {
            FUNK_PROGRESSIONS
        } else if ScaleVocabulary::is_minor(&spec.key) {
            MINOR_PROGRESSIONS
        } else {
            POP_PROGRESSIONS
        };

        let mut rng = stream_rng(spec.random_seed, RngStream::Progression);
        let base = candidates[rng.gen_range(0..candidates.len())];
        debug!(progression = ?base, "chose chord progression");

        (0..spec.number_of_bars)
            .map(|bar| base[bar % base.len()])
            .collect()
    }

    /// Generate the chord track for one instrument.
    pub fn generate_chord_track(
        &self,
        spec: &SongSpecification,
        instrument: &Instrument,
    ) -> Result<Vec<NoteEvent>, HarmonyError> {
        let progression = self.choose_chord_progression(spec);
        let timing = spec.timing();
        let scale = self.scales.offsets(&spec.key);
        let pool = chords::patterns_for_timbre(instrument.timbre);
        let arp_bias = match instrument.timbre {
            Timbre::Guitar => 0.7,
            Timbre::Piano => 0.4,
            Timbre::Organ => 0.1,
            Timbre::Other => 0.5,
        };

        let mut rng = stream_rng(
            spec.random_seed,
            RngStream::Chords {
                channel: instrument.channel,
            },
        );
        let mut events = Vec::new();
        let mut previous_voicing: Option<Vec<i32>> = None;

        for (bar, roman) in progression.iter().enumerate() {
            let (degree, quality) = parse_roman(roman)?;
            let root = CHORD_BASE + scale[degree % scale.len()] as i32;

            // Draw the substitution first so stream consumption does not
            // depend on the vocabulary contents.
            let wants_seventh = rng.gen::<f64>() < SEVENTH_PROBABILITY;
            let intervals: Vec<i32> = match self.chords.seventh(quality) {
                Some(seventh) if wants_seventh => seventh.iter().map(|&i| i as i32).collect(),
                _ => self.chords.triad(quality).iter().map(|&i| i as i32).collect(),
            };

            let mut voicing: Vec<i32> = intervals.iter().map(|iv| root + iv).collect();
            if instrument.timbre == Timbre::Guitar {
                for pitch in &mut voicing {
                    *pitch += 12;
                }
            }
            let voicing = apply_voice_leading(&voicing, previous_voicing.as_deref());

            let wants_arp = rng.gen::<f64>() < arp_bias;
            let matching: Vec<ChordPattern> = pool
                .iter()
                .copied()
                .filter(|p| chords::is_arpeggio(p) == wants_arp)
                .collect();
            let pattern = if !matching.is_empty() {
                matching[rng.gen_range(0..matching.len())]
            } else if !pool.is_empty() {
                pool[rng.gen_range(0..pool.len())]
            } else {
                warn!("empty chord pattern pool, using block fallback");
                FALLBACK_BLOCK
            };

            let bar_start = bar as f64 * timing.seconds_per_bar;
            for step in pattern {
                self.render_chord_step(
                    step,
                    &voicing,
                    bar_start,
                    timing.seconds_per_beat,
                    instrument.channel,
                    &mut events,
                    &mut rng,
                );
            }

            previous_voicing = Some(voicing);
        }

        Ok(events)
    }

    /// Render one chord template event into note events.
    #[allow(clippy::too_many_arguments)]
    fn render_chord_step(
        &self,
        step: &ChordStep,
        voicing: &[i32],
        bar_start: f64,
        seconds_per_beat: f64,
        channel: u8,
        events: &mut Vec<NoteEvent>,
        rng: &mut StdRng,
    ) {
        if voicing.is_empty() {
            return;
        }
        let start = bar_start + step.offset * seconds_per_beat;
        let span = step.duration * seconds_per_beat;

        match step.mode {
            ChordMode::Block => {
                for &pitch in voicing {
                    let velocity = render_velocity(rng, 90, step.offset);
                    events.push(note(start, start + span, pitch, velocity, channel));
                }
            }
            ChordMode::ArpUp | ChordMode::ArpDown => {
                let substep = ARP_SUBSTEP * seconds_per_beat;
                let count = (span / substep).round().max(1.0) as usize;
                for k in 0..count {
                    let idx = match step.mode {
                        ChordMode::ArpUp => k % voicing.len(),
                        _ => voicing.len() - 1 - (k % voicing.len()),
                    };
                    let note_start = start + k as f64 * substep;
                    let offset = step.offset + k as f64 * ARP_SUBSTEP;
                    let velocity = render_velocity(rng, 90, offset);
                    events.push(note(
                        note_start,
                        note_start + substep,
                        voicing[idx],
                        velocity,
                        channel,
                    ));
                }
            }
            ChordMode::TopPulse => {
                let top = *voicing.iter().max().unwrap_or(&voicing[0]);
                let substep = ARP_SUBSTEP * seconds_per_beat;
                let count = (span / substep).round().max(1.0) as usize;
                for k in 0..count {
                    let note_start = start + k as f64 * substep;
                    let offset = step.offset + k as f64 * ARP_SUBSTEP;
                    let velocity = render_velocity(rng, 90, offset);
                    // Staccato: half the substep.
                    events.push(note(
                        note_start,
                        note_start + substep * 0.5,
                        top,
                        velocity,
                        channel,
                    ));
                }
            }
        }
    }

    /// Generate the bass track for one instrument.
    pub fn generate_bass_track(
        &self,
        spec: &SongSpecification,
        instrument: &Instrument,
    ) -> Result<Vec<NoteEvent>, HarmonyError> {
        let progression = self.choose_chord_progression(spec);
        let timing = spec.timing();
        let scale = self.scales.offsets(&spec.key);
        let pool = bass::patterns_for_instrument(&instrument.name);

        let degrees: Vec<usize> = progression
            .iter()
            .map(|roman| parse_roman(roman).map(|(degree, _)| degree))
            .collect::<Result<_, _>>()?;
        let roots: Vec<i32> = degrees
            .iter()
            .map(|&d| BASS_BASE + scale[d % scale.len()] as i32)
            .collect();

        let mut rng = stream_rng(
            spec.random_seed,
            RngStream::Bass {
                channel: instrument.channel,
            },
        );
        let mut events = Vec::new();
        // Running diatonic index for walking lines; persists across bars
        // so repeated walk steps keep moving instead of restating the root.
        let mut walk_index = degrees.first().copied().unwrap_or(0) as i32;

        for bar in 0..progression.len() {
            let root = roots[bar];
            let next_root = roots[(bar + 1) % roots.len()];
            let next_degree = degrees[(bar + 1) % degrees.len()];
            let pattern = pool[rng.gen_range(0..pool.len())];
            let bar_start = bar as f64 * timing.seconds_per_bar;

            for step in pattern {
                let pitch = match step.function {
                    BassFunction::Root => root,
                    BassFunction::Fifth => root + 7,
                    BassFunction::Octave => root + 12,
                    BassFunction::WalkUp => {
                        walk_index += 1;
                        BASS_BASE + diatonic_pitch(scale, walk_index)
                    }
                    BassFunction::WalkDown => {
                        walk_index -= 1;
                        BASS_BASE + diatonic_pitch(scale, walk_index)
                    }
                    BassFunction::ApproachNext => {
                        approach_pitch(scale, root, next_root, next_degree, &mut rng)
                    }
                    BassFunction::Rest => continue,
                };
                let pitch = clamp_bass_register(pitch, &mut rng);
                let start = bar_start + step.offset * timing.seconds_per_beat;
                let end = start + step.duration * timing.seconds_per_beat;
                let velocity = render_velocity(&mut rng, 85, step.offset);
                events.push(note(start, end, pitch, velocity, instrument.channel));
            }
        }

        Ok(events)
    }

    /// Generate the pad track for one instrument.
    pub fn generate_pad_track(
        &self,
        spec: &SongSpecification,
        instrument: &Instrument,
    ) -> Result<Vec<NoteEvent>, HarmonyError> {
        let progression = self.choose_chord_progression(spec);
        let timing = spec.timing();
        let scale = self.scales.offsets(&spec.key);
        let pool = pads::patterns_for_instrument(&instrument.name);

        let mut rng = stream_rng(
            spec.random_seed,
            RngStream::Pad {
                channel: instrument.channel,
            },
        );

        // Chosen once and held for the whole track.
        let voicing_subset = match rng.gen_range(0..3) {
            0 => PadVoicing::RootSeventh,
            1 => PadVoicing::ThirdFifth,
            _ => PadVoicing::FifthNinth,
        };
        let base = PAD_BASES[rng.gen_range(0..PAD_BASES.len())];

        let mut events = Vec::new();
        for (bar, roman) in progression.iter().enumerate() {
            let (degree, quality) = parse_roman(roman)?;
            let root = base + scale[degree % scale.len()] as i32;
            let pair = pad_pair(&self.chords, root, quality, voicing_subset);

            let pattern = pool[rng.gen_range(0..pool.len())];
            let bar_start = bar as f64 * timing.seconds_per_bar;

            for step in pattern {
                let start = bar_start + step.offset * timing.seconds_per_beat;
                let end = start + step.duration * timing.seconds_per_beat;
                let base_velocity = match step.mode {
                    PadMode::Sustain => 70,
                    PadMode::Half => 72,
                    PadMode::Swell => 60,
                    PadMode::Pulse => 76,
                };
                for &pitch in &pair {
                    let jitter = rng.gen_range(-5i32..=5);
                    let velocity = (base_velocity + jitter).clamp(40, 127) as u8;
                    events.push(note(start, end, pitch, velocity, instrument.channel));
                }
            }
        }

        Ok(events)
    }

    /// Generate the lead track for one instrument.
    ///
    /// Even bars are "calls" (70% chance of a motif), odd bars
    /// "responses" (40%); the silent remainder is deliberate.
    pub fn generate_lead_track(
        &self,
        spec: &SongSpecification,
        instrument: &Instrument,
    ) -> Result<Vec<NoteEvent>, HarmonyError> {
        let progression = self.choose_chord_progression(spec);
        let timing = spec.timing();
        let scale = self.scales.offsets(&spec.key);
        let pool = leads::patterns_for_instrument(&instrument.name);

        let mut rng = stream_rng(
            spec.random_seed,
            RngStream::Lead {
                channel: instrument.channel,
            },
        );
        let mut events = Vec::new();

        for (bar, roman) in progression.iter().enumerate() {
            let (degree, _) = parse_roman(roman)?;
            let play_probability = if bar % 2 == 0 { 0.7 } else { 0.4 };
            if rng.gen::<f64>() >= play_probability {
                continue;
            }

            let motif = pool[rng.gen_range(0..pool.len())];
            let bar_start = bar as f64 * timing.seconds_per_bar;
            for step in motif {
                let index = degree as i32 + step.scale_step;
                let pitch = LEAD_BASE + diatonic_pitch(scale, index);
                let start = bar_start + step.offset * timing.seconds_per_beat;
                let end = start + step.duration * timing.seconds_per_beat;
                let velocity = render_velocity(&mut rng, 88, step.offset);
                events.push(note(start, end, pitch, velocity, instrument.channel));
            }
        }

        Ok(events)
    }

    /// Generate every harmony track of the band, merged into one list.
    pub fn generate_tracks(
        &self,
        spec: &SongSpecification,
    ) -> Result<Vec<NoteEvent>, HarmonyError> {
        let mut events = Vec::new();
        for instrument in &spec.band.instruments {
            let track = match instrument.role {
                Role::Chords => self.generate_chord_track(spec, instrument)?,
                Role::Bass => self.generate_bass_track(spec, instrument)?,
                Role::Pad => self.generate_pad_track(spec, instrument)?,
                Role::Lead => self.generate_lead_track(spec, instrument)?,
            };
            events.extend(track);
        }
        Ok(events)
    }
}

impl Default for HarmonyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the octave shift minimizing mean voice movement.
fn apply_voice_leading(voicing: &[i32], previous: Option<&[i32]>) -> Vec<i32> {
    let Some(previous) = previous else {
        return voicing.to_vec();
    };
    let mut best = voicing.to_vec();
    let mut best_distance = mean_abs_distance(voicing, previous);
    for shift in [-12, 12] {
        let candidate: Vec<i32> = voicing.iter().map(|p| p + shift).collect();
        let distance = mean_abs_distance(&candidate, previous);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Mean absolute pitch distance over the shared voice count.
fn mean_abs_distance(a: &[i32], b: &[i32]) -> f64 {
    let shared = a.len().min(b.len());
    if shared == 0 {
        return 0.0;
    }
    let total: i32 = a
        .iter()
        .zip(b)
        .take(shared)
        .map(|(x, y)| (x - y).abs())
        .sum();
    total as f64 / shared as f64
}

/// Pitch for a diatonic index, wrapping degrees into octaves.
fn diatonic_pitch(scale: &[i8], index: i32) -> i32 {
    let n = scale.len() as i32;
    let octave = index.div_euclid(n);
    let degree = index.rem_euclid(n) as usize;
    12 * octave + scale[degree] as i32
}

/// Neighbor of the next bar's root, approached from the current root's side.
fn approach_pitch(
    scale: &[i8],
    root: i32,
    next_root: i32,
    next_degree: usize,
    rng: &mut StdRng,
) -> i32 {
    // Coming from below lands just under the target; from above, just over.
    let direction = if root <= next_root { -1 } else { 1 };
    if rng.gen::<f64>() < 0.25 {
        next_root + direction
    } else {
        let neighbor = diatonic_pitch(scale, next_degree as i32 + direction);
        BASS_BASE + neighbor
    }
}

/// Pull a stray bass pitch back toward its register, half the time.
fn clamp_bass_register(pitch: i32, rng: &mut StdRng) -> i32 {
    if pitch > BASS_BASE + 24 && rng.gen::<f64>() < 0.5 {
        pitch - 12
    } else if pitch < BASS_BASE - 12 && rng.gen::<f64>() < 0.5 {
        pitch + 12
    } else {
        pitch
    }
}

/// Reduced two-note pad voicing around a root.
fn pad_pair(
    chords: &ChordVocabulary,
    root: i32,
    quality: ChordQuality,
    subset: PadVoicing,
) -> [i32; 2] {
    let triad = chords.triad(quality);
    let third = triad.get(1).copied().unwrap_or(4) as i32;
    let fifth = triad.get(2).copied().unwrap_or(7) as i32;
    let seventh = chords
        .seventh(quality)
        .and_then(|iv| iv.get(3).copied())
        .unwrap_or(10) as i32;
    match subset {
        PadVoicing::RootSeventh => [root, root + seventh],
        PadVoicing::ThirdFifth => [root + third, root + fifth],
        PadVoicing::FifthNinth => [root + fifth, root + 14],
    }
}

/// Base velocity with jitter and a backbeat accent on beats 1 and 3.
fn render_velocity(rng: &mut StdRng, base: i32, quarter_offset: f64) -> u8 {
    let jitter = rng.gen_range(-8i32..=8);
    let accent = if quarter_offset.abs() < 1e-9 || (quarter_offset - 2.0).abs() < 1e-9 {
        10
    } else {
        0
    };
    (base + jitter + accent).clamp(40, 127) as u8
}

/// Build a note event, clamping the pitch to the MIDI range.
fn note(start: f64, end: f64, pitch: i32, velocity: u8, channel: u8) -> NoteEvent {
    NoteEvent {
        start_time: start,
        end_time: end,
        pitch: pitch.clamp(0, 127) as u8,
        velocity,
        channel,
    }
}
