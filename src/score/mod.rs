// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Score assembly: merging generated event streams into a playable score.
//!
//! The assembler is the only place where percussion classes become
//! concrete note numbers and where the band layout turns into an ordered
//! track list. Generators stay ignorant of both.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::generators::{DrumEvent, NoteEvent};
use crate::music::DrumMapping;
use crate::song::SongSpecification;

/// Fixed sounding length of a percussion hit in seconds.
const DRUM_NOTE_SECONDS: f64 = 0.05;

/// One output track: a channel, a patch and its notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTrack {
    /// Display name of the instrument (or "Drums")
    pub name: String,
    /// GM program number; meaningless for the drum track
    pub program: u8,
    /// Output channel
    pub channel: u8,
    /// Whether this is the percussion track
    pub is_drums: bool,
    /// Notes sorted by onset
    pub notes: Vec<NoteEvent>,
}

/// A fully assembled song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Identifier copied from the song parameters
    pub identifier: String,
    /// Tempo in beats per minute
    pub tempo_bpm: f64,
    /// Time signature (numerator, denominator)
    pub time_signature: (u8, u8),
    /// Total duration in seconds
    pub duration_seconds: f64,
    /// Start time of each bar in seconds
    pub bar_positions: Vec<f64>,
    /// Pitched tracks in role order, then the drum track
    pub tracks: Vec<ScoreTrack>,
}

impl Score {
    /// Total number of notes across all tracks
    pub fn note_count(&self) -> usize {
        self.tracks.iter().map(|t| t.notes.len()).sum()
    }

    /// The percussion track, if any
    pub fn drum_track(&self) -> Option<&ScoreTrack> {
        self.tracks.iter().find(|t| t.is_drums)
    }
}

/// Builds a [`Score`] from generated event streams.
pub struct ScoreAssembler {
    mapping: DrumMapping,
}

impl ScoreAssembler {
    /// Create an assembler with the standard GM drum mapping
    pub fn new() -> Self {
        Self {
            mapping: DrumMapping::standard(),
        }
    }

    /// Create an assembler with a custom drum mapping
    pub fn with_mapping(mapping: DrumMapping) -> Self {
        Self { mapping }
    }

    /// Assemble note and drum events into an ordered score.
    ///
    /// Pitched tracks appear in role-priority order (chords, bass, pad,
    /// lead), ties broken by channel. Each channel yields one track; when
    /// two instruments share a channel the first in that order keeps it.
    /// The drum track always comes last.
    pub fn assemble(
        &self,
        spec: &SongSpecification,
        notes: &[NoteEvent],
        drums: &[DrumEvent],
    ) -> Score {
        let timing = spec.timing();
        let mut tracks = Vec::new();

        let mut instruments: Vec<_> = spec.band.instruments.iter().collect();
        instruments.sort_by_key(|inst| (inst.role.priority(), inst.channel));

        let mut used_channels = Vec::new();
        for instrument in instruments {
            if used_channels.contains(&instrument.channel) {
                debug!(
                    name = %instrument.name,
                    channel = instrument.channel,
                    "channel already taken, skipping instrument"
                );
                continue;
            }
            used_channels.push(instrument.channel);

            let mut track_notes: Vec<NoteEvent> = notes
                .iter()
                .filter(|n| n.channel == instrument.channel)
                .copied()
                .collect();
            track_notes.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

            tracks.push(ScoreTrack {
                name: instrument.name.clone(),
                program: instrument.program,
                channel: instrument.channel,
                is_drums: false,
                notes: track_notes,
            });
        }

        tracks.push(self.assemble_drum_track(spec, drums));

        Score {
            identifier: spec.identifier.clone(),
            tempo_bpm: spec.tempo_bpm,
            time_signature: spec.time_signature,
            duration_seconds: spec.duration_seconds(),
            bar_positions: compute_bar_positions(spec.number_of_bars, timing.seconds_per_bar),
            tracks,
        }
    }

    /// Map drum events to concrete notes on the percussion channel.
    ///
    /// Classes without a mapped note are dropped rather than guessed.
    fn assemble_drum_track(&self, spec: &SongSpecification, drums: &[DrumEvent]) -> ScoreTrack {
        let channel = spec.band.drum_channel;
        let mut notes = Vec::with_capacity(drums.len());
        for event in drums {
            match self.mapping.primary_note(event.class) {
                Some(pitch) => notes.push(NoteEvent {
                    start_time: event.time_sec,
                    end_time: event.time_sec + DRUM_NOTE_SECONDS,
                    pitch,
                    velocity: event.velocity,
                    channel,
                }),
                None => {
                    warn!(class = ?event.class, "drum class has no mapped note, dropping hit");
                }
            }
        }
        notes.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        ScoreTrack {
            name: "Drums".to_string(),
            program: 0,
            channel,
            is_drums: true,
            notes,
        }
    }
}

impl Default for ScoreAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start times of all bars in seconds.
pub fn compute_bar_positions(bars: usize, seconds_per_bar: f64) -> Vec<f64> {
    (0..bars).map(|bar| bar as f64 * seconds_per_bar).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::DrumClass;
    use crate::song::{BandConfiguration, Instrument, Role};

    fn test_spec() -> SongSpecification {
        let band = BandConfiguration::new(vec![
            Instrument::new("Lead 1 (square)", 80, 10, Role::Lead),
            Instrument::new("Acoustic Grand Piano", 0, 0, Role::Chords),
            Instrument::new("String Ensemble 1", 48, 8, Role::Pad),
            Instrument::new("Electric Bass (finger)", 33, 6, Role::Bass),
        ]);
        SongSpecification::new("assembly-test")
            .with_tempo(120.0)
            .with_bars(4)
            .with_band(band)
    }

    fn note_on(channel: u8, start: f64) -> NoteEvent {
        NoteEvent {
            start_time: start,
            end_time: start + 0.5,
            pitch: 60,
            velocity: 90,
            channel,
        }
    }

    #[test]
    fn test_tracks_in_role_order_drums_last() {
        let score = ScoreAssembler::new().assemble(&test_spec(), &[], &[]);
        let channels: Vec<u8> = score.tracks.iter().map(|t| t.channel).collect();
        // Chords (0), bass (6), pad (8), lead (10), drums (9).
        assert_eq!(channels, vec![0, 6, 8, 10, 9]);
        assert!(score.tracks.last().is_some_and(|t| t.is_drums));
    }

    #[test]
    fn test_first_instrument_keeps_shared_channel() {
        let band = BandConfiguration::new(vec![
            Instrument::new("Electric Bass (pick)", 34, 6, Role::Bass),
            Instrument::new("Electric Bass (finger)", 33, 6, Role::Bass),
        ]);
        let spec = test_spec().with_band(band);
        let score = ScoreAssembler::new().assemble(&spec, &[], &[]);
        let bass_tracks: Vec<&ScoreTrack> =
            score.tracks.iter().filter(|t| t.channel == 6).collect();
        assert_eq!(bass_tracks.len(), 1);
        assert_eq!(bass_tracks[0].name, "Electric Bass (pick)");
    }

    #[test]
    fn test_notes_routed_by_channel_and_sorted() {
        let notes = vec![note_on(0, 1.5), note_on(6, 0.0), note_on(0, 0.5)];
        let score = ScoreAssembler::new().assemble(&test_spec(), &notes, &[]);
        let piano = &score.tracks[0];
        assert_eq!(piano.channel, 0);
        assert_eq!(piano.notes.len(), 2);
        assert!(piano.notes[0].start_time <= piano.notes[1].start_time);
        assert_eq!(score.tracks[1].notes.len(), 1);
    }

    #[test]
    fn test_drum_hits_mapped_and_timed() {
        let drums = vec![DrumEvent {
            time_sec: 1.0,
            class: DrumClass::Kick,
            velocity: 100,
        }];
        let score = ScoreAssembler::new().assemble(&test_spec(), &[], &drums);
        let track = score.drum_track().unwrap();
        assert_eq!(track.channel, 9);
        assert_eq!(track.notes.len(), 1);
        assert_eq!(track.notes[0].pitch, 36);
        assert!((track.notes[0].end_time - track.notes[0].start_time - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_unmapped_drum_class_dropped() {
        let mut mapping = DrumMapping::new();
        mapping.insert(DrumClass::Kick, &[36]);
        let assembler = ScoreAssembler::with_mapping(mapping);
        let drums = vec![
            DrumEvent {
                time_sec: 0.0,
                class: DrumClass::Kick,
                velocity: 100,
            },
            DrumEvent {
                time_sec: 0.5,
                class: DrumClass::Ride,
                velocity: 82,
            },
        ];
        let score = assembler.assemble(&test_spec(), &[], &drums);
        assert_eq!(score.drum_track().unwrap().notes.len(), 1);
    }

    #[test]
    fn test_bar_positions() {
        let positions = compute_bar_positions(4, 2.0);
        assert_eq!(positions, vec![0.0, 2.0, 4.0, 6.0]);
        let score = ScoreAssembler::new().assemble(&test_spec(), &[], &[]);
        assert_eq!(score.bar_positions.len(), 4);
        assert!((score.duration_seconds - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_note_count() {
        let notes = vec![note_on(0, 0.0), note_on(6, 0.0)];
        let drums = vec![DrumEvent {
            time_sec: 0.0,
            class: DrumClass::Snare,
            velocity: 95,
        }];
        let score = ScoreAssembler::new().assemble(&test_spec(), &notes, &drums);
        assert_eq!(score.note_count(), 3);
    }
}
