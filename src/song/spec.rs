// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The immutable per-song parameter record and its timing math.

use serde::{Deserialize, Serialize};

use super::band::BandConfiguration;

/// Bar/beat timing derived from tempo and time signature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Quarter-note beats per bar
    pub beats_per_bar: f64,
    /// Seconds per quarter-note beat
    pub seconds_per_beat: f64,
    /// Seconds per bar
    pub seconds_per_bar: f64,
}

/// All parameters describing one song.
///
/// Created once per song and read-only thereafter; both generators and
/// the score assembler consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSpecification {
    /// Song identifier (e.g. "0001_C-major_pop-straight")
    pub identifier: String,
    /// Tempo in beats per minute
    pub tempo_bpm: f64,
    /// Time signature (numerator, denominator)
    pub time_signature: (u8, u8),
    /// Number of bars
    pub number_of_bars: usize,
    /// Key name from the scale vocabulary
    pub key: String,
    /// Style name selecting pattern libraries
    pub style: String,
    /// Band layout
    pub band: BandConfiguration,
    /// Seed for all random streams of this song
    pub random_seed: u64,
}

impl SongSpecification {
    /// Create a specification with default band and parameters
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            tempo_bpm: 120.0,
            time_signature: (4, 4),
            number_of_bars: 8,
            key: "C major".to_string(),
            style: "pop_straight".to_string(),
            band: BandConfiguration::new(Vec::new()),
            random_seed: 42,
        }
    }

    /// Set the tempo
    pub fn with_tempo(mut self, tempo_bpm: f64) -> Self {
        self.tempo_bpm = tempo_bpm;
        self
    }

    /// Set the time signature
    pub fn with_time_signature(mut self, numerator: u8, denominator: u8) -> Self {
        self.time_signature = (numerator, denominator);
        self
    }

    /// Set the bar count
    pub fn with_bars(mut self, bars: usize) -> Self {
        self.number_of_bars = bars;
        self
    }

    /// Set the key
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    /// Set the style
    pub fn with_style(mut self, style: &str) -> Self {
        self.style = style.to_string();
        self
    }

    /// Set the band layout
    pub fn with_band(mut self, band: BandConfiguration) -> Self {
        self.band = band;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Derive bar/beat timing from tempo and time signature
    pub fn timing(&self) -> Timing {
        let (numerator, denominator) = self.time_signature;
        let beats_per_bar = numerator as f64 * (4.0 / denominator as f64);
        let seconds_per_beat = 60.0 / self.tempo_bpm;
        Timing {
            beats_per_bar,
            seconds_per_beat,
            seconds_per_bar: beats_per_bar * seconds_per_beat,
        }
    }

    /// Total song duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.number_of_bars as f64 * self.timing().seconds_per_bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_four_four() {
        let spec = SongSpecification::new("t").with_tempo(120.0);
        let timing = spec.timing();
        assert_eq!(timing.beats_per_bar, 4.0);
        assert_eq!(timing.seconds_per_beat, 0.5);
        assert_eq!(timing.seconds_per_bar, 2.0);
    }

    #[test]
    fn test_timing_six_eight() {
        let spec = SongSpecification::new("t")
            .with_tempo(120.0)
            .with_time_signature(6, 8);
        let timing = spec.timing();
        // 6/8 at quarter = 120: six eighths = three quarter-note beats.
        assert_eq!(timing.beats_per_bar, 3.0);
        assert_eq!(timing.seconds_per_bar, 1.5);
    }

    #[test]
    fn test_duration() {
        let spec = SongSpecification::new("t").with_tempo(100.0).with_bars(10);
        // 10 bars * 4 beats * 0.6 s/beat
        assert!((spec.duration_seconds() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_serde_round_trip() {
        let spec = SongSpecification::new("0001")
            .with_key("A minor")
            .with_style("funk_pop")
            .with_seed(1234);
        let json = serde_json::to_string(&spec).unwrap();
        let back: SongSpecification = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
