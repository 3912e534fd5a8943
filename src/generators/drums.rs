// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Drum track generation.
//!
//! Per bar: pick a pattern from the style library (density-weighted by
//! complexity), mutate a copy of its step grids (shift, toggle, hi-hat
//! thinning/opening, pause insertion), then emit timestamped events and
//! inject ghost snares. Bars are independent; only the time offset
//! advances across them.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{stream_rng, DrumEvent, RngStream};
use crate::music::DrumClass;
use crate::patterns::drums::{library_for_style, DrumPattern, POP_STRAIGHT, STEP_RESOLUTION};
use crate::song::SongSpecification;

/// Fixed syncopated mask used by the "broken" hi-hat thinning strategy.
const BROKEN_HAT_MASK: [bool; STEP_RESOLUTION] = [
    true, false, true, true, false, true, false, true, true, false, true, false, true, true,
    false, true,
];

/// Pause lengths in steps and their selection weights.
const PAUSE_LENGTHS: [usize; 4] = [1, 2, 4, 8];
const PAUSE_WEIGHTS: [f64; 4] = [0.05, 0.35, 0.45, 0.15];

/// Base velocity per drum class.
fn base_velocity(class: DrumClass) -> u8 {
    match class {
        DrumClass::Kick => 100,
        DrumClass::Snare => 95,
        DrumClass::Sidestick => 70,
        DrumClass::HhClosed => 80,
        DrumClass::HhOpen => 84,
        DrumClass::TomLow => 92,
        DrumClass::TomMid => 90,
        DrumClass::TomHigh => 88,
        DrumClass::Crash => 110,
        DrumClass::Ride => 82,
    }
}

/// Configuration for drum track generation, all values in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrumGeneratorConfig {
    /// Mutation intensity and pattern-density bias
    pub complexity: f64,
    /// Ghost snare injection probability scale
    pub ghostnote_probability: f64,
    /// Reserved for section fills; not used by the main loop
    pub fill_probability: f64,
    /// Timing humanization magnitude
    pub swing_amount: f64,
    /// Chance of silencing a window per bar
    pub pause_probability: f64,
}

impl Default for DrumGeneratorConfig {
    fn default() -> Self {
        Self {
            complexity: 0.4,
            ghostnote_probability: 0.3,
            fill_probability: 0.3,
            swing_amount: 0.2,
            pause_probability: 0.1,
        }
    }
}

/// Drum track generator.
pub struct DrumPatternGenerator {
    config: DrumGeneratorConfig,
}

/// Per-bar working copy of a pattern: one step grid per voice.
///
/// A plain ordered list, not a map, so mutation consumes the random
/// stream in a stable voice order.
type BarGrids = Vec<(DrumClass, Vec<bool>)>;

impl DrumPatternGenerator {
    /// Create a generator with the given configuration
    pub fn new(config: DrumGeneratorConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &DrumGeneratorConfig {
        &self.config
    }

    /// Generate the complete drum event stream for a song.
    pub fn generate_drum_track(&self, spec: &SongSpecification) -> Vec<DrumEvent> {
        let timing = spec.timing();
        let step_len = timing.seconds_per_bar / STEP_RESOLUTION as f64;
        let library = library_for_style(&spec.style);
        let mut rng = stream_rng(spec.random_seed, RngStream::Drums);
        let mut events = Vec::new();

        for bar in 0..spec.number_of_bars {
            let bar_start = bar as f64 * timing.seconds_per_bar;
            let pattern = self.choose_pattern(library, &mut rng);
            let mut grids = Self::to_grids(pattern);

            self.mutate_bar(&mut grids, &mut rng);
            self.insert_pause(&mut grids, &mut rng);

            for (class, steps) in &grids {
                for (i, hit) in steps.iter().enumerate() {
                    if *hit {
                        events.push(DrumEvent {
                            time_sec: bar_start + i as f64 * step_len,
                            class: *class,
                            velocity: base_velocity(*class),
                        });
                    }
                }
            }

            self.inject_ghost_notes(&grids, bar_start, step_len, &mut events, &mut rng);
        }

        events
    }

    /// Generate a tom fill across `bars`, with a crash on the final edge.
    ///
    /// A secondary entry point for explicit section fills; the main song
    /// loop does not call it.
    pub fn generate_fill(
        &self,
        spec: &SongSpecification,
        bars: std::ops::Range<usize>,
    ) -> Vec<DrumEvent> {
        let timing = spec.timing();
        let step_len = timing.seconds_per_bar / STEP_RESOLUTION as f64;
        let c = self.config.complexity.clamp(0.0, 1.0);
        let spacing = if c < 0.6 { 2 } else { 1 };
        let toms = [DrumClass::TomLow, DrumClass::TomMid, DrumClass::TomHigh];
        let mut rng = stream_rng(
            spec.random_seed,
            RngStream::Fill {
                start_bar: bars.start,
            },
        );

        let mut events = Vec::new();
        for bar in bars.clone() {
            let bar_start = bar as f64 * timing.seconds_per_bar;
            for step in (0..STEP_RESOLUTION).step_by(spacing) {
                // Roughly 10% x complexity of the run drops out.
                if rng.gen::<f64>() < 0.1 * c {
                    continue;
                }
                let tom = toms[(bar - bars.start + step) % toms.len()];
                events.push(DrumEvent {
                    time_sec: bar_start + step as f64 * step_len,
                    class: tom,
                    velocity: base_velocity(tom),
                });
            }
        }
        events.push(DrumEvent {
            time_sec: bars.end as f64 * timing.seconds_per_bar,
            class: DrumClass::Crash,
            velocity: base_velocity(DrumClass::Crash),
        });
        events
    }

    /// Shift every event time by up to ±(0.02 x swing_amount) seconds.
    pub fn humanize_timing<R: Rng>(&self, events: &[DrumEvent], rng: &mut R) -> Vec<DrumEvent> {
        if self.config.swing_amount <= 0.0 {
            return events.to_vec();
        }
        let max_shift = 0.02 * self.config.swing_amount;
        events
            .iter()
            .map(|ev| {
                let shift = rng.gen_range(-max_shift..=max_shift);
                DrumEvent {
                    time_sec: (ev.time_sec + shift).max(0.0),
                    ..*ev
                }
            })
            .collect()
    }

    /// Scale every velocity by a factor within ±15%.
    pub fn humanize_velocity<R: Rng>(&self, events: &[DrumEvent], rng: &mut R) -> Vec<DrumEvent> {
        if self.config.complexity <= 0.0 {
            return events.to_vec();
        }
        events
            .iter()
            .map(|ev| {
                let factor = 1.0 + rng.gen_range(-0.15..=0.15);
                let velocity = (ev.velocity as f64 * factor).round().clamp(1.0, 127.0) as u8;
                DrumEvent { velocity, ..*ev }
            })
            .collect()
    }

    /// Selection weight for a pattern given its normalized density.
    ///
    /// Blends a favor-simple and a favor-dense bias by complexity; the
    /// shared exponent sharpens the choice as complexity rises.
    fn selection_weight(density_norm: f64, complexity: f64) -> f64 {
        let exponent = 0.5 + 1.5 * complexity;
        let simple = (1.0 - density_norm).powf(exponent);
        let dense = density_norm.powf(exponent);
        (1.0 - complexity) * simple + complexity * dense
    }

    /// Density-weighted pattern choice with a small uniform override.
    fn choose_pattern<'a>(
        &self,
        library: &'a [DrumPattern],
        rng: &mut StdRng,
    ) -> &'a DrumPattern {
        let library = if library.is_empty() {
            tracing::warn!("empty drum pattern library, using straight-pop fallback");
            POP_STRAIGHT
        } else {
            library
        };

        let c = self.config.complexity.clamp(0.0, 1.0);
        if rng.gen::<f64>() < 0.1 * c {
            return &library[rng.gen_range(0..library.len())];
        }

        let densities: Vec<f64> = library.iter().map(|p| p.density() as f64).collect();
        let max_density = densities.iter().cloned().fold(0.0, f64::max);
        let weights: Vec<f64> = densities
            .iter()
            .map(|&d| {
                let norm = if max_density > 0.0 { d / max_density } else { 0.0 };
                Self::selection_weight(norm, c)
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return &library[rng.gen_range(0..library.len())];
        }
        let mut draw = rng.gen::<f64>() * total;
        for (pattern, weight) in library.iter().zip(&weights) {
            draw -= weight;
            if draw <= 0.0 {
                return pattern;
            }
        }
        &library[library.len() - 1]
    }

    /// Convert a library pattern into mutable per-voice step grids
    fn to_grids(pattern: &DrumPattern) -> BarGrids {
        pattern
            .voices
            .iter()
            .map(|(class, steps)| {
                let mut grid = vec![false; STEP_RESOLUTION];
                for (i, b) in steps.bytes().take(STEP_RESOLUTION).enumerate() {
                    grid[i] = b == b'x';
                }
                (*class, grid)
            })
            .collect()
    }

    /// Apply the complexity-gated mutation operators to a bar.
    fn mutate_bar(&self, grids: &mut BarGrids, rng: &mut StdRng) {
        let c = self.config.complexity.clamp(0.0, 1.0);
        if c <= 0.0 {
            return;
        }

        for (_, steps) in grids.iter_mut() {
            if rng.gen::<f64>() < 0.4 * c {
                let shift = rng.gen_range(-2i32..=2);
                Self::shift_steps(steps, shift);
            }
            if rng.gen::<f64>() < 0.6 * c {
                let flips = (steps.len() as f64 * 0.1 * (0.5 + c)).ceil() as usize;
                for _ in 0..flips {
                    let idx = rng.gen_range(0..steps.len());
                    steps[idx] = !steps[idx];
                }
            }
        }

        self.thin_closed_hat(grids, rng);
        self.open_closed_hat(grids, rng);
    }

    /// Shift active steps without wrapping; hits pushed past an edge drop.
    fn shift_steps(steps: &mut [bool], shift: i32) {
        if shift == 0 {
            return;
        }
        let len = steps.len() as i32;
        let mut shifted = vec![false; steps.len()];
        for (i, &hit) in steps.iter().enumerate() {
            if hit {
                let j = i as i32 + shift;
                if (0..len).contains(&j) {
                    shifted[j as usize] = true;
                }
            }
        }
        steps.copy_from_slice(&shifted);
    }

    /// Thin an overfull closed hi-hat grid (> 70% filled).
    fn thin_closed_hat(&self, grids: &mut BarGrids, rng: &mut StdRng) {
        let Some((_, steps)) = grids
            .iter_mut()
            .find(|(class, _)| *class == DrumClass::HhClosed)
        else {
            return;
        };
        let fill_ratio = steps.iter().filter(|&&h| h).count() as f64 / steps.len() as f64;
        if fill_ratio <= 0.7 {
            return;
        }
        match rng.gen_range(0..3) {
            // Eighths: keep only even steps.
            0 => {
                for (i, step) in steps.iter_mut().enumerate() {
                    if i % 2 != 0 {
                        *step = false;
                    }
                }
            }
            // Offbeat: drop the on-beats.
            1 => {
                for (i, step) in steps.iter_mut().enumerate() {
                    if i % 4 == 0 {
                        *step = false;
                    }
                }
            }
            // Broken: fixed syncopated mask.
            _ => {
                for (i, step) in steps.iter_mut().enumerate() {
                    *step = *step && BROKEN_HAT_MASK[i % BROKEN_HAT_MASK.len()];
                }
            }
        }
    }

    /// At high complexity, open a small subset of closed-hat hits.
    fn open_closed_hat(&self, grids: &mut BarGrids, rng: &mut StdRng) {
        let c = self.config.complexity.clamp(0.0, 1.0);
        if c <= 0.5 || rng.gen::<f64>() >= 0.3 * c {
            return;
        }
        let Some(closed_idx) = grids
            .iter()
            .position(|(class, _)| *class == DrumClass::HhClosed)
        else {
            return;
        };

        let mut active: Vec<usize> = grids[closed_idx]
            .1
            .iter()
            .enumerate()
            .filter_map(|(i, &h)| h.then_some(i))
            .collect();
        if active.is_empty() {
            return;
        }
        let count = ((active.len() as f64 * 0.2 * c).round() as usize)
            .max(1)
            .min(active.len());

        // Without replacement: duplicate draws would shrink the subset.
        let (chosen, _) = active.partial_shuffle(rng, count);
        let opened = chosen.to_vec();

        // Merge into an open-hat grid, creating one if the pattern has none.
        let open_idx = grids
            .iter()
            .position(|(class, _)| *class == DrumClass::HhOpen)
            .unwrap_or_else(|| {
                grids.push((DrumClass::HhOpen, vec![false; STEP_RESOLUTION]));
                grids.len() - 1
            });
        for i in opened {
            grids[closed_idx].1[i] = false;
            grids[open_idx].1[i] = true;
        }
    }

    /// Silence a random window across all voices, independent of complexity.
    fn insert_pause(&self, grids: &mut BarGrids, rng: &mut StdRng) {
        if self.config.pause_probability <= 0.0
            || rng.gen::<f64>() >= self.config.pause_probability
        {
            return;
        }
        let total: f64 = PAUSE_WEIGHTS.iter().sum();
        let mut draw = rng.gen::<f64>() * total;
        let mut length = PAUSE_LENGTHS[PAUSE_LENGTHS.len() - 1];
        for (&len, &weight) in PAUSE_LENGTHS.iter().zip(&PAUSE_WEIGHTS) {
            draw -= weight;
            if draw <= 0.0 {
                length = len;
                break;
            }
        }
        let start = rng.gen_range(0..=STEP_RESOLUTION - length);
        for (_, steps) in grids.iter_mut() {
            for step in &mut steps[start..start + length] {
                *step = false;
            }
        }
    }

    /// Inject low-velocity snare hits near existing snare hits.
    fn inject_ghost_notes(
        &self,
        grids: &BarGrids,
        bar_start: f64,
        step_len: f64,
        events: &mut Vec<DrumEvent>,
        rng: &mut StdRng,
    ) {
        let c = self.config.complexity.clamp(0.0, 1.0);
        if self.config.ghostnote_probability <= 0.0 || c <= 0.2 {
            return;
        }
        let Some((_, snare)) = grids.iter().find(|(class, _)| *class == DrumClass::Snare) else {
            return;
        };

        let probability = self.config.ghostnote_probability * (0.2 + 0.8 * c.powf(1.2));
        let velocity = if c > 0.6 { 50 } else { 45 };

        for i in 0..snare.len() {
            if snare[i] {
                continue;
            }
            let near_hit = snare
                .iter()
                .enumerate()
                .any(|(j, &h)| h && (i as i64 - j as i64).abs() <= 2);
            if near_hit && rng.gen::<f64>() < probability {
                events.push(DrumEvent {
                    time_sec: bar_start + i as f64 * step_len,
                    class: DrumClass::Snare,
                    velocity,
                });
            }
        }
    }
}

impl Default for DrumPatternGenerator {
    fn default() -> Self {
        Self::new(DrumGeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_spec() -> SongSpecification {
        SongSpecification::new("drum-test")
            .with_tempo(120.0)
            .with_bars(8)
            .with_style("pop_straight")
            .with_seed(1234)
    }

    fn config(complexity: f64, ghost: f64, pause: f64) -> DrumGeneratorConfig {
        DrumGeneratorConfig {
            complexity,
            ghostnote_probability: ghost,
            fill_probability: 0.0,
            swing_amount: 0.0,
            pause_probability: pause,
        }
    }

    #[test]
    fn test_deterministic_output() {
        let generator = DrumPatternGenerator::default();
        let spec = test_spec();
        assert_eq!(
            generator.generate_drum_track(&spec),
            generator.generate_drum_track(&spec)
        );
    }

    #[test]
    fn test_events_within_duration() {
        let generator = DrumPatternGenerator::default();
        let spec = test_spec();
        let duration = spec.duration_seconds();
        for event in generator.generate_drum_track(&spec) {
            assert!(event.time_sec >= 0.0);
            assert!(event.time_sec < duration);
            assert!(event.velocity >= 1);
        }
    }

    #[test]
    fn test_zero_complexity_keeps_library_steps() {
        // With complexity 0 and no pauses, every event must sit exactly
        // on a library step of its bar.
        let generator = DrumPatternGenerator::new(config(0.0, 0.0, 0.0));
        let spec = test_spec();
        let step = spec.timing().seconds_per_bar / STEP_RESOLUTION as f64;
        for event in generator.generate_drum_track(&spec) {
            let steps = event.time_sec / step;
            assert!((steps - steps.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ghost_notes_suppressed_at_low_complexity() {
        // Below the 0.2 complexity gate no ghosts appear no matter how
        // high the probability is.
        let generator = DrumPatternGenerator::new(config(0.1, 0.9, 0.0));
        let events = generator.generate_drum_track(&test_spec());
        assert!(events
            .iter()
            .filter(|e| e.class == DrumClass::Snare)
            .all(|e| e.velocity == base_velocity(DrumClass::Snare)));
    }

    #[test]
    fn test_ghost_notes_appear_at_high_complexity() {
        let generator = DrumPatternGenerator::new(config(0.9, 1.0, 0.0));
        let events = generator.generate_drum_track(&test_spec());
        assert!(events
            .iter()
            .any(|e| e.class == DrumClass::Snare && e.velocity == 50));
    }

    #[test]
    fn test_pause_silences_contiguous_window() {
        // pause_probability 1.0 forces a silenced window even though all
        // complexity-gated mutations are off.
        let generator = DrumPatternGenerator::new(config(0.0, 0.0, 1.0));
        for seed in 0..8 {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let mut grids: BarGrids = vec![(DrumClass::Kick, vec![true; STEP_RESOLUTION])];
            generator.insert_pause(&mut grids, &mut rng);
            let cleared = grids[0].1.iter().filter(|&&h| !h).count();
            assert!(PAUSE_LENGTHS.contains(&cleared));
            let first = grids[0].1.iter().position(|&h| !h).unwrap();
            assert!(grids[0].1[first..first + cleared].iter().all(|&h| !h));
        }
    }

    #[test]
    fn test_selection_weight_biases() {
        // Low complexity favors sparse patterns, high favors dense.
        let sparse_low = DrumPatternGenerator::selection_weight(0.2, 0.0);
        let dense_low = DrumPatternGenerator::selection_weight(0.9, 0.0);
        assert!(sparse_low > dense_low);

        let sparse_high = DrumPatternGenerator::selection_weight(0.2, 1.0);
        let dense_high = DrumPatternGenerator::selection_weight(0.9, 1.0);
        assert!(dense_high > sparse_high);
    }

    #[test]
    fn test_density_rises_with_complexity() {
        // Averaged over seeds, higher complexity produces more hits.
        let low = DrumPatternGenerator::new(config(0.1, 0.0, 0.0));
        let high = DrumPatternGenerator::new(config(0.9, 0.0, 0.0));
        let mut low_total = 0usize;
        let mut high_total = 0usize;
        for seed in 0..40 {
            let spec = test_spec().with_seed(seed);
            low_total += low.generate_drum_track(&spec).len();
            high_total += high.generate_drum_track(&spec).len();
        }
        assert!(high_total > low_total);
    }

    #[test]
    fn test_shift_drops_out_of_range() {
        let mut steps = vec![true, false, false, false, false, false, false, true];
        DrumPatternGenerator::shift_steps(&mut steps, 2);
        assert_eq!(
            steps,
            vec![false, false, true, false, false, false, false, false]
        );
    }

    #[test]
    fn test_fill_run_and_crash() {
        let generator = DrumPatternGenerator::new(config(0.5, 0.0, 0.0));
        let spec = test_spec();
        let events = generator.generate_fill(&spec, 3..4);
        let last = events.last().unwrap();
        assert_eq!(last.class, DrumClass::Crash);
        assert!((last.time_sec - 4.0 * spec.timing().seconds_per_bar).abs() < 1e-9);
        assert!(events
            .iter()
            .take(events.len() - 1)
            .all(|e| matches!(
                e.class,
                DrumClass::TomLow | DrumClass::TomMid | DrumClass::TomHigh
            )));
    }

    #[test]
    fn test_fill_tom_rotation_is_fill_local() {
        // The tom cycle restarts at every fill, so a fill sounds the
        // same wherever it sits in the song.
        let generator = DrumPatternGenerator::new(config(0.0, 0.0, 0.0));
        let spec = test_spec();
        let early: Vec<DrumClass> = generator
            .generate_fill(&spec, 0..1)
            .iter()
            .map(|e| e.class)
            .collect();
        let late: Vec<DrumClass> = generator
            .generate_fill(&spec, 5..6)
            .iter()
            .map(|e| e.class)
            .collect();
        assert_eq!(early, late);
        assert_eq!(early[0], DrumClass::TomLow);
    }

    #[test]
    fn test_hat_opening_moves_distinct_steps() {
        // A full closed-hat grid at complexity 1.0 opens exactly
        // round(16 x 0.2) steps, each cleared from the closed grid.
        let generator = DrumPatternGenerator::new(config(1.0, 0.0, 0.0));
        let mut openings = 0;
        for seed in 0..40 {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let mut grids: BarGrids =
                vec![(DrumClass::HhClosed, vec![true; STEP_RESOLUTION])];
            generator.open_closed_hat(&mut grids, &mut rng);
            let Some((_, open)) = grids
                .iter()
                .find(|(class, _)| *class == DrumClass::HhOpen)
            else {
                continue;
            };
            openings += 1;
            assert_eq!(open.iter().filter(|&&h| h).count(), 3);
            let closed = &grids[0].1;
            for i in 0..STEP_RESOLUTION {
                assert!(!(closed[i] && open[i]), "step {} both open and closed", i);
            }
        }
        assert!(openings > 0);
    }

    #[test]
    fn test_humanize_timing_bounds() {
        let generator = DrumPatternGenerator::new(DrumGeneratorConfig {
            swing_amount: 1.0,
            ..config(0.5, 0.0, 0.0)
        });
        let spec = test_spec();
        let events = generator.generate_drum_track(&spec);
        let mut rng = rand::rngs::StdRng::seed_from_u64(9);
        let shifted = generator.humanize_timing(&events, &mut rng);
        assert_eq!(events.len(), shifted.len());
        for (before, after) in events.iter().zip(&shifted) {
            assert!((before.time_sec - after.time_sec).abs() <= 0.02 + 1e-9);
            assert!(after.time_sec >= 0.0);
        }
    }

    #[test]
    fn test_humanize_velocity_bounds() {
        let generator = DrumPatternGenerator::default();
        let spec = test_spec();
        let events = generator.generate_drum_track(&spec);
        let mut rng = rand::rngs::StdRng::seed_from_u64(9);
        for event in generator.humanize_velocity(&events, &mut rng) {
            assert!(event.velocity >= 1);
            assert!(event.velocity <= 127);
        }
    }
}
