// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! End-to-end tests: generators plus score assembly.

use songgen::generators::drums::DrumGeneratorConfig;
use songgen::music::DrumClass;
use songgen::song::{BandConfiguration, Instrument, Role};
use songgen::{
    DrumPatternGenerator, HarmonyGenerator, Score, ScoreAssembler, SongSpecification,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn small_band() -> BandConfiguration {
    BandConfiguration::new(vec![
        Instrument::new("Acoustic Grand Piano", 0, 0, Role::Chords),
        Instrument::new("Electric Bass (finger)", 33, 6, Role::Bass),
        Instrument::new("String Ensemble 1", 48, 8, Role::Pad),
        Instrument::new("Lead 1 (square)", 80, 10, Role::Lead),
    ])
}

fn generate_score(spec: &SongSpecification) -> Score {
    let drums = DrumPatternGenerator::new(DrumGeneratorConfig::default());
    let harmony = HarmonyGenerator::new();
    let drum_events = drums.generate_drum_track(spec);
    let note_events = harmony.generate_tracks(spec).unwrap();
    ScoreAssembler::new().assemble(spec, &note_events, &drum_events)
}

#[test]
fn test_full_pipeline_is_deterministic() {
    let spec = SongSpecification::new("0001_C-major_pop")
        .with_bars(8)
        .with_seed(1234)
        .with_band(small_band());
    assert_eq!(generate_score(&spec), generate_score(&spec));
}

#[test]
fn test_different_seeds_differ() {
    let base = SongSpecification::new("seeds").with_band(small_band());
    let a = generate_score(&base.clone().with_seed(1));
    let b = generate_score(&base.with_seed(2));
    assert_ne!(a, b);
}

#[test]
fn test_all_events_within_song_duration() {
    let spec = SongSpecification::new("bounds")
        .with_tempo(96.0)
        .with_bars(16)
        .with_key("A minor")
        .with_style("funk")
        .with_seed(99)
        .with_band(small_band());
    let score = generate_score(&spec);
    let duration = spec.duration_seconds();
    assert!(score.note_count() > 0);
    for track in &score.tracks {
        for note in &track.notes {
            assert!(note.start_time >= 0.0);
            assert!(note.end_time > note.start_time);
            assert!(
                note.start_time < duration + 1e-6,
                "note at {} exceeds duration {}",
                note.start_time,
                duration
            );
            assert!(note.velocity >= 1 && note.velocity <= 127);
        }
    }
}

#[test]
fn test_track_order_and_channels() {
    let spec = SongSpecification::new("order").with_band(small_band());
    let score = generate_score(&spec);
    let channels: Vec<u8> = score.tracks.iter().map(|t| t.channel).collect();
    assert_eq!(channels, vec![0, 6, 8, 10, 9]);
    let drum_track = score.tracks.last().unwrap();
    assert!(drum_track.is_drums);
    // Every drum note is a mapped GM percussion note.
    for note in &drum_track.notes {
        assert!(note.pitch >= 22 && note.pitch <= 53);
    }
}

#[test]
fn test_moving_one_instrument_leaves_others_untouched() {
    let spec_a = SongSpecification::new("iso")
        .with_seed(777)
        .with_band(small_band());

    let mut band = small_band();
    band.instruments[3].channel = 11; // move the lead
    let spec_b = SongSpecification::new("iso").with_seed(777).with_band(band);

    let bass_a = generate_score(&spec_a)
        .tracks
        .iter()
        .find(|t| t.channel == 6)
        .unwrap()
        .notes
        .clone();
    let bass_b = generate_score(&spec_b)
        .tracks
        .iter()
        .find(|t| t.channel == 6)
        .unwrap()
        .notes
        .clone();
    assert_eq!(bass_a, bass_b);
}

#[test]
fn test_minimal_pop_song() {
    let band = BandConfiguration::new(vec![
        Instrument::new("Acoustic Grand Piano", 0, 0, Role::Chords),
        Instrument::new("Electric Bass (finger)", 33, 6, Role::Bass),
    ]);
    let spec = SongSpecification::new("0001_C-major_pop-straight")
        .with_tempo(120.0)
        .with_time_signature(4, 4)
        .with_bars(4)
        .with_key("C major")
        .with_style("pop-straight")
        .with_seed(1234)
        .with_band(band);

    let harmony = HarmonyGenerator::new();
    let progression = harmony.choose_chord_progression(&spec);
    assert_eq!(progression.len(), 4);

    let score = generate_score(&spec);
    assert_eq!(score.tracks.len(), 3);
    assert!((score.duration_seconds - 8.0).abs() < 1e-9);

    let bass = score.tracks.iter().find(|t| t.channel == 6).unwrap();
    assert!(bass.notes.len() >= 4);

    // Every drum hit lands on a primary GM percussion note.
    let drums = score.drum_track().unwrap();
    assert!(!drums.notes.is_empty());
    for note in &drums.notes {
        assert!(
            [36, 37, 38, 42, 43, 46, 47, 49, 50, 51].contains(&note.pitch),
            "unexpected drum note {}",
            note.pitch
        );
    }

    // The straight-pop library carries more voices than a bare
    // kick/snare/hat groove; pin the exact class set this seed selects.
    let drum_events =
        DrumPatternGenerator::new(DrumGeneratorConfig::default()).generate_drum_track(&spec);
    let classes: std::collections::BTreeSet<DrumClass> =
        drum_events.iter().map(|e| e.class).collect();
    assert_eq!(
        classes,
        std::collections::BTreeSet::from([
            DrumClass::Kick,
            DrumClass::Snare,
            DrumClass::Sidestick,
            DrumClass::HhClosed,
            DrumClass::HhOpen,
            DrumClass::Crash,
        ])
    );
}

#[test]
fn test_pitches_stay_near_role_registers() {
    // Every rendered pitch is register + scale offset + chord interval
    // or approach offset, so each role stays inside a two-octave band
    // around its base register across keys and seeds.
    let harmony = HarmonyGenerator::new();
    for key in ["C major", "F major", "G major", "A minor", "E minor"] {
        for seed in 0..6 {
            let spec = SongSpecification::new("closure")
                .with_bars(8)
                .with_key(key)
                .with_seed(seed)
                .with_band(small_band());
            let events = harmony.generate_tracks(&spec).unwrap();
            assert!(!events.is_empty());
            for event in &events {
                let (low, high) = match event.channel {
                    0 => (24, 96),  // chords around C3
                    6 => (12, 60),  // bass around C2
                    8 => (36, 86),  // pad around C3/C4
                    10 => (36, 84), // lead around C4
                    other => panic!("unexpected channel {}", other),
                };
                assert!(
                    event.pitch >= low && event.pitch <= high,
                    "{} pitch {} outside [{}, {}] on channel {}",
                    key,
                    event.pitch,
                    low,
                    high,
                    event.channel
                );
            }
        }
    }
}

#[test]
fn test_progressions_vary_with_seed() {
    let harmony = HarmonyGenerator::new();
    let base = SongSpecification::new("var").with_bars(4);
    let mut distinct = std::collections::HashSet::new();
    for seed in 0..40 {
        distinct.insert(harmony.choose_chord_progression(&base.clone().with_seed(seed)));
    }
    assert!(distinct.len() >= 2);
}

#[test]
fn test_random_band_pipeline() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let pool = BandConfiguration::standard_pool();
    let mut rng = StdRng::seed_from_u64(2026);
    let band = BandConfiguration::choose_random_band(&mut rng, &pool, 4, 8).unwrap();
    let spec = SongSpecification::new("random-band")
        .with_seed(31)
        .with_band(band);
    let score = generate_score(&spec);
    assert!(score.note_count() > 0);
    assert!(score.tracks.last().unwrap().is_drums);
}

#[test]
fn test_humanization_preserves_event_count() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let spec = SongSpecification::new("human").with_band(small_band());
    let generator = DrumPatternGenerator::new(DrumGeneratorConfig::default());
    let events = generator.generate_drum_track(&spec);

    let mut rng = StdRng::seed_from_u64(5);
    let timed = generator.humanize_timing(&events, &mut rng);
    let scaled = generator.humanize_velocity(&timed, &mut rng);
    assert_eq!(events.len(), scaled.len());
    for note in &scaled {
        assert!(note.time_sec >= 0.0);
        assert!(note.velocity >= 1 && note.velocity <= 127);
    }
}

#[test]
fn test_fill_covers_requested_bars() {
    let spec = SongSpecification::new("fill").with_bars(8);
    let generator = DrumPatternGenerator::new(DrumGeneratorConfig::default());
    let events = generator.generate_fill(&spec, 6..8);
    let bar_len = spec.timing().seconds_per_bar;

    let toms = [DrumClass::TomLow, DrumClass::TomMid, DrumClass::TomHigh];
    assert!(events.iter().any(|e| toms.contains(&e.class)));
    let crash = events.last().unwrap();
    assert_eq!(crash.class, DrumClass::Crash);
    assert!((crash.time_sec - 8.0 * bar_len).abs() < 1e-9);
    for event in &events {
        assert!(event.time_sec >= 6.0 * bar_len - 1e-9);
    }
}

#[test]
fn test_unknown_key_and_style_still_generate() {
    init_tracing();
    let spec = SongSpecification::new("fallbacks")
        .with_key("H hyperlydian")
        .with_style("zydeco")
        .with_band(small_band());
    let score = generate_score(&spec);
    assert!(score.note_count() > 0);
}

#[test]
fn test_score_serializes() {
    let spec = SongSpecification::new("serde").with_bars(2).with_band(small_band());
    let score = generate_score(&spec);
    let json = serde_json::to_string(&score).unwrap();
    let back: Score = serde_json::from_str(&json).unwrap();
    assert_eq!(score, back);
}
