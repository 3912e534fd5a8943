// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Benchmarks for full-song generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use songgen::generators::drums::DrumGeneratorConfig;
use songgen::song::{BandConfiguration, Instrument, Role};
use songgen::{DrumPatternGenerator, HarmonyGenerator, ScoreAssembler, SongSpecification};

fn bench_spec() -> SongSpecification {
    let band = BandConfiguration::new(vec![
        Instrument::new("Acoustic Grand Piano", 0, 0, Role::Chords),
        Instrument::new("Electric Bass (finger)", 33, 6, Role::Bass),
        Instrument::new("String Ensemble 1", 48, 8, Role::Pad),
        Instrument::new("Trumpet", 56, 11, Role::Lead),
    ]);
    SongSpecification::new("bench")
        .with_tempo(120.0)
        .with_bars(16)
        .with_band(band)
}

fn bench_drum_track(c: &mut Criterion) {
    let spec = bench_spec();
    let generator = DrumPatternGenerator::new(DrumGeneratorConfig::default());
    c.bench_function("drum_track_16_bars", |b| {
        b.iter(|| generator.generate_drum_track(black_box(&spec)))
    });
}

fn bench_harmony_tracks(c: &mut Criterion) {
    let spec = bench_spec();
    let generator = HarmonyGenerator::new();
    c.bench_function("harmony_tracks_16_bars", |b| {
        b.iter(|| generator.generate_tracks(black_box(&spec)))
    });
}

fn bench_full_song(c: &mut Criterion) {
    let spec = bench_spec();
    let drums = DrumPatternGenerator::new(DrumGeneratorConfig::default());
    let harmony = HarmonyGenerator::new();
    let assembler = ScoreAssembler::new();
    c.bench_function("full_song_16_bars", |b| {
        b.iter(|| {
            let drum_events = drums.generate_drum_track(black_box(&spec));
            let note_events = harmony.generate_tracks(black_box(&spec)).unwrap();
            assembler.assemble(&spec, &note_events, &drum_events)
        })
    });
}

criterion_group!(
    benches,
    bench_drum_track,
    bench_harmony_tracks,
    bench_full_song
);
criterion_main!(benches);
