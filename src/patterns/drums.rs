// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Style-keyed drum pattern libraries.
//!
//! Each style ships a library of named bar patterns. A pattern maps drum
//! classes to 16-step hit strings (`x` = hit, `-` = rest). Libraries are
//! immutable shared data; the generator mutates per-bar copies only.

use crate::music::DrumClass;

/// Steps per bar in every library pattern.
pub const STEP_RESOLUTION: usize = 16;

/// One named bar pattern: drum class -> 16-step hit string.
#[derive(Debug, Clone, Copy)]
pub struct DrumPattern {
    pub name: &'static str,
    pub voices: &'static [(DrumClass, &'static str)],
}

impl DrumPattern {
    /// Total number of hits across all voices
    pub fn density(&self) -> usize {
        self.voices
            .iter()
            .map(|(_, steps)| steps.bytes().filter(|&b| b == b'x').count())
            .sum()
    }

    /// Hit string for a voice, if the pattern uses it
    pub fn steps_for(&self, class: DrumClass) -> Option<&'static str> {
        self.voices
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, steps)| *steps)
    }
}

/// Select the pattern library for a style name.
///
/// Matching is case-insensitive on a normalized name (hyphens become
/// underscores) and checks the most specific style substrings first, so
/// "funk_pop" wins over "funk" and "pop_rock" over "rock". Unrecognized
/// styles fall back to the straight-pop library.
pub fn library_for_style(style: &str) -> &'static [DrumPattern] {
    let normalized = style.to_lowercase().replace('-', "_");
    let matchers: [(&str, &'static [DrumPattern]); 12] = [
        ("dance_pop", DANCE_POP),
        ("disco", DISCO),
        ("electropop", ELECTROPOP),
        ("funk_pop", FUNK_POP),
        ("half_time_shuffle", HALF_TIME_SHUFFLE),
        ("indie_pop", INDIE_POP),
        ("latin_pop", LATIN_POP),
        ("pop_rock", POP_ROCK),
        ("rnb_pop", RNB_POP),
        ("synth_pop", SYNTH_POP),
        ("funk", FUNK),
        ("rock", ROCK),
    ];
    for (needle, library) in matchers {
        if normalized.contains(needle) {
            return library;
        }
    }
    POP_STRAIGHT
}

pub static POP_STRAIGHT: &[DrumPattern] = &[
    DrumPattern {
        name: "pop_straight_01_basic",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_straight_02_kick_syncopated",
        voices: &[
            (DrumClass::Kick, "x-----x-x-----x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::Crash, "x---------------"),
        ],
    },
    DrumPattern {
        name: "pop_straight_03_drive",
        voices: &[
            (DrumClass::Kick, "x-x-----x-x-----"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "--------------x-"),
        ],
    },
    DrumPattern {
        name: "pop_straight_04_syncopated",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x----"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_straight_05_16th_hats",
        voices: &[
            (DrumClass::Kick, "x--x--x-x-----x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "pop_straight_06_sidestick_verse",
        voices: &[
            (DrumClass::Kick, "x-----x-x-------"),
            (DrumClass::Snare, "------------x---"),
            (DrumClass::Sidestick, "----x-----------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_straight_07_pre_chorus",
        voices: &[
            (DrumClass::Kick, "x--x--x-x-x---x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "-------------x--"),
        ],
    },
    DrumPattern {
        name: "pop_straight_08_chorus_four_on_floor",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Ride, "x-x-x-x-x-x-x-x-"),
            (DrumClass::Crash, "x---------------"),
        ],
    },
    DrumPattern {
        name: "pop_straight_09_tom_pickup",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::TomLow, "------------x---"),
            (DrumClass::TomMid, "-------------x--"),
            (DrumClass::TomHigh, "--------------x-"),
        ],
    },
    DrumPattern {
        name: "pop_straight_10_broken_hats",
        voices: &[
            (DrumClass::Kick, "x-----x-x-----x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
];

pub static DANCE_POP: &[DrumPattern] = &[
    DrumPattern {
        name: "dance_pop_01_four_on_floor_basic",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "dance_pop_02_four_on_floor_offhats",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "-x-x-x-x-x-x-x-x"),
        ],
    },
    DrumPattern {
        name: "dance_pop_03_synced_kicks",
        voices: &[
            (DrumClass::Kick, "x-x---x-x---x-x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "dance_pop_04_crash_on_one",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::Crash, "x---------------"),
        ],
    },
    DrumPattern {
        name: "dance_pop_05_build_up_eights",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "dance_pop_06_break_with_clap",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "----x---x---x---"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "dance_pop_07_prechorus_light",
        voices: &[
            (DrumClass::Kick, "x---x-------x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-------x-x---"),
        ],
    },
    DrumPattern {
        name: "dance_pop_08_drop_dense_kick",
        voices: &[
            (DrumClass::Kick, "x-x-x-x---x-x-x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "dance_pop_09_open_hat_chorus",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "----x-------x---"),
        ],
    },
    DrumPattern {
        name: "dance_pop_10_tom_fill_turnaround",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::TomLow, "------------x---"),
            (DrumClass::TomMid, "--------------x-"),
        ],
    },
];

pub static DISCO: &[DrumPattern] = &[
    DrumPattern {
        name: "disco_01_classic",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
        ],
    },
    DrumPattern {
        name: "disco_02_pure_offbeat_open",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x---x---x---x---"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
        ],
    },
    DrumPattern {
        name: "disco_03_ride_chorus",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Ride, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
        ],
    },
    DrumPattern {
        name: "disco_04_kick_anticipations",
        voices: &[
            (DrumClass::Kick, "x-xxx-xxx-xxx-xx"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
        ],
    },
    DrumPattern {
        name: "disco_05_snare_strong",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "disco_06_breakdown",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "------------x---"),
            (DrumClass::HhClosed, "----------------"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
        ],
    },
    DrumPattern {
        name: "disco_07_buildup_16th",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
        ],
    },
    DrumPattern {
        name: "disco_08_big_chorus",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
            (DrumClass::Crash, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "disco_09_tom_fill",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
            (DrumClass::TomLow, "------------xx--"),
            (DrumClass::TomMid, "--------------xx"),
        ],
    },
    DrumPattern {
        name: "disco_10_ride_bell",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Ride, "-x-x-x-x-x-x-x-x"),
            (DrumClass::HhOpen, "-x-x-x-x-x-x-x-x"),
        ],
    },
];

pub static ELECTROPOP: &[DrumPattern] = &[
    DrumPattern {
        name: "electropop_01_floor_open_hat",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "----x-------x---"),
        ],
    },
    DrumPattern {
        name: "electropop_02_busy_kicks",
        voices: &[
            (DrumClass::Kick, "x-x-x-x-x-x-x-x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "electropop_03_build_constant_hats",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "electropop_04_snare_roll_end",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------xxxx"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "electropop_05_half_time_drop",
        voices: &[
            (DrumClass::Kick, "x-------x-----x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "electropop_06_sidechain_like",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x--x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "electropop_07_clap_on_234",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x---x---x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "electropop_08_crash_and_ride",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Crash, "x---------------"),
            (DrumClass::Ride, "----x---x---x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "electropop_09_sparse_verse",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "electropop_10_pre_drop_fill",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x-xx"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
];

pub static FUNK_POP: &[DrumPattern] = &[
    DrumPattern {
        name: "funk_pop_01_syncopated",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x-x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "funk_pop_02_snare_offbeat",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-x---"),
            (DrumClass::Snare, "--x---x-----x-x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "funk_pop_03_busydrums",
        voices: &[
            (DrumClass::Kick, "x-x-x---x-x---x-"),
            (DrumClass::Snare, "--x---x---x---x-"),
            (DrumClass::HhClosed, "x-xx-xx-xx-xx-x-"),
        ],
    },
    DrumPattern {
        name: "funk_pop_04_minimal_hat",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x-x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "funk_pop_05_tight_verse",
        voices: &[
            (DrumClass::Kick, "x--x----x--x----"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "funk_pop_06_chorus_open_hat",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x-x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "----x-------x---"),
        ],
    },
    DrumPattern {
        name: "funk_pop_07_tom_answer",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x-x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::TomLow, "------x---------"),
            (DrumClass::TomMid, "------------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "funk_pop_08_ghost_grid",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x-x--"),
            (DrumClass::Snare, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "funk_pop_09_half_time_chorus",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x-x--"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "funk_pop_10_fill_on_last_bar",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x-x--"),
            (DrumClass::Snare, "----x-------xxxx"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::TomLow, "--------------x-"),
        ],
    },
];

pub static FUNK: &[DrumPattern] = &[
    DrumPattern {
        name: "funk_01_basic",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x--x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "funk_02_linear_flavor",
        voices: &[
            (DrumClass::Kick, "x-xx----x-xx----"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "-x-xx-x--x-xx-x-"),
        ],
    },
    DrumPattern {
        name: "funk_03_ghosts_between",
        voices: &[
            (DrumClass::Kick, "x-----x-x--x----"),
            (DrumClass::Snare, "----x-x---x-x-x-"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "funk_04_open_hat_offbeats",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x--x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "------x-------x-"),
        ],
    },
    DrumPattern {
        name: "funk_05_sparse_hat_busy_kick",
        voices: &[
            (DrumClass::Kick, "x-xx-x-xx-xx-x-x"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "funk_06_snare_displaced",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x--x-"),
            (DrumClass::Snare, "-----x----x-x--x"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "funk_07_hat_barks",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x--x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
            (DrumClass::HhOpen, "---x--x----x--x-"),
        ],
    },
    DrumPattern {
        name: "funk_08_tom_linear",
        voices: &[
            (DrumClass::Kick, "x--x----x--x----"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
            (DrumClass::TomLow, "--------xx------"),
            (DrumClass::TomMid, "----------xx----"),
        ],
    },
    DrumPattern {
        name: "funk_09_busy_hands",
        voices: &[
            (DrumClass::Kick, "x-----x-x-----x-"),
            (DrumClass::Snare, "--x-x-x--x-xx-x-"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "funk_10_ghost_ladder",
        voices: &[
            (DrumClass::Kick, "x-xx--x-x-xx--x-"),
            (DrumClass::Snare, "--x-x-xx--x-x-xx"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
];

pub static HALF_TIME_SHUFFLE: &[DrumPattern] = &[
    DrumPattern {
        name: "shuffle_01_basic_half_time",
        voices: &[
            (DrumClass::Kick, "x-------x-----x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "shuffle_02_rosanna_flavor",
        voices: &[
            (DrumClass::Kick, "x-x-----x-x---x-"),
            (DrumClass::Snare, "------x-x-x---x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "shuffle_03_purdie_like",
        voices: &[
            (DrumClass::Kick, "x-----x-x-----x-"),
            (DrumClass::Snare, "--x--x-xx-x--x-x"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "shuffle_04_light_verse",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-----x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "shuffle_05_heavy_chorus",
        voices: &[
            (DrumClass::Kick, "x-x-----x-x---x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::Crash, "--------x-------"),
        ],
    },
    DrumPattern {
        name: "shuffle_06_tom_fill",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::TomLow, "---------xx-----"),
            (DrumClass::TomMid, "----------xx----"),
        ],
    },
    DrumPattern {
        name: "shuffle_07_ride",
        voices: &[
            (DrumClass::Kick, "x-------x-----x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::Ride, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "shuffle_08_ghost_ladder",
        voices: &[
            (DrumClass::Kick, "x-x-----x-x---x-"),
            (DrumClass::Snare, "--x-x-xxx-x-x-xx"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "shuffle_09_straight_kick_shuffled_hat",
        voices: &[
            (DrumClass::Kick, "x-----x-x-----x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "shuffle_10_breakdown",
        voices: &[
            (DrumClass::Kick, "x---------------"),
            (DrumClass::Snare, "--x-x-x-x---x-x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
];

pub static INDIE_POP: &[DrumPattern] = &[
    DrumPattern {
        name: "indie_pop_01_simple_groove",
        voices: &[
            (DrumClass::Kick, "x-----x---x-----"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "indie_pop_02_open_hat_chorus",
        voices: &[
            (DrumClass::Kick, "x---x-----x---x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "----x---x-------"),
        ],
    },
    DrumPattern {
        name: "indie_pop_03_tom_groove",
        voices: &[
            (DrumClass::Kick, "x---x-----x---x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::TomLow, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "indie_pop_04_lofi_verse",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "indie_pop_05_syncopated_kick",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "indie_pop_06_crash_intro",
        voices: &[
            (DrumClass::Kick, "x---x-------x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Crash, "x---------------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "indie_pop_07_ride_chorus",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Ride, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "indie_pop_08_sparse_toms",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::TomLow, "----x-----------"),
            (DrumClass::TomMid, "------------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "indie_pop_09_half_time",
        voices: &[
            (DrumClass::Kick, "x-------x-----x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "indie_pop_10_end_fill",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x-xx"),
            (DrumClass::TomLow, "--------------x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
];

pub static LATIN_POP: &[DrumPattern] = &[
    DrumPattern {
        name: "latin_pop_01_clave_like",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "----x-----x---x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "latin_pop_02_tom_groove",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::TomLow, "----x-----x---x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "latin_pop_03_open_hat_offbeat",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "----x-----x---x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "----x-----x-----"),
        ],
    },
    DrumPattern {
        name: "latin_pop_04_samba_flavor",
        voices: &[
            (DrumClass::Kick, "x-x---x-x---x---"),
            (DrumClass::Snare, "----x-----x---x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "latin_pop_05_percussive_toms",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::TomLow, "--x-----x-----x-"),
            (DrumClass::TomMid, "------x-----x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "latin_pop_06_crash_intro",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "----x-----x---x-"),
            (DrumClass::Crash, "x---------------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "latin_pop_07_ride_pattern",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "----x-----x---x-"),
            (DrumClass::Ride, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "latin_pop_08_sparse_verse",
        voices: &[
            (DrumClass::Kick, "x--------x------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "latin_pop_09_half_time",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "latin_pop_10_fill_turnaround",
        voices: &[
            (DrumClass::Kick, "x--x--x---x-----"),
            (DrumClass::Snare, "----x-----x--xx-"),
            (DrumClass::TomLow, "------------x---"),
            (DrumClass::TomMid, "--------------x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
];

pub static POP_ROCK: &[DrumPattern] = &[
    DrumPattern {
        name: "pop_rock_01_standard_rock",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_rock_02_drive_eights",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "pop_rock_03_double_kick",
        voices: &[
            (DrumClass::Kick, "x--x-x--x--x-x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_rock_04_crash_on_chorus",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Crash, "x---------------"),
            (DrumClass::HhClosed, "-x-x-x-x-x-x-x-x"),
        ],
    },
    DrumPattern {
        name: "pop_rock_05_tom_build",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::TomLow, "----x-----x---x-"),
            (DrumClass::TomMid, "------x-----x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_rock_06_half_time",
        voices: &[
            (DrumClass::Kick, "x-------x-----x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_rock_07_ride_chorus",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Ride, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_rock_08_verse_sparse",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "pop_rock_09_fill_end",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------xxxx"),
            (DrumClass::TomLow, "----------x-x-x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "pop_rock_10_double_time_bridge",
        voices: &[
            (DrumClass::Kick, "x-x-x-x-x-x-x-x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
];

pub static RNB_POP: &[DrumPattern] = &[
    DrumPattern {
        name: "rnb_pop_01_laid_back",
        voices: &[
            (DrumClass::Kick, "x-----x---x--x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_02_half_time",
        voices: &[
            (DrumClass::Kick, "x-------x-----x-"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_03_ghost_snare",
        voices: &[
            (DrumClass::Kick, "x-----x-x---x---"),
            (DrumClass::Snare, "--x--x---x---x--"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_04_sparse_verse",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_05_triplet_flavor",
        voices: &[
            (DrumClass::Kick, "x--x--x-----x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_06_clap_backbeat",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_07_snare_on_a",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "---x---x---x----"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_08_hat_groove",
        voices: &[
            (DrumClass::Kick, "x-----x---x--x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xx-xxx-xxx-xxx-x"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_09_tom_pickups",
        voices: &[
            (DrumClass::Kick, "x-----x---x--x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::TomLow, "------x---------"),
            (DrumClass::TomMid, "------------x---"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "rnb_pop_10_bridge_half_time",
        voices: &[
            (DrumClass::Kick, "x-------x-----x-"),
            (DrumClass::Snare, "--x---x-x---x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
];

pub static ROCK: &[DrumPattern] = &[
    DrumPattern {
        name: "rock16_01_basic",
        voices: &[
            (DrumClass::Kick, "x-------x-----x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "rock16_02_syncopated",
        voices: &[
            (DrumClass::Kick, "x--x--x-x----x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "rock16_03_californication_like",
        voices: &[
            (DrumClass::Kick, "x--------x------"),
            (DrumClass::Snare, "----x-x---x--x-x"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "rock16_04_hat_accents",
        voices: &[
            (DrumClass::Kick, "x-----x-x-----x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-xxx-xxx-xxx-xx"),
        ],
    },
    DrumPattern {
        name: "rock16_05_broken_hat_riff",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x--x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x--x-xx-x--x-x"),
        ],
    },
    DrumPattern {
        name: "rock16_06_chorus_drive",
        voices: &[
            (DrumClass::Kick, "x-xx--x-x-xx--x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "rock16_07_half_time_feel",
        voices: &[
            (DrumClass::Kick, "x---x--x----x--x"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "rock16_08_pre_chorus_build",
        voices: &[
            (DrumClass::Kick, "x-----x-x-x-x-x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxx-xxxxxxx-xx"),
        ],
    },
    DrumPattern {
        name: "rock16_09_tom_groove",
        voices: &[
            (DrumClass::Kick, "x-------x--x----"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
            (DrumClass::TomLow, "--------xxxx----"),
        ],
    },
    DrumPattern {
        name: "rock16_10_ride_variant",
        voices: &[
            (DrumClass::Kick, "x--x--x-x--x--x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::Ride, "xxxxxxxxxxxxxxxx"),
            (DrumClass::HhOpen, "--------------x-"),
        ],
    },
];

pub static SYNTH_POP: &[DrumPattern] = &[
    DrumPattern {
        name: "synth_pop_01_80s_eight_hats",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "synth_pop_02_clap_on_234",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x---x---x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "synth_pop_03_sidechain_kick",
        voices: &[
            (DrumClass::Kick, "x--x-x--x--x-x--"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "synth_pop_04_snare_on_e",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "--x--x-----x--x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "synth_pop_05_open_hat_chorus",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::HhOpen, "----x-------x---"),
        ],
    },
    DrumPattern {
        name: "synth_pop_06_tom_build",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
            (DrumClass::TomLow, "--x-----x-----x-"),
            (DrumClass::TomMid, "------x-----x---"),
        ],
    },
    DrumPattern {
        name: "synth_pop_07_soft_verse",
        voices: &[
            (DrumClass::Kick, "x-------x-------"),
            (DrumClass::Snare, "--------x-------"),
            (DrumClass::HhClosed, "x---x---x---x---"),
        ],
    },
    DrumPattern {
        name: "synth_pop_08_drive_prechorus",
        voices: &[
            (DrumClass::Kick, "x---x-x-x---x-x-"),
            (DrumClass::Snare, "----x-------x---"),
            (DrumClass::HhClosed, "xxxxxxxxxxxxxxxx"),
        ],
    },
    DrumPattern {
        name: "synth_pop_09_syncopated_snare",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "--x-----x-----x-"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
    DrumPattern {
        name: "synth_pop_10_clap_fill",
        voices: &[
            (DrumClass::Kick, "x---x---x---x---"),
            (DrumClass::Snare, "----x-------xxxx"),
            (DrumClass::HhClosed, "x-x-x-x-x-x-x-x-"),
        ],
    },
];
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_are_sixteen_steps() {
        for library in [
            POP_STRAIGHT,
            DANCE_POP,
            DISCO,
            ELECTROPOP,
            FUNK,
            FUNK_POP,
            HALF_TIME_SHUFFLE,
            INDIE_POP,
            LATIN_POP,
            POP_ROCK,
            RNB_POP,
            ROCK,
            SYNTH_POP,
        ] {
            assert!(!library.is_empty());
            for pattern in library {
                for (class, steps) in pattern.voices {
                    assert_eq!(
                        steps.len(),
                        STEP_RESOLUTION,
                        "{} voice {:?}",
                        pattern.name,
                        class
                    );
                    assert!(steps.bytes().all(|b| b == b'x' || b == b'-'));
                }
            }
        }
    }

    #[test]
    fn test_style_matching_specificity() {
        assert_eq!(library_for_style("funk_pop")[0].name, FUNK_POP[0].name);
        assert_eq!(library_for_style("funk")[0].name, FUNK[0].name);
        assert_eq!(library_for_style("pop_rock")[0].name, POP_ROCK[0].name);
        assert_eq!(library_for_style("rock")[0].name, ROCK[0].name);
    }

    #[test]
    fn test_style_normalization_and_fallback() {
        assert_eq!(library_for_style("Dance-Pop")[0].name, DANCE_POP[0].name);
        assert_eq!(library_for_style("pop-straight")[0].name, POP_STRAIGHT[0].name);
        assert_eq!(library_for_style("no_such_style")[0].name, POP_STRAIGHT[0].name);
    }

    #[test]
    fn test_density() {
        let pattern = &POP_STRAIGHT[0];
        // 2 kicks + 2 snares + 8 closed hats
        assert_eq!(pattern.density(), 12);
        assert_eq!(pattern.steps_for(DrumClass::Kick), Some("x-------x-------"));
        assert_eq!(pattern.steps_for(DrumClass::Crash), None);
    }
}
