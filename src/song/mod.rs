// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song parameters: the immutable per-song specification, instrument
//! descriptors, and band layout.

pub mod band;
pub mod instrument;
pub mod spec;

pub use band::BandConfiguration;
pub use instrument::{Instrument, Role, Timbre};
pub use spec::{SongSpecification, Timing};
