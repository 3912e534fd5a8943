// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Roman-numeral resolution.
//!
//! A roman numeral like `"vi"` or `"ii°"` resolves to a scale-degree
//! index (0-6) and a triad quality. Lowercase numerals are minor,
//! uppercase major; a `°`, `o` or `dim` marker overrides the quality to
//! diminished. A token that does not name a degree is a hard error: it
//! means a progression table is malformed, not that input data is bad.

use thiserror::Error;

use super::chord::ChordQuality;

/// Fatal harmony errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarmonyError {
    /// A progression table contains a token that is not a roman numeral.
    #[error("unknown roman numeral: {0:?}")]
    UnknownRomanNumeral(String),
}

/// Resolve a roman numeral to (degree index 0-6, quality).
pub fn parse_roman(roman: &str) -> Result<(usize, ChordQuality), HarmonyError> {
    let token = roman.trim();
    let lowered = token.to_lowercase();
    let is_dim = token.contains('°') || lowered.contains('o') || lowered.contains("dim");

    let base: String = token
        .replace('°', "")
        .replace("dim", "")
        .replace(['o', 'O', '+'], "");

    let quality = if is_dim {
        ChordQuality::Diminished
    } else if base.chars().all(|c| c.is_lowercase()) && !base.is_empty() {
        ChordQuality::Minor
    } else {
        ChordQuality::Major
    };

    let degree = match base.to_uppercase().as_str() {
        "I" => 0,
        "II" => 1,
        "III" => 2,
        "IV" => 3,
        "V" => 4,
        "VI" => 5,
        "VII" => 6,
        _ => return Err(HarmonyError::UnknownRomanNumeral(roman.to_string())),
    };

    Ok((degree, quality))
}
