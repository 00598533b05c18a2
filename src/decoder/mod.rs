//! METAR decoder
//!
//! Turns a raw METAR report into plain-English weather fields and a short
//! summary. Decoding is pure and stateless: the same text always yields the
//! same result, and calls can run concurrently without coordination.
//!
//! ## Architecture
//!
//! - [`classifier`] - Recognises which field a token encodes
//! - [`fields`] - One decoder per field kind
//! - [`summary`] - Prioritized one-line summary
//!
//! A report is split on whitespace and every token, the station identifier
//! included, is classified and decoded in order. A later token for the same
//! field replaces an earlier one. Tokens that match nothing, or that match
//! but cannot be read, leave their field unset without affecting the rest.
//!
//! ## Usage
//!
//! ```rust
//! use metar_reader::decoder::decode;
//!
//! let result = decode("KHIO 061853Z 27008KT 10SM CLR 22/16 A3012").unwrap();
//! assert_eq!(result.details.station, "KHIO");
//! assert_eq!(
//!     result.summary,
//!     "clear skies, 72°F (22°C), Wind from the west at 8 knots"
//! );
//! ```

pub mod classifier;
pub mod fields;
pub mod summary;

#[cfg(test)]
mod tests;

pub use classifier::{TokenKind, classify};
pub use fields::{
    celsius_to_fahrenheit, decode_clouds, decode_visibility, decode_weather_phenomena,
    wind_direction_text,
};
pub use summary::compose_summary;

use crate::error::{MetarError, Result};
use crate::models::{DecodeResult, DecodedFields};
use tracing::{debug, warn};

/// Split a report into its whitespace-delimited groups
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Decode a raw METAR report
///
/// Returns [`MetarError::EmptyReport`] when the report has no tokens. Any
/// other input decodes to whichever fields could be read.
pub fn decode(raw: &str) -> Result<DecodeResult> {
    let tokens = tokenize(raw);
    let Some(station) = tokens.first() else {
        return Err(MetarError::EmptyReport);
    };

    let mut details = DecodedFields::new(*station);
    for token in &tokens {
        apply_token(&mut details, token);
    }

    debug!(
        "Decoded {} of 8 fields from {} tokens for {}",
        details.present().len(),
        tokens.len(),
        details.station
    );

    Ok(DecodeResult {
        summary: compose_summary(&details),
        details,
        raw: raw.to_string(),
    })
}

/// Classify one token and store its decoded text
fn apply_token(details: &mut DecodedFields, token: &str) {
    let Some(kind) = classify(token) else {
        return;
    };

    let stored = match kind {
        TokenKind::Time => fields::decode_time(token).map(|text| details.time = Some(text)),
        TokenKind::Wind => fields::decode_wind(token).map(|text| details.wind = Some(text)),
        TokenKind::Visibility => {
            fields::visibility_text(token).map(|text| details.visibility = Some(text))
        }
        TokenKind::Weather => {
            fields::decode_weather_phenomena(token).map(|text| details.weather = Some(text))
        }
        TokenKind::Clouds => fields::cloud_text(token).map(|text| details.clouds = Some(text)),
        TokenKind::Temperature => fields::decode_temperature(token).map(|text| {
            details.temperature = Some(text.temperature);
            details.dewpoint = Some(text.dewpoint);
        }),
        TokenKind::Pressure => {
            fields::decode_pressure(token).map(|text| details.pressure = Some(text))
        }
    };

    if stored.is_some() {
        debug!("Decoded {:?} token '{}'", kind, token);
    } else {
        warn!("Could not decode {:?} token '{}', field left unset", kind, token);
    }
}
