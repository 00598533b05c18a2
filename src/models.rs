//! Core data structures for METAR decoding.
//!
//! Defines the decoded field record, the decode result handed back to
//! callers, and the validated station code used by the fetcher.

use crate::constants::STATION_CODE_LENGTH;
use crate::error::{MetarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable fields decoded from a single report
///
/// Every slot except `station` stays `None` unless a token for it was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFields {
    /// Station identifier, verbatim from the first token
    pub station: String,
    pub time: Option<String>,
    pub wind: Option<String>,
    pub visibility: Option<String>,
    pub weather: Option<String>,
    pub clouds: Option<String>,
    pub temperature: Option<String>,
    pub dewpoint: Option<String>,
    pub pressure: Option<String>,
}

impl DecodedFields {
    /// Create an empty record for the given station
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            ..Default::default()
        }
    }

    /// Labelled view of the fields that were decoded, in report order
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            ("Time", &self.time),
            ("Wind", &self.wind),
            ("Visibility", &self.visibility),
            ("Weather", &self.weather),
            ("Clouds", &self.clouds),
            ("Temperature", &self.temperature),
            ("Dewpoint", &self.dewpoint),
            ("Pressure", &self.pressure),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// Outcome of decoding a non-empty report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResult {
    /// Short prioritized description of current conditions
    pub summary: String,
    pub details: DecodedFields,
    /// The original report text
    pub raw: String,
}

/// A validated four-character ICAO station identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Normalize user input and check it looks like an ICAO identifier
    pub fn parse(input: &str) -> Result<Self> {
        let code = input.trim().to_uppercase();

        if code.is_empty() {
            return Err(MetarError::invalid_station("Please enter an airport code"));
        }

        if code.chars().count() != STATION_CODE_LENGTH {
            return Err(MetarError::invalid_station(format!(
                "Airport code must be {} characters (e.g., KHIO)",
                STATION_CODE_LENGTH
            )));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
