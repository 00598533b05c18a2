//! METAR Reader Library
//!
//! Decodes METAR aviation weather reports into plain-English weather fields
//! and a one-line summary.
//!
//! This library provides tools for:
//! - Decoding raw METAR text field by field, degrading gracefully on bad groups
//! - Composing a short prioritized summary of current conditions
//! - Validating ICAO station codes
//! - Fetching the latest raw report for a station from the Aviation Weather Center

pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod fetch;
pub mod models;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::MetarConfig;
pub use decoder::decode;
pub use error::{MetarError, Result};
pub use fetch::MetarClient;
pub use models::{DecodeResult, DecodedFields, StationCode};
