//! Error handling for METAR decoding and fetching.
//!
//! Decoding only ever fails on an empty report; every other problem degrades a
//! single field. Fetch failures of any kind collapse into `NotAvailable`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetarError {
    /// The report contained no tokens at all
    #[error("Unable to decode METAR")]
    EmptyReport,

    #[error("{reason}")]
    InvalidStation { reason: String },

    #[error("Could not fetch METAR for {station}. Please check the airport code.")]
    NotAvailable { station: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl MetarError {
    /// Create an invalid station error
    pub fn invalid_station(reason: impl Into<String>) -> Self {
        Self::InvalidStation {
            reason: reason.into(),
        }
    }

    /// Create a not-available error for a station
    pub fn not_available(station: impl Into<String>) -> Self {
        Self::NotAvailable {
            station: station.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetarError>;
