//! Raw report fetching from the Aviation Weather Center API.
//!
//! One GET per call with the configured timeout and no retry. Transport
//! errors, HTTP error statuses, empty bodies and the API's "no METAR" reply
//! all surface as [`MetarError::NotAvailable`]; the cause is only logged.

use crate::config::MetarConfig;
use crate::constants::NO_DATA_SENTINEL;
use crate::error::{MetarError, Result};
use crate::models::StationCode;
use reqwest::Client;
use tracing::{debug, info, warn};

/// HTTP client for the METAR endpoint
#[derive(Debug, Clone)]
pub struct MetarClient {
    client: Client,
    config: MetarConfig,
}

impl MetarClient {
    /// Build a client from validated configuration
    pub fn new(config: MetarConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| MetarError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &MetarConfig {
        &self.config
    }

    /// Request URL for a station
    pub fn report_url(&self, station: &StationCode) -> String {
        format!(
            "{}?ids={}",
            self.config.api_base_url.trim_end_matches('/'),
            station
        )
    }

    /// Fetch the latest raw report for a station
    pub async fn fetch_raw_report(&self, station: &StationCode) -> Result<String> {
        let url = self.report_url(station);
        debug!("Requesting {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request for {} failed: {}", station, e);
                return Err(MetarError::not_available(station.as_str()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("METAR API returned {} for {}", status, station);
            return Err(MetarError::not_available(station.as_str()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read response body for {}: {}", station, e);
                return Err(MetarError::not_available(station.as_str()));
            }
        };

        match parse_report_body(&body) {
            Some(report) => {
                info!("Fetched METAR for {}", station);
                Ok(report.to_string())
            }
            None => {
                info!("No current METAR for {}", station);
                Err(MetarError::not_available(station.as_str()))
            }
        }
    }
}

/// Trimmed report text, or `None` for an empty or "no METAR" reply
pub fn parse_report_body(body: &str) -> Option<&str> {
    let report = body.trim();
    if report.is_empty() || report.to_lowercase().starts_with(NO_DATA_SENTINEL) {
        None
    } else {
        Some(report)
    }
}
