//! Test utilities for the METAR decoder
//!
//! Shared report fixtures and helpers used across the decoder test modules.

use super::decode;
use crate::models::DecodeResult;


/// Clear sky report with every field present
pub const CLEAR_REPORT: &str = "KHIO 061853Z 27008KT 10SM CLR 22/16 A3012";

/// Light rain under a layered overcast
pub const RAIN_REPORT: &str = "KORD 061851Z 09014KT 3SM -RA SCT008 BKN015 OVC025 18/17 A2992";

/// Variable wind with a high cloud layer
pub const VARIABLE_WIND_REPORT: &str = "KJFK 061851Z VRB05KT 10SM FEW250 25/20 A3008";

/// Below-freezing temperature and dewpoint
pub const FREEZING_REPORT: &str = "PANC 061853Z 36010KT 10SM CLR M15/M20 A2985";

/// Heavy thunderstorm with rain
pub const THUNDERSTORM_REPORT: &str = "KBOS 061854Z 08015KT 2SM +TSRA BKN008 OVC020 20/19 A2995";

/// Decode a report that is expected to contain at least one token
pub fn decode_ok(raw: &str) -> DecodeResult {
    decode(raw).unwrap_or_else(|e| panic!("failed to decode '{}': {}", raw, e))
}
