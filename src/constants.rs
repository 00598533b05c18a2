//! Application constants for the METAR reader
//!
//! Lookup tables for the METAR code vocabulary, fixed output phrases and the
//! defaults used by the report fetcher.

// =============================================================================
// Report Fetching
// =============================================================================

/// Aviation Weather Center METAR endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://aviationweather.gov/api/data/metar";

/// Request timeout for a single fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("metar-reader/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the API endpoint
pub const ENV_API_URL: &str = "METAR_API_URL";

/// Environment variable overriding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "METAR_TIMEOUT_SECS";

/// Response prefix the API uses when a station has no current report
pub const NO_DATA_SENTINEL: &str = "no metar";

/// ICAO station identifiers are always four characters
pub const STATION_CODE_LENGTH: usize = 4;

// =============================================================================
// METAR Vocabulary
// =============================================================================

/// 16-point compass rose, clockwise from north, one entry per 22.5 degrees
pub const COMPASS_POINTS: &[(&str, &str)] = &[
    ("N", "north"),
    ("NNE", "north-northeast"),
    ("NE", "northeast"),
    ("ENE", "east-northeast"),
    ("E", "east"),
    ("ESE", "east-southeast"),
    ("SE", "southeast"),
    ("SSE", "south-southeast"),
    ("S", "south"),
    ("SSW", "south-southwest"),
    ("SW", "southwest"),
    ("WSW", "west-southwest"),
    ("W", "west"),
    ("WNW", "west-northwest"),
    ("NW", "northwest"),
    ("NNW", "north-northwest"),
];

/// Width of one compass sector in degrees
pub const COMPASS_SECTOR_DEGREES: f64 = 22.5;

/// Sky cover codes in match order (first matching prefix wins)
pub const CLOUD_COVER: &[(&str, &str)] = &[
    ("CLR", "clear skies"),      // Clear below 12,000 ft
    ("SKC", "sky clear"),        // Automated stations
    ("FEW", "few clouds"),       // 1-2 oktas
    ("SCT", "scattered clouds"), // 3-4 oktas
    ("BKN", "broken clouds"),    // 5-7 oktas
    ("OVC", "overcast"),         // 8 oktas
];

/// Sky cover codes that never carry a cloud base
pub const CLEAR_SKY_CODES: &[&str] = &["CLR", "SKC"];

/// Weather phenomenon codes in reporting order
pub const WEATHER_PHENOMENA: &[(&str, &str)] = &[
    ("RA", "rain"),
    ("SN", "snow"),
    ("DZ", "drizzle"),
    ("FG", "fog"),
    ("BR", "mist"),
    ("HZ", "haze"),
    ("TS", "thunderstorm"),
    ("SH", "showers"),
];

/// Intensity and proximity prefixes, checked in order
pub const INTENSITY_PREFIXES: &[(&str, &str)] =
    &[("-", "light "), ("+", "heavy "), ("VC", "nearby ")];

/// Visibility unit suffix (statute miles)
pub const VISIBILITY_SUFFIX: &str = "SM";

/// Visibility at or above this many miles is reported as unrestricted
pub const VISIBILITY_UNRESTRICTED_MILES: u32 = 10;

// =============================================================================
// Output Phrases
// =============================================================================

pub const VISIBILITY_NOT_REPORTED: &str = "visibility not reported";
pub const CLOUDS_NOT_REPORTED: &str = "cloud conditions not reported";
pub const SUMMARY_FALLBACK: &str = "Weather conditions available";
