//! Token classification for METAR reports
//!
//! Decides which field a single token encodes by looking at its shape only.
//! The rules are tested in a fixed order and the first match wins.

use crate::constants::{CLOUD_COVER, VISIBILITY_SUFFIX, WEATHER_PHENOMENA};
use regex::Regex;
use std::sync::LazyLock;

/// `DDHHMMZ` observation time
pub(super) static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>[0-9]{2})(?P<hour>[0-9]{2})(?P<minute>[0-9]{2})Z$")
        .expect("time pattern is valid")
});

/// `dddssKT` or `VRBssKT`
pub(super) static WIND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<direction>VRB|[0-9]{3})(?P<speed>[0-9]{2})KT$")
        .expect("wind pattern is valid")
});

/// `TT/DD` with an optional `M` sign on either group
pub(super) static TEMPERATURE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<temperature>M?[0-9]{2})/(?P<dewpoint>M?[0-9]{2})$")
        .expect("temperature pattern is valid")
});

/// Field a token was recognised as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Time,
    Wind,
    Visibility,
    Weather,
    Clouds,
    Temperature,
    Pressure,
}

/// Classify a token, or `None` when it matches no known field
pub fn classify(token: &str) -> Option<TokenKind> {
    if TIME_PATTERN.is_match(token) {
        Some(TokenKind::Time)
    } else if WIND_PATTERN.is_match(token) {
        Some(TokenKind::Wind)
    } else if is_visibility(token) {
        Some(TokenKind::Visibility)
    } else if WEATHER_PHENOMENA.iter().any(|(code, _)| token.contains(code)) {
        Some(TokenKind::Weather)
    } else if CLOUD_COVER.iter().any(|(code, _)| token.starts_with(code)) {
        Some(TokenKind::Clouds)
    } else if TEMPERATURE_PATTERN.is_match(token) {
        Some(TokenKind::Temperature)
    } else if token.starts_with('A') && token.chars().count() == 5 {
        Some(TokenKind::Pressure)
    } else {
        None
    }
}

// A bare "SM" carries no distance and falls through to the other rules
fn is_visibility(token: &str) -> bool {
    token
        .strip_suffix(VISIBILITY_SUFFIX)
        .is_some_and(|miles| !miles.is_empty())
}
