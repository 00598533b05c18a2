//! Field decoders for individual METAR tokens
//!
//! Each decoder turns one token into a human-readable phrase and returns
//! `None` when the token cannot be read, so a garbled group only loses its own
//! field. `decode_visibility` and `decode_clouds` wrap their `Option` forms
//! with the fixed "not reported" phrases for direct callers.

use super::classifier::{TEMPERATURE_PATTERN, TIME_PATTERN, WIND_PATTERN};
use crate::constants::{
    CLEAR_SKY_CODES, CLOUD_COVER, CLOUDS_NOT_REPORTED, COMPASS_POINTS, COMPASS_SECTOR_DEGREES,
    INTENSITY_PREFIXES, VISIBILITY_NOT_REPORTED, VISIBILITY_SUFFIX,
    VISIBILITY_UNRESTRICTED_MILES, WEATHER_PHENOMENA,
};
use regex::Regex;
use std::sync::LazyLock;

/// Cloud base in hundreds of feet, anywhere in the token
static CLOUD_BASE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{3}").expect("cloud base pattern is valid"));

/// Decode a `DDHHMMZ` observation time
pub fn decode_time(token: &str) -> Option<String> {
    let caps = TIME_PATTERN.captures(token)?;
    Some(format!(
        "Observed at {}:{}Z on day {}",
        &caps["hour"], &caps["minute"], &caps["day"]
    ))
}

/// Decode a wind group such as `27008KT` or `VRB05KT`
pub fn decode_wind(token: &str) -> Option<String> {
    let caps = WIND_PATTERN.captures(token)?;
    let speed = &caps["speed"];

    if &caps["direction"] == "VRB" {
        return Some(format!("Variable wind at {} knots", speed));
    }

    let degrees: u32 = caps["direction"].parse().ok()?;
    let knots: u32 = speed.parse().ok()?;
    Some(format!(
        "Wind from the {} at {} knots",
        wind_direction_text(degrees),
        knots
    ))
}

/// Name the compass point nearest to a bearing in degrees
///
/// Both 0 and 360 are north; each of the 16 points owns a 22.5 degree sector
/// centred on it.
pub fn wind_direction_text(degrees: u32) -> &'static str {
    let sector = (f64::from(degrees) / COMPASS_SECTOR_DEGREES).round() as usize;
    COMPASS_POINTS[sector % COMPASS_POINTS.len()].1
}

/// Decode statute-mile visibility, `None` for anything else
///
/// Values under the unrestricted threshold keep the digits as reported, so
/// `05SM` reads "05 miles visibility".
pub fn visibility_text(token: &str) -> Option<String> {
    let reported = token
        .strip_suffix(VISIBILITY_SUFFIX)
        .filter(|miles| !miles.is_empty())?;
    let miles: u32 = reported.parse().ok()?;

    if miles >= VISIBILITY_UNRESTRICTED_MILES {
        Some(format!("{}+ miles visibility", VISIBILITY_UNRESTRICTED_MILES))
    } else {
        Some(format!("{} miles visibility", reported))
    }
}

/// Decode visibility, falling back to "visibility not reported"
pub fn decode_visibility(token: &str) -> String {
    visibility_text(token).unwrap_or_else(|| VISIBILITY_NOT_REPORTED.to_string())
}

/// Decode every known phenomenon contained in a token
///
/// The intensity prefix is read once and applied to each phenomenon. Output
/// follows the table order, not the order of codes in the token.
pub fn decode_weather_phenomena(token: &str) -> Option<String> {
    let intensity = INTENSITY_PREFIXES
        .iter()
        .find(|(prefix, _)| token.starts_with(prefix))
        .map_or("", |(_, text)| *text);

    let phenomena: Vec<String> = WEATHER_PHENOMENA
        .iter()
        .filter(|(code, _)| token.contains(code))
        .map(|(_, description)| format!("{}{}", intensity, description))
        .collect();

    if phenomena.is_empty() {
        None
    } else {
        Some(phenomena.join(", "))
    }
}

/// Decode a sky cover group such as `BKN025`, `None` for unknown codes
pub fn cloud_text(token: &str) -> Option<String> {
    let (code, description) = CLOUD_COVER
        .iter()
        .find(|(code, _)| token.starts_with(code))?;

    if CLEAR_SKY_CODES.contains(code) {
        return Some(description.to_string());
    }

    match CLOUD_BASE_PATTERN.find(token) {
        Some(base) => {
            let hundreds: u32 = base.as_str().parse().ok()?;
            Some(format!("{} at {} feet", description, hundreds * 100))
        }
        None => Some(description.to_string()),
    }
}

/// Decode sky cover, falling back to "cloud conditions not reported"
pub fn decode_clouds(token: &str) -> String {
    cloud_text(token).unwrap_or_else(|| CLOUDS_NOT_REPORTED.to_string())
}

/// Temperature and dewpoint phrases from one `TT/DD` group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureText {
    pub temperature: String,
    pub dewpoint: String,
}

/// Decode a temperature/dewpoint group such as `22/16` or `M15/M20`
pub fn decode_temperature(token: &str) -> Option<TemperatureText> {
    let caps = TEMPERATURE_PATTERN.captures(token)?;
    let temperature = parse_celsius(&caps["temperature"])?;
    let dewpoint = parse_celsius(&caps["dewpoint"])?;

    Some(TemperatureText {
        temperature: format_temperature(temperature),
        dewpoint: format!("Dewpoint {}", format_temperature(dewpoint)),
    })
}

/// Convert whole degrees Celsius to the nearest whole degree Fahrenheit
pub fn celsius_to_fahrenheit(celsius: i32) -> i32 {
    (f64::from(celsius) * 9.0 / 5.0 + 32.0).round() as i32
}

// "M" marks a value below zero
fn parse_celsius(group: &str) -> Option<i32> {
    group.replacen('M', "-", 1).parse().ok()
}

fn format_temperature(celsius: i32) -> String {
    format!("{}°F ({}°C)", celsius_to_fahrenheit(celsius), celsius)
}

/// Decode an altimeter setting such as `A3012` (hundredths of inHg)
///
/// The value prints in its shortest form with at least one decimal, so
/// `A2990` reads "Pressure 29.9 inHg" and `A3000` reads "Pressure 30.0 inHg".
pub fn decode_pressure(token: &str) -> Option<String> {
    let digits = token
        .strip_prefix('A')
        .filter(|d| d.len() == 4 && d.bytes().all(|b| b.is_ascii_digit()))?;

    let inches: f64 = format!("{}.{}", &digits[..2], &digits[2..]).parse().ok()?;
    Some(format!("Pressure {} inHg", format_inches(inches)))
}

fn format_inches(inches: f64) -> String {
    let mut text = inches.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}
