//! Integration tests for decoding complete METAR reports
//!
//! These tests run real-world reports through the public API and check the
//! decoded fields and summary a caller would display.

use metar_reader::decoder::{
    celsius_to_fahrenheit, decode_clouds, decode_visibility, wind_direction_text,
};
use metar_reader::{MetarError, decode};

/// Test decoding a complete report with clear weather
///
/// Purpose: Validate every field of a typical fair-weather report
/// Benefit: Catches regressions in any single field decoder
#[test]
fn test_decode_complete_metar_clear_weather() {
    let metar = "KHIO 061853Z 27008KT 10SM CLR 22/16 A3012";
    let result = decode(metar).expect("report should decode");

    assert_eq!(result.details.station, "KHIO");
    assert!(result.details.time.unwrap().contains("Observed at 18:53Z on day 06"));
    assert!(result.details.wind.unwrap().contains("Wind from the west at 8 knots"));
    assert_eq!(result.details.visibility.as_deref(), Some("10+ miles visibility"));
    assert_eq!(result.details.clouds.as_deref(), Some("clear skies"));
    assert!(result.details.temperature.unwrap().contains("72°F (22°C)"));
    assert!(result.details.dewpoint.unwrap().contains("Dewpoint 61°F (16°C)"));
    assert!(result.details.pressure.unwrap().contains("Pressure 30.12 inHg"));
    assert_eq!(result.raw, metar);
}

/// Test decoding a report with active precipitation and several cloud layers
///
/// Purpose: Check the weather field and that the last cloud layer is reported
/// Benefit: Guards the last-group-wins rule for repeated fields
#[test]
fn test_decode_metar_with_weather() {
    let metar = "KORD 061851Z 09014KT 3SM -RA SCT008 BKN015 OVC025 18/17 A2992";
    let result = decode(metar).expect("report should decode");

    assert_eq!(result.details.station, "KORD");
    assert!(result.details.wind.unwrap().contains("Wind from the east at 14 knots"));
    assert_eq!(result.details.visibility.as_deref(), Some("3 miles visibility"));
    assert_eq!(result.details.weather.as_deref(), Some("light rain"));
    assert!(result.details.clouds.unwrap().contains("overcast at 2500 feet"));
    assert!(result.details.temperature.unwrap().contains("64°F (18°C)"));
    assert!(result.summary.starts_with("light rain"));
}

#[test]
fn test_decode_metar_variable_wind() {
    let result = decode("KJFK 061851Z VRB05KT 10SM FEW250 25/20 A3008").unwrap();

    assert_eq!(result.details.wind.as_deref(), Some("Variable wind at 05 knots"));
    assert_eq!(result.details.visibility.as_deref(), Some("10+ miles visibility"));
    assert!(result.details.clouds.unwrap().contains("few clouds at 25000 feet"));
}

#[test]
fn test_decode_metar_negative_temperatures() {
    let result = decode("PANC 061853Z 36010KT 10SM CLR M15/M20 A2985").unwrap();

    assert!(result.details.temperature.unwrap().contains("5°F (-15°C)"));
    assert!(result.details.dewpoint.unwrap().contains("Dewpoint -4°F (-20°C)"));
}

#[test]
fn test_decode_metar_multiple_weather_phenomena() {
    let result = decode("KBOS 061854Z 08015KT 2SM +TSRA BKN008 OVC020 20/19 A2995").unwrap();

    assert!(result.details.weather.unwrap().contains("heavy rain, heavy thunderstorm"));
    assert_eq!(result.details.visibility.as_deref(), Some("2 miles visibility"));
}

/// Test handling of empty or whitespace-only reports
///
/// Purpose: Empty input is the only report that cannot be decoded
/// Benefit: Callers get an explicit failure value instead of a blank result
#[test]
fn test_decode_empty_metar() {
    assert!(matches!(decode(""), Err(MetarError::EmptyReport)));
    assert!(matches!(decode("   "), Err(MetarError::EmptyReport)));
    assert_eq!(decode("").unwrap_err().to_string(), "Unable to decode METAR");
}

/// Test a report with remarks and groups the decoder does not know
///
/// Purpose: Unknown groups are skipped without touching decoded fields
/// Benefit: Real reports with remarks still decode fully
#[test]
fn test_decode_metar_with_remarks() {
    let metar = "KSEA 061853Z 18012G20KT 10SM FEW045 BKN250 14/08 A3001 RMK AO2 SLP164 T01440083";
    let result = decode(metar).unwrap();

    // Gust groups are outside the supported wind formats
    assert_eq!(result.details.wind, None);
    assert_eq!(result.details.clouds.as_deref(), Some("broken clouds at 25000 feet"));
    assert_eq!(result.details.temperature.as_deref(), Some("57°F (14°C)"));
    assert_eq!(result.details.pressure.as_deref(), Some("Pressure 30.01 inHg"));
    assert_eq!(result.summary, "broken clouds at 25000 feet, 57°F (14°C)");
}

#[test]
fn test_decode_is_safe_across_threads() {
    let reports = [
        "KHIO 061853Z 27008KT 10SM CLR 22/16 A3012",
        "PANC 061853Z 36010KT 10SM CLR M15/M20 A2985",
    ];

    let handles: Vec<_> = reports
        .into_iter()
        .map(|raw| std::thread::spawn(move || decode(raw).unwrap()))
        .collect();

    for (handle, raw) in handles.into_iter().zip(reports) {
        assert_eq!(handle.join().unwrap(), decode(raw).unwrap());
    }
}

#[test]
fn test_direct_field_helpers() {
    assert_eq!(decode_visibility("CAVOK"), "visibility not reported");
    assert_eq!(decode_clouds("UNKNOWN"), "cloud conditions not reported");
    assert_eq!(celsius_to_fahrenheit(-273), -459);
    assert_eq!(wind_direction_text(0), wind_direction_text(360));
}
