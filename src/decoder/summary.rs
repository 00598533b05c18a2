//! One-line summary of decoded conditions

use crate::constants::SUMMARY_FALLBACK;
use crate::models::DecodedFields;

/// Compose the summary: active weather (or else sky cover), temperature, wind
pub fn compose_summary(fields: &DecodedFields) -> String {
    let parts: Vec<&str> = [
        fields.weather.as_deref().or(fields.clouds.as_deref()),
        fields.temperature.as_deref(),
        fields.wind.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        SUMMARY_FALLBACK.to_string()
    } else {
        parts.join(", ")
    }
}
