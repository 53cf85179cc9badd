//! Field parsing utilities for flight CSV values
//!
//! Every parser here is total: unparsable input yields `0` rather than an
//! error, so a bad cell never costs the whole row.

use regex::Regex;
use std::sync::LazyLock;

static HOURS_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+(?:\.\d+)?)\s*h)?\s*(?:(\d+(?:\.\d+)?)\s*m|\d+(?:\.\d+)?)?$").expect("valid regex")
});

/// Parse a duration into fractional hours
///
/// Accepted forms:
/// - stop descriptors ("non-stop", "1-stop") → 0
/// - "2h 50m" / "2h50m" → 2 + 50/60
/// - "2h" → 2, "45m" → 0.75
/// - a trailing number without a unit is ignored: "2h 5" → 2
/// - bare number ("2.5") → taken as hours
///
/// Anything else yields 0.
pub fn parse_duration(value: &str) -> f64 {
    let trimmed = value.trim();
    let lowered = trimmed.to_lowercase();

    if lowered.contains("non-stop") || lowered.contains("-stop") {
        return 0.0;
    }

    if lowered.is_empty() {
        return 0.0;
    }

    if let Some(captures) = HOURS_MINUTES.captures(&lowered) {
        let hours = captures.get(1).and_then(|m| m.as_str().parse::<f64>().ok());
        let minutes = captures.get(2).and_then(|m| m.as_str().parse::<f64>().ok());
        if hours.is_some() || minutes.is_some() {
            return hours.unwrap_or(0.0) + minutes.unwrap_or(0.0) / 60.0;
        }
    }

    lowered.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Parse a price, dropping thousands separators and currency symbols
///
/// Only digits and the decimal point survive cleaning; unparsable → 0.
pub fn parse_price(value: &str) -> f64 {
    let cleaned = retain_chars(value, |c| c.is_ascii_digit() || c == '.');
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Parse a stop count, keeping only digits
///
/// No digits → 0; counts beyond `u32::MAX` saturate.
pub fn parse_stops(value: &str) -> u32 {
    let cleaned = retain_chars(value, |c| c.is_ascii_digit());
    if cleaned.is_empty() {
        return 0;
    }
    // Only digits remain, so a parse failure means overflow
    cleaned.parse::<u32>().unwrap_or(u32::MAX)
}

fn retain_chars(value: &str, keep: impl Fn(char) -> bool) -> String {
    value.chars().filter(|&c| keep(c)).collect()
}
