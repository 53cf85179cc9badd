//! City name normalization
//!
//! Free-text city names in flight data are inconsistent: colonial names,
//! abbreviations, stray whitespace, airport codes in parentheses. These
//! helpers turn them into table keys.

use crate::constants::{CITY_ALIASES, CITY_REWRITES};
use regex::Regex;
use std::sync::LazyLock;

static PARENTHESISED_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[\(\[][^\)\]]*[\)\]]\s*$").expect("valid regex"));

/// Trim and lowercase a city name
pub fn normalize_key(city: &str) -> String {
    city.trim().to_lowercase()
}

/// Look up a spelling or historical-name rewrite for an already-normalized key
pub fn rewrite(normalized: &str) -> Option<&'static str> {
    CITY_REWRITES
        .iter()
        .find(|(from, _)| *from == normalized)
        .map(|(_, to)| *to)
}

/// Look up a secondary alias for a key that has already been through [`rewrite`]
pub fn alias(normalized: &str) -> Option<&'static str> {
    CITY_ALIASES
        .iter()
        .find(|(from, _)| *from == normalized)
        .map(|(_, to)| *to)
}

/// Looser key used as a last retry
///
/// Collapses internal whitespace, drops a trailing parenthesised qualifier
/// such as an airport code ("Delhi (DEL)") and trailing punctuation.
pub fn loose_city_key(city: &str) -> String {
    let lowered = normalize_key(city);
    let without_suffix = PARENTHESISED_SUFFIX.replace(&lowered, "");
    let collapsed = without_suffix.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_trims_and_lowercases() {
        assert_eq!(normalize_key("  Chennai "), "chennai");
        assert_eq!(normalize_key("HYDERABAD"), "hyderabad");
        assert_eq!(normalize_key("   "), "");
    }

    #[test]
    fn test_rewrite_lookup() {
        assert_eq!(rewrite(&normalize_key("Bombay")), Some("mumbai"));
        assert_eq!(rewrite(&normalize_key("CALCUTTA")), Some("kolkata"));
        assert_eq!(rewrite(&normalize_key("New Delhi")), Some("delhi"));
        assert_eq!(rewrite("chennai"), None);
    }

    #[test]
    fn test_alias_keys_are_never_rewrite_sources() {
        for (from, _) in CITY_ALIASES {
            assert_eq!(rewrite(from), None, "alias '{}' is shadowed by a rewrite", from);
        }
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(alias("madras"), Some("chennai"));
        assert_eq!(alias("pondy"), Some("puducherry"));
        assert_eq!(alias("chennai"), None);
    }

    #[test]
    fn test_loose_key_strips_qualifiers() {
        assert_eq!(loose_city_key("Delhi (DEL)"), "delhi");
        assert_eq!(loose_city_key("Port   Blair"), "port blair");
        assert_eq!(loose_city_key("Goa."), "goa");
        assert_eq!(loose_city_key("Leh [IXL] "), "leh");
    }
}
