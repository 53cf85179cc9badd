//! State name canonicalization
//!
//! Lookup keys are produced by [`canonical_key`]; display names come from
//! the fixed state universe. Title-casing is never used to build keys, so
//! "Andaman and Nicobar Islands" and "andaman-and-nicobar-islands" land on
//! the same entry.

use crate::constants::{INDIAN_STATES, LOWERCASE_NAME_WORDS};

/// Canonical lookup key for a state name or slug
///
/// Trims, lowercases, turns hyphens and underscores into spaces and
/// collapses runs of whitespace.
pub fn canonical_key(name: &str) -> String {
    name.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical display name from the state universe, if `name` is a known state
pub fn universe_name(name: &str) -> Option<&'static str> {
    let key = canonical_key(name);
    if key.is_empty() {
        return None;
    }
    INDIAN_STATES
        .iter()
        .copied()
        .find(|state| canonical_key(state) == key)
}

/// Display name for a state key
///
/// Known states use their canonical spelling; anything else is
/// word-capitalized with connective words kept lowercase.
pub fn display_name(key: &str) -> String {
    match universe_name(key) {
        Some(name) => name.to_string(),
        None => capitalize_words(&canonical_key(key)),
    }
}

/// Turn a URL-style slug back into a display-style name
///
/// "andaman-and-nicobar-islands" → "Andaman and Nicobar Islands"
pub fn slug_to_name(slug: &str) -> String {
    capitalize_words(&canonical_key(slug))
}

/// Slug form of a state name: lowercase words joined by hyphens
pub fn to_slug(name: &str) -> String {
    canonical_key(name).replace(' ', "-")
}

fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            if LOWERCASE_NAME_WORDS.contains(&lower.as_str()) {
                return lower;
            }
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
