//! City-to-state reference table
//!
//! The external source is a JSON object keyed by state name, each holding a
//! list of city names. It is inverted into a city → state map at load time.
//! When the source is missing or malformed the built-in table is used.

use super::builtin::BUILTIN_STATE_CITIES;
use super::normalize::normalize_key;
use crate::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where a table's contents came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Loaded from an external JSON file
    External(PathBuf),
    /// Parsed from an in-memory JSON document
    Inline,
    /// The built-in default table
    Builtin,
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::External(path) => write!(f, "{}", path.display()),
            TableSource::Inline => write!(f, "inline"),
            TableSource::Builtin => write!(f, "built-in"),
        }
    }
}

/// Immutable city → state lookup table
///
/// Keys are normalized city names (trimmed, lowercase), values are state
/// keys (lowercase).
#[derive(Debug, Clone)]
pub struct CityStateTable {
    city_to_state: HashMap<String, String>,
    source: TableSource,
    conflicts: usize,
}

impl CityStateTable {
    /// Build the table from the built-in state lists
    pub fn builtin() -> Self {
        let table = Self::invert(
            BUILTIN_STATE_CITIES
                .iter()
                .map(|(state, cities)| (*state, cities.iter().copied())),
            TableSource::Builtin,
        );
        debug!(
            "Built-in city-state table: {} cities, {} conflicting listings",
            table.len(),
            table.conflicts
        );
        table
    }

    /// Parse a `{ state: [cities] }` JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse_json(json, TableSource::Inline)
    }

    /// Read and parse a `{ state: [cities] }` JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read city-state map {}", path.display()),
                e,
            )
        })?;
        Self::parse_json(&content, TableSource::External(path.to_path_buf()))
    }

    /// Load from `path`, falling back to the built-in table on any failure
    ///
    /// Failure here is never fatal: the reason is logged and the built-in
    /// table is returned.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_json_path(path) {
            Ok(table) => {
                info!(
                    "Loaded city-to-state mapping for {} cities from {}",
                    table.len(),
                    path.display()
                );
                table
            }
            Err(e) => {
                warn!(
                    "Could not load city-state map from {}, using built-in mapping: {}",
                    path.display(),
                    e
                );
                let table = Self::builtin();
                info!(
                    "Loaded built-in city-to-state mapping for {} cities",
                    table.len()
                );
                table
            }
        }
    }

    fn parse_json(json: &str, source: TableSource) -> Result<Self> {
        // BTreeMap gives a deterministic state order for conflict resolution
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| Error::json(format!("Malformed city-state map ({})", source), e))?;

        if raw.is_empty() {
            return Err(Error::city_state_table(format!(
                "City-state map ({}) contains no states",
                source
            )));
        }

        let table = Self::invert(
            raw.iter()
                .map(|(state, cities)| (state.as_str(), cities.iter().map(String::as_str))),
            source,
        );

        if table.is_empty() {
            return Err(Error::city_state_table(format!(
                "City-state map ({}) contains no cities",
                table.source
            )));
        }

        Ok(table)
    }

    /// Invert state → cities listings into city → state; first listing wins
    fn invert<'a, S, C>(listings: S, source: TableSource) -> Self
    where
        S: IntoIterator<Item = (&'a str, C)>,
        C: IntoIterator<Item = &'a str>,
    {
        let mut city_to_state: HashMap<String, String> = HashMap::new();
        let mut conflicts = 0;

        for (state, cities) in listings {
            let state_key = normalize_key(state);
            if state_key.is_empty() {
                continue;
            }

            for city in cities {
                let city_key = normalize_key(city);
                if city_key.is_empty() {
                    continue;
                }

                match city_to_state.get(&city_key) {
                    None => {
                        city_to_state.insert(city_key, state_key.clone());
                    }
                    Some(existing) if *existing != state_key => {
                        conflicts += 1;
                        debug!(
                            "City '{}' listed under both '{}' and '{}', keeping '{}'",
                            city_key, existing, state_key, existing
                        );
                    }
                    Some(_) => {}
                }
            }
        }

        Self {
            city_to_state,
            source,
            conflicts,
        }
    }

    /// Look up a normalized city key
    pub fn get(&self, city_key: &str) -> Option<&str> {
        self.city_to_state.get(city_key).map(String::as_str)
    }

    /// Check whether a normalized city key is present
    pub fn contains(&self, city_key: &str) -> bool {
        self.city_to_state.contains_key(city_key)
    }

    /// Number of cities in the table
    pub fn len(&self) -> usize {
        self.city_to_state.len()
    }

    /// True when the table holds no cities
    pub fn is_empty(&self) -> bool {
        self.city_to_state.is_empty()
    }

    /// Where this table was loaded from
    pub fn source(&self) -> &TableSource {
        &self.source
    }

    /// Number of city listings dropped because the city was already mapped
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    /// Distinct state keys referenced by the table, sorted
    pub fn state_keys(&self) -> Vec<String> {
        let mut states: Vec<String> = self.city_to_state.values().cloned().collect();
        states.sort();
        states.dedup();
        states
    }
}

impl Default for CityStateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
