//! City-to-state resolution for free-text city names
//!
//! This module maps city names as they appear in flight data onto canonical
//! state keys. Resolution runs a short, fixed pipeline against an immutable
//! [`CityStateTable`]:
//!
//! 1. Reject blank input
//! 2. Trim and lowercase
//! 3. Apply hardcoded spelling rewrites ("bombay" → "mumbai")
//! 4. Direct table lookup
//! 5. Secondary alias table ("madras" → "chennai") and retry
//! 6. Loose retry (collapsed whitespace, trailing "(DEL)" qualifiers dropped)
//!
//! Anything still unmatched is reported as not found; the resolver never
//! guesses a state.

use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub mod builtin;
pub mod normalize;
pub mod table;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use table::{CityStateTable, TableSource};

/// Pipeline stage that produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Normalized name found directly in the table
    Direct,
    /// Found after a hardcoded spelling rewrite
    Rewrite,
    /// Found through the secondary alias table
    Alias,
    /// Found only after loose normalization
    Loose,
}

/// Successful resolution with the key that matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Lowercase state key
    pub state: String,
    /// City key that was found in the table
    pub matched_city: String,
    /// Stage that produced the match
    pub kind: MatchKind,
}

/// Resolves city names to state keys against a swappable table
///
/// The table itself is immutable; [`reload_from_path`](Self::reload_from_path)
/// replaces it wholesale. Lookups hold the read lock only long enough to clone
/// the table handle.
#[derive(Debug)]
pub struct CityStateResolver {
    table: RwLock<Arc<CityStateTable>>,
}

impl CityStateResolver {
    /// Create a resolver over an already-built table
    pub fn new(table: CityStateTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Create a resolver over the built-in table
    pub fn builtin() -> Self {
        Self::new(CityStateTable::builtin())
    }

    /// Create a resolver from a JSON file, falling back to the built-in table
    pub fn load_or_default(path: &Path) -> Self {
        Self::new(CityStateTable::load_or_default(path))
    }

    /// Replace the current table with one loaded from `path`
    ///
    /// Falls back to the built-in table when the file cannot be used, exactly
    /// like the initial load.
    pub fn reload_from_path(&self, path: &Path) {
        let table = CityStateTable::load_or_default(path);
        self.replace_table(table);
    }

    /// Atomically swap in a new table
    pub fn replace_table(&self, table: CityStateTable) {
        info!(
            "Replacing city-state table: {} cities across {} states from {}",
            table.len(),
            table.state_keys().len(),
            table.source()
        );
        *self.table.write() = Arc::new(table);
    }

    /// Handle to the table currently in effect
    pub fn table(&self) -> Arc<CityStateTable> {
        Arc::clone(&*self.table.read())
    }

    /// Resolve a city name to its state key
    pub fn resolve(&self, city: &str) -> Option<String> {
        self.resolve_detailed(city).map(|resolution| resolution.state)
    }

    /// Resolve a city name, reporting which pipeline stage matched
    pub fn resolve_detailed(&self, city: &str) -> Option<Resolution> {
        let table = self.table();
        let resolution = resolve_in(&table, city);
        if resolution.is_none() && !city.trim().is_empty() {
            debug!("City not found in mapping: '{}'", city);
        }
        resolution
    }
}

impl Default for CityStateResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Run the resolution pipeline against a specific table
pub fn resolve_in(table: &CityStateTable, city: &str) -> Option<Resolution> {
    let normalized = normalize::normalize_key(city);
    if normalized.is_empty() {
        return None;
    }

    let (lookup_key, kind) = match normalize::rewrite(&normalized) {
        Some(target) => (target.to_string(), MatchKind::Rewrite),
        None => (normalized, MatchKind::Direct),
    };

    if let Some(found) = lookup(table, &lookup_key, kind) {
        return Some(found);
    }

    if let Some(target) = normalize::alias(&lookup_key) {
        if let Some(found) = lookup(table, target, MatchKind::Alias) {
            return Some(found);
        }
    }

    let loose = normalize::loose_city_key(city);
    if !loose.is_empty() && loose != lookup_key {
        let loose = normalize::rewrite(&loose).map(str::to_string).unwrap_or(loose);
        if let Some(found) = lookup(table, &loose, MatchKind::Loose) {
            return Some(found);
        }
        if let Some(target) = normalize::alias(&loose) {
            return lookup(table, target, MatchKind::Loose);
        }
    }

    None
}

fn lookup(table: &CityStateTable, city_key: &str, kind: MatchKind) -> Option<Resolution> {
    table.get(city_key).map(|state| Resolution {
        state: state.to_string(),
        matched_city: city_key.to_string(),
        kind,
    })
}
