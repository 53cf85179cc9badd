//! City resolution coverage for an aggregation pass
//!
//! Flight ends whose city does not resolve to a state are silently dropped
//! from the per-state counters. Coverage makes that loss visible.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many flight ends resolved to a state during one aggregation pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolutionCoverage {
    /// Flights examined
    pub flights_seen: usize,
    /// Flights whose source city resolved
    pub sources_resolved: usize,
    /// Flights whose destination city resolved
    pub destinations_resolved: usize,
    /// Flights where neither end resolved
    pub fully_unresolved: usize,
    /// Normalized unresolved city name to occurrences
    pub unresolved_cities: BTreeMap<String, usize>,
}

impl ResolutionCoverage {
    /// Create empty coverage
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of resolving one flight's two ends
    pub fn record(&mut self, source: (&str, bool), destination: (&str, bool)) {
        self.flights_seen += 1;

        let (source_city, source_resolved) = source;
        let (destination_city, destination_resolved) = destination;

        if source_resolved {
            self.sources_resolved += 1;
        } else {
            self.record_unresolved(source_city);
        }

        if destination_resolved {
            self.destinations_resolved += 1;
        } else {
            self.record_unresolved(destination_city);
        }

        if !source_resolved && !destination_resolved {
            self.fully_unresolved += 1;
        }
    }

    fn record_unresolved(&mut self, city: &str) {
        let key = city.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        *self.unresolved_cities.entry(key).or_insert(0) += 1;
    }

    /// Percentage of flight sources that resolved
    pub fn source_rate(&self) -> f64 {
        percentage(self.sources_resolved, self.flights_seen)
    }

    /// Percentage of flight destinations that resolved
    pub fn destination_rate(&self) -> f64 {
        percentage(self.destinations_resolved, self.flights_seen)
    }

    /// Percentage of all flight ends that resolved
    pub fn resolution_rate(&self) -> f64 {
        percentage(
            self.sources_resolved + self.destinations_resolved,
            self.flights_seen * 2,
        )
    }

    /// Number of flight ends that did not resolve
    pub fn unresolved_ends(&self) -> usize {
        self.flights_seen * 2 - self.sources_resolved - self.destinations_resolved
    }

    /// Most frequent unresolved cities, most frequent first, ties by name
    pub fn top_unresolved(&self, limit: usize) -> Vec<(String, usize)> {
        let mut cities: Vec<(String, usize)> = self
            .unresolved_cities
            .iter()
            .map(|(city, count)| (city.clone(), *count))
            .collect();
        cities.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        cities.truncate(limit);
        cities
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} flights, {:.1}% of ends resolved ({} sources, {} destinations), {} fully unresolved, {} distinct unknown cities",
            self.flights_seen,
            self.resolution_rate(),
            self.sources_resolved,
            self.destinations_resolved,
            self.fully_unresolved,
            self.unresolved_cities.len()
        )
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_end() {
        let mut coverage = ResolutionCoverage::new();
        coverage.record(("Mumbai", true), ("Delhi", true));
        coverage.record(("Mumbai", true), ("Atlantis", false));
        coverage.record((" atlantis ", false), ("", false));

        assert_eq!(coverage.flights_seen, 3);
        assert_eq!(coverage.sources_resolved, 2);
        assert_eq!(coverage.destinations_resolved, 1);
        assert_eq!(coverage.fully_unresolved, 1);
        assert_eq!(coverage.unresolved_ends(), 3);
        assert_eq!(coverage.unresolved_cities.len(), 1);
        assert_eq!(coverage.unresolved_cities["atlantis"], 2);
        assert_eq!(coverage.resolution_rate(), 50.0);
    }

    #[test]
    fn test_empty_coverage_rates_are_zero() {
        let coverage = ResolutionCoverage::new();
        assert_eq!(coverage.source_rate(), 0.0);
        assert_eq!(coverage.destination_rate(), 0.0);
        assert_eq!(coverage.resolution_rate(), 0.0);
        assert_eq!(coverage.unresolved_ends(), 0);
    }

    #[test]
    fn test_top_unresolved_ordering() {
        let mut coverage = ResolutionCoverage::new();
        coverage.record(("Zed", false), ("Alpha", false));
        coverage.record(("Zed", false), ("Beta", false));

        let top = coverage.top_unresolved(2);
        assert_eq!(top, vec![("zed".to_string(), 2), ("alpha".to_string(), 1)]);
    }
}
