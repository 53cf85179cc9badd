//! Data models for state flight statistics
//!
//! This module contains the core data structures: parsed flight records,
//! per-state aggregations and the view types returned by the query surface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Flight Record
// =============================================================================

/// A single parsed flight row
///
/// Records are created during ingestion and never mutated afterwards. The
/// flight store owns the canonical set and hands out clones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Operating airline (e.g., "IndiGo", "Air India")
    pub airline: String,

    /// Journey date as it appeared in the source, unparsed
    pub flight_date: String,

    /// Free-text source city
    pub source: String,

    /// Free-text destination city
    pub destination: String,

    /// Cabin class (e.g., "Economy")
    pub flight_class: String,

    /// Flight duration in fractional hours (0 when unknown)
    pub duration_hours: f64,

    /// Ticket price, currency-agnostic (0 when unknown)
    pub price: f64,

    /// Departure time as it appeared in the source
    pub departure_time: String,

    /// Arrival time as it appeared in the source
    pub arrival_time: String,

    /// Number of intermediate stops
    pub stops: u32,

    /// Free-text remarks
    pub additional_info: String,
}

impl FlightRecord {
    /// Create a record with only the fields the aggregation pass reads
    pub fn route(
        airline: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            airline: airline.into(),
            source: source.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive route key identifying this flight's (source, destination) pair
    pub fn route_key(&self) -> String {
        format!(
            "{}{}{}",
            self.source, crate::constants::ROUTE_KEY_SEPARATOR, self.destination
        )
        .to_lowercase()
    }
}

// =============================================================================
// State Aggregation
// =============================================================================

/// Per-state rollup of flight counts, routes and airlines
///
/// Invariants maintained by the aggregation pass:
/// - `total_flights == incoming_flights + outgoing_flights`
/// - `unique_routes == route_details.len()`
/// - the airline counts sum to `total_flights`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateAggregation {
    /// Canonical display name (e.g., "Tamil Nadu")
    pub state_name: String,

    /// Incoming plus outgoing contributions; a same-state flight counts twice
    pub total_flights: usize,

    /// Flights whose destination resolved to this state
    pub incoming_flights: usize,

    /// Flights whose source resolved to this state
    pub outgoing_flights: usize,

    /// Number of distinct route keys recorded for this state
    pub unique_routes: usize,

    /// Airline name to number of contributions touching this state
    pub airlines: BTreeMap<String, usize>,

    /// Route key (`"source->destination"`, lowercase) to number of contributions
    pub route_details: BTreeMap<String, usize>,
}

impl StateAggregation {
    /// Create an empty aggregation for a state
    pub fn new(state_name: impl Into<String>) -> Self {
        Self {
            state_name: state_name.into(),
            ..Default::default()
        }
    }

    /// Record a flight leaving this state
    pub fn record_outgoing(&mut self, airline: &str, route_key: &str) {
        self.outgoing_flights += 1;
        self.record_contribution(airline, route_key);
    }

    /// Record a flight arriving in this state
    pub fn record_incoming(&mut self, airline: &str, route_key: &str) {
        self.incoming_flights += 1;
        self.record_contribution(airline, route_key);
    }

    fn record_contribution(&mut self, airline: &str, route_key: &str) {
        self.total_flights += 1;
        *self.airlines.entry(airline.to_string()).or_insert(0) += 1;
        *self.route_details.entry(route_key.to_string()).or_insert(0) += 1;
    }

    /// Recount unique routes from the recorded route keys
    pub fn finalize(&mut self) {
        self.unique_routes = self.route_details.len();
    }

    /// True when no flight touches this state
    pub fn is_empty(&self) -> bool {
        self.total_flights == 0
    }

    /// Airline names serving this state, sorted
    pub fn airline_names(&self) -> Vec<String> {
        self.airlines.keys().cloned().collect()
    }
}

// =============================================================================
// Query Views
// =============================================================================

/// One row of the all-states listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSummary {
    pub state: String,
    pub total_flights: usize,
}

/// Detail view of a single state; airline counts are not exposed here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDetail {
    pub state: String,
    pub total_flights: usize,
    pub incoming_flights: usize,
    pub outgoing_flights: usize,
    pub routes: usize,
    pub airlines: Vec<String>,
}

impl From<&StateAggregation> for StateDetail {
    fn from(aggregation: &StateAggregation) -> Self {
        Self {
            state: aggregation.state_name.clone(),
            total_flights: aggregation.total_flights,
            incoming_flights: aggregation.incoming_flights,
            outgoing_flights: aggregation.outgoing_flights,
            routes: aggregation.unique_routes,
            airlines: aggregation.airline_names(),
        }
    }
}

/// An airline and the number of flight contributions it has in a state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineCount {
    pub airline: String,
    pub flights: usize,
}
