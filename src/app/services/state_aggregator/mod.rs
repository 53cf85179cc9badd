//! State aggregation engine
//!
//! Turns the flight records held by the store into per-state statistics:
//! incoming and outgoing flight counts, unique routes and serving airlines.
//!
//! ## Architecture
//!
//! - [`aggregator`] - Single-pass aggregation and snapshot publication
//! - [`snapshot`] - The immutable published result
//! - [`coverage`] - How many flight ends resolved to a state
//! - [`state_names`] - State key canonicalization and display names
//!
//! ## Usage
//!
//! ```rust
//! use state_flight_stats::app::models::FlightRecord;
//! use state_flight_stats::app::services::city_state_resolver::CityStateResolver;
//! use state_flight_stats::app::services::flight_store::FlightRecordStore;
//! use state_flight_stats::app::services::state_aggregator::StateAggregator;
//! use std::sync::Arc;
//!
//! let store = Arc::new(FlightRecordStore::new());
//! store.replace(vec![FlightRecord::route("IndiGo", "Mumbai", "Delhi")]);
//!
//! let aggregator = StateAggregator::new(store, Arc::new(CityStateResolver::builtin()));
//! aggregator.compute();
//!
//! let maharashtra = aggregator.get_aggregation("Maharashtra").unwrap();
//! assert_eq!(maharashtra.outgoing_flights, 1);
//! ```

pub mod aggregator;
pub mod coverage;
pub mod snapshot;
pub mod state_names;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregator::{aggregate, StateAggregator};
pub use coverage::ResolutionCoverage;
pub use snapshot::AggregationSnapshot;
