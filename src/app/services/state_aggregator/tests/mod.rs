//! Test utilities for state aggregation testing

use crate::app::models::FlightRecord;
use crate::app::services::city_state_resolver::CityStateResolver;
use crate::app::services::flight_store::FlightRecordStore;
use crate::app::services::state_aggregator::StateAggregator;
use std::sync::Arc;

mod concurrency_tests;
mod lookup_tests;

/// Aggregator over the built-in table with `flights` already loaded and computed
pub fn aggregator_with(flights: &[(&str, &str, &str)]) -> StateAggregator {
    let aggregator = StateAggregator::new(store_with(flights), Arc::new(CityStateResolver::builtin()));
    aggregator.compute();
    aggregator
}

/// Store holding one record per `(airline, source, destination)`
pub fn store_with(flights: &[(&str, &str, &str)]) -> Arc<FlightRecordStore> {
    let store = Arc::new(FlightRecordStore::new());
    store.replace(records(flights));
    store
}

/// Build route-only flight records
pub fn records(flights: &[(&str, &str, &str)]) -> Vec<FlightRecord> {
    flights
        .iter()
        .map(|(airline, source, destination)| FlightRecord::route(*airline, *source, *destination))
        .collect()
}

/// A mixed dataset touching several states, including unresolvable cities
pub fn mixed_flights() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("IndiGo", "Mumbai", "Delhi"),
        ("Vistara", "Mumbai", "Delhi"),
        ("Air India", "Delhi", "Chennai"),
        ("SpiceJet", "Bombay", "Madras"),
        ("IndiGo", "Banglore", "New Delhi"),
        ("GoAir", "Kolkata", "Cochin"),
        ("Jet Airways", "Hyderabad", "Atlantis"),
        ("Trujet", "Nowhere", "Mumbai"),
        ("IndiGo", "Mumbai", "Pune"),
        ("Air Asia", "Chennai", "Port Blair"),
    ]
}
