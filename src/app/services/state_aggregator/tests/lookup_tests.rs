//! Tests for aggregation lookups by state name

use super::*;
use crate::constants::INDIAN_STATES;

#[test]
fn test_every_universe_state_is_found() {
    let aggregator = aggregator_with(&[("IndiGo", "Mumbai", "Delhi")]);

    for state in INDIAN_STATES {
        let aggregation = aggregator
            .get_aggregation(state)
            .unwrap_or_else(|| panic!("{} should be found", state));
        assert_eq!(aggregation.state_name, *state);
    }
}

#[test]
fn test_state_without_flights_is_zero_valued() {
    let aggregator = aggregator_with(&[("IndiGo", "Mumbai", "Delhi")]);

    let sikkim = aggregator.get_aggregation("sikkim").unwrap();
    assert_eq!(sikkim.state_name, "Sikkim");
    assert!(sikkim.is_empty());
    assert_eq!(sikkim.unique_routes, 0);
    assert!(sikkim.airlines.is_empty());
}

#[test]
fn test_unknown_state_is_not_found() {
    let aggregator = aggregator_with(&[("IndiGo", "Mumbai", "Delhi")]);

    assert!(aggregator.get_aggregation("Atlantis").is_none());
    assert!(aggregator.get_aggregation("").is_none());
    assert_eq!(aggregator.total_flights("Atlantis"), 0);
    assert_eq!(aggregator.unique_routes("Atlantis"), 0);
}

#[test]
fn test_lookup_accepts_case_and_slug_variants() {
    let aggregator = aggregator_with(&[("Air Asia", "Chennai", "Port Blair")]);

    for name in [
        "Andaman and Nicobar Islands",
        "andaman and nicobar islands",
        "ANDAMAN AND NICOBAR ISLANDS",
        "andaman-and-nicobar-islands",
    ] {
        let aggregation = aggregator.get_aggregation(name).unwrap();
        assert_eq!(aggregation.state_name, "Andaman and Nicobar Islands");
        assert_eq!(aggregation.incoming_flights, 1);
    }
}

#[test]
fn test_per_field_accessors() {
    let aggregator = aggregator_with(&[
        ("IndiGo", "Mumbai", "Delhi"),
        ("Vistara", "Delhi", "Mumbai"),
        ("IndiGo", "Mumbai", "Pune"),
    ]);

    assert_eq!(aggregator.outgoing_flights("Maharashtra"), 2);
    assert_eq!(aggregator.incoming_flights("maharashtra"), 2);
    assert_eq!(aggregator.total_flights("MAHARASHTRA"), 4);
    assert_eq!(aggregator.unique_routes("Maharashtra"), 3);
    assert_eq!(aggregator.total_flights("Delhi"), 2);
}

#[test]
fn test_all_aggregations_keyed_by_display_name() {
    let aggregator = aggregator_with(&[("IndiGo", "Chennai", "Kolkata")]);

    let all = aggregator.all_aggregations();
    let names: Vec<&String> = all.keys().collect();
    assert_eq!(names, vec!["Tamil Nadu", "West Bengal"]);
    assert_eq!(all["West Bengal"].incoming_flights, 1);
}

#[test]
fn test_snapshot_before_compute_is_empty() {
    let aggregator = StateAggregator::new(
        store_with(&[("IndiGo", "Mumbai", "Delhi")]),
        Arc::new(CityStateResolver::builtin()),
    );

    assert!(!aggregator.snapshot().is_computed());
    assert!(aggregator.states_with_data().is_empty());
    // Universe states are still found
    assert!(aggregator.get_aggregation("Maharashtra").unwrap().is_empty());
}
