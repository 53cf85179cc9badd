//! Read-only query surface over the published aggregation snapshot
//!
//! Every query reads the snapshot in effect when it is called. Unknown
//! states are reported as [`Error::StateNotFound`]; known states without
//! flights come back zero-valued.

use crate::app::models::{AirlineCount, StateAggregation, StateDetail, StateSummary};
use crate::app::services::state_aggregator::state_names::{canonical_key, slug_to_name};
use crate::app::services::state_aggregator::{ResolutionCoverage, StateAggregator};
use crate::constants::{DEFAULT_TOP_AIRLINES_LIMIT, INDIAN_STATES};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Either one state's aggregation or all of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateFlights {
    Single(StateAggregation),
    All(BTreeMap<String, StateAggregation>),
}

impl StateFlights {
    /// Number of aggregations carried
    pub fn count(&self) -> usize {
        match self {
            StateFlights::Single(_) => 1,
            StateFlights::All(all) => all.len(),
        }
    }
}

/// Liveness summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub flights_loaded: usize,
    pub states_with_data: usize,
    pub cities_mapped: usize,
    pub city_table_source: String,
    pub last_computed: Option<DateTime<Utc>>,
}

/// Query service handed to front ends
#[derive(Debug, Clone)]
pub struct StateQueryService {
    aggregator: Arc<StateAggregator>,
    default_top_airlines: usize,
}

impl StateQueryService {
    pub fn new(aggregator: Arc<StateAggregator>) -> Self {
        Self {
            aggregator,
            default_top_airlines: DEFAULT_TOP_AIRLINES_LIMIT,
        }
    }

    /// Limit used by [`top_airlines`](Self::top_airlines) when called with 0
    pub fn with_default_top_airlines(mut self, limit: usize) -> Self {
        if limit > 0 {
            self.default_top_airlines = limit;
        }
        self
    }

    /// Every state in the fixed universe with its total flights, in listing order
    pub fn list_all_states(&self) -> Vec<StateSummary> {
        let snapshot = self.aggregator.snapshot();

        INDIAN_STATES
            .iter()
            .map(|state| StateSummary {
                state: state.to_string(),
                total_flights: snapshot
                    .get(&canonical_key(state))
                    .map_or(0, |aggregation| aggregation.total_flights),
            })
            .collect()
    }

    /// Detail view for a state name or slug such as "tamil-nadu"
    pub fn state_detail(&self, state: &str) -> Result<StateDetail> {
        let aggregation = self.find(state)?;
        Ok(StateDetail::from(&aggregation))
    }

    /// Airlines serving a state, most flights first
    ///
    /// Ties are broken by airline name. A `limit` of 0 uses the configured
    /// default.
    pub fn top_airlines(&self, state: &str, limit: usize) -> Result<Vec<AirlineCount>> {
        let aggregation = self.find(state)?;
        let limit = if limit == 0 {
            self.default_top_airlines
        } else {
            limit
        };

        let mut airlines: Vec<AirlineCount> = aggregation
            .airlines
            .into_iter()
            .map(|(airline, flights)| AirlineCount { airline, flights })
            .collect();
        airlines.sort_by(|a, b| {
            b.flights
                .cmp(&a.flights)
                .then_with(|| a.airline.cmp(&b.airline))
        });
        airlines.truncate(limit);

        Ok(airlines)
    }

    /// One state's full aggregation, or every aggregation with data
    pub fn state_flights(&self, state: Option<&str>) -> Result<StateFlights> {
        match state.map(str::trim).filter(|state| !state.is_empty()) {
            Some(state) => self
                .aggregator
                .get_aggregation(state)
                .map(StateFlights::Single)
                .ok_or_else(|| Error::state_not_found(state)),
            None => Ok(StateFlights::All(self.aggregator.all_aggregations())),
        }
    }

    /// City resolution coverage of the current snapshot
    pub fn coverage(&self) -> ResolutionCoverage {
        self.aggregator.coverage()
    }

    pub fn health(&self) -> HealthStatus {
        let snapshot = self.aggregator.snapshot();
        let table = self.aggregator.resolver().table();

        HealthStatus {
            status: "healthy".to_string(),
            flights_loaded: self.aggregator.store().count(),
            states_with_data: snapshot.len(),
            cities_mapped: table.len(),
            city_table_source: table.source().to_string(),
            last_computed: snapshot.computed_at,
        }
    }

    /// Slug-aware lookup; retries with the raw input before giving up
    fn find(&self, state: &str) -> Result<StateAggregation> {
        let name = slug_to_name(state);
        if let Some(aggregation) = self.aggregator.get_aggregation(&name) {
            return Ok(aggregation);
        }

        debug!("No state matches '{}', retrying with raw input", name);
        self.aggregator
            .get_aggregation(state)
            .ok_or_else(|| Error::state_not_found(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::FlightRecord;
    use crate::app::services::city_state_resolver::CityStateResolver;
    use crate::app::services::flight_store::FlightRecordStore;

    fn service(flights: &[(&str, &str, &str)]) -> StateQueryService {
        let store = Arc::new(FlightRecordStore::new());
        store.replace(
            flights
                .iter()
                .map(|(airline, source, destination)| {
                    FlightRecord::route(*airline, *source, *destination)
                })
                .collect(),
        );
        let aggregator = Arc::new(StateAggregator::new(
            store,
            Arc::new(CityStateResolver::builtin()),
        ));
        aggregator.compute();
        StateQueryService::new(aggregator)
    }

    #[test]
    fn test_list_all_states_covers_universe_in_order() {
        let service = service(&[("IndiGo", "Mumbai", "Delhi")]);
        let states = service.list_all_states();

        assert_eq!(states.len(), INDIAN_STATES.len());
        assert_eq!(states[0].state, "Andhra Pradesh");
        let maharashtra = states.iter().find(|s| s.state == "Maharashtra").unwrap();
        assert_eq!(maharashtra.total_flights, 1);
        let kerala = states.iter().find(|s| s.state == "Kerala").unwrap();
        assert_eq!(kerala.total_flights, 0);
    }

    #[test]
    fn test_state_detail_from_slug() {
        let service = service(&[
            ("Air Asia", "Chennai", "Port Blair"),
            ("IndiGo", "Kolkata", "Port Blair"),
            ("Air Asia", "Port Blair", "Chennai"),
        ]);

        let detail = service.state_detail("andaman-and-nicobar-islands").unwrap();
        assert_eq!(detail.state, "Andaman and Nicobar Islands");
        assert_eq!(detail.incoming_flights, 2);
        assert_eq!(detail.outgoing_flights, 1);
        assert_eq!(detail.total_flights, 3);
        assert_eq!(detail.routes, 3);
        assert_eq!(detail.airlines, vec!["Air Asia", "IndiGo"]);
    }

    #[test]
    fn test_state_detail_zero_valued_and_unknown() {
        let service = service(&[("IndiGo", "Mumbai", "Delhi")]);

        let detail = service.state_detail("lakshadweep").unwrap();
        assert_eq!(detail.state, "Lakshadweep");
        assert_eq!(detail.total_flights, 0);
        assert!(detail.airlines.is_empty());

        let missing = service.state_detail("atlantis");
        assert!(matches!(missing, Err(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_top_airlines_sorted_and_truncated() {
        let service = service(&[
            ("Vistara", "Mumbai", "Delhi"),
            ("IndiGo", "Mumbai", "Delhi"),
            ("IndiGo", "Mumbai", "Goa"),
            ("IndiGo", "Pune", "Chennai"),
            ("Air India", "Mumbai", "Kolkata"),
            ("Air India", "Nagpur", "Kolkata"),
            ("SpiceJet", "Mumbai", "Chennai"),
        ]);

        let top = service.top_airlines("maharashtra", 3).unwrap();
        let names: Vec<&str> = top.iter().map(|a| a.airline.as_str()).collect();
        assert_eq!(names, vec!["IndiGo", "Air India", "SpiceJet"]);
        assert_eq!(top[0].flights, 3);
        assert_eq!(top[1].flights, 2);

        let all = service.top_airlines("maharashtra", 100).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[3].airline, "Vistara");
    }

    #[test]
    fn test_top_airlines_zero_limit_uses_default() {
        let flights: Vec<(String, &str, &str)> = (0..15)
            .map(|i| (format!("Airline {:02}", i), "Mumbai", "Delhi"))
            .collect();
        let borrowed: Vec<(&str, &str, &str)> = flights
            .iter()
            .map(|(airline, source, destination)| (airline.as_str(), *source, *destination))
            .collect();

        let service = service(&borrowed);
        assert_eq!(service.top_airlines("Delhi", 0).unwrap().len(), 10);

        let service = service.with_default_top_airlines(5);
        assert_eq!(service.top_airlines("Delhi", 0).unwrap().len(), 5);
    }

    #[test]
    fn test_top_airlines_unknown_state() {
        let service = service(&[("IndiGo", "Mumbai", "Delhi")]);

        assert!(service.top_airlines("atlantis", 5).unwrap_err().is_not_found());
        assert!(service.top_airlines("Sikkim", 5).unwrap().is_empty());
    }

    #[test]
    fn test_state_flights_single_and_all() {
        let service = service(&[("IndiGo", "Mumbai", "Delhi")]);

        match service.state_flights(Some("Delhi")).unwrap() {
            StateFlights::Single(aggregation) => assert_eq!(aggregation.incoming_flights, 1),
            other => panic!("expected single aggregation, got {:?}", other),
        }

        let all = service.state_flights(None).unwrap();
        assert_eq!(all.count(), 2);
        assert_eq!(service.state_flights(Some("  ")).unwrap().count(), 2);

        assert!(service.state_flights(Some("Atlantis")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_health_reports_loaded_data() {
        let service = service(&[("IndiGo", "Mumbai", "Delhi"), ("IndiGo", "Atlantis", "Nowhere")]);
        let health = service.health();

        assert_eq!(health.status, "healthy");
        assert_eq!(health.flights_loaded, 2);
        assert_eq!(health.states_with_data, 2);
        assert_eq!(health.city_table_source, "built-in");
        assert!(health.cities_mapped > 0);
        assert!(health.last_computed.is_some());
        assert_eq!(service.coverage().fully_unresolved, 1);
    }
}
