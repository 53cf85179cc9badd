//! Single-pass state aggregation with atomic snapshot publication

use super::coverage::ResolutionCoverage;
use super::snapshot::AggregationSnapshot;
use super::state_names::{canonical_key, display_name, universe_name};
use crate::app::models::{FlightRecord, StateAggregation};
use crate::app::services::city_state_resolver::{resolve_in, CityStateResolver, CityStateTable};
use crate::app::services::flight_store::FlightRecordStore;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Builds and serves per-state flight aggregations
///
/// `compute` reads every record from the store, resolves both ends of each
/// flight and publishes a fresh snapshot. Computes are serialized; readers
/// never block on a compute in progress and always see a complete snapshot.
#[derive(Debug)]
pub struct StateAggregator {
    store: Arc<FlightRecordStore>,
    resolver: Arc<CityStateResolver>,
    snapshot: RwLock<Arc<AggregationSnapshot>>,
    recompute_lock: Mutex<()>,
}

impl StateAggregator {
    /// Create an aggregator with an empty snapshot; call [`compute`](Self::compute) to populate it
    pub fn new(store: Arc<FlightRecordStore>, resolver: Arc<CityStateResolver>) -> Self {
        Self {
            store,
            resolver,
            snapshot: RwLock::new(Arc::new(AggregationSnapshot::empty())),
            recompute_lock: Mutex::new(()),
        }
    }

    /// Rebuild the whole mapping from the store and publish it
    pub fn compute(&self) -> Arc<AggregationSnapshot> {
        let _guard = self.recompute_lock.lock();
        let started = Instant::now();

        let table = self.resolver.table();
        let snapshot = self
            .store
            .with_records(|records| aggregate(records, &table));

        for aggregation in snapshot.aggregations.values() {
            debug!(
                "State: {} - Total: {}, Incoming: {}, Outgoing: {}, Unique Routes: {}, Airlines: {}",
                aggregation.state_name,
                aggregation.total_flights,
                aggregation.incoming_flights,
                aggregation.outgoing_flights,
                aggregation.unique_routes,
                aggregation.airlines.len()
            );
        }

        info!(
            "Computed state-wise aggregations for {} states from {} flights in {:.2?}",
            snapshot.len(),
            snapshot.flights_processed,
            started.elapsed()
        );
        info!("City resolution coverage: {}", snapshot.coverage.summary());

        let snapshot = Arc::new(snapshot);
        *self.snapshot.write() = Arc::clone(&snapshot);
        snapshot
    }

    /// Rerun [`compute`](Self::compute) after the store or table changed
    pub fn recompute(&self) -> Arc<AggregationSnapshot> {
        info!("Refreshing state-wise aggregations...");
        self.compute()
    }

    /// Currently published snapshot
    pub fn snapshot(&self) -> Arc<AggregationSnapshot> {
        Arc::clone(&*self.snapshot.read())
    }

    /// Aggregation for a state name or slug
    ///
    /// A state in the fixed universe without flights yields a zero-valued
    /// aggregation; a name outside the universe with no flights yields `None`.
    pub fn get_aggregation(&self, state_name: &str) -> Option<StateAggregation> {
        let snapshot = self.snapshot();
        if let Some(aggregation) = snapshot.get(&canonical_key(state_name)) {
            return Some(aggregation.clone());
        }
        universe_name(state_name).map(StateAggregation::new)
    }

    /// Every aggregation with data, keyed by display name
    pub fn all_aggregations(&self) -> BTreeMap<String, StateAggregation> {
        self.snapshot().by_display_name()
    }

    /// Display names of states with at least one flight, sorted
    pub fn states_with_data(&self) -> Vec<String> {
        self.all_aggregations().into_keys().collect()
    }

    /// Total flights for a state, 0 when unknown
    pub fn total_flights(&self, state_name: &str) -> usize {
        self.field(state_name, |aggregation| aggregation.total_flights)
    }

    /// Incoming flights for a state, 0 when unknown
    pub fn incoming_flights(&self, state_name: &str) -> usize {
        self.field(state_name, |aggregation| aggregation.incoming_flights)
    }

    /// Outgoing flights for a state, 0 when unknown
    pub fn outgoing_flights(&self, state_name: &str) -> usize {
        self.field(state_name, |aggregation| aggregation.outgoing_flights)
    }

    /// Unique routes for a state, 0 when unknown
    pub fn unique_routes(&self, state_name: &str) -> usize {
        self.field(state_name, |aggregation| aggregation.unique_routes)
    }

    /// Resolution coverage of the published snapshot
    pub fn coverage(&self) -> ResolutionCoverage {
        self.snapshot().coverage.clone()
    }

    /// Resolver the aggregator resolves cities with
    pub fn resolver(&self) -> &Arc<CityStateResolver> {
        &self.resolver
    }

    /// Store the aggregator reads from
    pub fn store(&self) -> &Arc<FlightRecordStore> {
        &self.store
    }

    fn field(&self, state_name: &str, read: impl Fn(&StateAggregation) -> usize) -> usize {
        let snapshot = self.snapshot();
        snapshot
            .get(&canonical_key(state_name))
            .map(read)
            .unwrap_or(0)
    }
}

/// Aggregate `records` against `table` into a new snapshot
///
/// For each flight a resolved source adds an outgoing contribution to its
/// state and a resolved destination adds an incoming contribution to its
/// state. A flight within one state therefore counts twice there. Each
/// contribution also counts the airline and the route key.
pub fn aggregate(records: &[FlightRecord], table: &CityStateTable) -> AggregationSnapshot {
    let mut aggregations: BTreeMap<String, StateAggregation> = BTreeMap::new();
    let mut coverage = ResolutionCoverage::new();
    let mut cache = ResolutionCache::new(table);

    for flight in records {
        let source_state = cache.resolve(&flight.source);
        let destination_state = cache.resolve(&flight.destination);

        coverage.record(
            (flight.source.as_str(), source_state.is_some()),
            (flight.destination.as_str(), destination_state.is_some()),
        );

        if source_state.is_none() && destination_state.is_none() {
            continue;
        }

        let route_key = flight.route_key();

        if let Some(state_key) = source_state {
            entry(&mut aggregations, &state_key).record_outgoing(&flight.airline, &route_key);
        }

        if let Some(state_key) = destination_state {
            entry(&mut aggregations, &state_key).record_incoming(&flight.airline, &route_key);
        }
    }

    for aggregation in aggregations.values_mut() {
        aggregation.finalize();
    }

    AggregationSnapshot {
        aggregations,
        coverage,
        flights_processed: records.len(),
        computed_at: Some(Utc::now()),
    }
}

fn entry<'a>(
    aggregations: &'a mut BTreeMap<String, StateAggregation>,
    state_key: &str,
) -> &'a mut StateAggregation {
    aggregations
        .entry(state_key.to_string())
        .or_insert_with(|| StateAggregation::new(display_name(state_key)))
}

/// Per-pass memo of city → canonical state key
struct ResolutionCache<'a> {
    table: &'a CityStateTable,
    resolved: HashMap<String, Option<String>>,
}

impl<'a> ResolutionCache<'a> {
    fn new(table: &'a CityStateTable) -> Self {
        Self {
            table,
            resolved: HashMap::new(),
        }
    }

    fn resolve(&mut self, city: &str) -> Option<String> {
        if let Some(cached) = self.resolved.get(city) {
            return cached.clone();
        }

        let state_key = resolve_in(self.table, city).map(|resolution| canonical_key(&resolution.state));
        if state_key.is_none() && !city.trim().is_empty() {
            debug!("City not found in mapping: '{}'", city);
        }
        self.resolved.insert(city.to_string(), state_key.clone());
        state_key
    }
}
