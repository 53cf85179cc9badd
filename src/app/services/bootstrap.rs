//! Explicit construction and wiring of the flight statistics services
//!
//! Startup order: city-state table, dataset, aggregation. A dataset that
//! cannot be loaded is logged and the services start with no flights.

use crate::app::services::city_state_resolver::CityStateResolver;
use crate::app::services::flight_csv_parser::FlightCsvParser;
use crate::app::services::flight_store::{FlightRecordStore, LoadStats};
use crate::app::services::state_aggregator::StateAggregator;
use crate::app::services::state_query::StateQueryService;
use crate::config::Config;
use crate::Result;
use std::sync::Arc;
use tracing::{error, info};

/// The wired-up service graph
#[derive(Debug, Clone)]
pub struct FlightStatsServices {
    pub resolver: Arc<CityStateResolver>,
    pub store: Arc<FlightRecordStore>,
    pub aggregator: Arc<StateAggregator>,
    pub query: StateQueryService,
}

impl FlightStatsServices {
    /// Wire services around an existing resolver and store without loading anything
    pub fn new(resolver: Arc<CityStateResolver>, store: Arc<FlightRecordStore>, config: &Config) -> Self {
        let aggregator = Arc::new(StateAggregator::new(Arc::clone(&store), Arc::clone(&resolver)));
        let query = StateQueryService::new(Arc::clone(&aggregator))
            .with_default_top_airlines(config.default_top_airlines);

        Self {
            resolver,
            store,
            aggregator,
            query,
        }
    }

    /// Load the reference table and dataset named by `config`, then aggregate
    pub fn bootstrap(config: &Config) -> Self {
        let resolver = Arc::new(CityStateResolver::load_or_default(&config.city_state_map_path));
        info!("City-to-state mapping initialized");

        let parser = FlightCsvParser::new().with_strict_header(config.strict_header);
        let store = Arc::new(FlightRecordStore::with_parser(parser));
        let services = Self::new(resolver, store, config);

        match services.load_dataset(config) {
            Ok(stats) => info!(
                "Successfully loaded {} flight records ({})",
                stats.records_loaded,
                stats.parse.summary()
            ),
            Err(e) => {
                error!("Could not load flight data: {}", e);
                error!(
                    "Please ensure the CSV file exists at {}",
                    config.dataset_path.display()
                );
            }
        }

        services.aggregator.compute();
        info!("State-wise aggregations computed and stored in memory");

        services
    }

    /// Reload the dataset from `config.dataset_path` without recomputing
    pub fn load_dataset(&self, config: &Config) -> Result<LoadStats> {
        self.store.load(&config.dataset_path)
    }

    /// Reload dataset and city table, then recompute
    ///
    /// The aggregation is recomputed even when the dataset load fails, so
    /// a replaced city table still takes effect.
    pub fn reload(&self, config: &Config) -> Result<LoadStats> {
        self.resolver.reload_from_path(&config.city_state_map_path);
        let loaded = self.load_dataset(config);
        self.aggregator.recompute();
        loaded
    }
}
