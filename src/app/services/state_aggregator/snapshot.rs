//! Published result of one aggregation pass

use super::coverage::ResolutionCoverage;
use crate::app::models::StateAggregation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete, immutable output of an aggregation pass
///
/// Readers hold an `Arc` to a snapshot; a recompute publishes a new one
/// instead of modifying this one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationSnapshot {
    /// Canonical state key to aggregation, only states with flights
    pub aggregations: BTreeMap<String, StateAggregation>,
    /// Resolution coverage measured in the same pass
    pub coverage: ResolutionCoverage,
    /// Number of flight records the pass read
    pub flights_processed: usize,
    /// When the pass finished; `None` before the first compute
    pub computed_at: Option<DateTime<Utc>>,
}

impl AggregationSnapshot {
    /// Snapshot published before any compute has run
    pub fn empty() -> Self {
        Self::default()
    }

    /// Aggregation for a canonical state key
    pub fn get(&self, state_key: &str) -> Option<&StateAggregation> {
        self.aggregations.get(state_key)
    }

    /// Number of states with at least one flight
    pub fn len(&self) -> usize {
        self.aggregations.len()
    }

    /// True when no state has any flight
    pub fn is_empty(&self) -> bool {
        self.aggregations.is_empty()
    }

    /// True once a compute has published this snapshot
    pub fn is_computed(&self) -> bool {
        self.computed_at.is_some()
    }

    /// Aggregations keyed by display name
    pub fn by_display_name(&self) -> BTreeMap<String, StateAggregation> {
        self.aggregations
            .values()
            .map(|aggregation| (aggregation.state_name.clone(), aggregation.clone()))
            .collect()
    }

    /// Compare aggregation content, ignoring the timestamp
    pub fn same_aggregations(&self, other: &Self) -> bool {
        self.aggregations == other.aggregations && self.coverage == other.coverage
    }
}
