//! Coverage and health commands

use super::shared::{emit, field, heading, print_table};
use crate::Result;
use crate::app::services::state_aggregator::ResolutionCoverage;
use crate::app::services::state_query::{HealthStatus, StateQueryService};
use crate::cli::args::{CoverageArgs, OutputFormat};
use colored::*;

/// Report how many flight ends resolved to a state
pub fn run_coverage(
    query: &StateQueryService,
    args: &CoverageArgs,
    format: OutputFormat,
) -> Result<()> {
    let coverage = query.coverage();
    let top = args.top;

    emit(format, &coverage, |coverage: &ResolutionCoverage| {
        heading("City resolution coverage");
        field("Flights", coverage.flights_seen);
        field(
            "Sources resolved",
            format!("{} ({:.1}%)", coverage.sources_resolved, coverage.source_rate()),
        );
        field(
            "Destinations resolved",
            format!(
                "{} ({:.1}%)",
                coverage.destinations_resolved,
                coverage.destination_rate()
            ),
        );
        field("Fully unresolved flights", coverage.fully_unresolved);

        let unresolved = coverage.top_unresolved(top);
        if unresolved.is_empty() {
            println!("\n  {}", "Every city resolved".bright_green());
            return;
        }

        heading(&format!(
            "Unresolved cities (top {} of {})",
            unresolved.len(),
            coverage.unresolved_cities.len()
        ));
        let rows: Vec<Vec<String>> = unresolved
            .into_iter()
            .map(|(city, count)| vec![city, count.to_string()])
            .collect();
        print_table(&["City", "Occurrences"], &rows);
    })
}

/// Print a liveness summary
pub fn run_health(query: &StateQueryService, format: OutputFormat) -> Result<()> {
    let health = query.health();

    emit(format, &health, |health: &HealthStatus| {
        heading("Health");
        field("Status", &health.status);
        field("Flights loaded", health.flights_loaded);
        field("States with data", health.states_with_data);
        field(
            "City table",
            format!("{} cities from {}", health.cities_mapped, health.city_table_source),
        );
        match health.last_computed {
            Some(at) => field("Last computed", at.to_rfc3339()),
            None => field("Last computed", "never"),
        }
    })
}
