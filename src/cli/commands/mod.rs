//! Command implementations for the state flight statistics CLI
//!
//! Each command lives in its own module. [`run`] sets up logging and
//! configuration, builds the services and dispatches.

pub mod aggregations;
pub mod airlines;
pub mod diagnostics;
pub mod resolve;
pub mod shared;
pub mod states;

use crate::Result;
use crate::cli::args::{Args, Commands};
use tracing::debug;

/// Main command runner
///
/// - `states` / `state`: state listing and detail view
/// - `airlines`: top airlines for a state
/// - `aggregations`: full aggregation dump
/// - `resolve`: city resolution diagnostics
/// - `coverage` / `health`: data quality and liveness
pub fn run(args: Args) -> Result<()> {
    let Some(command) = args.command else {
        return Ok(());
    };
    let global = args.global;

    shared::setup_logging(&global)?;
    let config = shared::load_configuration(&global)?;
    debug!("Effective configuration: {:?}", config);

    if let Commands::Resolve(resolve_args) = &command {
        return resolve::run_resolve(&config, resolve_args, global.format);
    }

    let services = shared::bootstrap_services(&config, &global);
    let query = &services.query;

    match &command {
        Commands::States => states::run_states(query, global.format),
        Commands::State(state_args) => states::run_state(query, state_args, global.format),
        Commands::Airlines(airlines_args) => {
            airlines::run_airlines(query, airlines_args, global.format)
        }
        Commands::Aggregations(aggregations_args) => {
            aggregations::run_aggregations(query, aggregations_args, global.format)
        }
        Commands::Coverage(coverage_args) => {
            diagnostics::run_coverage(query, coverage_args, global.format)
        }
        Commands::Health => diagnostics::run_health(query, global.format),
        Commands::Resolve(_) => Ok(()),
    }
}
