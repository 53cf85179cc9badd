//! Top airlines command

use super::shared::{emit, heading, print_table};
use crate::Result;
use crate::app::models::AirlineCount;
use crate::app::services::state_query::StateQueryService;
use crate::cli::args::{AirlinesArgs, OutputFormat};

/// List the airlines serving a state, most flights first
pub fn run_airlines(
    query: &StateQueryService,
    args: &AirlinesArgs,
    format: OutputFormat,
) -> Result<()> {
    let airlines = query.top_airlines(&args.state, args.limit.unwrap_or(0))?;
    let state = query.state_detail(&args.state)?.state;

    emit(format, airlines.as_slice(), |airlines: &[AirlineCount]| {
        heading(&format!("Top airlines for {}", state));
        if airlines.is_empty() {
            println!("  No flights touch this state");
            return;
        }
        let rows: Vec<Vec<String>> = airlines
            .iter()
            .enumerate()
            .map(|(rank, entry)| {
                vec![
                    (rank + 1).to_string(),
                    entry.airline.clone(),
                    entry.flights.to_string(),
                ]
            })
            .collect();
        print_table(&["#", "Airline", "Flights"], &rows);
    })
}
