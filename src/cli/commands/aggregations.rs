//! Full aggregation dump command

use super::shared::{emit, heading, print_table};
use crate::Result;
use crate::app::models::StateAggregation;
use crate::app::services::state_query::{StateFlights, StateQueryService};
use crate::cli::args::{AggregationsArgs, OutputFormat};

/// Dump the aggregation for one state, or every state with data
pub fn run_aggregations(
    query: &StateQueryService,
    args: &AggregationsArgs,
    format: OutputFormat,
) -> Result<()> {
    let flights = query.state_flights(args.state.as_deref())?;
    emit(format, &flights, print_state_flights)
}

fn print_state_flights(flights: &StateFlights) {
    match flights {
        StateFlights::Single(aggregation) => print_single(aggregation),
        StateFlights::All(all) => {
            heading(&format!("Aggregations ({} states with data)", all.len()));
            let rows: Vec<Vec<String>> = all
                .values()
                .map(|aggregation| {
                    vec![
                        aggregation.state_name.clone(),
                        aggregation.total_flights.to_string(),
                        aggregation.incoming_flights.to_string(),
                        aggregation.outgoing_flights.to_string(),
                        aggregation.unique_routes.to_string(),
                        aggregation.airlines.len().to_string(),
                    ]
                })
                .collect();
            print_table(
                &["State", "Total", "Incoming", "Outgoing", "Routes", "Airlines"],
                &rows,
            );
        }
    }
}

fn print_single(aggregation: &StateAggregation) {
    heading(&aggregation.state_name);
    let summary = vec![vec![
        aggregation.total_flights.to_string(),
        aggregation.incoming_flights.to_string(),
        aggregation.outgoing_flights.to_string(),
        aggregation.unique_routes.to_string(),
    ]];
    print_table(&["Total", "Incoming", "Outgoing", "Routes"], &summary);

    if !aggregation.airlines.is_empty() {
        heading("Airlines");
        let rows: Vec<Vec<String>> = aggregation
            .airlines
            .iter()
            .map(|(airline, count)| vec![airline.clone(), count.to_string()])
            .collect();
        print_table(&["Airline", "Flights"], &rows);
    }

    if !aggregation.route_details.is_empty() {
        heading("Routes");
        let rows: Vec<Vec<String>> = aggregation
            .route_details
            .iter()
            .map(|(route, count)| vec![route.clone(), count.to_string()])
            .collect();
        print_table(&["Route", "Flights"], &rows);
    }
}
