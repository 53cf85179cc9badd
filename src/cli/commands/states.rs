//! State listing and state detail commands

use super::shared::{emit, field, heading, print_table};
use crate::Result;
use crate::app::models::{StateDetail, StateSummary};
use crate::app::services::state_aggregator::state_names::to_slug;
use crate::app::services::state_query::StateQueryService;
use crate::cli::args::{OutputFormat, StateArgs};

/// List every state with its total flights
pub fn run_states(query: &StateQueryService, format: OutputFormat) -> Result<()> {
    let states = query.list_all_states();
    emit(format, states.as_slice(), print_states)
}

fn print_states(states: &[StateSummary]) {
    heading("Flights by State");
    print_table(&["State", "Slug", "Total Flights"], &state_rows(states));

    let with_data = states.iter().filter(|s| s.total_flights > 0).count();
    println!("\n{} of {} states have flight data", with_data, states.len());
}

/// Table rows for the state listing; the slug column is what `state` accepts
fn state_rows(states: &[StateSummary]) -> Vec<Vec<String>> {
    states
        .iter()
        .map(|summary| {
            vec![
                summary.state.clone(),
                to_slug(&summary.state),
                summary.total_flights.to_string(),
            ]
        })
        .collect()
}

/// Show the detail view of one state
pub fn run_state(query: &StateQueryService, args: &StateArgs, format: OutputFormat) -> Result<()> {
    let detail = query.state_detail(&args.state)?;
    emit(format, &detail, print_state_detail)
}

fn print_state_detail(detail: &StateDetail) {
    heading(&detail.state);
    field("Total flights", detail.total_flights);
    field("Incoming flights", detail.incoming_flights);
    field("Outgoing flights", detail.outgoing_flights);
    field("Unique routes", detail.routes);
    if detail.airlines.is_empty() {
        field("Airlines", "none");
    } else {
        field("Airlines", detail.airlines.join(", "));
    }
}
