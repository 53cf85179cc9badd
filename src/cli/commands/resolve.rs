//! City resolution diagnostics command

use super::shared::{emit, heading, print_table};
use crate::Result;
use crate::app::services::city_state_resolver::{CityStateResolver, MatchKind};
use crate::app::services::state_aggregator::state_names::display_name;
use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::config::Config;
use serde::Serialize;

/// Resolution outcome for one input city
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityResolution {
    pub city: String,
    pub state: Option<String>,
    pub matched_city: Option<String>,
    pub matched_by: Option<String>,
}

/// Resolve each city against the configured table
pub fn run_resolve(config: &Config, args: &ResolveArgs, format: OutputFormat) -> Result<()> {
    let resolver = CityStateResolver::load_or_default(&config.city_state_map_path);
    let results = resolve_cities(&resolver, &args.cities);
    emit(format, results.as_slice(), print_resolutions)
}

/// Resolve every city, keeping input order
pub fn resolve_cities(resolver: &CityStateResolver, cities: &[String]) -> Vec<CityResolution> {
    cities
        .iter()
        .map(|city| match resolver.resolve_detailed(city) {
            Some(resolution) => CityResolution {
                city: city.clone(),
                state: Some(display_name(&resolution.state)),
                matched_city: Some(resolution.matched_city),
                matched_by: Some(match_kind_label(resolution.kind).to_string()),
            },
            None => CityResolution {
                city: city.clone(),
                state: None,
                matched_city: None,
                matched_by: None,
            },
        })
        .collect()
}

fn match_kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Direct => "direct",
        MatchKind::Rewrite => "rewrite",
        MatchKind::Alias => "alias",
        MatchKind::Loose => "loose",
    }
}

fn print_resolutions(results: &[CityResolution]) {
    heading("City resolution");
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|result| {
            vec![
                result.city.clone(),
                result.state.clone().unwrap_or_else(|| "not found".to_string()),
                result.matched_city.clone().unwrap_or_default(),
                result.matched_by.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["City", "State", "Matched", "Stage"], &rows);
}
