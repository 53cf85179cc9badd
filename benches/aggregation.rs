//! Performance benchmarks for the state aggregation pass.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use state_flight_stats::app::models::FlightRecord;
use state_flight_stats::app::services::city_state_resolver::CityStateTable;
use state_flight_stats::app::services::flight_csv_parser::FlightCsvParser;
use state_flight_stats::app::services::state_aggregator::aggregate;

const CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Banglore", "Kolkata", "Chennai", "Hyderabad", "Cochin", "Bombay",
    "New Delhi", "Madras", "Goa", "Pune", "Jaipur", "Lucknow", "Guwahati", "Atlantis",
];

const AIRLINES: &[&str] = &["IndiGo", "Air India", "Vistara", "SpiceJet", "GoAir"];

fn synthetic_flights(count: usize) -> Vec<FlightRecord> {
    (0..count)
        .map(|i| {
            FlightRecord::route(
                AIRLINES[i % AIRLINES.len()],
                CITIES[i % CITIES.len()],
                CITIES[(i * 7 + 3) % CITIES.len()],
            )
        })
        .collect()
}

fn synthetic_csv(count: usize) -> String {
    let mut csv = String::from("airline,source,destination,duration,price,stops\n");
    for flight in synthetic_flights(count) {
        csv.push_str(&format!(
            "{},{},{},2h 50m,\"5,953\",1 stop\n",
            flight.airline, flight.source, flight.destination
        ));
    }
    csv
}

/// Benchmark the aggregation pass with varying dataset sizes
fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let table = CityStateTable::builtin();

    for size in [1_000, 10_000, 100_000] {
        let flights = synthetic_flights(size);
        group.bench_with_input(BenchmarkId::new("flights", size), &flights, |b, flights| {
            b.iter(|| black_box(aggregate(flights, &table)));
        });
    }

    group.finish();
}

/// Benchmark CSV parsing into flight records
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = FlightCsvParser::new();

    for size in [1_000, 10_000] {
        let csv = synthetic_csv(size);
        group.bench_with_input(BenchmarkId::new("rows", size), &csv, |b, csv| {
            b.iter(|| black_box(parser.parse_reader(csv.as_bytes(), "bench").unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_parse);
criterion_main!(benches);
