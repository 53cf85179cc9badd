//! Core flight CSV parser implementation
//!
//! Handles opening the source, header analysis and row iteration. A source
//! that cannot be opened, or whose header cannot be read, is an error; a
//! malformed row is recorded as a warning and skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::{ColumnMapping, FlightField};
use super::field_parsers::{parse_duration, parse_price, parse_stops};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::FlightRecord;
use crate::{Error, Result};

/// Parser for delimited flight datasets with a header row
#[derive(Debug, Clone, Default)]
pub struct FlightCsvParser {
    /// Reject sources without source and destination columns
    strict_header: bool,
}

impl FlightCsvParser {
    /// Create a lenient parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Require source and destination columns to be present
    pub fn with_strict_header(mut self, strict: bool) -> Self {
        self.strict_header = strict;
        self
    }

    /// Parse a CSV file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing flight CSV file: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open file {}", file_path.display()), e)
        })?;

        self.parse_reader(file, &file_path.display().to_string())
    }

    /// Parse CSV content from any reader; `label` names the source in errors
    pub fn parse_reader<R: Read>(&self, reader: R, label: &str) -> Result<ParseResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| {
            Error::csv_parsing(label, "Failed to read CSV header", Some(e))
        })?;

        let column_mapping = ColumnMapping::analyze(headers);
        let mut stats = ParseStats::new();
        self.check_header(&column_mapping, label, &mut stats)?;

        debug!(
            "Column mapping for {}: {} columns, missing fields: {:?}",
            label,
            column_mapping.column_count(),
            stats.missing_columns
        );

        let mut records = Vec::new();

        for result in csv_reader.records() {
            stats.total_records += 1;

            match result {
                Ok(row) => {
                    records.push(parse_flight_record(&row, &column_mapping));
                    stats.records_parsed += 1;
                }
                Err(e) => {
                    let message = format!("Row {}: {}", stats.total_records, e);
                    warn!("Skipping malformed CSV row in {}: {}", label, message);
                    stats.add_skipped(message);
                }
            }
        }

        info!("Parsed {}: {}", label, stats.summary());

        Ok(ParseResult { records, stats })
    }

    fn check_header(
        &self,
        mapping: &ColumnMapping,
        label: &str,
        stats: &mut ParseStats,
    ) -> Result<()> {
        let missing = mapping.missing_fields();
        stats.missing_columns = missing.iter().map(|field| field.name().to_string()).collect();

        let missing_route_columns: Vec<&str> = [FlightField::Source, FlightField::Destination]
            .into_iter()
            .filter(|field| missing.contains(field))
            .map(FlightField::name)
            .collect();

        if missing_route_columns.is_empty() {
            return Ok(());
        }

        if self.strict_header {
            return Err(Error::csv_parsing(
                label,
                format!("Missing required columns: {}", missing_route_columns.join(", ")),
                None,
            ));
        }

        warn!(
            "{} has no {} column; affected flights will not resolve to a state",
            label,
            missing_route_columns.join("/")
        );
        Ok(())
    }
}

/// Build a flight record from a CSV row
///
/// Never fails: absent columns become empty strings and unparsable numbers
/// become zero.
pub fn parse_flight_record(row: &csv::StringRecord, mapping: &ColumnMapping) -> FlightRecord {
    let text = |field: FlightField| mapping.value(row, field).to_string();

    FlightRecord {
        airline: text(FlightField::Airline),
        flight_date: text(FlightField::FlightDate),
        source: text(FlightField::Source),
        destination: text(FlightField::Destination),
        flight_class: text(FlightField::FlightClass),
        duration_hours: parse_duration(mapping.value(row, FlightField::Duration)),
        price: parse_price(mapping.value(row, FlightField::Price)),
        departure_time: text(FlightField::DepartureTime),
        arrival_time: text(FlightField::ArrivalTime),
        stops: parse_stops(mapping.value(row, FlightField::Stops)),
        additional_info: text(FlightField::AdditionalInfo),
    }
}
