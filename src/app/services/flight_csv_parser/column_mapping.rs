//! Column mapping for flight CSV headers
//!
//! Dataset exports name the same column differently ("source", "from_city",
//! "from"). This module maps header positions to logical flight fields using
//! the synonym lists in [`crate::constants::columns`].

use crate::constants::columns;
use csv::StringRecord;
use std::collections::HashMap;

/// Logical fields of a flight record that come from CSV columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightField {
    Airline,
    FlightDate,
    Source,
    Destination,
    FlightClass,
    Duration,
    Price,
    DepartureTime,
    ArrivalTime,
    Stops,
    AdditionalInfo,
}

impl FlightField {
    /// All fields in record order
    pub const ALL: [FlightField; 11] = [
        FlightField::Airline,
        FlightField::FlightDate,
        FlightField::Source,
        FlightField::Destination,
        FlightField::FlightClass,
        FlightField::Duration,
        FlightField::Price,
        FlightField::DepartureTime,
        FlightField::ArrivalTime,
        FlightField::Stops,
        FlightField::AdditionalInfo,
    ];

    /// Header synonyms for this field, in priority order
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            FlightField::Airline => columns::AIRLINE,
            FlightField::FlightDate => columns::FLIGHT_DATE,
            FlightField::Source => columns::SOURCE,
            FlightField::Destination => columns::DESTINATION,
            FlightField::FlightClass => columns::FLIGHT_CLASS,
            FlightField::Duration => columns::DURATION,
            FlightField::Price => columns::PRICE,
            FlightField::DepartureTime => columns::DEPARTURE_TIME,
            FlightField::ArrivalTime => columns::ARRIVAL_TIME,
            FlightField::Stops => columns::STOPS,
            FlightField::AdditionalInfo => columns::ADDITIONAL_INFO,
        }
    }

    /// Name used in logs and reports
    pub fn name(self) -> &'static str {
        self.synonyms()[0]
    }
}

/// Header analysis result
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Normalized column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Candidate column indices per field, in synonym priority order
    field_indices: HashMap<FlightField, Vec<usize>>,
}

impl ColumnMapping {
    /// Analyze header names; names are trimmed and lowercased before matching
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = normalize_header(header);
            // Keep the first occurrence of a duplicated header
            name_to_index.entry(column_name).or_insert(index);
        }

        let field_indices = FlightField::ALL
            .iter()
            .map(|&field| {
                let indices = field
                    .synonyms()
                    .iter()
                    .filter_map(|synonym| name_to_index.get(*synonym).copied())
                    .collect();
                (field, indices)
            })
            .collect();

        ColumnMapping {
            name_to_index,
            field_indices,
        }
    }

    /// Value of a field in a record: the first synonym column with a non-empty value
    pub fn value<'a>(&self, record: &'a StringRecord, field: FlightField) -> &'a str {
        self.field_indices
            .get(&field)
            .into_iter()
            .flatten()
            .filter_map(|&index| record.get(index))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Check if any synonym column for a field is present
    pub fn has_field(&self, field: FlightField) -> bool {
        self.field_indices
            .get(&field)
            .is_some_and(|indices| !indices.is_empty())
    }

    /// Fields with no matching column in the header
    pub fn missing_fields(&self) -> Vec<FlightField> {
        FlightField::ALL
            .iter()
            .copied()
            .filter(|&field| !self.has_field(field))
            .collect()
    }

    /// Number of header columns
    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}

fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}
