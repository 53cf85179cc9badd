//! Flight CSV parser for tabular flight datasets
//!
//! This module turns a delimited text source with a header row into
//! [`FlightRecord`](crate::app::models::FlightRecord)s. Column names vary
//! between dataset exports, so headers are matched against synonym lists and
//! every field parser degrades to a default value instead of failing.
//!
//! ## Architecture
//!
//! - [`parser`] - File/reader handling and row iteration
//! - [`column_mapping`] - Header analysis and synonym resolution
//! - [`field_parsers`] - Duration, price and stop-count parsing
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use state_flight_stats::app::services::flight_csv_parser::FlightCsvParser;
//!
//! # fn example() -> state_flight_stats::Result<()> {
//! let parser = FlightCsvParser::new();
//! let result = parser.parse_file(std::path::Path::new("data/dataset.csv"))?;
//!
//! println!("Parsed {} flights from {} rows",
//!          result.stats.records_parsed,
//!          result.stats.total_records);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, FlightField};
pub use parser::FlightCsvParser;
pub use stats::{ParseResult, ParseStats};
