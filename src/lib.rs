//! State Flight Stats Library
//!
//! A Rust library for turning a flat table of Indian domestic flight records
//! into per-state statistics: incoming and outgoing flight counts, unique
//! routes and the airlines serving each state or union territory.
//!
//! This library provides tools for:
//! - Parsing flight CSV files with column-synonym mapping and lenient field parsing
//! - Resolving free-text city names to canonical states (normalization, rewrites, aliases)
//! - Holding flight records in a thread-safe in-memory store
//! - Computing state-wise aggregations in a single pass with atomic snapshot publication
//! - Read-only queries over the published snapshot (state list, detail, top airlines)

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bootstrap;
        pub mod city_state_resolver;
        pub mod flight_csv_parser;
        pub mod flight_store;
        pub mod state_aggregator;
        pub mod state_query;

        pub use bootstrap::FlightStatsServices;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FlightRecord, StateAggregation};
pub use config::Config;

/// Result type alias for state flight statistics operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading, resolving and querying flight statistics
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// City-to-state reference table could not be built
    #[error("City-state table error: {message}")]
    CityStateTable { message: String },

    /// JSON (de)serialization error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Requested state is not part of the known state universe
    #[error("State not found: {state}")]
    StateNotFound { state: String },

}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a city-state table error
    pub fn city_state_table(message: impl Into<String>) -> Self {
        Self::CityStateTable {
            message: message.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a state not found error
    pub fn state_not_found(state: impl Into<String>) -> Self {
        Self::StateNotFound {
            state: state.into(),
        }
    }

    /// True for the caller-visible "unknown state" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StateNotFound { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
