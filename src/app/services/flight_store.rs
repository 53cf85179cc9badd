//! In-memory flight record store
//!
//! Holds the parsed flight set and its load statistics behind a single
//! read/write lock. A load replaces both together; readers always receive
//! clones.

use crate::app::models::FlightRecord;
use crate::app::services::flight_csv_parser::{FlightCsvParser, ParseResult, ParseStats};
use crate::Result;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of the most recent successful load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Where the records came from
    pub source: String,
    /// Number of records now held by the store
    pub records_loaded: usize,
    /// Row-level parsing statistics
    pub parse: ParseStats,
    /// When the load completed
    pub loaded_at: DateTime<Utc>,
}

impl LoadStats {
    fn from_parse(source: impl Into<String>, parse: ParseStats, records_loaded: usize) -> Self {
        Self {
            source: source.into(),
            records_loaded,
            parse,
            loaded_at: Utc::now(),
        }
    }

    /// True when any row was skipped during the load
    pub fn has_warnings(&self) -> bool {
        self.parse.records_skipped > 0
    }
}

#[derive(Debug, Default)]
struct StoreContents {
    records: Vec<FlightRecord>,
    last_load: Option<LoadStats>,
}

/// Thread-safe owner of the canonical flight record set
#[derive(Debug, Default)]
pub struct FlightRecordStore {
    contents: RwLock<StoreContents>,
    parser: FlightCsvParser,
}

impl FlightRecordStore {
    /// Create an empty store with a lenient parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that loads through `parser`
    pub fn with_parser(parser: FlightCsvParser) -> Self {
        Self {
            parser,
            ..Self::default()
        }
    }

    /// Load a CSV file, replacing the current record set
    ///
    /// If the file cannot be opened or its header cannot be read the error is
    /// returned and the previous record set stays in place.
    pub fn load(&self, path: &Path) -> Result<LoadStats> {
        let result = self.parser.parse_file(path)?;
        Ok(self.publish(path.display().to_string(), result))
    }

    /// Load CSV content from any reader, replacing the current record set
    pub fn load_from_reader<R: Read>(&self, reader: R, label: &str) -> Result<LoadStats> {
        let result = self.parser.parse_reader(reader, label)?;
        Ok(self.publish(label, result))
    }

    /// Replace the record set with already-built records
    pub fn replace(&self, records: Vec<FlightRecord>) -> LoadStats {
        let count = records.len();
        let parse = ParseStats {
            total_records: count,
            records_parsed: count,
            ..ParseStats::new()
        };
        self.publish(
            "in-memory",
            ParseResult {
                records,
                stats: parse,
            },
        )
    }

    fn publish(&self, source: impl Into<String>, result: ParseResult) -> LoadStats {
        let ParseResult { records, stats } = result;
        let load = LoadStats::from_parse(source, stats, records.len());

        if load.has_warnings() {
            warn!(
                "Skipped {} malformed rows while loading {}",
                load.parse.records_skipped, load.source
            );
        }

        *self.contents.write() = StoreContents {
            records,
            last_load: Some(load.clone()),
        };

        info!("Loaded {} flights from {}", load.records_loaded, load.source);
        load
    }

    /// Copy of every record currently held
    pub fn all(&self) -> Vec<FlightRecord> {
        self.contents.read().records.clone()
    }

    /// Number of records currently held
    pub fn count(&self) -> usize {
        self.contents.read().records.len()
    }

    /// Run `f` over the records without copying them
    ///
    /// The read lock is held for the duration of `f`.
    pub fn with_records<T>(&self, f: impl FnOnce(&[FlightRecord]) -> T) -> T {
        f(&self.contents.read().records)
    }

    /// Statistics of the most recent successful load
    pub fn last_load(&self) -> Option<LoadStats> {
        self.contents.read().last_load.clone()
    }

    /// Record count and last load statistics read under the same lock
    pub fn count_with_last_load(&self) -> (usize, Option<LoadStats>) {
        let contents = self.contents.read();
        (contents.records.len(), contents.last_load.clone())
    }
}
