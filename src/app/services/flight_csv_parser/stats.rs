//! Parsing statistics and result structures for flight CSV processing

use crate::app::models::FlightRecord;
use crate::constants::MAX_RECORDED_PARSE_ERRORS;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed flight records
    pub records: Vec<FlightRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub total_records: usize,

    /// Number of rows successfully parsed
    pub records_parsed: usize,

    /// Number of rows skipped due to errors
    pub records_skipped: usize,

    /// Row-level warnings, capped at a fixed number of entries
    pub errors: Vec<String>,

    /// Logical fields with no matching header column
    pub missing_columns: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            records_parsed: 0,
            records_skipped: 0,
            errors: Vec::new(),
            missing_columns: Vec::new(),
        }
    }

    /// Record a skipped row
    pub fn add_skipped(&mut self, message: String) {
        self.records_skipped += 1;
        if self.errors.len() < MAX_RECORDED_PARSE_ERRORS {
            self.errors.push(message);
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows, {} parsed, {} skipped ({:.1}% success)",
            self.total_records,
            self.records_parsed,
            self.records_skipped,
            self.success_rate()
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
