//! Test utilities for city-state resolution
//!
//! Shared fixtures for the table and resolver test modules.

use super::CityStateTable;
use std::io::Write;
use tempfile::NamedTempFile;


/// Small external-style reference document
pub const SAMPLE_MAP_JSON: &str = r#"{
    "Maharashtra": ["Mumbai", "Pune", " Nagpur "],
    "Tamil Nadu": ["Chennai", "Coimbatore"],
    "Delhi": ["Delhi"],
    "Puducherry": ["Puducherry"]
}"#;

/// Table built from [`SAMPLE_MAP_JSON`]
pub fn sample_table() -> CityStateTable {
    CityStateTable::from_json_str(SAMPLE_MAP_JSON).unwrap()
}

/// Write content to a temporary file that lives as long as the handle
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
