//! Test utilities for flight CSV parser testing

use std::io::Write;
use tempfile::NamedTempFile;

mod field_parser_tests;

/// Header in the layout of the common Kaggle flight price export
pub const KAGGLE_HEADER: &str =
    "Airline,Date_of_Journey,Source,Destination,Route,Dep_Time,Arrival_Time,Duration,Total_Stops,Additional_Info,Price";

/// Header using the alternate "from"/"to" naming
pub const SHORT_HEADER: &str = "airline,flight date,from,to,class,duration,price,dep_time,arr_time,stops,info";

/// Write CSV content to a temporary file
pub fn create_test_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
