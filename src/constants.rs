//! Application constants for the state flight statistics service
//!
//! This module contains the fixed state universe, CSV column synonyms,
//! city-name rewrite and alias tables, and the default values used
//! throughout the application.

// =============================================================================
// State Universe
// =============================================================================

/// Canonical display names of every Indian state and union territory the
/// service reports on, in the order used by state listings.
///
/// This list is authoritative regardless of what appears in the flight data:
/// a name in this list is always a valid query target, even with no flights.
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Puducherry",
    "Andaman and Nicobar Islands",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Lakshadweep",
    "Ladakh",
];

/// Words kept lowercase when a display name is reconstituted from a slug
pub const LOWERCASE_NAME_WORDS: &[&str] = &["and", "or"];

// =============================================================================
// City Name Normalization
// =============================================================================

/// Spelling and historical-name rewrites applied before the table lookup
pub const CITY_REWRITES: &[(&str, &str)] = &[
    ("bombay", "mumbai"),
    ("calcutta", "kolkata"),
    ("new delhi", "delhi"),
    ("bangalore", "bengaluru"),
];

/// Secondary alias table consulted when the direct lookup misses
///
/// Keys are matched after [`CITY_REWRITES`] has been applied, so a rewrite
/// source never appears here. Targets are city keys of the built-in table,
/// not state names.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("banglore", "bengaluru"),
    ("madras", "chennai"),
    ("pondy", "puducherry"),
    ("ponducherry", "puducherry"),
    ("pondicherry", "puducherry"),
    ("trivandrum", "thiruvananthapuram"),
    ("cochin", "kochi"),
    ("calicut", "kozhikode"),
    ("cannanore", "kannur"),
    ("quilon", "kollam"),
    ("alleppey", "alappuzha"),
    ("trichur", "thrissur"),
    ("baroda", "vadodara"),
    ("poona", "pune"),
    ("mysuru", "mysore"),
    ("mangaluru", "mangalore"),
    ("belagavi", "belgaum"),
    ("kalaburagi", "gulbarga"),
    ("hubballi", "hubli"),
    ("gurugram", "gurgaon"),
    ("prayagraj", "allahabad"),
    ("banaras", "varanasi"),
    ("benares", "varanasi"),
    ("kashi", "varanasi"),
    ("cawnpore", "kanpur"),
    ("vizag", "visakhapatnam"),
    ("waltair", "visakhapatnam"),
    ("simla", "shimla"),
    ("gauhati", "guwahati"),
    ("trichy", "tiruchirappalli"),
    ("tuticorin", "thoothukudi"),
    ("tanjore", "thanjavur"),
    ("ooty", "udhagamandalam"),
    ("secunderabad", "hyderabad"),
    ("cuttak", "cuttack"),
    ("panjim", "panaji"),
    ("dabolim", "panaji"),
    ("mopa", "mapusa"),
    ("port-blair", "port blair"),
    ("leh ladakh", "leh"),
];

// =============================================================================
// CSV Column Synonyms
// =============================================================================

/// Header synonyms for each flight record field, in priority order
///
/// Header names are matched after trimming and lowercasing. For every row
/// the first synonym carrying a non-empty value wins.
pub mod columns {
    pub const AIRLINE: &[&str] = &["airline"];
    pub const FLIGHT_DATE: &[&str] = &["date_of_journey", "flight_date", "flight date"];
    pub const SOURCE: &[&str] = &["source", "from_city", "from"];
    pub const DESTINATION: &[&str] = &["destination", "to_city", "to"];
    pub const FLIGHT_CLASS: &[&str] = &["class", "flight_class"];
    pub const DURATION: &[&str] = &["duration"];
    pub const PRICE: &[&str] = &["price"];
    pub const DEPARTURE_TIME: &[&str] = &["departure_time", "dep_time"];
    pub const ARRIVAL_TIME: &[&str] = &["arrival_time", "arr_time"];
    pub const STOPS: &[&str] = &["stops"];
    pub const ADDITIONAL_INFO: &[&str] = &["additional_info", "info"];
}

// =============================================================================
// Defaults
// =============================================================================

/// Default location of the flight dataset
pub const DEFAULT_DATASET_PATH: &str = "data/dataset.csv";

/// Default location of the state-to-cities reference table
pub const DEFAULT_CITY_STATE_MAP_PATH: &str = "data/city_state_map.json";

/// Default number of airlines returned by top-airline queries
pub const DEFAULT_TOP_AIRLINES_LIMIT: usize = 10;

/// Separator between source and destination in route keys
pub const ROUTE_KEY_SEPARATOR: &str = "->";

/// Directory name under the user config dir holding `config.json`
pub const CONFIG_DIR_NAME: &str = "state-flight-stats";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variables overriding configuration values
pub mod env_vars {
    pub const DATASET_PATH: &str = "STATE_FLIGHTS_DATASET";
    pub const CITY_STATE_MAP_PATH: &str = "STATE_FLIGHTS_CITY_MAP";
    pub const TOP_AIRLINES: &str = "STATE_FLIGHTS_TOP_AIRLINES";
}

/// Maximum number of row-level parse errors kept verbatim in parse statistics
pub const MAX_RECORDED_PARSE_ERRORS: usize = 100;
