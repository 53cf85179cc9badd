//! Tests for duration, price and stop parsing

use crate::app::services::flight_csv_parser::field_parsers::{
    parse_duration, parse_price, parse_stops,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_duration_forms() {
    let cases = [
        ("2h 50m", 2.0 + 50.0 / 60.0),
        ("2h50m", 2.0 + 50.0 / 60.0),
        ("19h", 19.0),
        ("45m", 0.75),
        ("2.5", 2.5),
        (" 7h 5m ", 7.0 + 5.0 / 60.0),
        ("1.5h", 1.5),
    ];

    for (input, expected) in cases {
        assert_close(parse_duration(input), expected);
    }
}

#[test]
fn test_duration_ignores_trailing_number_without_unit() {
    assert_close(parse_duration("2h 5"), 2.0);
    assert_close(parse_duration("11h 30"), 11.0);
}

#[test]
fn test_duration_stop_descriptors_are_zero() {
    assert_eq!(parse_duration("non-stop"), 0.0);
    assert_eq!(parse_duration("Non-Stop"), 0.0);
    assert_eq!(parse_duration("1-stop"), 0.0);
    assert_eq!(parse_duration("2-stop"), 0.0);
}

#[test]
fn test_duration_unparsable_is_zero() {
    assert_eq!(parse_duration(""), 0.0);
    assert_eq!(parse_duration("soon"), 0.0);
    assert_eq!(parse_duration("h"), 0.0);
    assert_eq!(parse_duration("NaN"), 0.0);
}

#[test]
fn test_price_cleaning() {
    assert_close(parse_price("5,953"), 5953.0);
    assert_close(parse_price("₹ 12,000.50"), 12000.5);
    assert_close(parse_price("3897"), 3897.0);
    assert_eq!(parse_price(""), 0.0);
    assert_eq!(parse_price("free"), 0.0);
    assert_eq!(parse_price("1.2.3"), 0.0);
}

#[test]
fn test_stops_cleaning() {
    assert_eq!(parse_stops("non-stop"), 0);
    assert_eq!(parse_stops("1 stop"), 1);
    assert_eq!(parse_stops("2 stops"), 2);
    assert_eq!(parse_stops("3"), 3);
    assert_eq!(parse_stops(""), 0);
    assert_eq!(parse_stops("-"), 0);
}

#[test]
fn test_stops_saturate_on_overflow() {
    assert_eq!(parse_stops("99999999999"), u32::MAX);
    assert_eq!(parse_stops("4294967295"), u32::MAX);
    assert_eq!(parse_stops("4294967294 stops"), u32::MAX - 1);
}
