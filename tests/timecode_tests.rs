//! Tests for the time codec (`format_hms` / `parse_hms`).

use stopbar::{format_hms, parse_hms, TimeParseError};

// === Formatting Tests ===

#[test]
fn format_zero() {
    assert_eq!(format_hms(0), "00:00:00");
}

#[test]
fn format_pads_each_field_to_two_digits() {
    assert_eq!(format_hms(3661), "01:01:01");
    assert_eq!(format_hms(5), "00:00:05");
    assert_eq!(format_hms(65), "00:01:05");
}

#[test]
fn format_does_not_wrap_hours_at_24() {
    assert_eq!(format_hms(25 * 3600), "25:00:00");
    assert_eq!(format_hms(100 * 3600 + 59 * 60 + 59), "100:59:59");
}

#[test]
fn format_clamps_negative_input_to_zero() {
    assert_eq!(format_hms(-1), "00:00:00");
    assert_eq!(format_hms(i64::MIN), "00:00:00");
}

// === Parsing Tests ===

#[test]
fn parse_zero() {
    assert_eq!(parse_hms("00:00:00"), Ok(0));
}

#[test]
fn parse_typical_times() {
    assert_eq!(parse_hms("01:02:03"), Ok(3723));
    assert_eq!(parse_hms("00:45:00"), Ok(2700));
    assert_eq!(parse_hms("12:34:56"), Ok(45296));
}

#[test]
fn parse_accepts_unpadded_components() {
    assert_eq!(parse_hms("1:2:3"), Ok(3723));
}

#[test]
fn parse_accepts_hours_beyond_24() {
    assert_eq!(parse_hms("100:00:00"), Ok(360_000));
}

#[test]
fn parse_rejects_wrong_component_count() {
    assert_eq!(parse_hms("1:2"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms("1:2:3:4"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms("45"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms(""), Err(TimeParseError::InvalidFormat));
}

#[test]
fn parse_rejects_out_of_range_minutes_and_seconds() {
    assert_eq!(parse_hms("12:60:00"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms("00:00:60"), Err(TimeParseError::InvalidFormat));
}

#[test]
fn parse_rejects_non_numeric_components() {
    assert_eq!(parse_hms("aa:bb:cc"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms("01:0x2:03"), Err(TimeParseError::InvalidFormat));
}

#[test]
fn parse_rejects_negative_components() {
    assert_eq!(parse_hms("-1:00:00"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms("00:-1:00"), Err(TimeParseError::InvalidFormat));
}

#[test]
fn parse_rejects_empty_components() {
    assert_eq!(parse_hms("::"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms("01:02:"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms(":02:03"), Err(TimeParseError::InvalidFormat));
}

#[test]
fn parse_rejects_surrounding_whitespace() {
    // Callers trim before parsing; the codec itself is strict.
    assert_eq!(parse_hms(" 01:02:03"), Err(TimeParseError::InvalidFormat));
    assert_eq!(parse_hms("01:02:03 "), Err(TimeParseError::InvalidFormat));
}

// === Round-Trip Tests ===

#[test]
fn roundtrip_well_formed_strings() {
    for s in ["00:00:00", "00:00:59", "01:01:01", "12:34:56", "99:59:59"] {
        let seconds = parse_hms(s).expect("well-formed input");
        assert_eq!(format_hms(seconds as i64), s);
    }
}

#[test]
fn roundtrip_normalizes_unpadded_input() {
    let seconds = parse_hms("1:2:3").unwrap();
    assert_eq!(format_hms(seconds as i64), "01:02:03");
}

// === Error Display ===

#[test]
fn error_message_names_the_expected_format() {
    let msg = TimeParseError::InvalidFormat.to_string();
    assert!(msg.contains("HH:MM:SS"));
}
