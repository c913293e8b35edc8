// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;
use yare::parameterized;

// ─────────────────────────────────────────────────────────────────────────────
// Packed dates
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_known_date() {
    assert_eq!(encode_date(2024, 6, 15), 132_671_360);
}

#[parameterized(
    epoch_start = { 1970, 1, 1 },
    leap_day = { 2024, 2, 29 },
    end_of_year = { 1999, 12, 31 },
    far_future = { 2047, 7, 4 },
    max_year = { 2047, 12, 31 },
)]
fn date_round_trip(year: i32, month: u32, day: u32) {
    assert_eq!(decode_date(encode_date(year, month, day)), Some((year, month, day)));
}

#[parameterized(
    zero = { 0 },
    negative = { -1 },
    very_negative = { i64::MIN },
)]
fn non_positive_date_is_absent(packed: i64) {
    assert_eq!(decode_date(packed), None);
    assert_eq!(decode_naive_date(packed), None);
    assert_eq!(format_iso_date(packed), "");
}

#[test]
fn packed_order_matches_chronology() {
    let dates = [
        (2023, 12, 31),
        (2024, 1, 1),
        (2024, 6, 15),
        (2024, 6, 16),
        (2024, 7, 1),
        (2025, 1, 1),
    ];
    let packed: Vec<i64> = dates.iter().map(|&(y, m, d)| encode_date(y, m, d)).collect();
    assert!(packed.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn encode_does_not_validate_fields() {
    let packed = encode_date(2024, 2, 31);
    assert_eq!(decode_date(packed), Some((2024, 2, 31)));
    assert_eq!(decode_naive_date(packed), None);
    assert_eq!(format_iso_date(packed), "2024-02-31");
}

#[test]
fn naive_date_round_trip() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let packed = encode_naive_date(date);
    assert_eq!(packed, encode_date(2024, 6, 15));
    assert_eq!(decode_naive_date(packed), Some(date));
}

// ─────────────────────────────────────────────────────────────────────────────
// ISO parsing and formatting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_iso_date_valid() {
    assert_eq!(parse_iso_date("2024-06-15").unwrap(), Some(132_671_360));
}

#[test]
fn parse_iso_date_empty_is_absent() {
    assert_eq!(parse_iso_date("").unwrap(), None);
}

#[parameterized(
    garbage = { "not-a-date" },
    slashes = { "2024/06/15" },
    short_month = { "2024-6-15" },
    impossible_day = { "2024-02-30" },
    trailing = { "2024-06-15T00:00" },
    spaces = { " 2024-06-15" },
)]
fn parse_iso_date_invalid(input: &str) {
    let err = parse_iso_date(input).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(ref s) if s == input));
}

#[test]
fn format_iso_date_pads_fields() {
    assert_eq!(format_iso_date(encode_date(2024, 3, 5)), "2024-03-05");
}

// ─────────────────────────────────────────────────────────────────────────────
// Packed times
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    midnight_minute = { 0, 1, "00:01" },
    morning = { 9, 5, "09:05" },
    evening = { 23, 59, "23:59" },
)]
fn time_decodes_to_hh_mm(hour: u32, minute: u32, expected: &str) {
    assert_eq!(decode_time(encode_time(hour, minute)), expected);
}

#[test]
fn time_fits_in_31_bits() {
    assert!(encode_time(23, 59) < (1_i64 << 31));
}

#[test]
fn absent_time_is_empty() {
    assert_eq!(decode_time(0), "");
    assert_eq!(decode_time(-5), "");
}

#[test]
fn naive_time_drops_seconds() {
    let time = NaiveTime::from_hms_opt(14, 30, 45).unwrap();
    assert_eq!(decode_time(encode_naive_time(time)), "14:30");
}

// ─────────────────────────────────────────────────────────────────────────────
// Epoch timestamps
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn zero_epoch_is_absent() {
    assert!(epoch_to_local(0.0).is_none());
}

#[test]
fn epoch_converts_to_local_zone() {
    let local = epoch_to_local(1_718_454_600.0).unwrap();
    let utc = local.with_timezone(&Utc);
    assert_eq!(utc.to_rfc3339(), "2024-06-15T12:30:00+00:00");
    assert_eq!(local.offset(), Local.timestamp_opt(1_718_454_600, 0).unwrap().offset());
}

#[test]
fn epoch_keeps_fractional_seconds() {
    let local = epoch_to_local(1_718_454_600.5).unwrap();
    assert_eq!(local.timestamp_subsec_millis(), 500);
}

#[test]
fn epoch_round_trip() {
    let original = Local.timestamp_opt(1_700_000_000, 0).unwrap();
    let epoch = local_to_epoch(&original);
    assert_eq!(epoch_to_local(epoch).unwrap(), original);
}

#[test]
fn required_epoch_rejects_zero() {
    let err = required_epoch_to_local(0.0, "creationDate").unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert!(err.to_string().contains("creationDate"));
}

// ─────────────────────────────────────────────────────────────────────────────
// SQL "today"
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn today_sql_matches_client_encoding() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let sql = format!("SELECT {}", current_date_as_packed_sql());
    let from_db: i64 = conn.query_row(&sql, [], |row| row.get(0)).unwrap();
    let expected = encode_naive_date(Local::now().date_naive());
    assert_eq!(from_db, expected);
}
