// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversions between the vendor's stored time representations and
//! human-facing forms.
//!
//! The vendor database stores three kinds of time values:
//!
//! - **Packed dates** (`startDate`, `deadline`): a calendar date packed into a
//!   single integer as `year << 16 | month << 12 | day << 7`. Integer order
//!   matches chronological order.
//! - **Packed times** (`reminderTime`): a wall-clock time packed as
//!   `hour << 26 | minute << 20`.
//! - **Epoch timestamps** (`stopDate`, `creationDate`, `userModificationDate`):
//!   floating-point seconds since the Unix epoch.
//!
//! Zero (or, for packed values, any non-positive integer) means "absent".
//! Everything facing a caller is either an ISO `YYYY-MM-DD` date, an `HH:MM`
//! time, or a [`chrono`] value in the local time zone.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone, Timelike};

use crate::error::{Error, Result};

const YEAR_SHIFT: u32 = 16;
const MONTH_SHIFT: u32 = 12;
const DAY_SHIFT: u32 = 7;
const YEAR_MASK: i64 = 0x7FF;
const MONTH_MASK: i64 = 0xF;
const DAY_MASK: i64 = 0x1F;

const HOUR_SHIFT: u32 = 26;
const MINUTE_SHIFT: u32 = 20;
const HOUR_MASK: i64 = 0x1F;
const MINUTE_MASK: i64 = 0x3F;

/// SQL expression evaluating to today's packed date in local time.
///
/// Evaluated by the database engine so that "today" agrees with the engine's
/// own notion of local time rather than a client-side literal.
const TODAY_PACKED_SQL: &str = "((CAST(strftime('%Y', 'now', 'localtime') AS INTEGER) << 16) \
| (CAST(strftime('%m', 'now', 'localtime') AS INTEGER) << 12) \
| (CAST(strftime('%d', 'now', 'localtime') AS INTEGER) << 7))";

/// Pack a calendar date into the vendor's integer form.
///
/// This is pure bit-packing: month and day are not range-checked.
pub fn encode_date(year: i32, month: u32, day: u32) -> i64 {
    (i64::from(year) << YEAR_SHIFT)
        | (i64::from(month) << MONTH_SHIFT)
        | (i64::from(day) << DAY_SHIFT)
}

/// Unpack a packed date into `(year, month, day)`.
///
/// Returns `None` for non-positive values. Garbage in yields implausible
/// fields, not an error.
pub fn decode_date(packed: i64) -> Option<(i32, u32, u32)> {
    if packed <= 0 {
        return None;
    }
    let year = ((packed >> YEAR_SHIFT) & YEAR_MASK) as i32;
    let month = ((packed >> MONTH_SHIFT) & MONTH_MASK) as u32;
    let day = ((packed >> DAY_SHIFT) & DAY_MASK) as u32;
    Some((year, month, day))
}

/// Pack a [`NaiveDate`].
pub fn encode_naive_date(date: NaiveDate) -> i64 {
    encode_date(date.year(), date.month(), date.day())
}

/// Unpack into a [`NaiveDate`], or `None` if absent or not a real calendar date.
pub fn decode_naive_date(packed: i64) -> Option<NaiveDate> {
    let (year, month, day) = decode_date(packed)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse an ISO `YYYY-MM-DD` string into a packed date.
///
/// The empty string is absent (`Ok(None)`); anything else that is not a
/// valid `YYYY-MM-DD` date is [`Error::InvalidFormat`].
pub fn parse_iso_date(value: &str) -> Result<Option<i64>> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_iso_naive(value)
        .map(|date| Some(encode_naive_date(date)))
        .ok_or_else(|| Error::InvalidFormat(value.to_string()))
}

/// Parse exactly `YYYY-MM-DD` into a real calendar date.
pub(crate) fn parse_iso_naive(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format a packed date as `YYYY-MM-DD`, or `""` when absent.
pub fn format_iso_date(packed: i64) -> String {
    match decode_date(packed) {
        Some((year, month, day)) => format!("{year:04}-{month:02}-{day:02}"),
        None => String::new(),
    }
}

/// Pack an hour and minute into the vendor's time integer.
pub fn encode_time(hour: u32, minute: u32) -> i64 {
    (i64::from(hour) << HOUR_SHIFT) | (i64::from(minute) << MINUTE_SHIFT)
}

/// Pack a [`NaiveTime`], dropping seconds.
pub fn encode_naive_time(time: NaiveTime) -> i64 {
    encode_time(time.hour(), time.minute())
}

/// Unpack a packed time as `HH:MM`, or `""` when absent.
pub fn decode_time(packed: i64) -> String {
    if packed <= 0 {
        return String::new();
    }
    let hour = (packed >> HOUR_SHIFT) & HOUR_MASK;
    let minute = (packed >> MINUTE_SHIFT) & MINUTE_MASK;
    format!("{hour:02}:{minute:02}")
}

/// Convert an epoch timestamp into local time, or `None` when it is zero.
pub fn epoch_to_local(epoch: f64) -> Option<DateTime<Local>> {
    if epoch == 0.0 || !epoch.is_finite() {
        return None;
    }
    let secs = epoch.floor();
    let nanos = ((epoch - secs) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos).map(|utc| utc.with_timezone(&Local))
}

/// Like [`epoch_to_local`] but for columns that must be set.
///
/// A zero timestamp is [`Error::InvalidParameter`].
pub fn required_epoch_to_local(epoch: f64, column: &str) -> Result<DateTime<Local>> {
    epoch_to_local(epoch).ok_or_else(|| {
        Error::InvalidParameter(format!("{column} requires a non-zero timestamp"))
    })
}

/// Convert a timestamp in any zone back to epoch seconds.
pub fn local_to_epoch<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> f64 {
    timestamp.timestamp() as f64 + f64::from(timestamp.timestamp_subsec_micros()) / 1_000_000.0
}

/// SQL expression producing today's packed date at query evaluation time.
pub fn current_date_as_packed_sql() -> &'static str {
    TODAY_PACKED_SQL
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
