// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};

use crate::Error;

/// The first instant of `date` in the given time zone.
pub fn start_of_day(date: Date, tz: &TimeZone) -> Result<Timestamp, Error> {
    Ok(date.to_zoned(tz.clone())?.timestamp())
}

/// The last representable instant of `date` in the given time zone.
pub fn end_of_day(date: Date, tz: &TimeZone) -> Result<Timestamp, Error> {
    let next = start_of_day(date.tomorrow()?, tz)?;
    Ok(next.checked_sub(1.nanosecond())?)
}

/// The Monday on or before `date`.
pub fn monday_of(date: Date) -> Result<Date, Error> {
    let offset = i64::from(date.weekday().to_monday_zero_offset());
    Ok(date.checked_sub(offset.days())?)
}

/// Resolve an IANA time zone name; `None` means UTC, `"local"` is the system zone.
pub fn resolve_time_zone(name: Option<&str>) -> Result<TimeZone, Error> {
    match name {
        None => Ok(TimeZone::UTC),
        Some(name) if name.eq_ignore_ascii_case("utc") => Ok(TimeZone::UTC),
        Some(name) if name.eq_ignore_ascii_case("local") => Ok(TimeZone::system()),
        Some(name) => TimeZone::get(name).map_err(|source| Error::TimeZone {
            name: name.to_string(),
            source,
        }),
    }
}
