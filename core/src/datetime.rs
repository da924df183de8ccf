// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;
use std::str::FromStr;

use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, ToSpan, civil};

/// Zone identifier that means "the evaluating process's own zone".
pub const LOCAL_ZONE: &str = "local";

/// How a wall-clock value tagged with a named zone (`TZID=...`) is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum NamedZonePolicy {
    /// Convert through the time zone database, using the zone's offset at that
    /// wall-clock date. Unknown zones fall back to local time.
    #[default]
    Convert,

    /// Ignore the zone and read the value as local wall-clock time.
    Local,
}

/// A date and time as written in a calendar document, before zone resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LooseDateTime {
    /// Date only without time, e.g. an all-day entry.
    DateOnly(civil::Date),

    /// Floating date and time, read in the local zone.
    Floating(civil::DateTime),

    /// An absolute instant written in UTC.
    Utc(Timestamp),

    /// Wall-clock date and time in a named zone.
    Zoned {
        /// The wall-clock value.
        datetime: civil::DateTime,
        /// The zone identifier as written.
        tzid: String,
    },
}

impl LooseDateTime {
    /// Parse a `YYYYMMDD` or `YYYYMMDDTHHMM[SS][Z]` value.
    ///
    /// Fields are not range checked: they roll over into the next larger unit,
    /// so `20240231` is March 2nd and `T240000` is midnight of the next day.
    /// Returns `None` for empty values, non-digits, a wrong width, or a year out
    /// of range.
    pub fn parse(value: &str, tzid: Option<&str>) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        if value.len() == 8 {
            return rolled_date(value).map(Self::DateOnly);
        }

        let (body, is_utc) = match value.strip_suffix('Z') {
            Some(body) => (body, true),
            None => (value, false),
        };
        if !matches!(body.len(), 13 | 15) || body.get(8..9) != Some("T") {
            return None;
        }

        // Seconds are optional: `YYYYMMDDTHHMM`
        let second: i64 = match body.len() {
            15 => digits(body, 13..15)?,
            _ => 0,
        };
        let hour: i64 = digits(body, 9..11)?;
        let minute: i64 = digits(body, 11..13)?;
        let datetime = rolled_date(body.get(..8)?)?
            .to_datetime(civil::Time::midnight())
            .checked_add(hour.hours().minutes(minute).seconds(second))
            .ok()?;

        Some(match tzid {
            _ if is_utc => Self::Utc(Offset::UTC.to_timestamp(datetime).ok()?),
            Some(tzid) if !tzid.is_empty() && tzid != LOCAL_ZONE => Self::Zoned {
                datetime,
                tzid: tzid.to_string(),
            },
            _ => Self::Floating(datetime),
        })
    }

    /// Whether this value carries no time of day.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::DateOnly(_))
    }

    /// Resolve to an absolute instant.
    ///
    /// Date-only and floating values are read in `local`; nonexistent or
    /// repeated local times use the "compatible" disambiguation (later for a
    /// gap, earlier for a fold).
    pub fn resolve(&self, local: &TimeZone, policy: NamedZonePolicy) -> Option<Timestamp> {
        match self {
            Self::DateOnly(date) => in_zone(date.to_datetime(civil::Time::midnight()), local),
            Self::Floating(datetime) => in_zone(*datetime, local),
            Self::Utc(timestamp) => Some(*timestamp),
            Self::Zoned { datetime, tzid } => match policy {
                NamedZonePolicy::Local => in_zone(*datetime, local),
                NamedZonePolicy::Convert => match TimeZone::get(tzid) {
                    Ok(tz) => in_zone(*datetime, &tz),
                    Err(err) => {
                        tracing::debug!(tzid, %err, "unknown timezone, treating as floating");
                        in_zone(*datetime, local)
                    }
                },
            },
        }
    }
}

/// `YYYYMMDD`, with month and day added to January 1st of the year.
fn rolled_date(value: &str) -> Option<civil::Date> {
    let year: i16 = digits(value, 0..4)?;
    let month: i64 = digits(value, 4..6)?;
    let day: i64 = digits(value, 6..8)?;
    civil::Date::new(year, 1, 1)
        .ok()?
        .checked_add((month - 1).months().days(day - 1))
        .ok()
}

fn in_zone(datetime: civil::DateTime, tz: &TimeZone) -> Option<Timestamp> {
    datetime.to_zoned(tz.clone()).ok().map(|zoned| zoned.timestamp())
}

/// Parse a fixed-width run of ASCII digits.
fn digits<T: FromStr>(s: &str, range: Range<usize>) -> Option<T> {
    let part = s.get(range)?;
    match !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
        true => part.parse().ok(),
        false => None,
    }
}
