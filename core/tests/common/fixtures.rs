// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use interdorm_core::{Config, SourceMode};
use jiff::Timestamp;

/// A feed with three interdorm events out of order, one unrelated event, a
/// folded summary and an all-day entry.
pub const FEED: &str = "\
BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//Campus//Events//EN\r
BEGIN:VEVENT\r
UID:3\r
SUMMARY:Interdorm Saturday\r
DTSTART;TZID=America/Los_Angeles:20240120T190000\r
DTEND;TZID=America/Los_Angeles:20240120T220000\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:1\r
SUMMARY:Interdorm\r
  Tuesday\r
DTSTART:20240117T030000Z\r
DTEND:20240117T050000Z\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:x\r
SUMMARY:Swim meet\r
DTSTART:20240118T030000Z\r
DTEND:20240118T050000Z\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:2\r
SUMMARY:interdorm open gym\r
DTSTART:20240119\r
DTEND:20240120\r
END:VEVENT\r
END:VCALENDAR\r
";

/// One good event followed by a block that never closes.
pub const UNCLOSED_FEED: &str = "\
BEGIN:VEVENT
SUMMARY:Interdorm
DTSTART:20240117T030000Z
DTEND:20240117T050000Z
END:VEVENT
BEGIN:VEVENT
SUMMARY:Interdorm truncated
DTSTART:20240118T030000Z
";

/// Parse an RFC 3339 instant.
#[must_use]
pub fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

/// Calendar mode, UTC as local zone, filtered on "interdorm".
#[must_use]
pub fn calendar_config() -> Config {
    let mut config = Config {
        mode: SourceMode::Calendar,
        timezone: Some("UTC".to_string()),
        ..Default::default()
    };
    config.calendar.filter = Some("interdorm".to_string());
    config
}

/// Weekly mode with the default Los Angeles table.
#[must_use]
pub fn weekly_config() -> Config {
    Config {
        mode: SourceMode::Weekly,
        timezone: Some("UTC".to_string()),
        ..Default::default()
    }
}
