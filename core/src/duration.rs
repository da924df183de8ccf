// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::SignedDuration;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Format a span of milliseconds as e.g. `"2 days, 3 hours, 5 minutes"`.
///
/// Non-positive spans read `"0 minutes"`. Seconds are truncated. Minutes are
/// shown when non-zero, or when there is neither a day nor an hour part.
pub fn format_millis(millis: i64) -> String {
    if millis <= 0 {
        return plural(0, "minute");
    }

    let days = millis / DAY_MS;
    let hours = millis % DAY_MS / HOUR_MS;
    let minutes = millis % HOUR_MS / MINUTE_MS;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 || parts.is_empty() {
        parts.push(plural(minutes, "minute"));
    }
    parts.join(", ")
}

/// Format a duration, see [`format_millis`].
pub fn format_duration(duration: SignedDuration) -> String {
    format_millis(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
}

fn plural(n: i64, unit: &str) -> String {
    match n {
        1 => format!("1 {unit}"),
        n => format!("{n} {unit}s"),
    }
}
