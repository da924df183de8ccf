// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use interdorm_ical::keyword::{KW_DTEND, KW_DTSTART, KW_SUMMARY, KW_TZID};
use interdorm_ical::{RawProperty, RawRecord, parse_records};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use regex::{Regex, RegexBuilder};

use crate::datetime::{LooseDateTime, NamedZonePolicy};

/// A titled span of time with absolute endpoints.
///
/// `start <= end` is expected but not enforced; malformed documents may
/// violate it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    /// Event or session title.
    pub title: String,

    /// Start instant, inclusive.
    pub start: Timestamp,

    /// End instant, inclusive.
    pub end: Timestamp,
}

impl Window {
    /// Creates a new window.
    pub fn new(title: impl Into<String>, start: Timestamp, end: Timestamp) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Whether `now` lies within `[start, end]`, both ends inclusive.
    pub fn contains(&self, now: Timestamp) -> bool {
        self.start <= now && now <= self.end
    }

    /// The absolute length of the window.
    pub fn duration(&self) -> SignedDuration {
        self.start.duration_until(self.end)
    }
}

/// Case-insensitive title filter.
#[derive(Debug, Clone, Default)]
pub enum WindowFilter {
    /// Accept every title.
    #[default]
    All,

    /// Accept titles matching the expression anywhere.
    Matches(Regex),
}

impl WindowFilter {
    /// Match `keyword` literally, anywhere in the title.
    ///
    /// # Errors
    ///
    /// Returns an error if the escaped keyword exceeds the regex size limit.
    pub fn keyword(keyword: &str) -> Result<Self, regex::Error> {
        Self::pattern(&regex::escape(keyword))
    }

    /// Match a regular expression, anywhere in the title.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(Self::Matches)
    }

    /// Whether a window with this title passes the filter.
    pub fn accepts(&self, title: &str) -> bool {
        match self {
            Self::All => true,
            Self::Matches(re) => re.is_match(title),
        }
    }
}

/// Turn raw records into windows, sorted by start.
///
/// A record without a resolvable `DTSTART` and `DTEND` is dropped. The title is
/// `SUMMARY`, or empty if absent. The sort is stable, so records with equal
/// starts keep their document order.
pub fn normalize_records(
    records: &[RawRecord],
    local: &TimeZone,
    policy: NamedZonePolicy,
) -> Vec<Window> {
    let mut windows: Vec<_> = records
        .iter()
        .filter_map(|record| normalize_record(record, local, policy))
        .collect();
    windows.sort_by_key(|w| w.start);
    windows
}

fn normalize_record(
    record: &RawRecord,
    local: &TimeZone,
    policy: NamedZonePolicy,
) -> Option<Window> {
    let title = record.value(KW_SUMMARY).unwrap_or_default();
    let start = record.get(KW_DTSTART).and_then(|p| resolve(p, local, policy));
    let end = record.get(KW_DTEND).and_then(|p| resolve(p, local, policy));
    match (start, end) {
        (Some(start), Some(end)) => Some(Window::new(title, start, end)),
        _ => {
            tracing::debug!(title, "dropping record without resolvable start and end");
            None
        }
    }
}

fn resolve(property: &RawProperty, local: &TimeZone, policy: NamedZonePolicy) -> Option<Timestamp> {
    LooseDateTime::parse(&property.value, property.parameter(KW_TZID))?.resolve(local, policy)
}

/// The full document pipeline: parse `block` records, normalize, filter, sort.
pub fn windows_from_document(
    document: &str,
    block: &str,
    filter: &WindowFilter,
    local: &TimeZone,
    policy: NamedZonePolicy,
) -> Vec<Window> {
    let records = parse_records(document, block);
    let mut windows = normalize_records(&records, local, policy);
    windows.retain(|w| filter.accepts(&w.title));
    tracing::debug!(
        records = records.len(),
        windows = windows.len(),
        "document normalized"
    );
    windows
}
