// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use interdorm_core::{NamedZonePolicy, StatusSnapshot, WindowFilter, windows_from_document};
use jiff::tz::TimeZone;

use crate::common::{FEED, UNCLOSED_FEED, ts};

#[test]
fn keyword_filter_keeps_matching_titles_sorted_by_start() {
    let filter = WindowFilter::keyword("INTERDORM").unwrap();
    let windows =
        windows_from_document(FEED, "VEVENT", &filter, &TimeZone::UTC, NamedZonePolicy::Convert);

    let titles: Vec<_> = windows.iter().map(|w| w.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Interdorm Tuesday", "interdorm open gym", "Interdorm Saturday"]
    );
    assert!(windows.windows(2).all(|pair| pair[0].start <= pair[1].start));
}

#[test]
fn named_zone_is_converted_and_all_day_is_local_midnight() {
    let windows = windows_from_document(
        FEED,
        "VEVENT",
        &WindowFilter::All,
        &TimeZone::UTC,
        NamedZonePolicy::Convert,
    );
    assert_eq!(windows.len(), 4);

    let saturday = windows.iter().find(|w| w.title == "Interdorm Saturday").unwrap();
    assert_eq!(saturday.start, ts("2024-01-21T03:00:00Z"));
    assert_eq!(saturday.end, ts("2024-01-21T06:00:00Z"));

    let gym = windows.iter().find(|w| w.title == "interdorm open gym").unwrap();
    assert_eq!(gym.start, ts("2024-01-19T00:00:00Z"));
    assert_eq!(gym.end, ts("2024-01-20T00:00:00Z"));
}

#[test]
fn local_policy_reads_named_zone_as_floating() {
    let windows = windows_from_document(
        FEED,
        "VEVENT",
        &WindowFilter::All,
        &TimeZone::UTC,
        NamedZonePolicy::Local,
    );
    let saturday = windows.iter().find(|w| w.title == "Interdorm Saturday").unwrap();
    assert_eq!(saturday.start, ts("2024-01-20T19:00:00Z"));
}

#[test]
fn unclosed_block_yields_only_the_complete_event() {
    let windows = windows_from_document(
        UNCLOSED_FEED,
        "VEVENT",
        &WindowFilter::All,
        &TimeZone::UTC,
        NamedZonePolicy::Convert,
    );
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].title, "Interdorm");
}

#[test]
fn garbage_document_yields_nothing() {
    for document in ["", "not a calendar", "BEGIN:VEVENT\n:::\n;;;\nEND:VEVENT\n"] {
        let windows = windows_from_document(
            document,
            "VEVENT",
            &WindowFilter::All,
            &TimeZone::UTC,
            NamedZonePolicy::Convert,
        );
        assert!(windows.is_empty(), "{document:?}");
    }
}

#[test]
fn status_over_feed() {
    let filter = WindowFilter::keyword("interdorm").unwrap();
    let windows =
        windows_from_document(FEED, "VEVENT", &filter, &TimeZone::UTC, NamedZonePolicy::Convert);

    let snapshot = StatusSnapshot::evaluate(&windows, ts("2024-01-19T12:00:00Z"));
    assert_eq!(snapshot.active.unwrap().title, "interdorm open gym");
    assert_eq!(snapshot.next.unwrap().title, "Interdorm Saturday");

    let snapshot = StatusSnapshot::evaluate(&windows, ts("2024-01-22T00:00:00Z"));
    assert!(snapshot.active.is_none());
    assert!(snapshot.next.is_none());
}
