// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use interdorm_core::{Session, WeeklySchedule, Window};
use jiff::SignedDuration;
use jiff::civil::{Time, Weekday, date, time};
use jiff::tz::TimeZone;

use crate::common::ts;

fn la() -> TimeZone {
    TimeZone::get("America/Los_Angeles").unwrap()
}

fn local_times(window: &Window) -> (Time, Time) {
    (
        window.start.to_zoned(la()).time(),
        window.end.to_zoned(la()).time(),
    )
}

#[test]
fn sessions_on_spring_forward_sunday_keep_wall_clock() {
    // 00:00 PST, Sunday 2024-03-10
    let now = ts("2024-03-10T08:00:00Z");
    let windows = WeeklySchedule::default().upcoming(now, 2, &la(), "Interdorm");
    assert_eq!(windows.len(), 2);

    assert_eq!(windows[0].start, ts("2024-03-10T20:00:00Z"));
    assert_eq!(windows[0].end, ts("2024-03-11T00:00:00Z"));
    assert_eq!(local_times(&windows[0]), (time(13, 0, 0, 0), time(17, 0, 0, 0)));
    assert_eq!(local_times(&windows[1]), (time(19, 0, 0, 0), time(21, 0, 0, 0)));
}

#[test]
fn friday_session_is_two_hours_on_both_sides_of_fall_back() {
    let schedule = WeeklySchedule::empty().with_session(
        Weekday::Friday,
        Session::new(time(16, 0, 0, 0), time(18, 0, 0, 0)),
    );
    // 00:00 PDT, Friday 2024-11-01
    let now = ts("2024-11-01T07:00:00Z");
    let windows = schedule.upcoming(now, 2, &la(), "x");
    assert_eq!(windows.len(), 2);

    assert_eq!(windows[0].start, ts("2024-11-01T23:00:00Z"));
    assert_eq!(windows[1].start, ts("2024-11-09T00:00:00Z"));
    for window in &windows {
        assert_eq!(window.duration(), SignedDuration::from_hours(2));
        assert_eq!(local_times(window), (time(16, 0, 0, 0), time(18, 0, 0, 0)));
    }
    assert_eq!(
        windows[1].start.to_zoned(la()).date(),
        date(2024, 11, 8)
    );
}

#[test]
fn session_across_spring_forward_loses_an_absolute_hour() {
    let schedule = WeeklySchedule::empty().with_session(
        Weekday::Sunday,
        Session::new(time(1, 0, 0, 0), time(5, 0, 0, 0)),
    );
    let now = ts("2024-03-10T08:00:00Z");
    let windows = schedule.upcoming(now, 1, &la(), "x");

    assert_eq!(windows[0].start, ts("2024-03-10T09:00:00Z"));
    assert_eq!(windows[0].end, ts("2024-03-10T12:00:00Z"));
    assert_eq!(windows[0].duration(), SignedDuration::from_hours(3));
    assert_eq!(local_times(&windows[0]), (time(1, 0, 0, 0), time(5, 0, 0, 0)));
}

#[test]
fn session_across_fall_back_gains_an_absolute_hour() {
    let schedule = WeeklySchedule::empty().with_session(
        Weekday::Sunday,
        Session::new(time(0, 30, 0, 0), time(3, 0, 0, 0)),
    );
    // 00:00 PDT, Sunday 2024-11-03
    let now = ts("2024-11-03T07:00:00Z");
    let windows = schedule.upcoming(now, 1, &la(), "x");

    assert_eq!(windows[0].start, ts("2024-11-03T07:30:00Z"));
    assert_eq!(windows[0].end, ts("2024-11-03T11:00:00Z"));
    assert_eq!(
        windows[0].duration(),
        SignedDuration::from_hours(3) + SignedDuration::from_mins(30)
    );
}

#[test]
fn count_truncates_and_windows_stay_sorted() {
    let now = ts("2024-01-15T20:00:00Z");
    let windows = WeeklySchedule::default().upcoming(now, 9, &la(), "Interdorm");
    assert_eq!(windows.len(), 9);
    assert!(windows.windows(2).all(|pair| pair[0].start <= pair[1].start));
    assert!(windows.iter().all(|w| w.end >= now));
}

#[test]
fn scan_stops_after_three_weeks() {
    // Only the default table's days exist; nine sessions per week
    let now = ts("2024-01-15T20:00:00Z");
    let windows = WeeklySchedule::default().upcoming(now, 1000, &la(), "Interdorm");
    assert_eq!(windows.len(), 27);
}
