// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use interdorm_core::{Error, Interdorm, Status};

use crate::common::{FEED, FakeSource, calendar_config, ts, weekly_config};

#[tokio::test]
async fn refresh_replaces_store_and_tick_reevaluates() {
    let engine = Interdorm::new(calendar_config(), Some(FakeSource::once(FEED))).unwrap();
    assert!(engine.tick(ts("2024-01-17T04:00:00Z")).is_none());

    let status = engine.refresh(ts("2024-01-17T04:00:00Z")).await;
    let snapshot = status.snapshot().unwrap();
    assert_eq!(snapshot.active.as_ref().unwrap().title, "Interdorm Tuesday");
    assert_eq!(engine.store().get().unwrap().len(), 3);

    let later = engine.tick(ts("2024-01-18T00:00:00Z")).unwrap();
    assert!(!later.is_active());
    assert_eq!(later.next.unwrap().title, "interdorm open gym");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_windows() {
    let source = FakeSource::script([Some(FEED), None]);
    let engine = Interdorm::new(calendar_config(), Some(source)).unwrap();

    let first = engine.refresh(ts("2024-01-16T00:00:00Z")).await;
    assert!(matches!(first, Status::Available(_)));

    let now = ts("2024-01-17T04:00:00Z");
    let second = engine.refresh(now).await;
    let Status::Unavailable {
        evaluated_at,
        reason,
    } = second
    else {
        panic!("expected unavailable, got {second:?}");
    };
    assert_eq!(evaluated_at, now);
    assert!(reason.contains("calendar feed"), "{reason}");

    assert_eq!(engine.store().get().unwrap().len(), 3);
    let snapshot = engine.tick(now).unwrap();
    assert_eq!(snapshot.active.unwrap().title, "Interdorm Tuesday");
}

#[tokio::test]
async fn failure_before_any_success_leaves_tick_idle() {
    let source = FakeSource::script([None]);
    let engine = Interdorm::new(calendar_config(), Some(source)).unwrap();

    let status = engine.refresh(ts("2024-01-16T00:00:00Z")).await;
    assert!(status.snapshot().is_none());
    assert!(engine.tick(ts("2024-01-16T00:00:00Z")).is_none());
    assert!(engine.upcoming(ts("2024-01-16T00:00:00Z"), 6).is_none());
}

#[tokio::test]
async fn nothing_scheduled_is_available_not_unavailable() {
    let engine = Interdorm::new(calendar_config(), Some(FakeSource::once(""))).unwrap();
    let status = engine.refresh(ts("2024-01-16T00:00:00Z")).await;
    let snapshot = status.snapshot().unwrap();
    assert!(snapshot.active.is_none());
    assert!(snapshot.next.is_none());
}

#[tokio::test]
async fn weekly_mode_needs_no_source() {
    let engine = Interdorm::new(weekly_config(), None).unwrap();
    // 19:30 PST, Tuesday 2024-01-16
    let now = ts("2024-01-17T03:30:00Z");
    let status = engine.refresh(now).await;

    let snapshot = status.snapshot().unwrap();
    let active = snapshot.active.as_ref().unwrap();
    assert_eq!(active.title, "Interdorm");
    assert_eq!(active.end, ts("2024-01-17T05:00:00Z"));
    assert_eq!(snapshot.next.as_ref().unwrap().start, ts("2024-01-18T03:00:00Z"));

    let stored = engine.store().get().unwrap();
    assert_eq!(stored.len(), engine.config().display_limit);
}

#[tokio::test]
async fn upcoming_drops_ended_windows_and_respects_limit() {
    let engine = Interdorm::new(calendar_config(), Some(FakeSource::once(FEED))).unwrap();
    engine.refresh(ts("2024-01-16T00:00:00Z")).await;

    let now = ts("2024-01-18T00:00:00Z");
    let upcoming = engine.upcoming(now, 1).unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].title, "interdorm open gym");
    assert_eq!(engine.upcoming(now, 10).unwrap().len(), 2);
}

#[test]
fn calendar_mode_requires_a_source() {
    let err = Interdorm::new(calendar_config(), None).unwrap_err();
    assert!(matches!(err, Error::MissingSource));
}

#[test]
fn invalid_pattern_is_rejected() {
    let mut config = weekly_config();
    config.calendar.pattern = Some("(".to_string());
    let err = Interdorm::new(config, None).unwrap_err();
    assert!(matches!(err, Error::Pattern(_)));
}
