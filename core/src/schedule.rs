// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{self, Weekday};
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};

use crate::window::Window;
use crate::zone::wall_clock_to_timestamp;

/// How many days ahead, today included, the generator looks for sessions.
pub const SCAN_DAYS: i64 = 21;

/// A session in local wall-clock time.
///
/// A session whose end is not after its start runs past midnight into the
/// next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Local start time.
    pub start: civil::Time,

    /// Local end time.
    pub end: civil::Time,
}

impl Session {
    /// Creates a new session.
    pub const fn new(start: civil::Time, end: civil::Time) -> Self {
        Self { start, end }
    }

    /// Anchor this session to `day` in `zone`.
    fn window_on(
        &self,
        day: civil::Date,
        zone: &TimeZone,
        title: &str,
    ) -> Result<Window, jiff::Error> {
        let end_day = match self.end <= self.start {
            true => day.tomorrow()?,
            false => day,
        };
        let start = wall_clock_to_timestamp(zone, day.to_datetime(self.start))?;
        let end = wall_clock_to_timestamp(zone, end_day.to_datetime(self.end))?;
        Ok(Window::new(title, start, end))
    }
}

/// A fixed weekday to sessions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    /// Indexed by days since Monday.
    days: [Vec<Session>; 7],
}

impl WeeklySchedule {
    /// A schedule without any session.
    pub fn empty() -> Self {
        Self {
            days: Default::default(),
        }
    }

    /// Add a session on every `weekday`.
    #[must_use]
    pub fn with_session(mut self, weekday: Weekday, session: Session) -> Self {
        if let Some(sessions) = self.days.get_mut(day_index(weekday)) {
            sessions.push(session);
            sessions.sort_by_key(|s| s.start);
        }
        self
    }

    /// The sessions of `weekday`, ordered by start.
    pub fn sessions(&self, weekday: Weekday) -> &[Session] {
        self.days
            .get(day_index(weekday))
            .map_or(&[], Vec::as_slice)
    }

    /// Up to `count` windows that have not ended by `now`, sorted by start.
    ///
    /// Days are walked in `zone`, starting from the day `now` falls on, for at
    /// most [`SCAN_DAYS`] days. A session that is running at `now` is included,
    /// also one that began the day before and runs past midnight.
    pub fn upcoming(
        &self,
        now: Timestamp,
        count: usize,
        zone: &TimeZone,
        title: &str,
    ) -> Vec<Window> {
        let today = now.to_zoned(zone.clone()).date();

        let mut windows = Vec::new();
        // Yesterday only contributes sessions still running past midnight
        for offset in -1..SCAN_DAYS {
            // Later days only start later
            if windows.len() >= count {
                break;
            }

            let Ok(day) = today.checked_add(offset.days()) else {
                break;
            };
            for session in self.sessions(day.weekday()) {
                match session.window_on(day, zone, title) {
                    Ok(window) if window.end >= now => windows.push(window),
                    Ok(_) => {}
                    Err(err) => tracing::warn!(%day, %err, "skipping unrepresentable session"),
                }
            }
        }

        windows.sort_by_key(|w| w.start);
        windows.truncate(count);
        windows
    }
}

impl Default for WeeklySchedule {
    /// Tuesday to Thursday one evening session, Friday two back to back
    /// sessions, and a midday plus an evening session on weekends.
    fn default() -> Self {
        let evening = Session::new(civil::time(19, 0, 0, 0), civil::time(21, 0, 0, 0));
        Self::empty()
            .with_session(Weekday::Tuesday, evening)
            .with_session(Weekday::Wednesday, evening)
            .with_session(Weekday::Thursday, evening)
            .with_session(
                Weekday::Friday,
                Session::new(civil::time(16, 0, 0, 0), civil::time(18, 0, 0, 0)),
            )
            .with_session(
                Weekday::Friday,
                Session::new(civil::time(18, 0, 0, 0), civil::time(22, 0, 0, 0)),
            )
            .with_session(
                Weekday::Saturday,
                Session::new(civil::time(12, 0, 0, 0), civil::time(17, 0, 0, 0)),
            )
            .with_session(
                Weekday::Saturday,
                Session::new(civil::time(19, 0, 0, 0), civil::time(22, 0, 0, 0)),
            )
            .with_session(
                Weekday::Sunday,
                Session::new(civil::time(13, 0, 0, 0), civil::time(17, 0, 0, 0)),
            )
            .with_session(Weekday::Sunday, evening)
    }
}

fn day_index(weekday: Weekday) -> usize {
    usize::try_from(weekday.to_monday_zero_offset()).unwrap_or_default()
}
