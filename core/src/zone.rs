// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, civil};

/// Offset-at-instant lookup for a named time zone.
pub trait OffsetSource {
    /// The zone's UTC offset in effect at `timestamp`.
    fn offset_at(&self, timestamp: Timestamp) -> Offset;
}

impl OffsetSource for TimeZone {
    fn offset_at(&self, timestamp: Timestamp) -> Offset {
        self.to_offset(timestamp)
    }
}

/// Convert a wall-clock time in `zone` to an absolute instant.
///
/// Two passes: take the offset at the nominal instant (the wall clock read as
/// UTC) and apply it; then take the offset at that corrected instant and, if it
/// differs, apply it instead. The second pass matters when a daylight-saving
/// transition lies between the nominal and the corrected instant.
///
/// # Errors
///
/// Returns an error if the instant falls outside the supported range.
pub fn wall_clock_to_timestamp(
    zone: &impl OffsetSource,
    wall: civil::DateTime,
) -> Result<Timestamp, jiff::Error> {
    let nominal = Offset::UTC.to_timestamp(wall)?;
    let guess = zone.offset_at(nominal);
    let first = guess.to_timestamp(wall)?;

    let corrected = zone.offset_at(first);
    if corrected == guess {
        return Ok(first);
    }
    corrected.to_timestamp(wall)
}

#[cfg(test)]
mod tests {
    use jiff::civil::datetime;
    use jiff::tz::offset;

    use super::*;

    /// A zone with a single transition, from `before` to `after` at `at`.
    struct OneTransition {
        at: Timestamp,
        before: Offset,
        after: Offset,
    }

    impl OffsetSource for OneTransition {
        fn offset_at(&self, timestamp: Timestamp) -> Offset {
            match timestamp < self.at {
                true => self.before,
                false => self.after,
            }
        }
    }

    fn spring_forward() -> OneTransition {
        OneTransition {
            at: "2024-03-10T10:00:00Z".parse().unwrap(),
            before: offset(-8),
            after: offset(-7),
        }
    }

    #[test]
    fn second_pass_corrects_across_transition() {
        let zone = spring_forward();
        // Nominal 03:00Z sits before the transition, the real instant after it
        let wall = datetime(2024, 3, 10, 3, 0, 0, 0);
        let ts = wall_clock_to_timestamp(&zone, wall).unwrap();
        assert_eq!(ts, "2024-03-10T10:00:00Z".parse().unwrap());

        let single_pass = zone.offset_at(Offset::UTC.to_timestamp(wall).unwrap());
        assert_ne!(single_pass.to_timestamp(wall).unwrap(), ts);
    }

    #[test]
    fn single_pass_suffices_away_from_transition() {
        let zone = spring_forward();
        let ts = wall_clock_to_timestamp(&zone, datetime(2024, 3, 10, 16, 0, 0, 0)).unwrap();
        assert_eq!(ts, "2024-03-10T23:00:00Z".parse().unwrap());

        let ts = wall_clock_to_timestamp(&zone, datetime(2024, 3, 9, 16, 0, 0, 0)).unwrap();
        assert_eq!(ts, "2024-03-10T00:00:00Z".parse().unwrap());
    }

    #[test]
    fn agrees_with_time_zone_database() {
        let tz = TimeZone::get("America/Los_Angeles").unwrap();
        for wall in [
            datetime(2024, 3, 10, 1, 0, 0, 0),
            datetime(2024, 3, 10, 5, 0, 0, 0),
            datetime(2024, 11, 3, 0, 30, 0, 0),
            datetime(2024, 11, 3, 3, 0, 0, 0),
            datetime(2024, 7, 4, 19, 0, 0, 0),
        ] {
            let ts = wall_clock_to_timestamp(&tz, wall).unwrap();
            assert_eq!(ts.to_zoned(tz.clone()).datetime(), wall, "{wall}");
        }
    }
}
