// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use jiff::tz::TimeZone;
use serde::de;

use crate::datetime::{LOCAL_ZONE, NamedZonePolicy};
use crate::error::Error;
use crate::window::WindowFilter;

/// The name of the application.
pub const APP_NAME: &str = "interdorm";

/// Engine configuration, the `[core]` table.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Headline label, also the title of generated sessions.
    pub label: String,

    /// Where windows come from.
    pub mode: SourceMode,

    /// Maximum number of windows to list.
    pub display_limit: usize,

    /// Period of the slow cycle: fetch, parse and replace the windows.
    pub refresh_interval: ConfigInterval,

    /// Period of the fast cycle: evaluate the stored windows.
    pub tick_interval: ConfigInterval,

    /// Zone used for floating and date-only values and for display. Defaults
    /// to the system zone.
    pub timezone: Option<String>,

    /// Calendar document handling.
    pub calendar: CalendarConfig,

    /// Weekly table handling.
    pub schedule: ScheduleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: "Interdorm".to_string(),
            mode: SourceMode::default(),
            display_limit: 6,
            refresh_interval: ConfigInterval(Duration::from_secs(15 * 60)),
            tick_interval: ConfigInterval(Duration::from_secs(60)),
            timezone: None,
            calendar: CalendarConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl Config {
    /// The zone floating values are read in.
    pub fn local_zone(&self) -> Result<TimeZone, Error> {
        match self.timezone.as_deref() {
            None | Some(LOCAL_ZONE) => Ok(TimeZone::system()),
            Some(name) => get_zone(name),
        }
    }

    /// The zone the weekly table is written in.
    pub fn schedule_zone(&self) -> Result<TimeZone, Error> {
        get_zone(&self.schedule.timezone)
    }

    /// Build the title filter. A pattern takes precedence over a keyword.
    pub fn window_filter(&self) -> Result<WindowFilter, Error> {
        let calendar = &self.calendar;
        let filter = match (&calendar.pattern, &calendar.filter) {
            (Some(pattern), _) => WindowFilter::pattern(pattern)?,
            (None, Some(keyword)) if !keyword.is_empty() => WindowFilter::keyword(keyword)?,
            (None, _) => WindowFilter::All,
        };
        Ok(filter)
    }
}

fn get_zone(name: &str) -> Result<TimeZone, Error> {
    TimeZone::get(name).map_err(|source| Error::TimeZone {
        name: name.to_string(),
        source,
    })
}

/// Source of windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SourceMode {
    /// Events from a fetched calendar document.
    #[default]
    Calendar,

    /// Sessions from the fixed weekly table.
    Weekly,
}

/// The `[core.calendar]` table.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Block type holding the events.
    pub block: String,

    /// Keep only titles containing this keyword, case-insensitively.
    pub filter: Option<String>,

    /// Keep only titles matching this regular expression, case-insensitively.
    pub pattern: Option<String>,

    /// How values with a `TZID` parameter are resolved.
    pub named_zones: NamedZonePolicy,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            block: interdorm_ical::keyword::KW_VEVENT.to_string(),
            filter: None,
            pattern: None,
            named_zones: NamedZonePolicy::default(),
        }
    }
}

/// The `[core.schedule]` table.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// IANA zone the session times are written in.
    pub timezone: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: "America/Los_Angeles".to_string(),
        }
    }
}

/// A polling period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigInterval(pub Duration);

impl ConfigInterval {
    /// The period.
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl<'de> serde::Deserialize<'de> for ConfigInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IntervalVisitor;

        impl de::Visitor<'_> for IntervalVisitor {
            type Value = ConfigInterval;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str(r#"a duration string like "HH:MM", "1d", "24h", "60m", or "1800s""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match parse_duration(value) {
                    Ok(d) if d.is_zero() => Err(de::Error::custom("interval must be positive")),
                    Ok(d) => Ok(ConfigInterval(d)),
                    Err(e) => Err(de::Error::custom(e.to_string())),
                }
            }
        }

        deserializer.deserialize_str(IntervalVisitor)
    }
}

/// Parse a duration string in the format "HH:MM" / "1d" / "24h" / "60m" / "1800s".
fn parse_duration(s: &str) -> Result<Duration, Box<dyn StdError>> {
    // Try to parse "HH:MM" format
    let seconds = if let Some((h, m)) = s.split_once(':') {
        let hours: u64 = h.trim().parse()?;
        let minutes: u64 = m.trim().parse()?;
        hours
            .checked_mul(60)
            .and_then(|x| x.checked_add(minutes))
            .and_then(|x| x.checked_mul(60))
    }
    // Match suffix-based formats
    else if let Some(rest) = s.strip_suffix("d") {
        rest.trim().parse::<u64>()?.checked_mul(24 * 60 * 60)
    } else if let Some(rest) = s.strip_suffix("h") {
        rest.trim().parse::<u64>()?.checked_mul(60 * 60)
    } else if let Some(rest) = s.strip_suffix("m") {
        rest.trim().parse::<u64>()?.checked_mul(60)
    } else if let Some(rest) = s.strip_suffix("s") {
        Some(rest.trim().parse::<u64>()?)
    } else {
        return Err(format!("Invalid duration format: {s}").into());
    };

    match seconds {
        Some(seconds) => Ok(Duration::from_secs(seconds)),
        None => Err(format!("Invalid duration, too large: {s}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_colon_format() {
        let d = parse_duration("01:30").unwrap();
        assert_eq!(d, Duration::from_secs(90 * 60));

        let d = parse_duration("00:00").unwrap();
        assert_eq!(d, Duration::ZERO);

        let d = parse_duration("12:00").unwrap();
        assert_eq!(d, Duration::from_secs(12 * 60 * 60));
    }

    #[test]
    fn test_parse_duration_overflow() {
        for s in [
            "999999999999999d",
            "18446744073709551615h",
            "18446744073709551615m",
            "307445734561825860:00",
            "0:18446744073709551615",
        ] {
            let err = parse_duration(s).unwrap_err();
            assert!(err.to_string().contains("too large"), "{s}: {err}");
        }
        assert_eq!(
            parse_duration("18446744073709551615s").unwrap(),
            Duration::from_secs(u64::MAX)
        );
    }

    #[test]
    fn test_parse_duration_suffix_format() {
        assert_eq!(parse_duration("1d").unwrap(), Duration::from_secs(86_400));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7_200));
        assert_eq!(parse_duration("45m").unwrap(), Duration::from_secs(2_700));
        assert_eq!(parse_duration("1800s").unwrap(), Duration::from_secs(1_800));
    }

    #[test]
    fn test_parse_duration_invalid_format() {
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("99x").is_err());
        assert!(parse_duration("12:xx").is_err());
        assert!(parse_duration("12:").is_err());
        assert!(parse_duration("12").is_err());
        assert!(parse_duration("-5m").is_err());
    }

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.label, "Interdorm");
        assert_eq!(config.mode, SourceMode::Calendar);
        assert_eq!(config.display_limit, 6);
        assert_eq!(config.refresh_interval.duration(), Duration::from_secs(900));
        assert_eq!(config.tick_interval.duration(), Duration::from_secs(60));
        assert_eq!(config.calendar.block, "VEVENT");
        assert_eq!(config.calendar.named_zones, NamedZonePolicy::Convert);
        assert_eq!(config.schedule.timezone, "America/Los_Angeles");
        assert!(matches!(config.window_filter().unwrap(), WindowFilter::All));
    }

    #[test]
    fn test_full_table() {
        let config: Config = toml::from_str(
            r#"
label = "Open gym"
mode = "weekly"
display_limit = 3
refresh_interval = "00:30"
tick_interval = "30s"
timezone = "Europe/Berlin"

[calendar]
block = "VTODO"
filter = "gym"
named_zones = "local"

[schedule]
timezone = "Asia/Tokyo"
"#,
        )
        .unwrap();
        assert_eq!(config.label, "Open gym");
        assert_eq!(config.mode, SourceMode::Weekly);
        assert_eq!(config.display_limit, 3);
        assert_eq!(config.refresh_interval.duration(), Duration::from_secs(1_800));
        assert_eq!(config.tick_interval.duration(), Duration::from_secs(30));
        assert_eq!(config.calendar.named_zones, NamedZonePolicy::Local);
        assert_eq!(config.local_zone().unwrap().iana_name(), Some("Europe/Berlin"));
        assert_eq!(config.schedule_zone().unwrap().iana_name(), Some("Asia/Tokyo"));

        let filter = config.window_filter().unwrap();
        assert!(filter.accepts("GYM night"));
        assert!(!filter.accepts("pool"));
    }

    #[test]
    fn test_pattern_wins_over_keyword() {
        let config: Config = toml::from_str(
            r#"
[calendar]
filter = "gym"
pattern = "^pool"
"#,
        )
        .unwrap();
        let filter = config.window_filter().unwrap();
        assert!(filter.accepts("Pool party"));
        assert!(!filter.accepts("gym"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(toml::from_str::<Config>(r#"tick_interval = "0m""#).is_err());
        assert!(toml::from_str::<Config>(r#"mode = "daily""#).is_err());

        let config: Config = toml::from_str(r#"timezone = "Nowhere/Special""#).unwrap();
        assert!(matches!(config.local_zone(), Err(Error::TimeZone { .. })));

        let config: Config = toml::from_str("[calendar]\npattern = \"(\"").unwrap();
        assert!(matches!(config.window_filter(), Err(Error::Pattern(_))));
    }
}
