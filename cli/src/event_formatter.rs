// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::Color;
use interdorm_core::{Window, format_duration};
use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{ArgOutputFormat, format_timestamp};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new(now: Timestamp, tz: TimeZone) -> Self {
        Self {
            columns: vec![
                EventColumn::When(tz),
                EventColumn::Title,
                EventColumn::Relative(now),
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, windows: &'a [Window]) -> Display<'a> {
        Display {
            windows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    windows: &'a [Window],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.windows).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.windows))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    /// Start and end in the display zone.
    When(TimeZone),
    Title,
    /// "now", or how long until the start.
    Relative(Timestamp),
}

impl TableColumn<Window> for EventColumn {
    fn format<'a>(&self, data: &'a Window) -> Cow<'a, str> {
        match self {
            EventColumn::When(tz) => format_span(data, tz).into(),
            EventColumn::Title => data.title.as_str().into(),
            EventColumn::Relative(now) => match data.contains(*now) {
                true => "now".into(),
                false if data.start > *now => {
                    format!("in {}", format_duration(now.duration_until(data.start))).into()
                }
                false => "ended".into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, data: &Window) -> Option<Color> {
        match self {
            EventColumn::Relative(now) if data.contains(*now) => Some(Color::Green),
            _ => None,
        }
    }
}

/// `Tue, Jan 16 7:00 PM ~ 9:00 PM`, repeating the date only if it changes.
fn format_span(window: &Window, tz: &TimeZone) -> String {
    let start = format_timestamp(window.start, tz);
    let same_day =
        window.start.to_zoned(tz.clone()).date() == window.end.to_zoned(tz.clone()).date();
    let end = match same_day {
        true => window.end.to_zoned(tz.clone()).strftime("%-I:%M %p").to_string(),
        false => format_timestamp(window.end, tz),
    };
    format!("{start} ~ {end}")
}
