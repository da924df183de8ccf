// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Colorize;
use interdorm_core::{Status, StatusSnapshot, format_duration};
use jiff::tz::TimeZone;

use crate::util::{ArgOutputFormat, format_timestamp};

#[derive(Debug)]
pub struct StatusFormatter {
    label: String,
    tz: TimeZone,
    format: ArgOutputFormat,
}

impl StatusFormatter {
    pub fn new(label: impl Into<String>, tz: TimeZone) -> Self {
        Self {
            label: label.into(),
            tz,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, status: &'a Status) -> Display<'a> {
        Display {
            status,
            stale: None,
            formatter: self,
        }
    }

    /// Format a status computed from windows kept after a failed refresh.
    pub fn format_stale<'a>(&'a self, status: &'a Status, reason: &'a str) -> Display<'a> {
        Display {
            status,
            stale: Some(reason),
            formatter: self,
        }
    }

    fn write_snapshot(&self, f: &mut fmt::Formatter<'_>, snapshot: &StatusSnapshot) -> fmt::Result {
        let label = &self.label;
        match (&snapshot.active, snapshot.remaining()) {
            (Some(active), Some(remaining)) => {
                writeln!(f, "{label} is {}", "ON".green().bold())?;
                writeln!(f, "Ends in {}.", format_duration(remaining))?;
                writeln!(f, "Ends: {}", format_timestamp(active.end, &self.tz))?;
            }
            _ => writeln!(f, "{label} is {}", "OFF".yellow().bold())?,
        }

        match (&snapshot.next, snapshot.until_next()) {
            (Some(next), Some(until)) => {
                writeln!(f, "Next session starts in {}.", format_duration(until))?;
                writeln!(f, "Starts: {}", format_timestamp(next.start, &self.tz))?;
            }
            _ if snapshot.active.is_none() => {
                writeln!(f, "No upcoming {label} sessions are scheduled.")?;
            }
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    status: &'a Status,
    stale: Option<&'a str>,
    formatter: &'a StatusFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatter = self.formatter;
        if formatter.format == ArgOutputFormat::Json {
            let mut value = serde_json::to_value(self.status).map_err(|_| fmt::Error)?;
            if let (Some(reason), Some(object)) = (self.stale, value.as_object_mut()) {
                object.insert("stale".to_string(), reason.into());
            }
            let json = serde_json::to_string_pretty(&value).map_err(|_| fmt::Error)?;
            return write!(f, "{json}");
        }

        if let Some(reason) = self.stale {
            writeln!(f, "{}", "Status unavailable".red().bold())?;
            writeln!(f, "{reason}")?;
            writeln!(f, "{}", "Last known:".dimmed())?;
        }

        match self.status {
            Status::Available(snapshot) => formatter.write_snapshot(f, snapshot)?,
            Status::Unavailable { reason, .. } => {
                writeln!(f, "{}", "Status unavailable".red().bold())?;
                writeln!(f, "{reason}")?;
            }
        }
        write!(
            f,
            "Updated: {}",
            format_timestamp(self.status.evaluated_at(), &formatter.tz).dimmed()
        )
    }
}
