// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::Timestamp;
use jiff::tz::TimeZone;

/// Display format of instants, e.g. `Tue, Jan 16 7:00 PM`.
pub const DATETIME_FORMAT: &str = "%a, %b %-d %-I:%M %p";

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn format_timestamp(timestamp: Timestamp, tz: &TimeZone) -> String {
    timestamp
        .to_zoned(tz.clone())
        .strftime(DATETIME_FORMAT)
        .to_string()
}
