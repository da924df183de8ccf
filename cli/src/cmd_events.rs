// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use interdorm_core::{Interdorm, Status};

use crate::event_formatter::EventFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdEvents {
    pub output_format: ArgOutputFormat,
    pub limit: Option<usize>,
}

impl CmdEvents {
    pub const NAME: &str = "events";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("list")
            .about("List upcoming sessions")
            .arg(ArgOutputFormat::arg())
            .arg(
                arg!(-n --limit <N> "Maximum number of sessions, overrides the configured limit")
                    .value_parser(value_parser!(usize)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
            limit: matches.get_one("limit").copied(),
        }
    }

    pub async fn run(self, engine: &Interdorm) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing sessions...");
        let now = engine.now();
        if let Status::Unavailable { reason, .. } = engine.refresh(now).await {
            return Err(reason.into());
        }

        let limit = self.limit.unwrap_or(engine.config().display_limit);
        let windows = engine.upcoming(now, limit).unwrap_or_default();

        if windows.is_empty() && self.output_format == ArgOutputFormat::Table {
            let label = &engine.config().label;
            println!("{}", format!("No upcoming {label} sessions are scheduled.").italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(now, engine.local_zone().clone())
            .with_output_format(self.output_format);
        print!("{}", formatter.format(&windows));
        if self.output_format == ArgOutputFormat::Json {
            println!();
        }
        Ok(())
    }
}
