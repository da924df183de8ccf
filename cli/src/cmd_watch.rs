// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use interdorm_core::{Interdorm, Status};
use tokio::time::{self, MissedTickBehavior};

use crate::status_formatter::StatusFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdWatch {
    pub output_format: ArgOutputFormat,
}

impl CmdWatch {
    pub const NAME: &str = "watch";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Keep the status up to date until interrupted")
            .long_about(
                "\
Keep the status up to date until interrupted. The calendar is reloaded every \
`refresh_interval`, and the status is re-evaluated every `tick_interval`.",
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, engine: &Interdorm) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "watching...");
        let config = engine.config();
        let formatter = StatusFormatter::new(&config.label, engine.local_zone().clone())
            .with_output_format(self.output_format);

        let mut refresh = time::interval(config.refresh_interval.duration());
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick = time::interval(config.tick_interval.duration());
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // Both fire at once; the first refresh already evaluates
        tick.tick().await;

        let mut last_refresh = LastRefresh::default();
        loop {
            tokio::select! {
                _ = refresh.tick() => {
                    let status = engine.refresh(engine.now()).await;
                    last_refresh.record(&status);
                    println!("{}\n", formatter.format(&status));
                }
                _ = tick.tick() => match engine.tick(engine.now()) {
                    Some(snapshot) => {
                        let status = Status::Available(snapshot);
                        let out = match last_refresh.failure() {
                            Some(reason) => formatter.format_stale(&status, reason),
                            None => formatter.format(&status),
                        };
                        println!("{out}\n");
                    }
                    None => tracing::debug!("no windows yet, skipping tick"),
                },
                result = tokio::signal::ctrl_c() => {
                    result?;
                    tracing::debug!("interrupted, stop watching");
                    return Ok(());
                }
            }
        }
    }
}

/// Outcome of the latest refresh, so ticks on kept windows can say they are stale.
#[derive(Debug, Default)]
struct LastRefresh {
    failure: Option<String>,
}

impl LastRefresh {
    fn record(&mut self, status: &Status) {
        self.failure = match status {
            Status::Available(_) => None,
            Status::Unavailable { reason, .. } => Some(reason.clone()),
        };
    }

    fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}
