// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use interdorm_core::Interdorm;

use crate::status_formatter::StatusFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdStatus {
    pub output_format: ArgOutputFormat,
}

impl CmdStatus {
    pub const NAME: &str = "status";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show whether a session is on right now, and when the next one starts")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, engine: &Interdorm) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "evaluating status...");
        let status = engine.refresh(engine.now()).await;
        let formatter = StatusFormatter::new(&engine.config().label, engine.local_zone().clone())
            .with_output_format(self.output_format);
        println!("{}", formatter.format(&status));
        Ok(())
    }
}

impl Default for CmdStatus {
    fn default() -> Self {
        Self {
            output_format: ArgOutputFormat::Table,
        }
    }
}
