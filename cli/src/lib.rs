// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command line front end: show whether a session is on, list upcoming ones,
//! or keep watching.

mod cli;
mod cmd_events;
mod cmd_generate_completion;
mod cmd_status;
mod cmd_watch;
mod config;
mod event_formatter;
mod status_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
