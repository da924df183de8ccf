// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, sync::Arc};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use interdorm_core::{APP_NAME, DocumentSource, Interdorm, NamedZonePolicy, SourceMode};
use interdorm_feed::FeedClient;
use tracing_subscriber::EnvFilter;

use crate::cmd_events::CmdEvents;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_status::CmdStatus;
use crate::cmd_watch::CmdWatch;
use crate::config::parse_config;

/// Run the interdorm command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Overrides of the configured source mode
    pub mode: Option<SourceMode>,

    /// Overrides of the configured named zone policy
    pub named_zones: Option<NamedZonePolicy>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Is a session on right now, and when is the next one.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to status
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $INTERDORM_CONFIG, then \
$XDG_CONFIG_HOME/interdorm/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/interdorm/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(--mode <MODE> "Where sessions come from, overrides the configuration")
                    .value_parser(value_parser!(SourceMode))
                    .global(true),
            )
            .arg(
                arg!(--"named-zones" <POLICY> "How zoned times are read, overrides the configuration")
                    .value_parser(value_parser!(NamedZonePolicy))
                    .global(true),
            )
            .subcommand(CmdStatus::command())
            .subcommand(CmdEvents::command())
            .subcommand(CmdWatch::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let (command, sub_matches) = match matches.subcommand() {
            Some((CmdStatus::NAME, matches)) => (Status(CmdStatus::from(matches)), matches),
            Some((CmdEvents::NAME, matches)) => (Events(CmdEvents::from(matches)), matches),
            Some((CmdWatch::NAME, matches)) => (Watch(CmdWatch::from(matches)), matches),
            Some((CmdGenerateCompletion::NAME, matches)) => (
                GenerateCompletion(CmdGenerateCompletion::from(matches)),
                matches,
            ),
            None => (Status(CmdStatus::default()), &matches),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        // Global args propagate to the subcommand matches
        Ok(Self {
            config: sub_matches.get_one("config").cloned(),
            mode: sub_matches.get_one("mode").copied(),
            named_zones: sub_matches.get_one("named-zones").copied(),
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        let overrides = Overrides {
            mode: self.mode,
            named_zones: self.named_zones,
        };
        self.command.run(self.config, overrides).await
    }
}

/// Settings given on the command line that take precedence over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    mode: Option<SourceMode>,
    named_zones: Option<NamedZonePolicy>,
}

/// The commands available in the CLI
#[derive(Debug)]
pub enum Commands {
    /// Show the current status
    Status(CmdStatus),

    /// List upcoming sessions
    Events(CmdEvents),

    /// Keep the status up to date
    Watch(CmdWatch),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>, overrides: Overrides) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Status(a) => Self::run_with(config, overrides, None, |x| a.run(x).boxed()).await,
            Events(a) => Self::run_with(config, overrides, a.limit, |x| a.run(x).boxed()).await,
            Watch(a)  => Self::run_with(config, overrides, None, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        overrides: Overrides,
        display_limit: Option<usize>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Interdorm) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (mut core_config, feed_config) = parse_config(config).await?;
        if let Some(mode) = overrides.mode {
            core_config.mode = mode;
        }
        if let Some(named_zones) = overrides.named_zones {
            core_config.calendar.named_zones = named_zones;
        }
        // Weekly mode only generates as many sessions as it displays
        if let Some(limit) = display_limit {
            core_config.display_limit = limit;
        }

        let source: Arc<dyn DocumentSource> = Arc::new(FeedClient::new(feed_config)?);
        let engine = Interdorm::new(core_config, Some(source))?;
        f(&engine).await
    }
}
