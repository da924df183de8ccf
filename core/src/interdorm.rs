// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use interdorm_feed::{FeedClient, FeedError};
use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::config::{Config, SourceMode};
use crate::error::Error;
use crate::schedule::WeeklySchedule;
use crate::status::{Status, StatusSnapshot};
use crate::store::WindowStore;
use crate::window::{Window, WindowFilter, windows_from_document};

/// Supplies the raw calendar document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the full document text.
    async fn fetch(&self) -> Result<String, FeedError>;
}

#[async_trait]
impl DocumentSource for FeedClient {
    async fn fetch(&self) -> Result<String, FeedError> {
        FeedClient::fetch(self).await
    }
}

/// Event-window engine.
///
/// Owns the configuration, the document source and the [`WindowStore`]. The
/// slow cycle is [`Interdorm::refresh`], the fast cycle [`Interdorm::tick`].
#[derive(Clone)]
pub struct Interdorm {
    config: Config,
    local: TimeZone,
    schedule_zone: TimeZone,
    filter: WindowFilter,
    schedule: WeeklySchedule,
    source: Option<Arc<dyn DocumentSource>>,
    store: WindowStore,
}

impl fmt::Debug for Interdorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interdorm")
            .field("config", &self.config)
            .field("local", &self.local)
            .field("schedule_zone", &self.schedule_zone)
            .field("filter", &self.filter)
            .field("has_source", &self.source.is_some())
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Interdorm {
    /// Creates a new engine with the default weekly table.
    ///
    /// # Errors
    ///
    /// Fails on an unknown zone or an invalid filter pattern, or when calendar
    /// mode is selected without a document source.
    pub fn new(config: Config, source: Option<Arc<dyn DocumentSource>>) -> Result<Self, Error> {
        Self::with_schedule(config, source, WeeklySchedule::default())
    }

    /// Creates a new engine with a custom weekly table.
    ///
    /// # Errors
    ///
    /// See [`Interdorm::new`].
    pub fn with_schedule(
        config: Config,
        source: Option<Arc<dyn DocumentSource>>,
        schedule: WeeklySchedule,
    ) -> Result<Self, Error> {
        if config.mode == SourceMode::Calendar && source.is_none() {
            return Err(Error::MissingSource);
        }

        Ok(Self {
            local: config.local_zone()?,
            schedule_zone: config.schedule_zone()?,
            filter: config.window_filter()?,
            config,
            schedule,
            source,
            store: WindowStore::new(),
        })
    }

    /// The current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    /// The configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The zone floating values are read in, also used for display.
    pub fn local_zone(&self) -> &TimeZone {
        &self.local
    }

    /// The store holding the last computed windows.
    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    /// Compute the window list without touching the store.
    ///
    /// # Errors
    ///
    /// Fails if the document cannot be acquired.
    pub async fn load(&self, now: Timestamp) -> Result<Vec<Window>, Error> {
        match self.config.mode {
            SourceMode::Calendar => {
                let source = self.source.as_ref().ok_or(Error::MissingSource)?;
                let document = source.fetch().await?;
                Ok(windows_from_document(
                    &document,
                    &self.config.calendar.block,
                    &self.filter,
                    &self.local,
                    self.config.calendar.named_zones,
                ))
            }
            SourceMode::Weekly => Ok(self.schedule.upcoming(
                now,
                self.config.display_limit,
                &self.schedule_zone,
                &self.config.label,
            )),
        }
    }

    /// The slow cycle: load, replace the stored windows and evaluate.
    ///
    /// On failure the stored windows are kept for [`Interdorm::tick`], but the
    /// returned status is [`Status::Unavailable`].
    #[tracing::instrument(skip(self), fields(mode = ?self.config.mode))]
    pub async fn refresh(&self, now: Timestamp) -> Status {
        match self.load(now).await {
            Ok(windows) => {
                tracing::debug!(windows = windows.len(), "windows refreshed");
                let snapshot = StatusSnapshot::evaluate(&windows, now);
                self.store.replace(windows);
                Status::Available(snapshot)
            }
            Err(err) => {
                tracing::warn!(error = %err, "refresh failed, keeping previous windows");
                Status::Unavailable {
                    evaluated_at: now,
                    reason: err.to_string(),
                }
            }
        }
    }

    /// The fast cycle: evaluate the stored windows. `None` if nothing is stored.
    pub fn tick(&self, now: Timestamp) -> Option<StatusSnapshot> {
        let windows = self.store.get()?;
        Some(StatusSnapshot::evaluate(&windows, now))
    }

    /// Up to `limit` stored windows that have not ended by `now`.
    pub fn upcoming(&self, now: Timestamp, limit: usize) -> Option<Vec<Window>> {
        let windows = self.store.get()?;
        Some(
            windows
                .iter()
                .filter(|w| w.end >= now)
                .take(limit)
                .cloned()
                .collect(),
        )
    }
}
