// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::{FeedConfig, FeedSource};
use crate::error::{FeedError, SourceError};
use crate::path::expand_path;

/// Fetches the calendar document, falling back through the configured sources.
///
/// # Example
///
/// ```ignore
/// use interdorm_feed::{FeedClient, FeedConfig, FeedSource};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FeedConfig {
///     sources: vec![
///         FeedSource::File { path: "calendar.ics".into() },
///         FeedSource::Url { url: "https://example.com/calendar.ics".to_string() },
///     ],
///     ..Default::default()
/// };
///
/// let client = FeedClient::new(config)?;
/// let text = client.fetch().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    sources: Arc<[FeedSource]>,
}

impl FeedClient {
    /// Creates a new feed client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            sources: config.sources.into(),
        })
    }

    /// The sources, in the order they are tried.
    #[must_use]
    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    /// Fetch the document from the first source that yields it.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::NoSources`] if nothing is configured, or
    /// [`FeedError::Exhausted`] with every failure if all sources fail.
    #[tracing::instrument(skip(self), fields(sources = self.sources.len()))]
    pub async fn fetch(&self) -> Result<String, FeedError> {
        if self.sources.is_empty() {
            return Err(FeedError::NoSources);
        }

        let mut failures = Vec::with_capacity(self.sources.len());
        for source in self.sources.iter() {
            match self.fetch_from(source).await {
                Ok(text) => {
                    tracing::debug!(%source, bytes = text.len(), "calendar document fetched");
                    return Ok(text);
                }
                Err(err) => {
                    tracing::warn!(%source, error = %err, "feed source failed");
                    failures.push(err);
                }
            }
        }
        Err(FeedError::Exhausted(failures))
    }

    async fn fetch_from(&self, source: &FeedSource) -> Result<String, SourceError> {
        match source {
            FeedSource::File { path } => read_file(path).await,
            FeedSource::Url { url } => self.get(url).await,
            FeedSource::Proxy { prefix, url } => {
                self.get(&FeedSource::proxied_url(prefix, url)).await
            }
        }
    }

    async fn get(&self, url: &str) -> Result<String, SourceError> {
        let request_error = |source| SourceError::Request {
            url: url.to_string(),
            source,
        };

        let resp = self.http.get(url).send().await.map_err(request_error)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status,
            });
        }
        resp.text().await.map_err(request_error)
    }
}

async fn read_file(path: &Path) -> Result<String, SourceError> {
    let expanded = expand_path(path).map_err(|message| SourceError::Path {
        path: path.to_owned(),
        message,
    })?;

    tokio::fs::read_to_string(&expanded)
        .await
        .map_err(|source| SourceError::Read {
            path: expanded,
            source,
        })
}
