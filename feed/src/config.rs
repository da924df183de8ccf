// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::PathBuf;

/// Where a calendar document can be retrieved from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedSource {
    /// A local copy of the document.
    File {
        /// Path to the file; `~` and `$HOME` prefixes are expanded.
        path: PathBuf,
    },

    /// The remote feed, fetched directly.
    Url {
        /// Feed URL.
        url: String,
    },

    /// The remote feed, fetched through a proxy that takes the target URL as
    /// its last query parameter.
    Proxy {
        /// Proxy URL prefix, e.g. `https://api.allorigins.win/raw?url=`.
        prefix: String,
        /// Feed URL, percent-encoded before it is appended to `prefix`.
        url: String,
    },
}

impl FeedSource {
    /// The URL a proxied source resolves to.
    #[must_use]
    pub fn proxied_url(prefix: &str, url: &str) -> String {
        format!("{prefix}{}", urlencoding::encode(url))
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "file {}", path.display()),
            Self::Url { url } => write!(f, "url {url}"),
            Self::Proxy { prefix, url } => write!(f, "proxy {prefix} for {url}"),
        }
    }
}

/// Feed retrieval configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FeedConfig {
    /// Sources in the order they are tried.
    #[serde(default)]
    pub sources: Vec<FeedSource>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("interdorm-feed/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
