// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Feed retrieval errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The configuration lists no source at all.
    #[error("no feed source configured")]
    NoSources,

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Every configured source failed, in the order they were tried.
    #[error("all feed sources failed: {}", join_failures(.0))]
    Exhausted(Vec<SourceError>),
}

/// Why a single source did not yield a document.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The local path could not be expanded.
    #[error("invalid path {}: {message}", .path.display())]
    Path {
        /// The configured path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// The local file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The expanded path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The request could not be sent or its body not read.
    #[error("request to {url} failed: {source}")]
    Request {
        /// The requested URL.
        url: String,
        /// The underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} responded with {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The response status.
        status: reqwest::StatusCode,
    },
}

fn join_failures(failures: &[SourceError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
