// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use interdorm_feed::FeedError;

/// Engine errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The calendar document could not be acquired from any source.
    #[error("unable to load the calendar feed: {0}")]
    Feed(#[from] FeedError),

    /// Calendar mode was selected but no document source was supplied.
    #[error("no document source configured for calendar mode")]
    MissingSource,

    /// A configured time zone is not in the time zone database.
    #[error("unknown time zone {name}: {source}")]
    TimeZone {
        /// The configured zone name.
        name: String,
        /// The lookup error.
        #[source]
        source: jiff::Error,
    },

    /// The title filter pattern does not compile.
    #[error("invalid title pattern: {0}")]
    Pattern(#[from] regex::Error),
}
