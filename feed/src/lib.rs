// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Retrieve a calendar document from an ordered list of sources.
//!
//! Sources are tried in order: typically a local copy, then the remote feed,
//! then the remote feed through a CORS-style proxy. The first source that
//! yields text wins; only when every source fails is an error returned.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::single_match_else, clippy::match_bool)]

mod client;
mod config;
mod error;
mod path;

pub use crate::client::FeedClient;
pub use crate::config::{FeedConfig, FeedSource};
pub use crate::error::{FeedError, SourceError};
pub use crate::path::expand_path;
