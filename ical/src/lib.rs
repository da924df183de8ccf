// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tolerant property extraction for iCalendar-style documents.
//!
//! This crate is not a validator. It unfolds a document, walks its
//! content lines and collects the properties of every `BEGIN:<TYPE>` ...
//! `END:<TYPE>` block into a [`RawRecord`]. Anything it does not understand is
//! skipped instead of failing the whole document.
//!
//! ```
//! use interdorm_ical::parse_events;
//!
//! let src = "\
//! BEGIN:VCALENDAR\r\n\
//! BEGIN:VEVENT\r\n\
//! SUMMARY:Interdorm\r\n\
//! DTSTART;TZID=America/Los_Angeles:20240116T190000\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n\
//! ";
//! let records = parse_events(src);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].value("summary"), Some("Interdorm"));
//! let dtstart = records[0].get("DTSTART").unwrap();
//! assert_eq!(dtstart.parameter("TZID"), Some("America/Los_Angeles"));
//! ```

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

pub mod keyword;
mod record;
pub mod syntax;

pub use crate::record::{RawProperty, RawRecord, parse_events, parse_records};
pub use crate::syntax::{ContentLine, ContentLineError, Parameter, scan_content_line, unfold};
