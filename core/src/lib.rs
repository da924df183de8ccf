// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The event-window engine.
//!
//! Turns a calendar document, or a fixed weekly session table, into a sorted
//! list of [`Window`]s, and evaluates which window is active and which is next.
//!
//! ```text
//! document ─ parse ─┐
//!                   ├─ normalize ─ filter ─ sort ─► [Window] ─ evaluate ─► StatusSnapshot
//! weekly table ─────┘
//! ```

mod config;
mod datetime;
mod duration;
mod error;
mod interdorm;
mod schedule;
mod status;
mod store;
mod window;
mod zone;

pub use crate::config::{
    APP_NAME, CalendarConfig, Config, ConfigInterval, ScheduleConfig, SourceMode,
};
pub use crate::datetime::{LOCAL_ZONE, LooseDateTime, NamedZonePolicy};
pub use crate::duration::{format_duration, format_millis};
pub use crate::error::Error;
pub use crate::interdorm::{DocumentSource, Interdorm};
pub use crate::schedule::{SCAN_DAYS, Session, WeeklySchedule};
pub use crate::status::{Status, StatusSnapshot};
pub use crate::store::WindowStore;
pub use crate::window::{Window, WindowFilter, normalize_records, windows_from_document};
pub use crate::zone::{OffsetSource, wall_clock_to_timestamp};
