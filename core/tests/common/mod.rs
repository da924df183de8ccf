// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Calendar document fixtures
//! - A scripted document source

mod fixtures;
mod source;

#[allow(unused_imports)]
pub use fixtures::{FEED, UNCLOSED_FEED, calendar_config, ts, weekly_config};
#[allow(unused_imports)]
pub use source::FakeSource;
