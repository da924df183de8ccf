// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use interdorm_core::DocumentSource;
use interdorm_feed::FeedError;

/// A document source answering from a script, one entry per fetch.
///
/// Once the script runs out every fetch fails with [`FeedError::NoSources`].
#[derive(Debug, Default)]
pub struct FakeSource {
    script: Mutex<VecDeque<Option<String>>>,
}

impl FakeSource {
    /// A source that yields `document` once.
    #[must_use]
    pub fn once(document: &str) -> Arc<dyn DocumentSource> {
        Self::script([Some(document)])
    }

    /// A source replaying `script`, where `None` is a failed fetch.
    #[must_use]
    pub fn script<'a>(
        script: impl IntoIterator<Item = Option<&'a str>>,
    ) -> Arc<dyn DocumentSource> {
        let script = script.into_iter().map(|s| s.map(str::to_string)).collect();
        Arc::new(Self {
            script: Mutex::new(script),
        })
    }
}

#[async_trait]
impl DocumentSource for FakeSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let next = self.script.lock().unwrap().pop_front().flatten();
        next.ok_or(FeedError::NoSources)
    }
}
