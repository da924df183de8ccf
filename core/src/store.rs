// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, PoisonError, RwLock};

use crate::window::Window;

/// Holder of the most recently computed window list.
///
/// The list is swapped wholesale and never mutated in place, so readers keep
/// a consistent view while a refresh replaces it.
#[derive(Debug, Clone, Default)]
pub struct WindowStore {
    inner: Arc<RwLock<Option<Arc<[Window]>>>>,
}

impl WindowStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current list, or `None` if nothing was stored yet.
    pub fn get(&self) -> Option<Arc<[Window]>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the list, returning the previous one.
    pub fn replace(&self, windows: Vec<Window>) -> Option<Arc<[Window]>> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.replace(windows.into())
    }
}
