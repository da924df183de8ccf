// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{SignedDuration, Timestamp};

use crate::window::Window;

/// Which window is active at an instant, and which comes next.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusSnapshot {
    /// The first window containing `evaluated_at`, if any.
    pub active: Option<Window>,

    /// The first window starting strictly after `evaluated_at`, if any.
    pub next: Option<Window>,

    /// The instant this snapshot was evaluated at.
    pub evaluated_at: Timestamp,
}

impl StatusSnapshot {
    /// Evaluate a window list, expected sorted by start, at `now`.
    ///
    /// Overlaps are not resolved: the first match in list order wins.
    pub fn evaluate(windows: &[Window], now: Timestamp) -> Self {
        Self {
            active: windows.iter().find(|w| w.contains(now)).cloned(),
            next: windows.iter().find(|w| w.start > now).cloned(),
            evaluated_at: now,
        }
    }

    /// Whether a window is active.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Time left in the active window.
    pub fn remaining(&self) -> Option<SignedDuration> {
        self.active
            .as_ref()
            .map(|w| self.evaluated_at.duration_until(w.end))
    }

    /// Time until the next window starts.
    pub fn until_next(&self) -> Option<SignedDuration> {
        self.next
            .as_ref()
            .map(|w| self.evaluated_at.duration_until(w.start))
    }
}

/// Outcome of a refresh.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Status {
    /// Windows were obtained and evaluated.
    Available(StatusSnapshot),

    /// The windows could not be obtained. Distinct from "nothing scheduled".
    Unavailable {
        /// When the refresh was attempted.
        evaluated_at: Timestamp,
        /// Human readable cause.
        reason: String,
    },
}

impl Status {
    /// The snapshot, if available.
    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        match self {
            Self::Available(snapshot) => Some(snapshot),
            Self::Unavailable { .. } => None,
        }
    }

    /// When this status was evaluated.
    pub fn evaluated_at(&self) -> Timestamp {
        match self {
            Self::Available(snapshot) => snapshot.evaluated_at,
            Self::Unavailable { evaluated_at, .. } => *evaluated_at,
        }
    }
}
