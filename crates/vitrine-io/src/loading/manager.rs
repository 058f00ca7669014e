// Copyright 2026 vitrine contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::atomic::{AtomicUsize, Ordering};
use vitrine_core::loading::LoadingSink;

/// A counting [`LoadingSink`] for driving loading indicators.
///
/// Tracks how many items have started, completed, and errored. An item that
/// errored counts as settled, so `is_idle` turns true again even when loads
/// fail.
#[derive(Debug, Default)]
pub struct LoadingManager {
    started: AtomicUsize,
    completed: AtomicUsize,
    errored: AtomicUsize,
}

impl LoadingManager {
    /// Creates an idle manager with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items whose load has started.
    pub fn items_started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of items loaded successfully.
    pub fn items_completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Number of items whose load failed.
    pub fn items_errored(&self) -> usize {
        self.errored.load(Ordering::SeqCst)
    }

    /// Returns `true` when every started item has settled.
    pub fn is_idle(&self) -> bool {
        self.items_completed() + self.items_errored() == self.items_started()
    }
}

impl LoadingSink for LoadingManager {
    fn item_start(&self, key: &str) {
        self.started.fetch_add(1, Ordering::SeqCst);
        log::debug!("item start: '{key}'");
    }

    fn item_end(&self, key: &str) {
        self.completed.fetch_add(1, Ordering::SeqCst);
        log::debug!("item end: '{key}'");
    }

    fn item_error(&self, key: &str) {
        self.errored.fetch_add(1, Ordering::SeqCst);
        log::warn!("item error: '{key}'");
    }
}
