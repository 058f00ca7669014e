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

/// A collaborator notified of per-key loading progress.
///
/// A cache calls `item_start` exactly once when a physical fetch for a key
/// begins, then exactly one of `item_end` or `item_error` when it settles.
/// Cache hits produce no notifications. Host applications typically
/// implement this to drive a loading indicator.
///
/// Implementations must be cheap and non-blocking; they are invoked from
/// async task context.
pub trait LoadingSink: Send + Sync {
    /// Loading of the resource identified by `key` has started.
    fn item_start(&self, key: &str);

    /// The resource identified by `key` has been fully loaded and cached.
    fn item_end(&self, key: &str);

    /// Loading of the resource identified by `key` has failed.
    fn item_error(&self, key: &str);
}

/// A sink that discards all notifications, for callers without a loading
/// indicator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LoadingSink for NullSink {
    fn item_start(&self, _key: &str) {}
    fn item_end(&self, _key: &str) {}
    fn item_error(&self, _key: &str) {}
}
