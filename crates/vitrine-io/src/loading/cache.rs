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

//! The deduplicating, cache-backed resource loader.

use super::ResourceReader;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;
use vitrine_core::asset::{Asset, AssetHandle, ResourceKey};
use vitrine_core::loading::{LoadError, LoadingSink, Transport};

type Slot<A> = Arc<OnceCell<AssetHandle<A>>>;

/// Serves composite resources by key, fetching and assembling them through a
/// [`ResourceReader`] on first request and reusing the cached entry
/// thereafter.
///
/// The cache is owned by this instance and lives exactly as long as it; there
/// is no process-wide state. Entries are immutable once stored and are never
/// evicted.
///
/// Concurrent `load` calls for the same uncached key are deduplicated: the
/// first caller performs the physical fetch while the others await the same
/// result, so the reader runs and the progress sink fires once per physical
/// load rather than once per caller. On failure the key's slot is left
/// vacant, nothing is cached, and the next `load` retries from scratch.
pub struct AsyncResourceCache<A: Asset, R: ResourceReader<A>> {
    reader: R,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn LoadingSink>,
    slots: Mutex<HashMap<ResourceKey, Slot<A>>>,
}

impl<A: Asset, R: ResourceReader<A>> AsyncResourceCache<A, R> {
    /// Creates an empty cache loading through `reader` over `transport`,
    /// reporting progress to `sink`.
    pub fn new(reader: R, transport: Arc<dyn Transport>, sink: Arc<dyn LoadingSink>) -> Self {
        Self {
            reader,
            transport,
            sink,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Synchronous, non-blocking lookup.
    ///
    /// Returns the cached entry if present. Never triggers a fetch and has
    /// no side effects; keys that are absent, in flight, or previously
    /// failed all return `None`.
    pub fn get(&self, key: &str) -> Option<AssetHandle<A>> {
        let slots = self.slots.lock().unwrap();
        slots.get(key).and_then(|slot| slot.get()).cloned()
    }

    /// Loads the resource identified by `key`, fetching it on first request.
    ///
    /// A cached key resolves immediately with no transport activity and no
    /// progress notification. Otherwise the key's sub-fetches run
    /// concurrently and are joined all-or-nothing; the entry is stored and
    /// the sink notified exactly once, only on full success.
    ///
    /// # Errors
    /// Propagates the first sub-fetch failure as a [`LoadError`]. The cache
    /// is left untouched, so a subsequent call retries.
    pub async fn load(&self, key: &str) -> Result<AssetHandle<A>, LoadError> {
        let slot = self.slot(key);
        let handle = slot.get_or_try_init(|| self.fetch(key)).await?;
        Ok(handle.clone())
    }

    /// Returns the slot for `key`, inserting an empty one if the key has
    /// never been requested. The map lock is never held across an await.
    fn slot(&self, key: &str) -> Slot<A> {
        let mut slots = self.slots.lock().unwrap();
        match slots.get(key) {
            Some(slot) => slot.clone(),
            None => {
                let slot: Slot<A> = Arc::new(OnceCell::new());
                slots.insert(ResourceKey::from(key), slot.clone());
                slot
            }
        }
    }

    async fn fetch(&self, key: &str) -> Result<AssetHandle<A>, LoadError> {
        self.sink.item_start(key);
        log::debug!("loading resource '{key}'");

        match self.reader.read(self.transport.as_ref(), key).await {
            Ok(asset) => {
                self.sink.item_end(key);
                Ok(AssetHandle::new(asset))
            }
            Err(err) => {
                log::warn!("loading resource '{key}' failed: {err}");
                self.sink.item_error(key);
                Err(err)
            }
        }
    }
}
