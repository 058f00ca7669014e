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

use async_trait::async_trait;
use vitrine_core::asset::Asset;
use vitrine_core::loading::{LoadError, Transport};

/// A trait for types that can fetch and assemble a specific kind of
/// composite asset from its sub-resources.
///
/// Implementors own the resource layout for their asset kind: which
/// sub-resources a key expands to, how the sub-fetches are joined, and the
/// fixed order the results are assembled in. The surrounding
/// [`AsyncResourceCache`](super::AsyncResourceCache) owns everything else —
/// caching, deduplication, and progress notification — so a reader is
/// invoked at most once per physical load.
///
/// Each `ResourceReader` is specialized for a single asset type `A`.
#[async_trait]
pub trait ResourceReader<A: Asset>: Send + Sync {
    /// Fetches all sub-resources of `key` and assembles the asset.
    ///
    /// # Errors
    /// Fails fast on the first sub-fetch failure; the composite asset is
    /// all-or-nothing.
    async fn read(&self, transport: &dyn Transport, key: &str) -> Result<A, LoadError>;
}
