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

use crate::asset::BitmapData;
use crate::loading::LoadError;
use async_trait::async_trait;

/// A collaborator performing the actual retrieval of sub-resources.
///
/// Two capabilities are consumed by the loaders in `vitrine-io`, matching
/// the two kinds of sub-resource a composite asset is assembled from. The
/// error contracts differ deliberately:
///
/// - [`fetch_json`](Transport::fetch_json) fails loudly, carrying the HTTP
///   status of a rejected descriptor fetch.
/// - [`fetch_image`](Transport::fetch_image) resolves to `None` when the
///   payload cannot be retrieved or decoded; the caller turns that into a
///   [`LoadError::Decode`] naming the sub-resource.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Retrieves and parses a structured (JSON) sub-resource.
    ///
    /// # Errors
    /// Returns [`LoadError::Transport`] when the server answers with a
    /// non-success status, or [`LoadError::Request`] when the request fails
    /// below the HTTP layer.
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, LoadError>;

    /// Retrieves and decodes a binary image sub-resource.
    ///
    /// Resolves to `None` when the resource is missing or its payload does
    /// not decode to a usable bitmap.
    async fn fetch_image(&self, url: &str) -> Result<Option<BitmapData>, LoadError>;
}
