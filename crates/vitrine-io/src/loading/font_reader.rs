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

//! Bitmap-font loading.

use super::{AsyncResourceCache, ResourceReader};
use async_trait::async_trait;
use std::sync::Arc;
use vitrine_core::asset::{AssetHandle, BitmapData, BitmapFont, FontDescriptor, ResourceKey};
use vitrine_core::loading::{LoadError, LoadingSink, Transport};

/// Assembles a [`BitmapFont`] from its two sub-resources.
///
/// For a key `fonts/arial`, the descriptor is fetched from
/// `fonts/arial.json` and the glyph atlas from `fonts/arial.png`. The
/// suffix convention is load-bearing: existing font directories are laid
/// out this way. Both sub-fetches run concurrently and are joined
/// fail-fast; the font is assembled in fixed order (descriptor, atlas)
/// regardless of which fetch settles first.
pub struct BitmapFontReader;

#[async_trait]
impl ResourceReader<BitmapFont> for BitmapFontReader {
    async fn read(&self, transport: &dyn Transport, key: &str) -> Result<BitmapFont, LoadError> {
        let key = ResourceKey::from(key);
        let descriptor_url = key.sub_resource(".json");
        let atlas_url = key.sub_resource(".png");

        let (descriptor, atlas) = tokio::try_join!(
            fetch_descriptor(transport, &descriptor_url),
            fetch_atlas(transport, &atlas_url),
        )?;

        Ok(BitmapFont { descriptor, atlas })
    }
}

async fn fetch_descriptor(
    transport: &dyn Transport,
    url: &str,
) -> Result<FontDescriptor, LoadError> {
    let value = transport.fetch_json(url).await?;
    serde_json::from_value(value).map_err(|err| {
        log::warn!("font descriptor from '{url}' does not match schema: {err}");
        LoadError::Decode {
            url: url.to_string(),
        }
    })
}

async fn fetch_atlas(transport: &dyn Transport, url: &str) -> Result<BitmapData, LoadError> {
    transport
        .fetch_image(url)
        .await?
        .ok_or_else(|| LoadError::Decode {
            url: url.to_string(),
        })
}

/// Loads bitmap fonts by base URL, caching each assembled font for the
/// lifetime of the reader.
///
/// This is [`AsyncResourceCache`] specialized to [`BitmapFont`]; see the
/// cache for the full contract (deduplication, progress notification,
/// retry-after-failure).
pub struct FontReader {
    cache: AsyncResourceCache<BitmapFont, BitmapFontReader>,
}

impl FontReader {
    /// Creates a font reader fetching over `transport` and reporting
    /// progress to `sink`.
    pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn LoadingSink>) -> Self {
        Self {
            cache: AsyncResourceCache::new(BitmapFontReader, transport, sink),
        }
    }

    /// Returns the cached font for `url`, if it has been loaded.
    pub fn get(&self, url: &str) -> Option<AssetHandle<BitmapFont>> {
        self.cache.get(url)
    }

    /// Loads the font identified by `url`, fetching it on first request.
    ///
    /// # Errors
    /// See [`AsyncResourceCache::load`].
    pub async fn load(&self, url: &str) -> Result<AssetHandle<BitmapFont>, LoadError> {
        self.cache.load(url).await
    }
}
