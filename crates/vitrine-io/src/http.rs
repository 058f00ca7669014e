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

//! The `reqwest`-backed [`Transport`] implementation.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use vitrine_core::asset::BitmapData;
use vitrine_core::loading::{LoadError, Transport};

/// Fetches sub-resources over plain HTTP GET.
///
/// Descriptor fetches send `Accept: application/json` and surface rejected
/// statuses as [`LoadError::Transport`]. Image fetches follow the original
/// texture-loader contract instead: any failure, from a missing resource to
/// an undecodable payload, resolves to `None` and is left to the caller to
/// classify.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport reusing an existing client, so connection pools
    /// and default headers are shared with the host application.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn request_error(url: &str, err: reqwest::Error) -> LoadError {
        LoadError::Request {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, LoadError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Self::request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Transport {
                url: url.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Self::request_error(url, e))
    }

    async fn fetch_image(&self, url: &str) -> Result<Option<BitmapData>, LoadError> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("image request for '{url}' failed: {err}");
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            log::warn!(
                "image request for '{url}' rejected with status {}",
                response.status()
            );
            return Ok(None);
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("image body for '{url}' could not be read: {err}");
                return Ok(None);
            }
        };

        // Decode on the CPU and convert to RGBA8 (kept in sRGB space).
        match image::load_from_memory(&bytes) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                Ok(Some(BitmapData {
                    width,
                    height,
                    pixels: rgba.into_raw(),
                }))
            }
            Err(err) => {
                log::warn!("image payload from '{url}' failed to decode: {err}");
                Ok(None)
            }
        }
    }
}
