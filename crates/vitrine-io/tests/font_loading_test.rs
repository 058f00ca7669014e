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

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vitrine_core::asset::{AssetHandle, BitmapData};
use vitrine_core::loading::{LoadError, LoadingSink, Transport};
use vitrine_io::FontReader;

// --- Test setup: scripted transport and recording sink ---

/// Serves canned sub-resources from maps and counts every fetch.
struct MockTransport {
    json: HashMap<String, serde_json::Value>,
    images: HashMap<String, BitmapData>,
    json_calls: AtomicUsize,
    image_calls: AtomicUsize,
    /// Delay applied to descriptor fetches, to force the atlas to settle first.
    json_delay: Duration,
}

impl MockTransport {
    fn new() -> Self {
        Self {
            json: HashMap::new(),
            images: HashMap::new(),
            json_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            json_delay: Duration::ZERO,
        }
    }

    fn with_font(mut self, key: &str, descriptor: serde_json::Value, atlas: BitmapData) -> Self {
        self.json.insert(format!("{key}.json"), descriptor);
        self.images.insert(format!("{key}.png"), atlas);
        self
    }

    fn calls(&self) -> (usize, usize) {
        (
            self.json_calls.load(Ordering::SeqCst),
            self.image_calls.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, LoadError> {
        self.json_calls.fetch_add(1, Ordering::SeqCst);
        if !self.json_delay.is_zero() {
            tokio::time::sleep(self.json_delay).await;
        }
        self.json
            .get(url)
            .cloned()
            .ok_or_else(|| LoadError::Transport {
                url: url.to_string(),
                status: 404,
                status_text: "Not Found".to_string(),
            })
    }

    async fn fetch_image(&self, url: &str) -> Result<Option<BitmapData>, LoadError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.images.get(url).cloned())
    }
}

/// Records the exact notification sequence the reader emits.
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl LoadingSink for RecordingSink {
    fn item_start(&self, key: &str) {
        self.events.lock().unwrap().push(format!("start {key}"));
    }
    fn item_end(&self, key: &str) {
        self.events.lock().unwrap().push(format!("end {key}"));
    }
    fn item_error(&self, key: &str) {
        self.events.lock().unwrap().push(format!("error {key}"));
    }
}

fn atlas(tag: u8) -> BitmapData {
    BitmapData {
        width: 2,
        height: 1,
        pixels: vec![tag; 8],
    }
}

fn arial_descriptor() -> serde_json::Value {
    json!({
        "info": { "face": "Arial", "size": 12 },
        "common": { "lineHeight": 14, "base": 11, "scaleW": 256, "scaleH": 128, "pages": 1 },
        "pages": ["arial.png"],
        "chars": [
            { "id": 65, "x": 0, "y": 0, "width": 8, "height": 10,
              "xoffset": 0, "yoffset": 1, "xadvance": 9, "page": 0 }
        ],
        "kernings": []
    })
}

fn reader_with(transport: MockTransport) -> (FontReader, Arc<MockTransport>, Arc<RecordingSink>) {
    let transport = Arc::new(transport);
    let sink = Arc::new(RecordingSink::default());
    let reader = FontReader::new(transport.clone(), sink.clone());
    (reader, transport, sink)
}

// --- Tests ---

#[tokio::test]
async fn load_assembles_descriptor_and_atlas_in_order() -> Result<()> {
    let (reader, transport, sink) =
        reader_with(MockTransport::new().with_font("fonts/arial", arial_descriptor(), atlas(1)));

    let font = reader.load("fonts/arial").await?;

    assert_eq!(font.descriptor.info.size, 12.0);
    assert_eq!(font.descriptor.char(65).unwrap().xadvance, 9.0);
    assert_eq!(font.atlas, atlas(1));
    assert_eq!(transport.calls(), (1, 1));
    assert_eq!(
        sink.events(),
        vec!["start fonts/arial", "end fonts/arial"]
    );
    Ok(())
}

#[tokio::test]
async fn assembly_order_is_fixed_regardless_of_settle_order() -> Result<()> {
    let mut transport =
        MockTransport::new().with_font("fonts/arial", arial_descriptor(), atlas(1));
    // The atlas settles long before the descriptor.
    transport.json_delay = Duration::from_millis(20);
    let (reader, _, _) = reader_with(transport);

    let font = reader.load("fonts/arial").await?;

    assert_eq!(font.descriptor.info.face, "Arial");
    assert_eq!(font.atlas, atlas(1));
    Ok(())
}

#[tokio::test]
async fn cache_hit_is_pure() -> Result<()> {
    let (reader, transport, sink) =
        reader_with(MockTransport::new().with_font("fonts/arial", arial_descriptor(), atlas(1)));

    let loaded = reader.load("fonts/arial").await?;
    let from_get = reader.get("fonts/arial").expect("entry should be cached");
    let reloaded = reader.load("fonts/arial").await?;

    // All three are the same entry, and the reload touched neither the
    // transport nor the sink.
    assert!(AssetHandle::ptr_eq(&loaded, &from_get));
    assert!(AssetHandle::ptr_eq(&loaded, &reloaded));
    assert_eq!(transport.calls(), (1, 1));
    assert_eq!(
        sink.events(),
        vec!["start fonts/arial", "end fonts/arial"]
    );
    Ok(())
}

#[tokio::test]
async fn descriptor_404_fails_fast() {
    // No font registered at all: the descriptor fetch answers 404.
    let (reader, _, sink) = reader_with(MockTransport::new());

    let err = reader.load("fonts/missing").await.unwrap_err();

    assert_eq!(
        err,
        LoadError::Transport {
            url: "fonts/missing.json".to_string(),
            status: 404,
            status_text: "Not Found".to_string(),
        }
    );
    assert_eq!(
        sink.events(),
        vec!["start fonts/missing", "error fonts/missing"]
    );
    assert!(reader.get("fonts/missing").is_none());
}

#[tokio::test]
async fn atlas_decode_failure_fails_fast() {
    let mut transport = MockTransport::new();
    // Descriptor exists, but the binary sub-fetch resolves to nothing.
    transport
        .json
        .insert("fonts/arial.json".to_string(), arial_descriptor());
    let (reader, _, sink) = reader_with(transport);

    let err = reader.load("fonts/arial").await.unwrap_err();

    assert_eq!(
        err,
        LoadError::Decode {
            url: "fonts/arial.png".to_string(),
        }
    );
    assert_eq!(
        sink.events(),
        vec!["start fonts/arial", "error fonts/arial"]
    );
    assert!(reader.get("fonts/arial").is_none());
}

#[tokio::test]
async fn malformed_descriptor_is_a_decode_failure() {
    let mut transport = MockTransport::new();
    transport
        .json
        .insert("fonts/bad.json".to_string(), json!({ "chars": 42 }));
    transport.images.insert("fonts/bad.png".to_string(), atlas(1));
    let (reader, _, _) = reader_with(transport);

    let err = reader.load("fonts/bad").await.unwrap_err();

    assert_eq!(
        err,
        LoadError::Decode {
            url: "fonts/bad.json".to_string(),
        }
    );
    assert!(reader.get("fonts/bad").is_none());
}

#[tokio::test]
async fn failed_load_retries_from_scratch() -> Result<()> {
    let mut transport = MockTransport::new();
    transport
        .json
        .insert("fonts/arial.json".to_string(), arial_descriptor());
    let (reader, _, _) = reader_with(transport);

    // First attempt fails on the missing atlas.
    assert!(reader.load("fonts/arial").await.is_err());

    // A later attempt performs a fresh fetch; here it fails again the same
    // way, proving nothing stuck in the cache.
    let err = reader.load("fonts/arial").await.unwrap_err();
    assert_eq!(
        err,
        LoadError::Decode {
            url: "fonts/arial.png".to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn concurrent_loads_share_one_physical_fetch() -> Result<()> {
    let mut transport =
        MockTransport::new().with_font("fonts/arial", arial_descriptor(), atlas(1));
    // Keep the fetch in flight long enough for all callers to join it.
    transport.json_delay = Duration::from_millis(20);

    let transport = Arc::new(transport);
    let sink = Arc::new(RecordingSink::default());
    let reader = Arc::new(FontReader::new(transport.clone(), sink.clone()));

    let mut tasks = Vec::new();
    for _ in 0..4 {
        let reader = reader.clone();
        tasks.push(tokio::spawn(
            async move { reader.load("fonts/arial").await },
        ));
    }

    let mut fonts = Vec::new();
    for task in tasks {
        fonts.push(task.await??);
    }

    for font in &fonts[1..] {
        assert!(AssetHandle::ptr_eq(&fonts[0], font));
    }
    assert_eq!(transport.calls(), (1, 1));
    assert_eq!(
        sink.events(),
        vec!["start fonts/arial", "end fonts/arial"]
    );
    Ok(())
}

#[tokio::test]
async fn fonts_cache_independently() -> Result<()> {
    let (reader, transport, _) = reader_with(
        MockTransport::new()
            .with_font("fonts/arial", arial_descriptor(), atlas(1))
            .with_font("fonts/georgia", arial_descriptor(), atlas(2)),
    );

    let arial = reader.load("fonts/arial").await?;
    let georgia = reader.load("fonts/georgia").await?;

    assert!(!AssetHandle::ptr_eq(&arial, &georgia));
    assert_eq!(arial.atlas, atlas(1));
    assert_eq!(georgia.atlas, atlas(2));
    assert_eq!(transport.calls(), (2, 2));
    Ok(())
}
