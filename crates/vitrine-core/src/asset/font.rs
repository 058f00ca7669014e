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

//! Bitmap-font asset types.
//!
//! A bitmap font is a composite resource assembled from two sub-resources:
//! a JSON descriptor in the AngelCode BMFont schema and a PNG glyph atlas.
//! The descriptor is typed here rather than kept as a raw JSON blob, so that
//! malformed descriptors are rejected at the loading boundary instead of
//! surfacing later during text layout.

use super::Asset;
use serde::{Deserialize, Serialize};

/// A decoded bitmap, stored as tightly-packed RGBA8 pixels.
///
/// This is the CPU-side representation of a binary sub-resource. Decoding
/// from an encoded image format (PNG) is performed by the transport in
/// `vitrine-io`; consumers upload the pixel data to their renderer of choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapData {
    /// Width of the bitmap in pixels.
    pub width: u32,
    /// Height of the bitmap in pixels.
    pub height: u32,
    /// Pixel data, `width * height * 4` bytes, row-major, RGBA8.
    pub pixels: Vec<u8>,
}

/// General information about the source face a bitmap font was generated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontInfo {
    /// Name of the source typeface.
    pub face: String,
    /// Size the glyphs were rasterized at, in points.
    pub size: f32,
    /// Whether the face was rendered bold.
    pub bold: u8,
    /// Whether the face was rendered italic.
    pub italic: u8,
    /// Padding applied around each glyph, `[up, right, down, left]`.
    pub padding: Vec<i32>,
    /// Spacing between glyphs in the atlas, `[horizontal, vertical]`.
    pub spacing: Vec<i32>,
}

/// Metrics shared by all glyphs of a bitmap font.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontCommon {
    /// Distance between two lines of text, in pixels.
    pub line_height: f32,
    /// Distance from the top of a line to the glyph baseline, in pixels.
    pub base: f32,
    /// Width of the glyph atlas in pixels.
    pub scale_w: u32,
    /// Height of the glyph atlas in pixels.
    pub scale_h: u32,
    /// Number of atlas pages. Vitrine fonts are single-page.
    pub pages: u32,
}

/// Placement and metrics of a single glyph in the atlas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontChar {
    /// Unicode code point of the glyph.
    pub id: u32,
    /// Horizontal position of the glyph in the atlas, in pixels.
    pub x: f32,
    /// Vertical position of the glyph in the atlas, in pixels.
    pub y: f32,
    /// Width of the glyph in the atlas, in pixels.
    pub width: f32,
    /// Height of the glyph in the atlas, in pixels.
    pub height: f32,
    /// Horizontal offset to apply when placing the glyph.
    pub xoffset: f32,
    /// Vertical offset to apply when placing the glyph.
    pub yoffset: f32,
    /// Horizontal advance to the next glyph.
    pub xadvance: f32,
    /// Atlas page the glyph lives on.
    pub page: u32,
}

/// A kerning adjustment between two glyphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontKerning {
    /// Code point of the left glyph.
    pub first: u32,
    /// Code point of the right glyph.
    pub second: u32,
    /// Horizontal adjustment applied between the pair.
    pub amount: f32,
}

/// The typed schema of a bitmap-font descriptor (`<key>.json`).
///
/// Unknown fields are ignored: descriptors produced by different generator
/// tools carry extra bookkeeping that text layout does not need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    /// Source-face information.
    pub info: FontInfo,
    /// Shared glyph metrics.
    pub common: FontCommon,
    /// File names of the atlas pages.
    pub pages: Vec<String>,
    /// Per-glyph placement and metrics.
    pub chars: Vec<FontChar>,
    /// Kerning pairs.
    pub kernings: Vec<FontKerning>,
}

impl FontDescriptor {
    /// Looks up the glyph entry for a code point, if the font covers it.
    pub fn char(&self, id: u32) -> Option<&FontChar> {
        self.chars.iter().find(|c| c.id == id)
    }

    /// Returns the kerning amount between two code points, or `0.0` if the
    /// font defines none for the pair.
    pub fn kerning(&self, first: u32, second: u32) -> f32 {
        self.kernings
            .iter()
            .find(|k| k.first == first && k.second == second)
            .map(|k| k.amount)
            .unwrap_or(0.0)
    }
}

/// A fully-assembled bitmap font: the typed descriptor plus the decoded
/// glyph atlas, in that fixed order.
///
/// Immutable once stored in a cache; consumers receive it behind an
/// [`AssetHandle`](super::AssetHandle).
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapFont {
    /// The parsed font descriptor.
    pub descriptor: FontDescriptor,
    /// The decoded glyph atlas.
    pub atlas: BitmapData,
}

impl Asset for BitmapFont {}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from a real msdf-bmfont export; extra tool fields must not
    // break deserialization.
    const DESCRIPTOR_JSON: &str = r#"{
        "pages": ["arial.png"],
        "chars": [
            {"id": 65, "x": 10, "y": 4, "width": 22, "height": 24,
             "xoffset": -2, "yoffset": 3, "xadvance": 18, "page": 0, "chnl": 15},
            {"id": 86, "x": 40, "y": 4, "width": 21, "height": 24,
             "xoffset": -1, "yoffset": 3, "xadvance": 17, "page": 0, "chnl": 15}
        ],
        "info": {
            "face": "Arial", "size": 42, "bold": 0, "italic": 0,
            "charset": ["A", "V"], "unicode": 1, "stretchH": 100,
            "smooth": 1, "aa": 1, "padding": [2, 2, 2, 2], "spacing": [4, 4]
        },
        "common": {
            "lineHeight": 48, "base": 38, "scaleW": 512, "scaleH": 256,
            "pages": 1, "packed": 0, "alphaChnl": 0
        },
        "kernings": [{"first": 65, "second": 86, "amount": -2}]
    }"#;

    #[test]
    fn descriptor_parses_bmfont_json() {
        let descriptor: FontDescriptor = serde_json::from_str(DESCRIPTOR_JSON).unwrap();

        assert_eq!(descriptor.info.face, "Arial");
        assert_eq!(descriptor.common.line_height, 48.0);
        assert_eq!(descriptor.common.scale_w, 512);
        assert_eq!(descriptor.pages, vec!["arial.png"]);
        assert_eq!(descriptor.chars.len(), 2);
        assert_eq!(descriptor.char(65).unwrap().xadvance, 18.0);
        assert!(descriptor.char(66).is_none());
    }

    #[test]
    fn kerning_lookup_defaults_to_zero() {
        let descriptor: FontDescriptor = serde_json::from_str(DESCRIPTOR_JSON).unwrap();

        assert_eq!(descriptor.kerning(65, 86), -2.0);
        assert_eq!(descriptor.kerning(86, 65), 0.0);
    }

    #[test]
    fn missing_sections_default() {
        let descriptor: FontDescriptor = serde_json::from_str("{}").unwrap();
        assert!(descriptor.chars.is_empty());
        assert_eq!(descriptor.common.line_height, 0.0);
    }
}
