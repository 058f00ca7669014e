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

//! Provides the foundational traits and primitive types for Vitrine's asset system.
//!
//! This module defines the "common language" for all asset-related operations:
//! the [`Asset`] marker trait, the shared [`AssetHandle`], the [`ResourceKey`]
//! used to identify remote resources, and the concrete bitmap-font asset types.
//! It has no knowledge of how assets are fetched or cached; that lives in the
//! `vitrine-io` crate.

mod font;
mod handle;
mod key;

pub use font::*;
pub use handle::*;
pub use key::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits enforce critical safety guarantees:
/// - `Send` + `Sync`: The asset type can be safely shared and sent between
///   tasks. This is essential for background loading.
/// - `'static`: The asset type does not contain any non-static references,
///   ensuring it can be cached for the lifetime of the application.
///
/// # Examples
///
/// ```
/// use vitrine_core::asset::Asset;
///
/// struct GlyphAtlas {
///     // ... fields
/// }
///
/// // By implementing Asset, `GlyphAtlas` can now be cached by a loader.
/// impl Asset for GlyphAtlas {}
/// ```
pub trait Asset: Send + Sync + 'static {}
