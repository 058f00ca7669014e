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

//! # Vitrine Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! for Vitrine's remote asset system. It defines what an asset is, how assets
//! are identified, and the contracts loaders talk through — but it performs
//! no network or file I/O itself.

#![warn(missing_docs)]

pub mod asset;
pub mod loading;

pub use asset::{Asset, AssetHandle, ResourceKey};
pub use loading::{LoadError, LoadingSink, Transport};
