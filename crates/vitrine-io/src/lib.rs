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

//! # Vitrine IO
//!
//! I/O services for Vitrine's remote asset system: the HTTP transport, the
//! deduplicating resource cache, and the concrete composite-asset readers
//! built on top of it.

pub mod http;
pub mod loading;

pub use http::HttpTransport;
pub use loading::{AsyncResourceCache, FontReader, LoadingManager, ResourceReader};
