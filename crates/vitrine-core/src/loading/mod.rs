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

//! Contracts for loading remote composite resources.
//!
//! Loading is split across two collaborators, both defined here as traits so
//! the cache in `vitrine-io` stays decoupled from any concrete network stack:
//!
//! - The [`Transport`] performs the actual retrieval of sub-resources.
//! - The [`LoadingSink`] is notified of load start/end/error per resource key
//!   and is typically wired to a loading indicator in the host application.
//!
//! Failures are expressed through the [`LoadError`] hierarchy.

mod error;
mod sink;
mod transport;

pub use error::*;
pub use sink::*;
pub use transport::*;
