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

//! Defines the error types raised while loading a remote resource.

use std::fmt;

/// An error raised while fetching or assembling a composite resource.
///
/// All variants are recoverable at the caller's discretion: nothing is
/// cached on failure, so a subsequent load of the same key retries from
/// scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A structured sub-fetch completed with a non-success HTTP status.
    Transport {
        /// The URL of the sub-resource that failed.
        url: String,
        /// The HTTP status code returned by the server.
        status: u16,
        /// The status text accompanying the code.
        status_text: String,
    },
    /// A sub-fetch produced no usable payload (e.g. the binary asset could
    /// not be decoded, or the descriptor did not match its schema).
    Decode {
        /// The URL of the sub-resource that failed.
        url: String,
    },
    /// The request itself failed below the HTTP layer (connection refused,
    /// DNS failure, interrupted body).
    Request {
        /// The URL of the sub-resource that failed.
        url: String,
        /// A description of the underlying failure.
        message: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport {
                url,
                status,
                status_text,
            } => {
                write!(
                    f,
                    "failed to load '{url}', status: {status} {status_text}"
                )
            }
            LoadError::Decode { url } => {
                write!(f, "failed to decode resource from '{url}'")
            }
            LoadError::Request { url, message } => {
                write!(f, "request for '{url}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for LoadError {}
