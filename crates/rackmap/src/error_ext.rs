// RackMap - Schema-driven datacenter inventory database
//
// Copyright (c) 2025 RackMap contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error context helpers.
//!
//! Extension trait for `Result<T, RackError>` that annotates errors with
//! contextual information as they propagate up the call stack.
//!
//! # Examples
//!
//! ```rust
//! use rackmap::{from_yaml, RackResultExt};
//!
//! fn load_inventory(path: &str, content: &str) -> rackmap::RackResult<rackmap::Literal> {
//!     from_yaml(content).with_context(|| format!("while loading {}", path))
//! }
//! ```

use rackmap_core::RackError;
use std::fmt;

/// Extension trait for adding context to `Result<T, RackError>`.
pub trait RackResultExt<T> {
    /// The error type of this result.
    type ErrorType;

    /// Add context to an error. The context message is evaluated eagerly;
    /// prefer [`with_context`](Self::with_context) when it is expensive.
    fn context<C>(self, context: C) -> Result<T, RackError>
    where
        C: fmt::Display;

    /// Add context to an error, computing the message only on the error
    /// path.
    fn with_context<C, F>(self, f: F) -> Result<T, RackError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> RackResultExt<T> for Result<T, RackError> {
    type ErrorType = RackError;

    fn context<C>(self, context: C) -> Result<T, RackError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, RackError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(e, f().to_string()))
    }
}

impl<T> RackResultExt<T> for Result<T, std::io::Error> {
    type ErrorType = std::io::Error;

    fn context<C>(self, context: C) -> Result<T, RackError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| RackError::io(e.to_string()).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, RackError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| RackError::io(e.to_string()).with_context(f().to_string()))
    }
}

/// Chain new context in front of any existing context.
fn add_context(mut error: RackError, new_context: String) -> RackError {
    if new_context.is_empty() {
        return error;
    }
    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });
    error
}
