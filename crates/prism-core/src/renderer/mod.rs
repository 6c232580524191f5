// Copyright 2025 eraflo
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

//! Provides the public, backend-agnostic rendering contracts.
//!
//! This module defines the "common language" spoken between passes and the
//! backend that receives their commands: recorded command buffers, the pool
//! they come from, shader property and keyword identifiers, the explicit
//! global shader state, and the per-frame data handed to every pass.
//!
//! The 'how' (actually applying commands, pooling buffers) is handled by a
//! concrete backend in `prism-infra`, which implements these traits.

pub mod api;
pub mod error;
pub mod traits;

// Re-export the most important traits and types for easier use.
pub use self::api::*;
pub use self::error::RenderError;
pub use self::traits::RenderContext;
