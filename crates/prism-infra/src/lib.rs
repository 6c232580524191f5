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

//! # Prism Infra
//!
//! Concrete implementations of the contracts defined in `prism-core`.
//!
//! The backend provided here records instead of talking to a GPU: submitted
//! command buffers are applied to an in-memory [`GlobalShaderState`] and kept
//! in a submission log, which is what tools and tests inspect.
//!
//! [`GlobalShaderState`]: prism_core::renderer::GlobalShaderState

pub mod context;
pub mod pool;

pub use context::{RecordingRenderContext, Submission, DEFAULT_SUBMISSION_LOG_LIMIT};
pub use pool::{PoolStats, SharedCommandBufferPool};
