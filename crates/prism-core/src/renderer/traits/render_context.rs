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

//! The submission sink passes hand their recorded command buffers to.

use crate::renderer::api::{CommandBuffer, CommandBufferPool};
use crate::renderer::error::RenderError;
use std::sync::Arc;

/// The sink that accepts the command buffers recorded by passes.
///
/// A context owns the frame's global shader state; submitting a buffer makes
/// its commands visible to every draw issued afterwards in the same frame.
pub trait RenderContext {
    /// The pool passes should draw their command buffers from.
    fn command_buffer_pool(&self) -> Arc<dyn CommandBufferPool>;

    /// Schedules the commands of `buffer` for execution, in order.
    ///
    /// The buffer is only borrowed; the caller still owns it and is
    /// responsible for returning it to its pool.
    fn execute_command_buffer(&mut self, buffer: &CommandBuffer) -> Result<(), RenderError>;
}
