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

//! A render context that records submissions into an in-memory global state.

use crate::pool::SharedCommandBufferPool;
use prism_core::renderer::{
    CommandBuffer, CommandBufferPool, GlobalShaderState, RenderCommand, RenderContext, RenderError,
};
use std::collections::VecDeque;
use std::sync::Arc;

/// Number of submissions a context remembers before dropping the oldest.
pub const DEFAULT_SUBMISSION_LOG_LIMIT: usize = 64;

/// One accepted command buffer, as it was at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Name the buffer was acquired with.
    pub name: String,
    /// The recorded commands, in order.
    pub commands: Vec<RenderCommand>,
}

/// A [`RenderContext`] that applies submitted commands to its own
/// [`GlobalShaderState`] and remembers the most recent submissions.
pub struct RecordingRenderContext {
    pool: Arc<SharedCommandBufferPool>,
    state: GlobalShaderState,
    submissions: VecDeque<Submission>,
    submission_limit: usize,
    device_lost: bool,
}

impl RecordingRenderContext {
    /// Creates a context with its own pool.
    pub fn new() -> Self {
        Self::with_pool(Arc::new(SharedCommandBufferPool::new()))
    }

    /// Creates a context that hands out buffers from `pool`.
    pub fn with_pool(pool: Arc<SharedCommandBufferPool>) -> Self {
        Self {
            pool,
            state: GlobalShaderState::new(),
            submissions: VecDeque::new(),
            submission_limit: DEFAULT_SUBMISSION_LOG_LIMIT,
            device_lost: false,
        }
    }

    /// Keeps at most `limit` submissions in the log, oldest dropped first.
    pub fn with_submission_limit(mut self, limit: usize) -> Self {
        self.submission_limit = limit;
        self.submissions.truncate(limit);
        self
    }

    /// The global shader state after every accepted submission.
    pub fn state(&self) -> &GlobalShaderState {
        &self.state
    }

    /// The most recent accepted submissions, oldest first.
    ///
    /// Bounded by the submission limit, so long runs do not grow it.
    pub fn submissions(&self) -> &VecDeque<Submission> {
        &self.submissions
    }

    /// The pool this context hands to passes.
    pub fn pool(&self) -> &Arc<SharedCommandBufferPool> {
        &self.pool
    }

    /// Forgets the submission log, keeping the global state.
    pub fn clear_submissions(&mut self) {
        self.submissions.clear();
    }

    /// Makes every later submission fail with [`RenderError::DeviceLost`].
    pub fn simulate_device_loss(&mut self) {
        log::warn!("RecordingRenderContext: simulating device loss");
        self.device_lost = true;
    }
}

impl Default for RecordingRenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext for RecordingRenderContext {
    fn command_buffer_pool(&self) -> Arc<dyn CommandBufferPool> {
        self.pool.clone()
    }

    fn execute_command_buffer(&mut self, buffer: &CommandBuffer) -> Result<(), RenderError> {
        if self.device_lost {
            return Err(RenderError::DeviceLost);
        }

        log::trace!(
            "Executing command buffer '{}' ({} commands)",
            buffer.name(),
            buffer.len()
        );
        self.state.apply(buffer);
        if self.submission_limit == 0 {
            return Ok(());
        }
        if self.submissions.len() == self.submission_limit {
            self.submissions.pop_front();
        }
        self.submissions.push_back(Submission {
            name: buffer.name().to_string(),
            commands: buffer.commands().to_vec(),
        });
        Ok(())
    }
}
