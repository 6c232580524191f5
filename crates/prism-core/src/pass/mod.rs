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

//! # Pass Abstraction
//!
//! The base trait for every pass an orchestrator can schedule in a frame.
//!
//! A **Pass** is one orderable unit of per-frame work: it may set global
//! shader state and/or issue draws. Passes know nothing about each other; the
//! orchestrator composes them by their [`RenderPassEvent`].
//!
//! ## Frame protocol
//!
//! ```text
//! configure(data) ──true──▶ enqueued ──▶ execute(ctx, data) ──▶ end_frame()
//!        │
//!        └──false──▶ skipped this frame ────────────────────────▶ end_frame()
//! ```
//!
//! - **`configure`** receives fresh per-frame data and recomputes whatever the
//!   pass needs. Nothing from a previous frame may be reused.
//! - **`execute`** records and submits commands using exactly the state the
//!   last `configure` of this frame produced.
//! - **`end_frame`** drops the frame-scoped state.

use crate::renderer::{RenderContext, RenderError, RenderingData};
use std::any::Any;
use std::fmt;

mod event;
mod queue;

pub use self::event::RenderPassEvent;
pub use self::queue::PassQueue;

/// Error type for pass scheduling and execution.
#[derive(Debug)]
pub enum PassError {
    /// A pass failed while executing; the frame was aborted.
    ExecutionFailed {
        /// Name of the failing pass.
        pass: &'static str,
        /// The underlying render context error.
        source: RenderError,
    },
    /// No pass with the given name is registered.
    NotFound(String),
}

impl fmt::Display for PassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassError::ExecutionFailed { pass, source } => {
                write!(f, "Pass '{pass}' failed to execute: {source}")
            }
            PassError::NotFound(name) => write!(f, "No pass named '{name}' is registered"),
        }
    }
}

impl std::error::Error for PassError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PassError::ExecutionFailed { source, .. } => Some(source),
            PassError::NotFound(_) => None,
        }
    }
}

/// Base trait for every pass the orchestrator can schedule.
///
/// Implementors are constructed once and live across frames; only the state
/// produced by [`configure`](RenderPass::configure) is frame-scoped.
pub trait RenderPass: Send + Sync {
    /// Human-readable name, used for logging and for command buffer names.
    fn name(&self) -> &'static str;

    /// Where in the frame this pass executes.
    fn render_pass_event(&self) -> RenderPassEvent;

    /// Recomputes the pass's frame state from `rendering_data`.
    ///
    /// Returns `true` if the pass should be enqueued for execution this frame.
    fn configure(&mut self, rendering_data: &RenderingData) -> bool;

    /// Records and submits this frame's commands into `context`.
    ///
    /// Must only be called after [`configure`](RenderPass::configure) in the
    /// same frame; errors from the context are propagated unchanged.
    fn execute(
        &mut self,
        context: &mut dyn RenderContext,
        rendering_data: &RenderingData,
    ) -> Result<(), RenderError>;

    /// Discards frame-scoped state. Called once per frame after execution.
    ///
    /// Default is a no-op.
    fn end_frame(&mut self) {}

    // --- Downcasting ---

    /// Downcast to a concrete type for type-specific operations.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to a concrete type (mutable) for type-specific operations.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn execution_failed_display_and_source() {
        let err = PassError::ExecutionFailed {
            pass: "Transparent Settings Pass",
            source: RenderError::DeviceLost,
        };
        assert_eq!(
            err.to_string(),
            "Pass 'Transparent Settings Pass' failed to execute: The graphics device was lost and needs to be reinitialized."
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn not_found_has_no_source() {
        let err = PassError::NotFound("Missing".into());
        assert_eq!(err.to_string(), "No pass named 'Missing' is registered");
        assert!(err.source().is_none());
    }
}
