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

//! An ordered container for heterogeneous passes.

use super::{PassError, RenderPass};

/// Holds [`RenderPass`] trait objects in execution order.
///
/// Passes are kept sorted by [`RenderPassEvent`](super::RenderPassEvent);
/// passes sharing an event keep their registration order.
///
/// ```rust,ignore
/// use prism_core::PassQueue;
///
/// let mut queue = PassQueue::new();
/// queue.register(Box::new(MyPass::new()));
///
/// for pass in queue.iter() {
///     println!("{} @ {}", pass.name(), pass.render_pass_event());
/// }
/// ```
pub struct PassQueue {
    passes: Vec<Box<dyn RenderPass>>,
}

impl PassQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Adds a pass after every registered pass with an event less than or equal to its own.
    pub fn register(&mut self, pass: Box<dyn RenderPass>) {
        let event = pass.render_pass_event();
        let index = self
            .passes
            .partition_point(|p| p.render_pass_event() <= event);
        log::debug!(
            "Registering pass '{}' at {} (slot {})",
            pass.name(),
            event,
            index
        );
        self.passes.insert(index, pass);
    }

    /// Removes and returns the first pass named `name`.
    pub fn unregister(&mut self, name: &str) -> Result<Box<dyn RenderPass>, PassError> {
        let index = self
            .passes
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| PassError::NotFound(name.to_string()))?;
        Ok(self.passes.remove(index))
    }

    /// Finds a pass by name.
    pub fn get(&self, name: &str) -> Option<&dyn RenderPass> {
        self.passes
            .iter()
            .find(|p| p.name() == name)
            .map(|b| b.as_ref())
    }

    /// Finds a pass by name and downcasts it to its concrete type.
    pub fn get_as<T: 'static>(&self, name: &str) -> Option<&T> {
        self.get(name)?.as_any().downcast_ref()
    }

    /// Iterates over the passes in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn RenderPass> {
        self.passes.iter().map(|b| b.as_ref())
    }

    /// Mutable access to the passes, in execution order.
    pub fn passes_mut(&mut self) -> &mut [Box<dyn RenderPass>] {
        &mut self.passes
    }

    /// Returns the number of registered passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Returns `true` if no passes are registered.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for PassQueue {
    fn default() -> Self {
        Self::new()
    }
}
