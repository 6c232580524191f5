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

//! Defines the recorded command list that passes hand to a render context.

use super::shader::{ShaderKeyword, ShaderPropertyId};
use crate::math::Vec4;

/// A single state-setting command recorded into a [`CommandBuffer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Turns a global shader keyword on for subsequent draws.
    EnableShaderKeyword(ShaderKeyword),
    /// Turns a global shader keyword off for subsequent draws.
    DisableShaderKeyword(ShaderKeyword),
    /// Writes four floats into a global shader vector property.
    SetGlobalVector {
        /// The property being written.
        property: ShaderPropertyId,
        /// The new value.
        value: Vec4,
    },
}

/// An ordered list of commands, recorded on the CPU and submitted as a unit.
///
/// Buffers are normally obtained from a
/// [`CommandBufferPool`](super::pool::CommandBufferPool) through a
/// [`ScopedCommandBuffer`](super::pool::ScopedCommandBuffer) rather than
/// constructed directly, so their allocations are reused across frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandBuffer {
    name: String,
    commands: Vec<RenderCommand>,
}

impl CommandBuffer {
    /// Creates an empty buffer with the given debug name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// The debug name the buffer was acquired with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records enabling `keyword`.
    pub fn enable_shader_keyword(&mut self, keyword: ShaderKeyword) {
        self.commands
            .push(RenderCommand::EnableShaderKeyword(keyword));
    }

    /// Records disabling `keyword`.
    pub fn disable_shader_keyword(&mut self, keyword: ShaderKeyword) {
        self.commands
            .push(RenderCommand::DisableShaderKeyword(keyword));
    }

    /// Records enabling or disabling `keyword` depending on `enabled`.
    pub fn set_keyword(&mut self, keyword: ShaderKeyword, enabled: bool) {
        log::trace!("{}: {} = {}", self.name, keyword, enabled);
        if enabled {
            self.enable_shader_keyword(keyword);
        } else {
            self.disable_shader_keyword(keyword);
        }
    }

    /// Records writing `value` to the global vector `property`.
    pub fn set_global_vector(&mut self, property: ShaderPropertyId, value: Vec4) {
        log::trace!("{}: {:?} = {:?}", self.name, property, value);
        self.commands
            .push(RenderCommand::SetGlobalVector { property, value });
    }

    /// The commands recorded so far, in recording order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops all recorded commands and renames the buffer, keeping its allocation.
    ///
    /// Used by pools when handing a released buffer out again.
    pub fn reset(&mut self, name: &str) {
        self.commands.clear();
        self.name.clear();
        self.name.push_str(name);
    }
}
