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

//! The explicit global shader state that submitted commands write into.

use super::command::{CommandBuffer, RenderCommand};
use super::shader::{ShaderKeyword, ShaderPropertyId};
use crate::math::Vec4;
use std::collections::{HashMap, HashSet};

/// Keyword and vector values visible to every draw issued after them.
///
/// There is no process-wide instance: a render context owns one and applies
/// submitted buffers to it in submission order, so later writes win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalShaderState {
    enabled_keywords: HashSet<ShaderKeyword>,
    vectors: HashMap<ShaderPropertyId, Vec4>,
}

impl GlobalShaderState {
    /// Creates a state with no keywords enabled and no vectors set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every command of `buffer`, in order.
    pub fn apply(&mut self, buffer: &CommandBuffer) {
        for command in buffer.commands() {
            self.apply_command(command);
        }
    }

    /// Applies a single command.
    pub fn apply_command(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::EnableShaderKeyword(keyword) => {
                self.enabled_keywords.insert(*keyword);
            }
            RenderCommand::DisableShaderKeyword(keyword) => {
                self.enabled_keywords.remove(keyword);
            }
            RenderCommand::SetGlobalVector { property, value } => {
                self.vectors.insert(*property, *value);
            }
        }
    }

    /// Returns `true` if `keyword` is currently enabled.
    pub fn is_keyword_enabled(&self, keyword: ShaderKeyword) -> bool {
        self.enabled_keywords.contains(&keyword)
    }

    /// Iterates over the enabled keywords, in no particular order.
    pub fn enabled_keywords(&self) -> impl Iterator<Item = ShaderKeyword> + '_ {
        self.enabled_keywords.iter().copied()
    }

    /// The current value of a global vector, if it has ever been set.
    pub fn global_vector(&self, property: ShaderPropertyId) -> Option<Vec4> {
        self.vectors.get(&property).copied()
    }

    /// The current value of a global vector as raw bytes, ready for a uniform upload.
    pub fn vector_bytes(&self, property: ShaderPropertyId) -> Option<&[u8]> {
        self.vectors.get(&property).map(bytemuck::bytes_of)
    }

    /// Forgets every keyword and vector.
    pub fn clear(&mut self) {
        self.enabled_keywords.clear();
        self.vectors.clear();
    }
}
