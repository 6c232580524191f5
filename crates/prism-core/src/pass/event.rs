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

//! Scheduling points for passes within a frame.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, totally ordered position in the frame's pass sequence.
///
/// Passes with a smaller event execute earlier. The named constants mark the
/// stock pipeline points; [`offset`](RenderPassEvent::offset) places a pass
/// just before or after one of them.
///
/// ```
/// use prism_core::RenderPassEvent;
///
/// let late = RenderPassEvent::BEFORE_RENDERING_TRANSPARENTS.offset(1);
/// assert!(RenderPassEvent::BEFORE_RENDERING_TRANSPARENTS < late);
/// assert!(late < RenderPassEvent::AFTER_RENDERING_TRANSPARENTS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderPassEvent(i32);

impl RenderPassEvent {
    /// Before any other rendering work of the camera.
    pub const BEFORE_RENDERING: Self = Self(0);
    /// Before shadow maps are rendered.
    pub const BEFORE_RENDERING_SHADOWS: Self = Self(50);
    /// After shadow maps are rendered.
    pub const AFTER_RENDERING_SHADOWS: Self = Self(100);
    /// Before depth/normal prepasses.
    pub const BEFORE_RENDERING_PREPASSES: Self = Self(150);
    /// After depth/normal prepasses.
    pub const AFTER_RENDERING_PREPASSES: Self = Self(200);
    /// Before opaque geometry is drawn.
    pub const BEFORE_RENDERING_OPAQUES: Self = Self(250);
    /// After opaque geometry is drawn.
    pub const AFTER_RENDERING_OPAQUES: Self = Self(300);
    /// Before the skybox is drawn.
    pub const BEFORE_RENDERING_SKYBOX: Self = Self(350);
    /// After the skybox is drawn.
    pub const AFTER_RENDERING_SKYBOX: Self = Self(400);
    /// Before transparent geometry is drawn.
    pub const BEFORE_RENDERING_TRANSPARENTS: Self = Self(450);
    /// After transparent geometry is drawn.
    pub const AFTER_RENDERING_TRANSPARENTS: Self = Self(500);
    /// Before post-processing.
    pub const BEFORE_RENDERING_POST_PROCESSING: Self = Self(550);
    /// After post-processing.
    pub const AFTER_RENDERING_POST_PROCESSING: Self = Self(600);
    /// After all rendering work of the camera.
    pub const AFTER_RENDERING: Self = Self(1000);

    /// Creates an event from a raw ordering value.
    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    /// The raw ordering value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// An event `delta` steps after (or before, if negative) this one.
    pub const fn offset(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta))
    }

    fn label(self) -> Option<&'static str> {
        let label = match self {
            Self::BEFORE_RENDERING => "BeforeRendering",
            Self::BEFORE_RENDERING_SHADOWS => "BeforeRenderingShadows",
            Self::AFTER_RENDERING_SHADOWS => "AfterRenderingShadows",
            Self::BEFORE_RENDERING_PREPASSES => "BeforeRenderingPrepasses",
            Self::AFTER_RENDERING_PREPASSES => "AfterRenderingPrepasses",
            Self::BEFORE_RENDERING_OPAQUES => "BeforeRenderingOpaques",
            Self::AFTER_RENDERING_OPAQUES => "AfterRenderingOpaques",
            Self::BEFORE_RENDERING_SKYBOX => "BeforeRenderingSkybox",
            Self::AFTER_RENDERING_SKYBOX => "AfterRenderingSkybox",
            Self::BEFORE_RENDERING_TRANSPARENTS => "BeforeRenderingTransparents",
            Self::AFTER_RENDERING_TRANSPARENTS => "AfterRenderingTransparents",
            Self::BEFORE_RENDERING_POST_PROCESSING => "BeforeRenderingPostProcessing",
            Self::AFTER_RENDERING_POST_PROCESSING => "AfterRenderingPostProcessing",
            Self::AFTER_RENDERING => "AfterRendering",
            _ => return None,
        };
        Some(label)
    }
}

impl Default for RenderPassEvent {
    fn default() -> Self {
        Self::AFTER_RENDERING_OPAQUES
    }
}

impl fmt::Display for RenderPassEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "Event({})", self.0),
        }
    }
}
