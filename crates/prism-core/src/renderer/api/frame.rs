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

//! Per-frame data assembled by the orchestrator and read by every pass.

/// Shadow settings resolved by the shadow subsystem for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowData {
    /// Main light shadows are rendered this frame.
    pub supports_main_light_shadows: bool,
    /// Additional light shadows are rendered this frame.
    pub supports_additional_light_shadows: bool,
    /// Number of cascades in the main light's shadow map.
    pub main_light_shadow_cascades_count: u32,
}

impl Default for ShadowData {
    fn default() -> Self {
        Self {
            supports_main_light_shadows: false,
            supports_additional_light_shadows: false,
            main_light_shadow_cascades_count: 1,
        }
    }
}

/// Camera-level settings for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraData {
    /// A depth texture is produced this frame and may be sampled by shaders.
    pub has_depth_texture: bool,
}

/// Everything a pass may read while being configured or executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderingData {
    /// Shadow state for this frame.
    pub shadow_data: ShadowData,
    /// Camera state for this frame.
    pub camera_data: CameraData,
    /// Monotonic index of the frame being rendered.
    pub frame_index: u64,
}

impl RenderingData {
    /// Bundles the frame's shadow and camera data.
    pub fn new(shadow_data: ShadowData, camera_data: CameraData, frame_index: u64) -> Self {
        Self {
            shadow_data,
            camera_data,
            frame_index,
        }
    }
}
