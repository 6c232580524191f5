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

//! Defines the FrameRenderer, the orchestrator driving every pass through a frame.

use crate::settings::RendererSettings;
use prism_core::{
    renderer::{CameraData, RenderContext, RenderingData, ShadowData},
    PassError, PassQueue, RenderPass,
};
use prism_passes::TransparentSettingsPass;

/// Summary of one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Index of the frame that was rendered.
    pub frame_index: u64,
    /// Number of passes whose configure asked to be enqueued.
    pub passes_configured: usize,
    /// Number of passes that executed successfully.
    pub passes_executed: usize,
}

/// Owns the ordered pass list and runs the configure/execute/end-of-frame protocol.
pub struct FrameRenderer {
    settings: RendererSettings,
    passes: PassQueue,
    // Frames rendered since construction, failed ones included.
    frame_count: u64,
}

impl FrameRenderer {
    /// Builds the standard pass list from the given settings.
    pub fn new(settings: RendererSettings) -> Self {
        let mut passes = PassQueue::new();
        passes.register(Box::new(TransparentSettingsPass::new(
            settings.transparent_settings_event,
            settings.shadow_transparent_receive,
        )));

        log::info!(
            "FrameRenderer created with {} pass(es), transparent shadows {}",
            passes.len(),
            if settings.shadow_transparent_receive {
                "enabled"
            } else {
                "disabled"
            }
        );

        Self {
            settings,
            passes,
            frame_count: 0,
        }
    }

    /// The settings this renderer was built from.
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Schedules an additional pass at its own event.
    pub fn add_pass(&mut self, pass: Box<dyn RenderPass>) {
        self.passes.register(pass);
    }

    /// The scheduled passes, in execution order.
    pub fn passes(&self) -> &PassQueue {
        &self.passes
    }

    /// Mutable access to the scheduled passes.
    pub fn passes_mut(&mut self) -> &mut PassQueue {
        &mut self.passes
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Assembles the rendering data for the next frame from the settings.
    pub fn rendering_data(&self) -> RenderingData {
        RenderingData::new(
            ShadowData {
                supports_main_light_shadows: self.settings.supports_main_light_shadows,
                supports_additional_light_shadows: self
                    .settings
                    .supports_additional_light_shadows,
                main_light_shadow_cascades_count: self.settings.main_light_shadow_cascades,
            },
            CameraData {
                has_depth_texture: self.settings.requires_depth_texture,
            },
            self.frame_count,
        )
    }

    /// Renders one frame.
    ///
    /// Every pass is configured, then the enqueued ones execute in event order.
    /// The first execution failure aborts the remaining passes and is returned,
    /// but every pass still gets its `end_frame` call.
    pub fn render_frame(
        &mut self,
        context: &mut dyn RenderContext,
        rendering_data: &RenderingData,
    ) -> Result<FrameStats, PassError> {
        let passes = self.passes.passes_mut();

        let mut enqueued = Vec::with_capacity(passes.len());
        for (index, pass) in passes.iter_mut().enumerate() {
            if pass.configure(rendering_data) {
                log::debug!(
                    "Frame {}: enqueued '{}' at {}",
                    rendering_data.frame_index,
                    pass.name(),
                    pass.render_pass_event()
                );
                enqueued.push(index);
            } else {
                log::debug!(
                    "Frame {}: '{}' skipped",
                    rendering_data.frame_index,
                    pass.name()
                );
            }
        }

        let mut executed = 0;
        let mut outcome = Ok(());
        for &index in &enqueued {
            let pass = &mut passes[index];
            if let Err(source) = pass.execute(context, rendering_data) {
                log::error!(
                    "Frame {}: pass '{}' failed: {}",
                    rendering_data.frame_index,
                    pass.name(),
                    source
                );
                outcome = Err(PassError::ExecutionFailed {
                    pass: pass.name(),
                    source,
                });
                break;
            }
            executed += 1;
        }

        for pass in passes.iter_mut() {
            pass.end_frame();
        }
        self.frame_count += 1;

        outcome.map(|()| FrameStats {
            frame_index: rendering_data.frame_index,
            passes_configured: enqueued.len(),
            passes_executed: executed,
        })
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(RendererSettings::default())
    }
}
