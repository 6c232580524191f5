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

//! Applies the lighting settings that transparent objects are drawn with.

use prism_core::math::Vec4;
use prism_core::renderer::{
    keywords, CommandBuffer, RenderContext, RenderError, RenderingData, ScopedCommandBuffer,
    ShaderPropertyId, ShadowData,
};
use prism_core::{RenderPass, RenderPassEvent};
use std::any::Any;

/// Global vector describing the objects drawn by the next draw pass.
///
/// Layout: `x` unused, `y` unused, `z` = depth texture available (1/0),
/// `w` = objects are opaque (1) or alpha blended (0).
pub const DRAW_OBJECT_PASS_DATA: ShaderPropertyId =
    ShaderPropertyId::from_name("_DrawObjectPassData");

/// Name of the pass, also used to tag its pooled command buffer.
pub const PROFILER_TAG: &str = "Transparent Settings Pass";

/// Construction-time attributes of a [`TransparentSettingsPass`]. Never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassConfig {
    /// Where in the frame the pass executes.
    pub event: RenderPassEvent,
    /// Whether transparent objects may receive shadows at all.
    pub receives_shadows: bool,
}

/// The values computed by one `setup` call and consumed by `execute`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassFrameState {
    /// State of the main light shadows keyword.
    pub main_light_shadows: bool,
    /// State of the main light shadow cascade keyword.
    pub main_light_shadow_cascades: bool,
    /// State of the additional light shadows keyword.
    pub additional_light_shadows: bool,
    /// Value written to [`DRAW_OBJECT_PASS_DATA`].
    pub pass_data: Vec4,
}

impl PassFrameState {
    /// Derives this frame's state from the pass configuration and frame inputs.
    ///
    /// The cascade keyword only looks at the receive capability and the
    /// cascade count. It does not depend on `main_light_shadows`.
    pub fn compute(
        config: &PassConfig,
        shadow_data: &ShadowData,
        main_light_shadows: bool,
        additional_light_shadows: bool,
        has_depth_texture: bool,
    ) -> Self {
        let receives = config.receives_shadows;
        Self {
            main_light_shadows: receives && main_light_shadows,
            additional_light_shadows: receives && additional_light_shadows,
            main_light_shadow_cascades: receives
                && shadow_data.main_light_shadow_cascades_count > 1,
            pass_data: Vec4::new(
                0.0,
                0.0,
                if has_depth_texture { 1.0 } else { 0.0 },
                // Transparent objects are alpha blended.
                0.0,
            ),
        }
    }

    /// Records the keyword and global vector commands, in their fixed order.
    pub fn record(&self, cmd: &mut CommandBuffer) {
        cmd.set_keyword(keywords::MAIN_LIGHT_SHADOWS, self.main_light_shadows);
        cmd.set_keyword(
            keywords::MAIN_LIGHT_SHADOWS_CASCADE,
            self.main_light_shadow_cascades,
        );
        cmd.set_keyword(
            keywords::ADDITIONAL_LIGHT_SHADOWS,
            self.additional_light_shadows,
        );
        cmd.set_global_vector(DRAW_OBJECT_PASS_DATA, self.pass_data);
    }
}

/// Where a pass is in its per-frame protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramePhase {
    /// No configuration exists for the current frame.
    #[default]
    Idle,
    /// `setup` ran; `execute` may be called.
    Configured,
    /// `execute` submitted this frame's commands at least once.
    Executed,
}

/// Sets the shadow keywords and per-pass data used by transparent objects.
///
/// Placed immediately before the transparent draws, this pass overrides
/// whatever the opaque passes left in the global shader state so transparent
/// objects only receive shadows when the renderer allows it.
#[derive(Debug)]
pub struct TransparentSettingsPass {
    config: PassConfig,
    frame: Option<PassFrameState>,
    phase: FramePhase,
}

impl TransparentSettingsPass {
    /// Creates the pass at `event`. `receives_shadows` is fixed for its lifetime.
    pub fn new(event: RenderPassEvent, receives_shadows: bool) -> Self {
        Self {
            config: PassConfig {
                event,
                receives_shadows,
            },
            frame: None,
            phase: FramePhase::Idle,
        }
    }

    /// The construction-time configuration.
    pub fn config(&self) -> &PassConfig {
        &self.config
    }

    /// This frame's state, if `setup` ran since the last frame ended.
    pub fn frame_state(&self) -> Option<&PassFrameState> {
        self.frame.as_ref()
    }

    /// Current position in the per-frame protocol.
    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    /// Computes this frame's keyword states and pass data.
    ///
    /// Overwrites any earlier configuration. Always returns `true`: the pass
    /// is enqueued every frame.
    pub fn setup(
        &mut self,
        shadow_data: &ShadowData,
        main_light_shadows: bool,
        additional_light_shadows: bool,
        has_depth_texture: bool,
    ) -> bool {
        let state = PassFrameState::compute(
            &self.config,
            shadow_data,
            main_light_shadows,
            additional_light_shadows,
            has_depth_texture,
        );
        log::debug!("{PROFILER_TAG}: configured {state:?}");
        self.frame = Some(state);
        self.phase = FramePhase::Configured;
        true
    }
}

impl RenderPass for TransparentSettingsPass {
    fn name(&self) -> &'static str {
        PROFILER_TAG
    }

    fn render_pass_event(&self) -> RenderPassEvent {
        self.config.event
    }

    fn configure(&mut self, rendering_data: &RenderingData) -> bool {
        let shadow_data = &rendering_data.shadow_data;
        self.setup(
            shadow_data,
            shadow_data.supports_main_light_shadows,
            shadow_data.supports_additional_light_shadows,
            rendering_data.camera_data.has_depth_texture,
        )
    }

    fn execute(
        &mut self,
        context: &mut dyn RenderContext,
        _rendering_data: &RenderingData,
    ) -> Result<(), RenderError> {
        let state = match self.frame {
            Some(state) => state,
            None => panic!("{PROFILER_TAG} executed without being configured this frame"),
        };

        let mut cmd = ScopedCommandBuffer::acquire(context.command_buffer_pool(), PROFILER_TAG);
        state.record(&mut cmd);
        context.execute_command_buffer(&cmd)?;

        self.phase = FramePhase::Executed;
        Ok(())
    }

    fn end_frame(&mut self) {
        self.frame = None;
        self.phase = FramePhase::Idle;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::renderer::{CameraData, CommandBufferPool};
    use std::sync::Arc;

    const BOOLS: [bool; 2] = [false, true];
    const CASCADES: [u32; 5] = [0, 1, 2, 3, 4];

    struct PlainPool;

    impl CommandBufferPool for PlainPool {
        fn get(&self, name: &str) -> CommandBuffer {
            CommandBuffer::new(name)
        }

        fn release(&self, _buffer: CommandBuffer) {}
    }

    #[derive(Default)]
    struct CollectingContext {
        submitted: Vec<CommandBuffer>,
    }

    impl RenderContext for CollectingContext {
        fn command_buffer_pool(&self) -> Arc<dyn CommandBufferPool> {
            Arc::new(PlainPool)
        }

        fn execute_command_buffer(&mut self, buffer: &CommandBuffer) -> Result<(), RenderError> {
            self.submitted.push(buffer.clone());
            Ok(())
        }
    }

    fn shadows(cascades: u32) -> ShadowData {
        ShadowData {
            main_light_shadow_cascades_count: cascades,
            ..Default::default()
        }
    }

    fn pass(receives_shadows: bool) -> TransparentSettingsPass {
        TransparentSettingsPass::new(
            RenderPassEvent::BEFORE_RENDERING_TRANSPARENTS,
            receives_shadows,
        )
    }

    #[test]
    fn without_receive_capability_every_shadow_flag_is_off() {
        let mut p = pass(false);
        for cascades in CASCADES {
            for main in BOOLS {
                for additional in BOOLS {
                    for depth in BOOLS {
                        assert!(p.setup(&shadows(cascades), main, additional, depth));
                        let s = p.frame_state().unwrap();
                        assert!(!s.main_light_shadows);
                        assert!(!s.main_light_shadow_cascades);
                        assert!(!s.additional_light_shadows);
                    }
                }
            }
        }
    }

    #[test]
    fn with_receive_capability_flags_follow_inputs() {
        let mut p = pass(true);
        for cascades in CASCADES {
            for main in BOOLS {
                for additional in BOOLS {
                    for depth in BOOLS {
                        p.setup(&shadows(cascades), main, additional, depth);
                        let s = p.frame_state().unwrap();
                        assert_eq!(s.main_light_shadows, main);
                        assert_eq!(s.additional_light_shadows, additional);
                        assert_eq!(s.main_light_shadow_cascades, cascades > 1);
                    }
                }
            }
        }
    }

    #[test]
    fn cascades_do_not_depend_on_main_light_shadows() {
        let mut p = pass(true);
        p.setup(&shadows(4), false, false, false);
        let s = p.frame_state().unwrap();
        assert!(!s.main_light_shadows);
        assert!(s.main_light_shadow_cascades);
    }

    #[test]
    fn pass_data_encodes_depth_texture_only() {
        let mut p = pass(true);
        for depth in BOOLS {
            p.setup(&shadows(2), true, true, depth);
            let data = p.frame_state().unwrap().pass_data;
            assert_eq!(data.z, if depth { 1.0 } else { 0.0 });
            assert_eq!(data.x, 0.0);
            assert_eq!(data.y, 0.0);
            assert_eq!(data.w, 0.0);
        }
    }

    #[test]
    fn setup_is_idempotent_and_last_call_wins() {
        let mut once = pass(true);
        once.setup(&shadows(3), true, false, true);

        let mut twice = pass(true);
        twice.setup(&shadows(3), true, false, true);
        twice.setup(&shadows(3), true, false, true);
        assert_eq!(once.frame_state(), twice.frame_state());

        twice.setup(&shadows(1), false, true, false);
        let s = twice.frame_state().unwrap();
        assert!(!s.main_light_shadows);
        assert!(!s.main_light_shadow_cascades);
        assert!(s.additional_light_shadows);
    }

    #[test]
    fn configure_reads_rendering_data() {
        let mut p = pass(true);
        let data = RenderingData::new(
            ShadowData {
                supports_main_light_shadows: true,
                supports_additional_light_shadows: false,
                main_light_shadow_cascades_count: 2,
            },
            CameraData {
                has_depth_texture: true,
            },
            7,
        );
        assert!(p.configure(&data));
        assert_eq!(
            p.frame_state(),
            Some(&PassFrameState {
                main_light_shadows: true,
                main_light_shadow_cascades: true,
                additional_light_shadows: false,
                pass_data: Vec4::new(0.0, 0.0, 1.0, 0.0),
            })
        );
    }

    #[test]
    fn phases_follow_the_frame_protocol() {
        let mut p = pass(true);
        let mut ctx = CollectingContext::default();
        let data = RenderingData::default();
        assert_eq!(p.phase(), FramePhase::Idle);

        p.configure(&data);
        assert_eq!(p.phase(), FramePhase::Configured);

        p.execute(&mut ctx, &data).unwrap();
        assert_eq!(p.phase(), FramePhase::Executed);

        p.end_frame();
        assert_eq!(p.phase(), FramePhase::Idle);
        assert!(p.frame_state().is_none());
    }

    #[test]
    fn executing_twice_submits_twice() {
        let mut p = pass(true);
        let mut ctx = CollectingContext::default();
        let data = RenderingData::default();
        p.configure(&data);
        p.execute(&mut ctx, &data).unwrap();
        p.execute(&mut ctx, &data).unwrap();

        assert_eq!(ctx.submitted.len(), 2);
        assert_eq!(ctx.submitted[0], ctx.submitted[1]);
    }

    #[test]
    #[should_panic(expected = "executed without being configured")]
    fn execute_without_configure_panics() {
        let mut p = pass(true);
        let mut ctx = CollectingContext::default();
        let _ = p.execute(&mut ctx, &RenderingData::default());
    }

    #[test]
    #[should_panic(expected = "executed without being configured")]
    fn configuration_does_not_survive_end_frame() {
        let mut p = pass(true);
        let mut ctx = CollectingContext::default();
        let data = RenderingData::default();
        p.configure(&data);
        p.end_frame();
        let _ = p.execute(&mut ctx, &data);
    }
}
