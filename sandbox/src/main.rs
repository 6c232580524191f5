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

// Prism Sandbox
// Renders a handful of frames and prints the resulting global shader state.

use anyhow::Result;
use prism_agents::{FrameRenderer, RendererSettings};
use prism_core::renderer::{GlobalShaderState, RenderingData};
use prism_infra::RecordingRenderContext;
use prism_passes::DRAW_OBJECT_PASS_DATA;

// Cascade counts cycled through, one per frame.
const CASCADE_SCHEDULE: &[u32] = &[4, 2, 1, 3];

fn log_state(frame_index: u64, state: &GlobalShaderState) {
    let mut keywords: Vec<_> = state.enabled_keywords().map(|k| k.name()).collect();
    keywords.sort_unstable();
    log::info!("Frame {frame_index}: keywords {keywords:?}");

    if let Some(pass_data) = state.global_vector(DRAW_OBJECT_PASS_DATA) {
        log::info!(
            "Frame {frame_index}: _DrawObjectPassData = {:?} ({} bytes)",
            pass_data.to_array(),
            state
                .vector_bytes(DRAW_OBJECT_PASS_DATA)
                .map_or(0, <[u8]>::len)
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => RendererSettings::load_from_path(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            RendererSettings::default()
        }
    };

    let mut renderer = FrameRenderer::new(settings);
    let mut context = RecordingRenderContext::new();

    for &cascades in CASCADE_SCHEDULE {
        let base = renderer.rendering_data();
        let mut shadow_data = base.shadow_data;
        shadow_data.main_light_shadow_cascades_count = cascades;
        let data = RenderingData::new(shadow_data, base.camera_data, base.frame_index);

        let stats = renderer.render_frame(&mut context, &data)?;
        log::info!(
            "Frame {} rendered with {cascades} cascade(s): {}/{} pass(es) executed",
            stats.frame_index,
            stats.passes_executed,
            stats.passes_configured
        );
        log_state(stats.frame_index, context.state());
    }

    let pool = context.pool().stats();
    log::info!(
        "Command buffers: {} created, {} acquired, {} released, {} in use",
        pool.created,
        pool.acquired,
        pool.released,
        pool.in_use
    );
    Ok(())
}
