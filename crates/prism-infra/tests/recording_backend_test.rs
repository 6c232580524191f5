use prism_core::math::Vec4;
use prism_core::renderer::{keywords, CameraData, RenderingData, ShadowData};
use prism_core::{RenderPass, RenderPassEvent};
use prism_infra::{RecordingRenderContext, SharedCommandBufferPool, DEFAULT_SUBMISSION_LOG_LIMIT};
use prism_passes::{TransparentSettingsPass, DRAW_OBJECT_PASS_DATA};
use std::sync::Arc;

fn rendering_data(cascades: u32, frame_index: u64) -> RenderingData {
    RenderingData::new(
        ShadowData {
            supports_main_light_shadows: true,
            supports_additional_light_shadows: true,
            main_light_shadow_cascades_count: cascades,
        },
        CameraData {
            has_depth_texture: true,
        },
        frame_index,
    )
}

#[test]
fn pooled_buffer_is_reused_across_frames() {
    let _ = env_logger::builder().is_test(true).try_init();

    let pool = Arc::new(SharedCommandBufferPool::new());
    let mut ctx = RecordingRenderContext::with_pool(pool.clone());
    let mut pass =
        TransparentSettingsPass::new(RenderPassEvent::BEFORE_RENDERING_TRANSPARENTS, true);

    for frame_index in 0..5 {
        let data = rendering_data(4, frame_index);
        pass.configure(&data);
        pass.execute(&mut ctx, &data).unwrap();
        pass.end_frame();
    }

    let stats = pool.stats();
    assert_eq!(stats.created, 1);
    assert_eq!(stats.acquired, 5);
    assert_eq!(stats.released, 5);
    assert_eq!(stats.in_use, 0);
    assert_eq!(ctx.submissions().len(), 5);
}

#[test]
fn each_frame_reflects_only_its_own_inputs() {
    let mut ctx = RecordingRenderContext::new();
    let mut pass =
        TransparentSettingsPass::new(RenderPassEvent::BEFORE_RENDERING_TRANSPARENTS, true);

    let cascaded = rendering_data(4, 0);
    pass.configure(&cascaded);
    pass.execute(&mut ctx, &cascaded).unwrap();
    pass.end_frame();
    assert!(ctx
        .state()
        .is_keyword_enabled(keywords::MAIN_LIGHT_SHADOWS_CASCADE));

    let single = rendering_data(1, 1);
    pass.configure(&single);
    pass.execute(&mut ctx, &single).unwrap();
    pass.end_frame();
    assert!(!ctx
        .state()
        .is_keyword_enabled(keywords::MAIN_LIGHT_SHADOWS_CASCADE));
    assert_eq!(
        ctx.state().global_vector(DRAW_OBJECT_PASS_DATA),
        Some(Vec4::new(0.0, 0.0, 1.0, 0.0))
    );
}

#[test]
fn device_loss_releases_the_buffer() {
    let pool = Arc::new(SharedCommandBufferPool::new());
    let mut ctx = RecordingRenderContext::with_pool(pool.clone());
    let mut pass =
        TransparentSettingsPass::new(RenderPassEvent::BEFORE_RENDERING_TRANSPARENTS, true);
    let data = rendering_data(2, 0);

    ctx.simulate_device_loss();
    pass.configure(&data);
    assert!(pass.execute(&mut ctx, &data).is_err());

    assert_eq!(pool.stats().in_use, 0);
    assert_eq!(pool.stats().released, 1);
}

#[test]
fn long_runs_keep_the_submission_log_bounded() {
    let mut ctx = RecordingRenderContext::new();
    let mut pass =
        TransparentSettingsPass::new(RenderPassEvent::BEFORE_RENDERING_TRANSPARENTS, true);

    let frames = DEFAULT_SUBMISSION_LOG_LIMIT as u64 * 3;
    for frame_index in 0..frames {
        let data = rendering_data(4, frame_index);
        pass.configure(&data);
        pass.execute(&mut ctx, &data).unwrap();
        pass.end_frame();
    }

    assert_eq!(ctx.submissions().len(), DEFAULT_SUBMISSION_LOG_LIMIT);
    assert_eq!(ctx.pool().stats().acquired, frames);
}
