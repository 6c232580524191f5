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

//! Renderer-wide feature settings, loadable from RON.

use anyhow::{Context, Result};
use prism_core::RenderPassEvent;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest cascade count the main light shadow map supports.
pub const MAX_SHADOW_CASCADES: u32 = 4;

/// Errors raised when settings hold values the renderer cannot use.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The cascade count is outside `1..=MAX_SHADOW_CASCADES`.
    #[error("main light shadow cascades must be between 1 and {MAX_SHADOW_CASCADES}, got {0}")]
    InvalidCascadeCount(u32),
    /// The RON source could not be parsed.
    #[error("failed to parse renderer settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Pipeline-wide feature switches.
///
/// Every field has a default, so a settings file only needs the values it changes:
///
/// ```
/// use prism_agents::RendererSettings;
///
/// let settings = RendererSettings::from_ron_str("(main_light_shadow_cascades: 2)").unwrap();
/// assert_eq!(settings.main_light_shadow_cascades, 2);
/// assert!(settings.shadow_transparent_receive);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Main light shadows are rendered.
    pub supports_main_light_shadows: bool,
    /// Additional light shadows are rendered.
    pub supports_additional_light_shadows: bool,
    /// Number of cascades of the main light shadow map.
    pub main_light_shadow_cascades: u32,
    /// Transparent objects may receive shadows.
    pub shadow_transparent_receive: bool,
    /// A depth texture is produced for every camera.
    pub requires_depth_texture: bool,
    /// Where the transparent settings pass is scheduled.
    pub transparent_settings_event: RenderPassEvent,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            supports_main_light_shadows: true,
            supports_additional_light_shadows: true,
            main_light_shadow_cascades: MAX_SHADOW_CASCADES,
            shadow_transparent_receive: true,
            requires_depth_texture: false,
            transparent_settings_event: RenderPassEvent::BEFORE_RENDERING_TRANSPARENTS,
        }
    }
}

impl RendererSettings {
    /// Parses and validates settings from RON source.
    pub fn from_ron_str(source: &str) -> Result<Self, SettingsError> {
        let settings: Self = ron::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses, and validates a RON settings file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read renderer settings '{}'", path.display()))?;
        let settings = Self::from_ron_str(&source)
            .with_context(|| format!("Invalid renderer settings '{}'", path.display()))?;
        log::info!("Loaded renderer settings from '{}'", path.display());
        Ok(settings)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=MAX_SHADOW_CASCADES).contains(&self.main_light_shadow_cascades) {
            return Err(SettingsError::InvalidCascadeCount(
                self.main_light_shadow_cascades,
            ));
        }
        Ok(())
    }
}
