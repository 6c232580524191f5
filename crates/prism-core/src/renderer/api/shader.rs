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

//! Identifiers for global shader properties and shader keywords.
//!
//! Both are resolved from their string names once, at compile time, so no
//! per-frame string hashing or lookup happens on the hot path.

use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// An opaque handle to a named global shader property (a "register").
///
/// Obtained with [`ShaderPropertyId::from_name`], which is a `const fn` so
/// passes can resolve their property names into `const` items.
///
/// ```
/// use prism_core::renderer::ShaderPropertyId;
///
/// const TIME: ShaderPropertyId = ShaderPropertyId::from_name("_Time");
/// assert_eq!(TIME, ShaderPropertyId::from_name("_Time"));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderPropertyId(pub u32);

impl ShaderPropertyId {
    /// Resolves a property name to its identifier (32-bit FNV-1a of the UTF-8 bytes).
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u32;
            hash = hash.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }
}

impl fmt::Debug for ShaderPropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShaderPropertyId({:#010x})", self.0)
    }
}

/// A named boolean toggle that selects a shader code path for subsequent draws.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderKeyword(&'static str);

impl ShaderKeyword {
    /// Creates a keyword from its shader-side name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The shader-side name of this keyword.
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for ShaderKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShaderKeyword({})", self.0)
    }
}

impl fmt::Display for ShaderKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Keywords shared by the lit shaders.
pub mod keywords {
    use super::ShaderKeyword;

    /// Main directional light casts shadows onto the drawn objects.
    pub const MAIN_LIGHT_SHADOWS: ShaderKeyword = ShaderKeyword::new("_MAIN_LIGHT_SHADOWS");
    /// Main light shadows are sampled from a cascaded shadow map.
    pub const MAIN_LIGHT_SHADOWS_CASCADE: ShaderKeyword =
        ShaderKeyword::new("_MAIN_LIGHT_SHADOWS_CASCADE");
    /// Additional (point/spot) lights cast shadows onto the drawn objects.
    pub const ADDITIONAL_LIGHT_SHADOWS: ShaderKeyword =
        ShaderKeyword::new("_ADDITIONAL_LIGHT_SHADOWS");
}
