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

//! Pooled command buffers and the scope guard that returns them.

use super::command::CommandBuffer;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// A source of reusable [`CommandBuffer`]s.
///
/// Implementations hand out cleared buffers from [`get`](Self::get) and take
/// them back in [`release`](Self::release). Passes should not call these
/// directly; [`ScopedCommandBuffer`] pairs every `get` with exactly one
/// `release`.
pub trait CommandBufferPool: Send + Sync {
    /// Returns an empty buffer named `name`.
    fn get(&self, name: &str) -> CommandBuffer;

    /// Returns `buffer` to the pool.
    fn release(&self, buffer: CommandBuffer);
}

/// A command buffer borrowed from a pool for the duration of a scope.
///
/// The buffer is released back to its pool when the guard is dropped, which
/// covers normal returns, early returns through `?`, and unwinding.
///
/// ```rust,ignore
/// let mut cmd = ScopedCommandBuffer::acquire(context.command_buffer_pool(), "My Pass");
/// cmd.set_keyword(keywords::MAIN_LIGHT_SHADOWS, true);
/// context.execute_command_buffer(&cmd)?; // released even if this fails
/// ```
pub struct ScopedCommandBuffer {
    pool: Arc<dyn CommandBufferPool>,
    buffer: Option<CommandBuffer>,
}

impl ScopedCommandBuffer {
    /// Takes a buffer named `name` out of `pool`.
    pub fn acquire(pool: Arc<dyn CommandBufferPool>, name: &str) -> Self {
        let buffer = pool.get(name);
        Self {
            pool,
            buffer: Some(buffer),
        }
    }
}

impl Deref for ScopedCommandBuffer {
    type Target = CommandBuffer;

    fn deref(&self) -> &Self::Target {
        // Only `None` after drop has started.
        self.buffer.as_ref().expect("command buffer already released")
    }
}

impl DerefMut for ScopedCommandBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.buffer.as_mut().expect("command buffer already released")
    }
}

impl Drop for ScopedCommandBuffer {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.pool.release(buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::api::shader::keywords;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingPool {
        gets: Mutex<Vec<String>>,
        releases: Mutex<Vec<CommandBuffer>>,
    }

    impl CommandBufferPool for CountingPool {
        fn get(&self, name: &str) -> CommandBuffer {
            self.gets.lock().unwrap().push(name.to_string());
            CommandBuffer::new(name)
        }

        fn release(&self, buffer: CommandBuffer) {
            self.releases.lock().unwrap().push(buffer);
        }
    }

    #[test]
    fn guard_releases_recorded_buffer_on_drop() {
        let pool = Arc::new(CountingPool::default());
        {
            let mut cmd = ScopedCommandBuffer::acquire(pool.clone(), "scoped");
            cmd.enable_shader_keyword(keywords::MAIN_LIGHT_SHADOWS);
            assert!(pool.releases.lock().unwrap().is_empty());
        }

        assert_eq!(pool.gets.lock().unwrap().as_slice(), &["scoped".to_string()]);
        let releases = pool.releases.lock().unwrap();
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].len(), 1);
    }

    #[test]
    fn guard_releases_on_early_error_return() {
        fn fails(pool: Arc<dyn CommandBufferPool>) -> Result<(), String> {
            let _cmd = ScopedCommandBuffer::acquire(pool, "early");
            Err("boom".to_string())?;
            Ok(())
        }

        let pool = Arc::new(CountingPool::default());
        assert!(fails(pool.clone()).is_err());
        assert_eq!(pool.releases.lock().unwrap().len(), 1);
    }

    #[test]
    fn guard_releases_while_unwinding() {
        let pool = Arc::new(CountingPool::default());
        let pool_for_panic: Arc<dyn CommandBufferPool> = pool.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _cmd = ScopedCommandBuffer::acquire(pool_for_panic, "panicking");
            panic!("mid-recording failure");
        }));

        assert!(result.is_err());
        assert_eq!(pool.releases.lock().unwrap().len(), 1);
    }
}
