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

//! A thread-safe command buffer pool that reuses released buffers.

use prism_core::renderer::{CommandBuffer, CommandBufferPool};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default number of idle buffers a pool keeps for reuse.
pub const DEFAULT_RETAIN_LIMIT: usize = 16;

/// Counters describing how a pool has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers allocated because no idle buffer was available.
    pub created: u64,
    /// Total calls to `get`.
    pub acquired: u64,
    /// Total calls to `release`.
    pub released: u64,
    /// Buffers currently handed out and not yet released.
    pub in_use: u64,
}

#[derive(Debug, Default)]
struct PoolInner {
    idle: Vec<CommandBuffer>,
    stats: PoolStats,
}

/// A [`CommandBufferPool`] backed by a free list.
///
/// Released buffers are cleared and kept, up to a retain limit, so their
/// command allocations are reused by later frames.
#[derive(Debug)]
pub struct SharedCommandBufferPool {
    inner: Mutex<PoolInner>,
    retain_limit: usize,
}

impl SharedCommandBufferPool {
    /// Creates a pool that keeps up to [`DEFAULT_RETAIN_LIMIT`] idle buffers.
    pub fn new() -> Self {
        Self::with_retain_limit(DEFAULT_RETAIN_LIMIT)
    }

    /// Creates a pool that keeps up to `retain_limit` idle buffers.
    pub fn with_retain_limit(retain_limit: usize) -> Self {
        Self {
            inner: Mutex::new(PoolInner::default()),
            retain_limit,
        }
    }

    /// A snapshot of the usage counters.
    pub fn stats(&self) -> PoolStats {
        self.lock().stats
    }

    /// Number of idle buffers waiting for reuse.
    pub fn idle_count(&self) -> usize {
        self.lock().idle.len()
    }

    // A panic while the lock is held cannot leave the free list inconsistent,
    // so a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, PoolInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedCommandBufferPool {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBufferPool for SharedCommandBufferPool {
    fn get(&self, name: &str) -> CommandBuffer {
        let mut inner = self.lock();
        inner.stats.acquired += 1;
        inner.stats.in_use += 1;

        match inner.idle.pop() {
            Some(mut buffer) => {
                log::trace!("Reusing pooled command buffer for '{name}'");
                buffer.reset(name);
                buffer
            }
            None => {
                log::debug!("Creating new pooled command buffer for '{name}'");
                inner.stats.created += 1;
                CommandBuffer::new(name)
            }
        }
    }

    fn release(&self, mut buffer: CommandBuffer) {
        let mut inner = self.lock();
        inner.stats.released += 1;
        inner.stats.in_use = inner.stats.in_use.saturating_sub(1);

        if inner.idle.len() >= self.retain_limit {
            log::warn!(
                "Command buffer pool is full ({} idle); dropping '{}'",
                self.retain_limit,
                buffer.name()
            );
            return;
        }
        buffer.reset("");
        inner.idle.push(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::renderer::keywords;

    #[test]
    fn released_buffers_are_reused_empty() {
        let pool = SharedCommandBufferPool::new();

        let mut first = pool.get("first");
        first.enable_shader_keyword(keywords::MAIN_LIGHT_SHADOWS);
        pool.release(first);

        let second = pool.get("second");
        assert!(second.is_empty());
        assert_eq!(second.name(), "second");

        let stats = pool.stats();
        assert_eq!(stats.created, 1);
        assert_eq!(stats.acquired, 2);
        assert_eq!(stats.released, 1);
        assert_eq!(stats.in_use, 1);
    }

    #[test]
    fn retain_limit_caps_idle_buffers() {
        let pool = SharedCommandBufferPool::with_retain_limit(1);
        let a = pool.get("a");
        let b = pool.get("b");
        pool.release(a);
        pool.release(b);

        assert_eq!(pool.idle_count(), 1);
        assert_eq!(pool.stats().in_use, 0);
    }
}
