//! Pool of reusable render primitives
//!
//! Primitives are never destroyed: they are spawned in batches the first time
//! the pool runs dry and then cycle between the pool and the shape registry.

use crate::foundation::collections::PrimitiveHandle;
use crate::render::backend::{PrimitiveBackend, PrimitiveKind, PrimitiveTemplate};

/// Number of primitives spawned whenever a pool is empty
pub const POOL_BATCH_SIZE: usize = 5;

/// Counters describing a pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Inactive primitives waiting in the pool
    pub available: usize,
    /// Primitives spawned since creation
    pub spawned: usize,
}

impl PoolStats {
    /// Primitives currently lent out
    pub const fn in_use(&self) -> usize {
        self.spawned.saturating_sub(self.available)
    }
}

/// Pool of inactive primitives sharing one template
#[derive(Debug)]
pub struct PrimitivePool {
    template: PrimitiveTemplate,
    free: Vec<PrimitiveHandle>,
    spawned: usize,
}

impl PrimitivePool {
    /// Create an empty pool; nothing is spawned until the first acquire
    pub fn new(template: PrimitiveTemplate) -> Self {
        Self {
            template,
            free: Vec::new(),
            spawned: 0,
        }
    }

    /// Shape class of pooled primitives
    pub fn kind(&self) -> PrimitiveKind {
        self.template.kind
    }

    /// Take the most recently returned primitive, spawning a batch if empty
    ///
    /// The returned primitive is still inactive; the caller activates it once
    /// its geometry is set.
    pub fn acquire<B: PrimitiveBackend + ?Sized>(&mut self, backend: &mut B) -> PrimitiveHandle {
        if let Some(handle) = self.free.pop() {
            return handle;
        }
        self.spawn(backend, POOL_BATCH_SIZE);
        self.acquire(backend)
    }

    /// Deactivate a primitive and put it back
    ///
    /// A handle already waiting in the pool is ignored, so it can never be
    /// lent out twice.
    pub fn release<B: PrimitiveBackend + ?Sized>(&mut self, backend: &mut B, handle: PrimitiveHandle) {
        if self.free.contains(&handle) {
            log::warn!("Primitive {:?} is already in the {} pool", handle, self.template.kind);
            return;
        }
        backend.set_active(handle, false);
        self.free.push(handle);
    }

    /// Inactive primitives waiting in the pool
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Primitives spawned since creation
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// Current counters
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            available: self.free.len(),
            spawned: self.spawned,
        }
    }

    /// Whether `handle` is waiting in this pool
    pub fn contains(&self, handle: PrimitiveHandle) -> bool {
        self.free.contains(&handle)
    }

    /// Spawn `count` inactive primitives into the free list
    fn spawn<B: PrimitiveBackend + ?Sized>(&mut self, backend: &mut B, count: usize) {
        self.free.reserve(count);
        for _ in 0..count {
            let handle = backend.instantiate(&self.template);
            backend.set_active(handle, false);
            self.free.push(handle);
        }
        self.spawned += count;

        log::debug!(
            "Grew {} pool '{}' by {} (spawned {})",
            self.template.kind,
            self.template.name,
            count,
            self.spawned
        );
    }
}
