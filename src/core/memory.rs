//=========================================================================
// Memory Manager
//=========================================================================
//
// Capability interface for engine allocations and a tracking
// implementation backed by the global allocator.
//
// Allocation is fallible: reservation uses `try_reserve_exact`, so an
// exhausted allocator surfaces as `ModuleError::OutOfMemory` instead of
// aborting the process.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::ModuleError;
use crate::core::module::{RuntimeModule, SubsystemKind};

//=== MemoryBlock =========================================================

/// Zero-initialized byte block owned by the caller until freed.
///
/// Carries its manager's owner token so it can only be freed there.
#[derive(Debug)]
pub struct MemoryBlock {
    data: Box<[u8]>,
    owner: Arc<()>,
}

impl MemoryBlock {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

//=== MemoryStats =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Bytes currently handed out.
    pub live_bytes: usize,
    /// Blocks currently handed out.
    pub live_blocks: usize,
    /// Highest `live_bytes` observed.
    pub peak_bytes: usize,
    /// Successful allocations since initialization.
    pub total_allocations: u64,
}

//=== MemoryManager Trait =================================================

/// Memory management capability published by the bootstrap.
pub trait MemoryManager: RuntimeModule {
    /// Allocates a zeroed block of `size` bytes.
    fn allocate(&mut self, size: usize) -> Result<MemoryBlock, ModuleError>;

    /// Returns a block to the manager that allocated it.
    ///
    /// Blocks from another manager are rejected with
    /// `ModuleError::ForeignBlock` and leave the stats untouched.
    fn free(&mut self, block: MemoryBlock) -> Result<(), ModuleError>;

    fn stats(&self) -> MemoryStats;

    /// Upcast to the lifecycle interface.
    fn as_module_mut(&mut self) -> &mut dyn RuntimeModule;
}

//=== TrackingMemoryManager ===============================================

/// Memory manager that tracks live allocations against an optional budget.
pub struct TrackingMemoryManager {
    budget: Option<usize>,
    stats: MemoryStats,
    owner: Arc<()>,
}

impl TrackingMemoryManager {
    /// Creates an unbounded manager.
    pub fn new() -> Self {
        Self {
            budget: None,
            stats: MemoryStats::default(),
            owner: Arc::new(()),
        }
    }

    /// Creates a manager that refuses to exceed `budget` live bytes.
    pub fn with_budget(budget: usize) -> Self {
        Self {
            budget: Some(budget),
            stats: MemoryStats::default(),
            owner: Arc::new(()),
        }
    }

    pub fn budget(&self) -> Option<usize> {
        self.budget
    }
}

impl Default for TrackingMemoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeModule for TrackingMemoryManager {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::MemoryManager
    }

    fn initialize(&mut self) -> Result<(), ModuleError> {
        self.stats = MemoryStats::default();
        match self.budget {
            Some(budget) => debug!(target: "bootstrap", "Memory manager initialized ({} byte budget)", budget),
            None => debug!(target: "bootstrap", "Memory manager initialized (unbounded)"),
        }
        Ok(())
    }

    fn finalize(&mut self) {
        if self.stats.live_blocks > 0 {
            warn!(
                target: "bootstrap",
                "Memory manager finalized with {} live blocks ({} bytes)",
                self.stats.live_blocks,
                self.stats.live_bytes
            );
        }
        debug!(
            target: "bootstrap",
            "Memory manager finalized (peak {} bytes, {} allocations)",
            self.stats.peak_bytes,
            self.stats.total_allocations
        );
    }
}

impl MemoryManager for TrackingMemoryManager {
    fn allocate(&mut self, size: usize) -> Result<MemoryBlock, ModuleError> {
        if let Some(budget) = self.budget {
            let available = budget.saturating_sub(self.stats.live_bytes);
            if size > available {
                return Err(ModuleError::BudgetExceeded {
                    requested: size,
                    available,
                    budget,
                });
            }
        }

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| ModuleError::OutOfMemory { requested: size })?;
        data.resize(size, 0u8);

        self.stats.live_bytes += size;
        self.stats.live_blocks += 1;
        self.stats.total_allocations += 1;
        self.stats.peak_bytes = self.stats.peak_bytes.max(self.stats.live_bytes);

        trace!(target: "bootstrap", "Allocated {} bytes ({} live)", size, self.stats.live_bytes);

        Ok(MemoryBlock {
            data: data.into_boxed_slice(),
            owner: Arc::clone(&self.owner),
        })
    }

    fn free(&mut self, block: MemoryBlock) -> Result<(), ModuleError> {
        let size = block.len();
        if !Arc::ptr_eq(&block.owner, &self.owner) {
            warn!(target: "bootstrap", "Rejected foreign block of {} bytes", size);
            return Err(ModuleError::ForeignBlock { size });
        }

        match (
            self.stats.live_bytes.checked_sub(size),
            self.stats.live_blocks.checked_sub(1),
        ) {
            (Some(bytes), Some(blocks)) => {
                self.stats.live_bytes = bytes;
                self.stats.live_blocks = blocks;
            }
            _ => {
                warn!(
                    target: "bootstrap",
                    "Freed block of {} bytes exceeds tracked live memory; resetting counters",
                    size
                );
                self.stats.live_bytes = 0;
                self.stats.live_blocks = 0;
            }
        }

        trace!(target: "bootstrap", "Freed {} bytes ({} live)", size, self.stats.live_bytes);
        Ok(())
    }

    fn stats(&self) -> MemoryStats {
        self.stats
    }

    fn as_module_mut(&mut self) -> &mut dyn RuntimeModule {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
