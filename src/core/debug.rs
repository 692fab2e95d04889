//=========================================================================
// Debug Manager
//=========================================================================
//
// Debug-build-only subsystem: overlay visibility and frame timing.
// Only constructed when `BuildMode::includes_debug_manager()` holds.
//
// Frame times are wall-clock samples fed by the engine loop, not the
// fixed tick `dt`.
//
//=========================================================================

use std::time::Duration;

use log::{debug, info};

use crate::core::error::ModuleError;
use crate::core::module::{RuntimeModule, SubsystemKind};

pub struct DebugManager {
    overlay_visible: bool,
    frames: u64,
    frame_samples: u32,
    total_frame_time: Duration,
}

impl DebugManager {
    pub fn new() -> Self {
        Self {
            overlay_visible: false,
            frames: 0,
            frame_samples: 0,
            total_frame_time: Duration::ZERO,
        }
    }

    /// Flips overlay visibility and returns the new state.
    pub fn toggle_overlay(&mut self) -> bool {
        self.overlay_visible = !self.overlay_visible;
        debug!("Debug overlay {}", if self.overlay_visible { "shown" } else { "hidden" });
        self.overlay_visible
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Records the measured wall-clock time of one frame.
    pub fn record_frame_time(&mut self, elapsed: Duration) {
        self.frame_samples = self.frame_samples.saturating_add(1);
        self.total_frame_time = self.total_frame_time.saturating_add(elapsed);
    }

    /// Mean of the recorded frame times, `None` before the first sample.
    pub fn average_frame_time(&self) -> Option<Duration> {
        if self.frame_samples == 0 {
            return None;
        }
        Some(self.total_frame_time / self.frame_samples)
    }
}

impl Default for DebugManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeModule for DebugManager {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::DebugManager
    }

    fn initialize(&mut self) -> Result<(), ModuleError> {
        self.frames = 0;
        self.frame_samples = 0;
        self.total_frame_time = Duration::ZERO;
        debug!(target: "bootstrap", "Debug manager initialized");
        Ok(())
    }

    fn tick(&mut self, _dt: Duration) {
        self.frames += 1;
    }

    fn finalize(&mut self) {
        if let Some(avg) = self.average_frame_time() {
            info!(
                target: "bootstrap",
                "Debug manager: {} frames, average frame time {:?}",
                self.frames,
                avg
            );
        }
        self.overlay_visible = false;
    }
}
