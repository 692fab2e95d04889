//=========================================================================
// Animation Manager
//=========================================================================
//
// Keeps named animation clips and advances the playing ones each tick.
//
// Clip playback:
//   play()  → playing, time reset to 0
//   tick()  → time += dt; looping clips wrap, others stop at the end
//   stop()  → stopped, time kept
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::time::Duration;

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::error::ModuleError;
use crate::core::module::{RuntimeModule, SubsystemKind};

//=== AnimationClip =======================================================

/// Timing description of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClip {
    pub duration: Duration,
    pub looping: bool,
}

impl AnimationClip {
    pub fn once(duration: Duration) -> Self {
        Self {
            duration,
            looping: false,
        }
    }

    pub fn looping(duration: Duration) -> Self {
        Self {
            duration,
            looping: true,
        }
    }
}

//--- Playback ------------------------------------------------------------

#[derive(Debug)]
struct Playback {
    clip: AnimationClip,
    elapsed: Duration,
    playing: bool,
}

//=== AnimationManager ====================================================

pub struct AnimationManager {
    clips: HashMap<String, Playback>,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self {
            clips: HashMap::new(),
        }
    }

    /// Registers a clip, replacing any clip with the same name.
    pub fn add_clip(&mut self, name: impl Into<String>, clip: AnimationClip) {
        let name = name.into();
        let playback = Playback {
            clip,
            elapsed: Duration::ZERO,
            playing: false,
        };
        if self.clips.insert(name.clone(), playback).is_some() {
            warn!("Animation clip '{}' was already registered and has been replaced", name);
        }
    }

    pub fn remove_clip(&mut self, name: &str) -> bool {
        self.clips.remove(name).is_some()
    }

    /// Starts (or restarts) a clip. Returns `false` for unknown clips.
    pub fn play(&mut self, name: &str) -> bool {
        match self.clips.get_mut(name) {
            Some(playback) => {
                playback.elapsed = Duration::ZERO;
                playback.playing = true;
                true
            }
            None => {
                warn!("Attempted to play unregistered animation clip '{}'", name);
                false
            }
        }
    }

    pub fn stop(&mut self, name: &str) -> bool {
        match self.clips.get_mut(name) {
            Some(playback) => {
                playback.playing = false;
                true
            }
            None => false,
        }
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.clips.get(name).is_some_and(|p| p.playing)
    }

    /// Normalized playback position in `[0, 1]`.
    pub fn progress(&self, name: &str) -> Option<f32> {
        let playback = self.clips.get(name)?;
        if playback.clip.duration.is_zero() {
            return Some(1.0);
        }
        let ratio = playback.elapsed.as_secs_f64() / playback.clip.duration.as_secs_f64();
        Some(ratio.clamp(0.0, 1.0) as f32)
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn playing_count(&self) -> usize {
        self.clips.values().filter(|p| p.playing).count()
    }
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeModule for AnimationManager {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::AnimationManager
    }

    fn initialize(&mut self) -> Result<(), ModuleError> {
        debug!(target: "bootstrap", "Animation manager initialized ({} clips)", self.clips.len());
        Ok(())
    }

    fn tick(&mut self, dt: Duration) {
        for (name, playback) in self.clips.iter_mut().filter(|(_, p)| p.playing) {
            let duration = playback.clip.duration;
            playback.elapsed = playback.elapsed.saturating_add(dt);

            if playback.elapsed < duration {
                continue;
            }

            if playback.clip.looping && !duration.is_zero() {
                playback.elapsed = wrap(playback.elapsed, duration);
            } else {
                playback.elapsed = duration;
                playback.playing = false;
                trace!("Animation clip '{}' finished", name);
            }
        }
    }

    fn finalize(&mut self) {
        for playback in self.clips.values_mut() {
            playback.playing = false;
        }
    }
}

/// `elapsed % duration` for a non-zero `duration`, without truncation.
fn wrap(elapsed: Duration, duration: Duration) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;

    let wrapped = elapsed.as_nanos() % duration.as_nanos();
    // wrapped < duration, so the seconds fit in a u64.
    let secs = u64::try_from(wrapped / NANOS_PER_SEC).unwrap_or(u64::MAX);
    let nanos = (wrapped % NANOS_PER_SEC) as u32;
    Duration::new(secs, nanos)
}

//=========================================================================
// Unit Tests
//=========================================================================
