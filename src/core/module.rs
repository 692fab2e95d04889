//=========================================================================
// Runtime Module Lifecycle
//=========================================================================
//
// Shared lifecycle contract for every engine subsystem.
//
// Lifecycle:
//   construct (factory) → initialize() → tick()* → finalize()
//
// The bootstrap drives modules in canonical order (`SubsystemKind::ALL`)
// for initialize/tick and in reverse order for finalize.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::error::ModuleError;

//=== SubsystemKind =======================================================

/// Identifies one of the engine subsystems owned by the bootstrap.
///
/// The declaration order is the canonical bootstrap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubsystemKind {
    Application,
    MemoryManager,
    AssetLoader,
    SceneManager,
    InputManager,
    AnimationManager,
    DebugManager,
}

impl SubsystemKind {
    /// All subsystem kinds in canonical bootstrap order.
    pub const ALL: [SubsystemKind; 7] = [
        SubsystemKind::Application,
        SubsystemKind::MemoryManager,
        SubsystemKind::AssetLoader,
        SubsystemKind::SceneManager,
        SubsystemKind::InputManager,
        SubsystemKind::AnimationManager,
        SubsystemKind::DebugManager,
    ];

    /// Human-readable subsystem name, used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::MemoryManager => "memory manager",
            Self::AssetLoader => "asset loader",
            Self::SceneManager => "scene manager",
            Self::InputManager => "input manager",
            Self::AnimationManager => "animation manager",
            Self::DebugManager => "debug manager",
        }
    }

    /// Whether this subsystem only exists in debug builds.
    pub fn is_debug_only(self) -> bool {
        matches!(self, Self::DebugManager)
    }
}

impl fmt::Display for SubsystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== RuntimeModule =======================================================

/// Lifecycle hooks shared by every engine subsystem.
///
/// `initialize` is the only fallible step. Failures are reported to the
/// bootstrap, which names the subsystem in the resulting error.
pub trait RuntimeModule: Send {
    /// Which subsystem slot this module fills.
    fn kind(&self) -> SubsystemKind;

    /// Prepares the module for ticking.
    fn initialize(&mut self) -> Result<(), ModuleError>;

    /// Advances the module by one engine tick.
    fn tick(&mut self, _dt: Duration) {}

    /// Releases module resources. Called once, in reverse bootstrap order.
    fn finalize(&mut self);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_starts_with_application() {
        assert_eq!(SubsystemKind::ALL[0], SubsystemKind::Application);
        assert_eq!(SubsystemKind::ALL[6], SubsystemKind::DebugManager);
    }

    #[test]
    fn canonical_order_is_sorted() {
        let mut sorted = SubsystemKind::ALL;
        sorted.sort();
        assert_eq!(sorted, SubsystemKind::ALL);
    }

    #[test]
    fn only_debug_manager_is_debug_only() {
        let debug_only: Vec<_> = SubsystemKind::ALL
            .iter()
            .filter(|k| k.is_debug_only())
            .collect();
        assert_eq!(debug_only, vec![&SubsystemKind::DebugManager]);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(SubsystemKind::AssetLoader.to_string(), "asset loader");
    }
}
