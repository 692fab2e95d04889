//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_bootstrap::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder};

// Bootstrap
pub use crate::core::bootstrap::{
    bootstrap, initialize_engine, DefaultSubsystemFactory, EngineHandles, SubsystemFactory,
};
pub use crate::core::config::{BuildMode, EngineConfig, GfxConfiguration};
pub use crate::core::error::{BootstrapError, ModuleError};
pub use crate::core::module::{RuntimeModule, SubsystemKind};

// Subsystem capabilities
pub use crate::core::application::{Application, ApplicationKind};
pub use crate::core::memory::MemoryManager;

// Input system
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

// Scene system
pub use crate::core::scene::{Scene, SceneTransition, TransitionQueue};

// Platform bridge
pub use crate::core::platform_bridge::{PlatformEvent, TickControl};
