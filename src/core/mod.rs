//=========================================================================
// Core Systems
//
// Everything the engine owns, independent of the OS event loop.
//
// Layout:
// - `bootstrap`: composition root (factory, handle bundle, lifecycle)
// - `module`: lifecycle contract shared by every subsystem
// - subsystems: `application`, `memory`, `assets`, `scene`, `input`,
//   `animation`, `debug`
// - `platform_bridge`: channel contract between platform and engine
// - `config`, `error`: ambient configuration and error types
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod application;
pub mod assets;
pub mod bootstrap;
pub mod config;
pub mod debug;
pub mod error;
pub mod input;
pub mod memory;
pub mod module;
pub mod platform_bridge;
pub mod scene;

//=== Re-exports ==========================================================

pub use bootstrap::{
    bootstrap, initialize_engine, DefaultSubsystemFactory, EngineHandles, LifecycleState,
    SubsystemFactory,
};
pub use config::{BuildMode, EngineConfig, GfxConfiguration};
pub use error::{BootstrapError, ConfigError, ModuleError};
pub use module::{RuntimeModule, SubsystemKind};
