//=========================================================================
// Process Bootstrap
//=========================================================================
//
// Composition root: constructs one instance of every subsystem, runs
// their initialization, and hands the result back as `EngineHandles`.
//
// Sequence:
// ```text
//   factory.create_*()  (canonical order, debug manager only in Debug)
//        │  error → BootstrapError::Construction { kind }
//        ▼
//   EngineHandles::initialize()
//        │  error → roll back, BootstrapError::Initialization { kind }
//        ▼
//   Ok(EngineHandles)  ── state: Initialized
// ```
//
// There are no globals: a handle cannot be observed before bootstrap
// returns, and two bootstraps never share an instance.
//
//=========================================================================

//=== Module Declarations =================================================

mod factory;
mod handles;

//=== Public API ==========================================================

pub use factory::{DefaultSubsystemFactory, SubsystemFactory};
pub use handles::{EngineHandles, LifecycleState};

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::config::{BuildMode, EngineConfig, GfxConfiguration};
use crate::core::error::{BootstrapError, ModuleError};
use crate::core::module::SubsystemKind;

//--- construct() ---------------------------------------------------------
//
// Tags a construction failure with the subsystem it came from.
//
fn construct<T>(
    kind: SubsystemKind,
    result: Result<T, ModuleError>,
) -> Result<T, BootstrapError> {
    result.map_err(|source| {
        error!(target: "bootstrap", "Failed to construct {}: {}", kind, source);
        BootstrapError::Construction { kind, source }
    })
}

/// Constructs and initializes every subsystem.
///
/// The debug manager is only constructed when `build_mode` includes it.
pub fn bootstrap(
    factory: &dyn SubsystemFactory,
    graphics: &GfxConfiguration,
    build_mode: BuildMode,
) -> Result<EngineHandles, BootstrapError> {
    info!(
        target: "bootstrap",
        "Bootstrapping '{}' ({:?} build)",
        graphics.app_name,
        build_mode
    );

    let application = construct(
        SubsystemKind::Application,
        factory.create_application(graphics),
    )?;
    let memory_manager = construct(
        SubsystemKind::MemoryManager,
        factory.create_memory_manager(),
    )?;
    let asset_loader = construct(SubsystemKind::AssetLoader, factory.create_asset_loader())?;
    let scene_manager = construct(SubsystemKind::SceneManager, factory.create_scene_manager())?;
    let input_manager = construct(SubsystemKind::InputManager, factory.create_input_manager())?;
    let animation_manager = construct(
        SubsystemKind::AnimationManager,
        factory.create_animation_manager(),
    )?;
    let debug_manager = if build_mode.includes_debug_manager() {
        Some(construct(
            SubsystemKind::DebugManager,
            factory.create_debug_manager(),
        )?)
    } else {
        None
    };

    let mut handles = EngineHandles::new(
        application,
        memory_manager,
        asset_loader,
        scene_manager,
        input_manager,
        animation_manager,
        debug_manager,
        build_mode,
    );

    handles.initialize()?;
    Ok(handles)
}

/// Validates `config` and bootstraps with the [`DefaultSubsystemFactory`].
pub fn initialize_engine(
    config: &EngineConfig,
    build_mode: BuildMode,
) -> Result<EngineHandles, BootstrapError> {
    config.validate()?;
    let factory = DefaultSubsystemFactory::from_config(config);
    bootstrap(&factory, &config.graphics, build_mode)
}

//=========================================================================
// Unit Tests
//=========================================================================
