//=========================================================================
// Engine Handles
//=========================================================================
//
// Owned bundle of every subsystem instance, replacing process-wide
// globals. Code that needs a subsystem receives the bundle (or one of its
// fields) explicitly.
//
// Lifecycle:
// ```text
//   Uninitialized ──initialize()──► Initialized ──shutdown()──► Finalized
//                                        │
//                                        └── drop without shutdown:
//                                            finalized by Drop (warned)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::animation::AnimationManager;
use crate::core::application::Application;
use crate::core::assets::AssetLoader;
use crate::core::config::BuildMode;
use crate::core::debug::DebugManager;
use crate::core::error::BootstrapError;
use crate::core::input::InputManager;
use crate::core::memory::MemoryManager;
use crate::core::module::{RuntimeModule, SubsystemKind};
use crate::core::scene::SceneManager;

//=== LifecycleState ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Initialized,
    Finalized,
}

//=== EngineHandles =======================================================

/// Every subsystem instance created by the bootstrap.
///
/// The debug manager is `None` in release builds.
pub struct EngineHandles {
    pub application: Box<dyn Application>,
    pub memory_manager: Box<dyn MemoryManager>,
    pub asset_loader: AssetLoader,
    pub scene_manager: SceneManager,
    pub input_manager: InputManager,
    pub animation_manager: AnimationManager,
    pub debug_manager: Option<DebugManager>,
    build_mode: BuildMode,
    state: LifecycleState,
}

impl EngineHandles {
    /// Bundles constructed subsystems. Nothing is initialized yet.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        application: Box<dyn Application>,
        memory_manager: Box<dyn MemoryManager>,
        asset_loader: AssetLoader,
        scene_manager: SceneManager,
        input_manager: InputManager,
        animation_manager: AnimationManager,
        debug_manager: Option<DebugManager>,
        build_mode: BuildMode,
    ) -> Self {
        Self {
            application,
            memory_manager,
            asset_loader,
            scene_manager,
            input_manager,
            animation_manager,
            debug_manager,
            build_mode,
            state: LifecycleState::Uninitialized,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    /// Subsystem kinds present in this bundle, in canonical order.
    pub fn kinds(&self) -> Vec<SubsystemKind> {
        SubsystemKind::ALL
            .into_iter()
            .filter(|kind| !kind.is_debug_only() || self.debug_manager.is_some())
            .collect()
    }

    /// Number of published subsystem handles.
    pub fn handle_count(&self) -> usize {
        self.kinds().len()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Modules in canonical order.
    fn modules_mut(&mut self) -> Vec<&mut dyn RuntimeModule> {
        let mut modules: Vec<&mut dyn RuntimeModule> = vec![
            self.application.as_module_mut(),
            self.memory_manager.as_module_mut(),
            &mut self.asset_loader,
            &mut self.scene_manager,
            &mut self.input_manager,
            &mut self.animation_manager,
        ];
        if let Some(debug_manager) = self.debug_manager.as_mut() {
            modules.push(debug_manager);
        }
        modules
    }

    /// Initializes modules in canonical order.
    ///
    /// On failure, modules already initialized are finalized in reverse
    /// order and the bundle returns to `Uninitialized`.
    pub(crate) fn initialize(&mut self) -> Result<(), BootstrapError> {
        if self.state != LifecycleState::Uninitialized {
            warn!(target: "bootstrap", "Ignoring initialize in state {:?}", self.state);
            return Ok(());
        }

        let mut modules = self.modules_mut();

        for index in 0..modules.len() {
            let kind = modules[index].kind();
            debug!(target: "bootstrap", "Initializing {}", kind);

            if let Err(source) = modules[index].initialize() {
                error!(target: "bootstrap", "Failed to initialize {}: {}", kind, source);

                for module in modules[..index].iter_mut().rev() {
                    debug!(target: "bootstrap", "Rolling back {}", module.kind());
                    module.finalize();
                }
                return Err(BootstrapError::Initialization { kind, source });
            }
        }

        self.state = LifecycleState::Initialized;
        info!(target: "bootstrap", "{} subsystems initialized", self.handle_count());
        Ok(())
    }

    /// Ticks every module in canonical order.
    pub fn tick(&mut self, dt: Duration) {
        if self.state != LifecycleState::Initialized {
            warn!(target: "bootstrap", "Ignoring tick in state {:?}", self.state);
            return;
        }

        for module in self.modules_mut() {
            module.tick(dt);
        }
    }

    /// Finalizes every module in reverse canonical order.
    pub fn shutdown(mut self) {
        self.finalize_all();
    }

    fn finalize_all(&mut self) {
        if self.state != LifecycleState::Initialized {
            return;
        }

        for module in self.modules_mut().into_iter().rev() {
            debug!(target: "bootstrap", "Finalizing {}", module.kind());
            module.finalize();
        }

        self.state = LifecycleState::Finalized;
        info!(target: "bootstrap", "Engine subsystems finalized");
    }
}

impl Drop for EngineHandles {
    fn drop(&mut self) {
        if self.state == LifecycleState::Initialized {
            warn!(target: "bootstrap", "EngineHandles dropped without shutdown; finalizing");
            self.finalize_all();
        }
    }
}
