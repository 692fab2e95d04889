//=========================================================================
// Subsystem Factory
//=========================================================================
//
// Fallible construction of every subsystem, one method per kind.
//
// The application and memory manager are returned behind their capability
// traits; the factory decides the concrete type. Every method has a
// default so alternative factories override only what they change.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== Internal Dependencies ===============================================

use crate::core::animation::AnimationManager;
use crate::core::application::{
    Application, ApplicationKind, HeadlessApplication, WindowedApplication,
};
use crate::core::assets::AssetLoader;
use crate::core::config::{EngineConfig, GfxConfiguration};
use crate::core::debug::DebugManager;
use crate::core::error::ModuleError;
use crate::core::input::InputManager;
use crate::core::memory::{MemoryManager, TrackingMemoryManager};
use crate::core::scene::SceneManager;

//=== SubsystemFactory ====================================================

/// Constructs engine subsystems for the bootstrap.
pub trait SubsystemFactory {
    fn create_application(
        &self,
        config: &GfxConfiguration,
    ) -> Result<Box<dyn Application>, ModuleError> {
        Ok(Box::new(HeadlessApplication::new(config.clone())))
    }

    fn create_memory_manager(&self) -> Result<Box<dyn MemoryManager>, ModuleError> {
        Ok(Box::new(TrackingMemoryManager::new()))
    }

    fn create_asset_loader(&self) -> Result<AssetLoader, ModuleError> {
        Ok(AssetLoader::new())
    }

    fn create_scene_manager(&self) -> Result<SceneManager, ModuleError> {
        Ok(SceneManager::new())
    }

    fn create_input_manager(&self) -> Result<InputManager, ModuleError> {
        Ok(InputManager::new())
    }

    fn create_animation_manager(&self) -> Result<AnimationManager, ModuleError> {
        Ok(AnimationManager::new())
    }

    fn create_debug_manager(&self) -> Result<DebugManager, ModuleError> {
        Ok(DebugManager::new())
    }
}

//=== DefaultSubsystemFactory =============================================

/// Factory selecting the application shell at runtime.
#[derive(Debug, Clone, Default)]
pub struct DefaultSubsystemFactory {
    application: ApplicationKind,
    memory_budget: Option<usize>,
    search_paths: Vec<PathBuf>,
}

impl DefaultSubsystemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory configured from the `[memory]` and `[assets]` sections.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            application: ApplicationKind::default(),
            memory_budget: config.memory.budget_bytes,
            search_paths: config.assets.search_paths.clone(),
        }
    }

    pub fn with_application(mut self, kind: ApplicationKind) -> Self {
        self.application = kind;
        self
    }

    pub fn with_memory_budget(mut self, budget: usize) -> Self {
        self.memory_budget = Some(budget);
        self
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    pub fn application_kind(&self) -> ApplicationKind {
        self.application
    }
}

impl SubsystemFactory for DefaultSubsystemFactory {
    fn create_application(
        &self,
        config: &GfxConfiguration,
    ) -> Result<Box<dyn Application>, ModuleError> {
        Ok(match self.application {
            ApplicationKind::Windowed => Box::new(WindowedApplication::new(config.clone())),
            ApplicationKind::Headless => Box::new(HeadlessApplication::new(config.clone())),
        })
    }

    fn create_memory_manager(&self) -> Result<Box<dyn MemoryManager>, ModuleError> {
        Ok(match self.memory_budget {
            Some(budget) => Box::new(TrackingMemoryManager::with_budget(budget)),
            None => Box::new(TrackingMemoryManager::new()),
        })
    }

    fn create_asset_loader(&self) -> Result<AssetLoader, ModuleError> {
        Ok(AssetLoader::with_search_paths(self.search_paths.iter().cloned()))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::module::SubsystemKind;

    struct Defaults;
    impl SubsystemFactory for Defaults {}

    #[test]
    fn trait_defaults_build_every_subsystem() {
        let factory = Defaults;
        let config = GfxConfiguration::default();

        assert_eq!(
            factory.create_application(&config).unwrap().configuration(),
            &config
        );
        assert!(factory.create_memory_manager().is_ok());
        assert!(factory.create_asset_loader().is_ok());
        assert!(factory.create_scene_manager().is_ok());
        assert!(factory.create_input_manager().is_ok());
        assert!(factory.create_animation_manager().is_ok());
        assert!(factory.create_debug_manager().is_ok());
    }

    #[test]
    fn from_config_carries_budget_and_search_paths() {
        let config = EngineConfig::from_toml_str(
            "[assets]\nsearch_paths = [\"assets\"]\n[memory]\nbudget_bytes = 256",
        )
        .unwrap();

        let factory = DefaultSubsystemFactory::from_config(&config);
        let mut mm = factory.create_memory_manager().unwrap();
        assert!(mm.allocate(256).is_ok());
        assert!(mm.allocate(1).is_err());

        let loader = factory.create_asset_loader().unwrap();
        assert_eq!(loader.search_paths(), &[PathBuf::from("assets")]);
    }

    #[test]
    fn application_kind_is_selectable() {
        let factory = DefaultSubsystemFactory::new().with_application(ApplicationKind::Headless);
        assert_eq!(factory.application_kind(), ApplicationKind::Headless);

        let mut app = factory
            .create_application(&GfxConfiguration::default())
            .unwrap();
        assert_eq!(app.as_module_mut().kind(), SubsystemKind::Application);
    }

    #[test]
    fn builder_methods_accumulate() {
        let factory = DefaultSubsystemFactory::new()
            .with_memory_budget(64)
            .with_search_path("a")
            .with_search_path("b");
        let loader = factory.create_asset_loader().unwrap();
        assert_eq!(loader.search_paths().len(), 2);
    }
}
