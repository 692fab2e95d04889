//=========================================================================
// Application Shell
//=========================================================================
//
// Capability interface for the application lifecycle plus two shells:
//
//   HeadlessApplication - configuration + quit flag, no window
//   WindowedApplication - headless shell + winit window description
//
// Window creation itself is owned by the embedder's event loop; the
// windowed shell only describes the window it expects.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use log::{debug, info};
use winit::window::WindowAttributes;

//=== Internal Dependencies ===============================================

use crate::core::config::GfxConfiguration;
use crate::core::error::ModuleError;
use crate::core::module::{RuntimeModule, SubsystemKind};
use crate::platform;

//=== Application Trait ===================================================

/// Application lifecycle capability.
///
/// Published by the bootstrap as `Box<dyn Application>`; callers never
/// depend on the concrete shell.
pub trait Application: RuntimeModule {
    /// Graphics configuration the application was created with.
    fn configuration(&self) -> &GfxConfiguration;

    /// Whether the application asked the engine to stop.
    fn is_quit(&self) -> bool;

    /// Asks the engine to stop after the current tick.
    fn request_quit(&mut self);

    /// Number of ticks processed since initialization.
    fn frame_count(&self) -> u64;

    /// Upcast to the lifecycle interface.
    fn as_module_mut(&mut self) -> &mut dyn RuntimeModule;
}

//=== ApplicationKind =====================================================

/// Which application shell the factory builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApplicationKind {
    /// Shell that describes a native window.
    #[default]
    Windowed,
    /// Shell without any window; for tools, servers and tests.
    Headless,
}

//=== HeadlessApplication =================================================

pub struct HeadlessApplication {
    config: GfxConfiguration,
    quit: bool,
    frames: u64,
}

impl HeadlessApplication {
    pub fn new(config: GfxConfiguration) -> Self {
        Self {
            config,
            quit: false,
            frames: 0,
        }
    }
}

impl RuntimeModule for HeadlessApplication {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Application
    }

    fn initialize(&mut self) -> Result<(), ModuleError> {
        self.config
            .validate()
            .map_err(|e| ModuleError::InvalidConfiguration(e.to_string()))?;

        self.quit = false;
        self.frames = 0;

        info!(
            target: "bootstrap",
            "Application '{}' initialized ({}x{}, {} color bits, {} depth, msaa {})",
            self.config.app_name,
            self.config.screen_width,
            self.config.screen_height,
            self.config.color_bits(),
            self.config.depth_bits,
            self.config.msaa_samples
        );
        Ok(())
    }

    fn tick(&mut self, _dt: Duration) {
        self.frames += 1;
    }

    fn finalize(&mut self) {
        debug!(target: "bootstrap", "Application finalized after {} frames", self.frames);
    }
}

impl Application for HeadlessApplication {
    fn configuration(&self) -> &GfxConfiguration {
        &self.config
    }

    fn is_quit(&self) -> bool {
        self.quit
    }

    fn request_quit(&mut self) {
        if !self.quit {
            info!(target: "bootstrap", "Application quit requested");
        }
        self.quit = true;
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }

    fn as_module_mut(&mut self) -> &mut dyn RuntimeModule {
        self
    }
}

//=== WindowedApplication =================================================

/// Application shell that knows which native window it needs.
///
/// Lifecycle is delegated to an inner [`HeadlessApplication`].
pub struct WindowedApplication {
    inner: HeadlessApplication,
}

impl WindowedApplication {
    pub fn new(config: GfxConfiguration) -> Self {
        Self {
            inner: HeadlessApplication::new(config),
        }
    }

    /// winit attributes for the window described by the configuration.
    pub fn window_attributes(&self) -> WindowAttributes {
        platform::window_attributes(&self.inner.config)
    }
}

impl RuntimeModule for WindowedApplication {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::Application
    }

    fn initialize(&mut self) -> Result<(), ModuleError> {
        self.inner.initialize()?;
        debug!(
            target: "platform",
            "Window requested: '{}' {}x{}",
            self.inner.config.app_name,
            self.inner.config.screen_width,
            self.inner.config.screen_height
        );
        Ok(())
    }

    fn tick(&mut self, dt: Duration) {
        self.inner.tick(dt);
    }

    fn finalize(&mut self) {
        self.inner.finalize();
    }
}

impl Application for WindowedApplication {
    fn configuration(&self) -> &GfxConfiguration {
        self.inner.configuration()
    }

    fn is_quit(&self) -> bool {
        self.inner.is_quit()
    }

    fn request_quit(&mut self) {
        self.inner.request_quit();
    }

    fn frame_count(&self) -> u64 {
        self.inner.frame_count()
    }

    fn as_module_mut(&mut self) -> &mut dyn RuntimeModule {
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_initializes_with_valid_config() {
        let mut app = HeadlessApplication::new(GfxConfiguration::default());
        assert!(app.initialize().is_ok());
        assert!(!app.is_quit());
        assert_eq!(app.kind(), SubsystemKind::Application);
    }

    #[test]
    fn headless_rejects_invalid_config() {
        let config = GfxConfiguration::default().with_screen_size(0, 0);
        let mut app = HeadlessApplication::new(config);
        assert!(matches!(
            app.initialize(),
            Err(ModuleError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn tick_counts_frames() {
        let mut app = HeadlessApplication::new(GfxConfiguration::default());
        app.initialize().unwrap();
        app.tick(Duration::from_millis(16));
        app.tick(Duration::from_millis(16));
        assert_eq!(app.frame_count(), 2);
    }

    #[test]
    fn request_quit_is_sticky() {
        let mut app = HeadlessApplication::new(GfxConfiguration::default());
        app.request_quit();
        app.request_quit();
        assert!(app.is_quit());
    }

    #[test]
    fn windowed_exposes_configuration() {
        let config = GfxConfiguration::default().with_app_name("Sandbox");
        let app = WindowedApplication::new(config.clone());
        assert_eq!(app.configuration(), &config);
    }

    #[test]
    fn windowed_window_attributes_use_app_name() {
        let config = GfxConfiguration::default().with_app_name("Sandbox");
        let app = WindowedApplication::new(config);
        assert_eq!(app.window_attributes().title, "Sandbox");
    }

    #[test]
    fn windowed_delegates_lifecycle() {
        let mut app = WindowedApplication::new(GfxConfiguration::default());
        app.initialize().unwrap();
        app.tick(Duration::ZERO);
        app.request_quit();
        assert_eq!(app.frame_count(), 1);
        assert!(app.is_quit());
        app.finalize();
    }

    #[test]
    fn application_is_usable_as_trait_object() {
        let mut app: Box<dyn Application> =
            Box::new(HeadlessApplication::new(GfxConfiguration::default()));
        let module = app.as_module_mut();
        assert_eq!(module.kind(), SubsystemKind::Application);
    }
}
