//=========================================================================
// Aetheric Engine
//
// Main entry point: bootstraps the subsystems and drives them at a fixed
// tick rate until the application or the platform asks to quit.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()/spawn()──>  [Loop]
//         │                          │
//         ├─ with_tps()              ├─ event_sender() → platform side
//         ├─ with_graphics()         └─ init(|handles| ...)
//         └─ with_factory()
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::bootstrap::{bootstrap, DefaultSubsystemFactory, EngineHandles, SubsystemFactory};
use crate::core::config::{BuildMode, EngineConfig, GfxConfiguration};
use crate::core::error::BootstrapError;
use crate::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== EngineBuilder =======================================================

/// Builder for configuring and bootstrapping an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Build mode**: [`BuildMode::current`]
/// - **Factory**: [`DefaultSubsystemFactory`] built from the config
///
/// # Examples
///
/// ```no_run
/// use aetheric_bootstrap::EngineBuilder;
/// use aetheric_bootstrap::core::GfxConfiguration;
///
/// let engine = EngineBuilder::new()
///     .with_graphics(GfxConfiguration::default().with_app_name("Sandbox"))
///     .with_tps(120.0)
///     .build()
///     .expect("engine bootstrap failed");
///
/// engine.run();
/// ```
pub struct EngineBuilder {
    config: EngineConfig,
    build_mode: BuildMode,
    factory: Option<Box<dyn SubsystemFactory>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            build_mode: BuildMode::current(),
            factory: None,
        }
    }

    /// Replaces the whole configuration, e.g. one loaded from TOML.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_graphics(mut self, graphics: GfxConfiguration) -> Self {
        self.config.graphics = graphics;
        self
    }

    /// Sets the target ticks per second.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.config.runtime.tps = tps;
        self
    }

    /// Sets the platform → engine channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.runtime.channel_capacity = capacity;
        self
    }

    /// Overrides the compile-time build mode.
    pub fn with_build_mode(mut self, build_mode: BuildMode) -> Self {
        self.build_mode = build_mode;
        self
    }

    /// Uses a custom factory instead of the default one.
    pub fn with_factory(mut self, factory: impl SubsystemFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Validates the configuration and bootstraps every subsystem.
    pub fn build(self) -> Result<Engine, BootstrapError> {
        self.config.validate()?;

        let runtime = &self.config.runtime;
        let tick_duration = runtime.tick_duration()?;
        info!(
            target: "engine",
            "Building engine (TPS: {}, channel: {})",
            runtime.tps,
            runtime.channel_capacity
        );

        let handles = match &self.factory {
            Some(factory) => bootstrap(factory.as_ref(), &self.config.graphics, self.build_mode)?,
            None => {
                let factory = DefaultSubsystemFactory::from_config(&self.config);
                bootstrap(&factory, &self.config.graphics, self.build_mode)?
            }
        };

        let (sender, receiver) = bounded(runtime.channel_capacity);

        Ok(Engine {
            handles,
            collector: EventCollector::new(receiver),
            sender,
            tick_duration,
            ticks: 0,
            last_step: None,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Bootstrapped engine runtime.
///
/// # Tick
///
/// 1. Drain pending platform events (bounded)
/// 2. Feed input batches to the input manager
/// 3. Tick every subsystem in bootstrap order
/// 4. Stop if the platform requested quit or the application is quitting
///
/// Subsystems always receive the fixed tick duration as `dt`. The wall-clock
/// time between consecutive steps goes to the debug manager.
pub struct Engine {
    handles: EngineHandles,
    collector: EventCollector,
    sender: Sender<PlatformEvent>,
    tick_duration: Duration,
    ticks: u64,
    last_step: Option<Instant>,
}

impl Engine {
    //--- Accessors --------------------------------------------------------

    /// Sender for platform events; clone freely across threads.
    pub fn event_sender(&self) -> Sender<PlatformEvent> {
        self.sender.clone()
    }

    pub fn handles(&self) -> &EngineHandles {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut EngineHandles {
        &mut self.handles
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    //--- Initialization ---------------------------------------------------

    /// Configures subsystems before running (scenes, clips, search paths).
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut EngineHandles),
    {
        init_fn(&mut self.handles);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs a single tick without pacing.
    pub fn step(&mut self) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            self.handles.application.request_quit();
            return TickControl::Exit;
        }

        let now = Instant::now();
        if let Some(previous) = self.last_step.replace(now) {
            if let Some(debug_manager) = self.handles.debug_manager.as_mut() {
                debug_manager.record_frame_time(now.duration_since(previous));
            }
        }

        self.handles.input_manager.digest_frame(self.collector.batches());
        self.handles.tick(self.tick_duration);
        self.ticks += 1;

        if self.handles.application.is_quit() {
            TickControl::Exit
        } else {
            TickControl::Continue
        }
    }

    /// Runs at the configured tick rate until exit, then shuts down.
    ///
    /// Returns the number of ticks executed.
    pub fn run(mut self) -> u64 {
        info!(target: "engine", "Starting engine loop ({:?} per tick)", self.tick_duration);

        loop {
            let tick_start = Instant::now();

            if self.step() == TickControl::Exit {
                break;
            }

            let elapsed = tick_start.elapsed();
            if elapsed < self.tick_duration {
                thread::sleep(self.tick_duration - elapsed);
            }
        }

        let ticks = self.ticks;
        info!(target: "engine", "Engine loop exited after {} ticks", ticks);
        self.handles.shutdown();
        ticks
    }

    /// Runs the engine loop on a dedicated logic thread.
    ///
    /// Keep an [`Engine::event_sender`] before spawning to stop it with
    /// [`PlatformEvent::QuitRequested`].
    pub fn spawn(self) -> thread::JoinHandle<u64> {
        thread::spawn(move || self.run())
    }

    /// Joins a spawned engine, logging a panicked logic thread.
    pub fn join(handle: thread::JoinHandle<u64>) -> Option<u64> {
        match handle.join() {
            Ok(ticks) => Some(ticks),
            Err(e) => {
                error!(target: "engine", "Engine thread panicked: {:?}", e);
                None
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::application::ApplicationKind;
    use crate::core::error::ModuleError;
    use crate::core::input::{InputEvent, KeyCode, Modifiers};
    use crate::core::module::SubsystemKind;
    use crate::core::scene::{SceneManager, SceneTransition};

    fn headless() -> EngineBuilder {
        EngineBuilder::new().with_factory(
            DefaultSubsystemFactory::new().with_application(ApplicationKind::Headless),
        )
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config.runtime.tps, 60.0);
        assert_eq!(builder.config.runtime.channel_capacity, 128);
        assert_eq!(builder.build_mode, BuildMode::current());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.config.runtime.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let mut config = EngineConfig::default();
        config.graphics.screen_width = 0;

        let result = EngineBuilder::new().with_config(config).build();
        assert!(matches!(result, Err(BootstrapError::Config(_))));
    }

    #[test]
    fn build_reports_failing_subsystem() {
        struct NoScenes;
        impl SubsystemFactory for NoScenes {
            fn create_scene_manager(&self) -> Result<SceneManager, ModuleError> {
                Err(ModuleError::Failed("disabled".into()))
            }
        }

        let err = EngineBuilder::new().with_factory(NoScenes).build().err().unwrap();
        assert_eq!(err.subsystem(), Some(SubsystemKind::SceneManager));
    }

    #[test]
    fn build_respects_build_mode() {
        let engine = headless().with_build_mode(BuildMode::Release).build().unwrap();
        assert!(engine.handles().debug_manager.is_none());

        let engine = headless().with_build_mode(BuildMode::Debug).build().unwrap();
        assert!(engine.handles().debug_manager.is_some());
    }

    #[test]
    fn default_factory_builds_windowed_shell() {
        let engine = EngineBuilder::new()
            .with_graphics(GfxConfiguration::default().with_app_name("Sandbox"))
            .build()
            .unwrap();
        assert_eq!(engine.handles().application.configuration().app_name, "Sandbox");
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn tick_duration_follows_tps() {
        let engine = headless().with_tps(50.0).build().unwrap();
        assert_eq!(engine.tick_duration(), Duration::from_millis(20));
    }

    #[test]
    fn step_feeds_input_to_input_manager() {
        let mut engine = headless().build().unwrap();
        let sender = engine.event_sender();

        sender
            .send(PlatformEvent::Inputs(vec![InputEvent::KeyDown {
                key: KeyCode::Space,
                modifiers: Modifiers::NONE,
            }]))
            .unwrap();

        assert_eq!(engine.step(), TickControl::Continue);
        assert!(engine.handles().input_manager.is_key_pressed(KeyCode::Space));
        assert!(engine.handles().input_manager.has_changed());
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn step_ticks_every_subsystem() {
        let mut engine = headless()
            .with_build_mode(BuildMode::Debug)
            .build()
            .unwrap();

        engine.step();
        engine.step();

        let handles = engine.handles();
        assert_eq!(handles.application.frame_count(), 2);
        assert_eq!(handles.debug_manager.as_ref().map(|d| d.frame_count()), Some(2));
    }

    #[test]
    fn debug_frame_time_is_measured() {
        let mut engine = headless()
            .with_build_mode(BuildMode::Debug)
            .with_tps(1.0)
            .build()
            .unwrap();

        let start = Instant::now();
        engine.step();
        thread::sleep(Duration::from_millis(20));
        engine.step();
        let elapsed = start.elapsed();

        let average = engine
            .handles()
            .debug_manager
            .as_ref()
            .and_then(|d| d.average_frame_time())
            .unwrap();
        assert!(average >= Duration::from_millis(20), "average was {:?}", average);
        assert!(average <= elapsed, "average {:?} exceeds {:?}", average, elapsed);
        assert!(average < engine.tick_duration());
    }

    #[test]
    fn tiny_tps_in_config_is_an_error() {
        let mut config = EngineConfig::default();
        config.runtime.tps = 1e-30;

        let result = headless().with_config(config).build();
        assert!(matches!(result, Err(BootstrapError::Config(_))));
    }

    #[test]
    fn quit_request_stops_run() {
        let engine = headless().with_tps(1000.0).build().unwrap();
        engine
            .event_sender()
            .send(PlatformEvent::QuitRequested)
            .unwrap();

        assert_eq!(engine.run(), 0);
    }

    #[test]
    fn application_quit_stops_after_tick() {
        let mut engine = headless().build().unwrap();
        engine.handles_mut().application.request_quit();
        assert_eq!(engine.step(), TickControl::Exit);
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn init_configures_subsystems() {
        use crate::core::scene::{Scene, TransitionQueue};

        struct Title;
        impl Scene for Title {
            fn update(&mut self, _dt: Duration, _transitions: &mut TransitionQueue) {}
        }

        let mut engine = headless().build().unwrap().init(|handles| {
            handles.scene_manager.register_scene("title", Box::new(Title));
            handles
                .scene_manager
                .request(SceneTransition::Push("title".into()));
        });

        engine.step();
        assert_eq!(engine.handles().scene_manager.top(), Some("title"));
    }

    #[test]
    fn spawned_engine_stops_on_quit() {
        let engine = headless().with_tps(1000.0).build().unwrap();
        let sender = engine.event_sender();
        let handle = engine.spawn();

        sender.send(PlatformEvent::QuitRequested).unwrap();

        assert!(Engine::join(handle).is_some());
    }
}
