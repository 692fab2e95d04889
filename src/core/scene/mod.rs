//=========================================================================
// Scene System
//=========================================================================
//
// Named scenes activated through a stack.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<String, Box<dyn Scene>>
//     ├─ stack: Vec<String>
//     └─ transitions: TransitionQueue
//
// Flow (per tick):
//   tick() → collect_active_scenes() → Scene::update() → apply transitions
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== Module Declarations =================================================

mod scene_manager;
mod transition_queue;

//=== Public API ==========================================================

pub use scene_manager::SceneManager;
pub use transition_queue::{SceneTransition, TransitionQueue};

//=== Scene Trait =========================================================

/// Scene behavior with lifecycle hooks.
///
/// Only `update()` is required:
///
/// ```rust
/// # use std::time::Duration;
/// # use aetheric_bootstrap::core::scene::{Scene, TransitionQueue};
/// struct Splash;
///
/// impl Scene for Splash {
///     fn update(&mut self, _dt: Duration, _transitions: &mut TransitionQueue) {}
/// }
/// ```
pub trait Scene: Send {
    /// Called when the scene enters the stack.
    fn on_enter(&mut self) {}

    /// Called when the scene leaves the stack.
    fn on_exit(&mut self) {}

    /// Called every tick while the scene is active.
    fn update(&mut self, dt: Duration, transitions: &mut TransitionQueue);

    /// Transparent scenes (pause menus, HUDs) let the scene below keep
    /// updating.
    fn is_transparent(&self) -> bool {
        false
    }
}
