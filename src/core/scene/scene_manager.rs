//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and lifecycle.
//
// Scenes are stored in a HashMap by name and referenced via a stack of
// names, so a scene keeps its state between activations.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneTransition, TransitionQueue};
use crate::core::error::ModuleError;
use crate::core::module::{RuntimeModule, SubsystemKind};

//=== SceneManager ========================================================

pub struct SceneManager {
    scenes: HashMap<String, Box<dyn Scene>>,
    stack: Vec<String>,
    transitions: TransitionQueue,
}

impl SceneManager {
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
            transitions: TransitionQueue::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene. Scenes must be registered before being pushed.
    ///
    /// Replacing a scene that is on the stack exits the old instance and
    /// enters the new one in place.
    pub fn register_scene(&mut self, name: impl Into<String>, scene: Box<dyn Scene>) {
        let name = name.into();
        let Some(mut previous) = self.scenes.insert(name.clone(), scene) else {
            return;
        };

        warn!("Scene '{}' was already registered and has been replaced", name);
        if self.stack.contains(&name) {
            previous.on_exit();
            if let Some(current) = self.scenes.get_mut(&name) {
                current.on_enter();
            }
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    //--- Transitions ------------------------------------------------------

    /// Queues a transition, applied at the end of the next tick.
    pub fn request(&mut self, transition: SceneTransition) {
        self.transitions.push(transition);
    }

    /// Applies all queued transitions immediately, in FIFO order.
    pub fn process_transitions(&mut self) {
        for transition in self.transitions.take() {
            match transition {
                SceneTransition::Push(name) => self.push_internal(name),
                SceneTransition::Remove(name) => self.remove_internal(&name),
                SceneTransition::Replace(old, new) => self.replace_internal(&old, new),
                SceneTransition::Clear => self.clear_internal(),
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Scene names from bottom to top.
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    pub fn top(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    pub fn pending_transitions(&self) -> usize {
        self.transitions.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, name: String) {
        if self.stack.contains(&name) {
            warn!("Scene '{}' is already in the stack, skipping push", name);
            return;
        }

        let Some(scene) = self.scenes.get_mut(&name) else {
            warn!("Attempted to push unregistered scene '{}'", name);
            return;
        };

        debug!("Pushing scene '{}' onto stack", name);
        scene.on_enter();
        self.stack.push(name);
    }

    fn remove_internal(&mut self, name: &str) {
        let Some(pos) = self.stack.iter().position(|s| s == name) else {
            debug!("Scene '{}' not found in stack, skipping removal", name);
            return;
        };

        debug!("Removing scene '{}' from stack at position {}", name, pos);
        self.stack.remove(pos);
        if let Some(scene) = self.scenes.get_mut(name) {
            scene.on_exit();
        }
    }

    fn replace_internal(&mut self, old: &str, new: String) {
        let Some(pos) = self.stack.iter().position(|s| s == old) else {
            warn!("Scene '{}' not found in stack, skipping replacement", old);
            return;
        };

        if self.stack.contains(&new) {
            warn!("Scene '{}' is already in the stack, skipping replacement", new);
            return;
        }

        if !self.scenes.contains_key(&new) {
            warn!("Attempted to replace with unregistered scene '{}'", new);
            return;
        }

        debug!("Replacing scene '{}' with '{}' at position {}", old, new, pos);

        if let Some(scene) = self.scenes.get_mut(old) {
            scene.on_exit();
        }
        if let Some(scene) = self.scenes.get_mut(&new) {
            scene.on_enter();
        }
        self.stack[pos] = new;
    }

    fn clear_internal(&mut self) {
        debug!("Clearing all scenes from stack");
        for name in self.stack.drain(..).rev() {
            if let Some(scene) = self.scenes.get_mut(&name) {
                scene.on_exit();
            }
        }
    }

    /// Top-down until the first opaque scene, returned bottom-up.
    fn collect_active_scenes(&self) -> Vec<String> {
        let mut active = Vec::new();

        for name in self.stack.iter().rev() {
            active.push(name.clone());

            let opaque = self
                .scenes
                .get(name)
                .map_or(true, |scene| !scene.is_transparent());
            if opaque {
                break;
            }
        }

        active.reverse();
        active
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeModule for SceneManager {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::SceneManager
    }

    fn initialize(&mut self) -> Result<(), ModuleError> {
        debug!(target: "bootstrap", "Scene manager initialized ({} scenes registered)", self.scenes.len());
        Ok(())
    }

    fn tick(&mut self, dt: Duration) {
        for name in self.collect_active_scenes() {
            if let Some(scene) = self.scenes.get_mut(&name) {
                scene.update(dt, &mut self.transitions);
            }
        }

        self.process_transitions();
    }

    fn finalize(&mut self) {
        self.transitions.take();
        self.clear_internal();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
