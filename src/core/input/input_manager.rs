//=========================================================================
// Input Manager
//
// Digests per-frame batches of `InputEvent` into persistent state.
//
// Responsibilities:
// - Track pressed keys and mouse buttons (presence in a set)
// - Track cursor position and the latest modifier state
// - Report whether the last digested frame changed anything
//
// Repeated presses of an already-pressed key are not a change; cursor
// motion always is.
//
//=========================================================================

use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use super::event::{InputEvent, KeyCode, Modifiers, MouseButton};
use crate::core::error::ModuleError;
use crate::core::module::{RuntimeModule, SubsystemKind};

//=== DiscreteInput =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DiscreteInput {
    Key(KeyCode),
    Button(MouseButton),
}

//=== InputManager ========================================================

pub struct InputManager {
    pressed: HashSet<DiscreteInput>,
    mouse: (f32, f32),
    modifiers: Modifiers,
    has_changed: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            mouse: (0.0, 0.0),
            modifiers: Modifiers::NONE,
            has_changed: false,
        }
    }

    //--- digest_frame() ---------------------------------------------------
    //
    // Applies all batches collected for one frame. `has_changed` reflects
    // only this frame.
    //
    pub fn digest_frame(&mut self, batches: &[Vec<InputEvent>]) {
        let mut changed = false;

        for event in batches.iter().flatten() {
            changed |= self.apply(*event);
        }

        self.has_changed = changed;
        if changed {
            trace!("Input state changed: {:?}", self);
        }
    }

    fn apply(&mut self, event: InputEvent) -> bool {
        let mut modifiers_changed = false;
        if let Some(modifiers) = event.modifiers() {
            modifiers_changed = modifiers != self.modifiers;
            self.modifiers = modifiers;
        }

        let state_changed = match event {
            InputEvent::KeyDown { key, .. } => self.pressed.insert(DiscreteInput::Key(key)),
            InputEvent::KeyUp { key, .. } => self.pressed.remove(&DiscreteInput::Key(key)),
            InputEvent::MouseButtonDown { button, .. } => {
                self.pressed.insert(DiscreteInput::Button(button))
            }
            InputEvent::MouseButtonUp { button, .. } => {
                self.pressed.remove(&DiscreteInput::Button(button))
            }
            InputEvent::MouseMoved { x, y } => {
                self.mouse = (x, y);
                true
            }
        };

        state_changed || modifiers_changed
    }

    /// Releases everything, e.g. after focus loss.
    pub fn reset(&mut self) {
        self.has_changed = !self.pressed.is_empty() || self.modifiers != Modifiers::NONE;
        self.pressed.clear();
        self.modifiers = Modifiers::NONE;
    }

    //--- Query Methods ----------------------------------------------------

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&DiscreteInput::Key(key))
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed.contains(&DiscreteInput::Button(button))
    }

    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn has_changed(&self) -> bool {
        self.has_changed
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeModule for InputManager {
    fn kind(&self) -> SubsystemKind {
        SubsystemKind::InputManager
    }

    fn initialize(&mut self) -> Result<(), ModuleError> {
        self.pressed.clear();
        self.has_changed = false;
        debug!(target: "bootstrap", "Input manager initialized");
        Ok(())
    }

    fn finalize(&mut self) {
        self.pressed.clear();
    }
}

//=== Debug Trait =========================================================
//
// Prints only the state worth reading:
//
// ```text
// InputManager { mouse: (420.0, 255.0), modifiers: ..., pressed: ["Key(KeyW)"] }
// ```
//
impl fmt::Debug for InputManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pressed: Vec<_> = self.pressed.iter().map(|k| format!("{:?}", k)).collect();

        f.debug_struct("InputManager")
            .field("mouse", &self.mouse)
            .field("modifiers", &self.modifiers)
            .field("has_changed", &self.has_changed)
            .field("pressed", &pressed)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
