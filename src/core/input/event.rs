//=========================================================================
// Input Event Types
//
// Platform-independent representation of keyboard and mouse input.
// Platform adapters (see `crate::platform`) translate native events into
// these types before they cross into the engine.
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Side, thumb and macro buttons.
    Other,
}

//=== KeyCode =============================================================

/// Physical key location, independent of keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown, ArrowLeft, ArrowRight, ArrowUp,

    //--- Function Keys ----------------------------------------------------
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key the platform reported but the engine does not map.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state. Left/right variants are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    /// Ctrl, or Command on macOS.
    pub ctrl: bool,
    /// Alt, or Option on macOS.
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

//=== InputEvent ==========================================================

/// Input event as delivered to the input manager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: KeyCode, modifiers: Modifiers },
    KeyUp { key: KeyCode, modifiers: Modifiers },
    MouseButtonDown { button: MouseButton, modifiers: Modifiers },
    MouseButtonUp { button: MouseButton, modifiers: Modifiers },
    /// Cursor position in window pixels, top-left origin.
    MouseMoved { x: f32, y: f32 },
}

impl InputEvent {
    /// Modifier state carried by the event, if it carries one.
    pub fn modifiers(&self) -> Option<Modifiers> {
        match *self {
            Self::KeyDown { modifiers, .. }
            | Self::KeyUp { modifiers, .. }
            | Self::MouseButtonDown { modifiers, .. }
            | Self::MouseButtonUp { modifiers, .. } => Some(modifiers),
            Self::MouseMoved { .. } => None,
        }
    }

    /// Whether the event is a press/release rather than motion.
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::MouseMoved { .. })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
