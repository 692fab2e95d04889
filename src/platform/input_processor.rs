//=========================================================================
// Input Translator
//=========================================================================
//
// Converts winit input into engine `InputEvent`s.
//
// Architecture:
//   winit events → InputTranslator → InputEvent → PlatformEvent::Inputs
//
// Modifier state is cached from `ModifiersChanged` and stamped onto every
// subsequent key/button event. Unmapped keys are filtered (`None`).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputTranslator =====================================================

/// Stateful winit → engine input converter.
///
/// Owned by the embedder's event loop; translated events are forwarded to
/// the engine through [`crate::Engine::event_sender`].
#[derive(Debug, Default)]
pub struct InputTranslator {
    modifiers: Modifiers,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self {
            modifiers: Modifiers::NONE,
        }
    }

    //--- Modifier State ---------------------------------------------------

    /// Caches modifier state for subsequent events.
    pub fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers::from(state);
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    //--- Event Translation ------------------------------------------------

    /// Translates a physical key transition. Unmapped keys yield `None`.
    pub fn translate_key(&self, key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
        let key = match key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => return None,
        };

        if key == KeyCode::Unidentified {
            return None;
        }

        let modifiers = self.modifiers;
        Some(match state {
            ElementState::Pressed => InputEvent::KeyDown { key, modifiers },
            ElementState::Released => InputEvent::KeyUp { key, modifiers },
        })
    }

    pub fn translate_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.modifiers;
        match state {
            ElementState::Pressed => InputEvent::MouseButtonDown { button, modifiers },
            ElementState::Released => InputEvent::MouseButtonUp { button, modifiers },
        }
    }

    pub fn translate_cursor(&self, x: f64, y: f64) -> InputEvent {
        InputEvent::MouseMoved {
            x: x as f32,
            y: y as f32,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// winit already folds macOS Command into `control_key` semantics for
/// shortcuts; Option maps to Alt.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;
        match code {
            //--- Digits -------------------------------------------------------
            W::Digit0 => KeyCode::Digit0, W::Digit1 => KeyCode::Digit1,
            W::Digit2 => KeyCode::Digit2, W::Digit3 => KeyCode::Digit3,
            W::Digit4 => KeyCode::Digit4, W::Digit5 => KeyCode::Digit5,
            W::Digit6 => KeyCode::Digit6, W::Digit7 => KeyCode::Digit7,
            W::Digit8 => KeyCode::Digit8, W::Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------
            W::KeyA => KeyCode::KeyA, W::KeyB => KeyCode::KeyB, W::KeyC => KeyCode::KeyC,
            W::KeyD => KeyCode::KeyD, W::KeyE => KeyCode::KeyE, W::KeyF => KeyCode::KeyF,
            W::KeyG => KeyCode::KeyG, W::KeyH => KeyCode::KeyH, W::KeyI => KeyCode::KeyI,
            W::KeyJ => KeyCode::KeyJ, W::KeyK => KeyCode::KeyK, W::KeyL => KeyCode::KeyL,
            W::KeyM => KeyCode::KeyM, W::KeyN => KeyCode::KeyN, W::KeyO => KeyCode::KeyO,
            W::KeyP => KeyCode::KeyP, W::KeyQ => KeyCode::KeyQ, W::KeyR => KeyCode::KeyR,
            W::KeyS => KeyCode::KeyS, W::KeyT => KeyCode::KeyT, W::KeyU => KeyCode::KeyU,
            W::KeyV => KeyCode::KeyV, W::KeyW => KeyCode::KeyW, W::KeyX => KeyCode::KeyX,
            W::KeyY => KeyCode::KeyY, W::KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------
            W::ArrowUp => KeyCode::ArrowUp,
            W::ArrowDown => KeyCode::ArrowDown,
            W::ArrowLeft => KeyCode::ArrowLeft,
            W::ArrowRight => KeyCode::ArrowRight,

            //--- Function Keys ------------------------------------------------
            W::F1 => KeyCode::F1, W::F2 => KeyCode::F2, W::F3 => KeyCode::F3,
            W::F4 => KeyCode::F4, W::F5 => KeyCode::F5, W::F6 => KeyCode::F6,
            W::F7 => KeyCode::F7, W::F8 => KeyCode::F8, W::F9 => KeyCode::F9,
            W::F10 => KeyCode::F10, W::F11 => KeyCode::F11, W::F12 => KeyCode::F12,

            //--- Special ------------------------------------------------------
            W::Space => KeyCode::Space,
            W::Enter => KeyCode::Enter,
            W::Escape => KeyCode::Escape,
            W::Tab => KeyCode::Tab,
            W::Backspace => KeyCode::Backspace,
            W::Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn key_press_and_release() {
        let translator = InputTranslator::new();

        let down = translator.translate_key(PhysicalKey::Code(WinitKeyCode::KeyW), ElementState::Pressed);
        assert_eq!(down, Some(InputEvent::KeyDown { key: KeyCode::KeyW, modifiers: Modifiers::NONE }));

        let up = translator.translate_key(PhysicalKey::Code(WinitKeyCode::KeyW), ElementState::Released);
        assert_eq!(up, Some(InputEvent::KeyUp { key: KeyCode::KeyW, modifiers: Modifiers::NONE }));
    }

    #[test]
    fn unmapped_keys_are_filtered() {
        let translator = InputTranslator::new();
        assert_eq!(
            translator.translate_key(PhysicalKey::Code(WinitKeyCode::F24), ElementState::Pressed),
            None
        );
        assert_eq!(
            translator.translate_key(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed
            ),
            None
        );
    }

    #[test]
    fn modifiers_are_sticky() {
        let mut translator = InputTranslator::new();
        translator.update_modifiers(ModifiersState::CONTROL | ModifiersState::SHIFT);

        let event = translator
            .translate_key(PhysicalKey::Code(WinitKeyCode::KeyS), ElementState::Pressed)
            .unwrap();
        assert_eq!(
            event.modifiers(),
            Some(Modifiers { shift: true, ctrl: true, alt: false })
        );

        let click = translator.translate_mouse_button(WinitMouseButton::Left, ElementState::Pressed);
        assert_eq!(click.modifiers(), Some(translator.modifiers()));

        translator.update_modifiers(ModifiersState::empty());
        assert_eq!(translator.modifiers(), Modifiers::NONE);
    }

    #[test]
    fn mouse_buttons_map() {
        let translator = InputTranslator::new();
        assert_eq!(
            translator.translate_mouse_button(WinitMouseButton::Back, ElementState::Released),
            InputEvent::MouseButtonUp { button: MouseButton::Other, modifiers: Modifiers::NONE }
        );
        assert_eq!(MouseButton::from(WinitMouseButton::Middle), MouseButton::Middle);
    }

    #[test]
    fn cursor_is_converted_to_f32() {
        let translator = InputTranslator::new();
        assert_eq!(
            translator.translate_cursor(420.0, 255.5),
            InputEvent::MouseMoved { x: 420.0, y: 255.5 }
        );
    }

    #[test]
    fn special_and_function_keys_map() {
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::F3), KeyCode::F3);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadAdd), KeyCode::Unidentified);
    }
}
