//=========================================================================
// Input System
//
// Platform-independent input events and the input manager subsystem.
//
// Event Flow:
// ```text
// Platform adapter (winit)
//         ↓
//    InputEvent  ── PlatformEvent::Inputs ──►  Engine
//                                                ↓
//                                          InputManager
// ```
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod input_manager;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use input_manager::InputManager;
