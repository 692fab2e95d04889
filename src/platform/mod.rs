//=========================================================================
// Platform Adapter
//
// Bridges winit types and the engine. The engine never owns the OS event
// loop; the embedder runs it (winit requires the main thread on macOS)
// and forwards translated input over the engine's event channel.
//
// ```text
//  Main Thread (embedder):              Engine (logic thread):
//  ┌──────────────────────────┐        ┌──────────────────────┐
//  │  winit event loop        │        │  EventCollector      │
//  │   ↓                      │        │   ↓                  │
//  │  InputTranslator         │        │  InputManager        │
//  │   ↓                      │        │   ↓                  │
//  │  Sender<PlatformEvent> ──┼────────┼► RuntimeModule::tick │
//  └──────────────────────────┘        └──────────────────────┘
// ```
//
// Responsibilities:
// - Convert winit keyboard/mouse input into `InputEvent`
// - Describe the window requested by `GfxConfiguration`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use winit::{dpi::LogicalSize, window::WindowAttributes};

//=== Internal Imports ====================================================

use crate::core::config::GfxConfiguration;

//=== Public API ==========================================================

pub use input_processor::InputTranslator;

/// winit attributes for the window described by `config`.
///
/// Size is in logical pixels, so the window keeps its apparent size on
/// HiDPI displays.
pub fn window_attributes(config: &GfxConfiguration) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.app_name.clone())
        .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height))
}

//=========================================================================
// Unit Tests
//=========================================================================
