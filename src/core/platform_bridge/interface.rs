//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages sent from the platform side to the engine over the event
// channel. The only contract between the two sides.
//
//=========================================================================

use crate::core::input::InputEvent;

/// Event delivered to the engine through [`crate::Engine::event_sender`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Input collected during one platform frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window closed or the OS asked the application to quit.
    QuitRequested,
}
