//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between whatever runs the OS event loop and the engine.
// Platform backends can be swapped without touching engine code.
//
// Components:
// - `interface`: event type crossing the channel
// - `event_collector`: engine-side draining and batching
//
//=========================================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub use interface::PlatformEvent;
