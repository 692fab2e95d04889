//=========================================================================
// Aetheric Bootstrap: Library Root
//
// Composition root of the Aetheric engine: builds every subsystem once,
// hands them out as an owned bundle, and drives them at a fixed tick rate.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the subsystems and bootstrap under `core`
// - Translate winit input into engine events under `platform`
//
// Typical usage:
// ```no_run
// use aetheric_bootstrap::EngineBuilder;
//
// fn main() {
//     let engine = EngineBuilder::new().build().expect("bootstrap failed");
//     engine.run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the subsystems, the bootstrap and the platform bridge.
// Most applications only need the top-level `Engine` facade.
//
pub mod core;

// `platform` translates winit input and window settings. It never opens
// a window by itself; the host owns the event loop.
pub mod platform;

pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
