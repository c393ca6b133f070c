//=========================================================================
// Ximera Library Root
//
// The Analytics Chakravyuh: a seven-layer trivia game.
//
// Responsibilities:
// - Expose the game core (question bank, state machine, timer, bus)
// - Expose the runtime facade (`EngineBuilder`, `Engine`, `EngineHandle`)
// - Keep the terminal adapter (`platform`) internal
//
// Typical usage:
// ```no_run
// use ximera::EngineBuilder;
//
// fn main() -> ximera::Result<()> {
//     EngineBuilder::new().build()?.run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game logic. Adapters other than the bundled terminal
// front-end build on `core::game` and `core::snapshot_bus` directly, or on
// the `EngineHandle` returned by `Engine::spawn`.
//
pub mod core;
pub mod error;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` is the terminal presentation adapter used by `Engine::run`.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineHandle};
pub use error::{Result, XimeraError};
