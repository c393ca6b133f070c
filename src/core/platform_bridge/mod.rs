//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges presentation adapters (terminal, GUI, tests) with the core.
//
// This module defines the contract between adapters and core logic, so
// an adapter can be swapped without changing core code.
//
// Components:
// - `interface`: Event types sent to the core (the contract)
// - `event_collector`: Core-side multiplexing of commands and ticks
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{CoreInput, EventCollector};
pub use interface::CoreEvent;
