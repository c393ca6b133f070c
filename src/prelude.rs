//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use ximera::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder, EngineHandle};
pub use crate::error::{Result, XimeraError};

// Game core
pub use crate::core::constants::*;
pub use crate::core::game::{Command, GameState, GameStateMachine, Stage};
pub use crate::core::questions::{Layer, Question, QuestionBank, QuestionTemplate};

// Plumbing
pub use crate::core::platform_bridge::CoreEvent;
pub use crate::core::snapshot_bus::SnapshotBus;
pub use crate::core::timer::{TimerDriver, TimerTick};
