//=========================================================================
// Game System
//=========================================================================
//
// Game progression core: the snapshot, its transitions and their owner.
//
// Architecture:
//   Command / tick ──> GameStateMachine ──transitions::*──> Arc<GameState>
//
//=========================================================================

//=== Module Declarations =================================================

mod machine;
mod state;
pub mod transitions;

//=== Public API ==========================================================

pub use machine::{GameStateMachine, Outcome};
pub use state::{Command, GameState, Stage};
