//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types.
//
// Defines the contract for communication between presentation adapters
// and the core thread.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::game::Command;

//=== CoreEvent ===========================================================

/// Events sent from an adapter to the core thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// A user command for the game state machine.
    Command(Command),

    /// The adapter is closing; the core thread should stop.
    Shutdown,
}

impl From<Command> for CoreEvent {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}
