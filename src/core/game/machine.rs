//=========================================================================
// Game State Machine
//=========================================================================
//
// Sole owner and writer of the current snapshot.
//
// Wraps the pure transition functions: every input replaces the held
// `Arc<GameState>` with a fresh one when it changes anything. Previously
// handed-out snapshots are never touched.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{transitions, Command, GameState};
use crate::core::questions::{Question, QuestionBank};

//=== Outcome =============================================================

/// Result of feeding one input to the machine.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Snapshot after the input (the old one if nothing changed).
    pub snapshot: Arc<GameState>,
    /// Whether the input changed the state.
    pub accepted: bool,
}

//=== GameStateMachine ====================================================

/// Holds the current snapshot and the bank questions are resolved from.
pub struct GameStateMachine {
    bank: Arc<QuestionBank>,
    current: Arc<GameState>,
}

impl GameStateMachine {
    /// Creates a machine in the initial snapshot.
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            current: Arc::new(GameState::initial()),
        }
    }

    //--- Inputs -----------------------------------------------------------

    /// Applies a user command.
    pub fn dispatch(&mut self, command: &Command) -> Outcome {
        let next = transitions::apply(&self.bank, &self.current, command);
        let outcome = self.replace(next);

        if outcome.accepted {
            info!(
                target: "core",
                "{:?} accepted → {:?} (layer {}, score {})",
                command, outcome.snapshot.stage, outcome.snapshot.current_layer, outcome.snapshot.score
            );
        }

        outcome
    }

    /// Applies one elapsed second.
    ///
    /// Safe to call at any time; the active flag is re-checked here, so a
    /// tick arriving after a reset or a terminal transition changes nothing.
    pub fn tick(&mut self) -> Outcome {
        let next = transitions::tick(&self.current);
        let outcome = self.replace(next);

        if outcome.accepted && outcome.snapshot.is_terminal() {
            info!(target: "core", "Time expired → {:?}", outcome.snapshot.stage);
        }

        outcome
    }

    //--- Queries ----------------------------------------------------------

    /// The latest snapshot.
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.current)
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    /// The question the current snapshot is waiting on, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.bank
            .question_at(self.current.current_layer, self.current.current_question_index)
    }

    //--- Internal Helpers -------------------------------------------------

    fn replace(&mut self, next: GameState) -> Outcome {
        if next == *self.current {
            return Outcome {
                snapshot: self.snapshot(),
                accepted: false,
            };
        }

        debug!(target: "core", "Snapshot replaced: {:?}", next);
        self.current = Arc::new(next);

        Outcome {
            snapshot: self.snapshot(),
            accepted: true,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
