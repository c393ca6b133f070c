//=========================================================================
// Game State Snapshot
//=========================================================================
//
// The single authoritative value describing a game at one instant.
//
// Snapshots are never mutated after being handed out. Every accepted
// command or tick produces a brand new value.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::Serialize;

//=== Internal Dependencies ===============================================

use crate::core::constants::{
    QUESTIONS_PER_LAYER, TIME_CRITICAL_SEC, TOTAL_LAYERS, TOTAL_TIME_SEC,
};

//=== Stage ===============================================================

/// Coarse phase of a session. Decides which panel is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Intro,
    TeamEntry,
    Rules,
    Playing,
    Victory,
    GameOver,
}

impl Stage {
    /// Victory and game-over accept nothing but a reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Victory | Stage::GameOver)
    }
}

//=== Command =============================================================

/// Discrete user intent forwarded by a presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    SubmitTeam(String),
    ConfirmRules,
    Answer(usize),
    Reset,
}

//=== GameState ===========================================================

/// Complete game state. See the module docs for the snapshot contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub stage: Stage,
    pub team_name: String,
    /// 1-based; `TOTAL_LAYERS + 1` once every layer is cleared.
    pub current_layer: u32,
    /// Cumulative across layers, never reset mid-game.
    pub current_question_index: usize,
    pub score: u32,
    /// Seconds remaining, floored at zero.
    pub time_left: u32,
    pub is_game_active: bool,
    /// Correctness of each answer given in the current layer.
    pub answers_history: Vec<bool>,
}

impl GameState {
    /// The snapshot every session starts from and every reset returns to.
    pub fn initial() -> Self {
        Self {
            stage: Stage::Intro,
            team_name: String::new(),
            current_layer: 1,
            current_question_index: 0,
            score: 0,
            time_left: TOTAL_TIME_SEC,
            is_game_active: false,
            answers_history: Vec::new(),
        }
    }

    //--- Derived Views ----------------------------------------------------

    /// Position of the current question within its layer (0-based).
    pub fn question_position(&self) -> usize {
        self.current_question_index % QUESTIONS_PER_LAYER
    }

    /// Layers fully cleared so far.
    pub fn layers_breached(&self) -> u32 {
        self.current_layer.saturating_sub(1).min(TOTAL_LAYERS)
    }

    pub fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }

    /// True once the clock drops below the warning threshold.
    pub fn is_time_critical(&self) -> bool {
        self.time_left < TIME_CRITICAL_SEC
    }

    /// Remaining time as `m:ss`.
    pub fn clock(&self) -> String {
        format!("{}:{:02}", self.time_left / 60, self.time_left % 60)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
