//=========================================================================
// Stage Transitions
//=========================================================================
//
// Pure reducer functions: (snapshot, input) → next snapshot.
//
// Stage flow:
// ```text
//   Intro ─start─> TeamEntry ─submit_team─> Rules ─confirm_rules─> Playing
//                                                                  │    │
//                                                  answer (layer 7 done) tick (time out)
//                                                                  ↓    ↓
//                                                            Victory  GameOver
//
//   reset: any stage ─> Intro (initial snapshot)
// ```
//
// Calling an input in a stage where it has no effect returns an unchanged
// copy of the snapshot. No input ever fails.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Command, GameState, Stage};
use crate::core::constants::{POINTS_PER_CORRECT, QUESTIONS_PER_LAYER, TOTAL_LAYERS};
use crate::core::questions::QuestionBank;

//=== Dispatch ============================================================

/// Applies `command` to `state`.
pub fn apply(bank: &QuestionBank, state: &GameState, command: &Command) -> GameState {
    match command {
        Command::Start => start(state),
        Command::SubmitTeam(name) => submit_team(state, name),
        Command::ConfirmRules => confirm_rules(state),
        Command::Answer(option_index) => answer(bank, state, *option_index),
        Command::Reset => reset(state),
    }
}

//=== Commands ============================================================

/// Intro → team entry.
pub fn start(state: &GameState) -> GameState {
    if state.stage != Stage::Intro {
        return rejected(state, "start");
    }

    GameState {
        stage: Stage::TeamEntry,
        ..state.clone()
    }
}

/// Records the team name and moves on to the rules.
///
/// Callers are expected to reject empty names; an empty name reaching the
/// machine is ignored.
pub fn submit_team(state: &GameState, name: &str) -> GameState {
    if state.stage != Stage::TeamEntry || name.is_empty() {
        return rejected(state, "submit_team");
    }

    GameState {
        stage: Stage::Rules,
        team_name: name.to_string(),
        ..state.clone()
    }
}

/// Rules → playing. The clock starts from the current `time_left`.
pub fn confirm_rules(state: &GameState) -> GameState {
    if state.stage != Stage::Rules {
        return rejected(state, "confirm_rules");
    }

    GameState {
        stage: Stage::Playing,
        is_game_active: true,
        ..state.clone()
    }
}

/// Scores an answer to the current question and advances.
///
/// An `option_index` outside the option list counts as wrong.
pub fn answer(bank: &QuestionBank, state: &GameState, option_index: usize) -> GameState {
    if state.stage != Stage::Playing || !state.is_game_active {
        return rejected(state, "answer");
    }

    let Some(question) = bank.question_at(state.current_layer, state.current_question_index)
    else {
        return rejected(state, "answer");
    };

    let correct = question.is_correct(option_index);
    let mut next = state.clone();

    if correct {
        next.score += POINTS_PER_CORRECT;
    }
    next.answers_history.push(correct);
    next.current_question_index += 1;

    if next.current_question_index % QUESTIONS_PER_LAYER == 0 {
        next.current_layer += 1;
        next.answers_history.clear();

        if next.current_layer > TOTAL_LAYERS {
            next.stage = Stage::Victory;
            next.is_game_active = false;
        }
    }

    next
}

/// Returns the initial snapshot from any stage.
pub fn reset(_state: &GameState) -> GameState {
    GameState::initial()
}

//=== Ticks ===============================================================

/// One elapsed second of play.
///
/// The last second ends the game: `time_left` hits zero and the stage
/// becomes game-over.
pub fn tick(state: &GameState) -> GameState {
    if !state.is_game_active || state.time_left == 0 {
        return rejected(state, "tick");
    }

    if state.time_left <= 1 {
        return GameState {
            time_left: 0,
            is_game_active: false,
            stage: Stage::GameOver,
            ..state.clone()
        };
    }

    GameState {
        time_left: state.time_left - 1,
        ..state.clone()
    }
}

//=== Internal Helpers ====================================================

fn rejected(state: &GameState, input: &str) -> GameState {
    debug!(target: "core", "Ignoring {} in stage {:?}", input, state.stage);
    state.clone()
}

//=========================================================================
// Unit Tests
//=========================================================================
