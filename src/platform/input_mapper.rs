//=========================================================================
// Input Mapper
//=========================================================================
//
// Maps typed lines to player intents based on the active stage.
//
// Architecture:
//   (line, stage) → global bindings → stage bindings → Intent
//
// Each stage acts as its own binding context: the same Enter key starts
// the game on the intro screen and resets it on the victory screen.
// Global bindings are prefixed with ':' so they never collide with a
// team name or an answer.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::constants::{OPTIONS_PER_QUESTION, TEAM_NAME_MAX_LEN};
use crate::core::game::{Command, Stage};

//=== Intent ==============================================================

/// What a typed line asks the platform to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Intent {
    /// Forward a command to the core.
    Command(Command),
    /// Redraw the status bar.
    Status,
    /// Leave the game.
    Quit,
    /// Nothing to send; tell the player what is expected.
    Hint(&'static str),
}

//=== Mapping =============================================================

/// Resolves `line` in the context of `stage`.
pub(crate) fn map_line(stage: Stage, line: &str) -> Intent {
    let input = line.trim();

    match input {
        ":quit" | ":q" => return Intent::Quit,
        ":reset" => return Intent::Command(Command::Reset),
        ":status" => return Intent::Status,
        _ => {}
    }

    match stage {
        Stage::Intro => Intent::Command(Command::Start),
        Stage::TeamEntry => map_team_name(input),
        Stage::Rules => Intent::Command(Command::ConfirmRules),
        Stage::Playing => map_answer(input),
        Stage::Victory | Stage::GameOver => Intent::Command(Command::Reset),
    }
}

//--- Stage Bindings ------------------------------------------------------

fn map_team_name(input: &str) -> Intent {
    if input.is_empty() {
        return Intent::Hint("A team name is required, O Brave One.");
    }

    let name: String = input.chars().take(TEAM_NAME_MAX_LEN).collect();
    Intent::Command(Command::SubmitTeam(name.trim_end().to_string()))
}

fn map_answer(input: &str) -> Intent {
    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Intent::Hint("Answer with a letter (A-D) or a number (1-4).");
    };

    let index = match c.to_ascii_uppercase() {
        letter @ 'A'..='Z' => letter as usize - 'A' as usize,
        digit @ '1'..='9' => digit as usize - '1' as usize,
        _ => usize::MAX,
    };

    if index < OPTIONS_PER_QUESTION {
        Intent::Command(Command::Answer(index))
    } else {
        Intent::Hint("Answer with a letter (A-D) or a number (1-4).")
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
