//=========================================================================
// Terminal View
//=========================================================================
//
// Text rendering of snapshots: one screen per stage plus a HUD.
//
// All functions are pure: snapshot in, text out. Victory and defeat are
// decided from `stage` alone.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Write;

//=== Internal Dependencies ===============================================

use crate::core::constants::{
    POINTS_PER_CORRECT, QUESTIONS_PER_LAYER, TOTAL_LAYERS, TOTAL_TIME_SEC,
};
use crate::core::game::{GameState, Stage};
use crate::core::questions::QuestionBank;

const RULE: &str = "══════════════════════════════════════════════════════════";
const PROGRESS_WIDTH: usize = 20;

//=== Screens =============================================================

/// Full screen for the snapshot's stage.
pub(crate) fn render_screen(state: &GameState, bank: &QuestionBank) -> String {
    match state.stage {
        Stage::Intro => render_intro(),
        Stage::TeamEntry => render_team_entry(),
        Stage::Rules => render_rules(),
        Stage::Playing => render_playing(state, bank),
        Stage::Victory => render_victory(state),
        Stage::GameOver => render_defeat(state),
    }
}

fn render_intro() -> String {
    format!(
        "{RULE}\n                         XIMERA\n            The Analytics Chakravyuh\n{RULE}\n\n\
         Press Enter to START THE YUDDH.\n"
    )
}

fn render_team_entry() -> String {
    format!(
        "\n{RULE}\n  Identity of the Warrior\n  \"Enter your team name, O Brave One\"\n{RULE}\nTeam name: "
    )
}

fn render_rules() -> String {
    let minutes = TOTAL_TIME_SEC / 60;
    let total = TOTAL_LAYERS as usize * QUESTIONS_PER_LAYER;

    let mut out = format!("\n{RULE}\n  Rules of Engagement\n{RULE}\n");
    let rules = [
        format!("You face the Chakravyuh, a {}-layer defensive formation.", TOTAL_LAYERS),
        format!("There are {} questions per layer ({} total).", QUESTIONS_PER_LAYER, total),
        format!("You have a total of {} minutes to breach all layers.", minutes),
        format!("Each correct answer grants {} points.", POINTS_PER_CORRECT),
        "Incorrect answers do not deduct points, but impede your progress.".to_string(),
        format!("Upon answering {} questions in a layer, you advance inward.", QUESTIONS_PER_LAYER),
        "Reach the center to claim victory.".to_string(),
    ];
    for rule in rules {
        let _ = writeln!(out, "  • {}", rule);
    }
    out.push_str("\nPress Enter to ENTER THE CHAKRAVYUH.\n");
    out
}

fn render_playing(state: &GameState, bank: &QuestionBank) -> String {
    let mut out = format!("\n{}\n", render_hud(state));

    let Some(question) = bank.question_at(state.current_layer, state.current_question_index)
    else {
        return out;
    };

    let position = state.question_position();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "  Question {} / {}    {}",
        position + 1,
        QUESTIONS_PER_LAYER,
        render_history(&state.answers_history)
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {}\n", question.prompt);

    for (i, option) in question.options.iter().enumerate() {
        let _ = writeln!(out, "    {}) {}", option_letter(i), option);
    }

    let _ = writeln!(out, "\n  {}", render_progress(position));
    out.push_str("Your answer: ");
    out
}

fn render_victory(state: &GameState) -> String {
    format!(
        "\n{RULE}\n                        VICTORY\n       \"The Yuddh of Intellect is Won.\"\n{RULE}\n\
         \x20 Team:           {}\n\
         \x20 Final Score:    {}\n\
         \x20 Time Remaining: {}\n\n\
         Press Enter to return to the Sabha.\n",
        state.team_name,
        state.score,
        state.clock()
    )
}

fn render_defeat(state: &GameState) -> String {
    format!(
        "\n{RULE}\n                         DEFEAT\n         Time has conquered the warrior.\n{RULE}\n\
         \x20 Team:            {}\n\
         \x20 Layers Breached: {}\n\
         \x20 Score:           {}\n\n\
         Press Enter to try again.\n",
        state.team_name,
        state.layers_breached(),
        state.score
    )
}

//=== HUD =================================================================

/// One-line status bar: team, score, layer, clock.
pub(crate) fn render_hud(state: &GameState) -> String {
    let team = if state.team_name.is_empty() {
        "Warrior"
    } else {
        state.team_name.as_str()
    };
    let layer = state.current_layer.min(TOTAL_LAYERS);
    let alarm = if state.is_time_critical() { " !" } else { "" };

    format!(
        "[{}]  Score {}  |  Layer {} / {}  |  ⏱ {}{}",
        team, state.score, layer, TOTAL_LAYERS, state.clock(), alarm
    )
}

//=== Internal Helpers ====================================================

fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

fn render_history(history: &[bool]) -> String {
    let mut out = String::with_capacity(QUESTIONS_PER_LAYER);
    for slot in 0..QUESTIONS_PER_LAYER {
        out.push(match history.get(slot) {
            Some(true) => '✓',
            Some(false) => '✗',
            None => '·',
        });
    }
    out
}

fn render_progress(position: usize) -> String {
    let filled = position * PROGRESS_WIDTH / QUESTIONS_PER_LAYER;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

//=========================================================================
// Unit Tests
//=========================================================================
