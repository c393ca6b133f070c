//=========================================================================
// Platform Subsystem
//
// Terminal presentation adapter: renders snapshots, forwards commands.
//
// Architecture:
// ```text
//  Reader Thread:          Main Thread:                    Logic Thread:
//  ┌──────────────┐       ┌──────────────────────────┐    ┌──────────────┐
//  │ stdin lines  │──────>│ select! {                │    │              │
//  └──────────────┘ line  │   line     -> InputMapper│───>│ Orchestrator │
//                         │   snapshot -> Presenter  │<───│              │
//                         │ }                        │    │              │
//                         └──────────────────────────┘    └──────────────┘
//                                   CoreEvent ↑   ↓ Arc<GameState>
// ```
//
// Key Design Decisions:
// - **Read-only snapshots**: the platform never changes game state; it
//   only renders what the core publishes
// - **Stage-aware input**: the latest snapshot's stage selects the
//   binding context for each typed line
// - **Lockstep input**: queued snapshots are drained before a line is
//   mapped, and after a command the core will accept, no line is read
//   until its frame is published
// - **Quiet clock**: snapshots that only move the clock are printed at
//   minute marks, and every 10 seconds once time is critical
// - **Detached reader**: the stdin thread may stay blocked after quit;
//   it ends with the process
//
//=========================================================================

//=== Submodules ==========================================================

mod input_mapper;
mod view;

//=== External Crates =====================================================

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{select, unbounded, Receiver, Sender};
use log::{debug, info, warn};

//=== Internal Imports ====================================================

use crate::core::game::{transitions, GameState, Stage};
use crate::core::platform_bridge::CoreEvent;
use crate::core::questions::QuestionBank;
use crate::error::Result;
use input_mapper::{map_line, Intent};

//=== Presenter ===========================================================

/// Decides which snapshots deserve a redraw and writes them out.
struct Presenter {
    bank: Arc<QuestionBank>,
    last_frame: Option<FrameKey>,
}

/// Everything but the clock. A change here means a new screen.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrameKey {
    stage: Stage,
    layer: u32,
    question: usize,
}

impl FrameKey {
    fn of(state: &GameState) -> Self {
        Self {
            stage: state.stage,
            layer: state.current_layer,
            question: state.current_question_index,
        }
    }
}

impl Presenter {
    fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            last_frame: None,
        }
    }

    fn present(&mut self, state: &GameState, out: &mut impl Write) -> io::Result<()> {
        let frame = FrameKey::of(state);

        if self.last_frame.as_ref() != Some(&frame) {
            self.last_frame = Some(frame);
            write!(out, "{}", view::render_screen(state, &self.bank))?;
        } else if clock_worth_showing(state) {
            writeln!(out, "\n{}", view::render_hud(state))?;
        }

        out.flush()
    }

    fn status(&self, state: &GameState, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", view::render_hud(state))?;
        out.flush()
    }
}

fn clock_worth_showing(state: &GameState) -> bool {
    if !state.is_game_active {
        return false;
    }
    if state.is_time_critical() {
        state.time_left % 10 == 0
    } else {
        state.time_left % 60 == 0
    }
}

//=== Platform ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

enum PlatformInput {
    Snapshot(Option<Arc<GameState>>),
    Line(Option<io::Result<String>>),
}

/// Line-based terminal front-end.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(commands, snapshots, bank)`
/// 2. **Execution**: `platform.run()` blocks until quit or end of input
/// 3. **Shutdown**: sends [`CoreEvent::Shutdown`] before returning
///
/// Lines are always mapped against the newest snapshot. After forwarding a
/// command the core is expected to accept, the platform reads no further
/// line until the core has published the resulting frame.
pub(crate) struct Platform {
    commands: Sender<CoreEvent>,
    snapshots: Receiver<Arc<GameState>>,
    bank: Arc<QuestionBank>,
    presenter: Presenter,
    latest: Arc<GameState>,
    awaiting: Option<FrameKey>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(
        commands: Sender<CoreEvent>,
        snapshots: Receiver<Arc<GameState>>,
        bank: Arc<QuestionBank>,
    ) -> Self {
        info!(target: "platform", "Terminal platform initialized");
        Self {
            commands,
            snapshots,
            presenter: Presenter::new(Arc::clone(&bank)),
            bank,
            latest: Arc::new(GameState::initial()),
            awaiting: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs until the player quits, stdin closes or the core goes away.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading stdin or writing stdout fails.
    pub fn run(self) -> Result<()> {
        let lines = spawn_line_reader();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        self.serve(&lines, &mut out)
    }

    /// Event loop followed by the shutdown request to the core.
    fn serve(mut self, lines: &Receiver<io::Result<String>>, out: &mut impl Write) -> Result<()> {
        let outcome = self.event_loop(lines, out);

        if self.commands.send(CoreEvent::Shutdown).is_err() {
            debug!(target: "platform", "Core already stopped");
        }
        outcome
    }

    //--- Internal Helpers -------------------------------------------------

    fn event_loop(
        &mut self,
        lines: &Receiver<io::Result<String>>,
        out: &mut impl Write,
    ) -> Result<()> {
        loop {
            if let Some(sent_from) = self.awaiting.take() {
                if self.await_reply(&sent_from, out)? == LoopControl::Exit {
                    return Ok(());
                }
            }

            let input = select! {
                recv(self.snapshots) -> snapshot => PlatformInput::Snapshot(snapshot.ok()),
                recv(lines) -> line => PlatformInput::Line(line.ok()),
            };

            match input {
                PlatformInput::Snapshot(Some(snapshot)) => self.show(snapshot, out)?,
                PlatformInput::Snapshot(None) => {
                    warn!(target: "platform", "Snapshot channel closed, leaving");
                    return Ok(());
                }
                PlatformInput::Line(Some(line)) => {
                    let line = line?;
                    self.catch_up(out)?;
                    if self.handle_line(&line, out)? == LoopControl::Exit {
                        return Ok(());
                    }
                }
                PlatformInput::Line(None) => {
                    info!(target: "platform", "End of input");
                    return Ok(());
                }
            }
        }
    }

    /// Maps one typed line against the latest snapshot and acts on it.
    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<LoopControl> {
        match map_line(self.latest.stage, line) {
            Intent::Command(command) => {
                // Accepted commands always move the frame; rejected ones
                // are never published, so only the former are awaited.
                let expected = transitions::apply(&self.bank, &self.latest, &command);
                let accepted = expected != *self.latest;

                debug!(target: "platform", "Forwarding {:?}", command);
                if self.commands.send(CoreEvent::Command(command)).is_err() {
                    warn!(target: "platform", "Core stopped, leaving");
                    return Ok(LoopControl::Exit);
                }
                if accepted {
                    self.awaiting = Some(FrameKey::of(&self.latest));
                }
            }
            Intent::Status => self.presenter.status(&self.latest, out)?,
            Intent::Hint(hint) => {
                writeln!(out, "{}", hint)?;
                out.flush()?;
            }
            Intent::Quit => {
                info!(target: "platform", "Player quit");
                return Ok(LoopControl::Exit);
            }
        }

        Ok(LoopControl::Continue)
    }

    /// Blocks on snapshots until the frame differs from `sent_from`.
    ///
    /// Clock-only snapshots never change the stage or the active flag, so
    /// the awaited command stays acceptable and its frame will arrive.
    fn await_reply(&mut self, sent_from: &FrameKey, out: &mut impl Write) -> Result<LoopControl> {
        while FrameKey::of(&self.latest) == *sent_from {
            match self.snapshots.recv() {
                Ok(snapshot) => self.show(snapshot, out)?,
                Err(_) => {
                    warn!(target: "platform", "Snapshot channel closed, leaving");
                    return Ok(LoopControl::Exit);
                }
            }
        }
        Ok(LoopControl::Continue)
    }

    /// Presents every snapshot already queued.
    fn catch_up(&mut self, out: &mut impl Write) -> Result<()> {
        while let Ok(snapshot) = self.snapshots.try_recv() {
            self.show(snapshot, out)?;
        }
        Ok(())
    }

    fn show(&mut self, snapshot: Arc<GameState>, out: &mut impl Write) -> Result<()> {
        self.presenter.present(&snapshot, out)?;
        self.latest = snapshot;
        Ok(())
    }
}

/// Forwards stdin lines until EOF or the receiver hangs up.
fn spawn_line_reader() -> Receiver<io::Result<String>> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });

    rx
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::game::Command;
    use crate::core::CoreSystemsOrchestrator;

    fn bank() -> Arc<QuestionBank> {
        Arc::new(QuestionBank::analytics().unwrap())
    }

    fn playing(time_left: u32) -> GameState {
        GameState {
            stage: Stage::Playing,
            team_name: "Pandavas".to_string(),
            is_game_active: true,
            time_left,
            ..GameState::initial()
        }
    }

    fn queued_lines(lines: &[&str]) -> Receiver<io::Result<String>> {
        let (tx, rx) = unbounded();
        for line in lines {
            tx.send(Ok(line.to_string())).unwrap();
        }
        rx
    }

    //=====================================================================
    // Presenter Tests
    //=====================================================================

    #[test]
    fn new_frames_render_full_screen() {
        let mut presenter = Presenter::new(bank());
        let mut out = Vec::new();

        presenter.present(&GameState::initial(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("XIMERA"));
    }

    #[test]
    fn clock_only_changes_are_mostly_quiet() {
        let mut presenter = Presenter::new(bank());
        let mut out = Vec::new();
        presenter.present(&playing(1800), &mut out).unwrap();

        let mut out = Vec::new();
        presenter.present(&playing(1799), &mut out).unwrap();
        assert!(out.is_empty());

        presenter.present(&playing(1740), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("29:00"));
    }

    #[test]
    fn critical_clock_reports_every_ten_seconds() {
        assert!(clock_worth_showing(&playing(290)));
        assert!(!clock_worth_showing(&playing(291)));
        assert!(clock_worth_showing(&playing(600)));
        assert!(!clock_worth_showing(&playing(610)));
    }

    #[test]
    fn inactive_clock_is_never_reported() {
        let state = GameState { is_game_active: false, ..playing(600) };
        assert!(!clock_worth_showing(&state));
    }

    //=====================================================================
    // Input Handling Tests
    //=====================================================================

    /// The snapshot sender is returned so the channel stays open.
    fn platform() -> (Platform, Receiver<CoreEvent>, Sender<Arc<GameState>>) {
        let (cmd_tx, cmd_rx) = unbounded();
        let (snap_tx, snap_rx) = unbounded();
        (Platform::new(cmd_tx, snap_rx, bank()), cmd_rx, snap_tx)
    }

    #[test]
    fn lines_become_commands_for_the_latest_stage() {
        let (mut platform, commands, _snapshots) = platform();
        let mut out = Vec::new();

        let control = platform.handle_line("", &mut out).unwrap();
        assert_eq!(control, LoopControl::Continue);

        platform.latest = Arc::new(playing(1800));
        platform.handle_line("b", &mut out).unwrap();

        let forwarded: Vec<_> = commands.try_iter().collect();
        assert_eq!(
            forwarded,
            vec![
                CoreEvent::Command(Command::Start),
                CoreEvent::Command(Command::Answer(1)),
            ]
        );
    }

    #[test]
    fn only_acceptable_commands_await_a_reply() {
        let (mut platform, commands, _snapshots) = platform();
        let mut out = Vec::new();

        // Reset on the intro screen changes nothing, so no frame will come.
        platform.handle_line(":reset", &mut out).unwrap();
        assert_eq!(platform.awaiting, None);

        platform.handle_line("", &mut out).unwrap();
        assert_eq!(platform.awaiting, Some(FrameKey::of(&GameState::initial())));

        assert_eq!(commands.try_iter().count(), 2);
    }

    #[test]
    fn queued_snapshots_are_applied_before_mapping() {
        let (mut platform, commands, snapshots) = platform();
        let mut out = Vec::new();

        snapshots.send(Arc::new(playing(1800))).unwrap();
        platform.catch_up(&mut out).unwrap();
        platform.handle_line("c", &mut out).unwrap();

        assert_eq!(commands.try_recv().unwrap(), CoreEvent::Command(Command::Answer(2)));
    }

    #[test]
    fn reply_wait_skips_clock_only_snapshots() {
        let (mut platform, _commands, snapshots) = platform();
        let mut out = Vec::new();
        platform.latest = Arc::new(playing(1800));
        let sent_from = FrameKey::of(&platform.latest);

        snapshots.send(Arc::new(playing(1799))).unwrap();
        let answered = GameState { current_question_index: 1, ..playing(1799) };
        snapshots.send(Arc::new(answered.clone())).unwrap();

        let control = platform.await_reply(&sent_from, &mut out).unwrap();
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(*platform.latest, answered);
    }

    #[test]
    fn reply_wait_ends_when_the_core_is_gone() {
        let (mut platform, _commands, snapshots) = platform();
        drop(snapshots);
        let mut out = Vec::new();

        let sent_from = FrameKey::of(&GameState::initial());
        let control = platform.await_reply(&sent_from, &mut out).unwrap();
        assert_eq!(control, LoopControl::Exit);
    }

    #[test]
    fn hints_are_printed_not_sent() {
        let (mut platform, commands, _snapshots) = platform();
        let mut out = Vec::new();
        platform.latest = Arc::new(playing(1800));

        platform.handle_line("z", &mut out).unwrap();

        assert!(commands.try_recv().is_err());
        assert!(String::from_utf8(out).unwrap().contains("A-D"));
    }

    #[test]
    fn status_prints_the_hud() {
        let (mut platform, commands, _snapshots) = platform();
        let mut out = Vec::new();
        platform.latest = Arc::new(playing(95));

        platform.handle_line(":status", &mut out).unwrap();

        assert!(commands.try_recv().is_err());
        assert!(String::from_utf8(out).unwrap().contains("1:35"));
    }

    #[test]
    fn quit_exits_without_commands() {
        let (mut platform, commands, _snapshots) = platform();
        let mut out = Vec::new();

        let control = platform.handle_line(":quit", &mut out).unwrap();

        assert_eq!(control, LoopControl::Exit);
        assert!(commands.try_recv().is_err());
    }

    //=====================================================================
    // Session Tests
    //=====================================================================

    #[test]
    fn end_of_input_sends_shutdown() {
        let (platform, commands, _snapshots) = platform();
        let lines = queued_lines(&[":status"]);
        let mut out = Vec::new();

        platform.serve(&lines, &mut out).unwrap();

        let forwarded: Vec<_> = commands.try_iter().collect();
        assert_eq!(forwarded, vec![CoreEvent::Shutdown]);
    }

    #[test]
    fn quit_sends_shutdown() {
        let (platform, commands, _snapshots) = platform();
        let (tx, lines) = unbounded();
        tx.send(Ok(":quit".to_string())).unwrap();
        let mut out = Vec::new();

        // The line sender stays open, so only the quit ends the session.
        platform.serve(&lines, &mut out).unwrap();

        let forwarded: Vec<_> = commands.try_iter().collect();
        assert_eq!(forwarded, vec![CoreEvent::Shutdown]);
    }

    #[test]
    fn typed_ahead_lines_follow_the_core_through_each_stage() {
        let bank = bank();
        let mut core = CoreSystemsOrchestrator::new(Arc::clone(&bank), Duration::from_secs(60));
        let snapshots = core.subscribe();
        let (cmd_tx, cmd_rx) = unbounded();
        let core_thread = core.spawn_core_thread(cmd_rx);

        let mut platform = Platform::new(cmd_tx, snapshots, bank);
        let lines = queued_lines(&["", "Pandavas", "", "a"]);
        let mut out = Vec::new();

        platform.event_loop(&lines, &mut out).unwrap();

        let end = Arc::clone(&platform.latest);
        assert_eq!(end.stage, Stage::Playing);
        assert_eq!(end.team_name, "Pandavas");
        assert_eq!(end.current_question_index, 1);

        platform.serve(&queued_lines(&[]), &mut out).unwrap();
        core_thread.join().unwrap();
    }
}
