//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the game core, running on the logic thread.
//
// Responsibilities:
// - Own the game state machine, the snapshot bus and the timer driver
// - Receive adapter commands and timer ticks through one intake
// - Publish every accepted snapshot to subscribers
// - Keep the clock running exactly while a game is active
//
// Notes:
// The orchestrator is the single mutation point for game state. Adapters
// talk to it only through channels: commands in, snapshots out.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod constants;
pub mod game;
pub mod platform_bridge;
pub mod questions;
pub mod snapshot_bus;
pub mod timer;

//=== Standard Library Imports ============================================

use std::sync::Arc;
use std::thread;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Modules ====================================================

use game::{GameState, GameStateMachine, Outcome};
use platform_bridge::{CoreEvent, CoreInput, EventCollector};
use questions::QuestionBank;
use snapshot_bus::SnapshotBus;
use timer::TimerDriver;

//=== TickControl =========================================================
//
// Control flow for the core loop after handling one input.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CoreSystemsOrchestrator =============================================

pub(crate) struct CoreSystemsOrchestrator {
    machine: GameStateMachine,
    bus: SnapshotBus,
    timer: TimerDriver,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    /// Creates the core systems. Nothing runs until the thread is spawned.
    pub fn new(bank: Arc<QuestionBank>, tick_interval: Duration) -> Self {
        Self {
            machine: GameStateMachine::new(bank),
            bus: SnapshotBus::new(),
            timer: TimerDriver::new(tick_interval),
        }
    }

    /// Subscribes to snapshots. The initial snapshot is delivered as soon
    /// as the core thread starts.
    pub fn subscribe(&mut self) -> Receiver<Arc<GameState>> {
        self.bus.subscribe()
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Arc<GameState> {
        self.machine.snapshot()
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread. It blocks on the next command or tick,
    // applies it, and exits on shutdown or when every command sender is
    // dropped. The timer is stopped before the thread returns.
    //
    pub fn spawn_core_thread(self, receiver: Receiver<CoreEvent>) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            let mut core = self;
            let collector = EventCollector::new(receiver);

            core.publish_current();

            loop {
                let input = collector.next(core.timer.ticks());
                if core.handle(input) == TickControl::Exit {
                    break;
                }
            }

            core.timer.stop();
            info!(target: "core", "Core thread exiting.");
        })
    }

    //--- handle() ---------------------------------------------------------
    //
    // Applies one input and propagates its effects.
    //
    pub(crate) fn handle(&mut self, input: CoreInput) -> TickControl {
        match input {
            CoreInput::Command(command) => {
                let outcome = self.machine.dispatch(&command);
                self.propagate(outcome);
            }
            CoreInput::Tick(tick) => {
                if !self.timer.accepts(tick) {
                    debug!(target: "core", "Discarding stale tick from run {}", tick.generation);
                    return TickControl::Continue;
                }
                let outcome = self.machine.tick();
                self.propagate(outcome);
            }
            CoreInput::Exit => return TickControl::Exit,
        }

        TickControl::Continue
    }

    //--- Internal Helpers -------------------------------------------------

    fn propagate(&mut self, outcome: Outcome) {
        if !outcome.accepted {
            return;
        }

        // Stop the clock before anyone sees a terminal or reset snapshot.
        self.timer.sync(outcome.snapshot.is_game_active);
        self.bus.publish(&outcome.snapshot);
    }

    fn publish_current(&mut self) {
        let snapshot = self.machine.snapshot();
        self.timer.sync(snapshot.is_game_active);
        self.bus.publish(&snapshot);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use game::{Command, Stage};
    use timer::TimerTick;

    const WAIT: Duration = Duration::from_secs(2);

    fn orchestrator(interval: Duration) -> CoreSystemsOrchestrator {
        let bank = Arc::new(QuestionBank::analytics().unwrap());
        CoreSystemsOrchestrator::new(bank, interval)
    }

    fn into_play(core: &mut CoreSystemsOrchestrator) {
        core.handle(CoreInput::Command(Command::Start));
        core.handle(CoreInput::Command(Command::SubmitTeam("Pandavas".to_string())));
        core.handle(CoreInput::Command(Command::ConfirmRules));
    }

    //=====================================================================
    // Synchronous Handling
    //=====================================================================

    #[test]
    fn accepted_commands_are_published() {
        let mut core = orchestrator(Duration::from_secs(60));
        let rx = core.subscribe();

        into_play(&mut core);

        let stages: Vec<_> = rx.try_iter().map(|s| s.stage).collect();
        assert_eq!(stages, vec![Stage::TeamEntry, Stage::Rules, Stage::Playing]);
    }

    #[test]
    fn rejected_commands_are_not_published() {
        let mut core = orchestrator(Duration::from_secs(60));
        let rx = core.subscribe();

        core.handle(CoreInput::Command(Command::Answer(0)));
        core.handle(CoreInput::Command(Command::ConfirmRules));

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn timer_runs_only_while_active() {
        let mut core = orchestrator(Duration::from_secs(60));
        assert!(!core.timer.is_running());

        into_play(&mut core);
        assert!(core.timer.is_running());

        core.handle(CoreInput::Command(Command::Reset));
        assert!(!core.timer.is_running());
    }

    #[test]
    fn stale_ticks_are_discarded() {
        let mut core = orchestrator(Duration::from_secs(60));
        into_play(&mut core);

        let before = core.snapshot();
        core.handle(CoreInput::Tick(TimerTick { generation: 999 }));
        assert!(Arc::ptr_eq(&before, &core.snapshot()));
    }

    #[test]
    fn victory_stops_the_timer() {
        let mut core = orchestrator(Duration::from_secs(60));
        let bank = QuestionBank::analytics().unwrap();
        into_play(&mut core);

        while core.snapshot().stage == Stage::Playing {
            let state = core.snapshot();
            let correct = bank
                .question_at(state.current_layer, state.current_question_index)
                .unwrap()
                .correct_index;
            core.handle(CoreInput::Command(Command::Answer(correct)));
        }

        assert_eq!(core.snapshot().stage, Stage::Victory);
        assert_eq!(core.snapshot().score, 700);
        assert!(!core.timer.is_running());
    }

    #[test]
    fn exit_input_stops_the_loop() {
        let mut core = orchestrator(Duration::from_secs(60));
        assert_eq!(core.handle(CoreInput::Exit), TickControl::Exit);
    }

    //=====================================================================
    // Threaded Loop
    //=====================================================================

    #[test]
    fn core_thread_publishes_initial_snapshot_and_ticks() {
        let mut core = orchestrator(Duration::from_millis(2));
        let snapshots = core.subscribe();
        let (tx, rx) = unbounded();
        let handle = core.spawn_core_thread(rx);

        let initial = snapshots.recv_timeout(WAIT).unwrap();
        assert_eq!(*initial, GameState::initial());

        tx.send(CoreEvent::Command(Command::Start)).unwrap();
        tx.send(CoreEvent::Command(Command::SubmitTeam("Pandavas".to_string()))).unwrap();
        tx.send(CoreEvent::Command(Command::ConfirmRules)).unwrap();

        let ticked = loop {
            let snapshot = snapshots.recv_timeout(WAIT).unwrap();
            if snapshot.time_left < initial.time_left {
                break snapshot;
            }
        };
        assert_eq!(ticked.stage, Stage::Playing);

        tx.send(CoreEvent::Command(Command::Reset)).unwrap();
        let reset = loop {
            let snapshot = snapshots.recv_timeout(WAIT).unwrap();
            if snapshot.stage == Stage::Intro {
                break snapshot;
            }
        };
        assert_eq!(*reset, GameState::initial());

        tx.send(CoreEvent::Shutdown).unwrap();
        handle.join().unwrap();

        // Nothing may follow the reset snapshot.
        assert!(snapshots.try_iter().all(|s| *s == GameState::initial()));
    }

    #[test]
    fn core_thread_exits_when_senders_drop() {
        let core = orchestrator(Duration::from_millis(5));
        let (tx, rx) = unbounded::<CoreEvent>();
        let handle = core.spawn_core_thread(rx);

        drop(tx);
        handle.join().unwrap();
    }
}
