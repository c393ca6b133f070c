//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side intake that serializes adapter commands and timer ticks.
//
// Architecture:
//   Receiver<CoreEvent> ─┐
//                        ├─ select! ─> next() ─> CoreInput
//   Receiver<TimerTick> ─┘
//
// Both sources arrive as discrete, non-overlapping inputs, so the game
// state has a single mutation point.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{select, Receiver};
use log::debug;

//=== Internal Dependencies ===============================================

use super::CoreEvent;
use crate::core::game::Command;
use crate::core::timer::TimerTick;

//=== CoreInput ===========================================================

/// The next thing the core loop has to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CoreInput {
    Command(Command),
    Tick(TimerTick),
    Exit,
}

//=== EventCollector ======================================================

/// Blocks until a command or a tick is available.
pub(crate) struct EventCollector {
    receiver: Receiver<CoreEvent>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<CoreEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next input.
    ///
    /// Returns [`CoreInput::Exit`] on shutdown or once every command
    /// sender has been dropped.
    pub(crate) fn next(&self, ticks: &Receiver<TimerTick>) -> CoreInput {
        select! {
            recv(self.receiver) -> event => match event {
                Ok(CoreEvent::Command(command)) => CoreInput::Command(command),
                Ok(CoreEvent::Shutdown) => CoreInput::Exit,
                Err(_) => {
                    debug!(target: "core", "Command channel disconnected");
                    CoreInput::Exit
                }
            },
            recv(ticks) -> tick => match tick {
                Ok(tick) => CoreInput::Tick(tick),
                // The driver owns a sender, so this only happens during teardown.
                Err(_) => CoreInput::Exit,
            },
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn forwards_commands() {
        let (tx, rx) = unbounded();
        let (_tick_tx, tick_rx) = unbounded::<TimerTick>();
        let collector = EventCollector::new(rx);

        tx.send(CoreEvent::Command(Command::Start)).unwrap();
        assert_eq!(collector.next(&tick_rx), CoreInput::Command(Command::Start));
    }

    #[test]
    fn forwards_ticks() {
        let (_tx, rx) = unbounded::<CoreEvent>();
        let (tick_tx, tick_rx) = unbounded();
        let collector = EventCollector::new(rx);

        tick_tx.send(TimerTick { generation: 3 }).unwrap();
        assert_eq!(
            collector.next(&tick_rx),
            CoreInput::Tick(TimerTick { generation: 3 })
        );
    }

    #[test]
    fn returns_exit_on_shutdown() {
        let (tx, rx) = unbounded();
        let (_tick_tx, tick_rx) = unbounded::<TimerTick>();
        let collector = EventCollector::new(rx);

        tx.send(CoreEvent::Shutdown).unwrap();
        assert_eq!(collector.next(&tick_rx), CoreInput::Exit);
    }

    #[test]
    fn returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<CoreEvent>();
        let (_tick_tx, tick_rx) = unbounded::<TimerTick>();
        let collector = EventCollector::new(rx);

        drop(tx);
        assert_eq!(collector.next(&tick_rx), CoreInput::Exit);
    }

    #[test]
    fn commands_convert_into_events() {
        let event: CoreEvent = Command::Answer(2).into();
        assert_eq!(event, CoreEvent::Command(Command::Answer(2)));
    }
}
