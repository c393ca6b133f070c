//=========================================================================
// Timer Driver
//=========================================================================
//
// Periodic tick source for the game clock.
//
// Architecture:
// ```text
//   Orchestrator                       Timer Thread (one per run)
//   ┌──────────────────┐               ┌─────────────────────────┐
//   │ sync(active)     │──start()────> │ select! {               │
//   │                  │               │   ticker  -> send tick  │
//   │ accepts(tick)    │<──TimerTick───│   stop    -> exit       │
//   │                  │──stop()─────> │ }                       │
//   └──────────────────┘  (drop stop)  └─────────────────────────┘
// ```
//
// Each run is numbered. Ticks carry the number of the run that produced
// them, so ticks still queued after a stop are recognized as stale.
//
// The driver knows nothing about the game. The orchestrator tells it
// whether the clock should be running.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, unbounded, Receiver, Sender};
use log::{debug, warn};

//=== TimerTick ===========================================================

/// One elapsed interval, tagged with the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub generation: u64,
}

//=== TimerDriver =========================================================

struct RunningTimer {
    generation: u64,
    stop: Sender<()>,
    handle: thread::JoinHandle<()>,
}

/// Starts and stops the ticking thread on demand.
pub struct TimerDriver {
    interval: Duration,
    tick_tx: Sender<TimerTick>,
    tick_rx: Receiver<TimerTick>,
    running: Option<RunningTimer>,
    next_generation: u64,
}

impl TimerDriver {
    //--- Construction -----------------------------------------------------

    /// Creates a stopped driver that will tick every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be positive");

        let (tick_tx, tick_rx) = unbounded();
        Self {
            interval,
            tick_tx,
            tick_rx,
            running: None,
            next_generation: 0,
        }
    }

    //--- Control ----------------------------------------------------------

    /// Starts or stops the clock so that it runs exactly while `active`.
    pub fn sync(&mut self, active: bool) {
        match (active, self.is_running()) {
            (true, false) => self.start(),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    /// Spawns a new ticking run. Does nothing if one is already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let generation = self.next_generation;
        self.next_generation += 1;

        let (stop_tx, stop_rx) = bounded::<()>(0);
        let tick_tx = self.tick_tx.clone();
        let interval = self.interval;

        let handle = thread::spawn(move || {
            let ticker = tick(interval);
            loop {
                select! {
                    recv(ticker) -> _ => {
                        if tick_tx.send(TimerTick { generation }).is_err() {
                            break;
                        }
                    }
                    recv(stop_rx) -> _ => break,
                }
            }
            debug!(target: "timer", "Timer run {} finished", generation);
        });

        debug!(target: "timer", "Timer run {} started ({:?} interval)", generation, self.interval);

        self.running = Some(RunningTimer {
            generation,
            stop: stop_tx,
            handle,
        });
    }

    /// Stops the current run and waits for its thread to exit.
    pub fn stop(&mut self) {
        let Some(run) = self.running.take() else {
            return;
        };

        // Disconnecting the stop channel wakes the timer thread.
        drop(run.stop);
        if run.handle.join().is_err() {
            warn!(target: "timer", "Timer run {} panicked", run.generation);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Channel the ticks arrive on.
    pub fn ticks(&self) -> &Receiver<TimerTick> {
        &self.tick_rx
    }

    /// True if `tick` came from the run that is currently active.
    pub fn accepts(&self, tick: TimerTick) -> bool {
        self.running
            .as_ref()
            .is_some_and(|run| run.generation == tick.generation)
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: Duration = Duration::from_millis(2);
    const WAIT: Duration = Duration::from_secs(2);

    #[test]
    #[should_panic(expected = "Tick interval must be positive")]
    fn zero_interval_panics() {
        TimerDriver::new(Duration::ZERO);
    }

    #[test]
    fn new_driver_is_stopped() {
        let driver = TimerDriver::new(FAST);
        assert!(!driver.is_running());
        assert!(driver.ticks().is_empty());
    }

    #[test]
    fn running_driver_emits_ticks() {
        let mut driver = TimerDriver::new(FAST);
        driver.start();

        let first = driver.ticks().recv_timeout(WAIT).unwrap();
        assert!(driver.accepts(first));
        driver.ticks().recv_timeout(WAIT).unwrap();

        driver.stop();
        assert!(!driver.is_running());
    }

    #[test]
    fn no_ticks_after_stop() {
        let mut driver = TimerDriver::new(FAST);
        driver.start();
        driver.ticks().recv_timeout(WAIT).unwrap();
        driver.stop();

        // Drain anything queued before the stop took effect.
        while driver.ticks().try_recv().is_ok() {}

        thread::sleep(FAST * 10);
        assert!(driver.ticks().try_recv().is_err());
    }

    #[test]
    fn stale_generation_is_rejected() {
        let mut driver = TimerDriver::new(FAST);
        driver.start();
        let old = driver.ticks().recv_timeout(WAIT).unwrap();
        driver.stop();
        assert!(!driver.accepts(old));

        driver.start();
        assert!(!driver.accepts(old));

        let fresh = loop {
            let tick = driver.ticks().recv_timeout(WAIT).unwrap();
            if tick.generation != old.generation {
                break tick;
            }
        };
        assert!(driver.accepts(fresh));
        assert!(fresh.generation > old.generation);
    }

    #[test]
    fn sync_follows_active_flag() {
        let mut driver = TimerDriver::new(FAST);

        driver.sync(true);
        assert!(driver.is_running());

        driver.sync(true);
        assert!(driver.is_running());

        driver.sync(false);
        assert!(!driver.is_running());

        driver.sync(false);
        assert!(!driver.is_running());
    }

    #[test]
    fn start_twice_keeps_one_run() {
        let mut driver = TimerDriver::new(FAST);
        driver.start();
        let tick = driver.ticks().recv_timeout(WAIT).unwrap();

        driver.start();
        assert!(driver.accepts(tick));
    }
}
