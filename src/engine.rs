//=========================================================================
// Ximera Engine
//
// Main entry point and coordinator for the game runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()────> [Terminal game]
//         │                          │
//         ├─ with_tick_interval()    └──spawn()──> EngineHandle
//         ├─ with_channel_capacity()                 ├─ send(Command)
//         └─ with_templates()                        ├─ subscribe()
//                                                    └─ shutdown()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, SendError, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::game::{Command, GameState};
use crate::core::platform_bridge::CoreEvent;
use crate::core::questions::{QuestionBank, QuestionTemplate, ANALYTICS_POOL};
use crate::core::CoreSystemsOrchestrator;
use crate::error::{Result, XimeraError};
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Tick interval**: 1 second (one game-clock second per tick)
/// - **Channel capacity**: 128 commands
/// - **Templates**: [`ANALYTICS_POOL`]
///
/// # Examples
///
/// ```no_run
/// use ximera::EngineBuilder;
///
/// EngineBuilder::new().build()?.run()?;
/// # Ok::<(), ximera::XimeraError>(())
/// ```
///
/// Compressed clock for rehearsals:
/// ```no_run
/// # use std::time::Duration;
/// # use ximera::EngineBuilder;
/// EngineBuilder::new()
///     .with_tick_interval(Duration::from_millis(100))
///     .build()?
///     .run()?;
/// # Ok::<(), ximera::XimeraError>(())
/// ```
pub struct EngineBuilder {
    tick_interval: Duration,
    channel_capacity: usize,
    templates: &'static [QuestionTemplate],
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            channel_capacity: 128,
            templates: ANALYTICS_POOL,
        }
    }

    /// Sets how much wall-clock time one game second takes.
    ///
    /// Default: 1 second
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be positive");
        self.tick_interval = interval;
        self
    }

    /// Sets the capacity of the adapter → core command channel.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the template pool questions are generated from.
    pub fn with_templates(mut self, templates: &'static [QuestionTemplate]) -> Self {
        self.templates = templates;
        self
    }

    /// Builds the engine, generating the question bank.
    ///
    /// # Errors
    ///
    /// Fails if the template pool cannot produce a valid bank; the game
    /// does not start with malformed layers.
    pub fn build(self) -> Result<Engine> {
        info!(
            "Building engine (tick: {:?}, channel: {}, templates: {})",
            self.tick_interval,
            self.channel_capacity,
            self.templates.len()
        );

        let bank = QuestionBank::generate(self.templates)?;

        Ok(Engine {
            bank: Arc::new(bank),
            tick_interval: self.tick_interval,
            channel_capacity: self.channel_capacity,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Ximera runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread)
///   │     ├─► GameStateMachine
///   │     ├─► TimerDriver (Timer Thread while playing)
///   │     └─► SnapshotBus
///   │
///   └─► Platform (Terminal adapter)
///
/// Communication: Command channel in, snapshot channels out
/// ```
pub struct Engine {
    bank: Arc<QuestionBank>,
    tick_interval: Duration,
    channel_capacity: usize,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    //--- Execution --------------------------------------------------------

    /// Starts the core thread without any presentation adapter.
    ///
    /// The returned handle is the adapter: it sends commands and
    /// subscribes to snapshots.
    pub fn spawn(self) -> EngineHandle {
        let (tx, rx) = bounded(self.channel_capacity);

        let mut orchestrator =
            CoreSystemsOrchestrator::new(Arc::clone(&self.bank), self.tick_interval);
        let snapshots = orchestrator.subscribe();
        let core = orchestrator.spawn_core_thread(rx);

        info!("Core logic thread spawned");

        EngineHandle {
            commands: tx,
            snapshots,
            bank: self.bank,
            core: Some(core),
        }
    }

    /// Runs the game in the terminal and blocks until the player quits.
    ///
    /// # Lifecycle
    ///
    /// 1. Spawns the core thread
    /// 2. Runs the terminal platform (blocks here)
    /// 3. On quit or end of input: platform sends shutdown → core exits
    /// 4. Joins the core thread
    pub fn run(self) -> Result<()> {
        info!("Starting engine runtime (tick: {:?})", self.tick_interval);

        let mut handle = self.spawn();
        let platform = Platform::new(
            handle.commands.clone(),
            handle.snapshots.clone(),
            Arc::clone(&handle.bank),
        );

        let outcome = platform.run();
        if let Err(e) = &outcome {
            error!("Platform error: {}", e);
        }

        handle.shutdown()?;
        info!("Engine shutdown complete");
        outcome
    }
}

//=== EngineHandle ========================================================

/// Live connection to a running core thread.
///
/// Dropping the handle shuts the core down.
pub struct EngineHandle {
    commands: Sender<CoreEvent>,
    snapshots: Receiver<Arc<GameState>>,
    bank: Arc<QuestionBank>,
    core: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    /// Sends a command to the core.
    ///
    /// # Errors
    ///
    /// Fails only if the core thread is gone.
    pub fn send(&self, command: Command) -> std::result::Result<(), SendError<CoreEvent>> {
        self.commands.send(CoreEvent::Command(command))
    }

    /// Snapshot stream created with the engine; starts with the initial one.
    pub fn snapshots(&self) -> &Receiver<Arc<GameState>> {
        &self.snapshots
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    /// Stops the core thread and waits for it to exit.
    ///
    /// # Errors
    ///
    /// Returns [`XimeraError::CoreThreadPanicked`] if the core panicked.
    pub fn shutdown(&mut self) -> Result<()> {
        let Some(core) = self.core.take() else {
            return Ok(());
        };

        // Already gone if the core exited on its own.
        let _ = self.commands.send(CoreEvent::Shutdown);

        match core.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
                Ok(())
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
                Err(XimeraError::CoreThreadPanicked)
            }
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
