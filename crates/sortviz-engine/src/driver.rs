//! Lockstep (frame-paced) driver.
//!
//! [`LockstepDriver`] is what a render loop talks to. Each
//! [`tick()`](LockstepDriver::tick) applies pending [`DriverCommand`]s and
//! then advances the current engine by at most one step. The caller reads
//! [`snapshot()`](LockstepDriver::snapshot) to draw the frame.
//!
//! # Ownership model
//!
//! The driver owns the generator, the logical dataset, and the engine.
//! `snapshot()` borrows from the driver, so the borrow checker stops a
//! caller from ticking while it still holds a frame. Commands arrive over
//! a channel so an input thread never touches the engine.
//!
//! # Reshuffle
//!
//! There is no in-place reset. A reshuffle shuffles the persistent dataset
//! again (successive reshuffles compound)
//! and builds a brand new engine from a copy; the old engine is dropped.

use std::fmt;

use crossbeam_channel::{Receiver, Sender};
use sortviz_core::{StepEffect, Stepper, TickId};
use sortviz_rng::{entropy_seed, shuffle_with, Seed, SeedSource, XorShift32};
use tracing::{debug, info};

use crate::command::DriverCommand;
use crate::config::{ConfigError, DriverConfig};
use crate::merge::MergeSort;
use crate::metrics::DriverMetrics;

// Compile-time assertion: the driver can move to a render thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LockstepDriver>();
    }
};

// ── TickOutcome ─────────────────────────────────────────────────

/// What a single [`LockstepDriver::tick()`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine advanced by one step.
    Stepped {
        /// The tick that ran.
        tick: TickId,
        /// What the step did.
        effect: StepEffect,
    },
    /// Nothing changed: the engine was already done, or this tick only
    /// closed out the final segment pair.
    Idle {
        /// The tick that ran.
        tick: TickId,
    },
    /// A quit command has been received.
    Quit {
        /// The tick that observed it.
        tick: TickId,
    },
}

impl TickOutcome {
    /// The tick this outcome belongs to.
    pub fn tick(&self) -> TickId {
        match self {
            Self::Stepped { tick, .. } | Self::Idle { tick } | Self::Quit { tick } => *tick,
        }
    }

    /// Whether the frame loop should stop.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit { .. })
    }
}

// ── LockstepDriver ──────────────────────────────────────────────

/// Single-threaded driver that advances a sorting engine once per tick.
///
/// # Example
///
/// ```
/// use sortviz_engine::{DriverConfig, LockstepDriver};
///
/// let config = DriverConfig { len: 16, seed: Some(42), ..DriverConfig::default() };
/// let mut driver = LockstepDriver::new(config).unwrap();
/// while !driver.is_done() {
///     driver.tick();
/// }
/// assert_eq!(driver.snapshot(), (1..=16).collect::<Vec<u32>>().as_slice());
/// ```
pub struct LockstepDriver {
    config: DriverConfig,
    seed: Seed,
    rng: XorShift32,
    dataset: Vec<u32>,
    engine: Box<dyn Stepper<u32> + Send>,
    tick: TickId,
    quit: bool,
    completion_logged: bool,
    metrics: DriverMetrics,
    cmd_tx: Sender<DriverCommand>,
    cmd_rx: Receiver<DriverCommand>,
}

impl LockstepDriver {
    /// Validate `config`, seed the generator, shuffle `1..=len`, and build
    /// the first engine.
    pub fn new(config: DriverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = match config.seed {
            Some(value) => Seed::explicit(value),
            None => entropy_seed(),
        };
        let len = u32::try_from(config.len).map_err(|_| ConfigError::LengthOverflow {
            len: config.len,
        })?;

        let mut rng = seed.rng();
        let mut dataset: Vec<u32> = (1..=len).collect();
        shuffle_with(&mut dataset, &mut rng, config.draw);
        let engine = build_engine(dataset.clone());
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded();

        debug!(len, seed = seed.value, source = %seed.source, "driver constructed");

        Ok(Self {
            config,
            seed,
            rng,
            dataset,
            engine,
            tick: TickId::default(),
            quit: false,
            completion_logged: false,
            metrics: DriverMetrics::default(),
            cmd_tx,
            cmd_rx,
        })
    }

    /// Run one frame's worth of work.
    ///
    /// Drains the command channel, then calls `step()` once unless the
    /// engine is done or a quit has been received.
    pub fn tick(&mut self) -> TickOutcome {
        self.drain_commands();

        let tick = self.tick;
        self.tick = tick.next();
        self.metrics.ticks += 1;

        if self.quit {
            return TickOutcome::Quit { tick };
        }
        if self.engine.is_done() {
            self.metrics.idle_ticks += 1;
            return TickOutcome::Idle { tick };
        }

        let effect = self.engine.step();
        if self.engine.is_done() && !self.completion_logged {
            self.completion_logged = true;
            self.metrics.completions += 1;
            info!(%tick, len = self.engine.len(), "sort complete");
        }
        match effect {
            StepEffect::Loaded { .. } => self.metrics.loads += 1,
            StepEffect::Wrote { .. } => self.metrics.writes += 1,
            // Closing the final pair moves nothing.
            StepEffect::Idle => {
                self.metrics.idle_ticks += 1;
                return TickOutcome::Idle { tick };
            }
        }
        TickOutcome::Stepped { tick, effect }
    }

    /// Shuffle the dataset again and replace the engine.
    pub fn reshuffle(&mut self) {
        shuffle_with(&mut self.dataset, &mut self.rng, self.config.draw);
        self.engine = build_engine(self.dataset.clone());
        self.completion_logged = false;
        self.metrics.reshuffles += 1;
        info!(tick = %self.tick, reshuffles = self.metrics.reshuffles, "reshuffled; engine rebuilt");
    }

    /// Queue a command for the next tick.
    pub fn submit(&self, command: DriverCommand) {
        // The driver holds the receiver, so the channel cannot be disconnected.
        let _ = self.cmd_tx.send(command);
    }

    /// A sender other threads can use to deliver commands.
    pub fn command_sender(&self) -> Sender<DriverCommand> {
        self.cmd_tx.clone()
    }

    /// Current (possibly partially sorted) array.
    pub fn snapshot(&self) -> &[u32] {
        self.engine.snapshot()
    }

    /// Whether the current engine has finished.
    pub fn is_done(&self) -> bool {
        self.engine.is_done()
    }

    /// Whether a quit command has been applied.
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// The next tick to run (0 after construction).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The seed the generator started from.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// How the seed was obtained.
    pub fn seed_source(&self) -> SeedSource {
        self.seed.source
    }

    /// Tallies since construction.
    pub fn metrics(&self) -> &DriverMetrics {
        &self.metrics
    }

    /// The configuration this driver was built from.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.cmd_rx.try_recv() {
            debug!(%command, tick = %self.tick, "command received");
            match command {
                DriverCommand::Reshuffle => {
                    if !self.quit {
                        self.reshuffle();
                    }
                }
                DriverCommand::Quit => self.quit = true,
            }
        }
    }
}

impl fmt::Debug for LockstepDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockstepDriver")
            .field("current_tick", &self.tick)
            .field("seed", &self.seed)
            .field("len", &self.dataset.len())
            .field("done", &self.engine.is_done())
            .field("quit", &self.quit)
            .finish()
    }
}

fn build_engine(data: Vec<u32>) -> Box<dyn Stepper<u32> + Send> {
    Box::new(MergeSort::new(data))
}
