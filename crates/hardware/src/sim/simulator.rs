//! Simulator: owns the CPU and the run configuration.
//!
//! The simulator is a pure state machine stepped by a single caller. It
//! performs:
//! 1. **Construction:** Validates the config and prepares both memories.
//! 2. **Stepping:** Advances one cycle at a time, enforcing the cycle limit.
//! 3. **Observation:** Hands a [`Snapshot`] to an [`Observer`] after every cycle.

use std::ops::ControlFlow;
use std::path::Path;

use tracing::debug;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::disasm::decode_to_text;
use crate::sim::loader::{load_binary, seed_data_memory};
use crate::sim::snapshot::{Observer, Snapshot};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The pipeline halted on its own.
    Completed,
    /// The observer asked to stop.
    Stopped,
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural and pipeline state.
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Creates a simulator for `program`, with data memory optionally seeded.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] for an invalid config and
    /// [`SimError::SeedTooLarge`] if `seed` does not fit in data memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::config::Config;
    /// use mipsim_core::isa::encode::{add, assemble};
    /// use mipsim_core::sim::Simulator;
    ///
    /// let mut sim = Simulator::new(assemble(&[add(1, 2, 3)]), None, &Config::default()).unwrap();
    /// sim.cpu.regs.write(2, 5);
    /// sim.cpu.regs.write(3, 7);
    /// sim.run().unwrap();
    /// assert_eq!(sim.cpu.regs.read(1), 12);
    /// ```
    pub fn new(program: Vec<u8>, seed: Option<&[u8]>, config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let data_mem = seed_data_memory(config.memory.data_mem_size, seed)?;
        Ok(Self {
            cpu: Cpu::new(program, data_mem, config),
            config: config.clone(),
        })
    }

    /// Loads the program (and optional data seed) from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] for an unreadable file, plus the errors of [`Simulator::new`].
    pub fn from_files(program: &Path, data: Option<&Path>, config: &Config) -> Result<Self, SimError> {
        let program = load_binary(program)?;
        let seed = data.map(load_binary).transpose()?;
        Self::new(program, seed.as_deref(), config)
    }

    /// The configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Whether another cycle will run.
    pub const fn is_running(&self) -> bool {
        self.cpu.running
    }

    /// Borrows the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(&self.cpu)
    }

    /// Advances one cycle.
    ///
    /// # Returns
    ///
    /// Whether the pipeline is still running afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] once `max_cycles` cycles have run
    /// without halting, and any decode or memory error from the cycle.
    pub fn step(&mut self) -> Result<bool, SimError> {
        if !self.cpu.running {
            return Ok(false);
        }
        let cycles = self.cpu.stats.cycles;
        if let Some(limit) = self.config.general.max_cycles.filter(|&l| cycles >= l) {
            return Err(SimError::CycleLimit { limit });
        }

        self.cpu.tick()?;

        if self.config.general.trace {
            let l = &self.cpu.latches;
            debug!(
                cycle = self.cpu.stats.cycles,
                pc = self.cpu.pc,
                bubbles = self.cpu.bubbles,
                if_id = %decode_to_text(l.if_id.inst),
                id_ex = %decode_to_text(l.id_ex.inst),
                ex_mem = %decode_to_text(l.ex_mem.inst),
                mem_wb = %decode_to_text(l.mem_wb.inst),
                "cycle"
            );
        }
        Ok(self.cpu.running)
    }

    /// Runs until the pipeline halts or `observer` breaks.
    ///
    /// The observer sees every cycle, including the one that halts the pipeline.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Simulator::step`].
    pub fn run_with(&mut self, observer: &mut dyn Observer) -> Result<RunOutcome, SimError> {
        while self.cpu.running {
            let _ = self.step()?;
            if observer.on_cycle(&self.snapshot()).is_break() {
                return Ok(RunOutcome::Stopped);
            }
        }
        Ok(RunOutcome::Completed)
    }

    /// Runs to completion without observation.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Simulator::step`].
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        self.run_with(&mut |_: &Snapshot<'_>| ControlFlow::Continue(()))
    }
}
