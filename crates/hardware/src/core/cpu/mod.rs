//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, the program counter, and both memories.
//! 2. **Pipeline Control:** Holds the latch snapshot produced by the previous cycle.
//! 3. **Stall Bookkeeping:** Tracks pending bubbles and the running flag.

/// Per-cycle pipeline orchestration.
pub mod execution;

use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::pipeline::latches::Latches;
use crate::stats::SimStats;

/// Main CPU structure containing all architectural and pipeline state.
#[derive(Debug)]
pub struct Cpu {
    /// General-Purpose Registers.
    pub regs: Gpr,
    /// Program Counter: byte address of the next fetch.
    pub pc: u32,
    /// Data memory.
    pub data_mem: Vec<u8>,
    /// Latches produced by the most recent cycle.
    pub latches: Latches,
    /// Cycles for which IF must inject a no-op instead of fetching.
    pub bubbles: u8,
    /// False once the pipeline has halted; never set back.
    pub running: bool,
    /// Performance statistics.
    pub stats: SimStats,
    /// Whether in-flight instructions drain before halting.
    pub drain: bool,
    inst_mem: Vec<u8>,
}

impl Cpu {
    /// Creates a CPU with a loaded program and a prepared data memory.
    ///
    /// # Arguments
    ///
    /// * `inst_mem` - Program image (big-endian instruction words).
    /// * `data_mem` - Data memory, already sized and seeded.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A CPU at `pc = 0` with an empty pipeline. An empty program starts halted.
    pub fn new(inst_mem: Vec<u8>, data_mem: Vec<u8>, config: &Config) -> Self {
        Self {
            regs: Gpr::new(config.pipeline.hardwire_zero),
            pc: 0,
            data_mem,
            latches: Latches::default(),
            bubbles: 0,
            running: !inst_mem.is_empty(),
            stats: SimStats::default(),
            drain: config.pipeline.drain,
            inst_mem,
        }
    }

    /// Program image. Immutable after load.
    pub fn inst_mem(&self) -> &[u8] {
        &self.inst_mem
    }
}
