//! Main Execution Loop.
//!
//! This module implements one clock cycle of the pipeline. It performs the following:
//! 1. **Double Buffering:** Every stage reads the previous latch set and writes a fresh one.
//! 2. **Stage Ordering:** WB runs first so ID reads registers written this cycle.
//! 3. **Termination:** Decides when the pipeline halts, according to the drain policy.

use tracing::info;

use super::Cpu;
use crate::common::error::SimError;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Advances every stage by one cycle.
    ///
    /// Does nothing once the CPU has halted.
    ///
    /// # Errors
    ///
    /// Returns the first decode or memory error raised by a stage. The CPU
    /// state is left as the failing stage found it.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if !self.running {
            return Ok(());
        }

        let prev = self.latches;
        let mut cur = Latches::default();

        wb_stage(self, &prev.mem_wb);
        cur.if_id = fetch_stage(self, &prev.ex_mem);
        cur.id_ex = decode_stage(self, &prev, &mut cur.if_id)?;
        cur.ex_mem = execute_stage(self, &prev.id_ex);
        cur.mem_wb = mem_stage(self, &prev.ex_mem)?;

        self.stats.cycles += 1;
        self.latches = cur;

        if self.should_halt() {
            self.running = false;
            info!(
                cycles = self.stats.cycles,
                instructions = self.stats.instructions,
                "pipeline halted"
            );
        }
        Ok(())
    }

    /// Returns whether fetch has moved past the end of the program.
    pub fn fetch_exhausted(&self) -> bool {
        self.pc as usize >= self.inst_mem().len()
    }

    fn should_halt(&self) -> bool {
        if !self.fetch_exhausted() {
            return false;
        }
        !self.drain || (self.latches.is_empty() && self.bubbles == 0)
    }
}
