//! Writeback (WB) Stage.
//!
//! Runs first in every cycle, so a value written here is visible to the
//! register read in ID later in the same cycle.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;

/// Executes the writeback stage of the pipeline.
///
/// Writes the loaded word (`mem_to_reg`) or the ALU result to the destination
/// register when `reg_write` is set.
pub fn wb_stage(cpu: &mut Cpu, mem_wb: &MemWbEntry) {
    if !mem_wb.ctrl.reg_write {
        return;
    }
    let value = if mem_wb.ctrl.mem_to_reg {
        mem_wb.read_data
    } else {
        mem_wb.alu_result
    };
    trace!(reg = mem_wb.reg, value = value as i32, "WB");
    cpu.regs.write(mem_wb.reg, value);
}
