//! Memory Access (MEM) Stage.
//!
//! Loads and stores a word of data memory at the ALU result address.
//! Out-of-bounds and misaligned accesses abort the run.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::isa::codec::{read_word, write_word};

/// Executes the memory access stage of the pipeline.
///
/// # Errors
///
/// Returns [`SimError::MisalignedAccess`] or [`SimError::MemoryOutOfBounds`]
/// for a bad load or store address.
pub fn mem_stage(cpu: &mut Cpu, ex_mem: &ExMemEntry) -> Result<MemWbEntry, SimError> {
    let ctrl = ex_mem.ctrl;
    let addr = ex_mem.alu_result;
    let mut read_data = 0;

    if ctrl.mem_read {
        read_data = read_word(addr, &cpu.data_mem)? as u32;
        cpu.stats.mem_reads += 1;
        trace!(addr, value = read_data as i32, "MEM load");
    }
    if ctrl.mem_write {
        write_word(addr, ex_mem.store_data as i32, &mut cpu.data_mem)?;
        cpu.stats.mem_writes += 1;
        trace!(addr, value = ex_mem.store_data as i32, "MEM store");
    }

    Ok(MemWbEntry {
        inst: ex_mem.inst,
        reg: ex_mem.reg,
        alu_result: ex_mem.alu_result,
        read_data,
        ctrl: ctrl.wb,
    })
}
