//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It applies any branch or jump redirect resolved in the previous cycle,
//! fetches the word at the program counter, and injects a bubble instead
//! while a stall is pending.

use tracing::{debug, trace};

use crate::common::constants::{NOP, WORD_BYTES};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, IfIdEntry};
use crate::isa::codec;
use crate::isa::disasm::decode_to_text;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `ex_mem` - The EX/MEM latch from the previous cycle, holding any resolved redirect
///
/// # Behavior
///
/// - With a bubble pending, emits a no-op and leaves the PC unchanged
/// - Otherwise redirects to the branch target (taken `beq`) or jump target (`j`)
/// - Fetches the word at the PC, advances the PC by 4, and latches the new PC
/// - Only fetches inside the program count toward the instruction total
pub fn fetch_stage(cpu: &mut Cpu, ex_mem: &ExMemEntry) -> IfIdEntry {
    if cpu.bubbles > 0 {
        cpu.bubbles -= 1;
        cpu.stats.bubbles += 1;
        trace!(pc = cpu.pc, remaining = cpu.bubbles, "IF  bubble");
        return IfIdEntry {
            pc: cpu.pc,
            inst: NOP,
            counted: false,
        };
    }

    if ex_mem.ctrl.branch && ex_mem.zero {
        debug!(from = cpu.pc, to = ex_mem.branch_addr, "branch taken");
        cpu.pc = ex_mem.branch_addr;
        cpu.stats.branches_taken += 1;
    } else if ex_mem.ctrl.jump {
        debug!(from = cpu.pc, to = ex_mem.jump_addr, "jump");
        cpu.pc = ex_mem.jump_addr;
        cpu.stats.jumps += 1;
    }

    let fetch_pc = cpu.pc;
    let inst = codec::fetch(fetch_pc, cpu.inst_mem());
    let counted = (fetch_pc as usize) < cpu.inst_mem().len();
    if counted {
        cpu.stats.instructions += 1;
    }
    cpu.pc = fetch_pc.wrapping_add(WORD_BYTES);

    trace!(
        pc = fetch_pc,
        word = format_args!("{inst:#010x}"),
        text = %decode_to_text(inst),
        "IF"
    );

    IfIdEntry {
        pc: cpu.pc,
        inst,
        counted,
    }
}
