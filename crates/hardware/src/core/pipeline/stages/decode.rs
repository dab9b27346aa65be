//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It performs:
//! 1. **Hazard Detection:** Checks the incoming word against destinations still in flight.
//! 2. **Cancellation:** Turns a stalled instruction into a bubble so it is re-fetched later.
//! 3. **Control:** Derives control signals and requests a stall for `beq` and `j`.
//! 4. **Operand Read:** Reads `rs`/`rt` and sign-extends the immediate.
//!
//! IF runs before ID within a cycle, so whenever ID cancels or stalls it also
//! squashes the word IF has just fetched. No wrong-path or duplicate
//! instruction enters the pipeline, and there is no delay slot.

use tracing::{debug, trace};

use crate::common::constants::{NOP, WORD_BYTES};
use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::control::control;
use crate::core::pipeline::hazards::{control_hazard, data_hazard};
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry, Latches};
use crate::isa::codec::sign_extend;
use crate::isa::disasm::decode_to_text;
use crate::isa::instruction::decode_fields;

/// Discards the word IF fetched this cycle and reverses its instruction count.
fn squash_fetch(cpu: &mut Cpu, fetched: &mut IfIdEntry) {
    if fetched.counted {
        cpu.stats.instructions = cpu.stats.instructions.saturating_sub(1);
    }
    *fetched = IfIdEntry::default();
}

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `prev` - All latches from the previous cycle; the IF/ID entry is decoded
/// * `fetched` - The IF/ID entry IF produced this cycle, squashed on a stall
///
/// # Returns
///
/// The ID/EX entry for this cycle.
///
/// # Errors
///
/// Returns [`SimError::Decode`] when the word matches no instruction.
pub fn decode_stage(
    cpu: &mut Cpu,
    prev: &Latches,
    fetched: &mut IfIdEntry,
) -> Result<IdExEntry, SimError> {
    let mut entry = prev.if_id;

    if let Some(hazard) = data_hazard(prev, cpu.regs.hardwire_zero()) {
        let bubbles = hazard.bubbles();
        debug!(?hazard, bubbles, pc = entry.pc.wrapping_sub(WORD_BYTES), "data hazard");
        cpu.bubbles = cpu.bubbles.max(bubbles);
        cpu.stats.stalls_data += u64::from(bubbles);
    }

    if cpu.bubbles > 0 && entry.inst != NOP {
        entry.pc = entry.pc.wrapping_sub(WORD_BYTES);
        debug!(pc = entry.pc, word = format_args!("{:#010x}", entry.inst), "cancel in ID");
        cpu.pc = entry.pc;
        if entry.counted {
            cpu.stats.instructions = cpu.stats.instructions.saturating_sub(1);
        }
        entry.inst = NOP;
        entry.counted = false;
        squash_fetch(cpu, fetched);
        cpu.bubbles -= 1;
        cpu.stats.bubbles += 1;
    }

    let stall = control_hazard(entry.inst);
    if stall > 0 {
        debug!(pc = entry.pc.wrapping_sub(WORD_BYTES), "control hazard");
        cpu.bubbles = cpu.bubbles.max(stall);
        cpu.stats.stalls_control += u64::from(stall);
        squash_fetch(cpu, fetched);
        cpu.pc = entry.pc;
    }

    let ctrl = control(entry.inst).map_err(|reason| SimError::Decode {
        pc: entry.pc.wrapping_sub(WORD_BYTES),
        word: entry.inst,
        reason,
    })?;
    let fields = decode_fields(entry.inst);

    trace!(
        pc = entry.pc.wrapping_sub(WORD_BYTES),
        text = %decode_to_text(entry.inst),
        "ID"
    );

    Ok(IdExEntry {
        pc: entry.pc,
        inst: entry.inst,
        rs: fields.rs,
        rt: fields.rt,
        rd: fields.rd,
        rs_val: cpu.regs.read(fields.rs),
        rt_val: cpu.regs.read(fields.rt),
        imm: sign_extend(fields.imm16, 16),
        addr: fields.addr26,
        ctrl,
    })
}
