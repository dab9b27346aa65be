//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline.
//! It selects the ALU operands, runs ALU control and the ALU, computes the
//! branch and jump targets, and picks the destination register.

use tracing::trace;

use crate::common::constants::JUMP_REGION_MASK;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::units::alu::{Alu, alu_control};
use crate::isa::instruction::FUNCT_MASK;

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state (statistics only)
/// * `id_ex` - The ID/EX latch from the previous cycle
///
/// # Returns
///
/// The EX/MEM entry for this cycle. The branch target is `pc + (imm << 2)`,
/// where `pc` already points past the branch. The jump target keeps the top
/// four bits of `pc`.
pub fn execute_stage(cpu: &mut Cpu, id_ex: &IdExEntry) -> ExMemEntry {
    let ctrl = id_ex.ctrl;
    let operand2 = if ctrl.alu_src {
        id_ex.imm as u32
    } else {
        id_ex.rt_val
    };
    let funct = (id_ex.imm as u32) & FUNCT_MASK;

    let alu_result = alu_control(ctrl.alu_op, funct).map_or(0, |op| {
        cpu.stats.record_alu(op);
        Alu::execute(op, id_ex.rs_val, operand2)
    });

    let reg = if ctrl.reg_dst { id_ex.rd } else { id_ex.rt };

    trace!(pc = id_ex.pc, alu_result, reg, "EX");

    ExMemEntry {
        pc: id_ex.pc,
        inst: id_ex.inst,
        reg,
        alu_result,
        zero: alu_result == 0,
        store_data: id_ex.rt_val,
        branch_addr: id_ex.pc.wrapping_add((id_ex.imm << 2) as u32),
        jump_addr: (id_ex.pc & JUMP_REGION_MASK) | (id_ex.addr << 2),
        ctrl: ctrl.mem(),
    }
}
