//! Hazard Detection Unit.
//!
//! The datapath has no forwarding paths: operands are read from the register
//! file in ID, and WB writes it earlier in the same cycle. This module provides:
//! 1. **Data Hazards:** Read-after-write checks of the IF/ID word against destinations in flight.
//! 2. **Control Hazards:** A one-bubble stall for `beq` and `j` until EX resolves the target.
//! 3. **Operand Sets:** The registers each instruction format actually reads.

use crate::common::constants::NOP;
use crate::core::pipeline::latches::Latches;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::{OP_BEQ, OP_J, OP_LW};

/// Kind of read-after-write hazard found for the IF/ID instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataHazard {
    /// A load in ID/EX targets a source register.
    LoadUse,
    /// A register-writing ALU instruction in ID/EX targets a source register.
    IdEx,
    /// A register-writing instruction in EX/MEM targets a source register.
    ExMem,
    /// A register-writing instruction in MEM/WB targets a source register.
    MemWb,
}

impl DataHazard {
    /// Number of bubbles needed to resolve the hazard.
    pub const fn bubbles(self) -> u8 {
        match self {
            Self::LoadUse | Self::IdEx | Self::ExMem => 2,
            Self::MemWb => 1,
        }
    }
}

/// Returns the source registers `word` reads, by instruction format.
///
/// R-format, `sw` and `beq` read `rs` and `rt`; `lw` reads only `rs`; `j` and
/// the no-op read nothing. Unknown opcodes are treated as reading `rs` and `rt`.
pub fn source_registers(word: u32) -> [Option<usize>; 2] {
    if word == NOP {
        return [None, None];
    }
    match word.opcode() {
        OP_J => [None, None],
        OP_LW => [Some(word.rs()), None],
        _ => [Some(word.rs()), Some(word.rt())],
    }
}

/// Checks the IF/ID instruction of `prev` against destinations in flight.
///
/// When several rules match, the one needing the most bubbles wins. With
/// `hardwire_zero` set, `$0` is never treated as a destination.
///
/// # Returns
///
/// `None` if the instruction can read its operands this cycle.
pub fn data_hazard(prev: &Latches, hardwire_zero: bool) -> Option<DataHazard> {
    let sources = source_registers(prev.if_id.inst);
    let reads = |dest: usize| {
        !(hardwire_zero && dest == 0) && sources.iter().flatten().any(|&src| src == dest)
    };

    let id_ex = &prev.id_ex;
    let id_ex_dest = if id_ex.ctrl.reg_dst { id_ex.rd } else { id_ex.rt };

    if id_ex.ctrl.mem_read && reads(id_ex.rt) {
        Some(DataHazard::LoadUse)
    } else if id_ex.ctrl.reg_write && reads(id_ex_dest) {
        Some(DataHazard::IdEx)
    } else if prev.ex_mem.ctrl.wb.reg_write && reads(prev.ex_mem.reg) {
        Some(DataHazard::ExMem)
    } else if prev.mem_wb.ctrl.reg_write && reads(prev.mem_wb.reg) {
        Some(DataHazard::MemWb)
    } else {
        None
    }
}

/// Bubbles needed because `word` changes control flow.
pub fn control_hazard(word: u32) -> u8 {
    if word == NOP {
        return 0;
    }
    match word.opcode() {
        OP_BEQ | OP_J => 1,
        _ => 0,
    }
}
