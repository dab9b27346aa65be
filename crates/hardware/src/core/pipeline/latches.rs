//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four latch groups that sit between the five stages:
//! IF → IF/ID → ID → ID/EX → EX → EX/MEM → MEM → MEM/WB → WB.
//!
//! 1. **Value Semantics:** Each entry is a plain bundle replaced wholesale every cycle.
//! 2. **Narrowing Control:** Each latch carries only the control lines its consumer needs.
//! 3. **Double Buffering:** [`Latches`] is held twice per cycle, read-only previous and write-only current.

use crate::common::constants::NOP;
use crate::core::pipeline::signals::{ControlSignals, MemSignals, WbSignals};

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Address of the next sequential instruction (fetch address + 4).
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Whether this fetch incremented the instruction count.
    pub counted: bool,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Address of the next sequential instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index; destination for I-format.
    pub rt: usize,
    /// Destination register index for R-format.
    pub rd: usize,
    /// Value read from `rs`.
    pub rs_val: u32,
    /// Value read from `rt`.
    pub rt_val: u32,
    /// Sign-extended 16-bit immediate.
    pub imm: i32,
    /// 26-bit jump target field.
    pub addr: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Address of the next sequential instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register chosen by the `reg_dst` mux.
    pub reg: usize,
    /// ALU output; the effective address for loads and stores.
    pub alu_result: u32,
    /// ALU result was zero.
    pub zero: bool,
    /// Value of `rt`, written to memory by stores.
    pub store_data: u32,
    /// Taken-branch target.
    pub branch_addr: u32,
    /// Jump target.
    pub jump_addr: u32,
    /// Memory, branch and write-back control lines.
    pub ctrl: MemSignals,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register.
    pub reg: usize,
    /// ALU output.
    pub alu_result: u32,
    /// Word loaded from data memory.
    pub read_data: u32,
    /// Write-back control lines.
    pub ctrl: WbSignals,
}

/// One complete set of pipeline latches.
///
/// `Default` is an empty pipeline: every latch holds the no-op word.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Latches {
    /// IF/ID latch.
    pub if_id: IfIdEntry,
    /// ID/EX latch.
    pub id_ex: IdExEntry,
    /// EX/MEM latch.
    pub ex_mem: ExMemEntry,
    /// MEM/WB latch.
    pub mem_wb: MemWbEntry,
}

impl Latches {
    /// Returns `true` when no latch holds a real instruction.
    pub const fn is_empty(&self) -> bool {
        self.if_id.inst == NOP
            && self.id_ex.inst == NOP
            && self.ex_mem.inst == NOP
            && self.mem_wb.inst == NOP
    }
}
