//! Instruction encoders.
//!
//! The inverse of [`decode_fields`](super::instruction::decode_fields): each
//! helper packs operands into a 32-bit word using the fixed field layout.
//! Out-of-range operands are masked to their field width.

use super::funct;
use super::instruction::{
    ADDR_MASK, FUNCT_MASK, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT,
    RT_SHIFT,
};
use super::opcodes::{OP_BEQ, OP_J, OP_LW, OP_RTYPE, OP_SW};

#[inline]
const fn reg(r: usize) -> u32 {
    (r as u32) & REG_MASK
}

/// Packs an R-format word (`opcode = 0`, `shamt = 0`).
pub const fn encode_r(funct: u32, rd: usize, rs: usize, rt: usize) -> u32 {
    (OP_RTYPE << OPCODE_SHIFT)
        | (reg(rs) << RS_SHIFT)
        | (reg(rt) << RT_SHIFT)
        | (reg(rd) << RD_SHIFT)
        | (funct & FUNCT_MASK)
}

/// Packs an I-format word. `imm` is truncated to 16 bits.
pub const fn encode_i(opcode: u32, rs: usize, rt: usize, imm: i32) -> u32 {
    ((opcode & OPCODE_MASK) << OPCODE_SHIFT)
        | (reg(rs) << RS_SHIFT)
        | (reg(rt) << RT_SHIFT)
        | ((imm as u32) & IMM_MASK)
}

/// Packs a J-format word. `addr` is the word index, truncated to 26 bits.
pub const fn encode_j(opcode: u32, addr: u32) -> u32 {
    ((opcode & OPCODE_MASK) << OPCODE_SHIFT) | (addr & ADDR_MASK)
}

/// `add rd, rs, rt`
pub const fn add(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::ADD, rd, rs, rt)
}

/// `sub rd, rs, rt`
pub const fn sub(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::SUB, rd, rs, rt)
}

/// `and rd, rs, rt`
pub const fn and(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::AND, rd, rs, rt)
}

/// `or rd, rs, rt`
pub const fn or(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::OR, rd, rs, rt)
}

/// `slt rd, rs, rt`
pub const fn slt(rd: usize, rs: usize, rt: usize) -> u32 {
    encode_r(funct::SLT, rd, rs, rt)
}

/// `lw rt, offset(rs)`
pub const fn lw(rt: usize, offset: i32, rs: usize) -> u32 {
    encode_i(OP_LW, rs, rt, offset)
}

/// `sw rt, offset(rs)`
pub const fn sw(rt: usize, offset: i32, rs: usize) -> u32 {
    encode_i(OP_SW, rs, rt, offset)
}

/// `beq rs, rt, offset`, with `offset` counted in words from the next instruction.
pub const fn beq(rs: usize, rt: usize, offset: i32) -> u32 {
    encode_i(OP_BEQ, rs, rt, offset)
}

/// `j addr`, with `addr` a word index into the current 256 MiB region.
pub const fn j(addr: u32) -> u32 {
    encode_j(OP_J, addr)
}

/// Flattens instruction words into a big-endian program image.
pub fn assemble(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}
