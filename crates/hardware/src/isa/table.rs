//! Static instruction catalog.
//!
//! Maps each supported mnemonic to its encoding format, opcode, funct and
//! operand count. R-format entries are keyed by `(opcode = 0, funct)`; I- and
//! J-format entries are keyed by opcode alone.

use super::funct;
use super::instruction::InstructionBits;
use super::opcodes::{OP_BEQ, OP_J, OP_LW, OP_RTYPE, OP_SW};
use crate::common::constants::NOP;

/// Encoding format of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register format: `opcode rs rt rd shamt funct`.
    R,
    /// Immediate format: `opcode rs rt imm16`.
    I,
    /// Jump format: `opcode addr26`.
    J,
}

/// A single table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionSpec {
    /// Lower-case assembler mnemonic.
    pub name: &'static str,
    /// Encoding format.
    pub format: Format,
    /// Major opcode (bits 31-26).
    pub opcode: u32,
    /// Function code for R-format entries.
    pub funct: Option<u32>,
    /// Number of assembler operands.
    pub operand_count: u8,
}

impl InstructionSpec {
    const fn r(name: &'static str, funct: u32) -> Self {
        Self {
            name,
            format: Format::R,
            opcode: OP_RTYPE,
            funct: Some(funct),
            operand_count: 3,
        }
    }

    const fn i(name: &'static str, opcode: u32, operand_count: u8) -> Self {
        Self {
            name,
            format: Format::I,
            opcode,
            funct: None,
            operand_count,
        }
    }
}

/// Every instruction the core understands.
pub static INSTRUCTIONS: [InstructionSpec; 9] = [
    InstructionSpec::i("lw", OP_LW, 2),
    InstructionSpec::i("sw", OP_SW, 2),
    InstructionSpec::i("beq", OP_BEQ, 3),
    InstructionSpec::r("add", funct::ADD),
    InstructionSpec::r("sub", funct::SUB),
    InstructionSpec::r("and", funct::AND),
    InstructionSpec::r("or", funct::OR),
    InstructionSpec::r("slt", funct::SLT),
    InstructionSpec {
        name: "j",
        format: Format::J,
        opcode: OP_J,
        funct: None,
        operand_count: 1,
    },
];

/// Finds the table entry that encodes `word`.
///
/// The no-op word `0x00000000` has no entry and yields `None`, as does any
/// word whose opcode (or, for opcode 0, funct) is not in the table.
pub fn lookup(word: u32) -> Option<&'static InstructionSpec> {
    if word == NOP {
        return None;
    }
    let opcode = word.opcode();
    INSTRUCTIONS.iter().find(|spec| {
        spec.opcode == opcode
            && match spec.format {
                Format::R => spec.funct == Some(word.funct()),
                Format::I | Format::J => true,
            }
    })
}

/// Finds the table entry for an assembler mnemonic (case-insensitive).
pub fn by_mnemonic(name: &str) -> Option<&'static InstructionSpec> {
    INSTRUCTIONS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
}
