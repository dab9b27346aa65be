//! Instruction disassembler.
//!
//! Converts a 32-bit word into assembler text for the pipeline view, trace
//! logs and the `--disassemble` listing.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::decode_to_text;
//!
//! assert_eq!(decode_to_text(0x0043_0820), "add $1, $2, $3");
//! assert_eq!(decode_to_text(0x8C01_0004), "lw $1, 4($0)");
//! assert_eq!(decode_to_text(0), "nop");
//! ```

use super::codec::{fetch, sign_extend};
use super::instruction::InstructionBits;
use super::opcodes::{OP_LW, OP_SW};
use super::table::{Format, lookup};
use crate::common::constants::{NOP, WORD_BYTES};

/// Renders `word` as assembler text.
///
/// Returns `"nop"` for the zero word and `"unknown 0x%08x"` for words that
/// match no table entry. Immediates are printed as signed decimal.
pub fn decode_to_text(word: u32) -> String {
    if word == NOP {
        return "nop".to_owned();
    }
    let Some(spec) = lookup(word) else {
        return format!("unknown {word:#010x}");
    };

    let (rs, rt) = (word.rs(), word.rt());
    let imm = sign_extend(word.imm16(), 16);

    match (spec.format, spec.opcode) {
        (Format::R, _) => format!("{} ${}, ${rs}, ${rt}", spec.name, word.rd()),
        (Format::I, OP_LW | OP_SW) => format!("{} ${rt}, {imm}(${rs})", spec.name),
        (Format::I, _) => format!("{} ${rs}, ${rt}, {imm}", spec.name),
        (Format::J, _) => format!("{} {}", spec.name, sign_extend(word.addr26(), 26)),
    }
}

/// Produces one listing line per word of a program image.
///
/// Each line has the form `0x00000000: 0x8c010000  lw $1, 0($0)`. A trailing
/// partial word is zero-padded.
pub fn disassemble_program(program: &[u8]) -> Vec<String> {
    (0..program.len())
        .step_by(WORD_BYTES as usize)
        .map(|offset| {
            let pc = offset as u32;
            let word = fetch(pc, program);
            format!("{pc:#010x}: {word:#010x}  {}", decode_to_text(word))
        })
        .collect()
}
