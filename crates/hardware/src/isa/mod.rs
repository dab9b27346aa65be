//! Instruction Set Architecture (ISA) definitions.
//!
//! Covers the supported subset: R-format `add`, `sub`, `and`, `or`, `slt`,
//! I-format `lw`, `sw`, `beq`, and J-format `j`. The word `0x00000000` is
//! the no-op.

/// Word fetch, sign extension and data memory word access.
pub mod codec;

/// Instruction disassembler for the pipeline view and trace logs.
pub mod disasm;

/// Instruction encoders, one per mnemonic.
pub mod encode;

/// R-format function codes.
pub mod funct;

/// Bitfield extraction for 32-bit instruction words.
pub mod instruction;

/// Major opcodes.
pub mod opcodes;

/// Static mnemonic catalog.
pub mod table;

pub use disasm::decode_to_text;
pub use instruction::{Fields, InstructionBits, decode_fields};
pub use table::{Format, InstructionSpec};
