//! Instruction field extraction.
//!
//! Provides bit extraction for the fixed-width R/I/J encodings: opcode in
//! bits 31-26, `rs` 25-21, `rt` 20-16, `rd` 15-11, funct 5-0, the 16-bit
//! immediate in 15-0 and the 26-bit jump address in 25-0.

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit position of the `rs` field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the `rt` field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 11;
/// Bit mask for any register field after shifting.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the funct field.
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump address field.
pub const ADDR_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the `rt` register field (bits 20-16).
    ///
    /// For `lw` this is the destination; for `sw` and `beq` it is a source.
    fn rt(&self) -> usize;

    /// Extracts the `rd` register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the funct field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw, unextended 16-bit immediate (bits 15-0).
    fn imm16(&self) -> u32;

    /// Extracts the raw 26-bit jump address (bits 25-0).
    fn addr26(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn addr26(&self) -> u32 {
        self & ADDR_MASK
    }
}

/// Every field of an instruction word, extracted at once.
///
/// Fields are raw bit slices; the immediate is not sign-extended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    /// Opcode (bits 31-26).
    pub opcode: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source (or I-format destination) register index.
    pub rt: usize,
    /// R-format destination register index.
    pub rd: usize,
    /// Function code (bits 5-0).
    pub funct: u32,
    /// Raw 16-bit immediate.
    pub imm16: u32,
    /// Raw 26-bit jump address.
    pub addr26: u32,
}

/// Extracts every field of `word`.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::instruction::decode_fields;
///
/// // add $1, $2, $3
/// let f = decode_fields(0x0043_0820);
/// assert_eq!((f.opcode, f.rs, f.rt, f.rd, f.funct), (0, 2, 3, 1, 0x20));
/// ```
pub fn decode_fields(word: u32) -> Fields {
    Fields {
        opcode: word.opcode(),
        rs: word.rs(),
        rt: word.rt(),
        rd: word.rd(),
        funct: word.funct(),
        imm16: word.imm16(),
        addr26: word.addr26(),
    }
}
