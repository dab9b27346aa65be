//! Major opcodes (bits 31-26) of the supported instruction subset.

/// Register-register arithmetic (`add`, `sub`, `and`, `or`, `slt`). The
/// operation is selected by the funct field.
pub const OP_RTYPE: u32 = 0b000000;

/// Unconditional jump (`j`).
pub const OP_J: u32 = 0b000010;

/// Branch if equal (`beq`).
pub const OP_BEQ: u32 = 0b000100;

/// Load word (`lw`).
pub const OP_LW: u32 = 0b100011;

/// Store word (`sw`).
pub const OP_SW: u32 = 0b101011;
