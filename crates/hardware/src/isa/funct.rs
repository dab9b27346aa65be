//! Function codes (bits 5-0) for R-format instructions.

/// Integer addition.
pub const ADD: u32 = 0b100000;

/// Integer subtraction.
pub const SUB: u32 = 0b100010;

/// Bitwise AND.
pub const AND: u32 = 0b100100;

/// Bitwise OR.
pub const OR: u32 = 0b100101;

/// Set on less than.
pub const SLT: u32 = 0b101010;
