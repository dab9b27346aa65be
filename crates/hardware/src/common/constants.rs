//! Global Simulator Constants.
//!
//! This module defines constants used across the simulator. It includes:
//! 1. **Encoding Constants:** The canonical no-op word and the instruction width.
//! 2. **Architectural Constants:** Register file size and data memory limits.

/// The no-op encoding. Bubbles, squashed fetches and fetches past the end of
/// instruction memory all carry this word.
pub const NOP: u32 = 0x0000_0000;

/// Size of one instruction or data word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers.
pub const REG_COUNT: usize = 32;

/// Default size of data memory in bytes.
pub const DEFAULT_DATA_MEM_SIZE: usize = 1024;

/// Largest data memory the simulator will allocate (16 MiB).
pub const MAX_DATA_MEM_SIZE: usize = 16 * 1024 * 1024;

/// Mask selecting the region bits a `j` target inherits from the PC.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;
