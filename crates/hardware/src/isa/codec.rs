//! Binary codec for instruction and data memory.
//!
//! Words are stored big-endian in both memories. This module performs:
//! 1. **Fetch:** Reading instruction words, with a no-op past the end of the program.
//! 2. **Sign Extension:** Two's-complement widening of narrow immediates.
//! 3. **Data Access:** Bounds- and alignment-checked signed word loads and stores.

use std::ops::Range;

use crate::common::constants::{NOP, WORD_BYTES};
use crate::common::error::SimError;

/// Returns the big-endian word at `inst_mem[pc..pc + 4]`.
///
/// Fetching at or past the end of the buffer yields [`NOP`], so the last real
/// instruction can drain while well-formed no-ops fill the fetch stage. A
/// trailing partial word is zero-padded.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::codec::fetch;
///
/// let program = [0x8C, 0x01, 0x00, 0x00];
/// assert_eq!(fetch(0, &program), 0x8C01_0000);
/// assert_eq!(fetch(4, &program), 0);
/// ```
pub fn fetch(pc: u32, inst_mem: &[u8]) -> u32 {
    let Some(bytes) = inst_mem.get(pc as usize..) else {
        return NOP;
    };
    let mut word = [0u8; WORD_BYTES as usize];
    for (dst, src) in word.iter_mut().zip(bytes) {
        *dst = *src;
    }
    u32::from_be_bytes(word)
}

/// Two's-complement sign extension of the low `bit_width` bits of `value`.
///
/// Returns `value - 2^bit_width` when the sign bit is set and `value`
/// unchanged otherwise. Bits above `bit_width` are ignored.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::codec::sign_extend;
///
/// assert_eq!(sign_extend(0xFFFF, 16), -1);
/// assert_eq!(sign_extend(0x7FFF, 16), 32767);
/// ```
pub const fn sign_extend(value: u32, bit_width: u32) -> i32 {
    match bit_width {
        0 => 0,
        32.. => value as i32,
        _ => {
            let shift = 32 - bit_width;
            ((value << shift) as i32) >> shift
        }
    }
}

/// Validates a data memory access and returns the byte range it covers.
fn word_range(addr: u32, size: usize) -> Result<Range<usize>, SimError> {
    if addr & (WORD_BYTES - 1) != 0 {
        return Err(SimError::MisalignedAccess { addr });
    }
    let start = addr as usize;
    match start.checked_add(WORD_BYTES as usize) {
        Some(end) if end <= size => Ok(start..end),
        _ => Err(SimError::MemoryOutOfBounds { addr, size }),
    }
}

/// Reads the signed big-endian word at `addr`.
///
/// # Errors
///
/// Returns [`SimError::MisalignedAccess`] if `addr` is not a multiple of 4 and
/// [`SimError::MemoryOutOfBounds`] if `addr + 4` exceeds the buffer.
pub fn read_word(addr: u32, data_mem: &[u8]) -> Result<i32, SimError> {
    let range = word_range(addr, data_mem.len())?;
    let bytes: [u8; 4] = data_mem
        .get(range)
        .and_then(|b| b.try_into().ok())
        .ok_or(SimError::MemoryOutOfBounds {
            addr,
            size: data_mem.len(),
        })?;
    Ok(i32::from_be_bytes(bytes))
}

/// Writes `value` as a signed big-endian word at `addr`.
///
/// # Errors
///
/// Same conditions as [`read_word`]. Memory is left untouched on error.
pub fn write_word(addr: u32, value: i32, data_mem: &mut [u8]) -> Result<(), SimError> {
    let size = data_mem.len();
    let range = word_range(addr, size)?;
    data_mem
        .get_mut(range)
        .ok_or(SimError::MemoryOutOfBounds { addr, size })?
        .copy_from_slice(&value.to_be_bytes());
    Ok(())
}
