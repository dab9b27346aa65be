//! General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 word-sized registers (`$0`-`$31`).
//! 2. **Zero Policy:** Optionally discards writes to `$0` when it is hardwired.
//! 3. **Debugging:** Formats the complete register state for the view and test diagnostics.

use crate::common::constants::REG_COUNT;

/// Registers shown on one line of [`Gpr::dump`].
const DUMP_COLUMNS: usize = 4;

/// General-Purpose Register file.
///
/// By default register `$0` is an ordinary register and writes to it persist.
/// With `hardwire_zero` set it always reads as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; REG_COUNT],
    hardwire_zero: bool,
}

impl Gpr {
    /// Creates a register file with every register cleared.
    ///
    /// # Arguments
    ///
    /// * `hardwire_zero` - Whether writes to `$0` are discarded.
    pub const fn new(hardwire_zero: bool) -> Self {
        Self {
            regs: [0; REG_COUNT],
            hardwire_zero,
        }
    }

    /// Returns whether `$0` is hardwired to zero.
    pub const fn hardwire_zero(&self) -> bool {
        self.hardwire_zero
    }

    /// Reads a register. Indices are masked to 5 bits.
    pub const fn read(&self, idx: usize) -> u32 {
        self.regs[idx & (REG_COUNT - 1)]
    }

    /// Writes a register. Indices are masked to 5 bits.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u32) {
        let idx = idx & (REG_COUNT - 1);
        if idx == 0 && self.hardwire_zero {
            return;
        }
        self.regs[idx] = val;
    }

    /// Borrows the raw register array.
    pub const fn as_array(&self) -> &[u32; REG_COUNT] {
        &self.regs
    }

    /// Formats all registers, four per line, as signed decimal.
    ///
    /// # Returns
    ///
    /// Eight lines of the form `$0  = 0          $1  = 12 ...`.
    pub fn dump(&self) -> Vec<String> {
        self.regs
            .chunks(DUMP_COLUMNS)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, &val)| {
                        let name = format!("${}", row * DUMP_COLUMNS + col);
                        format!("{name:<3} = {:<11}", val as i32)
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim_end()
                    .to_owned()
            })
            .collect()
    }
}
