//! Simulator error definitions.
//!
//! This module defines the fatal error taxonomy for the simulator. It provides:
//! 1. **Decode Errors:** Words that match no entry in the instruction table.
//! 2. **Memory Errors:** Out-of-bounds and misaligned data memory accesses.
//! 3. **Configuration Errors:** Unreadable input files, oversized seed data and bad settings.
//!
//! None of these are retried. Each one reflects a malformed program or configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Reason the control unit rejected an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode field matches no instruction in the table.
    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u32),

    /// An R-format word whose funct field matches no instruction in the table.
    #[error("unknown R-format funct {0:#04x}")]
    UnknownFunct(u32),
}

/// Fatal simulator errors.
///
/// Every variant aborts the run. Load-time variants (`Io`, `SeedTooLarge`,
/// `Config`) surface before the first cycle; the others surface in the cycle
/// that triggers them.
#[derive(Debug, Error)]
pub enum SimError {
    /// An instruction word reached decode that matches no table entry.
    #[error("undefined instruction {word:#010x} at pc {pc:#010x} ({reason})")]
    Decode {
        /// Address of the offending instruction.
        pc: u32,
        /// Raw instruction word.
        word: u32,
        /// Which field failed to match.
        reason: DecodeError,
    },

    /// A load or store addressed bytes outside data memory.
    #[error("data memory access at {addr:#010x} is out of bounds (data memory is {size} bytes)")]
    MemoryOutOfBounds {
        /// Effective address of the access.
        addr: u32,
        /// Size of data memory in bytes.
        size: usize,
    },

    /// A load or store used an address that is not word-aligned.
    #[error("misaligned data memory access at {addr:#010x}")]
    MisalignedAccess {
        /// Effective address of the access.
        addr: u32,
    },

    /// An input file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The seed data file is larger than the configured data memory.
    #[error("seed data is {seed} bytes but data memory is only {capacity} bytes")]
    SeedTooLarge {
        /// Size of the seed file in bytes.
        seed: usize,
        /// Size of data memory in bytes.
        capacity: usize,
    },

    /// The configuration could not be parsed or holds an invalid value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The configured cycle limit was reached before the pipeline drained.
    #[error("cycle limit of {limit} reached before the pipeline drained")]
    CycleLimit {
        /// The configured limit.
        limit: u64,
    },
}
