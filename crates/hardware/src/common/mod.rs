//! Common types shared throughout the pipeline simulator.
//!
//! This module provides the building blocks used by every other component. It includes:
//! 1. **Constants:** Word size, register count, the no-op encoding and memory limits.
//! 2. **Error Handling:** The fatal error taxonomy for decode, memory and configuration faults.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decode, memory access and configuration failures.
pub mod error;

pub use constants::{NOP, REG_COUNT, WORD_BYTES};
pub use error::{DecodeError, SimError};
