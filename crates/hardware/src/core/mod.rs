//! Core processor implementation.
//!
//! This module contains the CPU state, the five-stage pipeline, the register
//! file, and the ALU.

/// Architectural register state.
pub mod arch;

/// CPU core implementation and per-cycle orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals, control).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
