//! Cycle-accurate 5-stage pipelined MIPS subset simulator.
//!
//! This crate models a classic IF/ID/EX/MEM/WB datapath with no forwarding paths:
//! 1. **ISA:** Encoding, decoding and disassembly of `add`, `sub`, `and`, `or`, `slt`, `lw`, `sw`, `beq`, `j`.
//! 2. **Core:** Register file, pipeline latches, control unit, ALU, and hazard detection.
//! 3. **Pipeline:** Stage functions run each cycle in WB, IF, ID, EX, MEM order over double-buffered latches.
//! 4. **Simulation:** Loader, configuration, per-cycle observation, and statistics collection.
//!
//! # Example
//!
//! ```
//! use mipsim_core::isa::encode::{assemble, lw, add};
//! use mipsim_core::{Config, Simulator};
//!
//! let program = assemble(&[lw(1, 0, 0), add(2, 1, 1)]);
//! let mut sim = Simulator::new(program, Some(&[0, 0, 0, 5]), &Config::default()).unwrap();
//! sim.run().unwrap();
//! assert_eq!(sim.cpu.regs.read(2), 10);
//! assert_eq!(sim.cpu.stats.bubbles, 2);
//! ```

/// Common types and constants (errors, word size, register count).
pub mod common;
/// Simulator configuration (defaults and sectioned config structures).
pub mod config;
/// CPU core (pipeline, registers, ALU).
pub mod core;
/// Instruction set (fields, table, encoders, disassembler, codec).
pub mod isa;
/// Simulator driver, loader, and observation interface.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, latches, and stats.
pub use crate::core::Cpu;
/// Fatal simulator error.
pub use crate::common::error::SimError;
/// Top-level simulator and run outcome.
pub use crate::sim::{Observer, RunOutcome, Simulator, Snapshot};
/// Statistics counters.
pub use crate::stats::SimStats;
