//! Execution units.
//!
//! The only functional unit in this datapath is the integer ALU and its
//! control decoder.

/// Arithmetic Logic Unit and ALU control.
pub mod alu;
