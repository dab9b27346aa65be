//! Architectural register state.
//!
//! The only architecturally visible storage besides memory and the program
//! counter is the general-purpose register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
