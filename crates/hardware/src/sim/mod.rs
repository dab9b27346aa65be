//! Simulation driver and program loading.
//!
//! Provides the top-level [`Simulator`], the read-only per-cycle [`Snapshot`]
//! handed to observers, and utilities for loading program and data images.

/// Program and data memory loading.
pub mod loader;

/// Top-level simulator and run loop.
pub mod simulator;

/// Read-only pipeline state exposed after every cycle.
pub mod snapshot;

pub use simulator::{RunOutcome, Simulator};
pub use snapshot::{Observer, Snapshot};
