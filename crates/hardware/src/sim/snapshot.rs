//! Per-cycle observation interface.
//!
//! After every completed cycle the simulator hands its observer a [`Snapshot`]
//! borrowing the whole machine read-only. The observer renders it and decides
//! whether the run continues.

use std::ops::ControlFlow;

use crate::core::Cpu;
use crate::core::arch::Gpr;
use crate::core::pipeline::latches::Latches;
use crate::stats::SimStats;

/// Read-only view of the machine after a cycle.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    /// Program counter.
    pub pc: u32,
    /// Latches produced by the cycle.
    pub latches: &'a Latches,
    /// Register file.
    pub regs: &'a Gpr,
    /// Counters, including cycle and instruction counts.
    pub stats: &'a SimStats,
    /// Bubbles still pending.
    pub bubbles: u8,
    /// Data memory contents.
    pub data_mem: &'a [u8],
    /// Whether another cycle will run.
    pub running: bool,
}

impl<'a> Snapshot<'a> {
    /// Borrows the current state of `cpu`.
    pub fn of(cpu: &'a Cpu) -> Self {
        Self {
            pc: cpu.pc,
            latches: &cpu.latches,
            regs: &cpu.regs,
            stats: &cpu.stats,
            bubbles: cpu.bubbles,
            data_mem: &cpu.data_mem,
            running: cpu.running,
        }
    }

    /// Cycles completed so far.
    pub const fn cycle(&self) -> u64 {
        self.stats.cycles
    }
}

/// Receives a snapshot after every cycle.
///
/// Returning [`ControlFlow::Break`] stops the run after the current cycle.
/// Closures of the matching shape are observers too.
pub trait Observer {
    /// Called once per completed cycle.
    fn on_cycle(&mut self, snap: &Snapshot<'_>) -> ControlFlow<()>;
}

impl<F> Observer for F
where
    F: FnMut(&Snapshot<'_>) -> ControlFlow<()>,
{
    fn on_cycle(&mut self, snap: &Snapshot<'_>) -> ControlFlow<()> {
        self(snap)
    }
}
