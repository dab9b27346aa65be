use std::ops::ControlFlow;

use mipsim_core::core::pipeline::latches::Latches;
use mipsim_core::sim::{Observer, Snapshot};

/// One recorded cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub cycle: u64,
    pub pc: u32,
    pub latches: Latches,
    pub bubbles: u8,
    pub running: bool,
    pub regs: [u32; 32],
}

/// Records every snapshot and optionally breaks after a number of cycles.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub frames: Vec<Frame>,
    pub stop_after: Option<usize>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stopping_after(cycles: usize) -> Self {
        Self {
            frames: Vec::new(),
            stop_after: Some(cycles),
        }
    }

    /// The cycles whose IF/ID latch held the word fetched from `addr`.
    pub fn decode_cycles_of(&self, addr: u32) -> Vec<u64> {
        self.frames
            .iter()
            .filter(|f| f.latches.if_id.inst != 0 && f.latches.if_id.pc == addr + 4)
            .map(|f| f.cycle)
            .collect()
    }
}

impl Observer for RecordingObserver {
    fn on_cycle(&mut self, snap: &Snapshot<'_>) -> ControlFlow<()> {
        self.frames.push(Frame {
            cycle: snap.cycle(),
            pc: snap.pc,
            latches: *snap.latches,
            bubbles: snap.bubbles,
            running: snap.running,
            regs: *snap.regs.as_array(),
        });
        match self.stop_after {
            Some(n) if self.frames.len() >= n => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
