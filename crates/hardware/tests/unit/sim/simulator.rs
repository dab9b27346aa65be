//! Simulator Driver Tests.
//!
//! Construction from memory and from files, single stepping, and the
//! snapshot handed to observers.

use std::io::Write;
use std::ops::ControlFlow;

use mipsim_core::SimError;
use mipsim_core::config::Config;
use mipsim_core::isa::encode::{add, assemble, lw};
use mipsim_core::sim::{RunOutcome, Simulator, Snapshot};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

#[test]
fn new_sizes_data_memory_from_config() {
    let mut config = Config::default();
    config.memory.data_mem_size = 64;
    let sim = Simulator::new(assemble(&[add(1, 2, 3)]), None, &config).unwrap();

    assert_eq!(sim.cpu.data_mem.len(), 64);
    assert_eq!(sim.cpu.pc, 0);
    assert!(sim.is_running());
    assert_eq!(sim.config(), &config);
}

#[test]
fn new_rejects_invalid_config() {
    let mut config = Config::default();
    config.memory.data_mem_size = 0;
    let err = Simulator::new(assemble(&[add(1, 2, 3)]), None, &config).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn new_rejects_oversized_seed() {
    let mut config = Config::default();
    config.memory.data_mem_size = 8;
    let err = Simulator::new(assemble(&[0]), Some(&[0; 12]), &config).unwrap_err();
    assert!(matches!(err, SimError::SeedTooLarge { .. }));
}

#[test]
fn from_files_loads_program_and_seed() {
    let program = temp_file(&assemble(&[lw(1, 4, 0), add(2, 1, 1)]));
    let data = temp_file(&[0, 0, 0, 0, 0, 0, 0, 21]);

    let mut sim =
        Simulator::from_files(program.path(), Some(data.path()), &Config::default()).unwrap();
    assert_eq!(sim.run().unwrap(), RunOutcome::Completed);
    assert_eq!(sim.cpu.regs.read(2), 42);
}

#[test]
fn from_files_reports_missing_program() {
    let dir = tempfile::tempdir().unwrap();
    let err = Simulator::from_files(&dir.path().join("nope.bin"), None, &Config::default())
        .unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
}

#[test]
fn step_reports_running_state() {
    let mut sim = Simulator::new(assemble(&[add(1, 2, 3)]), None, &Config::default()).unwrap();
    let mut results = Vec::new();
    for _ in 0..6 {
        results.push(sim.step().unwrap());
    }
    assert_eq!(results, vec![true, true, true, true, false, false]);
    assert_eq!(sim.cpu.stats.cycles, 5, "stepping a halted pipeline is a no-op");
}

#[test]
fn snapshot_borrows_current_state() {
    let mut sim = Simulator::new(assemble(&[add(1, 2, 3)]), None, &Config::default()).unwrap();
    let _ = sim.step().unwrap();

    let snap = sim.snapshot();
    assert_eq!(snap.cycle(), 1);
    assert_eq!(snap.pc, 4);
    assert_eq!(snap.latches.if_id.inst, add(1, 2, 3));
    assert_eq!(snap.bubbles, 0);
    assert!(snap.running);
    assert_eq!(snap.data_mem.len(), 1024);
}

#[test]
fn closure_observer_sees_every_cycle() {
    let mut sim = Simulator::new(assemble(&[add(1, 2, 3)]), None, &Config::default()).unwrap();
    let mut pcs = Vec::new();
    let mut observer = |snap: &Snapshot<'_>| {
        pcs.push(snap.pc);
        ControlFlow::Continue(())
    };
    assert_eq!(sim.run_with(&mut observer).unwrap(), RunOutcome::Completed);
    assert_eq!(pcs, vec![4, 8, 12, 16, 20]);
}

#[test]
fn trace_mode_does_not_change_results() {
    let mut config = Config::default();
    config.general.trace = true;
    let mut sim = Simulator::new(assemble(&[add(1, 2, 3)]), None, &config).unwrap();
    sim.cpu.regs.write(2, 1);
    sim.cpu.regs.write(3, 2);
    let _ = sim.run().unwrap();
    assert_eq!(sim.cpu.regs.read(1), 3);
    assert_eq!(sim.cpu.stats.cycles, 5);
}
