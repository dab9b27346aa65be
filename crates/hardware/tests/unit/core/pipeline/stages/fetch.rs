//! Instruction Fetch Stage Tests.

use mipsim_core::core::pipeline::latches::{ExMemEntry, IfIdEntry};
use mipsim_core::core::pipeline::signals::MemSignals;
use mipsim_core::core::pipeline::stages::fetch_stage;
use mipsim_core::isa::encode;
use pretty_assertions::assert_eq;

use super::cpu_with;

fn redirect(branch: bool, jump: bool, zero: bool) -> ExMemEntry {
    ExMemEntry {
        zero,
        branch_addr: 0x40,
        jump_addr: 0x80,
        ctrl: MemSignals {
            branch,
            jump,
            ..MemSignals::default()
        },
        ..ExMemEntry::default()
    }
}

#[test]
fn fetches_and_advances() {
    let mut cpu = cpu_with(&[encode::add(1, 2, 3), encode::sub(1, 2, 3)]);
    let entry = fetch_stage(&mut cpu, &ExMemEntry::default());
    assert_eq!(
        entry,
        IfIdEntry {
            pc: 4,
            inst: encode::add(1, 2, 3),
            counted: true,
        }
    );
    assert_eq!(cpu.pc, 4);
    assert_eq!(cpu.stats.instructions, 1);
}

#[test]
fn fetch_past_end_is_uncounted_nop() {
    let mut cpu = cpu_with(&[encode::add(1, 2, 3)]);
    cpu.pc = 4;
    let entry = fetch_stage(&mut cpu, &ExMemEntry::default());
    assert_eq!(entry.inst, 0);
    assert!(!entry.counted);
    assert_eq!(cpu.pc, 8);
    assert_eq!(cpu.stats.instructions, 0);
}

#[test]
fn pending_bubble_holds_pc() {
    let mut cpu = cpu_with(&[encode::add(1, 2, 3)]);
    cpu.bubbles = 2;
    let entry = fetch_stage(&mut cpu, &redirect(false, true, false));
    assert_eq!(entry.inst, 0);
    assert_eq!(entry.pc, 0);
    assert_eq!(cpu.pc, 0);
    assert_eq!(cpu.bubbles, 1);
    assert_eq!(cpu.stats.bubbles, 1);
    assert_eq!(cpu.stats.jumps, 0);
}

#[test]
fn taken_branch_redirects() {
    let mut cpu = cpu_with(&[0; 32]);
    cpu.pc = 8;
    let entry = fetch_stage(&mut cpu, &redirect(true, false, true));
    assert_eq!(entry.pc, 0x44);
    assert_eq!(cpu.stats.branches_taken, 1);
}

#[test]
fn untaken_branch_falls_through() {
    let mut cpu = cpu_with(&[0; 32]);
    cpu.pc = 8;
    let entry = fetch_stage(&mut cpu, &redirect(true, false, false));
    assert_eq!(entry.pc, 12);
    assert_eq!(cpu.stats.branches_taken, 0);
}

#[test]
fn jump_redirects() {
    let mut cpu = cpu_with(&[0; 4]);
    let entry = fetch_stage(&mut cpu, &redirect(false, true, false));
    assert_eq!(entry.pc, 0x84);
    assert!(!entry.counted);
    assert_eq!(cpu.stats.jumps, 1);
}
