//! Control Unit Tests.
//!
//! Checks every row of the decision table, the narrowing of the bundle into
//! the later latches, and the rejection of words outside the table.

use mipsim_core::common::DecodeError;
use mipsim_core::core::pipeline::control::control;
use mipsim_core::core::pipeline::signals::{AluOp, ControlSignals, MemSignals, WbSignals};
use mipsim_core::isa::encode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

/// Builds a bundle from a table row, in column order.
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
fn row(
    reg_dst: bool,
    alu_op: AluOp,
    alu_src: bool,
    branch: bool,
    jump: bool,
    mem_read: bool,
    mem_write: bool,
    reg_write: bool,
    mem_to_reg: bool,
) -> ControlSignals {
    ControlSignals {
        reg_dst,
        alu_op,
        alu_src,
        branch,
        jump,
        mem_read,
        mem_write,
        reg_write,
        mem_to_reg,
    }
}

const T: bool = true;
const F: bool = false;

#[rstest]
#[case::nop(0, row(F, AluOp::Funct, F, F, F, F, F, F, F))]
#[case::add(encode::add(1, 2, 3), row(T, AluOp::Funct, F, F, F, F, F, T, F))]
#[case::slt(encode::slt(1, 2, 3), row(T, AluOp::Funct, F, F, F, F, F, T, F))]
#[case::lw(encode::lw(1, 4, 2), row(F, AluOp::Add, T, F, F, T, F, T, T))]
#[case::sw(encode::sw(1, 4, 2), row(F, AluOp::Add, T, F, F, F, T, F, F))]
#[case::beq(encode::beq(1, 2, 3), row(F, AluOp::Sub, F, T, F, F, F, F, F))]
#[case::j(encode::j(3), row(F, AluOp::Funct, F, F, T, F, F, F, F))]
fn decision_table(#[case] word: u32, #[case] expected: ControlSignals) {
    assert_eq!(control(word).unwrap(), expected);
}

#[test]
fn nop_is_the_default_bundle() {
    assert_eq!(control(0).unwrap(), ControlSignals::default());
}

#[test]
fn unknown_opcode_is_rejected() {
    assert_eq!(control(0xFC00_0000), Err(DecodeError::UnknownOpcode(0x3F)));
    // addi is a real instruction, but not one this core supports.
    assert_eq!(control(0x2001_0005), Err(DecodeError::UnknownOpcode(0x08)));
}

#[test]
fn unknown_funct_is_rejected() {
    assert_eq!(control(0x0043_0821), Err(DecodeError::UnknownFunct(0x21)));
}

#[test]
fn narrowing_keeps_downstream_lines() {
    let lw = control(encode::lw(1, 0, 0)).unwrap();
    assert_eq!(
        lw.mem(),
        MemSignals {
            branch: false,
            jump: false,
            mem_read: true,
            mem_write: false,
            wb: WbSignals {
                reg_write: true,
                mem_to_reg: true,
            },
        }
    );
    assert_eq!(lw.wb(), lw.mem().wb);
}

proptest! {
    #[test]
    fn control_is_idempotent(word in any::<u32>()) {
        prop_assert_eq!(control(word), control(word));
    }
}
