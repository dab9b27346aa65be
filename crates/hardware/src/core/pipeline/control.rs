//! Main control unit.
//!
//! Maps an instruction word to its [`ControlSignals`]. Opcode 0 is treated as
//! R-format here; the funct field is checked against the instruction table and
//! then resolved again by ALU control in EX.

use crate::common::constants::NOP;
use crate::common::error::DecodeError;
use crate::core::pipeline::signals::{AluOp, ControlSignals};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::{OP_BEQ, OP_J, OP_LW, OP_RTYPE, OP_SW};
use crate::isa::table;

/// Derives the control signals for `word`.
///
/// The zero word yields the no-op bundle.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOpcode`] for an opcode outside the table and
/// [`DecodeError::UnknownFunct`] for an R-format word with an unsupported funct.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::pipeline::control::control;
/// use mipsim_core::core::pipeline::signals::AluOp;
///
/// let lw = control(0x8C01_0000).unwrap();
/// assert!(lw.mem_read && lw.reg_write && lw.mem_to_reg && lw.alu_src);
/// assert_eq!(lw.alu_op, AluOp::Add);
/// ```
pub fn control(word: u32) -> Result<ControlSignals, DecodeError> {
    if word == NOP {
        return Ok(ControlSignals::default());
    }
    let signals = match word.opcode() {
        OP_RTYPE => {
            if table::lookup(word).is_none() {
                return Err(DecodeError::UnknownFunct(word.funct()));
            }
            ControlSignals {
                reg_dst: true,
                alu_op: AluOp::Funct,
                reg_write: true,
                ..ControlSignals::default()
            }
        }
        OP_LW => ControlSignals {
            alu_op: AluOp::Add,
            alu_src: true,
            mem_read: true,
            reg_write: true,
            mem_to_reg: true,
            ..ControlSignals::default()
        },
        OP_SW => ControlSignals {
            alu_op: AluOp::Add,
            alu_src: true,
            mem_write: true,
            ..ControlSignals::default()
        },
        OP_BEQ => ControlSignals {
            alu_op: AluOp::Sub,
            branch: true,
            ..ControlSignals::default()
        },
        OP_J => ControlSignals {
            alu_op: AluOp::Funct,
            jump: true,
            ..ControlSignals::default()
        },
        other => return Err(DecodeError::UnknownOpcode(other)),
    };
    Ok(signals)
}
