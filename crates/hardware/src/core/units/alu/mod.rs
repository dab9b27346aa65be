//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. It has two steps:
//! 1. **ALU Control:** Maps the control unit's [`AluOp`] and the funct field to a 4-bit operation.
//! 2. **Execution:** Computes the 32-bit result for that operation.
//!
//! The zero flag consumed by `beq` is `result == 0`.

use crate::core::pipeline::signals::AluOp;
use crate::isa::funct;

/// Concrete ALU operation, selected by ALU control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluControl {
    /// `0000`: bitwise AND.
    And,
    /// `0001`: bitwise OR.
    Or,
    /// `0010`: wrapping addition.
    Add,
    /// `0110`: wrapping subtraction.
    Sub,
    /// `0111`: set on less than (unsigned comparison).
    Slt,
}

impl AluControl {
    /// Returns the 4-bit hardware encoding.
    pub const fn bits(self) -> u8 {
        match self {
            Self::And => 0b0000,
            Self::Or => 0b0001,
            Self::Add => 0b0010,
            Self::Sub => 0b0110,
            Self::Slt => 0b0111,
        }
    }
}

/// Derives the ALU operation from the control unit's class and the funct field.
///
/// # Arguments
///
/// * `op`    - ALU operation class from the control unit.
/// * `funct` - Low six bits of the instruction; only used when `op` is [`AluOp::Funct`].
///
/// # Returns
///
/// `None` when `op` is [`AluOp::Funct`] and `funct` names no ALU operation,
/// which is the case for `j` and the no-op.
pub const fn alu_control(op: AluOp, funct: u32) -> Option<AluControl> {
    match op {
        AluOp::Add => Some(AluControl::Add),
        AluOp::Sub => Some(AluControl::Sub),
        AluOp::Funct => match funct {
            funct::ADD => Some(AluControl::Add),
            funct::SUB => Some(AluControl::Sub),
            funct::AND => Some(AluControl::And),
            funct::OR => Some(AluControl::Or),
            funct::SLT => Some(AluControl::Slt),
            _ => None,
        },
    }
}

/// Arithmetic Logic Unit for 32-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Arithmetic wraps modulo 2^32 and `slt` compares the operands as unsigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluControl};
    ///
    /// assert_eq!(Alu::execute(AluControl::Add, 5, 7), 12);
    /// assert_eq!(Alu::execute(AluControl::Sub, 0, 1), u32::MAX);
    /// assert_eq!(Alu::execute(AluControl::Slt, 3, 4), 1);
    /// ```
    pub const fn execute(op: AluControl, a: u32, b: u32) -> u32 {
        match op {
            AluControl::And => a & b,
            AluControl::Or => a | b,
            AluControl::Add => a.wrapping_add(b),
            AluControl::Sub => a.wrapping_sub(b),
            AluControl::Slt => (a < b) as u32,
        }
    }
}
