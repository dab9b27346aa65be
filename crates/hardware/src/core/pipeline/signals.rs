//! Pipeline control signals.
//!
//! The control unit produces one [`ControlSignals`] bundle per instruction in
//! ID. The bundle narrows as it moves down the pipeline:
//! 1. **ID/EX:** The full bundle, including ALU operand and opcode selection.
//! 2. **EX/MEM:** [`MemSignals`], the memory, branch and write-back lines.
//! 3. **MEM/WB:** [`WbSignals`], only the register write lines.

/// Two-bit ALU operation class emitted by the control unit.
///
/// The default is [`AluOp::Funct`], so an empty latch never selects an
/// arithmetic operation on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `00`: add, for load/store address calculation.
    Add,
    /// `01`: subtract, for the `beq` equality test.
    Sub,
    /// `10`: operation selected by the funct field.
    #[default]
    Funct,
}

impl AluOp {
    /// Returns the two-bit hardware encoding.
    pub const fn bits(self) -> u8 {
        match self {
            Self::Add => 0b00,
            Self::Sub => 0b01,
            Self::Funct => 0b10,
        }
    }
}

/// Full control-signal bundle for one instruction.
///
/// `Default` is the no-op bundle: every flag clear and `alu_op = 10`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct ControlSignals {
    /// Destination register is `rd` (set) or `rt` (clear).
    pub reg_dst: bool,
    /// ALU operation class.
    pub alu_op: AluOp,
    /// Second ALU operand is the sign-extended immediate.
    pub alu_src: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump.
    pub jump: bool,
    /// MEM reads a word from data memory.
    pub mem_read: bool,
    /// MEM writes a word to data memory.
    pub mem_write: bool,
    /// WB writes the register file.
    pub reg_write: bool,
    /// WB writes the loaded word (set) or the ALU result (clear).
    pub mem_to_reg: bool,
}

impl ControlSignals {
    /// Narrows the bundle to the lines live in EX/MEM.
    pub const fn mem(self) -> MemSignals {
        MemSignals {
            branch: self.branch,
            jump: self.jump,
            mem_read: self.mem_read,
            mem_write: self.mem_write,
            wb: self.wb(),
        }
    }

    /// Narrows the bundle to the lines live in MEM/WB.
    pub const fn wb(self) -> WbSignals {
        WbSignals {
            reg_write: self.reg_write,
            mem_to_reg: self.mem_to_reg,
        }
    }
}

/// Control lines carried in the EX/MEM latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct MemSignals {
    /// Conditional branch; IF redirects when the zero flag is also set.
    pub branch: bool,
    /// Unconditional jump; IF redirects to the jump target.
    pub jump: bool,
    /// Load.
    pub mem_read: bool,
    /// Store.
    pub mem_write: bool,
    /// Lines forwarded to MEM/WB.
    pub wb: WbSignals,
}

/// Control lines carried in the MEM/WB latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WbSignals {
    /// Write the register file.
    pub reg_write: bool,
    /// Select the loaded word instead of the ALU result.
    pub mem_to_reg: bool,
}
