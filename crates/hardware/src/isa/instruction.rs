//! Instruction encoding and classification.
//!
//! Provides bit extraction for opcode bytes and the structured `Instruction`
//! form produced by the decoder and consumed by the execute loop.

use crate::common::Flags;
use crate::common::constants::{ALU_BIT, IDENTIFIER_MASK, OPERAND_COUNT_SHIFT, SETS_PC_BIT};
use crate::core::units::alu::AluOp;
use crate::isa::opcodes;

/// Trait for extracting the fixed fields of an LS-8 opcode byte.
pub trait InstructionBits {
    /// Number of operand bytes following the opcode (bits 7-6).
    ///
    /// `NOT` is the one exception: its field says one operand, but like every
    /// other ALU instruction it carries two register bytes.
    fn operand_count(&self) -> usize;

    /// Total instruction width in bytes (`operand_count + 1`).
    fn width(&self) -> usize;

    /// Whether bit 5 marks this as an ALU operation.
    ///
    /// Informational only; dispatch never depends on it.
    fn is_alu(&self) -> bool;

    /// Whether bit 4 marks this as an instruction that may write the PC.
    fn sets_pc(&self) -> bool;

    /// Instruction identifier (bits 3-0).
    fn identifier(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        if *self == opcodes::NOT {
            return 2;
        }
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn width(&self) -> usize {
        self.operand_count() + 1
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_BIT != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_BIT != 0
    }

    #[inline(always)]
    fn identifier(&self) -> u8 {
        self & IDENTIFIER_MASK
    }
}

/// Condition tested by a conditional jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// `JEQ`: E set.
    Equal,
    /// `JNE`: E clear.
    NotEqual,
    /// `JGT`: G set.
    Greater,
    /// `JLT`: L set.
    Less,
    /// `JLE`: L or E set.
    LessOrEqual,
    /// `JGE`: G or E set.
    GreaterOrEqual,
}

impl Condition {
    /// Evaluates the condition against the flags register.
    pub const fn holds(self, flags: Flags) -> bool {
        match self {
            Self::Equal => flags.equal,
            Self::NotEqual => !flags.equal,
            Self::Greater => flags.greater,
            Self::Less => flags.less,
            Self::LessOrEqual => flags.less || flags.equal,
            Self::GreaterOrEqual => flags.greater || flags.equal,
        }
    }

    /// Assembly mnemonic of the jump that tests this condition.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Equal => "JEQ",
            Self::NotEqual => "JNE",
            Self::Greater => "JGT",
            Self::Less => "JLT",
            Self::LessOrEqual => "JLE",
            Self::GreaterOrEqual => "JGE",
        }
    }
}

/// A decoded LS-8 instruction.
///
/// Register operands are carried as the raw operand bytes; the execute loop
/// rejects any index above `R7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `NOP`
    Nop,
    /// `HLT`
    Halt,
    /// `LDI reg, value`
    LoadImmediate {
        /// Destination register.
        reg: u8,
        /// Immediate byte.
        value: u8,
    },
    /// `LD dst, addr_reg`
    Load {
        /// Destination register.
        dst: u8,
        /// Register holding the source address.
        addr_reg: u8,
    },
    /// `ST addr_reg, src`
    Store {
        /// Register holding the destination address.
        addr_reg: u8,
        /// Source register.
        src: u8,
    },
    /// `PRN reg`
    PrintNumber {
        /// Register to print.
        reg: u8,
    },
    /// `PRA reg`
    PrintAscii {
        /// Register to print.
        reg: u8,
    },
    /// `PUSH reg`
    Push {
        /// Register to push.
        reg: u8,
    },
    /// `POP reg`
    Pop {
        /// Register to pop into.
        reg: u8,
    },
    /// `CALL reg`
    Call {
        /// Register holding the subroutine address.
        reg: u8,
    },
    /// `RET`
    Return,
    /// `JMP reg`
    Jump {
        /// Register holding the target address.
        reg: u8,
    },
    /// `JEQ`, `JNE`, `JGT`, `JLT`, `JLE`, `JGE`
    Branch {
        /// Flags test deciding whether the jump is taken.
        cond: Condition,
        /// Register holding the target address.
        reg: u8,
    },
    /// ALU operation on one or two registers.
    Alu {
        /// Operation to perform.
        op: AluOp,
        /// Destination and first source register.
        a: u8,
        /// Second source register; equal to `a` for unary operations.
        b: u8,
    },
}

/// How an instruction leaves the program counter.
///
/// Every executed instruction produces exactly one of these, so no handler
/// can both advance sequentially and branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance the PC by the instruction width.
    Next,
    /// Set the PC to an absolute address.
    Jump(u8),
}

/// Coarse instruction category used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionClass {
    /// `NOP`, `HLT`, `LDI`, `LD`, `ST`.
    Data,
    /// `PUSH`, `POP`.
    Stack,
    /// `CALL`, `RET`, `JMP`, conditional jumps.
    Branch,
    /// ALU operations.
    Alu,
    /// `PRN`, `PRA`.
    Io,
}

impl Instruction {
    /// Category of this instruction.
    pub const fn class(&self) -> InstructionClass {
        match self {
            Self::Nop
            | Self::Halt
            | Self::LoadImmediate { .. }
            | Self::Load { .. }
            | Self::Store { .. } => InstructionClass::Data,
            Self::Push { .. } | Self::Pop { .. } => InstructionClass::Stack,
            Self::Call { .. } | Self::Return | Self::Jump { .. } | Self::Branch { .. } => {
                InstructionClass::Branch
            }
            Self::Alu { .. } => InstructionClass::Alu,
            Self::PrintNumber { .. } | Self::PrintAscii { .. } => InstructionClass::Io,
        }
    }
}
