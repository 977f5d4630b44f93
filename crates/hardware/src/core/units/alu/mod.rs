//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit ALU behind every ALU-class opcode.
//! All results wrap modulo 256.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not, Cmp
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use crate::common::Flags;

/// An ALU operation.
///
/// The set is closed: every variant is handled, so there is no
/// "unsupported operation" path at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`, unsigned.
    Div,
    /// `a % b`, unsigned.
    Mod,
    /// `a + 1`
    Inc,
    /// `a - 1`
    Dec,
    /// Compare `a` with `b`, writing flags only.
    Cmp,
    /// `a & b`
    And,
    /// `!a`
    Not,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// `a << b`
    Shl,
    /// `a >> b`, logical.
    Shr,
}

impl AluOp {
    /// Whether the operation reads only its first operand.
    ///
    /// `NOT` still encodes a second register; the CPU never reads it.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Inc | Self::Dec | Self::Not)
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }
}

/// Where an ALU result goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutput {
    /// Value for the destination register.
    Register(u8),
    /// New contents of the flags register (`CMP`).
    Flags(Flags),
}

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand (value of the destination register).
    /// * `b`  - Second operand; ignored by unary operations.
    ///
    /// # Returns
    ///
    /// The result, or `None` when `DIV`/`MOD` is given a zero divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::common::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 255, 2), Some(AluOutput::Register(1)));
    /// assert_eq!(Alu::execute(AluOp::Shl, 0b1000_0001, 1), Some(AluOutput::Register(0b10)));
    /// assert_eq!(
    ///     Alu::execute(AluOp::Cmp, 7, 3),
    ///     Some(AluOutput::Flags(Flags { equal: false, greater: true, less: false }))
    /// );
    /// assert_eq!(Alu::execute(AluOp::Div, 9, 0), None);
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Option<AluOutput> {
        let value = match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Inc
            | AluOp::Dec => arithmetic::execute(op, a, b)?,

            AluOp::Cmp => return Some(AluOutput::Flags(logic::compare(a, b))),

            AluOp::And | AluOp::Not | AluOp::Or | AluOp::Xor => logic::execute(op, a, b),

            AluOp::Shl | AluOp::Shr => shifts::execute(op, a, b),
        };
        Some(AluOutput::Register(value))
    }
}
