//! Fault and Load Error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Load Errors:** Failures reading or parsing a program image, raised before execution.
//! 2. **Faults:** Fatal run-time conditions that stop the execute loop.
//! 3. **Exit Codes:** The process exit status associated with each load failure.
//!
//! Every fault is unrecoverable: the CPU is either executing correctly or halted.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a program image for the CPU.
///
/// All variants are raised before the first instruction executes, and a
/// failed load never leaves a partially written image in memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("could not open {}: file not found", path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The program file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line did not hold an 8-bit base-2 literal.
    #[error("invalid number on line {line}: {token:?}")]
    InvalidLiteral {
        /// One-based line number in the source text.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The image contained no instruction bytes.
    #[error("program contains no instructions")]
    EmptyProgram,

    /// The image does not fit in main memory.
    #[error("program is {len} bytes, larger than the {max}-byte address space")]
    ProgramTooLarge {
        /// Size of the rejected image.
        len: usize,
        /// Capacity of main memory.
        max: usize,
    },
}

impl LoadError {
    /// Returns the process exit status the CLI reports for this error.
    ///
    /// * `1` - unreadable or malformed input.
    /// * `2` - file not found.
    /// * `3` - empty program.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => 2,
            Self::EmptyProgram => 3,
            Self::Io { .. } | Self::InvalidLiteral { .. } | Self::ProgramTooLarge { .. } => 1,
        }
    }
}

/// An instruction operand that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// A register index outside `R0..=R7`.
    Register(u8),
    /// A memory address outside `0x00..=0xFF`.
    Address(usize),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(idx) => write!(f, "register R{idx}"),
            Self::Address(addr) => write!(f, "address {addr:#04x}"),
        }
    }
}

/// Fatal run-time condition raised by the execution loop.
///
/// Each variant records the program counter of the instruction that caused it.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Fault {
    /// The fetched opcode has no handler.
    #[error("InvalidInstruction({opcode:#010b}) at pc={pc:#04x}")]
    InvalidInstruction {
        /// The unrecognised opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// A push would move the stack pointer below address 0.
    #[error("StackOverflow(sp={sp:#04x}) at pc={pc:#04x}")]
    StackOverflow {
        /// Stack pointer before the push.
        sp: u8,
        /// Address of the pushing instruction.
        pc: usize,
    },

    /// A pop was attempted on an empty stack.
    #[error("StackUnderflow(sp={sp:#04x}) at pc={pc:#04x}")]
    StackUnderflow {
        /// Stack pointer before the pop.
        sp: u8,
        /// Address of the popping instruction.
        pc: usize,
    },

    /// A decoded register index or memory address is out of range.
    #[error("OperandOutOfRange({operand}) at pc={pc:#04x}")]
    OperandOutOfRange {
        /// The offending operand.
        operand: Operand,
        /// Address of the instruction.
        pc: usize,
    },

    /// `DIV` or `MOD` with a zero divisor.
    #[error("DivisionByZero at pc={pc:#04x}")]
    DivisionByZero {
        /// Address of the instruction.
        pc: usize,
    },

    /// `PRN` or `PRA` could not write to the console.
    #[error("ConsoleWrite at pc={pc:#04x}")]
    ConsoleWrite {
        /// Address of the instruction.
        pc: usize,
    },
}

impl Fault {
    /// Returns the program counter recorded with the fault.
    pub const fn pc(&self) -> usize {
        match *self {
            Self::InvalidInstruction { pc, .. }
            | Self::StackOverflow { pc, .. }
            | Self::StackUnderflow { pc, .. }
            | Self::OperandOutOfRange { pc, .. }
            | Self::DivisionByZero { pc }
            | Self::ConsoleWrite { pc } => pc,
        }
    }
}
