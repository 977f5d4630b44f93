//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, instruction classification, decoding logic,
//! and a disassembler.
//!
//! # Encoding
//!
//! Every opcode follows the layout `AABCDDDD`:
//!
//! * `AA`: number of operand bytes that follow (0-2).
//! * `B`: set for ALU operations.
//! * `C`: set for instructions that may write the program counter.
//! * `DDDD`: instruction identifier.

/// Instruction decoding from raw bytes.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Decoded instruction forms and opcode classification.
pub mod instruction;

/// Opcode byte values.
pub mod opcodes;
