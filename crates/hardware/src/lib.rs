//! LS-8 emulator library.
//!
//! This crate implements the LS-8, a minimal 8-bit stack-and-register CPU, with the following:
//! 1. **Core:** CPU state, the fetch-decode-execute loop, stack handling, and the ALU.
//! 2. **ISA:** Opcode table, instruction classification, decoding, and disassembly.
//! 3. **Common:** Memory-map constants, register file, flags register, and fault types.
//! 4. **Simulation:** Program image loader, configuration, and statistics collection.

/// Common types and constants (register file, flags, faults, memory map).
pub mod common;
/// Emulator configuration (trace switch, reset vector, stack base).
pub mod config;
/// CPU core (state, execution loop, stack, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program image loader.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds memory, registers, flags, and stats.
pub use crate::core::Cpu;
/// Fatal run-time condition raised by the execution loop.
pub use crate::common::Fault;
/// Error raised while reading a program image.
pub use crate::common::LoadError;
