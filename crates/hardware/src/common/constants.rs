//! Global System Constants.
//!
//! This module defines the fixed parameters of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Register Constants:** Register count and the reserved stack pointer.
//! 3. **Reset Constants:** Initial stack pointer and program counter.
//! 4. **Encoding Constants:** Opcode field masks and shifts.

/// Number of addressable bytes in main memory.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register reserved as the stack pointer.
pub const SP_REG: usize = 7;

/// Reset value of the stack pointer.
///
/// The stack grows downward from here; addresses `0xF4..=0xFF` stay free.
pub const SP_INIT: u8 = 0xF4;

/// Reset value of the program counter.
pub const PC_INIT: u8 = 0x00;

/// Shift that brings the operand-count field (bits 7-6) of an opcode down to bit 0.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit set in every ALU-class opcode (bit 5).
pub const ALU_BIT: u8 = 0b0010_0000;

/// Bit set in every opcode that may write the program counter (bit 4).
pub const SETS_PC_BIT: u8 = 0b0001_0000;

/// Mask for the instruction identifier field (bits 3-0).
pub const IDENTIFIER_MASK: u8 = 0b0000_1111;
