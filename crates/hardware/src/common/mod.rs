//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides the building blocks shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Memory size, register count, and reset values.
//! 2. **Error Handling:** Load errors and run-time faults.
//! 3. **Register Management:** The general-purpose register file and flags register.

/// Common constants used throughout the emulator.
pub mod constants;

/// Error types and fault definitions.
pub mod error;

/// Flags register (E, G, L).
pub mod flags;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP_INIT, SP_REG};
pub use error::{Fault, LoadError, Operand};
pub use flags::Flags;
pub use reg::RegisterFile;
