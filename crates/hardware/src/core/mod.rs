//! Core processor implementation.
//!
//! This module contains the CPU state, the fetch-decode-execute loop, and the
//! execution units it delegates to.

/// Architectural storage (main memory).
pub mod arch;

/// CPU state and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
