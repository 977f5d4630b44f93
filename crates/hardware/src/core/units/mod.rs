//! Execution units.

/// Arithmetic logic unit.
pub mod alu;
