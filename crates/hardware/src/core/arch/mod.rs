//! LS-8 architectural storage.
//!
//! The register file and flags register live in [`crate::common`]; this
//! module holds main memory.

/// Flat 256-byte main memory.
pub mod ram;
