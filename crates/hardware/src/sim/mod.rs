//! Program loading.
//!
//! Turns LS-8 program source files into memory images.

pub mod loader;
