//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 8-bit
//! registers `R0`-`R7`. It provides:
//! 1. **Storage:** Eight unsigned bytes; arithmetic on them wraps modulo 256.
//! 2. **Checked Access:** Indexed reads and writes that reject indices above 7.
//! 3. **Stack Pointer:** Convenience accessors for `R7`, reserved as SP.
//! 4. **Observability:** Debugging utilities for dumping register state.

use super::constants::{REGISTER_COUNT, SP_INIT, SP_REG};

/// LS-8 register file.
///
/// `R7` is reset to [`SP_INIT`]; every other register resets to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file in its reset state.
    pub const fn new() -> Self {
        Self::with_stack_pointer(SP_INIT)
    }

    /// Creates a register file in its reset state with a custom stack pointer.
    pub const fn with_stack_pointer(sp: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP_REG] = sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Returns
    ///
    /// The stored byte, or `None` if `idx` is not a register.
    #[inline]
    pub fn read(&self, idx: usize) -> Option<u8> {
        self.regs.get(idx).copied()
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - Byte to store.
    ///
    /// # Returns
    ///
    /// `false` if `idx` is not a register and nothing was written.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) -> bool {
        self.regs.get_mut(idx).map(|r| *r = val).is_some()
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP_REG]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, sp: u8) {
        self.regs[SP_REG] = sp;
    }

    /// All registers in index order.
    pub const fn as_array(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }

    /// Dumps the contents of all registers to stderr.
    pub fn dump(&self) {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            eprintln!(
                "R{}={:#04x} ({:>3})  R{}={:#04x} ({:>3})",
                i * 2,
                pair[0],
                pair[0],
                i * 2 + 1,
                pair[1],
                pair[1]
            );
        }
    }
}
