//! Main Memory.
//!
//! A flat array of [`MEMORY_SIZE`] bytes holding both program and data.
//! Addresses are `usize` so that PC arithmetic running past the last cell
//! is caught as an out-of-range access instead of wrapping silently.

use std::ops::Range;

use crate::common::constants::MEMORY_SIZE;

/// LS-8 main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ram").field("len", &MEMORY_SIZE).finish()
    }
}

impl Ram {
    /// Creates zero-filled memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte, or `None` if `addr` is outside memory.
    #[inline]
    pub fn read(&self, addr: usize) -> Option<u8> {
        self.cells.get(addr).copied()
    }

    /// Writes one byte.
    ///
    /// # Returns
    ///
    /// `false` if `addr` is outside memory and nothing was written.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> bool {
        self.cells.get_mut(addr).map(|c| *c = val).is_some()
    }

    /// Copies `image` into memory starting at address 0.
    ///
    /// # Returns
    ///
    /// `false` if the image does not fit; memory is left untouched in that case.
    pub fn load_image(&mut self, image: &[u8]) -> bool {
        match self.cells.get_mut(..image.len()) {
            Some(dst) => {
                dst.copy_from_slice(image);
                true
            }
            None => false,
        }
    }

    /// Borrow a range of memory, clamped to the address space.
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        let end = range.end.min(MEMORY_SIZE);
        let start = range.start.min(end);
        &self.cells[start..end]
    }

    /// Entire memory contents.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
