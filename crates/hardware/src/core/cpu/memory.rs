//! Register, Memory, and Stack Access.
//!
//! Every access made on behalf of an instruction goes through these helpers so
//! that out-of-range operands and stack misuse surface as [`Fault`]s tagged
//! with the current program counter.
//!
//! The stack lives in main memory. `R7` points at the current top byte; it is
//! decremented before a push and incremented after a pop. Programs may move
//! `R7` freely, so emptiness is tracked as a push count rather than inferred
//! from the pointer.

use std::io::Write;

use super::Cpu;
use crate::common::{Fault, Operand};

impl<W: Write> Cpu<W> {
    /// Validates a register operand, returning it as an index.
    pub(crate) fn reg_index(&self, idx: u8) -> Result<usize, Fault> {
        let i = idx as usize;
        if self.regs.read(i).is_some() {
            Ok(i)
        } else {
            Err(Fault::OperandOutOfRange {
                operand: Operand::Register(idx),
                pc: self.pc,
            })
        }
    }

    /// Reads a register operand.
    pub fn reg(&self, idx: u8) -> Result<u8, Fault> {
        self.regs
            .read(idx as usize)
            .ok_or(Fault::OperandOutOfRange {
                operand: Operand::Register(idx),
                pc: self.pc,
            })
    }

    /// Writes a register operand.
    pub fn set_reg(&mut self, idx: u8, val: u8) -> Result<(), Fault> {
        if self.regs.write(idx as usize, val) {
            Ok(())
        } else {
            Err(Fault::OperandOutOfRange {
                operand: Operand::Register(idx),
                pc: self.pc,
            })
        }
    }

    /// Reads the byte at `addr` (MAR → MDR).
    pub fn ram_read(&self, addr: usize) -> Result<u8, Fault> {
        self.ram.read(addr).ok_or(Fault::OperandOutOfRange {
            operand: Operand::Address(addr),
            pc: self.pc,
        })
    }

    /// Writes `val` to `addr` (MDR → MAR).
    pub fn ram_write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        if self.ram.write(addr, val) {
            Ok(())
        } else {
            Err(Fault::OperandOutOfRange {
                operand: Operand::Address(addr),
                pc: self.pc,
            })
        }
    }

    /// Pushes one byte: decrement SP, then store at the new SP.
    ///
    /// Fails with `StackOverflow` if SP is already 0.
    pub fn push(&mut self, val: u8) -> Result<(), Fault> {
        let sp = self.regs.sp();
        let Some(top) = sp.checked_sub(1) else {
            return Err(Fault::StackOverflow { sp, pc: self.pc });
        };
        self.ram_write(top as usize, val)?;
        self.regs.set_sp(top);
        self.stack_depth = self.stack_depth.saturating_add(1);
        Ok(())
    }

    /// Pops one byte: load from SP, then increment SP.
    ///
    /// Fails with `StackUnderflow` if nothing has been pushed, or if SP is
    /// already at the top of memory.
    pub fn pop(&mut self) -> Result<u8, Fault> {
        let sp = self.regs.sp();
        let next = sp.checked_add(1);
        let (Some(depth), Some(next)) = (self.stack_depth.checked_sub(1), next) else {
            return Err(Fault::StackUnderflow { sp, pc: self.pc });
        };
        let val = self.ram_read(sp as usize)?;
        self.regs.set_sp(next);
        self.stack_depth = depth;
        Ok(val)
    }
}
