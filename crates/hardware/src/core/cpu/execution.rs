//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode at the PC into the instruction register.
//! 2. **Decode:** Resolves the opcode through the compile-time branch table in [`decode`].
//! 3. **Execute:** Runs the handler, which reports a [`Flow`] instead of touching the PC.
//! 4. **Advance:** Moves the PC by the instruction width, or to the jump target.
//!
//! Any [`Fault`] stops the loop and is returned to the caller unchanged.

use std::io::{self, Write};

use tracing::{debug, trace, warn};

use super::Cpu;
use crate::common::{Fault, Operand};
use crate::core::units::alu::{Alu, AluOp, AluOutput};
use crate::isa::decode::decode;
use crate::isa::instruction::{Flow, Instruction, InstructionBits};

impl<W: Write> Cpu<W> {
    /// Runs until `HLT` or a fault.
    ///
    /// Sets the running flag, then steps while it stays set. On a fault the
    /// running flag is cleared and the fault returned; the PC still points at
    /// the offending instruction.
    pub fn run(&mut self) -> Result<(), Fault> {
        self.running = true;
        debug!(pc = self.pc, "execution started");
        while self.running {
            if let Err(fault) = self.step() {
                self.running = false;
                warn!(%fault, "execution stopped by fault");
                return Err(fault);
            }
        }
        debug!(
            pc = self.pc,
            retired = self.stats.instructions_retired,
            "halted"
        );
        Ok(())
    }

    /// Fetches, decodes, and executes a single instruction.
    pub fn step(&mut self) -> Result<(), Fault> {
        if self.trace {
            eprintln!("{}", self.trace_line());
        }

        let pc = self.pc;
        let opcode = self.ram_read(pc)?;
        self.ir = opcode;

        let a = self.ram.read(pc + 1);
        let b = self.ram.read(pc + 2);
        let inst = decode(opcode, a.unwrap_or(0), b.unwrap_or(0))
            .ok_or(Fault::InvalidInstruction { opcode, pc })?;

        let width = opcode.width();
        if let Some(missing) = (pc + 1..pc + width).find(|&addr| self.ram.read(addr).is_none()) {
            return Err(Fault::OperandOutOfRange {
                operand: Operand::Address(missing),
                pc,
            });
        }

        let flow = self.execute(inst)?;
        self.pc = match flow {
            Flow::Next => pc + width,
            Flow::Jump(target) => target as usize,
        };
        self.stats.retire(inst.class());
        trace!(pc = pc, ?inst, next = self.pc, "retired");
        Ok(())
    }

    /// Executes one decoded instruction against the current state.
    ///
    /// The PC is left untouched; the returned [`Flow`] says how to move it.
    pub fn execute(&mut self, inst: Instruction) -> Result<Flow, Fault> {
        match inst {
            Instruction::Nop => {}
            Instruction::Halt => self.running = false,

            Instruction::LoadImmediate { reg, value } => self.set_reg(reg, value)?,
            Instruction::Load { dst, addr_reg } => {
                let addr = self.reg(addr_reg)?;
                let val = self.ram_read(addr as usize)?;
                self.set_reg(dst, val)?;
            }
            Instruction::Store { addr_reg, src } => {
                let addr = self.reg(addr_reg)?;
                let val = self.reg(src)?;
                self.ram_write(addr as usize, val)?;
            }

            Instruction::PrintNumber { reg } => {
                let val = self.reg(reg)?;
                let written = writeln!(self.console, "{val}");
                self.console_flush(written)?;
            }
            Instruction::PrintAscii { reg } => {
                let val = self.reg(reg)?;
                let written = self.console.write_all(&[val]);
                self.console_flush(written)?;
            }

            Instruction::Push { reg } => {
                let val = self.reg(reg)?;
                self.push(val)?;
            }
            Instruction::Pop { reg } => {
                let idx = self.reg_index(reg)?;
                let val = self.pop()?;
                let _ = self.regs.write(idx, val);
            }

            Instruction::Call { reg } => {
                let target = self.reg(reg)?;
                let ret = self.pc + 2;
                let ret = u8::try_from(ret).map_err(|_| Fault::OperandOutOfRange {
                    operand: Operand::Address(ret),
                    pc: self.pc,
                })?;
                self.push(ret)?;
                return Ok(Flow::Jump(target));
            }
            Instruction::Return => return Ok(Flow::Jump(self.pop()?)),
            Instruction::Jump { reg } => return Ok(Flow::Jump(self.reg(reg)?)),
            Instruction::Branch { cond, reg } => {
                let target = self.reg(reg)?;
                let taken = cond.holds(self.flags);
                self.stats.record_branch(taken);
                if taken {
                    return Ok(Flow::Jump(target));
                }
            }

            Instruction::Alu { op, a, b } => self.alu(op, a, b)?,
        }
        Ok(Flow::Next)
    }

    /// Applies an ALU operation to two registers.
    ///
    /// The result goes to `reg_a`, except for `CMP`, which writes the flags
    /// register and leaves both registers unchanged. Unary operations never
    /// read `reg_b`.
    pub fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), Fault> {
        let a = self.reg(reg_a)?;
        let b = if op.is_unary() { a } else { self.reg(reg_b)? };
        match Alu::execute(op, a, b) {
            Some(AluOutput::Register(val)) => self.set_reg(reg_a, val),
            Some(AluOutput::Flags(flags)) => {
                self.flags = flags;
                Ok(())
            }
            None => Err(Fault::DivisionByZero { pc: self.pc }),
        }
    }

    /// Flushes the console after a write, turning either failure into a fault.
    fn console_flush(&mut self, written: io::Result<()>) -> Result<(), Fault> {
        written
            .and_then(|()| self.console.flush())
            .map_err(|e| {
                warn!(error = %e, "console write failed");
                Fault::ConsoleWrite { pc: self.pc }
            })
    }
}
