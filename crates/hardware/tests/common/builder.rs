//! Fluent LS-8 program builder.
//!
//! Emits raw instruction bytes so tests read like assembly listings.

use ls8_core::isa::opcodes as op;

/// Assembles an LS-8 program.
#[derive(Debug, Default, Clone)]
pub struct ProgramBuilder {
    bytes: Vec<u8>,
}

impl ProgramBuilder {
    /// Starts an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw bytes.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    fn emit0(self, opcode: u8) -> Self {
        self.raw(&[opcode])
    }

    fn emit1(self, opcode: u8, a: u8) -> Self {
        self.raw(&[opcode, a])
    }

    fn emit2(self, opcode: u8, a: u8, b: u8) -> Self {
        self.raw(&[opcode, a, b])
    }

    pub fn nop(self) -> Self {
        self.emit0(op::NOP)
    }
    pub fn hlt(self) -> Self {
        self.emit0(op::HLT)
    }
    pub fn ret(self) -> Self {
        self.emit0(op::RET)
    }

    pub fn ldi(self, reg: u8, value: u8) -> Self {
        self.emit2(op::LDI, reg, value)
    }
    pub fn ld(self, dst: u8, addr_reg: u8) -> Self {
        self.emit2(op::LD, dst, addr_reg)
    }
    pub fn st(self, addr_reg: u8, src: u8) -> Self {
        self.emit2(op::ST, addr_reg, src)
    }

    pub fn prn(self, reg: u8) -> Self {
        self.emit1(op::PRN, reg)
    }
    pub fn pra(self, reg: u8) -> Self {
        self.emit1(op::PRA, reg)
    }
    pub fn push(self, reg: u8) -> Self {
        self.emit1(op::PUSH, reg)
    }
    pub fn pop(self, reg: u8) -> Self {
        self.emit1(op::POP, reg)
    }

    pub fn call(self, reg: u8) -> Self {
        self.emit1(op::CALL, reg)
    }
    pub fn jmp(self, reg: u8) -> Self {
        self.emit1(op::JMP, reg)
    }
    pub fn jeq(self, reg: u8) -> Self {
        self.emit1(op::JEQ, reg)
    }
    pub fn jne(self, reg: u8) -> Self {
        self.emit1(op::JNE, reg)
    }
    pub fn jgt(self, reg: u8) -> Self {
        self.emit1(op::JGT, reg)
    }
    pub fn jlt(self, reg: u8) -> Self {
        self.emit1(op::JLT, reg)
    }
    pub fn jle(self, reg: u8) -> Self {
        self.emit1(op::JLE, reg)
    }
    pub fn jge(self, reg: u8) -> Self {
        self.emit1(op::JGE, reg)
    }

    /// Any two-operand ALU instruction by opcode.
    pub fn alu(self, opcode: u8, a: u8, b: u8) -> Self {
        self.emit2(opcode, a, b)
    }
    pub fn add(self, a: u8, b: u8) -> Self {
        self.emit2(op::ADD, a, b)
    }
    pub fn mul(self, a: u8, b: u8) -> Self {
        self.emit2(op::MUL, a, b)
    }
    pub fn cmp(self, a: u8, b: u8) -> Self {
        self.emit2(op::CMP, a, b)
    }
    pub fn inc(self, reg: u8) -> Self {
        self.emit1(op::INC, reg)
    }
    pub fn dec(self, reg: u8) -> Self {
        self.emit1(op::DEC, reg)
    }
    /// `NOT a, b`; `b` is encoded but ignored by the CPU.
    pub fn not(self, a: u8, b: u8) -> Self {
        self.emit2(op::NOT, a, b)
    }

    /// Finished image.
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
