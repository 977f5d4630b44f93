//! Instruction Disassembler for the LS-8.
//!
//! Converts instruction bytes into a human-readable mnemonic string for debug
//! tracing, fault dumps, and the `ls8 disasm` command.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0b1000_0010, 0, 8]), "LDI R0, 8");
//! assert_eq!(disassemble(&[0b1010_0000, 0, 1]), "ADD R0, R1");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionBits};

/// Disassembles the instruction starting at `bytes[0]`.
///
/// Missing operand bytes read as zero. Returns `".byte 0x.."` for opcodes
/// with no handler.
pub fn disassemble(bytes: &[u8]) -> String {
    let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
    let opcode = at(0);
    let Some(inst) = decode(opcode, at(1), at(2)) else {
        return format!(".byte {opcode:#04x}");
    };
    match inst {
        Instruction::Nop => "NOP".to_string(),
        Instruction::Halt => "HLT".to_string(),
        Instruction::Return => "RET".to_string(),
        Instruction::LoadImmediate { reg, value } => format!("LDI R{reg}, {value}"),
        Instruction::Load { dst, addr_reg } => format!("LD R{dst}, R{addr_reg}"),
        Instruction::Store { addr_reg, src } => format!("ST R{addr_reg}, R{src}"),
        Instruction::PrintNumber { reg } => format!("PRN R{reg}"),
        Instruction::PrintAscii { reg } => format!("PRA R{reg}"),
        Instruction::Push { reg } => format!("PUSH R{reg}"),
        Instruction::Pop { reg } => format!("POP R{reg}"),
        Instruction::Call { reg } => format!("CALL R{reg}"),
        Instruction::Jump { reg } => format!("JMP R{reg}"),
        Instruction::Branch { cond, reg } => format!("{} R{reg}", cond.mnemonic()),
        Instruction::Alu { op, a, b } => {
            if opcode.operand_count() == 1 {
                format!("{} R{a}", op.mnemonic())
            } else {
                format!("{} R{a}, R{b}", op.mnemonic())
            }
        }
    }
}

/// Disassembles a whole program image, one line per instruction.
///
/// Each entry is the instruction address and its text. Bytes that do not
/// decode are listed individually as `.byte` data.
pub fn disassemble_program(image: &[u8]) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut addr = 0;
    while let Some(rest) = image.get(addr..).filter(|r| !r.is_empty()) {
        out.push((addr, disassemble(rest)));
        addr += if decode(rest[0], 0, 0).is_some() {
            rest[0].width()
        } else {
            1
        };
    }
    out
}
