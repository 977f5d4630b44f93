//! LS-8 Instruction Decoder.
//!
//! Maps an opcode byte and its operand bytes onto a structured `Instruction`.
//! The mapping is a single exhaustive `match`, so the branch table is resolved
//! at compile time. Operand bytes beyond the instruction's width are ignored.

use crate::core::units::alu::AluOp;
use crate::isa::instruction::{Condition, Instruction, InstructionBits};
use crate::isa::opcodes as op;

/// Every opcode the decoder accepts, in ascending order.
pub const DEFINED_OPCODES: [u8; 32] = [
    op::NOP,
    op::HLT,
    op::RET,
    op::PUSH,
    op::POP,
    op::PRN,
    op::PRA,
    op::CALL,
    op::JMP,
    op::JEQ,
    op::JNE,
    op::JGT,
    op::JLT,
    op::JLE,
    op::JGE,
    op::INC,
    op::DEC,
    op::NOT,
    op::LDI,
    op::LD,
    op::ST,
    op::ADD,
    op::SUB,
    op::MUL,
    op::DIV,
    op::MOD,
    op::CMP,
    op::AND,
    op::OR,
    op::XOR,
    op::SHL,
    op::SHR,
];

/// Returns the ALU operation selected by an ALU-class opcode.
fn alu_op(opcode: u8) -> Option<AluOp> {
    Some(match opcode {
        op::ADD => AluOp::Add,
        op::SUB => AluOp::Sub,
        op::MUL => AluOp::Mul,
        op::DIV => AluOp::Div,
        op::MOD => AluOp::Mod,
        op::INC => AluOp::Inc,
        op::DEC => AluOp::Dec,
        op::CMP => AluOp::Cmp,
        op::AND => AluOp::And,
        op::NOT => AluOp::Not,
        op::OR => AluOp::Or,
        op::XOR => AluOp::Xor,
        op::SHL => AluOp::Shl,
        op::SHR => AluOp::Shr,
        _ => return None,
    })
}

/// Decodes one instruction.
///
/// # Arguments
///
/// * `opcode` - The instruction byte fetched at the PC.
/// * `a` - First operand byte (ignored by zero-operand instructions).
/// * `b` - Second operand byte (ignored unless the opcode takes two operands).
///
/// # Returns
///
/// The decoded instruction, or `None` if `opcode` has no handler.
pub fn decode(opcode: u8, a: u8, b: u8) -> Option<Instruction> {
    let inst = match opcode {
        op::NOP => Instruction::Nop,
        op::HLT => Instruction::Halt,
        op::RET => Instruction::Return,

        op::PUSH => Instruction::Push { reg: a },
        op::POP => Instruction::Pop { reg: a },
        op::PRN => Instruction::PrintNumber { reg: a },
        op::PRA => Instruction::PrintAscii { reg: a },

        op::CALL => Instruction::Call { reg: a },
        op::JMP => Instruction::Jump { reg: a },
        op::JEQ => branch(Condition::Equal, a),
        op::JNE => branch(Condition::NotEqual, a),
        op::JGT => branch(Condition::Greater, a),
        op::JLT => branch(Condition::Less, a),
        op::JLE => branch(Condition::LessOrEqual, a),
        op::JGE => branch(Condition::GreaterOrEqual, a),

        op::LDI => Instruction::LoadImmediate { reg: a, value: b },
        op::LD => Instruction::Load { dst: a, addr_reg: b },
        op::ST => Instruction::Store { addr_reg: a, src: b },

        _ => {
            let op = alu_op(opcode)?;
            let b = if opcode.operand_count() == 2 { b } else { a };
            Instruction::Alu { op, a, b }
        }
    };
    Some(inst)
}

/// Whether `opcode` has a handler.
pub fn is_defined(opcode: u8) -> bool {
    decode(opcode, 0, 0).is_some()
}

#[inline]
const fn branch(cond: Condition, reg: u8) -> Instruction {
    Instruction::Branch { cond, reg }
}
