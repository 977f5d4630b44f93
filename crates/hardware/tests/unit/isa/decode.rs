//! # Decoder Tests
//!
//! Checks the opcode table against the `AABCDDDD` field layout.

use ls8_core::core::units::alu::AluOp;
use ls8_core::isa::decode::{DEFINED_OPCODES, decode, is_defined};
use ls8_core::isa::instruction::{Condition, Instruction, InstructionBits, InstructionClass};
use ls8_core::isa::opcodes as op;
use rstest::rstest;

#[test]
fn defined_opcodes_are_sorted_and_unique() {
    assert!(DEFINED_OPCODES.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn every_defined_opcode_decodes() {
    for &opcode in &DEFINED_OPCODES {
        assert!(decode(opcode, 1, 2).is_some(), "{opcode:#010b} should decode");
    }
}

#[test]
fn every_other_byte_is_rejected() {
    let undefined = (0..=u8::MAX).filter(|b| !DEFINED_OPCODES.contains(b));
    let mut count = 0;
    for opcode in undefined {
        assert!(!is_defined(opcode), "{opcode:#010b} should not decode");
        count += 1;
    }
    assert_eq!(count, 256 - DEFINED_OPCODES.len());
}

#[test]
fn alu_bit_matches_alu_instructions() {
    for &opcode in &DEFINED_OPCODES {
        let inst = decode(opcode, 0, 0).expect("defined");
        assert_eq!(
            opcode.is_alu(),
            matches!(inst, Instruction::Alu { .. }),
            "{opcode:#010b}"
        );
    }
}

#[test]
fn sets_pc_bit_matches_control_transfers() {
    for &opcode in &DEFINED_OPCODES {
        let inst = decode(opcode, 0, 0).expect("defined");
        assert_eq!(
            opcode.sets_pc(),
            inst.class() == InstructionClass::Branch,
            "{opcode:#010b}"
        );
    }
}

#[rstest]
#[case(op::HLT, 0, 1)]
#[case(op::RET, 0, 1)]
#[case(op::PRN, 1, 2)]
#[case(op::CALL, 1, 2)]
#[case(op::LDI, 2, 3)]
#[case(op::CMP, 2, 3)]
fn width_comes_from_high_bits(#[case] opcode: u8, #[case] operands: usize, #[case] width: usize) {
    assert_eq!(opcode.operand_count(), operands);
    assert_eq!(opcode.width(), width);
}

#[test]
fn not_carries_two_operand_bytes() {
    assert_eq!(op::NOT >> 6, 1);
    assert_eq!(op::NOT.operand_count(), 2);
    assert_eq!(op::NOT.width(), 3);
}

#[test]
fn identifier_is_low_nibble() {
    assert_eq!(op::LDI.identifier(), 0b0010);
    assert_eq!(op::JGE.identifier(), 0b1010);
    assert_eq!(op::SHR.identifier(), 0b1101);
}

#[test]
fn two_operand_forms_keep_operand_order() {
    assert_eq!(
        decode(op::LDI, 3, 0x7F),
        Some(Instruction::LoadImmediate { reg: 3, value: 0x7F })
    );
    assert_eq!(
        decode(op::LD, 1, 2),
        Some(Instruction::Load { dst: 1, addr_reg: 2 })
    );
    assert_eq!(
        decode(op::ST, 1, 2),
        Some(Instruction::Store { addr_reg: 1, src: 2 })
    );
    assert_eq!(
        decode(op::SUB, 4, 5),
        Some(Instruction::Alu {
            op: AluOp::Sub,
            a: 4,
            b: 5
        })
    );
}

#[rstest]
#[case(op::INC, AluOp::Inc)]
#[case(op::DEC, AluOp::Dec)]
fn one_operand_alu_ignores_second_byte(#[case] opcode: u8, #[case] alu: AluOp) {
    assert_eq!(
        decode(opcode, 2, 0xEE),
        Some(Instruction::Alu { op: alu, a: 2, b: 2 })
    );
}

#[test]
fn not_decodes_both_register_bytes() {
    assert_eq!(
        decode(op::NOT, 2, 5),
        Some(Instruction::Alu {
            op: AluOp::Not,
            a: 2,
            b: 5
        })
    );
}

#[rstest]
#[case(op::JEQ, Condition::Equal)]
#[case(op::JNE, Condition::NotEqual)]
#[case(op::JGT, Condition::Greater)]
#[case(op::JLT, Condition::Less)]
#[case(op::JLE, Condition::LessOrEqual)]
#[case(op::JGE, Condition::GreaterOrEqual)]
fn conditional_jumps_map_to_conditions(#[case] opcode: u8, #[case] cond: Condition) {
    assert_eq!(decode(opcode, 4, 0), Some(Instruction::Branch { cond, reg: 4 }));
}

#[test]
fn interrupt_opcodes_are_not_defined() {
    assert!(!is_defined(0b0101_0010)); // INT
    assert!(!is_defined(0b0001_0011)); // IRET
}
