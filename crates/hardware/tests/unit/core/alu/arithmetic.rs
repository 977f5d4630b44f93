//! ALU Arithmetic Tests
//!
//! All results wrap modulo 256; division and remainder are unsigned.

use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
use rstest::rstest;

fn value(op: AluOp, a: u8, b: u8) -> Option<u8> {
    match Alu::execute(op, a, b) {
        Some(AluOutput::Register(v)) => Some(v),
        Some(AluOutput::Flags(_)) => panic!("{op:?} should write a register"),
        None => None,
    }
}

#[rstest]
#[case(AluOp::Add, 8, 9, 17)]
#[case(AluOp::Add, 255, 2, 1)]
#[case(AluOp::Add, 128, 128, 0)]
#[case(AluOp::Sub, 9, 8, 1)]
#[case(AluOp::Sub, 0, 1, 255)]
#[case(AluOp::Sub, 3, 5, 254)]
#[case(AluOp::Mul, 8, 9, 72)]
#[case(AluOp::Mul, 16, 16, 0)]
#[case(AluOp::Mul, 200, 2, 144)]
#[case(AluOp::Div, 72, 9, 8)]
#[case(AluOp::Div, 7, 2, 3)]
#[case(AluOp::Div, 0, 5, 0)]
#[case(AluOp::Mod, 7, 2, 1)]
#[case(AluOp::Mod, 255, 16, 15)]
#[case(AluOp::Inc, 41, 0, 42)]
#[case(AluOp::Inc, 255, 0, 0)]
#[case(AluOp::Dec, 1, 0, 0)]
#[case(AluOp::Dec, 0, 0, 255)]
fn arithmetic_vectors(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(value(op, a, b), Some(expected));
}

#[rstest]
#[case(AluOp::Div)]
#[case(AluOp::Mod)]
fn zero_divisor_is_reported(#[case] op: AluOp) {
    assert_eq!(Alu::execute(op, 10, 0), None);
}

#[test]
fn unary_ops_ignore_second_operand() {
    assert_eq!(value(AluOp::Inc, 5, 0), value(AluOp::Inc, 5, 200));
    assert_eq!(value(AluOp::Dec, 5, 0), value(AluOp::Dec, 5, 200));
}

#[test]
fn add_is_commutative_across_byte_range() {
    for a in (0..=255u8).step_by(17) {
        for b in (0..=255u8).step_by(13) {
            assert_eq!(value(AluOp::Add, a, b), value(AluOp::Add, b, a));
        }
    }
}

#[test]
#[should_panic(expected = "arithmetic unit")]
fn arithmetic_unit_rejects_misrouted_operation() {
    let _ = ls8_core::core::units::alu::arithmetic::execute(AluOp::Xor, 1, 2);
}
