//! ALU arithmetic operations.
//!
//! Add, subtract, multiply, increment, and decrement wrap modulo 256.
//! Division and remainder are unsigned and report a zero divisor as `None`.

use super::AluOp;

/// Executes an arithmetic operation.
///
/// # Returns
///
/// The 8-bit result, or `None` for `Div`/`Mod` by zero.
///
/// # Panics
///
/// If `op` is not an arithmetic operation; [`Alu::execute`](super::Alu::execute)
/// never routes one here.
pub fn execute(op: AluOp, a: u8, b: u8) -> Option<u8> {
    match op {
        AluOp::Add => Some(a.wrapping_add(b)),
        AluOp::Sub => Some(a.wrapping_sub(b)),
        AluOp::Mul => Some(a.wrapping_mul(b)),
        AluOp::Div => a.checked_div(b),
        AluOp::Mod => a.checked_rem(b),
        AluOp::Inc => Some(a.wrapping_add(1)),
        AluOp::Dec => Some(a.wrapping_sub(1)),
        _ => unreachable!("non-arithmetic operation routed to the arithmetic unit"),
    }
}
