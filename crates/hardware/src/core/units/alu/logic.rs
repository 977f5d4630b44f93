//! ALU logical and comparison operations.

use super::AluOp;
use crate::common::Flags;

/// Executes a bitwise operation. `Not` ignores `b`.
///
/// # Panics
///
/// If `op` is not a bitwise operation.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => unreachable!("non-bitwise operation routed to the logic unit"),
    }
}

/// Compares two unsigned bytes, setting exactly one of E, G, L.
pub fn compare(a: u8, b: u8) -> Flags {
    Flags::compare(a, b)
}
