//! ALU shift operations.
//!
//! Shifts discard bits moved out of the byte and fill with zero. The shift
//! amount is not masked: shifting by 8 or more yields 0.

use super::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - `Shl` or `Shr`.
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount.
///
/// # Returns
///
/// The shifted byte.
///
/// # Panics
///
/// If `op` is not `Shl` or `Shr`.
pub fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    let amount = u32::from(b);
    match op {
        AluOp::Shl => a.checked_shl(amount).unwrap_or(0),
        AluOp::Shr => a.checked_shr(amount).unwrap_or(0),
        _ => unreachable!("non-shift operation routed to the shift unit"),
    }
}
