//! ALU arithmetic operations.
//!
//! Implements byte-wide addition, subtraction, and multiplication. Results are
//! reduced modulo 256, so `255 + 1 == 0` and `0 - 1 == 255`.

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform.
/// * `a`  - First operand; the instruction writes the result back to its register.
/// * `b`  - Second operand.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
    }
}
