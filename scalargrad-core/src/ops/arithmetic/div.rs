use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use crate::ops::traits::IntoOperand;
use crate::value::Value;

// --- Forward Operation ---

/// Divides two operands: `a * b^-1`.
///
/// Builds one extra power node; gradients come from `mul_op` and `pow_op`.
/// Division by a zero-valued node yields `inf`/`NaN` in both the value and the
/// gradients, following IEEE-754.
pub fn div_op(a: impl IntoOperand, b: impl IntoOperand) -> Value {
    let b = b.into_operand();
    mul_op(a, pow_op(&b, -1.0))
}

impl_binary_operator!(Div, div, div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
