use crate::ops::arithmetic::mul::mul_op;
use crate::ops::traits::IntoOperand;
use crate::value::Value;
use std::ops::Neg;

// --- Forward Operation ---

/// Negates an operand: `a * -1`.
///
/// There is no dedicated backward rule; the gradient comes from `mul_op`, and the
/// `-1` is an ordinary constant leaf.
pub fn neg_op(a: impl IntoOperand) -> Value {
    mul_op(a, -1.0)
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Self::Output {
        neg_op(self)
    }
}
