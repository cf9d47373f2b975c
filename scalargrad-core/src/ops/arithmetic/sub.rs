use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::traits::IntoOperand;
use crate::value::Value;

// --- Forward Operation ---

/// Subtracts two operands: `a + (-b)`.
///
/// Builds one extra negation node; gradients come from `add_op` and `mul_op`.
pub fn sub_op(a: impl IntoOperand, b: impl IntoOperand) -> Value {
    add_op(a, neg_op(b))
}

impl_binary_operator!(Sub, sub, sub_op);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
