use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::IntoOperand;
use crate::value::Value;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
}

// --- Backward Operation Implementation ---

impl BackwardOp for MulBackward {
    fn inputs(&self) -> Vec<&Value> {
        vec![&self.a, &self.b]
    }

    fn backward(&self, grad_output: f64, _output: f64) -> Vec<f64> {
        // grad_a = grad_output * b, grad_b = grad_output * a
        vec![self.b.value() * grad_output, self.a.value() * grad_output]
    }
}

// --- Forward Operation ---

/// Multiplies two operands, `a * b`.
///
/// Either side may be a `Value`, a `&Value` or a plain number.
pub fn mul_op(a: impl IntoOperand, b: impl IntoOperand) -> Value {
    let a = a.into_operand();
    let b = b.into_operand();
    let data = a.value() * b.value();
    Value::from_op(data, "*", MulBackward { a, b })
}

impl_binary_operator!(Mul, mul, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
