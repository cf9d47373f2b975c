use crate::autograd::backward_op::BackwardOp;
use crate::ops::traits::IntoOperand;
use crate::value::Value;

// --- Backward Operation Structure ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

// --- Backward Operation Implementation ---

impl BackwardOp for AddBackward {
    fn inputs(&self) -> Vec<&Value> {
        vec![&self.a, &self.b]
    }

    /// d(a + b)/da = d(a + b)/db = 1: both operands receive the upstream gradient.
    fn backward(&self, grad_output: f64, _output: f64) -> Vec<f64> {
        vec![grad_output, grad_output]
    }
}

// --- Forward Operation ---

/// Adds two operands, `a + b`.
///
/// Either side may be a `Value`, a `&Value` or a plain number.
pub fn add_op(a: impl IntoOperand, b: impl IntoOperand) -> Value {
    let a = a.into_operand();
    let b = b.into_operand();
    let data = a.value() + b.value();
    Value::from_op(data, "+", AddBackward { a, b })
}

impl_binary_operator!(Add, add, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
