// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;

// --- ExpBackward Definition ---

/// Backward pass structure for the exponential.
///
/// Only the operand is stored: the derivative reuses the forward result, which the
/// backward pass supplies as `output`.
#[derive(Debug)]
struct ExpBackward {
    a: Value,
}

// --- BackwardOp Implementation for ExpBackward ---

impl BackwardOp for ExpBackward {
    /// Computes the gradient for `z = e^a`.
    ///
    /// Since `dz/da = e^a = z`, the gradient is `dL/da = dL/dz * z`.
    fn backward(&self, grad_output: f64, output: f64) -> Vec<f64> {
        vec![output * grad_output]
    }

    fn inputs(&self) -> Vec<&Value> {
        vec![&self.a]
    }
}

// --- exp_op Implementation (Public API + Autograd Setup) ---

/// Computes `e^x` for the given node.
///
/// Large inputs overflow to `inf` and the gradient follows.
pub fn exp_op(a: &Value) -> Value {
    apply_unary_op(a, f64::exp, |a| ExpBackward { a }, "exp")
}
