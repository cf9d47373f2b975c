use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Backward context for the hyperbolic tangent.
#[derive(Debug)]
struct TanhBackward {
    a: Value,
}

impl BackwardOp for TanhBackward {
    /// d(tanh a)/da = 1 - tanh(a)^2, computed from the forward output.
    fn backward(&self, grad_output: f64, output: f64) -> Vec<f64> {
        vec![(1.0 - output * output) * grad_output]
    }

    fn inputs(&self) -> Vec<&Value> {
        vec![&self.a]
    }
}

/// Applies the hyperbolic tangent.
pub fn tanh_op(a: &Value) -> Value {
    apply_unary_op(a, f64::tanh, |a| TanhBackward { a }, "tanh")
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
