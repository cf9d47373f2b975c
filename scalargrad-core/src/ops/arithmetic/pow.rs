// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Backward Operation ---

/// Backward context for `base ** exponent` with a constant exponent.
///
/// The exponent is a plain number fixed when the graph is built; it is not a node
/// and receives no gradient.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn inputs(&self) -> Vec<&Value> {
        vec![&self.base]
    }

    /// d(x^n)/dx = n * x^(n-1)
    fn backward(&self, grad_output: f64, _output: f64) -> Vec<f64> {
        let n = self.exponent;
        vec![n * self.base.value().powf(n - 1.0) * grad_output]
    }
}

// --- Forward Operation ---

/// Raises `base` to the constant power `exponent`.
///
/// Follows `f64::powf`: a negative base with a non-integer exponent gives `NaN`,
/// `0 ** -1` gives `inf`. Neither is reported as an error.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let data = base.value().powf(exponent);
    Value::from_op(
        data,
        format!("**{}", exponent),
        PowBackward {
            base: base.clone(),
            exponent,
        },
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
