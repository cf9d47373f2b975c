use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Any operation that creates a non-leaf [`Value`] stores an implementation of this
/// trait in the output node's `grad_fn`. The struct holds what the derivative needs
/// from the forward pass: the operand handles and, where relevant, constants such as
/// an exponent.
///
/// The output node itself is never captured. The backward pass hands the output's
/// accumulated gradient and its forward value to [`backward`](BackwardOp::backward),
/// so no node ever owns a handle to itself and the `Rc` graph is always reclaimed.
pub trait BackwardOp: Debug {
    /// Computes the contribution of this operation to each input's gradient,
    /// given `dL/dOutput` (`grad_output`) and the output's value.
    ///
    /// The contributions are read from the operands' *current* values, so a
    /// parameter update between passes is reflected in the next backward call.
    ///
    /// # Returns
    /// One contribution per input. The order **must** match [`inputs`](BackwardOp::inputs);
    /// an operand listed twice (e.g. `x * x`) gets two entries, which the caller sums.
    fn backward(&self, grad_output: f64, output: f64) -> Vec<f64>;

    /// Returns the operands that took part in the forward operation, in order.
    fn inputs(&self) -> Vec<&Value>;
}
