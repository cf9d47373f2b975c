use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

impl Value {
    /// Returns the scalar held by this node.
    pub fn value(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the gradient accumulated so far.
    pub fn gradient(&self) -> f64 {
        self.read_data().grad
    }

    pub fn label(&self) -> String {
        self.read_data().label.clone()
    }

    /// Returns the tag of the operation that produced this node (`""` for a leaf).
    pub fn op(&self) -> String {
        self.read_data().op.clone()
    }

    /// Returns `true` if this node was not produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the operands of the producing operation, in order (empty for a leaf).
    pub fn operands(&self) -> Vec<Value> {
        match self.grad_fn() {
            Some(grad_fn) => grad_fn.inputs().into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Returns the backward rule of the producing operation, if any.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Overwrites the value. Meant for parameter updates between passes; values of
    /// nodes downstream are not recomputed.
    pub fn set_value(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Overwrites the accumulated gradient.
    pub fn set_gradient(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` to the accumulated gradient.
    pub fn add_to_gradient(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Resets the accumulated gradient to zero.
    ///
    /// Gradients accumulate across backward passes; call this on every parameter
    /// before reusing a graph or its leaves.
    pub fn reset_gradient(&self) {
        self.write_data().grad = 0.0;
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = label.into();
    }
}
