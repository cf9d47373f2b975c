// src/value_data.rs
use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Internal storage for a single node of the computation graph.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by [`Value`](crate::Value) so that
/// several downstream nodes can share it as an operand while the backward pass
/// still mutates its gradient.
pub struct ValueData {
    /// The scalar computed by the forward pass (or supplied for a leaf).
    pub(crate) data: f64,
    /// Accumulated d(root)/d(this). Starts at zero and is only ever incremented,
    /// overwritten by `set_gradient`, or cleared by `reset_gradient`.
    pub(crate) grad: f64,
    /// Debugging label, empty by default.
    pub(crate) label: String,
    /// Tag of the operation that produced this node (`""` for leaves).
    pub(crate) op: String,
    /// The local-gradient rule of the producing operation. It owns handles to
    /// the operands but never to this node: the output's gradient and value are
    /// passed in by the backward pass instead.
    /// Leaves have `grad_fn = None`.
    pub(crate) grad_fn: Option<Rc<dyn BackwardOp>>,
}

impl ValueData {
    /// Creates the record of a leaf node.
    pub fn new(data: f64, label: impl Into<String>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            label: label.into(),
            op: String::new(),
            grad_fn: None,
        }
    }

    /// Creates the record of a node produced by an operation.
    pub(crate) fn from_op(data: f64, op: impl Into<String>, grad_fn: Rc<dyn BackwardOp>) -> Self {
        ValueData {
            data,
            grad: 0.0,
            label: String::new(),
            op: op.into(),
            grad_fn: Some(grad_fn),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl Debug for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("label", &self.label)
            .field("op", &self.op)
            .field(
                "operands",
                &self.grad_fn.as_ref().map_or(0, |op| op.inputs().len()),
            )
            .finish()
    }
}

impl Drop for ValueData {
    /// Detaches the chain of producing operations iteratively.
    ///
    /// The default drop would recurse once per node along an operand chain. Here
    /// each operand whose last handle is about to go has its `grad_fn` taken out
    /// first, so no drop ever nests more than one level deep.
    fn drop(&mut self) {
        let Some(grad_fn) = self.grad_fn.take() else {
            return;
        };
        let mut pending: Vec<Value> = grad_fn.inputs().into_iter().cloned().collect();
        drop(grad_fn);

        while let Some(node) = pending.pop() {
            if Rc::strong_count(&node.data) == 1 {
                let grad_fn = node.write_data().grad_fn.take();
                if let Some(grad_fn) = grad_fn {
                    pending.extend(grad_fn.inputs().into_iter().cloned());
                }
            }
        }
    }
}
