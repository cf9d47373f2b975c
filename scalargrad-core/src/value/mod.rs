// src/value/mod.rs

use crate::autograd::{BackwardOp, NodeId};
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd;
mod traits;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** The same node can be the operand of several
///     operations (`x * x`, or a weight used by many expressions) without copying.
/// 2.  **Interior Mutability:** The gradient is accumulated, and a parameter's
///     value updated, through shared handles.
///
/// Cloning a `Value` is shallow: the clone is the same node.
///
/// Graph construction is a single-threaded affair, so `Value` is neither `Send`
/// nor `Sync`. Independent graphs may of course live on different threads.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node (an input or a trainable parameter) with no label.
    pub fn new(data: f64) -> Self {
        Value::from_data(ValueData::new(data, ""))
    }

    /// Creates a labelled leaf node. The label is only used for debugging output.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Value::from_data(ValueData::new(data, label))
    }

    /// Creates the output node of an operation. The forward value has already been
    /// computed by the caller; `grad_fn` records the operands and the derivative rule.
    pub(crate) fn from_op<B>(data: f64, op: impl Into<String>, grad_fn: B) -> Self
    where
        B: BackwardOp + 'static,
    {
        Value::from_data(ValueData::from_op(data, op, Rc::new(grad_fn)))
    }

    fn from_data(value_data: ValueData) -> Self {
        Value {
            data: Rc::new(RefCell::new(value_data)),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Returns the identity of this node, shared by all of its clones.
    pub fn get_node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.data, &b.data)
    }

    /// Raises this value to a constant power. The exponent is not a graph node.
    pub fn pow(&self, exponent: f64) -> Value {
        crate::ops::pow_op(self, exponent)
    }

    /// `e` raised to this value.
    pub fn exp(&self) -> Value {
        crate::ops::exp_op(self)
    }

    /// Hyperbolic tangent of this value.
    pub fn tanh(&self) -> Value {
        crate::ops::tanh_op(self)
    }
}

/// Creates a leaf node, optionally labelled.
pub fn make_leaf(data: f64, label: Option<&str>) -> Value {
    match label {
        Some(label) => Value::with_label(data, label),
        None => Value::new(data),
    }
}
