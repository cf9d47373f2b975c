// src/value/traits.rs

use crate::value::Value;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

impl Clone for Value {
    /// Shallow clone: the result is a second handle to the same node.
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "Value(data={}, grad={}, op={:?}, label={:?}, operands={})",
            guard.data,
            guard.grad,
            guard.op,
            guard.label,
            guard.grad_fn.as_ref().map_or(0, |op| op.inputs().len())
        )
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={}", guard.data, guard.grad)?;
        if !guard.label.is_empty() {
            write!(f, ", label=\"{}\"", guard.label)?;
        }
        write!(f, ")")
    }
}

/// Equality is node identity, not numeric equality: two leaves holding `1.0` are
/// different nodes.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Value::ptr_eq(self, other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get_node_id().hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}
