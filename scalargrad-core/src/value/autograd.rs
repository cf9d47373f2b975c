// src/value/autograd.rs

use crate::autograd::topological_sort;
use crate::value::Value;

impl Value {
    /// Computes the gradient of this node with respect to every node it depends on.
    ///
    /// The nodes reachable from `self` are put in reverse topological order, this
    /// node's gradient is seeded with `1.0`, and each node's backward rule runs
    /// exactly once, after all of its consumers have contributed to its gradient.
    ///
    /// Gradients are accumulated, never reset: reset parameters (and any
    /// intermediate node that is reused) before calling this again on the same graph.
    /// Calling it on a leaf only seeds that leaf's gradient.
    ///
    /// The traversal uses an explicit stack, so very long chains do not overflow
    /// the call stack.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        log::debug!(
            "backward(): {} node(s) reachable from root (value = {})",
            sorted_nodes.len(),
            self.value()
        );

        self.set_gradient(1.0);

        for node in sorted_nodes.iter().rev() {
            // Release the borrow on `node` before touching the operands.
            let (grad_fn, grad_output, output) = {
                let guard = node.read_data();
                (guard.grad_fn.clone(), guard.grad, guard.data)
            };
            let Some(grad_fn) = grad_fn else {
                continue;
            };

            let contributions = grad_fn.backward(grad_output, output);
            let inputs = grad_fn.inputs();
            debug_assert_eq!(
                inputs.len(),
                contributions.len(),
                "BackwardOp {:?} returned {} contributions for {} inputs",
                grad_fn,
                contributions.len(),
                inputs.len()
            );
            for (input, delta) in inputs.into_iter().zip(contributions) {
                input.add_to_gradient(delta);
            }
        }
    }
}

#[cfg(test)]
#[path = "autograd_test.rs"]
mod tests;
