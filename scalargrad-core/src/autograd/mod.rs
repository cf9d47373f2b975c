//! # Autograd
//!
//! Reverse-mode differentiation over the graph of [`Value`](crate::Value) nodes.
//!
//! - [`backward_op`]: the [`BackwardOp`] trait every differentiable operation implements.
//! - [`graph`]: topological ordering of the nodes reachable from a root.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{topological_sort, NodeId};
