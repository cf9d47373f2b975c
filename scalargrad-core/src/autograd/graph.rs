use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a graph node: the address of its shared `RefCell<ValueData>`.
///
/// Clones of a [`Value`] share the allocation and therefore the id.
pub type NodeId = *const RefCell<ValueData>;

/// Returns every node reachable from `root` in post-order: each node comes after
/// all of its operands, and `root` comes last.
///
/// Iterating the result in reverse gives a reverse topological order, which is the
/// order `backward()` runs the local-gradient rules in. Shared operands appear once.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list = Vec::new();
    build_topo(root, &mut visited, &mut sorted_list);
    sorted_list
}

/// Builds a topological sort of the computation graph with an explicit stack,
/// so chain depth is bounded by the heap rather than the call stack.
/// Uses a `HashSet` keyed by node identity (pointer address).
///
/// Each stack entry is a node and whether its operands have already been pushed.
/// Operands are pushed in reverse so they are expanded in their original order.
fn build_topo(root: &Value, visited: &mut HashSet<NodeId>, sorted_list: &mut Vec<Value>) {
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];
    while let Some((node, expanded)) = stack.pop() {
        let node_id = node.get_node_id();
        if expanded {
            log::trace!("[build_topo] adding node {:?} to sorted_list", node_id);
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node_id) {
            log::trace!("[build_topo] node {:?} already visited", node_id);
            continue;
        }

        let operands = node.operands();
        stack.push((node, true));
        for input in operands.into_iter().rev() {
            if !visited.contains(&input.get_node_id()) {
                stack.push((input, false));
            }
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
