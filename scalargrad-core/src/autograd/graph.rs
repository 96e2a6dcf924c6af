//! Topological ordering and the gradient drive.

use crate::graph::{GraphInner, Node, NodeId};
use num_traits::Float;
use std::ops::AddAssign;

/// Two-phase entry on the explicit traversal stack: a node is first entered
/// (parents scheduled), then exited (appended to the post-order).
enum Visit {
    Enter(NodeId),
    Exit(NodeId),
}

/// Builds a post-order topological sort of the nodes reachable from `root`
/// through parent links.
///
/// Iterative on an explicit stack, so graph depth is bounded by the heap
/// rather than the call stack. The visited set is a `Vec<bool>` sized to the
/// arena; two nodes with equal data are still distinct indices, so identity
/// is structural for free. In the returned order every node appears after
/// all of its parents; the backward driver walks it reversed, which puts
/// each node before its parents and guarantees a node's gradient is fully
/// accumulated before it propagates further.
pub(crate) fn topo_sort<T>(nodes: &[Node<T>], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::new();
    let mut stack = vec![Visit::Enter(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(id) => {
                if visited[id.0] {
                    continue;
                }
                visited[id.0] = true;
                stack.push(Visit::Exit(id));
                for parent in nodes[id.0].op.parents() {
                    if !visited[parent.0] {
                        stack.push(Visit::Enter(parent));
                    }
                }
            }
            Visit::Exit(id) => order.push(id),
        }
    }
    order
}

/// Runs the backward pass from `root`.
///
/// Seeds `root.grad` with 1 (∂root/∂root), then walks the reverse
/// topological order invoking each node's propagation rule. Gradients are
/// only ever accumulated; a second call without an intervening reset adds
/// on top of the previous pass.
pub(crate) fn backward<T: Float + AddAssign>(inner: &mut GraphInner<T>, root: NodeId) {
    let order = topo_sort(&inner.nodes, root);
    log::trace!(
        "backward: {} node(s) reachable from node {}",
        order.len(),
        root.0
    );

    inner.nodes[root.0].grad = T::one();
    for &id in order.iter().rev() {
        // Copy the tag and scalars out so `propagate` can borrow the arena
        // mutably.
        let op = inner.nodes[id.0].op;
        let out_data = inner.nodes[id.0].data;
        let upstream = inner.nodes[id.0].grad;
        op.propagate(&mut inner.nodes, out_data, upstream);
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
