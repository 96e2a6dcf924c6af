use crate::graph::{Node, NodeId};
use num_traits::Float;
use std::ops::AddAssign;

/// Tagged operation kind stored on each node.
///
/// The payload is the parent indices recorded at construction time (at most
/// two for this algebra). The backward driver dispatches on the tag instead
/// of invoking a stored callable, so nodes stay `Copy`-cheap and the arena
/// never holds closures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    /// Input or constant; propagates nothing.
    Leaf,
    /// `out = a + b`; both parents receive the upstream gradient unchanged.
    Add(NodeId, NodeId),
    /// `out = a * b`; each parent receives the other's data times upstream.
    Mul(NodeId, NodeId),
    /// `out = tanh(a)`; parent receives `(1 - out²) * upstream`, expressed
    /// in terms of the output to avoid recomputing the tanh.
    Tanh(NodeId),
}

impl Op {
    pub(crate) fn is_leaf(self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Diagnostic label of the operation.
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(_, _) => "+",
            Op::Mul(_, _) => "*",
            Op::Tanh(_) => "tanh",
        }
    }

    /// Parent indices, in operand order.
    pub(crate) fn parents(self) -> impl Iterator<Item = NodeId> {
        let pair = match self {
            Op::Leaf => [None, None],
            Op::Add(a, b) | Op::Mul(a, b) => [Some(a), Some(b)],
            Op::Tanh(a) => [Some(a), None],
        };
        pair.into_iter().flatten()
    }

    /// Accumulates this node's contribution into its parents' gradients.
    ///
    /// `out_data` and `upstream` are the producing node's forward value and
    /// accumulated gradient, copied out by the driver before dispatch so the
    /// arena can be borrowed mutably here. Accumulation is `+=` throughout:
    /// a parent reached through several paths sums every contribution, and
    /// `a == b` (e.g. `x * x`) simply applies both terms to the same slot.
    pub(crate) fn propagate<T: Float + AddAssign>(
        self,
        nodes: &mut [Node<T>],
        out_data: T,
        upstream: T,
    ) {
        match self {
            Op::Leaf => {}
            Op::Add(a, b) => {
                nodes[a.0].grad += upstream;
                nodes[b.0].grad += upstream;
            }
            Op::Mul(a, b) => {
                let a_data = nodes[a.0].data;
                let b_data = nodes[b.0].data;
                nodes[a.0].grad += b_data * upstream;
                nodes[b.0].grad += a_data * upstream;
            }
            Op::Tanh(a) => {
                nodes[a.0].grad += (T::one() - out_data * out_data) * upstream;
            }
        }
    }
}
