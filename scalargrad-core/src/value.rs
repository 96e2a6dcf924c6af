//! The public handle type for a scalar node in a computation graph.

use crate::autograd;
use crate::graph::{Graph, NodeId};
use num_traits::Float;
use std::fmt::{self, Debug};
use std::ops::AddAssign;

/// Handle to a scalar node in a [`Graph`] arena.
///
/// A `Value` is cheap to clone (a graph handle plus an index) and is the unit
/// every arithmetic operation works on. The forward value is computed eagerly
/// at construction; gradients are filled in later by [`Value::backward`].
pub struct Value<T> {
    graph: Graph<T>,
    id: NodeId,
}

impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Value {
            graph: self.graph.clone(),
            id: self.id,
        }
    }
}

impl<T: Float> Value<T> {
    pub(crate) fn from_parts(graph: Graph<T>, id: NodeId) -> Self {
        Value { graph, id }
    }

    /// The graph this value belongs to.
    pub fn graph(&self) -> &Graph<T> {
        &self.graph
    }

    /// Arena index of this value's node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward value. Immutable after construction, no matter how many
    /// backward passes run.
    pub fn data(&self) -> T {
        self.graph.inner.borrow().nodes[self.id.0].data
    }

    /// Accumulated gradient of the last `backward()` output with respect to
    /// this node. Zero until a backward pass reaches this node.
    pub fn grad(&self) -> T {
        self.graph.inner.borrow().nodes[self.id.0].grad
    }

    /// Returns `true` if this node has no parents (an input or constant).
    pub fn is_leaf(&self) -> bool {
        self.graph.inner.borrow().nodes[self.id.0].op.is_leaf()
    }

    /// Symbol of the operation that created this node (`"+"`, `"*"`,
    /// `"tanh"`, or `""` for a leaf). Diagnostic only.
    pub fn op_symbol(&self) -> &'static str {
        self.graph.inner.borrow().nodes[self.id.0].op.symbol()
    }

    /// Resets this node's gradient to zero.
    ///
    /// Backward passes accumulate into existing gradients and never reset
    /// them; clearing between passes is the caller's responsibility, either
    /// per node here or graph-wide via [`Graph::zero_grad`].
    pub fn zero_grad(&self) {
        self.graph.inner.borrow_mut().nodes[self.id.0].grad = T::zero();
    }
}

impl<T: Float + AddAssign> Value<T> {
    /// Computes the gradient of this value w.r.t. every node reachable
    /// through its ancestors.
    ///
    /// Seeds this node's `grad` with 1, then walks the reverse topological
    /// order, accumulating each node's contribution into its parents with
    /// `+=`. Calling `backward()` again without clearing gradients
    /// accumulates further; see [`Value::zero_grad`].
    pub fn backward(&self) {
        if self.is_leaf() {
            log::debug!("backward() called on a leaf node; only the seed gradient is applied.");
        }
        let mut inner = self.graph.inner.borrow_mut();
        autograd::graph::backward(&mut inner, self.id);
    }
}

/// Identity-based equality: same arena, same node.
impl<T: Float> PartialEq for Value<T> {
    fn eq(&self, other: &Self) -> bool {
        self.graph.same_arena(&other.graph) && self.id == other.id
    }
}

impl<T: Float> Eq for Value<T> {}

impl<T: Float + fmt::Display> fmt::Display for Value<T> {
    /// Renders the forward value and current gradient, e.g. `Value(3 | 6)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({} | {})", self.data(), self.grad())
    }
}

impl<T: Float + Debug> Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("id", &self.id.0)
            .field("data", &self.data())
            .field("grad", &self.grad())
            .field("op", &self.op_symbol())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn test_display_shows_data_and_grad() {
        let g = Graph::new();
        let x = g.leaf(3.0f64);
        let y = &x * &x;
        y.backward();
        assert_eq!(format!("{}", x), "Value(3 | 6)");
    }

    #[test]
    fn test_identity_equality() {
        let g = Graph::new();
        let x = g.leaf(1.0f64);
        let same = x.clone();
        let other = g.leaf(1.0f64);
        assert_eq!(x, same);
        assert_ne!(x, other); // equal data, distinct nodes

        let g2 = Graph::new();
        let foreign = g2.leaf(1.0f64);
        assert_ne!(x, foreign);
    }

    #[test]
    fn test_op_symbol() {
        let g = Graph::new();
        let a = g.leaf(1.0f64);
        let b = g.leaf(2.0f64);
        assert_eq!(a.op_symbol(), "");
        assert_eq!((&a + &b).op_symbol(), "+");
        assert_eq!((&a * &b).op_symbol(), "*");
        assert_eq!(a.tanh().op_symbol(), "tanh");
    }

    #[test]
    fn test_backward_on_leaf_seeds_self() {
        let g = Graph::new();
        let x = g.leaf(2.0f64);
        x.backward();
        // d x / d x = 1
        assert_eq!(x.grad(), 1.0);
    }
}
