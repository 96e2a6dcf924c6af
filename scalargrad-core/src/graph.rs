//! Arena storage for the computation graph.
//!
//! Every node created through a [`Graph`] handle lives in a single `Vec` and
//! is addressed by a stable [`NodeId`] index. Parent links are indices into
//! the same arena, so the traversal in [`crate::autograd`] never needs
//! identity-based hashing: a `Vec<bool>` sized to the arena is enough.

use crate::autograd::backward_op::Op;
use crate::value::Value;
use num_traits::Float;
use std::cell::RefCell;
use std::rc::Rc;

/// Stable index of a node inside a [`Graph`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single scalar node: forward value, accumulated gradient, and the tagged
/// operation (with parent indices) that produced it.
///
/// `data` and `op` are immutable after creation; only `grad` mutates, and
/// only during a backward pass or an explicit `zero_grad`.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) grad: T,
    pub(crate) op: Op,
}

#[derive(Debug)]
pub(crate) struct GraphInner<T> {
    pub(crate) nodes: Vec<Node<T>>,
}

/// Shared handle to a node arena.
///
/// Cloning a `Graph` is shallow: both handles point at the same arena, and
/// nodes created through either are visible through both. The engine is
/// single-threaded, hence `Rc<RefCell<_>>` rather than a lock.
pub struct Graph<T> {
    pub(crate) inner: Rc<RefCell<GraphInner<T>>>,
}

impl<T> Clone for Graph<T> {
    fn clone(&self) -> Self {
        Graph {
            inner: Rc::clone(&self.inner), // Clone the Rc, not the arena
        }
    }
}

impl<T: Float> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            inner: Rc::new(RefCell::new(GraphInner { nodes: Vec::new() })),
        }
    }

    /// Creates a leaf node (an input or constant) with the given forward
    /// value and zero gradient.
    pub fn leaf(&self, data: T) -> Value<T> {
        self.push(data, Op::Leaf)
    }

    /// Allocates a new node in the arena and returns a handle to it.
    /// Always appends: an operation can only reference already-existing
    /// indices, which keeps the graph acyclic by construction.
    pub(crate) fn push(&self, data: T, op: Op) -> Value<T> {
        let mut inner = self.inner.borrow_mut();
        let id = NodeId(inner.nodes.len());
        inner.nodes.push(Node {
            data,
            grad: T::zero(),
            op,
        });
        Value::from_parts(self.clone(), id)
    }

    /// Number of nodes allocated in this graph.
    pub fn len(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    /// Returns `true` if no node has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().nodes.is_empty()
    }

    /// Resets the gradient of every node in the graph to zero.
    ///
    /// Backward passes only ever accumulate; call this between passes when
    /// fresh gradients are wanted.
    pub fn zero_grad(&self) {
        let mut inner = self.inner.borrow_mut();
        for node in inner.nodes.iter_mut() {
            node.grad = T::zero();
        }
    }

    /// Whether `other` shares this graph's arena.
    pub(crate) fn same_arena(&self, other: &Graph<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Float> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
