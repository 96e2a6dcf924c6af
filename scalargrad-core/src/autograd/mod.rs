//! Reverse-mode differentiation over the node arena.
//!
//! The graph is built eagerly during forward operations; nothing here runs
//! until [`crate::Value::backward`] is called. The backward pass is two
//! steps: an iterative post-order topological sort ([`graph::topo_sort`]),
//! then a single sweep over the reversed order dispatching each node's
//! tagged operation ([`backward_op::Op`]).

pub(crate) mod backward_op;
pub(crate) mod graph;

pub mod grad_check;
