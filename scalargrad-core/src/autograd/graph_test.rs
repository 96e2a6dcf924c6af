use super::*;
use crate::graph::Graph;
use approx::assert_relative_eq;

#[test]
fn test_diamond_accumulates_both_paths() {
    // a feeds both m = a*2 and n = a*3; y = m + n.
    let g = Graph::new();
    let a = g.leaf(1.0f64);
    let m = &a * 2.0;
    let n = &a * 3.0;
    let y = &m + &n;
    y.backward();
    assert_eq!(y.data(), 5.0);
    assert_eq!(a.grad(), 5.0); // 2 + 3, one contribution per path
}

#[test]
fn test_topo_order_parents_after_children() {
    let g = Graph::new();
    let a = g.leaf(1.0f64);
    let m = &a * 2.0;
    let n = &a * 3.0;
    let y = &m + &n;

    let inner = y.graph().inner.borrow();
    let order = topo_sort(&inner.nodes, y.id());
    assert_eq!(order.len(), g.len());
    assert_eq!(*order.last().unwrap(), y.id());

    // Post-order: every node's parents precede it.
    let position = |id: NodeId| order.iter().position(|&o| o == id).unwrap();
    for &id in &order {
        for parent in inner.nodes[id.0].op.parents() {
            assert!(
                position(parent) < position(id),
                "parent {} ordered after child {}",
                parent.0,
                id.0
            );
        }
    }
}

#[test]
fn test_reused_node_grad_accumulates() {
    let g = Graph::new();
    let x = g.leaf(4.0f64);
    let y = &x + &x;
    y.backward();
    assert_eq!(x.grad(), 2.0);
}

#[test]
fn test_square_via_self_multiplication() {
    // y = x*x + 2 at x = 3: data 11, dy/dx = 2x = 6.
    let g = Graph::new();
    let x = g.leaf(3.0f64);
    let y = &(&x * &x) + 2.0;
    y.backward();
    assert_eq!(y.data(), 11.0);
    assert_eq!(x.grad(), 6.0);
}

#[test]
fn test_repeated_backward_accumulates() {
    // No implicit reset: a second pass adds onto the first.
    let g = Graph::new();
    let x = g.leaf(5.0f64);
    let y = &x * 2.0;
    y.backward();
    assert_eq!(x.grad(), 2.0);
    y.backward();
    assert_eq!(x.grad(), 4.0);

    g.zero_grad();
    y.backward();
    assert_eq!(x.grad(), 2.0);
}

#[test]
fn test_data_unchanged_by_backward() {
    let g = Graph::new();
    let x = g.leaf(1.5f64);
    let y = (&x * &x).tanh();
    let y_data = y.data();
    y.backward();
    y.backward();
    assert_eq!(x.data(), 1.5);
    assert_eq!(y.data(), y_data);
}

#[test]
fn test_chain_rule_through_tanh() {
    // y = tanh(a * b): da = (1 - tanh(ab)^2) * b.
    let g = Graph::new();
    let a = g.leaf(0.7f64);
    let b = g.leaf(-1.3f64);
    let y = (&a * &b).tanh();
    y.backward();
    let t = (0.7f64 * -1.3).tanh();
    assert_relative_eq!(y.data(), t, epsilon = 1e-12);
    assert_relative_eq!(a.grad(), (1.0 - t * t) * -1.3, epsilon = 1e-12);
    assert_relative_eq!(b.grad(), (1.0 - t * t) * 0.7, epsilon = 1e-12);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    // A recursive traversal would blow the call stack well before 50k.
    let g = Graph::new();
    let x = g.leaf(0.0f64);
    let mut y = x.clone();
    for _ in 0..50_000 {
        y = &y + 1.0;
    }
    y.backward();
    assert_eq!(y.data(), 50_000.0);
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_shared_subexpression() {
    // s = a + b used by both products: ds contributions sum.
    let g = Graph::new();
    let a = g.leaf(2.0f64);
    let b = g.leaf(3.0f64);
    let s = &a + &b;
    let y = &(&s * 2.0) + &(&s * &s);
    y.backward();
    assert_eq!(y.data(), 35.0);
    // dy/ds = 2 + 2s = 12, and ds/da = ds/db = 1.
    assert_eq!(s.grad(), 12.0);
    assert_eq!(a.grad(), 12.0);
    assert_eq!(b.grad(), 12.0);
}
