//! A two-input neuron with a tanh activation, differentiated end to end.
//!
//! Run with: `cargo run --example tanh_neuron`

use scalargrad_core::Graph;

fn main() {
    let g = Graph::new();

    // Inputs and parameters.
    let x1 = g.leaf(2.0f64);
    let x2 = g.leaf(0.0f64);
    let w1 = g.leaf(-3.0f64);
    let w2 = g.leaf(1.0f64);
    let b = g.leaf(6.881_373_587_019_543f64);

    // n = x1*w1 + x2*w2 + b; o = tanh(n)
    let n = &(&(&x1 * &w1) + &(&x2 * &w2)) + &b;
    let o = n.tanh();

    o.backward();

    println!("o  = {o}");
    println!("x1 = {x1}");
    println!("w1 = {w1}");
    println!("x2 = {x2}");
    println!("w2 = {w2}");
    println!("b  = {b}");
    println!("graph holds {} nodes", g.len());
}
