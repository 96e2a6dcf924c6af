use crate::autograd::backward_op::Op;
use crate::value::Value;
use num_traits::Float;

// --- Forward Operation ---

/// Hyperbolic tangent, recording a `Tanh` node with a single parent.
///
/// The gradient is expressed through the output, `1 - out²`, so backward
/// never recomputes the tanh. Infallible: the single operand cannot cross
/// arenas.
pub fn tanh_op<T: Float>(a: &Value<T>) -> Value<T> {
    a.graph().push(a.data().tanh(), Op::Tanh(a.id()))
}

impl<T: Float> Value<T> {
    /// Applies the hyperbolic tangent to this value. See [`tanh_op`].
    pub fn tanh(&self) -> Value<T> {
        tanh_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
