use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::Float;
use std::ops::Add;

// --- Forward Operation ---

/// Adds two values, recording an `Add` node with both parents.
///
/// During backward each parent receives the upstream gradient unchanged
/// (the derivative of a sum with respect to either addend is 1).
pub fn add_op<T: Float>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    if !a.graph().same_arena(b.graph()) {
        return Err(ScalarGradError::GraphMismatch { operation: "add" });
    }
    let data = a.data() + b.data();
    Ok(a.graph().push(data, Op::Add(a.id(), b.id())))
}

// --- Operator sugar ---
// The only dynamic failure is mixing arenas, a programming error; the
// operators fail fast at the call site. Use `add_op` to handle it instead.

impl<'a, 'b, T: Float> Add<&'b Value<T>> for &'a Value<T> {
    type Output = Value<T>;

    fn add(self, rhs: &'b Value<T>) -> Value<T> {
        add_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Float> Add for Value<T> {
    type Output = Value<T>;

    fn add(self, rhs: Value<T>) -> Value<T> {
        &self + &rhs
    }
}

impl<T: Float> Add<&Value<T>> for Value<T> {
    type Output = Value<T>;

    fn add(self, rhs: &Value<T>) -> Value<T> {
        &self + rhs
    }
}

impl<T: Float> Add<Value<T>> for &Value<T> {
    type Output = Value<T>;

    fn add(self, rhs: Value<T>) -> Value<T> {
        self + &rhs
    }
}

// Plain-number operands are promoted to leaves in the same arena.

impl<T: Float> Add<T> for &Value<T> {
    type Output = Value<T>;

    fn add(self, rhs: T) -> Value<T> {
        let rhs = self.graph().leaf(rhs);
        self + &rhs
    }
}

impl<T: Float> Add<T> for Value<T> {
    type Output = Value<T>;

    fn add(self, rhs: T) -> Value<T> {
        &self + rhs
    }
}

// Reverse form (`2.0 + &v`). Coherence forbids a generic impl on the scalar
// side, so the supported float types are listed concretely.
macro_rules! impl_scalar_lhs_add {
    ($($t:ty),*) => {$(
        impl Add<&Value<$t>> for $t {
            type Output = Value<$t>;

            fn add(self, rhs: &Value<$t>) -> Value<$t> {
                rhs + self // addition commutes
            }
        }

        impl Add<Value<$t>> for $t {
            type Output = Value<$t>;

            fn add(self, rhs: Value<$t>) -> Value<$t> {
                &rhs + self
            }
        }
    )*};
}

impl_scalar_lhs_add!(f32, f64);

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
