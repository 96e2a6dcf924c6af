use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::value::Value;
use num_traits::Float;
use std::ops::Mul;

// --- Forward Operation ---

/// Multiplies two values, recording a `Mul` node with both parents.
///
/// During backward the product rule applies: each parent receives the other
/// operand's forward value times the upstream gradient. The operands'
/// `data` is read through the recorded indices, so nothing is copied at
/// construction time.
pub fn mul_op<T: Float>(a: &Value<T>, b: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    if !a.graph().same_arena(b.graph()) {
        return Err(ScalarGradError::GraphMismatch { operation: "mul" });
    }
    let data = a.data() * b.data();
    Ok(a.graph().push(data, Op::Mul(a.id(), b.id())))
}

// --- Operator sugar ---

impl<'a, 'b, T: Float> Mul<&'b Value<T>> for &'a Value<T> {
    type Output = Value<T>;

    fn mul(self, rhs: &'b Value<T>) -> Value<T> {
        mul_op(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Float> Mul for Value<T> {
    type Output = Value<T>;

    fn mul(self, rhs: Value<T>) -> Value<T> {
        &self * &rhs
    }
}

impl<T: Float> Mul<&Value<T>> for Value<T> {
    type Output = Value<T>;

    fn mul(self, rhs: &Value<T>) -> Value<T> {
        &self * rhs
    }
}

impl<T: Float> Mul<Value<T>> for &Value<T> {
    type Output = Value<T>;

    fn mul(self, rhs: Value<T>) -> Value<T> {
        self * &rhs
    }
}

impl<T: Float> Mul<T> for &Value<T> {
    type Output = Value<T>;

    fn mul(self, rhs: T) -> Value<T> {
        let rhs = self.graph().leaf(rhs);
        self * &rhs
    }
}

impl<T: Float> Mul<T> for Value<T> {
    type Output = Value<T>;

    fn mul(self, rhs: T) -> Value<T> {
        &self * rhs
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<&Value<$t>> for $t {
            type Output = Value<$t>;

            fn mul(self, rhs: &Value<$t>) -> Value<$t> {
                rhs * self // multiplication commutes
            }
        }

        impl Mul<Value<$t>> for $t {
            type Output = Value<$t>;

            fn mul(self, rhs: Value<$t>) -> Value<$t> {
                &rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
